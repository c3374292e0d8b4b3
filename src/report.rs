use std::fmt::{self, Display};

use serde::Serialize;

use crate::algorithm::hub::{NoPathReason, RouteOutcome};
use crate::config::RevisitPolicy;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Found,
    NoPath,
    UndefinedNegativeCycle,
    /// The query itself was rejected, e.g. an unknown label
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    Unreachable,
    Overlap,
    ExcludedPair,
}

impl From<NoPathReason> for ReasonCode {
    fn from(reason: NoPathReason) -> Self {
        match reason {
            NoPathReason::Unreachable => ReasonCode::Unreachable,
            NoPathReason::Overlap => ReasonCode::Overlap,
            NoPathReason::ExcludedPair => ReasonCode::ExcludedPair,
        }
    }
}

/// One answered query, ready for printing or JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub start: String,
    pub end: String,
    pub hub: String,
    pub policy: RevisitPolicy,
    pub status: QueryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReasonCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryReport {
    pub fn new<L: Display>(
        start: &L,
        end: &L,
        hub: &L,
        policy: RevisitPolicy,
        outcome: &RouteOutcome<L, i64>,
    ) -> Self {
        let (status, reason, distance, path) = match outcome {
            RouteOutcome::Found(route) => (
                QueryStatus::Found,
                None,
                Some(route.distance),
                route.path.iter().map(|l| l.to_string()).collect::<Vec<_>>(),
            ),
            RouteOutcome::NoPath(reason) => (QueryStatus::NoPath, Some(ReasonCode::from(*reason)), None, Vec::new()),
            RouteOutcome::NegativeCycle => (QueryStatus::UndefinedNegativeCycle, None, None, Vec::new()),
        };

        QueryReport {
            start: start.to_string(),
            end: end.to_string(),
            hub: hub.to_string(),
            policy,
            status,
            reason,
            distance,
            path,
            error: None,
        }
    }

    /// Entry for a query that could not be answered, so reports stay aligned
    /// with the input queries
    pub fn failed<L: Display>(start: &L, end: &L, hub: &L, policy: RevisitPolicy, err: &Error) -> Self {
        QueryReport {
            start: start.to_string(),
            end: end.to_string(),
            hub: hub.to_string(),
            policy,
            status: QueryStatus::Error,
            reason: None,
            distance: None,
            path: Vec::new(),
            error: Some(err.to_string()),
        }
    }
}

impl Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "//** Shortest distance D and shortest path from Source node {} to Destination node {} via node {} ({}); **//",
            self.start,
            self.end,
            self.hub,
            self.policy.name()
        )?;
        writeln!(f)?;

        match (self.status, self.reason) {
            (QueryStatus::Found, _) => {
                writeln!(f, "Shortest Path: {}", self.path.join(", "))?;
                if let Some(distance) = self.distance {
                    writeln!(f, "Shortest Distance: {}", distance)?;
                }
            }
            (QueryStatus::NoPath, Some(ReasonCode::Overlap)) => {
                writeln!(f, "No valid path (paths would overlap - violates no-revisit constraint)")?
            }
            (QueryStatus::NoPath, Some(ReasonCode::ExcludedPair)) => {
                writeln!(f, "No path (pair not tabulated under the no-revisit policy)")?
            }
            (QueryStatus::NoPath, _) => writeln!(f, "No path exists (disconnected components)")?,
            (QueryStatus::UndefinedNegativeCycle, _) => {
                writeln!(f, "Routing undefined (negative cycle reachable from hub)")?
            }
            (QueryStatus::Error, _) => {
                writeln!(f, "Query failed: {}", self.error.as_deref().unwrap_or("unknown error"))?
            }
        }
        writeln!(f)
    }
}

/// One report per query, in query order; failed queries become error entries
pub fn build_reports<L: Display>(
    queries: &[(L, L)],
    hub: &L,
    policy: RevisitPolicy,
    outcomes: Vec<Result<RouteOutcome<L, i64>>>,
) -> Vec<QueryReport> {
    queries
        .iter()
        .zip(outcomes)
        .map(|((s, e), outcome)| match outcome {
            Ok(outcome) => QueryReport::new(s, e, hub, policy, &outcome),
            Err(err) => {
                log::error!("Query {} -> {} failed: {}", s, e, err);
                QueryReport::failed(s, e, hub, policy, &err)
            }
        })
        .collect()
}

/// Renders every report as text, in order
pub fn render_text(reports: &[QueryReport]) -> String {
    reports.iter().map(|r| r.to_string()).collect()
}

/// Renders the reports as pretty JSON
pub fn to_json(reports: &[QueryReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
