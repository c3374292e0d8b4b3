//! Hub-composed routing.
//!
//! A [`HubRouter`] runs one single-source solve rooted at the hub and answers
//! `start -> hub -> end` queries from it under two policies:
//!
//! * [`RevisitPolicy::AllowRevisits`]: each half path only has to exist, the
//!   two halves may share vertices.
//! * [`RevisitPolicy::NoRevisits`]: a [`PairTable`] over every ordered pair of
//!   distinct non-hub vertices, where pairs whose halves share a vertex other
//!   than the hub are rejected.

use std::sync::Arc;

use rayon::prelude::*;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::path;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::config::{RevisitPolicy, RouterConfig, SolverKind};
use crate::graph::{Graph, Label, NodeRegistry, UndirectedGraph, Weight};
use crate::{Error, Result};

/// A composed route through the hub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubRoute<L, W> {
    /// `dist(hub, start) + dist(hub, end)`
    pub distance: W,
    /// Labels from start to end inclusive, the hub appearing once
    pub path: Vec<L>,
}

/// Why a query produced no route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoPathReason {
    /// An endpoint is not reachable from the hub
    Unreachable,
    /// Both halves exist but share a non-hub vertex
    Overlap,
    /// The pair is not tabulated by the no-revisit policy (an endpoint is the
    /// hub, or start and end coincide)
    ExcludedPair,
}

/// Answer to a single hub query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome<L, W> {
    Found(HubRoute<L, W>),
    NoPath(NoPathReason),
    /// The hub solve hit a negative cycle; routing is undefined
    NegativeCycle,
}

impl<L, W: Copy> RouteOutcome<L, W> {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn distance(&self) -> Option<W> {
        match self {
            RouteOutcome::Found(route) => Some(route.distance),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&[L]> {
        match self {
            RouteOutcome::Found(route) => Some(&route.path),
            _ => None,
        }
    }

    pub fn no_path_reason(&self) -> Option<NoPathReason> {
        match self {
            RouteOutcome::NoPath(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Lifecycle of a router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubStatus {
    /// No successful solve yet
    Pending,
    Ready,
    /// Terminal: the hub reaches a negative cycle
    NegativeCycle,
}

#[derive(Debug)]
enum HubState<W: Weight> {
    Pending,
    Ready(Arc<ShortestPathResult<W>>),
    NegativeCycle,
}

/// Answers hub-composed queries over a borrowed, immutable graph
#[derive(Debug)]
pub struct HubRouter<'g, L, W>
where
    L: Label,
    W: Weight,
{
    graph: &'g UndirectedGraph<L, W>,
    hub: usize,
    config: RouterConfig,
    state: HubState<W>,
}

impl<'g, L, W> HubRouter<'g, L, W>
where
    L: Label,
    W: Weight,
{
    /// Creates a router for `hub` with the default configuration
    pub fn new(graph: &'g UndirectedGraph<L, W>, hub: &L) -> Result<Self> {
        Self::with_config(graph, hub, RouterConfig::default())
    }

    /// Creates a router for `hub`; fails if the hub is not a graph node
    pub fn with_config(graph: &'g UndirectedGraph<L, W>, hub: &L, config: RouterConfig) -> Result<Self> {
        let hub = graph.index_of(hub)?;
        Ok(HubRouter {
            graph,
            hub,
            config,
            state: HubState::Pending,
        })
    }

    pub fn hub(&self) -> usize {
        self.hub
    }

    pub fn hub_label(&self) -> Result<&L> {
        self.graph.label_of(self.hub)
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn status(&self) -> HubStatus {
        match self.state {
            HubState::Pending => HubStatus::Pending,
            HubState::Ready(_) => HubStatus::Ready,
            HubState::NegativeCycle => HubStatus::NegativeCycle,
        }
    }

    /// The hub-rooted solver output, once ready
    pub fn shortest_paths(&self) -> Option<&ShortestPathResult<W>> {
        match &self.state {
            HubState::Ready(result) => Some(result.as_ref()),
            _ => None,
        }
    }

    /// Runs the solver selected by the configuration
    pub fn solve(&mut self) -> Result<HubStatus> {
        let kind = match self.config.solver {
            SolverKind::Auto if self.graph.has_negative_weight() => SolverKind::BellmanFord,
            SolverKind::Auto => SolverKind::Dijkstra,
            other => other,
        };

        match kind {
            SolverKind::BellmanFord => self.solve_with(&BellmanFord::new()),
            _ => self.solve_with(&Dijkstra::new()),
        }
    }

    /// Runs `algorithm` rooted at the hub.
    ///
    /// A negative cycle moves the router into the terminal
    /// [`HubStatus::NegativeCycle`] state and is not returned as an error.
    pub fn solve_with<A>(&mut self, algorithm: &A) -> Result<HubStatus>
    where
        A: ShortestPathAlgorithm<W, UndirectedGraph<L, W>>,
    {
        if let HubState::NegativeCycle = self.state {
            return Ok(HubStatus::NegativeCycle);
        }

        match algorithm.compute_shortest_paths(self.graph, self.hub) {
            Ok(result) => {
                log::info!(
                    "{} from hub {}: {} of {} vertices reachable",
                    algorithm.name(),
                    self.hub,
                    result.reachable_count(),
                    self.graph.vertex_count()
                );
                self.state = HubState::Ready(Arc::new(result));
            }
            Err(Error::NegativeCycle { vertex }) => {
                log::warn!("{} found a negative cycle reachable from hub {}", algorithm.name(), vertex);
                self.state = HubState::NegativeCycle;
            }
            Err(err) => return Err(err),
        }

        Ok(self.status())
    }

    fn ready(&self) -> Result<Option<&Arc<ShortestPathResult<W>>>> {
        match &self.state {
            HubState::Pending => Err(Error::NotSolved),
            HubState::Ready(result) => Ok(Some(result)),
            HubState::NegativeCycle => Ok(None),
        }
    }

    /// Answers `start -> hub -> end` with revisits allowed
    pub fn query(&self, start: &L, end: &L) -> Result<RouteOutcome<L, W>> {
        let s = self.graph.index_of(start)?;
        let e = self.graph.index_of(end)?;

        let result = match self.ready()? {
            Some(result) => result,
            None => return Ok(RouteOutcome::NegativeCycle),
        };

        let (to_start, to_end) = match (self.half_path(result, s), self.half_path(result, e)) {
            (Some(a), Some(b)) => (a, b),
            _ => return Ok(RouteOutcome::NoPath(NoPathReason::Unreachable)),
        };

        compose(self.graph.registry(), result.as_ref(), s, e, &to_start, &to_end)
    }

    fn half_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if !result.is_reachable(target) {
            return None;
        }
        path::reconstruct(self.hub, target, &result.predecessors)
    }

    /// Precomputes the no-revisit table over every ordered pair of distinct
    /// non-hub vertices
    pub fn no_revisit_table(&self) -> Result<PairTable<'g, L, W>> {
        let registry = self.graph.registry();
        let n = self.graph.vertex_count();

        let result = match self.ready()? {
            Some(result) => Arc::clone(result),
            None => {
                return Ok(PairTable {
                    registry,
                    hub: self.hub,
                    n,
                    entries: None,
                })
            }
        };

        // One reconstruction per vertex, shared by every pair it appears in
        let half_paths: Vec<Option<Vec<usize>>> = (0..n).map(|v| self.half_path(&result, v)).collect();

        let hub = self.hub;
        let row = |u: usize| -> Result<Vec<Option<RouteOutcome<L, W>>>> {
            (0..n)
                .map(|v| -> Result<Option<RouteOutcome<L, W>>> {
                    if u == hub || v == hub || u == v {
                        return Ok(None);
                    }
                    let outcome = match (&half_paths[u], &half_paths[v]) {
                        (Some(to_u), Some(to_v)) => {
                            if path::shares_vertex(to_u, to_v, hub) {
                                RouteOutcome::NoPath(NoPathReason::Overlap)
                            } else {
                                compose(registry, result.as_ref(), u, v, to_u, to_v)?
                            }
                        }
                        _ => RouteOutcome::NoPath(NoPathReason::Unreachable),
                    };
                    Ok(Some(outcome))
                })
                .collect()
        };

        let rows: Vec<Vec<Option<RouteOutcome<L, W>>>> = if self.config.use_parallel(n) {
            (0..n).into_par_iter().map(row).collect::<Result<_>>()?
        } else {
            (0..n).map(row).collect::<Result<_>>()?
        };

        let table = PairTable {
            registry,
            hub,
            n,
            entries: Some(rows.into_iter().flatten().collect()),
        };
        log::info!(
            "No-revisit table: {} of {} pairs have a route",
            table.found_count(),
            table.len()
        );
        Ok(table)
    }

    /// Answers a batch of queries under `policy`.
    ///
    /// Each query fails on its own for unknown labels; the outer error is
    /// reserved for an unsolved router.
    pub fn answer_all(&self, queries: &[(L, L)], policy: RevisitPolicy) -> Result<Vec<Result<RouteOutcome<L, W>>>> {
        self.ready()?;
        let parallel = self.config.parallel;

        match policy {
            RevisitPolicy::AllowRevisits => {
                if parallel {
                    Ok(queries.par_iter().map(|(s, e)| self.query(s, e)).collect())
                } else {
                    Ok(queries.iter().map(|(s, e)| self.query(s, e)).collect())
                }
            }
            RevisitPolicy::NoRevisits => {
                let table = self.no_revisit_table()?;
                if parallel {
                    Ok(queries.par_iter().map(|(s, e)| table.lookup(s, e)).collect())
                } else {
                    Ok(queries.iter().map(|(s, e)| table.lookup(s, e)).collect())
                }
            }
        }
    }
}

/// Builds the labeled route from two hub-rooted half paths
fn compose<L, W>(
    registry: &NodeRegistry<L>,
    result: &ShortestPathResult<W>,
    start: usize,
    end: usize,
    to_start: &[usize],
    to_end: &[usize],
) -> Result<RouteOutcome<L, W>>
where
    L: Label,
    W: Weight,
{
    let (ds, de) = match (result.distance(start), result.distance(end)) {
        (Some(ds), Some(de)) => (ds, de),
        _ => return Ok(RouteOutcome::NoPath(NoPathReason::Unreachable)),
    };
    let distance = ds.checked_add(&de).ok_or(Error::WeightOverflow)?;
    let vertices = path::compose_via_hub(to_start, to_end);

    Ok(RouteOutcome::Found(HubRoute {
        distance,
        path: registry.labels_for(&vertices)?,
    }))
}

/// Precomputed no-revisit answers for every ordered pair of distinct non-hub
/// vertices. Lookups never recompute anything.
#[derive(Debug, Clone)]
pub struct PairTable<'g, L, W>
where
    L: Label,
    W: Weight,
{
    registry: &'g NodeRegistry<L>,
    hub: usize,
    n: usize,
    /// Row-major `n * n`; `None` marks an excluded pair. The whole table is
    /// `None` when the hub solve found a negative cycle.
    entries: Option<Vec<Option<RouteOutcome<L, W>>>>,
}

impl<'g, L, W> PairTable<'g, L, W>
where
    L: Label,
    W: Weight,
{
    /// Answers `start -> hub -> end` under the no-revisit policy
    pub fn lookup(&self, start: &L, end: &L) -> Result<RouteOutcome<L, W>> {
        let s = self.registry.require(start)?;
        let e = self.registry.require(end)?;
        Ok(self.lookup_index(s, e))
    }

    pub fn lookup_index(&self, start: usize, end: usize) -> RouteOutcome<L, W> {
        let entries = match &self.entries {
            Some(entries) => entries,
            None => return RouteOutcome::NegativeCycle,
        };
        if start >= self.n || end >= self.n {
            return RouteOutcome::NoPath(NoPathReason::ExcludedPair);
        }
        entries[start * self.n + end]
            .clone()
            .unwrap_or(RouteOutcome::NoPath(NoPathReason::ExcludedPair))
    }

    pub fn hub(&self) -> usize {
        self.hub
    }

    /// True if the hub solve found a negative cycle
    pub fn is_negative_cycle(&self) -> bool {
        self.entries.is_none()
    }

    /// Number of tabulated pairs
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of tabulated pairs that have a route
    pub fn found_count(&self) -> usize {
        self.iter().filter(|(_, _, outcome)| outcome.is_found()).count()
    }

    /// Tabulated `(start, end, outcome)` entries in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &RouteOutcome<L, W>)> + '_ {
        let n = self.n;
        self.entries
            .iter()
            .flat_map(|entries| entries.iter().enumerate())
            .filter_map(move |(i, entry)| entry.as_ref().map(|outcome| (i / n, i % n, outcome)))
    }
}
