//! Line-oriented route input.
//!
//! ```text
//! a b 5      edge a - b with weight 5
//! d g        query from d to g
//! ```
//!
//! Blank lines are ignored. Anything else is a parse error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::UndirectedGraph;
use crate::{Error, Result};

/// Edges and queries read from one input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInput {
    pub edges: Vec<(String, String, i64)>,
    pub queries: Vec<(String, String)>,
}

impl RouteInput {
    /// Parses the whole input text
    pub fn parse(text: &str) -> Result<Self> {
        let mut input = RouteInput::default();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            match tokens.as_slice() {
                [] => continue,
                [u, v, w] => {
                    let weight = w.parse::<i64>().map_err(|e| Error::Parse {
                        line: line_no,
                        message: format!("invalid weight '{}': {}", w, e),
                    })?;
                    input.edges.push((u.to_string(), v.to_string(), weight));
                }
                [s, e] => input.queries.push((s.to_string(), e.to_string())),
                other => {
                    return Err(Error::Parse {
                        line: line_no,
                        message: format!("expected 2 or 3 fields, found {}", other.len()),
                    })
                }
            }
        }

        log::debug!(
            "Parsed {} edges and {} queries",
            input.edges.len(),
            input.queries.len()
        );
        Ok(input)
    }

    /// Reads and parses a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Builds the graph described by the edge records, in input order
    pub fn build_graph(&self) -> UndirectedGraph<String, i64> {
        UndirectedGraph::from_edges(self.edges.iter().cloned())
    }
}
