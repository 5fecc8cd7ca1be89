use crate::aspects::types::{Aspect, AspectKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One directed half of a symmetric aspect edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectEdge {
    pub to: String,
    pub aspect: AspectKind,
}

/// Adjacency view of the aspects usable for pattern matching.
///
/// Only conjunction, square, trine, quincunx and opposition become edges.
/// Every edge is stored under both of its endpoints, in aspect-list order.
/// A pair naming the same body twice, as inter-chart aspects do for
/// sun-sun, keeps both halves under that body. Records with an empty body
/// name are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AspectGraph {
    adjacency: BTreeMap<String, Vec<AspectEdge>>,
}

/// Loose shape of an aspect record coming from outside the crate
#[derive(Debug, Deserialize)]
struct AspectRecord {
    between: (String, String),
    aspect: String,
}

impl AspectGraph {
    /// Build the graph from a classified aspect list
    pub fn build(aspects: &[Aspect]) -> Self {
        let mut graph = Self::default();
        for aspect in aspects {
            let [body1, body2] = &aspect.between;
            graph.insert(body1, body2, aspect.aspect);
        }
        graph
    }

    /// Build the graph from raw JSON aspect records.
    ///
    /// Records without `between`/`aspect`, with non-string names or with
    /// an unknown aspect name are skipped. A non-array value gives an
    /// empty graph.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut graph = Self::default();
        let Some(records) = value.as_array() else {
            log::warn!("Aspect records must be a list, got {}", value);
            return graph;
        };

        for record in records {
            let parsed = match serde_json::from_value::<AspectRecord>(record.clone()) {
                Ok(parsed) => parsed,
                Err(e) => {
                    log::warn!("Skipping malformed aspect record {}: {}", record, e);
                    continue;
                }
            };
            match parsed.aspect.parse::<AspectKind>() {
                Ok(kind) => graph.insert(&parsed.between.0, &parsed.between.1, kind),
                Err(e) => log::warn!("Skipping aspect record {}: {}", record, e),
            }
        }
        graph
    }

    fn insert(&mut self, body1: &str, body2: &str, kind: AspectKind) {
        if !kind.is_graph_kind() {
            return;
        }
        if body1.is_empty() || body2.is_empty() {
            log::warn!("Skipping malformed {} between '{}' and '{}'", kind, body1, body2);
            return;
        }
        self.adjacency.entry(body1.to_string()).or_default().push(AspectEdge {
            to: body2.to_string(),
            aspect: kind,
        });
        self.adjacency.entry(body2.to_string()).or_default().push(AspectEdge {
            to: body1.to_string(),
            aspect: kind,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of bodies with at least one edge
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(|k| k.as_str())
    }

    pub fn edges(&self, body: &str) -> &[AspectEdge] {
        self.adjacency.get(body).map(|e| e.as_slice()).unwrap_or(&[])
    }

    /// Neighbours joined to `body` by `kind`, in edge order
    pub fn neighbors(&self, body: &str, kind: AspectKind) -> impl Iterator<Item = &str> + '_ {
        self.edges(body)
            .iter()
            .filter(move |e| e.aspect == kind)
            .map(|e| e.to.as_str())
    }

    pub fn has_aspect_between(&self, body1: &str, body2: &str, kind: AspectKind) -> bool {
        self.edges(body1)
            .iter()
            .any(|e| e.to == body2 && e.aspect == kind)
    }

    /// Subgraph over `allowed` bodies. Bodies left without edges are dropped.
    pub fn restricted_to(&self, allowed: &[&str]) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .filter(|(body, _)| allowed.contains(&body.as_str()))
            .filter_map(|(body, edges)| {
                let kept: Vec<AspectEdge> = edges
                    .iter()
                    .filter(|e| allowed.contains(&e.to.as_str()))
                    .cloned()
                    .collect();
                (!kept.is_empty()).then(|| (body.clone(), kept))
            })
            .collect();
        Self { adjacency }
    }
}

/// Build the pattern-matching graph from an aspect list
pub fn build_aspect_graph(aspects: &[Aspect]) -> AspectGraph {
    AspectGraph::build(aspects)
}
