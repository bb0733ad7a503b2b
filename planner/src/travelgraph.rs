use std::collections::HashMap;

use log::{debug, trace, warn};
use rescue_structs::{error::PlanError, network::Network};
use tinyvec::TinyVec;

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    /// (target node, minutes)
    pub outgoing: TinyVec<[(u32, u32); 4]>,
}

/// Directed travel-time graph over named locations. Read-only once built.
#[derive(Debug, Clone)]
pub struct TravelGraph {
    nodes: Vec<Node>,
    node_idxs: HashMap<String, u32>,
}

impl TravelGraph {
    pub fn build(network: &Network) -> TravelGraph {
        let mut graph = TravelGraph {
            nodes: Vec::new(),
            node_idxs: HashMap::new(),
        };

        for location in network.locations.iter() {
            graph.intern(location);
        }

        for edge in network.edges.iter() {
            let from = graph.intern(&edge.from);
            let to = graph.intern(&edge.to);
            if from == to {
                warn!("Ignoring self-loop at {}", edge.from);
                continue;
            }

            let outgoing = &mut graph.nodes[from as usize].outgoing;
            if let Some(existing) = outgoing.iter_mut().find(|(n, _)| *n == to) {
                debug!(
                    "Edge {} -> {} given twice, {} min replaces {} min",
                    edge.from, edge.to, edge.minutes, existing.1
                );
                existing.1 = edge.minutes;
            } else {
                outgoing.push((to, edge.minutes));
            }
        }

        debug!(
            "Constructed travel graph with {} nodes, {} edges",
            graph.nodes.len(),
            graph.nodes.iter().map(|n| n.outgoing.len()).sum::<usize>()
        );
        for (i, n) in graph.nodes.iter().enumerate() {
            for (j, minutes) in n.outgoing.iter() {
                trace!(" {} {} -- {} min --> {} {}", i, n.name, minutes, j, graph.nodes[*j as usize].name);
            }
        }

        graph
    }

    fn intern(&mut self, name: &str) -> u32 {
        if let Some(idx) = self.node_idxs.get(name) {
            return *idx;
        }
        let idx = self.nodes.len() as u32;
        self.nodes.push(Node {
            name: name.to_string(),
            outgoing: Default::default(),
        });
        self.node_idxs.insert(name.to_string(), idx);
        idx
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, name: &str) -> Option<u32> {
        self.node_idxs.get(name).copied()
    }

    pub fn require_node(&self, name: &str) -> Result<u32, PlanError> {
        self.node(name)
            .ok_or_else(|| PlanError::UnknownLocation(name.to_string()))
    }

    pub fn name(&self, node: u32) -> &str {
        &self.nodes[node as usize].name
    }

    /// Travel time of the direct edge `from -> to`, if there is one.
    pub fn edge(&self, from: u32, to: u32) -> Option<u32> {
        self.nodes[from as usize]
            .outgoing
            .iter()
            .find(|(n, _)| *n == to)
            .map(|(_, minutes)| *minutes)
    }

    pub fn edge_time(&self, from: &str, to: &str) -> Option<u32> {
        self.edge(self.node(from)?, self.node(to)?)
    }

    /// Minutes for a single hop. Staying at the same node is free.
    pub fn hop(&self, from: u32, to: u32) -> Result<u32, PlanError> {
        if from == to {
            return Ok(0);
        }
        self.edge(from, to).ok_or_else(|| PlanError::DisconnectedRoute {
            from: self.name(from).to_string(),
            to: self.name(to).to_string(),
        })
    }

    /// Adds the hop `from -> to` to a running total.
    pub fn add_hop(&self, total: u32, from: u32, to: u32) -> Result<u32, PlanError> {
        total
            .checked_add(self.hop(from, to)?)
            .ok_or_else(|| PlanError::TravelTimeOverflow {
                from: self.name(from).to_string(),
                to: self.name(to).to_string(),
            })
    }

    /// Cumulative travel time along `path`, using only direct edges between
    /// consecutive stops.
    pub fn path_time(&self, path: &[&str]) -> Result<u32, PlanError> {
        let nodes = path
            .iter()
            .map(|name| self.require_node(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut total = 0;
        for (a, b) in nodes.iter().zip(nodes.iter().skip(1)) {
            total = self.add_hop(total, *a, *b)?;
        }
        Ok(total)
    }
}
