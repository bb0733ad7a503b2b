use std::{cmp::Reverse, collections::BinaryHeap};

use log::{debug, trace};

use crate::travelgraph::TravelGraph;

/// Shortest travel time in minutes from `origin` to every node, indexed by
/// node. `None` for nodes that cannot be reached.
pub fn travel_times_from(graph: &TravelGraph, origin: u32) -> Vec<Option<u32>> {
    let nodes = graph.nodes();
    let mut best: Vec<Option<u32>> = vec![None; nodes.len()];
    let mut queue = BinaryHeap::new();

    best[origin as usize] = Some(0);
    queue.push(Reverse((0u32, origin)));

    while let Some(Reverse((time, node_idx))) = queue.pop() {
        if best[node_idx as usize].map(|t| time > t).unwrap_or(false) {
            continue;
        }
        trace!("Settled {} at {} min", graph.name(node_idx), time);

        for (tgt_node_idx, minutes) in nodes[node_idx as usize].outgoing.iter() {
            let new_time = time.saturating_add(*minutes);
            let improves = best[*tgt_node_idx as usize]
                .map(|t| new_time < t)
                .unwrap_or(true);
            if improves {
                best[*tgt_node_idx as usize] = Some(new_time);
                queue.push(Reverse((new_time, *tgt_node_idx)));
            }
        }
    }

    debug!(
        "Travel times from {}: {:?}",
        graph.name(origin),
        nodes
            .iter()
            .zip(best.iter())
            .map(|(n, t)| (n.name.as_str(), *t))
            .collect::<Vec<_>>()
    );
    best
}
