use std::cmp::Reverse;

use rescue_structs::{incident::ScoredIncident, plan::Strategy};

/// Visiting order as indices into `incidents`. `travel_times[i]` is the
/// shortest time from the origin to incident `i`, `None` if unreachable.
/// Sorting is stable, so equal keys keep input order.
pub fn visiting_order(
    strategy: Strategy,
    incidents: &[ScoredIncident],
    travel_times: &[Option<u32>],
) -> Vec<usize> {
    debug_assert_eq!(incidents.len(), travel_times.len());
    let distance = |i: usize| travel_times[i].map(u64::from).unwrap_or(u64::MAX);

    let mut order = (0..incidents.len()).collect::<Vec<_>>();
    match strategy {
        Strategy::Greedy => order.sort_by_key(|i| Reverse(incidents[*i].score())),
        Strategy::Speed => order.sort_by_key(|i| distance(*i)),
        Strategy::Logistics => order.sort_by_key(|i| Reverse(distance(*i))),
    }
    order
}
