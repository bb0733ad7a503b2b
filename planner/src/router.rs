use std::cmp::Reverse;

use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use rescue_structs::{
    error::PlanError,
    incident::ScoredIncident,
    plan::{Exclusion, RouteComparison, RouteEvaluation, Strategy},
};

use crate::{shortest_path::travel_times_from, strategy::visiting_order, travelgraph::TravelGraph};

/// Plans the single boat's route out of `origin`.
pub struct Router<'a> {
    graph: &'a TravelGraph,
    origin: u32,
}

impl<'a> Router<'a> {
    pub fn new(graph: &'a TravelGraph, origin: &str) -> Result<Router<'a>, PlanError> {
        Ok(Router {
            graph,
            origin: graph.require_node(origin)?,
        })
    }

    pub fn origin(&self) -> &str {
        self.graph.name(self.origin)
    }

    /// Shortest time from the origin to each incident's location.
    pub fn travel_times(&self, incidents: &[ScoredIncident]) -> Result<Vec<Option<u32>>, PlanError> {
        let node_times = travel_times_from(self.graph, self.origin);
        incidents
            .iter()
            .map(|i| -> Result<Option<u32>, PlanError> {
                let node = self.graph.require_node(i.location())?;
                Ok(node_times[node as usize])
            })
            .collect()
    }

    /// Applies one strategy to the incident set. `travel_times` as returned
    /// by [`Router::travel_times`].
    pub fn evaluate(
        &self,
        strategy: Strategy,
        incidents: &[ScoredIncident],
        travel_times: &[Option<u32>],
    ) -> Result<RouteEvaluation, PlanError> {
        #[cfg(feature = "prof")]
        let _p = hprof::enter("evaluate strategy");

        let order = visiting_order(strategy, incidents, travel_times);

        let mut total_time = 0;
        let mut prev_node = self.origin;
        for idx in order.iter() {
            let node = self.graph.require_node(incidents[*idx].location())?;
            total_time = self.graph.add_hop(total_time, prev_node, node)?;
            prev_node = node;
        }

        let total_score = incidents.iter().map(|i| i.score() as u32).sum::<u32>();
        if total_time == 0 {
            return Err(PlanError::ZeroTravelTime { strategy });
        }

        let evaluation = RouteEvaluation {
            strategy,
            order: order.iter().map(|i| incidents[*i].id()).collect(),
            total_time,
            total_score,
            efficiency: total_score as f64 / total_time as f64,
        };
        debug!(
            "Strategy {} visits {:?} in {} min, score {}, efficiency {:.3}",
            strategy, evaluation.order, total_time, total_score, evaluation.efficiency
        );
        Ok(evaluation)
    }

    /// Evaluates every strategy and selects the most efficient one.
    /// Strategies whose route fails are excluded; any other failure aborts.
    pub fn plan(&self, incidents: &[ScoredIncident]) -> Result<RouteComparison, PlanError> {
        if incidents.is_empty() {
            return Err(PlanError::NoIncidents);
        }
        let travel_times = self.travel_times(incidents)?;

        let mut evaluations = Vec::new();
        let mut excluded = Vec::new();
        for strategy in Strategy::ALL {
            match self.evaluate(strategy, incidents, &travel_times) {
                Ok(evaluation) => evaluations.push(evaluation),
                Err(reason) if reason.is_route_failure() => {
                    warn!("Excluding strategy {}: {}", strategy, reason);
                    excluded.push(Exclusion { strategy, reason });
                }
                Err(e) => return Err(e),
            }
        }

        let Some(selected) = evaluations
            .iter()
            .min_by_key(|e| (Reverse(OrderedFloat(e.efficiency)), e.strategy))
            .cloned()
        else {
            return Err(PlanError::NoFeasibleRoute { excluded });
        };

        info!(
            "Selected strategy {} with efficiency {:.3} ({} feasible, {} excluded)",
            selected.strategy,
            selected.efficiency,
            evaluations.len(),
            excluded.len()
        );

        Ok(RouteComparison {
            evaluations,
            excluded,
            selected,
        })
    }
}
