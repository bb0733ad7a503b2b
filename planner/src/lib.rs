use rescue_structs::{
    error::PlanError,
    incident::{Incident, ScoredIncident},
    plan::RouteComparison,
};
use router::Router;
use serde::Serialize;
use travelgraph::TravelGraph;

pub mod load;
pub mod router;
pub mod scoring;
pub mod shortest_path;
pub mod strategy;
pub mod travelgraph;


#[derive(Debug, Serialize)]
pub struct RescuePlan {
    pub origin: String,
    pub incidents: Vec<ScoredIncident>,
    pub comparison: RouteComparison,
}

/// Scores `incidents` and compares every strategy for one boat leaving `origin`.
pub fn plan_rescue(
    graph: &TravelGraph,
    origin: &str,
    incidents: &[Incident],
) -> Result<RescuePlan, PlanError> {
    let router = Router::new(graph, origin)?;
    let incidents = scoring::score_all(incidents)?;
    let comparison = router.plan(&incidents)?;
    Ok(RescuePlan {
        origin: router.origin().to_string(),
        incidents,
        comparison,
    })
}
