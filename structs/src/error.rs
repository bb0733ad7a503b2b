use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::plan::{Exclusion, Strategy};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Missing or malformed incident field, or a negative age.
    #[error("invalid incident {incident}: {reason}")]
    InvalidIncident { incident: String, reason: String },

    /// Origin or incident location that is not a node of the travel graph.
    #[error("unknown location `{0}`")]
    UnknownLocation(String),

    #[error("no direct connection from `{from}` to `{to}`")]
    DisconnectedRoute { from: String, to: String },

    #[error("{strategy} route takes zero minutes")]
    ZeroTravelTime { strategy: Strategy },

    /// Summed hop times no longer fit in whole minutes.
    #[error("travel time overflows at `{from}` -> `{to}`")]
    TravelTimeOverflow { from: String, to: String },

    #[error("no feasible route ({})", describe_exclusions(.excluded))]
    NoFeasibleRoute { excluded: Vec<Exclusion> },

    #[error("no incidents to plan for")]
    NoIncidents,
}

impl PlanError {
    /// Failures of a single strategy's route. The router excludes the
    /// strategy and carries on with the others.
    pub fn is_route_failure(&self) -> bool {
        matches!(
            self,
            PlanError::DisconnectedRoute { .. }
                | PlanError::ZeroTravelTime { .. }
                | PlanError::TravelTimeOverflow { .. }
        )
    }

    pub fn invalid_incident(incident: impl ToString, reason: impl ToString) -> Self {
        PlanError::InvalidIncident {
            incident: incident.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn describe_exclusions(excluded: &[Exclusion]) -> String {
    excluded
        .iter()
        .map(|e| format!("{}: {}", e.strategy, e.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl Serialize for PlanError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_feasible_route_lists_every_exclusion() {
        let err = PlanError::NoFeasibleRoute {
            excluded: vec![
                Exclusion {
                    strategy: Strategy::Greedy,
                    reason: PlanError::DisconnectedRoute {
                        from: "Ja-Ela".into(),
                        to: "Gampaha".into(),
                    },
                },
                Exclusion {
                    strategy: Strategy::Logistics,
                    reason: PlanError::DisconnectedRoute {
                        from: "Ragama".into(),
                        to: "Gampaha".into(),
                    },
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("greedy: no direct connection from `Ja-Ela` to `Gampaha`"));
        assert!(msg.contains("logistics: no direct connection from `Ragama` to `Gampaha`"));
    }

    #[test]
    fn route_failures_are_recoverable() {
        assert!(PlanError::ZeroTravelTime {
            strategy: Strategy::Speed
        }
        .is_route_failure());
        assert!(PlanError::TravelTimeOverflow {
            from: "A".into(),
            to: "B".into()
        }
        .is_route_failure());
        assert!(!PlanError::NoIncidents.is_route_failure());
        assert!(!PlanError::UnknownLocation("Kandy".into()).is_route_failure());
    }

    #[test]
    fn serializes_as_message() {
        let err = PlanError::UnknownLocation("Negombo".into());
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            "\"unknown location `Negombo`\""
        );
    }
}
