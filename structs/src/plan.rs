use serde::{Deserialize, Serialize};

use crate::{error::PlanError, IncidentId};

/// Visiting policy for the rescue boat. Declaration order is the tie-break
/// priority: an earlier strategy wins an exact efficiency tie.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest score first.
    Greedy,
    /// Closest to the origin first.
    Speed,
    /// Furthest from the origin first.
    Logistics,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Greedy, Strategy::Speed, Strategy::Logistics];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Speed => "speed",
            Strategy::Logistics => "logistics",
        }
    }

    pub fn rule(&self) -> &'static str {
        match self {
            Strategy::Greedy => "highest score first",
            Strategy::Speed => "closest first",
            Strategy::Logistics => "furthest first",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RouteEvaluation {
    pub strategy: Strategy,
    pub order: Vec<IncidentId>,
    /// Minutes from leaving the origin to reaching the last incident.
    pub total_time: u32,
    pub total_score: u32,
    /// Score saved per minute.
    pub efficiency: f64,
}

/// A strategy that was dropped from the comparison, and why.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Exclusion {
    pub strategy: Strategy,
    pub reason: PlanError,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RouteComparison {
    /// Feasible evaluations, in strategy priority order.
    pub evaluations: Vec<RouteEvaluation>,
    pub excluded: Vec<Exclusion>,
    pub selected: RouteEvaluation,
}

impl RouteComparison {
    pub fn evaluation(&self, strategy: Strategy) -> Option<&RouteEvaluation> {
        self.evaluations.iter().find(|e| e.strategy == strategy)
    }

    /// Best feasible evaluation other than the selected one.
    pub fn runner_up(&self) -> Option<&RouteEvaluation> {
        self.evaluations
            .iter()
            .filter(|e| e.strategy != self.selected.strategy)
            .fold(None, |best: Option<&RouteEvaluation>, e| match best {
                Some(b) if b.efficiency >= e.efficiency => Some(b),
                _ => Some(e),
            })
    }
}
