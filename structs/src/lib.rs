use serde::{Deserialize, Serialize};

pub mod error;
pub mod incident;
pub mod network;
pub mod plan;

#[derive(
    Clone, Copy, Serialize, Deserialize, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct IncidentId(pub u32);

impl std::fmt::Display for IncidentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
