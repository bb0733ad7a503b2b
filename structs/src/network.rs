use serde::{Deserialize, Serialize};

/// Directed connection between two named locations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub minutes: u32,
}

/// Travel-time table as supplied by a graph source.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    /// Locations known to the network, including ones no edge touches.
    /// Edge endpoints are added implicitly.
    #[serde(default)]
    pub locations: Vec<String>,
    pub edges: Vec<Edge>,
}

pub const DEFAULT_ORIGIN: &str = "Ragama";

impl Network {
    /// Boat routes out of Ragama used for the Gampaha district flood response.
    pub fn gampaha_district() -> Network {
        Network {
            locations: vec!["Ragama".into(), "Ja-Ela".into(), "Gampaha".into()],
            edges: vec![
                Edge::new("Ragama", "Ja-Ela", 10),
                Edge::new("Ja-Ela", "Gampaha", 40),
            ],
        }
    }
}

impl Edge {
    pub fn new(from: &str, to: &str, minutes: u32) -> Edge {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
            minutes,
        }
    }
}
