use std::{collections::HashSet, fs, io, path::Path};

use log::{debug, info};
use rescue_structs::{
    error::PlanError,
    incident::{Incident, IncidentRecord},
    network::Network,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Incident(#[from] PlanError),
    #[error("invalid network: {0}")]
    Network(String),
}

/// Reads incidents from CSV with a header row. Every row must validate, and
/// ids must be unique.
pub fn read_incidents<R: io::Read>(reader: R) -> Result<Vec<Incident>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut incidents = Vec::new();
    let mut seen = HashSet::new();
    for (row_idx, record) in csv_reader.deserialize::<IncidentRecord>().enumerate() {
        let incident = record?.into_incident(row_idx + 1)?;
        if !seen.insert(incident.id) {
            return Err(PlanError::invalid_incident(incident.id, "duplicate id").into());
        }
        debug!("Loaded incident {:?}", incident);
        incidents.push(incident);
    }
    Ok(incidents)
}

pub fn load_incidents(path: impl AsRef<Path>) -> Result<Vec<Incident>, LoadError> {
    let path = path.as_ref();
    let incidents = read_incidents(fs::File::open(path)?)?;
    info!("Loaded {} incidents from {}", incidents.len(), path.display());
    Ok(incidents)
}

pub fn read_network(json: &str) -> Result<Network, LoadError> {
    let network: Network = serde_json::from_str(json)?;
    if network.locations.iter().any(|l| l.trim().is_empty()) {
        return Err(LoadError::Network("empty location name".to_string()));
    }
    for edge in network.edges.iter() {
        if edge.from.trim().is_empty() || edge.to.trim().is_empty() {
            return Err(LoadError::Network("edge with empty location name".to_string()));
        }
        if edge.from == edge.to {
            return Err(LoadError::Network(format!("self-loop at `{}`", edge.from)));
        }
        if edge.minutes == 0 {
            return Err(LoadError::Network(format!(
                "zero-minute edge `{}` -> `{}`",
                edge.from, edge.to
            )));
        }
    }
    Ok(network)
}

pub fn load_network(path: impl AsRef<Path>) -> Result<Network, LoadError> {
    let path = path.as_ref();
    let network = read_network(&fs::read_to_string(path)?)?;
    info!("Loaded {} edges from {}", network.edges.len(), path.display());
    Ok(network)
}
