use serde::{Deserialize, Serialize};

use crate::{error::PlanError, IncidentId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub id: IncidentId,
    pub location: String,
    pub age: i32,
    pub has_life_threat: bool,
    pub needs_medicine: bool,
}

/// Per-factor contributions to an incident's priority score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub age_bonus: i32,
    pub life_threat_bonus: i32,
    pub medicine_bonus: i32,
    /// Sum before clamping.
    pub raw: i32,
    pub score: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredIncident {
    pub incident: Incident,
    pub breakdown: ScoreBreakdown,
}

impl ScoredIncident {
    pub fn id(&self) -> IncidentId {
        self.incident.id
    }

    pub fn score(&self) -> u8 {
        self.breakdown.score
    }

    pub fn location(&self) -> &str {
        &self.incident.location
    }
}

/// One row from an incident source, before validation. Cells are kept as
/// text so that a bad cell is reported against its row instead of failing
/// the whole file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IncidentRecord {
    #[serde(default, alias = "ID")]
    pub id: Option<String>,
    #[serde(default, alias = "Area")]
    pub location: Option<String>,
    #[serde(default, alias = "Age")]
    pub age: Option<String>,
    #[serde(default)]
    pub has_life_threat: Option<String>,
    #[serde(default)]
    pub needs_medicine: Option<String>,
}

impl IncidentRecord {
    /// Validate the record into an [`Incident`]. `row` is the 1-based data row,
    /// used as the id when the record carries none.
    pub fn into_incident(self, row: usize) -> Result<Incident, PlanError> {
        let label = format!("row {}", row);
        let id = match cell(&self.id) {
            Some(text) => text
                .parse::<u32>()
                .map(IncidentId)
                .map_err(|_| PlanError::invalid_incident(&label, format!("bad id `{}`", text)))?,
            None => IncidentId(row as u32),
        };
        let label = format!("{} ({})", id, label);

        let location = required(&self.location, &label, "location")?.to_string();

        let age_text = required(&self.age, &label, "age")?;
        let age = age_text
            .parse::<i32>()
            .map_err(|_| PlanError::invalid_incident(&label, format!("bad age `{}`", age_text)))?;
        if age < 0 {
            return Err(PlanError::invalid_incident(&label, format!("negative age {}", age)));
        }

        let has_life_threat = flag(&self.has_life_threat, &label, "has_life_threat")?;
        let needs_medicine = flag(&self.needs_medicine, &label, "needs_medicine")?;

        Ok(Incident {
            id,
            location,
            age,
            has_life_threat,
            needs_medicine,
        })
    }
}

fn cell(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required<'a>(value: &'a Option<String>, label: &str, field: &str) -> Result<&'a str, PlanError> {
    cell(value).ok_or_else(|| PlanError::invalid_incident(label, format!("missing {}", field)))
}

fn flag(value: &Option<String>, label: &str, field: &str) -> Result<bool, PlanError> {
    let text = required(value, label, field)?;
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(PlanError::invalid_incident(
            label,
            format!("bad {} `{}`", field, text),
        )),
    }
}
