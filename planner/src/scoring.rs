use log::{debug, info};
use rescue_structs::{
    error::PlanError,
    incident::{Incident, ScoreBreakdown, ScoredIncident},
};

pub const BASE_SCORE: i32 = 5;
pub const AGE_BONUS: i32 = 2;
pub const LIFE_THREAT_BONUS: i32 = 2;
pub const MEDICINE_BONUS: i32 = 1;

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

/// Children under 5 and adults over 60 are the vulnerable age groups.
pub fn is_vulnerable_age(age: i32) -> bool {
    age > 60 || age < 5
}

/// Priority score of a single incident, with the contribution of each factor.
pub fn score(incident: &Incident) -> Result<ScoreBreakdown, PlanError> {
    if incident.age < 0 {
        return Err(PlanError::invalid_incident(
            incident.id,
            format!("negative age {}", incident.age),
        ));
    }
    if incident.location.trim().is_empty() {
        return Err(PlanError::invalid_incident(incident.id, "missing location"));
    }

    let age_bonus = if is_vulnerable_age(incident.age) { AGE_BONUS } else { 0 };
    let life_threat_bonus = if incident.has_life_threat { LIFE_THREAT_BONUS } else { 0 };
    let medicine_bonus = if incident.needs_medicine { MEDICINE_BONUS } else { 0 };

    let raw = BASE_SCORE + age_bonus + life_threat_bonus + medicine_bonus;
    let score = raw.clamp(MIN_SCORE, MAX_SCORE) as u8;

    Ok(ScoreBreakdown {
        base: BASE_SCORE,
        age_bonus,
        life_threat_bonus,
        medicine_bonus,
        raw,
        score,
    })
}

pub fn score_incident(incident: &Incident) -> Result<ScoredIncident, PlanError> {
    let breakdown = score(incident)?;
    Ok(ScoredIncident {
        incident: incident.clone(),
        breakdown,
    })
}

/// Scores every incident. The first invalid incident fails the whole set.
pub fn score_all(incidents: &[Incident]) -> Result<Vec<ScoredIncident>, PlanError> {
    #[cfg(feature = "prof")]
    let _p = hprof::enter("score incidents");

    let scored = incidents
        .iter()
        .map(|incident| -> Result<ScoredIncident, PlanError> {
            let scored = score_incident(incident)?;
            debug!(
                "Incident {} at {} scored {} (raw {})",
                scored.id(),
                scored.location(),
                scored.score(),
                scored.breakdown.raw
            );
            Ok(scored)
        })
        .collect::<Result<Vec<_>, PlanError>>()?;

    info!("Scored {} incidents", scored.len());
    Ok(scored)
}
