use std::io::{self, Write};

use rescue_planner::RescuePlan;
use rescue_structs::{
    error::PlanError,
    plan::{Exclusion, RouteComparison, RouteEvaluation, Strategy},
    IncidentId,
};
use serde_json::{json, Value};
use tabwriter::TabWriter;

fn route(order: &[IncidentId]) -> String {
    order
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn priority() -> String {
    Strategy::ALL
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Plain-language reason for the selected strategy.
pub fn justification(comparison: &RouteComparison) -> String {
    let selected = &comparison.selected;
    let why = match comparison.runner_up() {
        None => format!(
            "{} ({}) is the only feasible strategy at {:.3} score/min",
            selected.strategy,
            selected.strategy.rule(),
            selected.efficiency
        ),
        Some(other) if other.efficiency == selected.efficiency => format!(
            "{} ({}) ties with {} at {:.3} score/min and wins on priority ({})",
            selected.strategy,
            selected.strategy.rule(),
            other.strategy,
            selected.efficiency,
            priority()
        ),
        Some(other) => format!(
            "{} ({}) saves {:.3} score/min, {:.3} more than {} ({:.3})",
            selected.strategy,
            selected.strategy.rule(),
            selected.efficiency,
            selected.efficiency - other.efficiency,
            other.strategy,
            other.efficiency
        ),
    };
    format!(
        "{}. Visit {} in {} min for a total score of {}.",
        why,
        route(&selected.order),
        selected.total_time,
        selected.total_score
    )
}

fn write_evaluation(w: &mut impl Write, e: &RouteEvaluation) -> io::Result<()> {
    writeln!(
        w,
        "{}\t{}\t{}\t{}\t{}\t{:.3}",
        e.strategy,
        e.strategy.rule(),
        route(&e.order),
        e.total_time,
        e.total_score,
        e.efficiency
    )
}

fn write_exclusions(w: &mut impl Write, excluded: &[Exclusion]) -> io::Result<()> {
    for x in excluded {
        writeln!(w, "{}\t{}\texcluded: {}", x.strategy, x.strategy.rule(), x.reason)?;
    }
    Ok(())
}

pub fn render_table(plan: &RescuePlan) -> io::Result<String> {
    let mut buf = Vec::new();
    {
        let mut tw = TabWriter::new(&mut buf);

        writeln!(tw, "# INCIDENTS")?;
        writeln!(tw, "id\tlocation\tage\tthreat\tmedicine\t|\tbase\tage\tthreat\tmed\tscore")?;
        writeln!(tw, "---\t---\t---\t---\t---\t\t---\t---\t---\t---\t---")?;
        for s in plan.incidents.iter() {
            let b = &s.breakdown;
            writeln!(
                tw,
                "{}\t{}\t{}\t{}\t{}\t|\t{}\t+{}\t+{}\t+{}\t{}",
                s.id(),
                s.location(),
                s.incident.age,
                s.incident.has_life_threat,
                s.incident.needs_medicine,
                b.base,
                b.age_bonus,
                b.life_threat_bonus,
                b.medicine_bonus,
                b.score
            )?;
        }
        writeln!(tw)?;

        writeln!(tw, "# STRATEGIES FROM {}", plan.origin)?;
        writeln!(tw, "strategy\trule\torder\ttime\tscore\tefficiency")?;
        writeln!(tw, "---\t---\t---\t---\t---\t---")?;
        for e in plan.comparison.evaluations.iter() {
            write_evaluation(&mut tw, e)?;
        }
        write_exclusions(&mut tw, &plan.comparison.excluded)?;
        writeln!(tw)?;

        writeln!(tw, "# SELECTED")?;
        writeln!(tw, "{}", justification(&plan.comparison))?;
        tw.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render_failure(err: &PlanError) -> io::Result<String> {
    let mut buf = Vec::new();
    {
        let mut tw = TabWriter::new(&mut buf);
        writeln!(tw, "# PLANNING FAILED")?;
        writeln!(tw, "{}", err)?;
        if let PlanError::NoFeasibleRoute { excluded } = err {
            writeln!(tw)?;
            writeln!(tw, "strategy\trule\treason")?;
            writeln!(tw, "---\t---\t---")?;
            write_exclusions(&mut tw, excluded)?;
        }
        tw.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn failure_json(err: &PlanError) -> Value {
    let excluded: &[Exclusion] = match err {
        PlanError::NoFeasibleRoute { excluded } => excluded.as_slice(),
        _ => &[],
    };
    json!({
        "error": err,
        "excluded": excluded,
    })
}
