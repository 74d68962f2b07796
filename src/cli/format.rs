//! Output formatting for CLI display.

use std::fmt::Write;

use crate::catalog::{IndexedArtifact, IndexedDeliverable};
use crate::model::{ArtifactKind, Phase, Stakeholder};
use crate::stakeholders::{Quadrant, Quadrants};
use crate::wizard::Wizard;

const BAR_WIDTH: usize = 30;

/// One line per phase: position, code, full name, step count.
pub(super) fn format_phase_list(phases: &[Phase]) -> String {
    let mut out = String::new();
    for (i, phase) in phases.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<6} {:<48} {:>2} steps",
            i + 1,
            phase.code,
            phase.full_name,
            phase.steps.len()
        );
    }
    out
}

/// Everything about a phase, section by section. Empty sections are skipped.
pub(super) fn format_phase_detail(phase: &Phase) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  {}", phase.code, phase.full_name);
    let _ = writeln!(out, "{}", phase.description);

    bullets(&mut out, "Objectives", phase.objectives);
    bullets(&mut out, "Inputs", phase.inputs);
    bullets(&mut out, "Outputs", phase.outputs);

    let _ = writeln!(out, "\nSteps");
    for (i, step) in phase.steps.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}  ({})", i + 1, step.name, step.id);
        let _ = writeln!(out, "      {}", step.description);
        for tip in step.tips {
            let _ = writeln!(out, "      tip: {tip}");
        }
    }

    if !phase.deliverables.is_empty() {
        let _ = writeln!(out, "\nDeliverables");
        for d in phase.deliverables {
            let marker = if d.required { "*" } else { " " };
            let _ = writeln!(out, "  {marker} {}", d.name);
        }
    }

    if !phase.artifacts.is_empty() {
        let _ = writeln!(out, "\nArtifacts");
        for a in phase.artifacts {
            let _ = writeln!(out, "  [{}] {}", a.kind, a.name);
        }
    }

    bullets(&mut out, "Key questions", phase.key_questions);
    bullets(&mut out, "Stakeholder focus", phase.stakeholder_focus);
    bullets(&mut out, "Tips", phase.tips);
    out
}

fn bullets(out: &mut String, heading: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{heading}");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

/// Artifacts grouped under kind headings, each tagged with its phase code.
pub(super) fn format_artifacts(artifacts: &[IndexedArtifact]) -> String {
    let mut out = String::new();
    for kind in ArtifactKind::ALL {
        let group: Vec<_> = artifacts.iter().filter(|a| a.artifact.kind == kind).collect();
        if group.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{} ({})", kind.heading(), group.len());
        for a in group {
            let _ = writeln!(out, "  {:<6} {}", a.phase.code, a.artifact.name);
        }
    }
    out
}

/// One line per deliverable; required ones are starred.
pub(super) fn format_deliverables(deliverables: &[IndexedDeliverable]) -> String {
    let mut out = String::new();
    for d in deliverables {
        let marker = if d.deliverable.required { "*" } else { " " };
        let _ = writeln!(out, "{marker} {:<6} {}", d.phase.code, d.deliverable.name);
    }
    out
}

/// Where the wizard is, what the step asks, and overall progress.
pub(super) fn format_wizard_status(wizard: &Wizard<'_>) -> String {
    let state = wizard.state();
    let phase = wizard.current_phase();
    let step = wizard.current_step();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Phase {}/{}: {}  {}",
        state.phase_index + 1,
        wizard.phases().len(),
        phase.code,
        phase.full_name
    );
    let check = if wizard.is_complete(step.id) { "✓" } else { " " };
    let _ = writeln!(
        out,
        "Step {}/{}: [{check}] {}",
        state.step_index + 1,
        phase.steps.len(),
        step.name
    );
    let _ = writeln!(out, "  {}", step.description);
    for tip in step.tips {
        let _ = writeln!(out, "  tip: {tip}");
    }

    let _ = writeln!(
        out,
        "\n{} {}/{} steps complete, at step {} of {}",
        progress_bar(wizard.progress_fraction(), BAR_WIDTH),
        wizard.completed_count(),
        wizard.total_steps(),
        wizard.position() + 1,
        wizard.total_steps()
    );
    out
}

/// A fixed-width text bar, e.g. `[######----]`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(super) fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Short id, name, role, and levels on one line.
pub(super) fn format_stakeholder_row(stakeholder: &Stakeholder) -> String {
    format!(
        "{}  {:<24} {:<28} influence {:<6} interest {}",
        stakeholder.short_id(),
        stakeholder.name,
        stakeholder.role,
        stakeholder.influence,
        stakeholder.interest
    )
}

/// Every field of a stakeholder. Concerns are numbered from 1.
pub(super) fn format_stakeholder(stakeholder: &Stakeholder) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", stakeholder.name);
    let _ = writeln!(out, "  id:           {}", stakeholder.id);
    let _ = writeln!(out, "  role:         {}", stakeholder.role);
    if !stakeholder.organization.is_empty() {
        let _ = writeln!(out, "  organization: {}", stakeholder.organization);
    }
    let _ = writeln!(out, "  influence:    {}", stakeholder.influence);
    let _ = writeln!(out, "  interest:     {}", stakeholder.interest);
    if let Some(quadrant) = Quadrant::of(stakeholder.influence, stakeholder.interest) {
        let _ = writeln!(out, "  strategy:     {}", quadrant.title());
    }
    if !stakeholder.phase.is_empty() {
        let _ = writeln!(out, "  phase:        {}", stakeholder.phase);
    }
    if !stakeholder.notes.is_empty() {
        let _ = writeln!(out, "  notes:        {}", stakeholder.notes);
    }
    if !stakeholder.concerns.is_empty() {
        let _ = writeln!(out, "  concerns:");
        for (i, concern) in stakeholder.concerns.iter().enumerate() {
            let _ = writeln!(out, "    {}. {concern}", i + 1);
        }
    }
    out
}

/// The four quadrants in grid order, then a count of the unplaced.
pub(super) fn format_quadrants(quadrants: &Quadrants<'_>, total: usize) -> String {
    let mut out = String::new();
    for quadrant in Quadrant::ALL {
        let members = quadrants.get(quadrant);
        let _ = writeln!(
            out,
            "{} ({})  {}",
            quadrant.title(),
            members.len(),
            quadrant.subtitle()
        );
        if members.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for s in members {
            let _ = writeln!(out, "  {}  {}", s.name, s.role);
        }
    }
    let unplaced = total - quadrants.placed();
    if unplaced > 0 {
        let _ = writeln!(out, "\n{unplaced} rated medium on an axis, not placed");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog;
    use crate::model::Level;
    use crate::stakeholders::classify;

    fn stakeholder(name: &str, influence: Level, interest: Level) -> Stakeholder {
        Stakeholder {
            id: uuid::Uuid::new_v4(),
            name: name.to_string(),
            role: "Sponsor".to_string(),
            organization: String::new(),
            concerns: vec!["Cost".to_string(), "Risk".to_string()],
            influence,
            interest,
            phase: String::new(),
            notes: String::new(),
            created_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(0.5, 4), "[##--]");
        assert_eq!(progress_bar(1.0, 4), "[####]");
        assert_eq!(progress_bar(1.5, 4), "[####]");
    }

    #[test]
    fn phase_list_has_one_line_per_phase() {
        let out = format_phase_list(catalog::all_phases());
        assert_eq!(out.lines().count(), 11);
        assert!(out.lines().next().unwrap().starts_with(" 1. P "));
    }

    #[test]
    fn phase_detail_numbers_steps_and_stars_required_deliverables() {
        let phase = catalog::phase_by_id("phase-a").unwrap();
        let out = format_phase_detail(phase);
        assert!(out.starts_with("A  "));
        assert!(out.contains("\nSteps\n"));
        assert!(out.contains("   1. "));
        assert!(out.contains("  * "));
    }

    #[test]
    fn artifacts_are_grouped_by_kind() {
        let out = format_artifacts(&catalog::artifact_index());
        let catalogs = out.find("Catalogs (16)").unwrap();
        let matrices = out.find("Matrices (11)").unwrap();
        let diagrams = out.find("Diagrams (33)").unwrap();
        assert!(catalogs < matrices && matrices < diagrams);
    }

    #[test]
    fn single_kind_has_a_single_heading() {
        let out = format_artifacts(&catalog::artifacts_of_kind(ArtifactKind::Matrix));
        assert!(out.starts_with("Matrices (11)"));
        assert!(!out.contains("Catalogs"));
    }

    #[test]
    fn wizard_status_shows_position_and_progress() {
        let mut wizard = Wizard::new(catalog::all_phases()).unwrap();
        let first = wizard.current_step().id;
        wizard.toggle_step_complete(first);

        let out = format_wizard_status(&wizard);

        assert!(out.starts_with("Phase 1/11: P  "));
        assert!(out.contains("Step 1/6: [✓] "));
        assert!(out.contains(" 1/90 steps complete, at step 1 of 90"));
    }

    #[test]
    fn wizard_status_counts_position_across_phases() {
        let mut wizard = Wizard::new(catalog::all_phases()).unwrap();
        wizard.jump_to_phase(1).unwrap();
        wizard.jump_to_step(1).unwrap();

        let out = format_wizard_status(&wizard);

        assert!(out.contains("0/90 steps complete, at step 8 of 90"));
    }

    #[test]
    fn stakeholder_detail_numbers_concerns_and_names_strategy() {
        let s = stakeholder("Dana", Level::High, Level::Low);
        let out = format_stakeholder(&s);
        assert!(out.contains("strategy:     Keep Satisfied"));
        assert!(out.contains("    1. Cost\n    2. Risk\n"));
        assert!(!out.contains("organization"));
    }

    #[test]
    fn quadrants_report_unplaced_stakeholders() {
        let stakeholders = vec![
            stakeholder("Dana", Level::High, Level::High),
            stakeholder("Lee", Level::Medium, Level::High),
        ];
        let quadrants = classify(&stakeholders);

        let out = format_quadrants(&quadrants, stakeholders.len());

        assert!(out.starts_with("Manage Closely (1)"));
        assert!(out.contains("  Dana  Sponsor"));
        assert!(out.contains("Monitor (0)"));
        assert!(out.contains("1 rated medium on an axis, not placed"));
    }
}
