//! Wizard navigation: a pointer into the flattened (phase, step) sequence.
//!
//! The phases and their steps form one path, ordered first by phase and then
//! by step. `advance` and `retreat` move one edge along that path and do
//! nothing at either end. Jumps teleport anywhere on it. Completion is a set
//! of step ids tracked independently of the pointer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{Phase, Step};

/// Errors raised by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("the catalog has no phases")]
    EmptyCatalog,

    #[error("phase '{0}' has no steps")]
    PhaseWithoutSteps(&'static str),

    #[error("phase {index} is out of range: the catalog has {count} phases")]
    PhaseOutOfRange { index: usize, count: usize },

    #[error("step {index} is out of range: phase '{phase}' has {count} steps")]
    StepOutOfRange {
        index: usize,
        count: usize,
        phase: &'static str,
    },

    #[error("saved position (phase {phase_index}, step {step_index}) does not fit the catalog")]
    PositionOutOfRange {
        phase_index: usize,
        step_index: usize,
    },
}

/// Where the learner is and what they have finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub phase_index: usize,
    pub step_index: usize,

    /// Step ids marked complete. Step ids are unique catalog-wide.
    pub completed_steps: BTreeSet<String>,
}

/// Drives a [`WizardState`] over a catalog.
#[derive(Debug, Clone)]
pub struct Wizard<'a> {
    phases: &'a [Phase],
    state: WizardState,
}

impl<'a> Wizard<'a> {
    /// Start at the first step of the first phase with nothing completed.
    pub fn new(phases: &'a [Phase]) -> Result<Self, WizardError> {
        Self::resume(phases, WizardState::default())
    }

    /// Continue from a saved state.
    ///
    /// The position must fit the catalog. Completed ids are kept as-is, even
    /// ones the catalog no longer knows; they simply never count as progress.
    pub fn resume(phases: &'a [Phase], state: WizardState) -> Result<Self, WizardError> {
        if phases.is_empty() {
            return Err(WizardError::EmptyCatalog);
        }
        if let Some(phase) = phases.iter().find(|p| p.steps.is_empty()) {
            return Err(WizardError::PhaseWithoutSteps(phase.id));
        }
        let fits = phases
            .get(state.phase_index)
            .is_some_and(|p| state.step_index < p.steps.len());
        if !fits {
            return Err(WizardError::PositionOutOfRange {
                phase_index: state.phase_index,
                step_index: state.step_index,
            });
        }
        Ok(Self { phases, state })
    }

    /// Resume a saved state if there is one, else start fresh.
    ///
    /// A saved position that no longer fits the catalog falls back to the
    /// first step. Completed steps survive the fallback.
    pub fn restore(phases: &'a [Phase], saved: Option<WizardState>) -> Result<Self, WizardError> {
        let Some(state) = saved else {
            return Self::new(phases);
        };
        match Self::resume(phases, state.clone()) {
            Err(WizardError::PositionOutOfRange {
                phase_index,
                step_index,
            }) => {
                warn!(
                    phase_index,
                    step_index, "saved wizard position is stale, restarting"
                );
                Self::resume(
                    phases,
                    WizardState {
                        completed_steps: state.completed_steps,
                        ..WizardState::default()
                    },
                )
            }
            other => other,
        }
    }

    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    #[must_use]
    pub fn phases(&self) -> &'a [Phase] {
        self.phases
    }

    #[must_use]
    pub fn current_phase(&self) -> &'a Phase {
        &self.phases[self.state.phase_index]
    }

    #[must_use]
    pub fn current_step(&self) -> &'a Step {
        &self.current_phase().steps[self.state.step_index]
    }

    /// True at the first step of the first phase.
    #[must_use]
    pub fn is_at_start(&self) -> bool {
        self.state.phase_index == 0 && self.state.step_index == 0
    }

    /// True at the last step of the last phase.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.state.phase_index + 1 == self.phases.len()
            && self.state.step_index + 1 == self.current_phase().steps.len()
    }

    /// Move one step forward, rolling into the next phase at a phase's end.
    ///
    /// Returns `false` without changing anything at the last step of the last phase.
    pub fn advance(&mut self) -> bool {
        if self.state.step_index + 1 < self.current_phase().steps.len() {
            self.state.step_index += 1;
        } else if self.state.phase_index + 1 < self.phases.len() {
            self.state.phase_index += 1;
            self.state.step_index = 0;
        } else {
            return false;
        }
        debug!(
            phase = self.state.phase_index,
            step = self.state.step_index,
            "wizard advanced"
        );
        true
    }

    /// Move one step back, rolling into the previous phase's last step.
    ///
    /// Returns `false` without changing anything at the first step of the first phase.
    pub fn retreat(&mut self) -> bool {
        if self.state.step_index > 0 {
            self.state.step_index -= 1;
        } else if self.state.phase_index > 0 {
            self.state.phase_index -= 1;
            self.state.step_index = self.current_phase().steps.len() - 1;
        } else {
            return false;
        }
        debug!(
            phase = self.state.phase_index,
            step = self.state.step_index,
            "wizard retreated"
        );
        true
    }

    /// Jump to the first step of a phase.
    ///
    /// An index past the last phase is rejected and the state is left untouched.
    pub fn jump_to_phase(&mut self, index: usize) -> Result<(), WizardError> {
        if index >= self.phases.len() {
            return Err(WizardError::PhaseOutOfRange {
                index,
                count: self.phases.len(),
            });
        }
        self.state.phase_index = index;
        self.state.step_index = 0;
        debug!(phase = index, "wizard jumped to phase");
        Ok(())
    }

    /// Jump to a step of the current phase.
    pub fn jump_to_step(&mut self, index: usize) -> Result<(), WizardError> {
        let phase = self.current_phase();
        if index >= phase.steps.len() {
            return Err(WizardError::StepOutOfRange {
                index,
                count: phase.steps.len(),
                phase: phase.id,
            });
        }
        self.state.step_index = index;
        debug!(step = index, "wizard jumped to step");
        Ok(())
    }

    /// Flip a step between complete and incomplete. Returns the new membership.
    ///
    /// Any id may be toggled, not just the current step's.
    pub fn toggle_step_complete(&mut self, step_id: &str) -> bool {
        let now_complete = if self.state.completed_steps.remove(step_id) {
            false
        } else {
            self.state.completed_steps.insert(step_id.to_string());
            true
        };
        debug!(step_id, now_complete, "toggled step completion");
        now_complete
    }

    #[must_use]
    pub fn is_complete(&self, step_id: &str) -> bool {
        self.state.completed_steps.contains(step_id)
    }

    /// Total number of steps across every phase.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.phases.iter().map(|p| p.steps.len()).sum()
    }

    /// Index of the current step in the flattened sequence.
    #[must_use]
    pub fn position(&self) -> usize {
        self.phases[..self.state.phase_index]
            .iter()
            .map(|p| p.steps.len())
            .sum::<usize>()
            + self.state.step_index
    }

    /// Completed steps of one phase, and that phase's step count.
    ///
    /// `None` when `index` is out of range.
    #[must_use]
    pub fn phase_progress(&self, index: usize) -> Option<(usize, usize)> {
        let phase = self.phases.get(index)?;
        let done = phase.steps.iter().filter(|s| self.is_complete(s.id)).count();
        Some((done, phase.steps.len()))
    }

    /// Fraction of catalog steps marked complete, in `[0, 1]`.
    ///
    /// Ids that are not steps of this catalog do not count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Step counts are tiny.
    pub fn progress_fraction(&self) -> f64 {
        self.completed_count() as f64 / self.total_steps() as f64
    }

    /// Number of catalog steps marked complete.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        (0..self.phases.len())
            .filter_map(|i| self.phase_progress(i))
            .map(|(done, _)| done)
            .sum()
    }

    /// Back to the first step with nothing completed.
    pub fn reset(&mut self) {
        self.state = WizardState::default();
        debug!("wizard reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog;
    use crate::model::Step;

    const fn step(id: &'static str) -> Step {
        Step {
            id,
            name: id,
            description: "",
            tips: &[],
        }
    }

    const fn phase(id: &'static str, steps: &'static [Step]) -> Phase {
        Phase {
            id,
            code: id,
            name: id,
            full_name: id,
            description: "",
            objectives: &[],
            inputs: &[],
            outputs: &[],
            steps,
            deliverables: &[],
            artifacts: &[],
            key_questions: &[],
            stakeholder_focus: &[],
            tips: &[],
        }
    }

    const ONE: &[Step] = &[step("1a"), step("1b")];
    const TWO: &[Step] = &[step("2a")];
    const THREE: &[Step] = &[step("3a"), step("3b"), step("3c")];

    static SMALL: &[Phase] = &[phase("one", ONE), phase("two", TWO), phase("three", THREE)];

    fn at(wizard: &Wizard<'_>) -> (usize, usize) {
        (wizard.state().phase_index, wizard.state().step_index)
    }

    #[test]
    fn starts_at_origin_with_nothing_complete() {
        let wizard = Wizard::new(SMALL).unwrap();
        assert_eq!(at(&wizard), (0, 0));
        assert!(wizard.state().completed_steps.is_empty());
        assert!(wizard.is_at_start());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(Wizard::new(&[]).unwrap_err(), WizardError::EmptyCatalog);
    }

    #[test]
    fn rejects_phase_without_steps() {
        static BROKEN: &[Phase] = &[phase("ok", TWO), phase("empty", &[])];
        assert_eq!(
            Wizard::new(BROKEN).unwrap_err(),
            WizardError::PhaseWithoutSteps("empty")
        );
    }

    #[test]
    fn restore_without_saved_state_starts_fresh() {
        let wizard = Wizard::restore(SMALL, None).unwrap();
        assert_eq!(at(&wizard), (0, 0));
    }

    #[test]
    fn restore_keeps_completion_when_position_is_stale() {
        let saved = WizardState {
            phase_index: 7,
            step_index: 0,
            completed_steps: BTreeSet::from(["2a".to_string()]),
        };
        let wizard = Wizard::restore(SMALL, Some(saved)).unwrap();
        assert_eq!(at(&wizard), (0, 0));
        assert!(wizard.is_complete("2a"));
    }

    #[test]
    fn restore_resumes_a_valid_position() {
        let saved = WizardState {
            phase_index: 2,
            step_index: 1,
            completed_steps: BTreeSet::new(),
        };
        let wizard = Wizard::restore(SMALL, Some(saved)).unwrap();
        assert_eq!(at(&wizard), (2, 1));
    }

    #[test]
    fn retreat_at_start_is_a_no_op() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        assert!(!wizard.retreat());
        assert_eq!(at(&wizard), (0, 0));
    }

    #[test]
    fn advance_rolls_into_next_phase() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        wizard.advance();
        assert_eq!(at(&wizard), (0, 1));
        wizard.advance();
        assert_eq!(at(&wizard), (1, 0));
        wizard.advance();
        assert_eq!(at(&wizard), (2, 0));
    }

    #[test]
    fn retreat_lands_on_previous_phase_last_step() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        wizard.jump_to_phase(2).unwrap();
        wizard.retreat();
        assert_eq!(at(&wizard), (1, 0));
        wizard.retreat();
        assert_eq!(at(&wizard), (0, 1));
    }

    #[test]
    fn walking_the_whole_path_reaches_the_terminal_state() {
        let mut wizard = Wizard::new(catalog::all_phases()).unwrap();
        for _ in 0..wizard.total_steps() - 1 {
            assert!(wizard.advance());
        }
        let last_phase = catalog::all_phases().len() - 1;
        let last_step = catalog::all_phases()[last_phase].steps.len() - 1;
        assert_eq!(at(&wizard), (last_phase, last_step));
        assert!(wizard.is_at_end());

        // One more is idempotent.
        assert!(!wizard.advance());
        assert_eq!(at(&wizard), (last_phase, last_step));
    }

    #[test]
    fn advance_then_retreat_returns_to_the_same_place() {
        let mut wizard = Wizard::new(catalog::all_phases()).unwrap();
        wizard.advance();
        while !wizard.is_at_end() {
            let before = at(&wizard);
            wizard.advance();
            wizard.retreat();
            assert_eq!(at(&wizard), before);
            wizard.advance();
        }
    }

    #[test]
    fn position_counts_the_flattened_index() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        for expected in 0..wizard.total_steps() {
            assert_eq!(wizard.position(), expected);
            wizard.advance();
        }
    }

    #[test]
    fn jump_to_phase_resets_the_step() {
        let mut wizard = Wizard::new(catalog::all_phases()).unwrap();
        wizard.jump_to_step(4).unwrap();
        wizard.jump_to_phase(1).unwrap();
        assert_eq!(at(&wizard), (1, 0));
    }

    #[test]
    fn jump_past_the_last_phase_is_rejected() {
        let mut wizard = Wizard::new(catalog::all_phases()).unwrap();
        wizard.jump_to_phase(3).unwrap();
        wizard.jump_to_step(2).unwrap();

        let err = wizard.jump_to_phase(11).unwrap_err();
        assert_eq!(err, WizardError::PhaseOutOfRange { index: 11, count: 11 });
        assert_eq!(at(&wizard), (3, 2));

        wizard.jump_to_phase(10).unwrap();
        assert_eq!(at(&wizard), (10, 0));
    }

    #[test]
    fn jump_to_step_stays_in_phase_and_checks_bounds() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        wizard.jump_to_phase(2).unwrap();
        wizard.jump_to_step(2).unwrap();
        assert_eq!(at(&wizard), (2, 2));

        let err = wizard.jump_to_step(3).unwrap_err();
        assert!(matches!(err, WizardError::StepOutOfRange { index: 3, count: 3, .. }));
        assert_eq!(at(&wizard), (2, 2));
    }

    #[test]
    fn toggling_twice_is_an_involution() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        wizard.toggle_step_complete("1a");
        let before = wizard.state().completed_steps.clone();

        assert!(wizard.toggle_step_complete("2a"));
        assert!(!wizard.toggle_step_complete("2a"));
        assert_eq!(wizard.state().completed_steps, before);
    }

    #[test]
    fn any_step_can_be_toggled_regardless_of_position() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        wizard.toggle_step_complete("3c");
        assert!(wizard.is_complete("3c"));
        assert!(!wizard.is_complete("1a"));
        assert_eq!(at(&wizard), (0, 0));
    }

    #[test]
    fn progress_counts_only_known_steps() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        assert!(wizard.progress_fraction().abs() < f64::EPSILON);

        wizard.toggle_step_complete("1a");
        wizard.toggle_step_complete("3b");
        wizard.toggle_step_complete("not-a-step");
        assert!((wizard.progress_fraction() - 2.0 / 6.0).abs() < 1e-12);

        wizard.toggle_step_complete("1a");
        assert!((wizard.progress_fraction() - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn phase_progress_reports_done_and_total() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        wizard.toggle_step_complete("3a");
        wizard.toggle_step_complete("3c");
        assert_eq!(wizard.phase_progress(2), Some((2, 3)));
        assert_eq!(wizard.phase_progress(0), Some((0, 2)));
        assert_eq!(wizard.phase_progress(3), None);
    }

    #[test]
    fn resume_checks_the_saved_position() {
        let state = WizardState {
            phase_index: 1,
            step_index: 1,
            completed_steps: BTreeSet::new(),
        };
        let err = Wizard::resume(SMALL, state).unwrap_err();
        assert_eq!(
            err,
            WizardError::PositionOutOfRange {
                phase_index: 1,
                step_index: 1
            }
        );

        let state = WizardState {
            phase_index: 2,
            step_index: 1,
            completed_steps: ["1b".to_string()].into(),
        };
        let wizard = Wizard::resume(SMALL, state).unwrap();
        assert_eq!(wizard.current_step().id, "3b");
        assert!(wizard.is_complete("1b"));
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let mut wizard = Wizard::new(SMALL).unwrap();
        wizard.advance();
        wizard.toggle_step_complete("1a");
        wizard.reset();
        assert_eq!(wizard.state(), &WizardState::default());
    }
}
