//! Wizard commands: status, next, prev, phase, step, goto, toggle, reset.
//!
//! Every command loads the saved position, applies one move, saves, and
//! prints the resulting status. Phase and step numbers are 1-based here.

use clap::Subcommand;

use crate::catalog::{self, StepLocation};
use crate::storage::Storage;
use crate::wizard::{Wizard, WizardError};

use super::format::format_wizard_status;

#[derive(Debug, Default, Subcommand)]
pub enum WizardCommand {
    /// Show the current phase, step, and progress.
    #[default]
    Status,

    /// Move to the next step.
    Next,

    /// Move to the previous step.
    Prev,

    /// Jump to the first step of a phase.
    Phase {
        /// Phase number, 1 to 11.
        number: usize,
    },

    /// Jump to a step of the current phase.
    Step {
        /// Step number within the current phase.
        number: usize,
    },

    /// Jump to any step by its id.
    Goto {
        /// Step id, e.g. `b4`.
        step: String,
    },

    /// Mark a step complete, or incomplete if it already is.
    Toggle {
        /// Step id (e.g. `a3`). Defaults to the current step.
        step: Option<String>,
    },

    /// Forget the position and all completed steps.
    Reset,
}

pub(super) fn run(command: WizardCommand, storage: &Storage) -> Result<(), String> {
    let saved = storage
        .load_wizard_state()
        .map_err(|e| format!("failed to load progress: {e}"))?;
    let mut wizard =
        Wizard::restore(catalog::all_phases(), saved).map_err(|e| e.to_string())?;

    match command {
        WizardCommand::Status => {}
        WizardCommand::Next => {
            if wizard.is_at_end() {
                println!("Already at the last step.");
            } else {
                wizard.advance();
            }
        }
        WizardCommand::Prev => {
            if wizard.is_at_start() {
                println!("Already at the first step.");
            } else {
                wizard.retreat();
            }
        }
        WizardCommand::Phase { number } => {
            let index = to_index(number, "phase")?;
            wizard.jump_to_phase(index).map_err(describe_jump_error)?;
        }
        WizardCommand::Step { number } => {
            let index = to_index(number, "step")?;
            wizard.jump_to_step(index).map_err(describe_jump_error)?;
        }
        WizardCommand::Goto { step } => {
            let location = require_step(&step)?;
            wizard
                .jump_to_phase(location.phase_index)
                .and_then(|()| wizard.jump_to_step(location.step_index))
                .map_err(|e| e.to_string())?;
        }
        WizardCommand::Toggle { step } => {
            let location = match step {
                Some(id) => require_step(&id)?,
                None => require_step(wizard.current_step().id)?,
            };
            let done = wizard.toggle_step_complete(location.step.id);
            println!(
                "{} ({}) marked {}",
                location.step.id,
                location.phase.code,
                if done { "complete" } else { "incomplete" }
            );
        }
        WizardCommand::Reset => {
            storage
                .clear_wizard_state()
                .map_err(|e| format!("failed to clear progress: {e}"))?;
            wizard.reset();
            print!("{}", format_wizard_status(&wizard));
            return Ok(());
        }
    }

    storage
        .save_wizard_state(wizard.state())
        .map_err(|e| format!("failed to save progress: {e}"))?;

    print!("{}", format_wizard_status(&wizard));
    Ok(())
}

fn require_step(step_id: &str) -> Result<StepLocation, String> {
    catalog::locate_step(step_id).ok_or_else(|| format!("step not found: '{step_id}'"))
}

/// Convert a 1-based number from the command line to an index.
fn to_index(number: usize, what: &str) -> Result<usize, String> {
    number
        .checked_sub(1)
        .ok_or_else(|| format!("{what} numbers start at 1"))
}

/// Restate an out-of-range jump in the 1-based terms the user typed.
fn describe_jump_error(error: WizardError) -> String {
    match error {
        WizardError::PhaseOutOfRange { index, count } => {
            format!("no phase {}: choose 1 to {count}", index + 1)
        }
        WizardError::StepOutOfRange {
            index,
            count,
            phase,
        } => format!("no step {} in {phase}: choose 1 to {count}", index + 1),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(to_index(1, "phase").unwrap(), 0);
        assert_eq!(to_index(11, "phase").unwrap(), 10);
        assert_eq!(to_index(0, "phase").unwrap_err(), "phase numbers start at 1");
    }

    #[test]
    fn jump_errors_speak_in_one_based_numbers() {
        let err = WizardError::PhaseOutOfRange {
            index: 11,
            count: 11,
        };
        assert_eq!(describe_jump_error(err), "no phase 12: choose 1 to 11");

        let err = WizardError::StepOutOfRange {
            index: 6,
            count: 6,
            phase: "preliminary",
        };
        assert_eq!(
            describe_jump_error(err),
            "no step 7 in preliminary: choose 1 to 6"
        );
    }

    #[test]
    fn commands_persist_between_runs() {
        let storage = Storage::open_in_memory().unwrap();

        run(WizardCommand::Next, &storage).unwrap();
        run(WizardCommand::Toggle { step: None }, &storage).unwrap();
        run(WizardCommand::Phase { number: 3 }, &storage).unwrap();

        let state = storage.load_wizard_state().unwrap().unwrap();
        assert_eq!((state.phase_index, state.step_index), (2, 0));
        let second_step = catalog::all_phases()[0].steps[1].id;
        assert!(state.completed_steps.contains(second_step));
    }

    #[test]
    fn rejected_jump_leaves_saved_state_alone() {
        let storage = Storage::open_in_memory().unwrap();
        run(WizardCommand::Phase { number: 2 }, &storage).unwrap();

        assert!(run(WizardCommand::Phase { number: 12 }, &storage).is_err());

        let state = storage.load_wizard_state().unwrap().unwrap();
        assert_eq!((state.phase_index, state.step_index), (1, 0));
    }

    #[test]
    fn goto_crosses_phases_by_step_id() {
        let storage = Storage::open_in_memory().unwrap();
        run(
            WizardCommand::Goto {
                step: "a2".to_string(),
            },
            &storage,
        )
        .unwrap();

        let state = storage.load_wizard_state().unwrap().unwrap();
        assert_eq!((state.phase_index, state.step_index), (1, 1));
    }

    #[test]
    fn reset_forgets_saved_progress() {
        let storage = Storage::open_in_memory().unwrap();
        run(WizardCommand::Toggle { step: None }, &storage).unwrap();

        run(WizardCommand::Reset, &storage).unwrap();

        assert!(storage.load_wizard_state().unwrap().is_none());
    }

    #[test]
    fn toggle_rejects_unknown_step_ids() {
        let storage = Storage::open_in_memory().unwrap();
        let err = run(
            WizardCommand::Toggle {
                step: Some("zz9".to_string()),
            },
            &storage,
        )
        .unwrap_err();
        assert_eq!(err, "step not found: 'zz9'");
    }
}
