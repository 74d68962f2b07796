//! Wizard progress storage: the current position and the completed steps.
//!
//! A missing position row means the wizard has never been saved.

use std::collections::BTreeSet;

use rusqlite::{OptionalExtension, params};
use tracing::debug;

use crate::wizard::WizardState;

use super::{Result, Storage};

impl Storage {
    /// Loads the saved wizard state, or `None` if nothing was saved yet.
    pub fn load_wizard_state(&self) -> Result<Option<WizardState>> {
        let position = self
            .conn
            .query_row(
                "SELECT phase_index, step_index FROM wizard_position WHERE id = 1",
                [],
                |row| Ok((row.get::<_, usize>(0)?, row.get::<_, usize>(1)?)),
            )
            .optional()?;
        let Some((phase_index, step_index)) = position else {
            return Ok(None);
        };

        let mut stmt = self
            .conn
            .prepare("SELECT step_id FROM completed_step ORDER BY step_id")?;
        let completed_steps: BTreeSet<String> = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<_>>()?;

        Ok(Some(WizardState {
            phase_index,
            step_index,
            completed_steps,
        }))
    }

    /// Replaces the saved wizard state.
    pub fn save_wizard_state(&self, state: &WizardState) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO wizard_position (id, phase_index, step_index) VALUES (1, ?1, ?2)
             ON CONFLICT (id) DO UPDATE SET
                phase_index = excluded.phase_index,
                step_index = excluded.step_index",
            params![state.phase_index, state.step_index],
        )?;
        tx.execute("DELETE FROM completed_step", [])?;
        {
            let mut insert = tx.prepare("INSERT INTO completed_step (step_id) VALUES (?1)")?;
            for step_id in &state.completed_steps {
                insert.execute([step_id])?;
            }
        }
        tx.commit()?;
        debug!(
            phase = state.phase_index,
            step = state.step_index,
            completed = state.completed_steps.len(),
            "saved wizard state"
        );
        Ok(())
    }

    /// Forgets all wizard progress.
    ///
    /// Idempotent: does nothing if nothing was saved.
    pub fn clear_wizard_state(&self) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM wizard_position", [])?;
        tx.execute("DELETE FROM completed_step", [])?;
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> WizardState {
        WizardState {
            phase_index: 3,
            step_index: 2,
            completed_steps: ["p1".to_string(), "p2".to_string(), "a4".to_string()].into(),
        }
    }

    #[test]
    fn load_wizard_state_empty() {
        let storage = Storage::open_in_memory().unwrap();
        assert!(storage.load_wizard_state().unwrap().is_none());
    }

    #[test]
    fn save_and_load_wizard_state() {
        let storage = Storage::open_in_memory().unwrap();
        let state = sample_state();

        storage.save_wizard_state(&state).unwrap();

        assert_eq!(storage.load_wizard_state().unwrap(), Some(state));
    }

    #[test]
    fn save_replaces_previous_state() {
        let storage = Storage::open_in_memory().unwrap();
        storage.save_wizard_state(&sample_state()).unwrap();

        let next = WizardState {
            phase_index: 0,
            step_index: 5,
            completed_steps: ["p6".to_string()].into(),
        };
        storage.save_wizard_state(&next).unwrap();

        assert_eq!(storage.load_wizard_state().unwrap(), Some(next));
    }

    #[test]
    fn clear_wizard_state_forgets_everything() {
        let storage = Storage::open_in_memory().unwrap();
        storage.save_wizard_state(&sample_state()).unwrap();

        storage.clear_wizard_state().unwrap();
        assert!(storage.load_wizard_state().unwrap().is_none());

        // Clearing again is fine.
        storage.clear_wizard_state().unwrap();
    }
}
