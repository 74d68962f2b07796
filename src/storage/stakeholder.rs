//! Stakeholder storage: load, upsert, and delete stakeholders.

use rusqlite::{Row, params};
use tracing::debug;
use uuid::Uuid;

use crate::model::{Level, Stakeholder};

use super::{Result, Storage, StorageError};

impl Storage {
    /// Loads every stakeholder, oldest first.
    ///
    /// `created_at` is RFC 3339 text with a variable-length fraction, which
    /// does not sort by time in SQL, so ordering happens after parsing.
    /// Stakeholders created at the same instant keep insertion order.
    pub fn load_stakeholders(&self) -> Result<Vec<Stakeholder>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, role, organization, concerns, influence, interest, phase, notes, created_at
             FROM stakeholder
             ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], StakeholderRow::from_row)?;
        let mut stakeholders = Vec::new();
        for row in rows {
            stakeholders.push(row?.into_stakeholder()?);
        }
        stakeholders.sort_by_key(|s| s.created_at);
        Ok(stakeholders)
    }

    /// Inserts a stakeholder, or replaces the one with the same id.
    pub fn save_stakeholder(&self, stakeholder: &Stakeholder) -> Result<()> {
        let concerns = serde_json::to_string(&stakeholder.concerns)?;
        self.conn.execute(
            "INSERT INTO stakeholder
                (id, name, role, organization, concerns, influence, interest, phase, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                role = excluded.role,
                organization = excluded.organization,
                concerns = excluded.concerns,
                influence = excluded.influence,
                interest = excluded.interest,
                phase = excluded.phase,
                notes = excluded.notes",
            params![
                stakeholder.id.to_string(),
                &stakeholder.name,
                &stakeholder.role,
                &stakeholder.organization,
                concerns,
                stakeholder.influence.as_str(),
                stakeholder.interest.as_str(),
                &stakeholder.phase,
                &stakeholder.notes,
                stakeholder.created_at.to_string(),
            ],
        )?;
        debug!(id = %stakeholder.id, "saved stakeholder");
        Ok(())
    }

    /// Deletes a stakeholder. Returns whether a row was removed.
    pub fn delete_stakeholder(&self, id: Uuid) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM stakeholder WHERE id = ?1", [id.to_string()])?;
        debug!(%id, rows, "deleted stakeholder");
        Ok(rows > 0)
    }
}

/// Raw column values, before parsing.
struct StakeholderRow {
    id: String,
    name: String,
    role: String,
    organization: String,
    concerns: String,
    influence: String,
    interest: String,
    phase: String,
    notes: String,
    created_at: String,
}

impl StakeholderRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            role: row.get(2)?,
            organization: row.get(3)?,
            concerns: row.get(4)?,
            influence: row.get(5)?,
            interest: row.get(6)?,
            phase: row.get(7)?,
            notes: row.get(8)?,
            created_at: row.get(9)?,
        })
    }

    fn into_stakeholder(self) -> Result<Stakeholder> {
        let id = self
            .id
            .parse::<Uuid>()
            .map_err(|e| StorageError::Corrupt(format!("invalid stakeholder id: {e}")))?;
        let influence = parse_level(&self.influence)?;
        let interest = parse_level(&self.interest)?;
        let created_at = self
            .created_at
            .parse::<jiff::Timestamp>()
            .map_err(|e| StorageError::Corrupt(format!("invalid created_at: {e}")))?;
        Ok(Stakeholder {
            id,
            name: self.name,
            role: self.role,
            organization: self.organization,
            concerns: serde_json::from_str(&self.concerns)?,
            influence,
            interest,
            phase: self.phase,
            notes: self.notes,
            created_at,
        })
    }
}

fn parse_level(s: &str) -> Result<Level> {
    s.parse::<Level>()
        .map_err(|e| StorageError::Corrupt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;

    fn sample_stakeholder() -> Stakeholder {
        Stakeholder {
            id: Uuid::new_v4(),
            name: "Dana".into(),
            role: "CFO".into(),
            organization: "Finance".into(),
            concerns: vec!["Cost".into(), "Risk".into()],
            influence: Level::High,
            interest: Level::Low,
            phase: "Phase F".into(),
            notes: "Budget owner".into(),
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn save_and_load_stakeholder() {
        let storage = Storage::open_in_memory().unwrap();
        let stakeholder = sample_stakeholder();

        storage.save_stakeholder(&stakeholder).unwrap();
        let loaded = storage.load_stakeholders().unwrap();

        assert_eq!(loaded, vec![stakeholder]);
    }

    #[test]
    fn save_existing_stakeholder_updates_in_place() {
        let storage = Storage::open_in_memory().unwrap();
        let mut stakeholder = sample_stakeholder();
        storage.save_stakeholder(&stakeholder).unwrap();

        stakeholder.name = "Dana R.".into();
        stakeholder.concerns.clear();
        stakeholder.influence = Level::Medium;
        storage.save_stakeholder(&stakeholder).unwrap();

        let loaded = storage.load_stakeholders().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Dana R.");
        assert!(loaded[0].concerns.is_empty());
        assert_eq!(loaded[0].influence, Level::Medium);
    }

    #[test]
    fn load_stakeholders_sorted_by_created_at() {
        let storage = Storage::open_in_memory().unwrap();

        let mut first = sample_stakeholder();
        first.name = "First".into();
        first.created_at = Timestamp::new(1_000_000_000, 0).unwrap();

        let mut second = sample_stakeholder();
        second.name = "Second".into();
        second.created_at = Timestamp::new(2_000_000_000, 0).unwrap();

        // Save in reverse order to verify sorting.
        storage.save_stakeholder(&second).unwrap();
        storage.save_stakeholder(&first).unwrap();

        let loaded = storage.load_stakeholders().unwrap();
        assert_eq!(loaded[0].name, "First");
        assert_eq!(loaded[1].name, "Second");
    }

    #[test]
    fn same_second_stakeholders_load_in_time_order() {
        let storage = Storage::open_in_memory().unwrap();
        let base = 1_700_000_000;
        let entries = [
            ("earlier", 0),
            ("later", 500_000_000),
            ("latest", 510_000_000),
            ("last", 512_300_000),
        ];
        for (name, nanos) in entries {
            let mut stakeholder = sample_stakeholder();
            stakeholder.name = name.into();
            stakeholder.created_at = Timestamp::new(base, nanos).unwrap();
            storage.save_stakeholder(&stakeholder).unwrap();
        }

        let names: Vec<String> = storage
            .load_stakeholders()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["earlier", "later", "latest", "last"]);
    }

    #[test]
    fn identical_timestamps_keep_insertion_order() {
        let storage = Storage::open_in_memory().unwrap();
        let created_at = Timestamp::new(1_700_000_000, 0).unwrap();
        for name in ["Zed", "Amy", "Moe"] {
            let mut stakeholder = sample_stakeholder();
            stakeholder.name = name.into();
            stakeholder.created_at = created_at;
            storage.save_stakeholder(&stakeholder).unwrap();
        }

        let names: Vec<String> = storage
            .load_stakeholders()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Zed", "Amy", "Moe"]);
    }

    #[test]
    fn delete_stakeholder_reports_whether_it_existed() {
        let storage = Storage::open_in_memory().unwrap();
        let stakeholder = sample_stakeholder();
        storage.save_stakeholder(&stakeholder).unwrap();

        assert!(storage.delete_stakeholder(stakeholder.id).unwrap());
        assert!(!storage.delete_stakeholder(stakeholder.id).unwrap());
        assert!(storage.load_stakeholders().unwrap().is_empty());
    }

    #[test]
    fn unknown_level_is_corrupt() {
        let storage = Storage::open_in_memory().unwrap();
        let stakeholder = sample_stakeholder();
        storage.save_stakeholder(&stakeholder).unwrap();
        storage
            .conn
            .execute("UPDATE stakeholder SET influence = 'extreme'", [])
            .unwrap();

        let err = storage.load_stakeholders().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}
