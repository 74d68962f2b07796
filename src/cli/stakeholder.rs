//! Stakeholder commands: add, example, list, show, edit, remove, concern, matrix.

use clap::{Args, Subcommand, ValueEnum};

use crate::model::{Level, Stakeholder, StakeholderDraft};
use crate::stakeholders::Registry;
use crate::storage::Storage;

use super::format::{format_quadrants, format_stakeholder, format_stakeholder_row};
use super::print_json;

#[derive(Debug, Subcommand)]
pub enum StakeholderCommand {
    /// Add a stakeholder. Prints the new id.
    Add(NewStakeholder),

    /// Add the example sponsor, a high-influence high-interest CIO.
    Example,

    /// List stakeholders in the order they were added.
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show one stakeholder in full.
    Show {
        /// Stakeholder id: full UUID or unambiguous prefix.
        reference: String,

        #[arg(long)]
        json: bool,
    },

    /// Change a stakeholder's fields. Fields not given are left as they are.
    Edit {
        /// Stakeholder id: full UUID or unambiguous prefix.
        reference: String,

        #[command(flatten)]
        changes: StakeholderChanges,
    },

    /// Delete a stakeholder.
    Remove {
        /// Stakeholder id: full UUID or unambiguous prefix.
        reference: String,
    },

    /// Add or remove a stakeholder's concerns.
    Concern {
        #[command(subcommand)]
        command: ConcernCommand,
    },

    /// Show the influence/interest grid.
    Matrix {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConcernCommand {
    /// Append a concern.
    Add {
        /// Stakeholder id: full UUID or unambiguous prefix.
        reference: String,

        /// The concern, e.g. "Cost management".
        text: String,
    },

    /// Remove a concern by its number in `show` output.
    Remove {
        /// Stakeholder id: full UUID or unambiguous prefix.
        reference: String,

        /// Concern number, starting at 1.
        number: usize,
    },
}

#[derive(Debug, Args)]
pub struct NewStakeholder {
    #[arg(long)]
    name: String,

    #[arg(long)]
    role: String,

    #[arg(long, default_value = "")]
    organization: String,

    /// A concern. Repeat for several.
    #[arg(long = "concern")]
    concerns: Vec<String>,

    #[arg(long, value_enum, default_value_t = LevelArg::Medium)]
    influence: LevelArg,

    #[arg(long, value_enum, default_value_t = LevelArg::Medium)]
    interest: LevelArg,

    /// Free-text phase association, e.g. "Phase A".
    #[arg(long, default_value = "")]
    phase: String,

    #[arg(long, default_value = "")]
    notes: String,
}

impl NewStakeholder {
    fn into_draft(self) -> StakeholderDraft {
        StakeholderDraft {
            name: self.name,
            role: self.role,
            organization: self.organization,
            concerns: self.concerns,
            influence: self.influence.to_domain(),
            interest: self.interest.to_domain(),
            phase: self.phase,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct StakeholderChanges {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    role: Option<String>,

    #[arg(long)]
    organization: Option<String>,

    #[arg(long, value_enum)]
    influence: Option<LevelArg>,

    #[arg(long, value_enum)]
    interest: Option<LevelArg>,

    #[arg(long)]
    phase: Option<String>,

    #[arg(long)]
    notes: Option<String>,
}

impl StakeholderChanges {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.organization.is_none()
            && self.influence.is_none()
            && self.interest.is_none()
            && self.phase.is_none()
            && self.notes.is_none()
    }

    fn apply(self, draft: &mut StakeholderDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(role) = self.role {
            draft.role = role;
        }
        if let Some(organization) = self.organization {
            draft.organization = organization;
        }
        if let Some(influence) = self.influence {
            draft.influence = influence.to_domain();
        }
        if let Some(interest) = self.interest {
            draft.interest = interest.to_domain();
        }
        if let Some(phase) = self.phase {
            draft.phase = phase;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }
    }
}

/// CLI-facing level, mapped to the domain `Level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    High,
    Medium,
    Low,
}

impl LevelArg {
    fn to_domain(self) -> Level {
        match self {
            Self::High => Level::High,
            Self::Medium => Level::Medium,
            Self::Low => Level::Low,
        }
    }
}

pub(super) fn run(command: StakeholderCommand, storage: &Storage) -> Result<(), String> {
    let mut registry = load(storage)?;

    match command {
        StakeholderCommand::Add(new) => {
            let created = registry
                .create(new.into_draft())
                .map_err(|e| e.to_string())?;
            save(storage, created)?;
            println!("{}", created.id);
        }
        StakeholderCommand::Example => {
            let example = registry.add_example();
            save(storage, example)?;
            println!("{}", example.id);
        }
        StakeholderCommand::List { json } => {
            if json {
                return print_json(registry.list());
            }
            if registry.is_empty() {
                println!("No stakeholders");
                return Ok(());
            }
            for stakeholder in registry.list() {
                println!("{}", format_stakeholder_row(stakeholder));
            }
        }
        StakeholderCommand::Show { reference, json } => {
            let stakeholder = registry.resolve(&reference).map_err(|e| e.to_string())?;
            if json {
                return print_json(stakeholder);
            }
            print!("{}", format_stakeholder(stakeholder));
        }
        StakeholderCommand::Edit { reference, changes } => {
            if changes.is_empty() {
                return Err("nothing to change: pass at least one field".to_string());
            }
            let existing = registry.resolve(&reference).map_err(|e| e.to_string())?;
            let id = existing.id;
            let mut draft = existing.to_draft();
            changes.apply(&mut draft);
            let updated = registry.update(id, draft).map_err(|e| e.to_string())?;
            save(storage, updated)?;
            println!("Updated {}", updated.name);
        }
        StakeholderCommand::Remove { reference } => {
            let id = registry.resolve(&reference).map_err(|e| e.to_string())?.id;
            let removed = registry.remove(id).map_err(|e| e.to_string())?;
            storage
                .delete_stakeholder(id)
                .map_err(|e| format!("failed to delete stakeholder: {e}"))?;
            println!("Removed {}", removed.name);
        }
        StakeholderCommand::Concern { command } => run_concern(&mut registry, command, storage)?,
        StakeholderCommand::Matrix { json } => {
            let quadrants = registry.quadrants();
            if json {
                return print_json(&quadrants);
            }
            print!("{}", format_quadrants(&quadrants, registry.len()));
        }
    }
    Ok(())
}

fn run_concern(
    registry: &mut Registry,
    command: ConcernCommand,
    storage: &Storage,
) -> Result<(), String> {
    match command {
        ConcernCommand::Add { reference, text } => {
            let id = registry.resolve(&reference).map_err(|e| e.to_string())?.id;
            let updated = registry.add_concern(id, &text).map_err(|e| e.to_string())?;
            save(storage, updated)?;
            println!("{} now has {} concerns", updated.name, updated.concerns.len());
        }
        ConcernCommand::Remove { reference, number } => {
            let id = registry.resolve(&reference).map_err(|e| e.to_string())?.id;
            let index = number
                .checked_sub(1)
                .ok_or_else(|| "concern numbers start at 1".to_string())?;
            let removed = registry
                .remove_concern(id, index)
                .map_err(|e| e.to_string())?;
            if let Some(stakeholder) = registry.get(id) {
                save(storage, stakeholder)?;
            }
            println!("Removed concern: {removed}");
        }
    }
    Ok(())
}

fn load(storage: &Storage) -> Result<Registry, String> {
    storage
        .load_stakeholders()
        .map(Registry::from_stakeholders)
        .map_err(|e| format!("failed to load stakeholders: {e}"))
}

fn save(storage: &Storage, stakeholder: &Stakeholder) -> Result<(), String> {
    storage
        .save_stakeholder(stakeholder)
        .map_err(|e| format!("failed to save stakeholder: {e}"))
}
