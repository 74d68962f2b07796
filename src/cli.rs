//! CLI interface for the guide.
//!
//! Each subcommand is non-interactive: arguments in, text (or `--json`) out.
//! Running `adm` with no subcommand opens the terminal UI instead.
//!
//! Commands split into three groups:
//!
//! - `adm phases|phase|nav|artifacts|deliverables|stats`: read the catalog.
//! - `adm wizard …`: move through the steps; progress is saved between runs.
//! - `adm stakeholder …`: edit the stakeholder registry.
//!
//! Phase references accept an id (`phase-a`) or a code (`A`, `c-app`).
//! Stakeholder references accept a full UUID or an unambiguous prefix.

mod format;
mod stakeholder;
mod wizard;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::catalog;
use crate::config::Config;
use crate::model::{ArtifactKind, Phase};
use crate::storage::Storage;
use crate::wheel::{Point, Wheel};

pub use stakeholder::StakeholderCommand;
pub use wizard::WizardCommand;

use format::{format_artifacts, format_deliverables, format_phase_detail, format_phase_list};

/// Study the architecture development cycle, one phase at a time.
#[derive(Debug, Parser)]
#[command(name = "adm", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// What to do. Omit to open the interactive guide.
    #[command(subcommand)]
    pub command: Option<Command>,
}

const WORKFLOW_HELP: &str = r"Workflow: studying a phase
  1. adm phases
  2. adm phase A
  3. adm wizard phase 2
  4. adm wizard toggle     (mark the current step done)
  5. adm wizard next

Stakeholders:
  adm stakeholder add --name Dana --role CFO --influence high --interest low
  adm stakeholder matrix";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every phase in cycle order.
    Phases {
        #[arg(long)]
        json: bool,
    },

    /// Show one phase in full.
    Phase {
        /// Phase id or code.
        reference: String,

        #[arg(long)]
        json: bool,
    },

    /// Show the phases before and after a phase.
    Nav {
        /// Phase id or code.
        reference: String,
    },

    /// List artifacts across all phases, grouped by kind.
    Artifacts {
        /// Only list artifacts of this kind.
        #[arg(long, value_enum)]
        kind: Option<ArtifactKindArg>,

        #[arg(long)]
        json: bool,
    },

    /// List deliverables across all phases.
    Deliverables {
        /// Only list required deliverables.
        #[arg(long)]
        required: bool,

        #[arg(long)]
        json: bool,
    },

    /// Headline counts over the whole catalog.
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Walk the phases step by step. Shows where you are when no action is given.
    Wizard {
        #[command(subcommand)]
        command: Option<WizardCommand>,
    },

    /// Manage the stakeholder registry.
    Stakeholder {
        #[command(subcommand)]
        command: StakeholderCommand,
    },

    /// Lay out the phase wheel, or find the phase under a point.
    Wheel {
        /// Hit-test a point and show the phase under it.
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        hit: Option<Vec<f64>>,

        #[arg(long)]
        json: bool,
    },
}

/// CLI-facing artifact kind, mapped to the domain `ArtifactKind`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ArtifactKindArg {
    /// Lists of building blocks.
    Catalog,
    /// Grids relating two kinds of building block.
    Matrix,
    /// Pictures of building blocks and relationships.
    Diagram,
}

impl ArtifactKindArg {
    fn to_domain(self) -> ArtifactKind {
        match self {
            Self::Catalog => ArtifactKind::Catalog,
            Self::Matrix => ArtifactKind::Matrix,
            Self::Diagram => ArtifactKind::Diagram,
        }
    }
}

/// Run one CLI command, returning an error message on failure.
pub fn run(command: Command, config: &Config, storage: &Storage) -> Result<(), String> {
    match command {
        Command::Phases { json } => cmd_phases(json),
        Command::Phase { reference, json } => cmd_phase(&reference, json),
        Command::Nav { reference } => cmd_nav(&reference),
        Command::Artifacts { kind, json } => {
            cmd_artifacts(kind.map(ArtifactKindArg::to_domain), json)
        }
        Command::Deliverables { required, json } => cmd_deliverables(required, json),
        Command::Stats { json } => cmd_stats(json),
        Command::Wizard { command } => wizard::run(command.unwrap_or_default(), storage),
        Command::Stakeholder { command } => stakeholder::run(command, storage),
        Command::Wheel { hit, json } => cmd_wheel(config, hit.as_deref(), json),
    }
}

/// Resolve a phase reference or fail with a not-found message.
fn require_phase(reference: &str) -> Result<&'static Phase, String> {
    catalog::find(reference).ok_or_else(|| format!("phase not found: '{reference}'"))
}

/// Print a value as pretty JSON.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize: {e}"))?;
    println!("{json}");
    Ok(())
}

fn cmd_phases(json: bool) -> Result<(), String> {
    let phases = catalog::all_phases();
    if json {
        return print_json(phases);
    }
    print!("{}", format_phase_list(phases));
    Ok(())
}

fn cmd_phase(reference: &str, json: bool) -> Result<(), String> {
    let phase = require_phase(reference)?;
    if json {
        return print_json(phase);
    }
    print!("{}", format_phase_detail(phase));

    let nav = catalog::navigation(phase.id);
    let prev = nav.prev.map_or("-", |p| p.code);
    let next = nav.next.map_or("-", |p| p.code);
    println!("\n← {prev}    {next} →");
    Ok(())
}

fn cmd_nav(reference: &str) -> Result<(), String> {
    let phase = require_phase(reference)?;
    let nav = catalog::navigation(phase.id);
    let describe = |p: Option<&Phase>| {
        p.map_or_else(
            || "(none)".to_string(),
            |p| format!("{}  {}", p.code, p.full_name),
        )
    };
    println!("prev: {}", describe(nav.prev));
    println!("this: {}  {}", phase.code, phase.full_name);
    println!("next: {}", describe(nav.next));
    Ok(())
}

fn cmd_artifacts(kind: Option<ArtifactKind>, json: bool) -> Result<(), String> {
    let artifacts = match kind {
        Some(kind) => catalog::artifacts_of_kind(kind),
        None => catalog::artifact_index(),
    };
    if json {
        return print_json(&artifacts);
    }
    if artifacts.is_empty() {
        println!("No artifacts");
        return Ok(());
    }
    print!("{}", format_artifacts(&artifacts));
    Ok(())
}

fn cmd_deliverables(required_only: bool, json: bool) -> Result<(), String> {
    let deliverables: Vec<_> = catalog::deliverable_index()
        .into_iter()
        .filter(|d| !required_only || d.deliverable.required)
        .collect();
    if json {
        return print_json(&deliverables);
    }
    print!("{}", format_deliverables(&deliverables));
    Ok(())
}

fn cmd_stats(json: bool) -> Result<(), String> {
    let summary = catalog::summary();
    if json {
        return print_json(&summary);
    }
    println!("Phases        {}", summary.phases);
    println!("Steps         {}", summary.steps);
    println!(
        "Deliverables  {} ({} required)",
        summary.deliverables, summary.required_deliverables
    );
    println!(
        "Artifacts     {} ({} catalogs, {} matrices, {} diagrams)",
        summary.artifacts(),
        summary.catalogs,
        summary.matrices,
        summary.diagrams
    );
    Ok(())
}

fn cmd_wheel(config: &Config, hit: Option<&[f64]>, json: bool) -> Result<(), String> {
    let wheel = Wheel::new(config.geometry());

    let Some(coords) = hit else {
        if json {
            return print_json(&wheel.nodes());
        }
        let g = wheel.geometry();
        println!(
            "radius {}  centre ({}, {})",
            g.radius, g.center.x, g.center.y
        );
        for node in wheel.ring() {
            println!("{:<4} {:>8.2} {:>8.2}  {}", node.label, node.x, node.y, node.phase_id);
        }
        let hub = wheel.hub();
        println!("{:<4} {:>8.2} {:>8.2}  {} (hub)", hub.label, hub.x, hub.y, hub.phase_id);
        return Ok(());
    };

    let [x, y] = coords else {
        return Err("--hit takes exactly two numbers: X Y".to_string());
    };
    let detail = wheel
        .hit_test(Point::new(*x, *y))
        .and_then(|id| wheel.detail(id));
    if json {
        return print_json(&detail);
    }
    match detail {
        Some(d) => {
            println!("{}  {}", d.code, d.full_name);
            println!("{}", d.description);
            println!(
                "{} steps · {} deliverables · {} artifacts",
                d.steps, d.deliverables, d.artifacts
            );
        }
        None => println!("No phase at ({x}, {y})"),
    }
    Ok(())
}
