//! The phase catalog: the authoritative, ordered, read-only list of phases.
//!
//! Lookups never fail loudly. An unknown id or code resolves to `None` and
//! the caller decides how to present it.

mod data;

use serde::Serialize;

use crate::model::{Artifact, ArtifactKind, Deliverable, Phase, Step};

use data::PHASES;

/// All phases in canonical order.
#[must_use]
pub fn all_phases() -> &'static [Phase] {
    PHASES
}

/// Look up a phase by its slug.
#[must_use]
pub fn phase_by_id(id: &str) -> Option<&'static Phase> {
    PHASES.iter().find(|p| p.id == id)
}

/// Look up a phase by its display code. First match wins.
#[must_use]
pub fn phase_by_code(code: &str) -> Option<&'static Phase> {
    PHASES.iter().find(|p| p.code == code)
}

/// Canonical position of a phase, by id.
#[must_use]
pub fn position(id: &str) -> Option<usize> {
    PHASES.iter().position(|p| p.id == id)
}

/// Resolve a user-typed reference: an id, an exact code, or a code in any case.
#[must_use]
pub fn find(reference: &str) -> Option<&'static Phase> {
    phase_by_id(reference)
        .or_else(|| phase_by_code(reference))
        .or_else(|| {
            PHASES
                .iter()
                .find(|p| p.code.eq_ignore_ascii_case(reference))
        })
}

/// The phases on either side of a phase in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhaseNavigation {
    pub prev: Option<&'static Phase>,
    pub next: Option<&'static Phase>,
}

/// Neighbors of `id` by position. Both sides are `None` for an unknown id.
#[must_use]
pub fn navigation(id: &str) -> PhaseNavigation {
    let Some(index) = position(id) else {
        return PhaseNavigation::default();
    };
    PhaseNavigation {
        prev: index.checked_sub(1).and_then(|i| PHASES.get(i)),
        next: PHASES.get(index + 1),
    }
}

/// Sum of every phase's step count.
#[must_use]
pub fn total_steps() -> usize {
    PHASES.iter().map(|p| p.steps.len()).sum()
}

/// Where a step sits in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLocation {
    pub phase_index: usize,
    pub step_index: usize,
    pub phase: &'static Phase,
    pub step: &'static Step,
}

/// Find a step anywhere in the catalog by its id.
#[must_use]
pub fn locate_step(step_id: &str) -> Option<StepLocation> {
    PHASES.iter().enumerate().find_map(|(phase_index, phase)| {
        phase
            .steps
            .iter()
            .position(|s| s.id == step_id)
            .map(|step_index| StepLocation {
                phase_index,
                step_index,
                phase,
                step: &phase.steps[step_index],
            })
    })
}

// ── Artifact index ──

/// The owning phase of an indexed deliverable or artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRef {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
}

impl From<&'static Phase> for PhaseRef {
    fn from(phase: &'static Phase) -> Self {
        Self {
            id: phase.id,
            code: phase.code,
            name: phase.name,
        }
    }
}

/// A deliverable tagged with the phase it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexedDeliverable {
    pub phase: PhaseRef,
    #[serde(flatten)]
    pub deliverable: &'static Deliverable,
}

/// An artifact tagged with the phase it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexedArtifact {
    pub phase: PhaseRef,
    #[serde(flatten)]
    pub artifact: &'static Artifact,
}

/// Every deliverable of every phase, in catalog order.
#[must_use]
pub fn deliverable_index() -> Vec<IndexedDeliverable> {
    PHASES
        .iter()
        .flat_map(|phase| {
            phase.deliverables.iter().map(move |deliverable| IndexedDeliverable {
                phase: phase.into(),
                deliverable,
            })
        })
        .collect()
}

/// Every artifact of every phase, in catalog order.
#[must_use]
pub fn artifact_index() -> Vec<IndexedArtifact> {
    PHASES
        .iter()
        .flat_map(|phase| {
            phase.artifacts.iter().map(move |artifact| IndexedArtifact {
                phase: phase.into(),
                artifact,
            })
        })
        .collect()
}

/// Every artifact of one kind, in catalog order.
#[must_use]
pub fn artifacts_of_kind(kind: ArtifactKind) -> Vec<IndexedArtifact> {
    artifact_index()
        .into_iter()
        .filter(|a| a.artifact.kind == kind)
        .collect()
}

/// Headline counts over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub phases: usize,
    pub steps: usize,
    pub deliverables: usize,
    pub required_deliverables: usize,
    pub catalogs: usize,
    pub matrices: usize,
    pub diagrams: usize,
}

impl CatalogSummary {
    /// Total artifacts of every kind.
    #[must_use]
    pub fn artifacts(&self) -> usize {
        self.catalogs + self.matrices + self.diagrams
    }
}

/// Count phases, steps, deliverables, and artifacts by kind.
#[must_use]
pub fn summary() -> CatalogSummary {
    let mut summary = CatalogSummary {
        phases: PHASES.len(),
        steps: total_steps(),
        deliverables: 0,
        required_deliverables: 0,
        catalogs: 0,
        matrices: 0,
        diagrams: 0,
    };
    for phase in PHASES {
        summary.deliverables += phase.deliverables.len();
        summary.required_deliverables += phase.required_deliverables();
        for artifact in phase.artifacts {
            match artifact.kind {
                ArtifactKind::Catalog => summary.catalogs += 1,
                ArtifactKind::Matrix => summary.matrices += 1,
                ArtifactKind::Diagram => summary.diagrams += 1,
            }
        }
    }
    summary
}
