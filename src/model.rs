//! Core data model for the guide.
//!
//! Two families of types live here: the immutable phase catalog records
//! (phases, steps, deliverables, artifacts) compiled into the binary, and the
//! user-owned stakeholder records edited at runtime.

mod phase;
mod stakeholder;

pub use phase::{Artifact, ArtifactKind, Deliverable, Phase, Step};
pub use stakeholder::{Level, Stakeholder, StakeholderDraft};
