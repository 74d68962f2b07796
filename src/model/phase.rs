//! Phase catalog records.
//!
//! Every record borrows `'static` data: the catalog is compiled in and never
//! changes for the lifetime of the process, so it can be shared freely.

use std::fmt;

use serde::Serialize;

/// One stage of the methodology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Unique slug, e.g. `phase-c-app`.
    pub id: &'static str,

    /// Short display label, e.g. `C-App`. Unique by convention only.
    pub code: &'static str,

    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub objectives: &'static [&'static str],
    pub inputs: &'static [&'static str],
    pub outputs: &'static [&'static str],

    /// Ordered steps. Never empty; the wizard walks them in this order.
    pub steps: &'static [Step],

    pub deliverables: &'static [Deliverable],
    pub artifacts: &'static [Artifact],
    pub key_questions: &'static [&'static str],
    pub stakeholder_focus: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl Phase {
    /// Number of deliverables flagged as required.
    #[must_use]
    pub fn required_deliverables(&self) -> usize {
        self.deliverables.iter().filter(|d| d.required).count()
    }
}

/// One ordered action within a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Unique across the whole catalog, so completion can be tracked by id alone.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,

    /// Optional practical hints. Empty when the step has none.
    pub tips: &'static [&'static str],
}

/// A named output document of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deliverable {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A typed reference item produced during a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub id: &'static str,
    pub name: &'static str,

    #[serde(rename = "type")]
    pub kind: ArtifactKind,

    pub description: &'static str,
}

/// What shape an artifact takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A list of building blocks.
    Catalog,

    /// A grid relating two kinds of building block.
    Matrix,

    /// A picture of building blocks and their relationships.
    Diagram,
}

impl ArtifactKind {
    /// All kinds in display order.
    pub const ALL: [Self; 3] = [Self::Catalog, Self::Matrix, Self::Diagram];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Matrix => "matrix",
            Self::Diagram => "diagram",
        }
    }

    /// Plural heading used when grouping artifacts.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Catalog => "Catalogs",
            Self::Matrix => "Matrices",
            Self::Diagram => "Diagrams",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STEPS: &[Step] = &[Step {
        id: "x1",
        name: "Only step",
        description: "The one thing to do",
        tips: &[],
    }];

    static DELIVERABLES: &[Deliverable] = &[
        Deliverable {
            id: "x-d1",
            name: "Mandatory",
            description: "",
            required: true,
        },
        Deliverable {
            id: "x-d2",
            name: "Optional",
            description: "",
            required: false,
        },
    ];

    static PHASE: Phase = Phase {
        id: "x",
        code: "X",
        name: "Example",
        full_name: "Example Phase",
        description: "",
        objectives: &[],
        inputs: &[],
        outputs: &[],
        steps: STEPS,
        deliverables: DELIVERABLES,
        artifacts: &[Artifact {
            id: "x-a1",
            name: "Things Catalog",
            kind: ArtifactKind::Catalog,
            description: "",
        }],
        key_questions: &[],
        stakeholder_focus: &[],
        tips: &[],
    };

    #[test]
    fn counts_required_deliverables() {
        assert_eq!(PHASE.required_deliverables(), 1);
    }

    #[test]
    fn artifact_kind_serializes_under_type_key() {
        let json = serde_json::to_value(PHASE.artifacts[0]).unwrap();
        assert_eq!(json["type"], "catalog");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn step_without_tips_serializes_empty_list() {
        let json = serde_json::to_value(STEPS[0]).unwrap();
        assert_eq!(json["tips"], serde_json::json!([]));
    }

    #[test]
    fn phase_serializes_camel_case() {
        let json = serde_json::to_value(PHASE).unwrap();
        assert_eq!(json["fullName"], "Example Phase");
        assert!(json.get("keyQuestions").is_some());
    }
}
