//! Stakeholder registry and the influence/interest quadrant classifier.
//!
//! The registry is an ordered, in-memory collection keyed by id. It knows
//! nothing about storage; callers load it, edit it, and persist what changed.

use jiff::Timestamp;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::model::{Level, Stakeholder, StakeholderDraft};

/// Errors that can occur while editing the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("stakeholder not found: {0}")]
    NotFound(String),

    #[error("'{reference}' is ambiguous: matches {} stakeholders", .matches.len())]
    Ambiguous {
        reference: String,
        matches: Vec<Uuid>,
    },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("concern must not be blank")]
    BlankConcern,

    #[error("no concern at position {index}: the stakeholder has {count}")]
    ConcernOutOfRange { index: usize, count: usize },
}

pub type Result<T> = core::result::Result<T, RegistryError>;

/// The user's stakeholders, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    stakeholders: Vec<Stakeholder>,
}

impl Registry {
    /// Wrap stakeholders that were loaded from elsewhere.
    #[must_use]
    pub fn from_stakeholders(stakeholders: Vec<Stakeholder>) -> Self {
        Self { stakeholders }
    }

    /// Append an example sponsor, for first-time users.
    pub fn add_example(&mut self) -> &Stakeholder {
        self.stakeholders.push(Stakeholder {
            id: Uuid::new_v4(),
            name: "Example: CIO".into(),
            role: "Chief Information Officer".into(),
            organization: "IT Leadership".into(),
            concerns: vec![
                "Strategic alignment".into(),
                "Cost management".into(),
                "Risk mitigation".into(),
            ],
            influence: Level::High,
            interest: Level::High,
            phase: "All Phases".into(),
            notes: "Key sponsor for the architecture initiative".into(),
            created_at: Timestamp::now(),
        });
        &self.stakeholders[self.stakeholders.len() - 1]
    }

    #[must_use]
    pub fn list(&self) -> &[Stakeholder] {
        &self.stakeholders
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stakeholders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stakeholders.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Stakeholder> {
        self.stakeholders.iter().find(|s| s.id == id)
    }

    /// Resolve a full UUID or an unambiguous id prefix.
    pub fn resolve(&self, reference: &str) -> Result<&Stakeholder> {
        if let Ok(id) = reference.parse::<Uuid>() {
            return self
                .get(id)
                .ok_or_else(|| RegistryError::NotFound(reference.to_string()));
        }

        // Uuid displays in lowercase.
        let prefix = reference.to_ascii_lowercase();
        let matches: Vec<&Stakeholder> = self
            .stakeholders
            .iter()
            .filter(|s| s.id.to_string().starts_with(&prefix))
            .collect();

        match matches.as_slice() {
            [] => Err(RegistryError::NotFound(reference.to_string())),
            [only] => Ok(only),
            _ => Err(RegistryError::Ambiguous {
                reference: reference.to_string(),
                matches: matches.iter().map(|s| s.id).collect(),
            }),
        }
    }

    /// Add a stakeholder. Name and role must not be blank.
    pub fn create(&mut self, draft: StakeholderDraft) -> Result<&Stakeholder> {
        let draft = validate(draft)?;
        let stakeholder = Stakeholder {
            id: Uuid::new_v4(),
            name: draft.name,
            role: draft.role,
            organization: draft.organization,
            concerns: draft.concerns,
            influence: draft.influence,
            interest: draft.interest,
            phase: draft.phase,
            notes: draft.notes,
            created_at: Timestamp::now(),
        };
        info!(id = %stakeholder.id, name = %stakeholder.name, "stakeholder created");
        self.stakeholders.push(stakeholder);
        Ok(&self.stakeholders[self.stakeholders.len() - 1])
    }

    /// Replace every editable field of a stakeholder.
    pub fn update(&mut self, id: Uuid, draft: StakeholderDraft) -> Result<&Stakeholder> {
        let draft = validate(draft)?;
        let stakeholder = self.get_mut(id)?;
        stakeholder.name = draft.name;
        stakeholder.role = draft.role;
        stakeholder.organization = draft.organization;
        stakeholder.concerns = draft.concerns;
        stakeholder.influence = draft.influence;
        stakeholder.interest = draft.interest;
        stakeholder.phase = draft.phase;
        stakeholder.notes = draft.notes;
        info!(%id, "stakeholder updated");
        Ok(stakeholder)
    }

    /// Remove a stakeholder, returning it.
    pub fn remove(&mut self, id: Uuid) -> Result<Stakeholder> {
        let index = self
            .stakeholders
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        info!(%id, "stakeholder removed");
        Ok(self.stakeholders.remove(index))
    }

    /// Append a concern. Surrounding whitespace is trimmed.
    pub fn add_concern(&mut self, id: Uuid, concern: &str) -> Result<&Stakeholder> {
        let concern = concern.trim();
        if concern.is_empty() {
            return Err(RegistryError::BlankConcern);
        }
        let stakeholder = self.get_mut(id)?;
        stakeholder.concerns.push(concern.to_string());
        Ok(stakeholder)
    }

    /// Remove the concern at `index` (zero-based).
    pub fn remove_concern(&mut self, id: Uuid, index: usize) -> Result<String> {
        let stakeholder = self.get_mut(id)?;
        if index >= stakeholder.concerns.len() {
            return Err(RegistryError::ConcernOutOfRange {
                index,
                count: stakeholder.concerns.len(),
            });
        }
        Ok(stakeholder.concerns.remove(index))
    }

    /// Group the registry's stakeholders into quadrants.
    #[must_use]
    pub fn quadrants(&self) -> Quadrants<'_> {
        classify(&self.stakeholders)
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut Stakeholder> {
        self.stakeholders
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }
}

/// Trim the draft's text fields and check the required ones.
fn validate(mut draft: StakeholderDraft) -> Result<StakeholderDraft> {
    draft.name = draft.name.trim().to_string();
    draft.role = draft.role.trim().to_string();
    if draft.name.is_empty() {
        return Err(RegistryError::MissingField("name"));
    }
    if draft.role.is_empty() {
        return Err(RegistryError::MissingField("role"));
    }
    draft.concerns = draft
        .concerns
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    Ok(draft)
}

// ── Classifier ──

/// One cell of the influence/interest grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Quadrant {
    /// High influence, high interest.
    HighHigh,
    /// High influence, low interest.
    HighLow,
    /// Low influence, high interest.
    LowHigh,
    /// Low influence, low interest.
    LowLow,
}

impl Quadrant {
    /// Grid order: top row first, left to right.
    pub const ALL: [Self; 4] = [Self::HighHigh, Self::HighLow, Self::LowHigh, Self::LowLow];

    /// The quadrant for a pair of levels. `Medium` on either axis has none.
    #[must_use]
    pub fn of(influence: Level, interest: Level) -> Option<Self> {
        match (influence, interest) {
            (Level::High, Level::High) => Some(Self::HighHigh),
            (Level::High, Level::Low) => Some(Self::HighLow),
            (Level::Low, Level::High) => Some(Self::LowHigh),
            (Level::Low, Level::Low) => Some(Self::LowLow),
            (Level::Medium, _) | (_, Level::Medium) => None,
        }
    }

    /// The engagement strategy for stakeholders in this quadrant.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::HighHigh => "Manage Closely",
            Self::HighLow => "Keep Satisfied",
            Self::LowHigh => "Keep Informed",
            Self::LowLow => "Monitor",
        }
    }

    /// The axis levels, e.g. "High Influence, High Interest".
    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::HighHigh => "High Influence, High Interest",
            Self::HighLow => "High Influence, Low Interest",
            Self::LowHigh => "Low Influence, High Interest",
            Self::LowLow => "Low Influence, Low Interest",
        }
    }
}

/// Stakeholders grouped by quadrant, each group in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quadrants<'a> {
    pub high_high: Vec<&'a Stakeholder>,
    pub high_low: Vec<&'a Stakeholder>,
    pub low_high: Vec<&'a Stakeholder>,
    pub low_low: Vec<&'a Stakeholder>,
}

impl<'a> Quadrants<'a> {
    #[must_use]
    pub fn get(&self, quadrant: Quadrant) -> &[&'a Stakeholder] {
        match quadrant {
            Quadrant::HighHigh => &self.high_high,
            Quadrant::HighLow => &self.high_low,
            Quadrant::LowHigh => &self.low_high,
            Quadrant::LowLow => &self.low_low,
        }
    }

    /// Number of stakeholders placed in any quadrant.
    #[must_use]
    pub fn placed(&self) -> usize {
        Quadrant::ALL.iter().map(|q| self.get(*q).len()).sum()
    }
}

/// Partition stakeholders into the four quadrants.
///
/// Stakeholders rated `Medium` on either axis appear in no quadrant.
#[must_use]
pub fn classify(stakeholders: &[Stakeholder]) -> Quadrants<'_> {
    let mut quadrants = Quadrants::default();
    for stakeholder in stakeholders {
        let bucket = match Quadrant::of(stakeholder.influence, stakeholder.interest) {
            Some(Quadrant::HighHigh) => &mut quadrants.high_high,
            Some(Quadrant::HighLow) => &mut quadrants.high_low,
            Some(Quadrant::LowHigh) => &mut quadrants.low_high,
            Some(Quadrant::LowLow) => &mut quadrants.low_low,
            None => continue,
        };
        bucket.push(stakeholder);
    }
    quadrants
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, influence: Level, interest: Level) -> StakeholderDraft {
        StakeholderDraft {
            name: name.into(),
            role: "Role".into(),
            influence,
            interest,
            ..StakeholderDraft::default()
        }
    }

    fn registry_of(levels: &[(&str, Level, Level)]) -> Registry {
        let mut registry = Registry::default();
        for (name, influence, interest) in levels {
            registry.create(draft(name, *influence, *interest)).unwrap();
        }
        registry
    }

    fn names(group: &[&Stakeholder]) -> Vec<String> {
        group.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn classify_places_each_pair_in_one_bucket() {
        let registry = registry_of(&[
            ("first", Level::High, Level::High),
            ("second", Level::High, Level::Low),
            ("third", Level::Medium, Level::High),
        ]);
        let q = classify(registry.list());

        assert_eq!(names(&q.high_high), ["first"]);
        assert_eq!(names(&q.high_low), ["second"]);
        assert!(q.low_high.is_empty());
        assert!(q.low_low.is_empty());
        assert_eq!(q.placed(), 2);
    }

    #[test]
    fn classify_preserves_input_order() {
        let registry = registry_of(&[
            ("a", Level::Low, Level::Low),
            ("b", Level::High, Level::High),
            ("c", Level::Low, Level::Low),
            ("d", Level::Low, Level::Medium),
            ("e", Level::Low, Level::Low),
        ]);
        let q = registry.quadrants();
        assert_eq!(names(&q.low_low), ["a", "c", "e"]);
        assert_eq!(names(q.get(Quadrant::HighHigh)), ["b"]);
    }

    #[test]
    fn medium_never_rounds_into_a_quadrant() {
        for level in [Level::High, Level::Medium, Level::Low] {
            assert_eq!(Quadrant::of(Level::Medium, level), None);
            assert_eq!(Quadrant::of(level, Level::Medium), None);
        }
    }

    #[test]
    fn create_assigns_unique_ids() {
        let registry = registry_of(&[
            ("a", Level::Low, Level::Low),
            ("b", Level::Low, Level::Low),
        ]);
        assert_ne!(registry.list()[0].id, registry.list()[1].id);
    }

    #[test]
    fn create_requires_name_and_role() {
        let mut registry = Registry::default();
        let mut d = draft("  ", Level::Low, Level::Low);
        assert_eq!(
            registry.create(d.clone()).unwrap_err(),
            RegistryError::MissingField("name")
        );

        d.name = "Ana".into();
        d.role = String::new();
        assert_eq!(
            registry.create(d).unwrap_err(),
            RegistryError::MissingField("role")
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn create_trims_and_drops_blank_concerns() {
        let mut registry = Registry::default();
        let mut d = draft(" Ana ", Level::Low, Level::Low);
        d.concerns = vec![" cost ".into(), "   ".into(), "risk".into()];
        let created = registry.create(d).unwrap();
        assert_eq!(created.name, "Ana");
        assert_eq!(created.concerns, ["cost", "risk"]);
    }

    #[test]
    fn update_replaces_fields_and_keeps_identity() {
        let mut registry = registry_of(&[("a", Level::Low, Level::Low)]);
        let original = registry.list()[0].clone();

        let mut d = original.to_draft();
        d.name = "renamed".into();
        d.influence = Level::High;
        registry.update(original.id, d).unwrap();

        let updated = registry.get(original.id).unwrap();
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.influence, Level::High);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut registry = Registry::default();
        let err = registry
            .update(Uuid::new_v4(), draft("a", Level::Low, Level::Low))
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn remove_is_keyed_by_id() {
        let mut registry = registry_of(&[
            ("a", Level::Low, Level::Low),
            ("b", Level::Low, Level::Low),
        ]);
        let id = registry.list()[0].id;
        let removed = registry.remove(id).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(names(&registry.list().iter().collect::<Vec<_>>()), ["b"]);
        assert!(matches!(registry.remove(id), Err(RegistryError::NotFound(_))));
    }

    #[test]
    fn concerns_append_and_remove_by_position() {
        let mut registry = registry_of(&[("a", Level::Low, Level::Low)]);
        let id = registry.list()[0].id;

        registry.add_concern(id, "cost").unwrap();
        registry.add_concern(id, "  risk  ").unwrap();
        registry.add_concern(id, "time").unwrap();
        assert_eq!(registry.add_concern(id, " ").unwrap_err(), RegistryError::BlankConcern);

        assert_eq!(registry.remove_concern(id, 1).unwrap(), "risk");
        assert_eq!(registry.get(id).unwrap().concerns, ["cost", "time"]);
        assert_eq!(
            registry.remove_concern(id, 2).unwrap_err(),
            RegistryError::ConcernOutOfRange { index: 2, count: 2 }
        );
    }

    #[test]
    fn resolve_by_full_id_or_prefix() {
        let registry = registry_of(&[("a", Level::Low, Level::Low)]);
        let id = registry.list()[0].id;

        assert_eq!(registry.resolve(&id.to_string()).unwrap().id, id);
        assert_eq!(registry.resolve(&id.to_string()[..6]).unwrap().id, id);
        assert!(matches!(
            registry.resolve("not-an-id"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn resolve_prefix_ignores_case() {
        let registry = registry_of(&[("a", Level::Low, Level::Low)]);
        let id = registry.list()[0].id;
        let upper = id.to_string()[..8].to_ascii_uppercase();

        assert_eq!(registry.resolve(&upper).unwrap().id, id);
    }

    #[test]
    fn resolve_empty_prefix_is_ambiguous_with_many() {
        let registry = registry_of(&[
            ("a", Level::Low, Level::Low),
            ("b", Level::Low, Level::Low),
        ]);
        let err = registry.resolve("").unwrap_err();
        assert!(matches!(err, RegistryError::Ambiguous { ref matches, .. } if matches.len() == 2));
    }

    #[test]
    fn example_registry_has_a_key_sponsor() {
        let mut registry = Registry::default();
        registry.add_example();
        assert_eq!(registry.len(), 1);
        assert_eq!(names(&registry.quadrants().high_high), ["Example: CIO"]);
    }
}
