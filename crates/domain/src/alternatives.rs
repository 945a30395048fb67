use std::collections::HashSet;

use crate::{Catalog, Exercise, QueryError, text};

const PRIMARY_PRIMARY: u32 = 10;
const PRIMARY_SECONDARY: u32 = 5;
const SECONDARY_SECONDARY: u32 = 3;
const SAME_BODY_PART: u32 = 5;
const SAME_CATEGORY: u32 = 3;
const SAME_EQUIPMENT: u32 = 2;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AlternativesQuery {
    pub exercise_id: String,
    /// Defaults to the primary muscles of the reference exercise.
    pub target_muscles: Option<Vec<String>>,
    pub equipment: Option<String>,
    pub limit: Option<usize>,
}

impl AlternativesQuery {
    #[must_use]
    pub fn new(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            ..Self::default()
        }
    }

    /// Exercises sharing at least one target muscle with the reference exercise, most similar
    /// first. The reference exercise itself is never included.
    pub fn alternatives<'a>(
        &self,
        catalog: &'a Catalog,
        limit: usize,
    ) -> Result<Vec<&'a Exercise>, QueryError> {
        let reference = catalog.get_by_str(&self.exercise_id)?;

        let target_muscles = match &self.target_muscles {
            Some(muscles) if muscles.iter().any(|m| !m.trim().is_empty()) => muscles.clone(),
            _ => reference.primary_muscles.clone(),
        };
        let equipment = self
            .equipment
            .as_deref()
            .map(text::normalize)
            .filter(|e| !e.is_empty());

        let mut scored = catalog
            .all()
            .iter()
            .filter(|e| e.id != reference.id)
            .filter(|e| e.targets_any(&target_muscles))
            .filter(|e| {
                equipment
                    .as_ref()
                    .is_none_or(|equipment| text::normalize(&e.equipment) == *equipment)
            })
            .map(|e| (similarity(reference, e), e))
            .collect::<Vec<_>>();
        scored.sort_by(|(a, _), (b, _)| b.cmp(a));

        Ok(scored.into_iter().take(limit).map(|(_, e)| e).collect())
    }
}

/// Weighted overlap of muscles and attributes between two exercises.
#[must_use]
pub fn similarity(reference: &Exercise, candidate: &Exercise) -> u32 {
    let reference_primary = muscle_set(&reference.primary_muscles);
    let reference_secondary = muscle_set(&reference.secondary_muscles);
    let candidate_primary = muscle_set(&candidate.primary_muscles);
    let candidate_secondary = muscle_set(&candidate.secondary_muscles);

    let overlap = |a: &HashSet<String>, b: &HashSet<String>, weight: u32| {
        u32::try_from(a.intersection(b).count()).unwrap_or(u32::MAX) * weight
    };

    let mut score = overlap(&reference_primary, &candidate_primary, PRIMARY_PRIMARY)
        + overlap(&reference_primary, &candidate_secondary, PRIMARY_SECONDARY)
        + overlap(&reference_secondary, &candidate_primary, PRIMARY_SECONDARY)
        + overlap(&reference_secondary, &candidate_secondary, SECONDARY_SECONDARY);

    if same(&reference.body_part, &candidate.body_part) {
        score += SAME_BODY_PART;
    }
    if same(&reference.category, &candidate.category) {
        score += SAME_CATEGORY;
    }
    if same(&reference.equipment, &candidate.equipment) {
        score += SAME_EQUIPMENT;
    }

    score
}

fn muscle_set(muscles: &[String]) -> HashSet<String> {
    muscles.iter().map(|m| text::normalize(m)).collect()
}

fn same(a: &str, b: &str) -> bool {
    text::normalize(a) == text::normalize(b)
}
