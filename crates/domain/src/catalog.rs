use std::collections::HashMap;

use log::warn;

use crate::{Exercise, ExerciseID, QueryError};

/// The immutable set of exercises, in source order.
#[derive(Debug, Default)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    positions: HashMap<ExerciseID, usize>,
    duplicates: Vec<ExerciseID>,
}

impl Catalog {
    /// Keeps the first occurrence of each id. Later occurrences are logged and recorded as
    /// duplicates.
    #[must_use]
    pub fn new(exercises: impl IntoIterator<Item = Exercise>) -> Self {
        let mut catalog = Self::default();

        for exercise in exercises {
            if catalog.positions.contains_key(&exercise.id) {
                warn!(
                    "ignoring duplicate exercise {} ({})",
                    exercise.id, exercise.name
                );
                catalog.duplicates.push(exercise.id);
                continue;
            }
            catalog
                .positions
                .insert(exercise.id, catalog.exercises.len());
            catalog.exercises.push(exercise);
        }

        catalog
    }

    pub fn get(&self, id: ExerciseID) -> Result<&Exercise, QueryError> {
        self.positions
            .get(&id)
            .map(|position| &self.exercises[*position])
            .ok_or_else(|| QueryError::NotFound(id.to_string()))
    }

    /// Looks up an exercise by its textual id. Ids that are not valid UUIDs cannot be part of
    /// the catalog and are reported as not found.
    pub fn get_by_str(&self, id: &str) -> Result<&Exercise, QueryError> {
        id.parse::<ExerciseID>()
            .map_err(|_| QueryError::NotFound(id.to_string()))
            .and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn contains(&self, id: ExerciseID) -> bool {
        self.positions.contains_key(&id)
    }

    #[must_use]
    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn duplicates(&self) -> &[ExerciseID] {
        &self.duplicates
    }
}
