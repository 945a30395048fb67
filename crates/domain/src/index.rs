use std::collections::{HashMap, HashSet};

use log::debug;
use strum::IntoEnumIterator;

use crate::{Catalog, ExerciseID, text};

/// Exercise attributes with a secondary index.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Equipment,
    Category,
    BodyPart,
    AppleCategory,
    /// Primary and secondary muscles.
    Muscle,
}

/// Case-insensitive secondary indexes mapping an attribute value to the ids of all exercises
/// with that value, in catalog order.
#[derive(Debug, Default)]
pub struct Index {
    equipment: HashMap<String, Vec<ExerciseID>>,
    category: HashMap<String, Vec<ExerciseID>>,
    body_part: HashMap<String, Vec<ExerciseID>>,
    apple_category: HashMap<String, Vec<ExerciseID>>,
    muscle: HashMap<String, Vec<ExerciseID>>,
}

impl Index {
    #[must_use]
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self::default();
        index.rebuild(catalog);
        index
    }

    /// Discards all entries and indexes the catalog again.
    pub fn rebuild(&mut self, catalog: &Catalog) {
        for field in Field::iter() {
            self.map_mut(field).clear();
        }

        for exercise in catalog.all() {
            for (field, value) in [
                (Field::Equipment, &exercise.equipment),
                (Field::Category, &exercise.category),
                (Field::BodyPart, &exercise.body_part),
                (Field::AppleCategory, &exercise.apple_category),
            ] {
                self.map_mut(field)
                    .entry(text::normalize(value))
                    .or_default()
                    .push(exercise.id);
            }

            let muscles = exercise.muscles().map(text::normalize).collect::<HashSet<_>>();
            for muscle in muscles {
                self.muscle.entry(muscle).or_default().push(exercise.id);
            }
        }

        for field in Field::iter() {
            debug!("indexed {} distinct values of {field}", self.map(field).len());
        }
    }

    /// Ids of all exercises whose `field` equals `value`, ignoring case.
    #[must_use]
    pub fn ids(&self, field: Field, value: &str) -> &[ExerciseID] {
        self.map(field)
            .get(&text::normalize(value))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All indexed values of `field`, sorted.
    #[must_use]
    pub fn keys(&self, field: Field) -> Vec<String> {
        let mut keys = self.map(field).keys().cloned().collect::<Vec<_>>();
        keys.sort();
        keys
    }

    pub fn entries(&self, field: Field) -> impl Iterator<Item = (&str, &[ExerciseID])> {
        self.map(field)
            .iter()
            .map(|(key, ids)| (key.as_str(), ids.as_slice()))
    }

    fn map(&self, field: Field) -> &HashMap<String, Vec<ExerciseID>> {
        match field {
            Field::Equipment => &self.equipment,
            Field::Category => &self.category,
            Field::BodyPart => &self.body_part,
            Field::AppleCategory => &self.apple_category,
            Field::Muscle => &self.muscle,
        }
    }

    fn map_mut(&mut self, field: Field) -> &mut HashMap<String, Vec<ExerciseID>> {
        match field {
            Field::Equipment => &mut self.equipment,
            Field::Category => &mut self.category,
            Field::BodyPart => &mut self.body_part,
            Field::AppleCategory => &mut self.apple_category,
            Field::Muscle => &mut self.muscle,
        }
    }
}
