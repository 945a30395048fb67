use crate::{Catalog, ExerciseID, Field, Index};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Stats {
    pub total_exercises: usize,
    pub average_instructions: f64,
    pub average_images: f64,
    pub categories: usize,
    pub equipment_types: usize,
    pub muscles: usize,
    pub body_parts: usize,
    pub apple_categories: usize,
}

impl Stats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(catalog: &Catalog, index: &Index) -> Self {
        let total = catalog.len();
        let instructions: usize = catalog.all().iter().map(|e| e.instructions.len()).sum();
        let images: usize = catalog.all().iter().map(|e| e.images.len()).sum();
        let average = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            }
        };

        Self {
            total_exercises: total,
            average_instructions: average(instructions),
            average_images: average(images),
            categories: index.keys(Field::Category).len(),
            equipment_types: index.keys(Field::Equipment).len(),
            muscles: index.keys(Field::Muscle).len(),
            body_parts: index.keys(Field::BodyPart).len(),
            apple_categories: index.keys(Field::AppleCategory).len(),
        }
    }
}

/// Data defects found while loading the catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    pub duplicates: Vec<ExerciseID>,
    pub rejected: usize,
}

impl IntegrityReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.rejected == 0
    }
}
