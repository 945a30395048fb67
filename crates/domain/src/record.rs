use log::warn;

use crate::{Exercise, ExerciseID, Name, RecordErrorKind, RecordValidationError};

/// An exercise as decoded from the catalog source, before validation.
///
/// Every field is optional so that missing fields can be reported individually. Type errors
/// (e.g. a number where a list is expected) are detected by the decoder and reported as
/// [`RecordErrorKind::Malformed`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub equipment: Option<String>,
    pub category: Option<String>,
    pub apple_category: Option<String>,
    pub body_part: Option<String>,
    pub primary_muscles: Option<Vec<String>>,
    pub secondary_muscles: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

impl ExerciseRecord {
    pub fn validate(self, index: usize) -> Result<Exercise, RecordValidationError> {
        let raw_id = self.id.clone();
        let error = |kind| RecordValidationError {
            index,
            id: raw_id.clone(),
            kind,
        };

        let id = required(self.id, "id").map_err(error)?;
        let id = id
            .parse::<ExerciseID>()
            .map_err(|_| error(RecordErrorKind::InvalidID(id.clone())))?;
        let name = required(self.name, "name").map_err(error)?;
        let name = Name::new(&name).map_err(|_| error(RecordErrorKind::Empty("name")))?;

        Ok(Exercise {
            id,
            name,
            equipment: required(self.equipment, "equipment").map_err(error)?,
            category: required(self.category, "category").map_err(error)?,
            apple_category: required(self.apple_category, "appleCategory").map_err(error)?,
            body_part: required(self.body_part, "bodyPart").map_err(error)?,
            primary_muscles: list(self.primary_muscles, "primaryMuscles", 1).map_err(error)?,
            secondary_muscles: list(self.secondary_muscles, "secondaryMuscles", 0)
                .map_err(error)?,
            instructions: list(self.instructions, "instructions", 1).map_err(error)?,
            images: list(self.images, "images", 0).map_err(error)?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RecordErrorKind> {
    let value = value.ok_or(RecordErrorKind::Missing(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordErrorKind::Empty(field));
    }
    Ok(trimmed.to_string())
}

/// Lists with `min == 0` may be omitted entirely.
fn list(
    values: Option<Vec<String>>,
    field: &'static str,
    min: usize,
) -> Result<Vec<String>, RecordErrorKind> {
    let values = match values {
        Some(values) => values,
        None if min == 0 => return Ok(vec![]),
        None => return Err(RecordErrorKind::Missing(field)),
    };
    if values.len() < min {
        return Err(RecordErrorKind::TooFew { field, min });
    }
    values
        .into_iter()
        .map(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Err(RecordErrorKind::Empty(field))
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct ValidatedRecords {
    pub exercises: Vec<Exercise>,
    pub rejected: Vec<RecordValidationError>,
}

/// Validates all records, keeping the valid ones in source order. Invalid records are logged
/// and skipped.
pub fn validate_records(
    records: impl IntoIterator<Item = Result<ExerciseRecord, RecordValidationError>>,
) -> ValidatedRecords {
    let mut result = ValidatedRecords::default();

    for (index, record) in records.into_iter().enumerate() {
        match record.and_then(|r| r.validate(index)) {
            Ok(exercise) => result.exercises.push(exercise),
            Err(err) => {
                warn!("skipping invalid exercise: {err}");
                result.rejected.push(err);
            }
        }
    }

    result
}
