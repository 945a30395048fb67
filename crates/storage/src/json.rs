use exercise_catalog_domain as domain;

/// Decodes a catalog document into raw records.
///
/// The document is either a bare array of exercises or an object with an `exercises` array.
/// Records that do not match the record shape are returned as errors so that the remaining
/// records can still be loaded.
pub fn decode(
    bytes: &[u8],
) -> Result<Vec<Result<domain::ExerciseRecord, domain::RecordValidationError>>, domain::ReadError>
{
    let value = serde_json::from_slice::<serde_json::Value>(bytes)
        .map_err(|err| domain::ReadError::InvalidFormat(err.to_string()))?;
    let document = serde_json::from_value::<Document>(value).map_err(|_| {
        domain::ReadError::InvalidFormat(
            "expected an array of exercises or an object with an `exercises` array".to_string(),
        )
    })?;

    Ok(document
        .into_records()
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_record(index, value))
        .collect())
}

fn decode_record(
    index: usize,
    value: serde_json::Value,
) -> Result<domain::ExerciseRecord, domain::RecordValidationError> {
    let id = value
        .get("id")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string);
    serde_json::from_value::<Record>(value)
        .map(domain::ExerciseRecord::from)
        .map_err(|err| domain::RecordValidationError {
            id,
            ..domain::RecordValidationError::malformed(index, err.to_string())
        })
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Document {
    Array(Vec<serde_json::Value>),
    Object { exercises: Vec<serde_json::Value> },
}

impl Document {
    fn into_records(self) -> Vec<serde_json::Value> {
        match self {
            Document::Array(records) | Document::Object { exercises: records } => records,
        }
    }
}

/// An exercise as found in the catalog source. Missing and `null` fields are left to the
/// record validation.
#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct Record {
    id: Option<String>,
    name: Option<String>,
    equipment: Option<String>,
    category: Option<String>,
    apple_category: Option<String>,
    body_part: Option<String>,
    primary_muscles: Option<Vec<String>>,
    secondary_muscles: Option<Vec<String>>,
    instructions: Option<Vec<String>>,
    images: Option<Vec<String>>,
}

impl From<Record> for domain::ExerciseRecord {
    fn from(value: Record) -> Self {
        Self {
            id: value.id,
            name: value.name,
            equipment: value.equipment,
            category: value.category,
            apple_category: value.apple_category,
            body_part: value.body_part,
            primary_muscles: value.primary_muscles,
            secondary_muscles: value.secondary_muscles,
            instructions: value.instructions,
            images: value.images,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub equipment: String,
    pub category: String,
    pub apple_category: String,
    pub body_part: String,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub instructions: Vec<String>,
    pub images: Vec<String>,
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            equipment: value.equipment.clone(),
            category: value.category.clone(),
            apple_category: value.apple_category.clone(),
            body_part: value.body_part.clone(),
            primary_muscles: value.primary_muscles.clone(),
            secondary_muscles: value.secondary_muscles.clone(),
            instructions: value.instructions.clone(),
            images: value.images.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = domain::RecordValidationError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        domain::ExerciseRecord {
            id: Some(value.id),
            name: Some(value.name),
            equipment: Some(value.equipment),
            category: Some(value.category),
            apple_category: Some(value.apple_category),
            body_part: Some(value.body_part),
            primary_muscles: Some(value.primary_muscles),
            secondary_muscles: Some(value.secondary_muscles),
            instructions: Some(value.instructions),
            images: Some(value.images),
        }
        .validate(0)
    }
}

/// A page of search results.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub exercises: Vec<Exercise>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

impl From<domain::Page<'_>> for SearchResult {
    fn from(value: domain::Page<'_>) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Page<'_>> for SearchResult {
    fn from(value: &domain::Page<'_>) -> Self {
        Self {
            exercises: value.exercises.iter().map(|e| Exercise::from(*e)).collect(),
            total: value.total,
            limit: value.limit,
            offset: value.offset,
            has_more: value.has_more,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IdValidation {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl From<domain::IdValidation> for IdValidation {
    fn from(value: domain::IdValidation) -> Self {
        Self {
            valid: value.valid,
            invalid: value.invalid,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
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

impl From<&domain::Stats> for Stats {
    fn from(value: &domain::Stats) -> Self {
        Self {
            total_exercises: value.total_exercises,
            average_instructions: value.average_instructions,
            average_images: value.average_images,
            categories: value.categories,
            equipment_types: value.equipment_types,
            muscles: value.muscles,
            body_parts: value.body_parts,
            apple_categories: value.apple_categories,
        }
    }
}
