use crate::{Catalog, ExerciseID};

/// Partition of candidate ids into those present in and those absent from the catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdValidation {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl IdValidation {
    /// Input order is preserved within both partitions. Ids that are not valid UUIDs are
    /// invalid.
    #[must_use]
    pub fn new<S: AsRef<str>>(catalog: &Catalog, ids: &[S]) -> Self {
        let mut result = Self::default();

        for id in ids {
            let id = id.as_ref();
            let exists = id
                .parse::<ExerciseID>()
                .is_ok_and(|id| catalog.contains(id));
            if exists {
                result.valid.push(id.to_string());
            } else {
                result.invalid.push(id.to_string());
            }
        }

        result
    }

    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::data;

    #[test]
    fn test_id_validation_new() {
        assert_eq!(
            IdValidation::new(data::SERVICE.catalog(), &[data::SIT_UP_ID, "not-a-uuid"]),
            IdValidation {
                valid: vec![data::SIT_UP_ID.to_string()],
                invalid: vec!["not-a-uuid".to_string()],
            }
        );
    }

    #[test]
    fn test_id_validation_new_preserves_order() {
        let unknown = ExerciseID::nil().to_string();
        let squat = data::EXERCISE_SQUAT.id.to_string();
        let crunch = data::EXERCISE_CRUNCH.id.to_string();

        let result = IdValidation::new(
            data::SERVICE.catalog(),
            &[squat.clone(), unknown.clone(), crunch.clone(), String::new()],
        );

        assert_eq!(result.valid, vec![squat, crunch]);
        assert_eq!(result.invalid, vec![unknown, String::new()]);
        assert!(!result.all_valid());
    }

    #[test]
    fn test_id_validation_new_partitions_input() {
        let ids = data::EXERCISES
            .iter()
            .map(|e| e.id.to_string())
            .chain(["foo".to_string(), ExerciseID::from(42).to_string()])
            .collect::<Vec<_>>();

        let result = IdValidation::new(data::SERVICE.catalog(), &ids);

        let valid = result.valid.iter().collect::<HashSet<_>>();
        let invalid = result.invalid.iter().collect::<HashSet<_>>();
        assert!(valid.is_disjoint(&invalid));
        assert_eq!(
            valid.union(&invalid).copied().collect::<HashSet<_>>(),
            ids.iter().collect::<HashSet<_>>()
        );
        assert_eq!(result.valid.len(), data::EXERCISES.len());
    }

    #[test]
    fn test_id_validation_new_empty() {
        let result = IdValidation::new::<String>(data::SERVICE.catalog(), &[]);

        assert_eq!(result, IdValidation::default());
        assert!(result.all_valid());
    }
}
