use std::str::FromStr;

use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{Name, text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub equipment: String,
    pub category: String,
    pub apple_category: String,
    pub body_part: String,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub instructions: Vec<String>,
    pub images: Vec<String>,
}

impl Exercise {
    /// Primary muscles followed by secondary muscles.
    pub fn muscles(&self) -> impl Iterator<Item = &str> + Clone {
        self.primary_muscles
            .iter()
            .chain(&self.secondary_muscles)
            .map(String::as_str)
    }

    /// Whether any of the given muscles is worked by this exercise, either as primary or as
    /// secondary muscle. Muscles are compared case-insensitively.
    #[must_use]
    pub fn targets_any(&self, muscles: &[String]) -> bool {
        muscles.iter().any(|muscle| {
            let muscle = text::normalize(muscle);
            self.muscles().any(|m| text::normalize(m) == muscle)
        })
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl FromStr for ExerciseID {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}
