use crate::{Pagination, QueryError};

/// Query defaults and bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub default_limit: usize,
    pub max_limit: usize,
    pub default_alternatives_limit: usize,
    pub max_alternatives_limit: usize,
    /// Minimum normalized edit similarity for a fuzzy name match.
    pub fuzzy_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
            default_alternatives_limit: 10,
            max_alternatives_limit: 50,
            fuzzy_threshold: 0.7,
        }
    }
}

impl Settings {
    /// Falls back to the defaults for missing values and clamps the limit into the allowed
    /// range.
    #[must_use]
    pub fn pagination(&self, limit: Option<usize>, offset: Option<usize>) -> Pagination {
        Pagination {
            limit: clamp(limit.unwrap_or(self.default_limit), self.max_limit),
            offset: offset.unwrap_or(0),
        }
    }

    /// Like [`Settings::pagination`], but rejects a limit outside of the allowed range.
    pub fn try_pagination(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Pagination, QueryError> {
        if let Some(limit) = limit {
            check_limit(limit, self.max_limit)?;
        }
        Ok(self.pagination(limit, offset))
    }

    #[must_use]
    pub fn alternatives_limit(&self, limit: Option<usize>) -> usize {
        clamp(
            limit.unwrap_or(self.default_alternatives_limit),
            self.max_alternatives_limit,
        )
    }

    pub fn try_alternatives_limit(&self, limit: Option<usize>) -> Result<usize, QueryError> {
        if let Some(limit) = limit {
            check_limit(limit, self.max_alternatives_limit)?;
        }
        Ok(self.alternatives_limit(limit))
    }
}

fn clamp(limit: usize, max: usize) -> usize {
    limit.clamp(1, max.max(1))
}

fn check_limit(limit: usize, max: usize) -> Result<(), QueryError> {
    if limit == 0 || limit > max {
        return Err(QueryError::InvalidParameter {
            name: "limit",
            reason: format!("must be between 1 and {max} ({limit})"),
        });
    }
    Ok(())
}
