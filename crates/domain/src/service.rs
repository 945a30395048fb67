use log::{debug, error, info, warn};

use crate::{
    AlternativesQuery, Catalog, DataLoadError, Exercise, ExerciseFilter, ExerciseRecord, Field,
    IdValidation, Index, IntegrityReport, Page, Pagination, QueryError, ReadError,
    RecordValidationError, Settings, Stats, ValidatedRecords, validate_records,
};

/// Source of raw exercise records.
pub trait CatalogRepository {
    /// Records that could not be decoded are returned as errors so that the remaining records
    /// can still be loaded.
    fn read_records(
        &self,
    ) -> Result<Vec<Result<ExerciseRecord, RecordValidationError>>, ReadError>;
}

pub trait ExerciseService {
    /// Clamps out-of-range pagination parameters.
    fn search_exercises(&self, filter: &ExerciseFilter) -> Page<'_>;
    /// Rejects out-of-range pagination parameters.
    fn try_search_exercises(&self, filter: &ExerciseFilter) -> Result<Page<'_>, QueryError>;
    fn get_exercise_by_id(&self, id: &str) -> Result<&Exercise, QueryError>;
    fn filter_by_equipment(
        &self,
        equipment: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Page<'_>;
    fn filter_by_category(
        &self,
        category: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Page<'_>;
    fn filter_by_body_part(
        &self,
        body_part: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Page<'_>;
    fn filter_by_muscle(
        &self,
        muscle: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Page<'_>;
    fn find_alternatives(&self, query: &AlternativesQuery) -> Result<Vec<&Exercise>, QueryError>;
    fn validate_ids(&self, ids: &[String]) -> IdValidation;
}

pub trait MetadataService {
    fn get_categories(&self) -> Vec<String>;
    fn get_equipment_types(&self) -> Vec<String>;
    fn get_muscle_groups(&self) -> Vec<String>;
    fn get_body_parts(&self) -> Vec<String>;
    fn get_apple_categories(&self) -> Vec<String>;
    fn get_stats(&self) -> Stats;
    fn get_integrity_report(&self) -> IntegrityReport;
}

/// The loaded exercise catalog with its indexes.
///
/// A service is immutable after loading and can be shared between threads.
pub struct Service {
    catalog: Catalog,
    index: Index,
    settings: Settings,
    rejected: usize,
}

impl Service {
    pub fn load(repository: &impl CatalogRepository) -> Result<Self, DataLoadError> {
        Self::load_with_settings(repository, Settings::default())
    }

    pub fn load_with_settings(
        repository: &impl CatalogRepository,
        settings: Settings,
    ) -> Result<Self, DataLoadError> {
        let records = repository
            .read_records()
            .inspect_err(|err| error!("failed to read exercise catalog: {err}"))?;
        Self::from_records(records, settings)
    }

    pub fn from_records(
        records: impl IntoIterator<Item = Result<ExerciseRecord, RecordValidationError>>,
        settings: Settings,
    ) -> Result<Self, DataLoadError> {
        let ValidatedRecords {
            exercises,
            rejected,
        } = validate_records(records);

        if exercises.is_empty() {
            error!(
                "failed to load exercise catalog: no valid exercises ({} rejected)",
                rejected.len()
            );
            return Err(DataLoadError::NoValidRecords {
                rejected: rejected.len(),
            });
        }

        let catalog = Catalog::new(exercises);
        let index = Index::build(&catalog);

        info!(
            "loaded {} exercises ({} rejected, {} duplicates)",
            catalog.len(),
            rejected.len(),
            catalog.duplicates().len()
        );

        Ok(Self {
            catalog,
            index,
            settings,
            rejected: rejected.len(),
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn index(&self) -> &Index {
        &self.index
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn search(&self, filter: &ExerciseFilter, pagination: Pagination) -> Page<'_> {
        let candidates = filter.candidates(&self.catalog, &self.index);
        let ranked = filter.rank(candidates, self.settings.fuzzy_threshold);
        pagination.page(ranked)
    }

    fn filter_page(
        &self,
        filter: &ExerciseFilter,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Page<'_> {
        self.search(filter, self.settings.pagination(limit, offset))
    }
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                QueryError::NotFound(_) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                QueryError::InvalidParameter { .. } => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl ExerciseService for Service {
    fn search_exercises(&self, filter: &ExerciseFilter) -> Page<'_> {
        self.search(
            filter,
            self.settings.pagination(filter.limit, filter.offset),
        )
    }

    fn try_search_exercises(&self, filter: &ExerciseFilter) -> Result<Page<'_>, QueryError> {
        log_on_error!(
            self.settings
                .try_pagination(filter.limit, filter.offset)
                .map(|pagination| self.search(filter, pagination)),
            "search",
            "exercises"
        )
    }

    fn get_exercise_by_id(&self, id: &str) -> Result<&Exercise, QueryError> {
        log_on_error!(self.catalog.get_by_str(id), "get", "exercise")
    }

    fn filter_by_equipment(
        &self,
        equipment: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Page<'_> {
        let filter = ExerciseFilter {
            equipment: Some(equipment.to_string()),
            ..ExerciseFilter::default()
        };
        self.filter_page(&filter, limit, offset)
    }

    fn filter_by_category(
        &self,
        category: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Page<'_> {
        let filter = ExerciseFilter {
            category: Some(category.to_string()),
            ..ExerciseFilter::default()
        };
        self.filter_page(&filter, limit, offset)
    }

    fn filter_by_body_part(
        &self,
        body_part: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Page<'_> {
        let filter = ExerciseFilter {
            body_part: Some(body_part.to_string()),
            ..ExerciseFilter::default()
        };
        self.filter_page(&filter, limit, offset)
    }

    fn filter_by_muscle(
        &self,
        muscle: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Page<'_> {
        let filter = ExerciseFilter {
            muscles: vec![muscle.to_string()],
            ..ExerciseFilter::default()
        };
        self.filter_page(&filter, limit, offset)
    }

    fn find_alternatives(&self, query: &AlternativesQuery) -> Result<Vec<&Exercise>, QueryError> {
        log_on_error!(
            query.alternatives(
                &self.catalog,
                self.settings.alternatives_limit(query.limit)
            ),
            "find",
            "alternatives"
        )
    }

    fn validate_ids(&self, ids: &[String]) -> IdValidation {
        IdValidation::new(&self.catalog, ids)
    }
}

impl MetadataService for Service {
    fn get_categories(&self) -> Vec<String> {
        self.index.keys(Field::Category)
    }

    fn get_equipment_types(&self) -> Vec<String> {
        self.index.keys(Field::Equipment)
    }

    fn get_muscle_groups(&self) -> Vec<String> {
        self.index.keys(Field::Muscle)
    }

    fn get_body_parts(&self) -> Vec<String> {
        self.index.keys(Field::BodyPart)
    }

    fn get_apple_categories(&self) -> Vec<String> {
        self.index.keys(Field::AppleCategory)
    }

    fn get_stats(&self) -> Stats {
        Stats::new(&self.catalog, &self.index)
    }

    fn get_integrity_report(&self) -> IntegrityReport {
        IntegrityReport {
            duplicates: self.catalog.duplicates().to_vec(),
            rejected: self.rejected,
        }
    }
}
