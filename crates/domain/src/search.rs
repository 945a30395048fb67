use std::collections::HashSet;

use crate::{Catalog, Exercise, ExerciseID, Field, Index, text};

const EXACT_NAME: u32 = 100;
const NAME_CONTAINS: u32 = 50;
const FUZZY_NAME: f64 = 60.0;
const CATEGORY: u32 = 30;
const EQUIPMENT: u32 = 25;
const BODY_PART: u32 = 15;
const MUSCLE: u32 = 20;
const INSTRUCTION: u32 = 10;

const WORD_NAME: u32 = 10;
const WORD_CATEGORY: u32 = 5;
const WORD_EQUIPMENT: u32 = 3;
const WORD_BODY_PART: u32 = 3;
const WORD_MUSCLE: u32 = 2;
const WORD_INSTRUCTION: u32 = 2;

/// Words of up to this length are ignored when scoring multi-word queries.
const MIN_WORD_LEN: usize = 2;

/// Attribute filters, free-text query and pagination of an exercise search.
///
/// Equipment, category, body part and Apple category must match exactly (ignoring case). A
/// muscle filter matches if any of the given muscles is contained in the corresponding muscle
/// list, where `muscles` covers primary and secondary muscles. Blank values are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub equipment: Option<String>,
    pub category: Option<String>,
    pub body_part: Option<String>,
    pub apple_category: Option<String>,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub muscles: Vec<String>,
    pub query: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexed_values().next().is_none()
            && normalized(&self.primary_muscles).is_empty()
            && normalized(&self.secondary_muscles).is_empty()
            && normalized(&self.muscles).is_empty()
            && self.normalized_query().is_none()
    }

    /// All exercises matching the attribute filters, in catalog order.
    #[must_use]
    pub fn candidates<'a>(&self, catalog: &'a Catalog, index: &Index) -> Vec<&'a Exercise> {
        let mut lists = self
            .indexed_values()
            .map(|(field, value)| index.ids(field, value))
            .collect::<Vec<_>>();

        let exercises: Vec<&Exercise> = if lists.is_empty() {
            catalog.all().iter().collect()
        } else {
            lists.sort_by_key(|ids| ids.len());
            let (smallest, others) = lists.split_at(1);
            let others = others
                .iter()
                .map(|ids| ids.iter().copied().collect::<HashSet<ExerciseID>>())
                .collect::<Vec<_>>();
            smallest[0]
                .iter()
                .filter(|id| others.iter().all(|ids| ids.contains(*id)))
                .filter_map(|id| catalog.get(*id).ok())
                .collect()
        };

        let primary_muscles = normalized(&self.primary_muscles);
        let secondary_muscles = normalized(&self.secondary_muscles);
        let muscles = normalized(&self.muscles);

        exercises
            .into_iter()
            .filter(|e| {
                matches_any(
                    e.primary_muscles.iter().map(String::as_str),
                    &primary_muscles,
                )
            })
            .filter(|e| {
                matches_any(
                    e.secondary_muscles.iter().map(String::as_str),
                    &secondary_muscles,
                )
            })
            .filter(|e| matches_any(e.muscles(), &muscles))
            .collect()
    }

    /// Orders the candidates by relevance to the query, dropping irrelevant ones. Without a
    /// query the candidates are returned unchanged. Ties keep their previous order.
    #[must_use]
    pub fn rank<'a>(
        &self,
        candidates: Vec<&'a Exercise>,
        fuzzy_threshold: f64,
    ) -> Vec<&'a Exercise> {
        let Some(query) = self.normalized_query() else {
            return candidates;
        };

        let mut scored = candidates
            .into_iter()
            .map(|e| (relevance(e, &query, fuzzy_threshold), e))
            .filter(|(relevance, _)| relevance.is_relevant())
            .collect::<Vec<_>>();
        scored.sort_by(|(a, _), (b, _)| b.cmp(a));
        scored.into_iter().map(|(_, e)| e).collect()
    }

    fn indexed_values(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Equipment, &self.equipment),
            (Field::Category, &self.category),
            (Field::BodyPart, &self.body_part),
            (Field::AppleCategory, &self.apple_category),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (field, v))
        })
    }

    fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(text::normalize)
            .filter(|q| !q.is_empty())
    }
}

fn normalized(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| text::normalize(v))
        .filter(|v| !v.is_empty())
        .collect()
}

/// An empty list of wanted values matches everything.
fn matches_any<'a>(values: impl Iterator<Item = &'a str> + Clone, wanted: &[String]) -> bool {
    wanted.is_empty()
        || wanted
            .iter()
            .any(|w| values.clone().any(|v| text::contains(v, w)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl Pagination {
    #[must_use]
    pub fn page<'a>(&self, exercises: Vec<&'a Exercise>) -> Page<'a> {
        let total = exercises.len();
        let exercises = exercises
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect::<Vec<_>>();
        Page {
            has_more: self.offset.saturating_add(exercises.len()) < total,
            exercises,
            total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub exercises: Vec<&'a Exercise>,
    /// Number of matching exercises before pagination.
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

/// Relevance of an exercise for a text query. Exact name matches always rank above all other
/// matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Relevance {
    pub exact_name: bool,
    pub score: u32,
}

impl Relevance {
    #[must_use]
    pub fn is_relevant(&self) -> bool {
        self.exact_name || self.score > 0
    }
}

/// `query` must be normalized.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn relevance(exercise: &Exercise, query: &str, fuzzy_threshold: f64) -> Relevance {
    let mut relevance = Relevance::default();

    if query.is_empty() {
        return relevance;
    }

    let name = text::normalize(exercise.name.as_ref());

    if name == query {
        relevance.exact_name = true;
        relevance.score += EXACT_NAME;
    } else if name.contains(query) {
        relevance.score += NAME_CONTAINS;
    } else {
        let similarity = text::similarity(&name, query);
        if similarity > fuzzy_threshold {
            relevance.score += (similarity * FUZZY_NAME).round() as u32;
        }
    }

    relevance.score += score_fields(exercise, query, FieldWeights::QUERY);

    let words = query.split_whitespace().collect::<Vec<_>>();
    if words.len() > 1 {
        for word in words
            .into_iter()
            .filter(|w| w.chars().count() > MIN_WORD_LEN)
        {
            if name.contains(word) {
                relevance.score += WORD_NAME;
            }
            relevance.score += score_fields(exercise, word, FieldWeights::WORD);
        }
    }

    relevance
}

struct FieldWeights {
    category: u32,
    equipment: u32,
    body_part: u32,
    muscle: u32,
    instruction: u32,
}

impl FieldWeights {
    const QUERY: Self = Self {
        category: CATEGORY,
        equipment: EQUIPMENT,
        body_part: BODY_PART,
        muscle: MUSCLE,
        instruction: INSTRUCTION,
    };
    const WORD: Self = Self {
        category: WORD_CATEGORY,
        equipment: WORD_EQUIPMENT,
        body_part: WORD_BODY_PART,
        muscle: WORD_MUSCLE,
        instruction: WORD_INSTRUCTION,
    };
}

fn score_fields(exercise: &Exercise, term: &str, weights: FieldWeights) -> u32 {
    let mut score = 0;
    if text::contains(&exercise.category, term) {
        score += weights.category;
    }
    if text::contains(&exercise.equipment, term) {
        score += weights.equipment;
    }
    if text::contains(&exercise.body_part, term) {
        score += weights.body_part;
    }
    if exercise.muscles().any(|m| text::contains(m, term)) {
        score += weights.muscle;
    }
    if exercise.instructions.iter().any(|i| text::contains(i, term)) {
        score += weights.instruction;
    }
    score
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::tests::data;

    fn names(exercises: &[&Exercise]) -> Vec<String> {
        exercises.iter().map(|e| e.name.to_string()).collect()
    }

    #[rstest]
    #[case::no_filter(
        ExerciseFilter::default(),
        &["3/4 sit-up", "crunch", "air bike", "weighted crunch", "push-up", "barbell bench press", "dumbbell fly", "barbell full squat"]
    )]
    #[case::equipment(
        ExerciseFilter { equipment: Some("Dumbbell".into()), ..ExerciseFilter::default() },
        &["weighted crunch", "dumbbell fly"]
    )]
    #[case::equipment_no_substring(
        ExerciseFilter { equipment: Some("dumb".into()), ..ExerciseFilter::default() },
        &[]
    )]
    #[case::blank_equipment(
        ExerciseFilter { equipment: Some(" ".into()), category: Some("upper legs".into()), ..ExerciseFilter::default() },
        &["barbell full squat"]
    )]
    #[case::equipment_and_category(
        ExerciseFilter { equipment: Some("body weight".into()), category: Some("abs".into()), ..ExerciseFilter::default() },
        &["3/4 sit-up", "crunch", "air bike"]
    )]
    #[case::body_part_and_apple_category(
        ExerciseFilter { body_part: Some("chest".into()), apple_category: Some("traditional strength training".into()), ..ExerciseFilter::default() },
        &["barbell bench press", "dumbbell fly"]
    )]
    #[case::primary_muscles(
        ExerciseFilter { primary_muscles: vec!["QUADS".into(), "pecs".into()], ..ExerciseFilter::default() },
        &["barbell full squat"]
    )]
    #[case::primary_muscles_substring(
        ExerciseFilter { primary_muscles: vec!["pector".into()], ..ExerciseFilter::default() },
        &["push-up", "barbell bench press", "dumbbell fly"]
    )]
    #[case::secondary_muscles(
        ExerciseFilter { secondary_muscles: vec!["oblique".into()], ..ExerciseFilter::default() },
        &["crunch", "air bike"]
    )]
    #[case::primary_and_secondary_muscles(
        ExerciseFilter { primary_muscles: vec!["pectorals".into()], secondary_muscles: vec!["triceps".into()], ..ExerciseFilter::default() },
        &["push-up", "barbell bench press"]
    )]
    #[case::muscles(
        ExerciseFilter { muscles: vec!["Hip".into()], ..ExerciseFilter::default() },
        &["3/4 sit-up", "air bike"]
    )]
    #[case::muscles_primary_or_secondary(
        ExerciseFilter { muscles: vec!["quads".into(), "delts".into()], ..ExerciseFilter::default() },
        &["push-up", "barbell bench press", "dumbbell fly", "barbell full squat"]
    )]
    #[case::muscles_and_equipment(
        ExerciseFilter { equipment: Some("body weight".into()), primary_muscles: vec!["abs".into()], ..ExerciseFilter::default() },
        &["3/4 sit-up", "crunch", "air bike"]
    )]
    #[case::unknown_category(
        ExerciseFilter { category: Some("cardio".into()), ..ExerciseFilter::default() },
        &[]
    )]
    fn test_exercise_filter_candidates(
        #[case] filter: ExerciseFilter,
        #[case] expected: &[&str],
    ) {
        assert_eq!(
            names(&filter.candidates(data::SERVICE.catalog(), data::SERVICE.index())),
            expected
        );
    }

    #[rstest]
    #[case::exact_name("crunch", &["crunch", "weighted crunch"])]
    #[case::exact_name_upper_case("  CRUNCH ", &["crunch", "weighted crunch"])]
    #[case::fields("abs", &["weighted crunch", "3/4 sit-up", "crunch", "air bike"])]
    #[case::multiple_words("bench press", &["barbell bench press", "dumbbell fly"])]
    #[case::fuzzy_name("push up", &["push-up"])]
    #[case::no_match("yoga", &[])]
    fn test_exercise_filter_rank(#[case] query: &str, #[case] expected: &[&str]) {
        let filter = ExerciseFilter {
            query: Some(query.into()),
            ..ExerciseFilter::default()
        };
        let candidates = filter.candidates(data::SERVICE.catalog(), data::SERVICE.index());

        assert_eq!(names(&filter.rank(candidates, 0.7)), expected);
    }

    #[test]
    fn test_exercise_filter_rank_without_query() {
        let candidates = data::EXERCISES.iter().rev().collect::<Vec<_>>();

        for query in [None, Some(String::new()), Some("  ".into())] {
            let filter = ExerciseFilter {
                query,
                ..ExerciseFilter::default()
            };
            assert_eq!(filter.rank(candidates.clone(), 0.7), candidates);
        }
    }

    #[test]
    fn test_exercise_filter_is_empty() {
        assert!(ExerciseFilter::default().is_empty());
        assert!(
            ExerciseFilter {
                equipment: Some(" ".into()),
                primary_muscles: vec![String::new()],
                query: Some(String::new()),
                limit: Some(5),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
        assert!(
            !ExerciseFilter {
                query: Some("squat".into()),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
    }

    #[rstest]
    #[case::exact_name("crunch", Relevance { exact_name: true, score: 100 })]
    #[case::name_contains("bench", Relevance { exact_name: false, score: 60 })]
    #[case::category_and_muscle("abs", Relevance { exact_name: false, score: 50 })]
    #[case::body_part("waist", Relevance { exact_name: false, score: 15 })]
    #[case::equipment("body", Relevance { exact_name: false, score: 25 })]
    #[case::instruction("pelvis", Relevance { exact_name: false, score: 10 })]
    #[case::fuzzy_name("crunsh", Relevance { exact_name: false, score: 50 })]
    #[case::fuzzy_name_below_threshold("lunch", Relevance { exact_name: false, score: 0 })]
    #[case::short_words_ignored("ab on", Relevance { exact_name: false, score: 0 })]
    #[case::none("", Relevance { exact_name: false, score: 0 })]
    fn test_relevance(#[case] query: &str, #[case] expected: Relevance) {
        let exercise = match query {
            "bench" => &*data::EXERCISE_BENCH_PRESS,
            _ => &*data::EXERCISE_CRUNCH,
        };

        assert_eq!(relevance(exercise, query, 0.7), expected);
    }

    #[test]
    fn test_relevance_exact_name_ranks_highest() {
        let exact = Relevance {
            exact_name: true,
            score: 100,
        };
        let partial = Relevance {
            exact_name: false,
            score: 500,
        };

        assert!(exact > partial);
        assert!(!Relevance::default().is_relevant());
    }

    #[rstest]
    #[case::first_page(Pagination { limit: 3, offset: 0 }, &["3/4 sit-up", "crunch", "air bike"], true)]
    #[case::last_page(Pagination { limit: 3, offset: 6 }, &["dumbbell fly", "barbell full squat"], false)]
    #[case::exact_end(Pagination { limit: 4, offset: 4 }, &["push-up", "barbell bench press", "dumbbell fly", "barbell full squat"], false)]
    #[case::beyond_end(Pagination { limit: 3, offset: 20 }, &[], false)]
    fn test_pagination_page(
        #[case] pagination: Pagination,
        #[case] expected: &[&str],
        #[case] has_more: bool,
    ) {
        let page = pagination.page(data::EXERCISES.iter().collect());

        assert_eq!(names(&page.exercises), expected);
        assert_eq!(page.total, data::EXERCISES.len());
        assert_eq!(page.limit, pagination.limit);
        assert_eq!(page.offset, pagination.offset);
        assert_eq!(page.has_more, has_more);
    }
}
