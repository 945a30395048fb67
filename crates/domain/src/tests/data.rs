use std::sync::LazyLock;

use crate::{Exercise, ExerciseRecord, Name, Service, Settings};

pub const SIT_UP_ID: &str = "874ce7a1-3fb5-4c7b-9f5c-1a9d8e6b2c01";

pub static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    vec![
        EXERCISE_SIT_UP.clone(),
        EXERCISE_CRUNCH.clone(),
        EXERCISE_AIR_BIKE.clone(),
        EXERCISE_WEIGHTED_CRUNCH.clone(),
        EXERCISE_PUSH_UP.clone(),
        EXERCISE_BENCH_PRESS.clone(),
        EXERCISE_DUMBBELL_FLY.clone(),
        EXERCISE_SQUAT.clone(),
    ]
});

pub static EXERCISE_SIT_UP: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        0x874c_e7a1_3fb5_4c7b_9f5c_1a9d_8e6b_2c01,
        "3/4 sit-up",
        "body weight",
        "abs",
        "core training",
        "waist",
        &["abs"],
        &["hip flexors"],
        &[
            "Lie down on the floor and secure your feet.",
            "Raise your torso three quarters of the way up, then lower back down.",
        ],
        &["3-4-sit-up/0.jpg", "3-4-sit-up/1.jpg"],
    )
});

pub static EXERCISE_CRUNCH: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        0x874c_e7a1_3fb5_4c7b_9f5c_1a9d_8e6b_2c02,
        "crunch",
        "body weight",
        "abs",
        "core training",
        "waist",
        &["abs"],
        &["obliques"],
        &[
            "Lie flat on your back with knees bent.",
            "Curl your shoulders towards your pelvis.",
        ],
        &["crunch/0.jpg"],
    )
});

pub static EXERCISE_AIR_BIKE: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        0x874c_e7a1_3fb5_4c7b_9f5c_1a9d_8e6b_2c03,
        "air bike",
        "body weight",
        "abs",
        "core training",
        "waist",
        &["abs"],
        &["hip flexors", "obliques"],
        &[
            "Lie flat on the floor with your hands behind your head.",
            "Alternate bringing each elbow to the opposite knee in a pedaling motion.",
        ],
        &[],
    )
});

pub static EXERCISE_WEIGHTED_CRUNCH: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        0x874c_e7a1_3fb5_4c7b_9f5c_1a9d_8e6b_2c04,
        "weighted crunch",
        "dumbbell",
        "abs",
        "core training",
        "waist",
        &["abs"],
        &[],
        &[
            "Hold a dumbbell against your chest.",
            "Crunch up by contracting your abs.",
        ],
        &["weighted-crunch/0.jpg"],
    )
});

pub static EXERCISE_PUSH_UP: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        0x874c_e7a1_3fb5_4c7b_9f5c_1a9d_8e6b_2c05,
        "push-up",
        "body weight",
        "chest",
        "functional strength training",
        "chest",
        &["pectorals"],
        &["triceps", "delts"],
        &[
            "Start in a plank position with hands under your shoulders.",
            "Lower your chest to the floor and push back up.",
        ],
        &["push-up/0.jpg", "push-up/1.jpg"],
    )
});

pub static EXERCISE_BENCH_PRESS: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        0x874c_e7a1_3fb5_4c7b_9f5c_1a9d_8e6b_2c06,
        "barbell bench press",
        "barbell",
        "chest",
        "traditional strength training",
        "chest",
        &["pectorals"],
        &["triceps", "delts"],
        &[
            "Lie on a flat bench and grip the bar.",
            "Lower the bar to your chest and press it up.",
        ],
        &["barbell-bench-press/0.jpg"],
    )
});

pub static EXERCISE_DUMBBELL_FLY: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        0x874c_e7a1_3fb5_4c7b_9f5c_1a9d_8e6b_2c07,
        "dumbbell fly",
        "dumbbell",
        "chest",
        "traditional strength training",
        "chest",
        &["pectorals"],
        &["delts"],
        &[
            "Lie on a flat bench holding dumbbells above your chest.",
            "Open your arms in a wide arc and bring them back together.",
        ],
        &[],
    )
});

pub static EXERCISE_SQUAT: LazyLock<Exercise> = LazyLock::new(|| {
    exercise(
        0x874c_e7a1_3fb5_4c7b_9f5c_1a9d_8e6b_2c08,
        "barbell full squat",
        "barbell",
        "upper legs",
        "traditional strength training",
        "upper legs",
        &["quads"],
        &["glutes", "hamstrings"],
        &[
            "Rest the bar on your upper back.",
            "Bend your knees and hips to lower down, then stand up.",
        ],
        &["barbell-full-squat/0.jpg"],
    )
});

pub static SERVICE: LazyLock<Service> = LazyLock::new(service);

pub fn service() -> Service {
    Service::from_records(
        EXERCISES.iter().map(|e| Ok(record(e))),
        Settings::default(),
    )
    .unwrap()
}

pub fn record(exercise: &Exercise) -> ExerciseRecord {
    ExerciseRecord {
        id: Some(exercise.id.to_string()),
        name: Some(exercise.name.to_string()),
        equipment: Some(exercise.equipment.clone()),
        category: Some(exercise.category.clone()),
        apple_category: Some(exercise.apple_category.clone()),
        body_part: Some(exercise.body_part.clone()),
        primary_muscles: Some(exercise.primary_muscles.clone()),
        secondary_muscles: Some(exercise.secondary_muscles.clone()),
        instructions: Some(exercise.instructions.clone()),
        images: Some(exercise.images.clone()),
    }
}

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: u128,
    name: &str,
    equipment: &str,
    category: &str,
    apple_category: &str,
    body_part: &str,
    primary_muscles: &[&str],
    secondary_muscles: &[&str],
    instructions: &[&str],
    images: &[&str],
) -> Exercise {
    let strings = |values: &[&str]| -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    };
    Exercise {
        id: id.into(),
        name: Name::new(name).unwrap(),
        equipment: equipment.to_string(),
        category: category.to_string(),
        apple_category: apple_category.to_string(),
        body_part: body_part.to_string(),
        primary_muscles: strings(primary_muscles),
        secondary_muscles: strings(secondary_muscles),
        instructions: strings(instructions),
        images: strings(images),
    }
}
