use workout_stats::error::WorkoutError;
use workout_stats::pipeline::calculate::Training;
use workout_stats::pipeline::dispatch::read_package;
use workout_stats::types::workout::{Running, Session, Swimming, Workout};

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn running_distance_uses_stride_length() {
    for action in [-1000i64, 0, 1, 1234, 15000, 99_999] {
        let running = Running {
            session: Session {
                action,
                duration_h: 1.5,
                weight_kg: 70.0,
            },
        };
        assert_eq!(running.distance_km(), action as f64 * 0.65 / 1000.0);
    }
}

#[test]
fn running_speed_and_calories() {
    let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("running");
    assert_eq!(workout.distance_km(), 9.75);
    assert_eq!(workout.mean_speed_kmh().expect("speed"), 9.75);
    approx(workout.spent_calories().expect("calories"), 699.75);
}

#[test]
fn swimming_speed_ignores_distance() {
    let swimming = Swimming {
        session: Session {
            action: 720,
            duration_h: 2.0,
            weight_kg: 80.0,
        },
        pool_length_m: 25.0,
        pool_laps: 40.0,
    };
    assert_eq!(
        swimming.mean_speed_kmh().expect("speed"),
        25.0 * 40.0 / 1000.0 / 2.0
    );
    approx(swimming.distance_km(), 720.0 * 1.38 / 1000.0);
    assert_ne!(
        swimming.mean_speed_kmh().expect("speed"),
        swimming.distance_km() / 2.0
    );
}

#[test]
fn swimming_calories() {
    let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming");
    assert_eq!(workout.mean_speed_kmh().expect("speed"), 1.0);
    approx(workout.spent_calories().expect("calories"), 336.0);
}

#[test]
fn walking_floors_speed_term_below_height() {
    let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walking");
    assert_eq!(workout.distance_km(), 5.85);
    assert_eq!(workout.mean_speed_kmh().expect("speed"), 5.85);
    // 5.85^2 / 180 is about 0.19; true division would give about 182.31 kcal
    approx(workout.spent_calories().expect("calories"), 157.5);
}

#[test]
fn walking_floors_speed_term_above_height() {
    let workout = read_package("WLK", &[30000.0, 1.0, 75.0, 180.0]).expect("walking");
    assert_eq!(workout.mean_speed_kmh().expect("speed"), 19.5);
    // 19.5^2 = 380.25, floored to 2 heights
    approx(
        workout.spent_calories().expect("calories"),
        (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0,
    );
}

#[test]
fn zero_duration_is_a_division_error() {
    for (code, data) in [
        ("RUN", vec![15000.0, 0.0, 75.0]),
        ("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        ("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
    ] {
        let workout = read_package(code, &data).expect("dispatch");
        let err = workout.mean_speed_kmh().unwrap_err();
        assert!(matches!(err, WorkoutError::DivisionByZero("mean speed")));
        let err = workout.spent_calories().unwrap_err();
        assert!(matches!(err, WorkoutError::DivisionByZero(_)));
    }
}

#[test]
fn zero_height_is_a_division_error() {
    let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).expect("walking");
    let err = workout.spent_calories().unwrap_err();
    assert!(matches!(err, WorkoutError::DivisionByZero("walking speed term")));
}

#[test]
fn repeated_queries_return_identical_values() {
    for (code, data) in [
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ] {
        let workout = read_package(code, &data).expect("dispatch");
        let before = workout;
        assert_eq!(workout.distance_km(), workout.distance_km());
        assert_eq!(
            workout.mean_speed_kmh().expect("speed"),
            workout.mean_speed_kmh().expect("speed")
        );
        assert_eq!(
            workout.spent_calories().expect("calories"),
            workout.spent_calories().expect("calories")
        );
        assert_eq!(workout, before);
    }
}

#[test]
fn variant_and_wrapper_agree() {
    let workout = read_package("RUN", &[5000.0, 0.5, 60.0]).expect("running");
    let Workout::Running(running) = workout else {
        panic!("expected running workout");
    };
    assert_eq!(running.label(), workout.label());
    assert_eq!(running.step_length_m(), workout.step_length_m());
    assert_eq!(
        running.spent_calories().expect("calories"),
        workout.spent_calories().expect("calories")
    );
}
