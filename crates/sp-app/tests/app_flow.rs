use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use sp_app::app::App;
use sp_app::form::Field;
use sp_app::notify::ToastKind;
use sp_app::route::Route;
use sp_core::scoring::{EngineConfig, FixedJitter, PredictionEngine};

fn deterministic_app(delay: Duration) -> App {
    let engine = PredictionEngine::with_jitter(EngineConfig::default(), Box::new(FixedJitter(0.0)));
    App::with_engine(engine, delay)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Walks the whole user journey through key events only: fill the form,
/// submit, wait out the delay, read the result.
#[test]
fn form_submission_end_to_end() {
    let mut app = deterministic_app(Duration::ZERO);

    // Age field has focus initially.
    type_str(&mut app, "39");

    // Work hours keep their default of 40.
    press(&mut app, KeyCode::Down);

    // Education -> second option (Masters).
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);

    // Occupation -> first option (Tech-support).
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);

    // Marital status -> second option (Never-married).
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);

    let profile = app.form.to_profile();
    assert_eq!(profile.age, 39);
    assert_eq!(profile.work_hours, 40);
    assert_eq!(profile.education, "Masters");
    assert_eq!(profile.occupation, "Tech-support");
    assert_eq!(profile.marital_status, "Never-married");

    press(&mut app, KeyCode::Enter);
    assert!(app.is_busy());

    app.on_tick();
    assert!(!app.is_busy());

    let result = app.result.as_ref().expect("prediction after delay");
    assert_eq!(result.label, "Above $50K");
    assert!((result.probability - 0.80).abs() < 1e-12);
    assert_eq!(
        result.factors,
        [
            "Experience level (age 30+)",
            "Advanced education (Masters)",
            "Professional occupation (Tech-support)",
        ]
    );

    let toast = app.toast.as_ref().expect("completion toast");
    assert_eq!(toast.kind, ToastKind::Info);
    assert_eq!(toast.body, "Salary predicted as Above $50K");
}

#[test]
fn missing_required_fields_block_the_prediction() {
    let mut app = deterministic_app(Duration::ZERO);

    type_str(&mut app, "55");
    press(&mut app, KeyCode::Enter);

    assert!(!app.is_busy());
    app.on_tick();
    assert!(app.result.is_none());

    let toast = app.toast.as_ref().expect("validation toast");
    assert_eq!(toast.kind, ToastKind::Destructive);
    assert_eq!(toast.title, "Missing Information");
    assert_eq!(toast.body, "Please fill in all required fields.");
}

#[test]
fn enter_is_ignored_while_a_prediction_is_pending() {
    let mut app = deterministic_app(Duration::from_secs(120));

    app.form.education = Some(0);
    app.form.occupation = Some(3);
    app.form.marital_status = Some(0);

    press(&mut app, KeyCode::Enter);
    assert!(app.is_busy());

    // A second Enter and further edits must not queue anything new.
    press(&mut app, KeyCode::Enter);
    app.on_tick();
    assert!(app.is_busy());
    assert!(app.result.is_none());
}

#[test]
fn reset_returns_to_the_blank_form() {
    let mut app = deterministic_app(Duration::ZERO);

    app.form.education = Some(2);
    app.form.occupation = Some(1);
    app.form.marital_status = Some(0);
    press(&mut app, KeyCode::Enter);
    app.on_tick();
    assert!(app.result.is_some());

    app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
    assert!(app.result.is_none());
    assert_eq!(app.form.focus, Field::Age);
    assert_eq!(app.form.to_profile().work_hours, 40);
    assert_eq!(app.form.to_profile().education, "");
}

#[test]
fn tab_cycles_routes_and_typing_stays_on_the_form_page() {
    let mut app = deterministic_app(Duration::ZERO);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.route, Route::Analytics);

    // On a dashboard page arrow keys scroll instead of editing the form.
    press(&mut app, KeyCode::Down);
    assert_eq!(app.analytics_scroll, 1);
    assert_eq!(app.form.to_profile().age, 0);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.route, Route::Predict);
}
