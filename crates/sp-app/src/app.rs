use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use sp_core::scoring::{EngineConfig, Prediction, PredictionEngine};
use sp_core::validate::validate_profile;
use sp_core::EmployeeProfile;

use crate::form::FormState;
use crate::notify::Toast;
use crate::route::Route;

/// A submission waiting out the artificial delay. The profile is captured
/// at submit time; edits made while waiting do not affect the outcome.
#[derive(Debug, Clone)]
struct PendingPrediction {
    deadline: Instant,
    profile: EmployeeProfile,
}

pub struct App {
    pub route: Route,
    pub form: FormState,
    pub result: Option<Prediction>,
    pub toast: Option<Toast>,
    pub analytics_scroll: u16,
    pub about_scroll: u16,
    pub should_quit: bool,
    pending: Option<PendingPrediction>,
    engine: PredictionEngine,
    delay: Duration,
}

impl App {
    pub fn new(delay: Duration) -> Self {
        Self::with_engine(PredictionEngine::new(EngineConfig::from_env()), delay)
    }

    pub fn with_engine(engine: PredictionEngine, delay: Duration) -> Self {
        Self {
            route: Route::Predict,
            form: FormState::new(),
            result: None,
            toast: None,
            analytics_scroll: 0,
            about_scroll: 0,
            should_quit: false,
            pending: None,
            engine,
            delay,
        }
    }

    /// True while a submission waits out the delay; the submit trigger is
    /// disabled during this window, nothing is queued.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate and, if complete, start the delayed scoring. Re-entrant
    /// submissions while busy are dropped.
    pub fn submit(&mut self) {
        if self.is_busy() {
            return;
        }

        let profile = self.form.to_profile();
        if let Err(err) = validate_profile(&profile) {
            warn!(error = %err, "submission rejected");
            self.toast = Some(Toast::missing_information());
            return;
        }

        info!(age = profile.age, work_hours = profile.work_hours, "prediction submitted");
        self.pending = Some(PendingPrediction {
            deadline: Instant::now() + self.delay,
            profile,
        });
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
        self.result = None;
        debug!("form reset");
    }

    /// Advance time-driven state: finish a due pending prediction and age
    /// out the toast. Called once per render tick.
    pub fn on_tick(&mut self) {
        let due = self
            .pending
            .as_ref()
            .map_or(false, |pending| Instant::now() >= pending.deadline);
        if due {
            if let Some(pending) = self.pending.take() {
                let prediction = self.engine.predict(&pending.profile);
                info!(
                    label = prediction.label,
                    probability = prediction.probability,
                    "prediction complete"
                );
                self.toast = Some(Toast::prediction_complete(prediction.label));
                self.result = Some(prediction);
            }
        }

        if let Some(toast) = &mut self.toast {
            if !toast.tick() {
                self.toast = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.route = self.route.next();
                return;
            }
            KeyCode::BackTab => {
                self.route = self.route.prev();
                return;
            }
            _ => {}
        }

        match self.route {
            Route::Predict => self.handle_form_key(key),
            Route::Analytics => Self::handle_scroll_key(&mut self.analytics_scroll, key),
            Route::About => Self::handle_scroll_key(&mut self.about_scroll, key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_form()
            }
            KeyCode::Up => self.form.focus_prev(),
            KeyCode::Down => self.form.focus_next(),
            KeyCode::Left => self.form.cycle(false),
            KeyCode::Right => self.form.cycle(true),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input_char(c)
            }
            _ => {}
        }
    }

    fn handle_scroll_key(scroll: &mut u16, key: KeyEvent) {
        match key.code {
            KeyCode::Up => *scroll = scroll.saturating_sub(1),
            KeyCode::Down => *scroll = scroll.saturating_add(1),
            KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
            KeyCode::PageDown => *scroll = scroll.saturating_add(10),
            KeyCode::Home => *scroll = 0,
            _ => {}
        }
    }
}
