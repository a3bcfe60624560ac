/// Non-blocking notification shown in the status bar, expiring after a
/// fixed number of render ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: &'static str,
    pub body: String,
    ticks_left: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Destructive,
}

/// ~5 seconds at the default 200 ms tick.
const TOAST_TICKS: u16 = 25;

impl Toast {
    pub fn missing_information() -> Self {
        Self {
            kind: ToastKind::Destructive,
            title: "Missing Information",
            body: "Please fill in all required fields.".into(),
            ticks_left: TOAST_TICKS,
        }
    }

    pub fn prediction_complete(label: &str) -> Self {
        Self {
            kind: ToastKind::Info,
            title: "Prediction Complete",
            body: format!("Salary predicted as {label}"),
            ticks_left: TOAST_TICKS,
        }
    }

    /// Counts down one tick; returns false once expired.
    pub fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left > 0
    }
}
