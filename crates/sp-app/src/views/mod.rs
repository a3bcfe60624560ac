pub mod about;
pub mod analytics;
pub mod nav;
pub mod predict;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::notify::ToastKind;
use crate::route::Route;

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.size());

    nav::render(f, chunks[0], app);

    match app.route {
        Route::Predict => predict::render(f, chunks[1], app),
        Route::Analytics => analytics::render(f, chunks[1], app),
        Route::About => about::render(f, chunks[1], app),
    }

    render_status(f, chunks[2], app);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(toast) = &app.toast {
        let style = match toast.kind {
            ToastKind::Destructive => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ToastKind::Info => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        };
        Line::from(vec![
            Span::styled(toast.title, style),
            Span::raw(": "),
            Span::raw(toast.body.clone()),
        ])
    } else {
        match app.route {
            Route::Predict => Line::raw(
                "Keys: \u{2191}/\u{2193} field \u{2022} \u{2190}/\u{2192} choose \u{2022} Enter predict \u{2022} Ctrl+R reset \u{2022} Tab page \u{2022} Esc quit",
            ),
            _ => Line::raw(
                "Keys: \u{2191}/\u{2193} scroll \u{2022} PgUp/PgDn fast \u{2022} Tab page \u{2022} Esc quit",
            ),
        }
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

/// Fixed-width text meter for percentage rows.
pub(crate) fn meter(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(width - filled))
}

pub(crate) fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn bullet(text: &'static str) -> Line<'static> {
    Line::from(format!("  \u{2022} {text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_fills_proportionally() {
        assert_eq!(meter(0.0, 4), "\u{2591}\u{2591}\u{2591}\u{2591}");
        assert_eq!(meter(100.0, 4), "\u{2588}\u{2588}\u{2588}\u{2588}");
        assert_eq!(meter(50.0, 4), "\u{2588}\u{2588}\u{2591}\u{2591}");
        assert_eq!(meter(250.0, 2), "\u{2588}\u{2588}");
        assert_eq!(meter(-10.0, 2), "\u{2591}\u{2591}");
    }
}
