use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use sp_core::content::MODEL_INFORMATION;
use sp_core::scoring::{Confidence, Prediction, LABEL_ABOVE_50K};

use crate::app::App;
use crate::form::{Field, FIELD_ORDER};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_form(f, columns[0], app);
    render_result(f, columns[1], app);
}

fn is_required(field: Field) -> bool {
    matches!(
        field,
        Field::Education | Field::Occupation | Field::MaritalStatus
    )
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::raw("Enter the employee details to predict their salary category."),
        Line::raw(""),
    ];

    for field in FIELD_ORDER {
        let focused = app.form.focus == field;
        let marker = if focused { "\u{25b8} " } else { "  " };
        let suffix = if is_required(field) { " *" } else { "" };
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut value = app.form.display_value(field);
        if value.is_empty() {
            value = match field {
                Field::Age => "e.g., 35".into(),
                Field::Relationship => "(optional)".into(),
                _ => "(choose with \u{2190}/\u{2192})".into(),
            };
        }

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<18}{suffix} ", field.label()), label_style),
            Span::raw(value),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(if app.is_busy() {
        Line::from(Span::styled(
            "Analyzing...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "[ Enter: Predict Salary ]  [ Ctrl+R: Reset ]",
            Style::default().add_modifier(Modifier::BOLD),
        ))
    });

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Employee Information"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

fn confidence_color(confidence: Confidence) -> Color {
    match confidence {
        Confidence::High => Color::Green,
        Confidence::Medium => Color::Yellow,
        Confidence::Low => Color::Red,
    }
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Prediction Results");

    if app.is_busy() {
        let waiting = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Analyzing...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(waiting, area);
        return;
    }

    let Some(result) = &app.result else {
        let idle = Paragraph::new(vec![
            Line::raw(""),
            Line::raw("ML-powered salary category prediction"),
            Line::raw("with confidence analysis."),
        ])
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(idle, area);
        return;
    };

    f.render_widget(block, area);
    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(4),
        ])
        .margin(1)
        .split(area);

    render_headline(f, inner[0], result);
    render_probability_gauge(f, inner[1], result);
    render_details(f, inner[2], result);
}

fn render_headline(f: &mut Frame, area: Rect, result: &Prediction) {
    let label_color = if result.label == LABEL_ABOVE_50K {
        Color::Green
    } else {
        Color::Yellow
    };
    let headline = Paragraph::new(Line::from(Span::styled(
        result.label,
        Style::default().fg(label_color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(headline, area);
}

fn render_probability_gauge(f: &mut Frame, area: Rect, result: &Prediction) {
    let gauge = Gauge::default()
        .ratio(result.probability)
        .label(format!(
            "{:.1}% Probability \u{2022} {} Confidence",
            result.probability * 100.0,
            result.confidence.as_str()
        ))
        .gauge_style(Style::default().fg(confidence_color(result.confidence)));
    f.render_widget(gauge, area);
}

fn render_details(f: &mut Frame, area: Rect, result: &Prediction) {
    let mut lines = Vec::new();

    if !result.factors.is_empty() {
        lines.push(Line::from(Span::styled(
            "Key Contributing Factors:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for factor in &result.factors {
            lines.push(Line::from(format!("  \u{2022} {factor}")));
        }
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        "Model Information",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for info in MODEL_INFORMATION {
        lines.push(Line::from(format!("  {info}")));
    }

    let details = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(details, area);
}
