use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use sp_core::content::analytics::{
    DATASET_STATS, FEATURE_IMPORTANCE, MODEL_CONFIGURATION, MODEL_METRICS,
    ORGANIZATIONAL_BENEFITS, SAMPLE_PREDICTIONS,
};

use crate::app::App;
use crate::views::{bullet, heading, meter};

const METER_WIDTH: usize = 24;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::raw(
        "Comprehensive analysis of our Random Forest classifier's performance and insights",
    ));
    lines.push(Line::raw("from the Adult Census Income dataset."));
    lines.push(Line::raw(""));

    lines.push(heading("Dataset Overview"));
    for stat in DATASET_STATS {
        lines.push(Line::from(format!("  {:<16}{}", stat.label, stat.value)));
    }
    lines.push(Line::raw(""));

    lines.push(heading("Model Performance Metrics"));
    for metric in MODEL_METRICS {
        lines.push(Line::from(format!(
            "  {:<20}{} {:>5.1}%",
            metric.label,
            meter(metric.value, METER_WIDTH),
            metric.value
        )));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  Model Configuration",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for entry in MODEL_CONFIGURATION {
        lines.push(Line::from(format!("    {entry}")));
    }
    lines.push(Line::raw(""));

    lines.push(heading("Feature Importance Analysis"));
    for feature in FEATURE_IMPORTANCE {
        lines.push(Line::from(format!(
            "  {:<18}{} {:>3}%",
            feature.feature,
            meter(f64::from(feature.importance), METER_WIDTH),
            feature.importance
        )));
        lines.push(Line::from(format!("    {}", feature.description)));
    }
    lines.push(Line::raw(""));

    lines.push(heading("Sample Prediction Results"));
    for sample in SAMPLE_PREDICTIONS {
        let verdict = if sample.correct { "Correct" } else { "Incorrect" };
        let verdict_color = if sample.correct {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(format!("  {}", sample.input)));
        lines.push(Line::from(vec![
            Span::raw(format!(
                "    {} (Confidence: {}%)  ",
                sample.prediction, sample.probability
            )),
            Span::styled(verdict, Style::default().fg(verdict_color)),
        ]));
    }
    lines.push(Line::raw(""));

    lines.push(heading("Organizational Benefits"));
    for group in ORGANIZATIONAL_BENEFITS {
        lines.push(Line::from(Span::styled(
            format!("  {}", group.category),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for item in group.items {
            lines.push(bullet(item));
        }
    }

    let page = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Model Analytics Dashboard"),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.analytics_scroll, 0));
    f.render_widget(page, area);
}
