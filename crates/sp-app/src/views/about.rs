use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use sp_core::content::about::{
    BUSINESS_APPLICATIONS, COMPLIANCE_NOTES, FUTURE_ENHANCEMENTS, KEY_RESULTS,
    ORGANIZATIONAL_BENEFITS, PRIMARY_DATASET_REFERENCES, PROBLEM_STATEMENT, SAMPLE_EXAMPLES,
    TECHNICAL_REFERENCES, TECHNOLOGIES, WORKFLOW,
};

use crate::app::App;
use crate::views::{bullet, heading};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::raw(
        "Learn about the technology, methodology, and real-world applications of our",
    ));
    lines.push(Line::raw("Employee Salary Prediction system."));
    lines.push(Line::raw(""));

    lines.push(heading("Problem Statement & Real-World Relevance"));
    lines.push(Line::from(format!("  {PROBLEM_STATEMENT}")));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  Business Applications",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for item in BUSINESS_APPLICATIONS {
        lines.push(bullet(item));
    }
    lines.push(Line::from(Span::styled(
        "  Organizational Benefits",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for item in ORGANIZATIONAL_BENEFITS {
        lines.push(bullet(item));
    }
    lines.push(Line::raw(""));

    lines.push(heading("Technologies & Libraries"));
    for tech in TECHNOLOGIES {
        lines.push(Line::from(format!("  {:<14}{}", tech.name, tech.description)));
    }
    lines.push(Line::raw(""));

    lines.push(heading("Step-by-Step Workflow"));
    for step in WORKFLOW {
        lines.push(Line::from(Span::styled(
            format!("  Step {}: {}", step.step, step.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("    {}", step.description)));
        lines.push(Line::from(Span::styled(
            format!("    {}", step.details),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::raw(""));

    lines.push(heading("Key Results & Model Performance"));
    for result in KEY_RESULTS {
        lines.push(Line::from(format!("  {:<8}{}", result.value, result.label)));
    }
    lines.push(Line::raw(""));
    for example in SAMPLE_EXAMPLES {
        lines.push(Line::from(Span::styled(
            format!("  {}", example.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("    {}", example.input)));
        lines.push(Line::from(format!("    {}", example.outcome)));
    }
    lines.push(Line::raw(""));

    lines.push(heading("Future Enhancements"));
    for group in FUTURE_ENHANCEMENTS {
        lines.push(Line::from(Span::styled(
            format!("  {}", group.category),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for item in group.items {
            lines.push(bullet(item));
        }
    }
    lines.push(Line::raw(""));

    lines.push(heading("References & Data Sources"));
    lines.push(Line::from(Span::styled(
        "  Primary Dataset",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for reference in PRIMARY_DATASET_REFERENCES {
        lines.push(bullet(reference));
    }
    lines.push(Line::from(Span::styled(
        "  Technical Resources",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for reference in TECHNICAL_REFERENCES {
        lines.push(bullet(reference));
    }
    lines.push(Line::from(Span::styled(
        "  Compliance & Ethics",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for note in COMPLIANCE_NOTES {
        lines.push(bullet(note));
    }

    let page = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("About the Project"))
        .wrap(Wrap { trim: false })
        .scroll((app.about_scroll, 0));
    f.render_widget(page, area);
}
