use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::app::App;
use crate::route::NAV_ITEMS;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = NAV_ITEMS
        .iter()
        .map(|route| Line::from(route.label()))
        .collect();

    // Active item by exact path equality with the current route.
    let active = NAV_ITEMS
        .iter()
        .position(|route| route.path() == app.route.path())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Employee Salary Predictor"),
        )
        .select(active)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}
