//! Main layout rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// Render the main layout
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Three bands: title bar, main content, status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(frame, title_area);

    // Form on the left, list with subtotal footer on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(content_area);

    components::form::render(app, frame, columns[0]);
    components::list::render(app, frame, columns[1]);

    components::statusbar::render(app, frame, status_area);

    // Modals draw on top of everything
    components::modal::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" Accessory Manager v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
