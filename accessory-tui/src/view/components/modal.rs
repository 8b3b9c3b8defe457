//! Modal components

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::colors;

/// Render the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { name, focus, .. } => render_confirm_delete(frame, name, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// Centered modal area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block(title: &str, border: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black))
}

fn render_confirm_delete(frame: &mut Frame, name: &str, focus: usize) {
    let c = colors();
    let area = centered_rect(46, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block("Delete Accessory", c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button = |label: &str, active: bool| {
        if active {
            Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .fg(Color::Black)
                    .bg(c.error)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("  {label}  "), Style::default().fg(c.muted))
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(format!("Delete \"{name}\"?"))).alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            button("Cancel", focus == 0),
            Span::raw("   "),
            button("Delete", focus == 1),
        ])
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(title, c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(message.to_string()).alignment(Alignment::Center),
        Line::from(""),
        Line::styled("Press Enter to dismiss", Style::default().fg(c.muted))
            .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(52, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block("Help", c.border_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{k:10}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc.to_string(), Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::from(""),
        key("Tab", "Switch between form and list"),
        key("↑↓ / jk", "Move selection / form field"),
        key("Enter", "Edit selected (list) / Save (form)"),
        key("Alt+a", "New accessory"),
        key("Alt+d", "Delete selected (asks first)"),
        key("Alt+r", "Reload the list"),
        key("Esc", "Cancel edit / close dialog"),
        key("Alt+q", "Quit"),
        Line::from(""),
        Line::styled("Press Esc to close", Style::default().fg(c.muted))
            .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
