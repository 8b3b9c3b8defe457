//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// Render the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current focus
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Enter", "Confirm"), ("Esc", "Close")];
    }

    let mut hints = vec![("Tab", "Switch Panel")];

    match app.focus {
        FocusPanel::List => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Edit"));
            hints.push(("Alt+a", "Add"));
            hints.push(("Alt+d", "Delete"));
            hints.push(("Alt+r", "Reload"));
        }
        FocusPanel::Form => {
            hints.push(("↑↓", "Field"));
            hints.push(("Enter", "Save"));
            if app.form.is_editing() {
                hints.push(("Esc", "Cancel"));
            }
        }
    }

    hints.push(("Alt+q", "Quit"));
    hints
}
