//! Accessory form panel

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::state::FormField;
use crate::model::App;
use crate::view::theme::{colors, Styles};

const FIELDS: [FormField; 3] = [FormField::Name, FormField::Price, FormField::Link];

/// Render the form panel
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus.is_form();

    let title = if app.form.is_editing() {
        " Edit Accessory "
    } else {
        " New Accessory "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    for field in FIELDS {
        let field_focused = focused && app.form.field == field;
        let value = field_value(app, field);

        lines.push(Line::from(Span::styled(
            field.label(),
            Style::default().fg(Color::Gray),
        )));

        let display = if field_focused {
            format!("  {value}▎")
        } else {
            format!("  {value}")
        };
        let style = if field_focused {
            Style::default().fg(c.border_focused)
        } else {
            Style::default().fg(c.fg)
        };
        lines.push(Line::styled(display, style));
        lines.push(Line::from(""));
    }

    if app.form.saving {
        lines.push(Line::styled("  Saving...", Style::default().fg(c.muted)));
    } else {
        let mut hints = vec![
            Span::styled("Enter", Styles::hint_key()),
            Span::raw(" "),
            Span::styled("Save", Style::default().fg(c.muted)),
        ];
        if app.form.is_editing() {
            hints.push(Span::raw("  "));
            hints.push(Span::styled("Esc", Styles::hint_key()));
            hints.push(Span::raw(" "));
            hints.push(Span::styled("Cancel edit", Style::default().fg(c.muted)));
        }
        let mut line = vec![Span::raw("  ")];
        line.extend(hints);
        lines.push(Line::from(line));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_value(app: &App, field: FormField) -> &str {
    match field {
        FormField::Name => &app.form.name,
        FormField::Price => &app.form.price,
        FormField::Link => &app.form.link,
    }
}
