//! Accessory list panel with subtotal footer

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::util::currency::format_inr;
use crate::view::theme::{colors, Styles};

const MAX_LINK_WIDTH: usize = 28;

/// Render the list panel
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_list();

    let block = Block::default()
        .title(" Accessories ")
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // List body above, one-line subtotal footer below
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    render_body(app, frame, rows[0]);
    render_subtotal(app, frame, rows[1]);
}

fn render_body(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    if app.accessories.loading {
        let loading = Paragraph::new(Line::styled(
            "  Loading accessories...",
            Style::default().fg(c.muted),
        ));
        frame.render_widget(loading, area);
        return;
    }

    if let Some(ref error) = app.accessories.error {
        let error_line = Paragraph::new(vec![
            Line::from(""),
            Line::styled(format!("  {error}"), Style::default().fg(c.error)),
            Line::from(""),
            Line::styled(
                "  Press Alt+r to try again.",
                Style::default().fg(c.muted),
            ),
        ]);
        frame.render_widget(error_line, area);
        return;
    }

    if app.accessories.items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled("  No accessories yet.", Style::default().fg(c.muted)),
            Line::from(""),
            Line::styled(
                "  Press Alt+a to add the first one.",
                Style::default().fg(c.muted),
            ),
        ]);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .accessories
        .items
        .iter()
        .enumerate()
        .map(|(i, accessory)| {
            let is_selected = i == app.accessories.selected;

            let name_style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let price_style = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.success)
            };
            let link_style = if is_selected {
                Style::default().fg(c.selected_fg).bg(c.selected_bg)
            } else {
                Style::default().fg(c.muted)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:24}", accessory.name), name_style),
                Span::styled(format!("{:>14}", format_inr(accessory.price)), price_style),
                Span::raw("  "),
                Span::styled(truncate(&accessory.link, MAX_LINK_WIDTH), link_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(Block::default());

    let mut state = ListState::default();
    state.select(Some(app.accessories.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_subtotal(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let subtotal = Paragraph::new(Line::from(vec![
        Span::styled("  Total: ", Style::default().fg(c.muted)),
        Span::styled(
            format_inr(app.accessories.subtotal()),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(subtotal, area);
}

/// Truncate to a display width, appending an ellipsis when cut
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.to_string().width();
        if width + ch_width > max_width.saturating_sub(1) {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("https://x.in", 28), "https://x.in");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        let long = "https://shop.example/very/long/path/to/item";
        let cut = truncate(long, 10);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 10);
    }
}
