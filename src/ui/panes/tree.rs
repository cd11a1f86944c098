//! Syntax tree pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the syntax tree pane.
///
/// `tree_lines` are the `(depth, text)` pairs from
/// [`SyntaxNode::render_lines`](crate::parser::SyntaxNode::render_lines);
/// `None` means the parse failed and there is no tree to show.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree_lines: Option<&[(usize, String)]>,
    error_count: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ", is_focused);

    let Some(tree_lines) = tree_lines else {
        let paragraph = Paragraph::new(format!(
            "(no tree: {} error(s), see diagnostics)",
            error_count
        ))
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.error));
        frame.render_widget(paragraph, area);
        return;
    };

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, tree_lines.len(), visible_height);

    let items: Vec<ListItem> = tree_lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(depth, text)| {
            let indent = Span::styled(
                "│   ".repeat(*depth),
                Style::default().fg(DEFAULT_THEME.comment),
            );
            ListItem::new(Line::from(vec![indent, styled_node_text(text)]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn styled_node_text(text: &str) -> Span<'static> {
    if text.contains("(NODE:") {
        Span::styled(
            text.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.production)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.fg))
    }
}
