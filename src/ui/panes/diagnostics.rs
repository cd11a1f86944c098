//! Diagnostics pane rendering

use super::utils::{pane_block, scroll_into_view, visible_height};
use crate::parser::{Diagnostic, DiagnosticKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the diagnostics list, keeping `selected` in view
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    diagnostics: &[Diagnostic],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Diagnostics ({}) ", diagnostics.len());
    let block = pane_block(&title, is_focused);

    if diagnostics.is_empty() {
        let paragraph = Paragraph::new("(no diagnostics)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = visible_height(area);
    scroll_into_view(scroll_offset, selected, visible_height);

    let items: Vec<ListItem> = diagnostics
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, diagnostic)| {
            let kind_style = match diagnostic.kind {
                DiagnosticKind::Lexical => Style::default().fg(DEFAULT_THEME.secondary),
                DiagnosticKind::Syntax => Style::default().fg(DEFAULT_THEME.error),
            };
            let line = Line::from(vec![
                Span::styled(
                    format!("L{:<4}", diagnostic.line),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<8}", diagnostic.kind.to_string()), kind_style),
                Span::styled(
                    format!("'{}' ", diagnostic.lexeme),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                Span::styled(diagnostic.message.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]);

            let mut item = ListItem::new(line);
            if idx == selected {
                item = item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                );
            }
            item
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
