//! Derivation trace pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::TraceEvent;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{List, ListItem, Padding},
    Frame,
};

/// Render the trace pane
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    events: &[TraceEvent],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Derivation Trace ({}) ", events.len());
    let block = pane_block(&title, is_focused).padding(Padding::new(1, 0, 0, 0));

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, events.len(), visible_height);

    let items: Vec<ListItem> = events
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|event| {
            let color = match event {
                TraceEvent::Production(_) => DEFAULT_THEME.production,
                TraceEvent::Consumed { .. } => DEFAULT_THEME.fg,
                TraceEvent::Synchronized { .. } => DEFAULT_THEME.recovery,
            };
            ListItem::new(event.to_string()).style(Style::default().fg(color))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
