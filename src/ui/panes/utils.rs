//! Shared helpers for pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border colour
pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, at least one
pub(super) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp `offset` so the last page is never scrolled past
pub(super) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

/// Scroll just enough to bring `index` into view
pub(super) fn scroll_into_view(offset: &mut usize, index: usize, visible_height: usize) {
    if index < *offset {
        *offset = index;
    } else if index >= *offset + visible_height {
        *offset = index + 1 - visible_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 20);

        let mut offset = 5;
        clamp_scroll(&mut offset, 3, 10);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_scroll_into_view() {
        let mut offset = 0;
        scroll_into_view(&mut offset, 12, 5);
        assert_eq!(offset, 8);

        scroll_into_view(&mut offset, 3, 5);
        assert_eq!(offset, 3);

        scroll_into_view(&mut offset, 5, 5);
        assert_eq!(offset, 3);
    }
}
