//! Source code pane rendering with syntax highlighting
//!
//! Displays the program being analysed with keyword highlighting, a marker
//! column for lines that carry diagnostics, and a highlighted row for the
//! diagnostic currently selected in the diagnostics pane.
//!
//! # Rendering
//!
//! Highlighting uses a word splitter rather than the real scanner: it only
//! has to colour text, and it must never fail on malformed input.

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashMap;

/// Simple syntax highlighting for toy-language source
fn highlight_source_code(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for c in line.chars() {
        if c.is_alphanumeric() {
            current_word.push(c);
            continue;
        }

        if !current_word.is_empty() {
            let style = get_word_style(&current_word);
            spans.push(Span::styled(std::mem::take(&mut current_word), style));
        }

        let style = match c {
            '{' | '}' => Style::default().fg(DEFAULT_THEME.primary),
            ';' | '=' => Style::default().fg(DEFAULT_THEME.fg),
            c if c.is_whitespace() => Style::default(),
            // Outside the lexical alphabet
            _ => Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if !current_word.is_empty() {
        let style = get_word_style(&current_word);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_word_style(word: &str) -> Style {
    match word {
        "int" | "float" => Style::default().fg(DEFAULT_THEME.type_name),
        "if" | "then" | "else" | "while" | "do" | "input" | "output" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        w if w.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the source code pane.
///
/// `diagnostic_lines` maps a 1-based line to the number of diagnostics on it.
/// When `follow_line` is set the view is scrolled to centre that line.
#[allow(clippy::too_many_arguments)]
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    diagnostic_lines: &FxHashMap<usize, usize>,
    selected_line: Option<usize>,
    follow_line: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source Code ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = visible_height(area);

    if follow_line {
        if let Some(line) = selected_line {
            *scroll_offset = line.saturating_sub(1).saturating_sub(visible_height / 2);
        }
    }
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_selected = selected_line == Some(line_num);

            let marker = match diagnostic_lines.get(&line_num) {
                Some(1) => Span::styled(" ● ", Style::default().fg(DEFAULT_THEME.error)),
                Some(_) => Span::styled(
                    " ◆ ",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::raw("   "),
            };

            let num_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if diagnostic_lines.contains_key(&line_num) {
                Style::default().fg(DEFAULT_THEME.secondary)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_source_code(line);

            if is_selected {
                for span in &mut content_line.spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
            }

            let mut final_spans = vec![marker, Span::styled(format!("{:4} ", line_num), num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_splits_words() {
        let line = highlight_source_code("if x1 == 10 then");
        let words: Vec<String> = line
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .filter(|s| !s.trim().is_empty())
            .collect();

        assert_eq!(words, vec!["if", "x1", "=", "=", "10", "then"]);
    }

    #[test]
    fn test_word_styles() {
        assert_eq!(get_word_style("float").fg, Some(DEFAULT_THEME.type_name));
        assert_eq!(get_word_style("while").fg, Some(DEFAULT_THEME.keyword));
        assert_eq!(get_word_style("42").fg, Some(DEFAULT_THEME.number));
        assert_eq!(get_word_style("counter").fg, Some(DEFAULT_THEME.fg));
    }
}
