//! Main TUI application state and logic

use crate::parser::{Diagnostic, ParseFailure, SyntaxNode, Trace};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Diagnostics,
    Tree,
    Trace,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> diagnostics -> tree -> trace)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Trace,
            FocusedPane::Diagnostics => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Diagnostics,
            FocusedPane::Trace => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// The source text that was analysed
    pub source_code: String,

    /// Rendered tree lines; `None` when the parse failed
    pub tree_lines: Option<Vec<(usize, String)>>,

    /// Every diagnostic, in discovery order (empty on success)
    pub diagnostics: Vec<Diagnostic>,

    pub trace: Trace,

    /// Line number -> number of diagnostics reported on it
    pub diagnostic_lines: FxHashMap<usize, usize>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index into `diagnostics`
    pub selected_diagnostic: usize,

    /// Keep the source pane centred on the selected diagnostic's line
    pub follow_selection: bool,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tree_scroll: usize,
    pub diagnostics_scroll: usize,
    pub trace_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app from the source and its parse outcome
    pub fn new(source_code: String, result: Result<SyntaxNode, ParseFailure>, trace: Trace) -> Self {
        let (tree_lines, diagnostics, status_message) = match result {
            Ok(tree) => (
                Some(tree.render_lines()),
                Vec::new(),
                format!("Parsed successfully: {} node(s)", tree.node_count()),
            ),
            Err(failure) => {
                let message = format!("Analysis finished with {} error(s)", failure.len());
                (None, failure.diagnostics, message)
            }
        };

        let mut diagnostic_lines = FxHashMap::default();
        for diagnostic in &diagnostics {
            *diagnostic_lines.entry(diagnostic.line).or_insert(0) += 1;
        }

        let focused_pane = if diagnostics.is_empty() {
            FocusedPane::Tree
        } else {
            FocusedPane::Diagnostics
        };

        App {
            source_code,
            tree_lines,
            follow_selection: !diagnostics.is_empty(),
            diagnostics,
            trace,
            diagnostic_lines,
            focused_pane,
            selected_diagnostic: 0,
            source_scroll: 0,
            tree_scroll: 0,
            diagnostics_scroll: 0,
            trace_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Line of the selected diagnostic, if any
    pub fn selected_line(&self) -> Option<usize> {
        self.diagnostics
            .get(self.selected_diagnostic)
            .map(|diagnostic| diagnostic.line)
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Tree (top) | Trace (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let selected_line = self.selected_line();

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            &self.diagnostic_lines,
            selected_line,
            self.follow_selection,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &self.diagnostics,
            self.selected_diagnostic,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            right_rows[0],
            self.tree_lines.as_deref(),
            self.diagnostics.len(),
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_trace_pane(
            frame,
            right_rows[1],
            self.trace.events(),
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.diagnostics.len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Diagnostics => {
                    if self.selected_diagnostic > 0 {
                        self.select_diagnostic(self.selected_diagnostic - 1);
                    }
                }
                pane => {
                    let scroll = self.scroll_mut(pane);
                    *scroll = scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Diagnostics => {
                    if self.selected_diagnostic + 1 < self.diagnostics.len() {
                        self.select_diagnostic(self.selected_diagnostic + 1);
                    }
                }
                pane => {
                    // Clamped against the content when rendered
                    let scroll = self.scroll_mut(pane);
                    *scroll = scroll.saturating_add(1);
                }
            },
            KeyCode::Home => match self.focused_pane {
                FocusedPane::Diagnostics => {
                    if !self.diagnostics.is_empty() {
                        self.select_diagnostic(0);
                    }
                }
                pane => *self.scroll_mut(pane) = 0,
            },
            KeyCode::End => match self.focused_pane {
                FocusedPane::Diagnostics => {
                    if let Some(last) = self.diagnostics.len().checked_sub(1) {
                        self.select_diagnostic(last);
                    }
                }
                pane => *self.scroll_mut(pane) = usize::MAX,
            },
            _ => {}
        }
    }

    fn select_diagnostic(&mut self, index: usize) {
        self.selected_diagnostic = index;
        self.follow_selection = true;
        if let Some(diagnostic) = self.diagnostics.get(index) {
            self.status_message = format!(
                "Diagnostic {}/{}: line {}",
                index + 1,
                self.diagnostics.len(),
                diagnostic.line
            );
        }
    }

    fn scroll_mut(&mut self, pane: FocusedPane) -> &mut usize {
        match pane {
            FocusedPane::Source => {
                // Manual scrolling detaches the view from the selection
                self.follow_selection = false;
                &mut self.source_scroll
            }
            FocusedPane::Diagnostics => &mut self.diagnostics_scroll,
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Trace => &mut self.trace_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app_for(source: &str) -> App {
        let (result, trace) = Parser::new(source).parse_traced();
        App::new(source.to_string(), result, trace)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_success_starts_on_tree() {
        let app = app_for("int x; output x");

        assert_eq!(app.focused_pane, FocusedPane::Tree);
        assert!(app.tree_lines.is_some());
        assert!(app.diagnostics.is_empty());
        assert_eq!(app.selected_line(), None);
    }

    #[test]
    fn test_failure_starts_on_diagnostics() {
        let app = app_for("int x\n{ output x }\n@");

        assert_eq!(app.focused_pane, FocusedPane::Diagnostics);
        assert!(app.tree_lines.is_none());
        assert_eq!(app.diagnostics.len(), 2);
        assert_eq!(app.diagnostic_lines.get(&2), Some(&1));
        assert_eq!(app.diagnostic_lines.get(&3), Some(&1));
        assert_eq!(app.selected_line(), Some(2));
    }

    #[test]
    fn test_diagnostic_selection_is_bounded() {
        let mut app = app_for("int x\n{ output x }\n@");

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_diagnostic, 1);
        assert_eq!(app.selected_line(), Some(3));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_diagnostic, 1);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected_diagnostic, 0);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_diagnostic, 0);
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = app_for("output 1");
        let start = app.focused_pane;

        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.focused_pane, start);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, start.prev());
    }

    #[test]
    fn test_source_scroll_detaches_selection() {
        let mut app = app_for("@");
        app.focused_pane = FocusedPane::Source;

        press(&mut app, KeyCode::Down);
        assert!(!app.follow_selection);
        assert_eq!(app.source_scroll, 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app_for("output 1");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_success() {
        let mut app = app_for("int x; output x");
        let text = screen_text(&mut app);

        assert!(text.contains("Syntax Tree"));
        assert!(text.contains("(NODE: Program)"));
        assert!(text.contains("(no diagnostics)"));
        assert!(text.contains("ACCEPTED"));
    }

    #[test]
    fn test_render_failure() {
        let mut app = app_for("output 1 @");
        let text = screen_text(&mut app);

        assert!(text.contains("(no tree: 1 error(s)"));
        assert!(text.contains("unrecognized character '@'"));
        assert!(text.contains("1 ERROR(S)"));
    }
}
