//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with keyword highlighting and diagnostic markers
//! - [`tree`]: The syntax tree, or a notice when the parse failed
//! - [`diagnostics`]: Selectable list of every reported defect
//! - [`trace`]: Derivation trace with recovery runs highlighted
//! - [`status`]: Status bar with keybindings and the overall verdict
//! - `utils`: Scroll clamping and pane chrome shared by the above
//!
//! Each pane module exports a single `render_*` function that takes the frame,
//! its area, borrowed data and the pane's scroll state.

mod utils;

pub mod diagnostics;
pub mod source;
pub mod status;
pub mod trace;
pub mod tree;

pub use diagnostics::render_diagnostics_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use trace::render_trace_pane;
pub use tree::render_tree_pane;
