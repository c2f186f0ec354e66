//! FLTK shell: window construction, editor/preview widgets, theme colors and
//! the printpdf document sink.

pub mod editor_pane;
pub mod main_window;
pub mod pdf_sink;
pub mod preview_pane;
pub mod theme;

pub use main_window::{Shell, build_menu, build_shell};
pub use pdf_sink::PdfSink;
