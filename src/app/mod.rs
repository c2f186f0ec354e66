//! Application core, independent of the FLTK shell.
//!
//! # Structure
//!
//! - `buffers` - the three source buffers (markup, style, script)
//! - `compiler` - merges the buffers into one preview document
//! - `panels` - the four-view panel state machine
//! - `theme` - dark/light theme controller and persistence contract
//! - `export` - flat-text and paginated export pipelines
//! - `prefs` - JSON-file preference store
//! - `workspace` - session-state coordinator owning the above

pub mod buffers;
pub mod compiler;
pub mod error;
pub mod export;
pub mod messages;
pub mod panels;
pub mod prefs;
pub mod theme;
pub mod workspace;

// Re-exports for convenient external access
pub use buffers::{BufferStore, SourceKind};
pub use error::{AppError, Result};
pub use messages::Message;
pub use theme::{Theme, ThemeConfig};
pub use workspace::Workspace;
