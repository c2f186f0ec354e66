//! TriPane - a desktop live-preview playground for HTML, CSS and JavaScript.
//!
//! Three editors feed a compile pipeline that rebuilds a single preview
//! document on demand; the current project can be exported as flat text or a
//! paginated PDF. The core in [`app`] is platform-agnostic and talks to the
//! FLTK widgets in [`ui`] only through narrow trait seams.

pub mod app;
pub mod ui;
