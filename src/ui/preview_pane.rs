use fltk::{misc::HelpView, prelude::*};

use crate::app::compiler::PreviewSurface;

/// The sandboxed preview: an FLTK `HelpView` whose content is replaced
/// wholesale on every compile. Script blocks are carried in the document but
/// not executed by the widget, so a broken script buffer can never take the
/// host application down with it.
#[derive(Clone)]
pub struct PreviewPane {
    view: HelpView,
}

impl PreviewPane {
    /// Must be created inside the group that should own the widget.
    pub fn new() -> Self {
        let mut view = HelpView::new(0, 0, 0, 0, "");
        view.set_value("");
        Self { view }
    }
}

impl PreviewPane {
    pub fn resize(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.view.resize(x, y, w, h);
    }

    pub fn widget(&self) -> &HelpView {
        &self.view
    }
}

impl Default for PreviewPane {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSurface for PreviewPane {
    fn replace_content(&mut self, document: &str) {
        self.view.set_value(document);
        self.view.redraw();
    }
}
