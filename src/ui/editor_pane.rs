use fltk::{
    enums::{Color, Font},
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::buffers::SourceKind;

/// Editor widget options shared by all three panes.
#[derive(Debug, Clone, Copy)]
pub struct EditorOptions {
    pub font_size: i32,
    pub tab_size: i32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            font_size: 16,
            tab_size: 2,
        }
    }
}

/// One source editor: an FLTK `TextEditor` plus its backing buffer.
/// Must be created inside the group that should own the widget.
#[derive(Clone)]
pub struct EditorPane {
    kind: SourceKind,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
}

impl EditorPane {
    pub fn new(kind: SourceKind, initial_text: &str, options: EditorOptions) -> Self {
        let mut buffer = TextBuffer::default();
        buffer.set_text(initial_text);
        buffer.set_tab_distance(options.tab_size);

        let mut editor = TextEditor::new(0, 0, 0, 0, "");
        editor.set_buffer(buffer.clone());
        editor.set_text_font(Font::Courier);
        editor.set_text_size(options.font_size);
        editor.set_linenumber_width(40);
        editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
        editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

        Self {
            kind,
            editor,
            buffer,
        }
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Current text of the backing buffer.
    pub fn value(&self) -> String {
        self.buffer.text()
    }

    pub fn set_theme(&mut self, theme_id: &str) {
        super::theme::apply_editor_theme(&mut self.editor, theme_id);
    }

    /// Recompute the widget's layout after the pane was hidden; the editor
    /// caches its size while not displayed.
    pub fn relayout(&mut self) {
        let (x, y, w, h) = (
            self.editor.x(),
            self.editor.y(),
            self.editor.w(),
            self.editor.h(),
        );
        self.editor.resize(x, y, w, h);
        self.editor.redraw();
    }
}
