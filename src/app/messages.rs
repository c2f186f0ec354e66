use super::buffers::SourceKind;

/// All messages that can be sent through the FLTK channel.
/// Nav buttons, menu items and shortcuts send one of these; the dispatch
/// loop in main handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Switch to a panel and recompile the preview (nav buttons, Ctrl+Enter
    /// with index 3).
    RunEdit(usize),

    /// An editor buffer changed; sync it into the buffer store.
    SourceEdited(SourceKind),

    ToggleTheme,
    ExportText,
    ExportPdf,
    Quit,
}
