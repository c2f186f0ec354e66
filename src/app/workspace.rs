use super::buffers::{BufferStore, SourceKind};
use super::compiler::{self, PreviewSurface};
use super::export::{self, DocumentSink};
use super::panels::{PanelHost, PanelSwitcher};
use super::theme::{PreferenceStore, Theme, ThemeConfig, ThemeController, ThemeView};

/// All session state in one place: the three source buffers, the panel state
/// machine and the theme controller. Owned by the dispatch loop and handed to
/// the subsystems by reference; no free-floating globals.
pub struct Workspace {
    pub buffers: BufferStore,
    panels: PanelSwitcher,
    theme: ThemeController,
}

impl Workspace {
    pub fn new(theme_config: ThemeConfig, prefs: &dyn PreferenceStore) -> Self {
        Self {
            buffers: BufferStore::new(),
            panels: PanelSwitcher::new(),
            theme: ThemeController::new(theme_config, prefs),
        }
    }

    // --- Buffers ---

    pub fn source(&self, kind: SourceKind) -> &str {
        self.buffers.text(kind)
    }

    pub fn set_source(&mut self, kind: SourceKind, text: impl Into<String>) {
        self.buffers.set_text(kind, text);
    }

    // --- Panels & compile ---

    pub fn current_panel(&self) -> usize {
        self.panels.current()
    }

    pub fn switch_panel(&mut self, index: usize, host: &mut dyn PanelHost) {
        self.panels.switch_panel(index, host);
    }

    /// `switch_panel` followed by an unconditional compile.
    pub fn run_edit(
        &mut self,
        index: usize,
        host: &mut dyn PanelHost,
        preview: &mut dyn PreviewSurface,
    ) {
        self.panels.switch_panel(index, host);
        compiler::compile(&self.buffers, preview);
    }

    pub fn compile(&self, preview: &mut dyn PreviewSurface) {
        compiler::compile(&self.buffers, preview);
    }

    // --- Theme ---

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Startup application of the persisted theme.
    pub fn apply_theme(&self, view: &mut dyn ThemeView) {
        self.theme.apply(view);
    }

    pub fn toggle_theme(&mut self, prefs: &mut dyn PreferenceStore, view: &mut dyn ThemeView) {
        self.theme.toggle(prefs, view);
    }

    // --- Export ---

    pub fn export_text(&self) -> String {
        export::render_plain(&self.buffers)
    }

    pub fn export_paginated(&self, sink: &mut dyn DocumentSink) {
        export::render_paginated(&self.buffers, sink);
    }
}
