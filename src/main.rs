use fltk::{app, dialog, enums::Event, prelude::*};
use log::{debug, info};

use tri_pane::app::export;
use tri_pane::app::messages::Message;
use tri_pane::app::prefs::FilePreferenceStore;
use tri_pane::app::theme::ThemeConfig;
use tri_pane::app::workspace::Workspace;
use tri_pane::ui::pdf_sink::PdfSink;
use tri_pane::ui::{build_menu, build_shell};

fn main() {
    env_logger::init();

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut prefs = FilePreferenceStore::load_default();
    let mut workspace = Workspace::new(ThemeConfig::default_toggle(), &prefs);

    let mut shell = build_shell(&sender, &workspace);
    build_menu(&mut shell.menu, &sender);

    // Editor change notifications: any insert or delete syncs that buffer
    // into the store on the next dispatch iteration.
    for pane in &shell.editors {
        let kind = pane.kind();
        let s = sender;
        let mut buffer = pane.buffer.clone();
        buffer.add_modify_callback(move |_, inserted, deleted, _, _| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::SourceEdited(kind));
            }
        });
    }

    shell.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::Quit);
            }
        }
    });

    shell.wind.show();

    // Surfaces and compiler are ready: apply the persisted theme and select
    // the markup editor once.
    workspace.apply_theme(&mut shell);
    workspace.switch_panel(0, &mut shell);

    // The preview widget handle is cheap to clone; a separate handle lets the
    // compile pipeline write to it while the shell is borrowed as PanelHost.
    let mut preview = shell.preview.clone();

    info!("TriPane started, theme {:?}", workspace.theme());

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::RunEdit(index) => {
                    workspace.run_edit(index, &mut shell, &mut preview);
                }
                Message::SourceEdited(kind) => {
                    let text = shell.editor_value(kind);
                    workspace.set_source(kind, text);
                }
                Message::ToggleTheme => {
                    workspace.toggle_theme(&mut prefs, &mut shell);
                }
                Message::ExportText => export_text(&workspace),
                Message::ExportPdf => export_pdf(&workspace),
                Message::Quit => {
                    fltk_app.quit();
                }
            }
        }
    }
}

fn export_text(workspace: &Workspace) {
    let path = export::export_path(export::TEXT_EXPORT_FILENAME);
    match export::save_artifact(&path, workspace.export_text().as_bytes()) {
        Ok(()) => info!("exported text to {}", path.display()),
        Err(e) => dialog::alert_default(&e.to_string()),
    }
}

fn export_pdf(workspace: &Workspace) {
    let mut sink = PdfSink::new(export::EXPORT_TITLE);
    workspace.export_paginated(&mut sink);
    let bytes = sink.finish();
    debug!("assembled PDF artifact ({} bytes)", bytes.len());

    let path = export::export_path(export::PDF_EXPORT_FILENAME);
    match export::save_artifact(&path, &bytes) {
        Ok(()) => info!("exported PDF to {}", path.display()),
        Err(e) => dialog::alert_default(&e.to_string()),
    }
}
