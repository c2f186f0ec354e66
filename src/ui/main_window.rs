use fltk::{
    app::Sender,
    button::Button,
    enums::{Color, FrameType, Key, Shortcut},
    frame::Frame,
    group::{Flex, FlexType, Group},
    menu::{MenuBar, MenuFlag},
    prelude::*,
    window::Window,
};

use crate::app::buffers::SourceKind;
use crate::app::messages::Message;
use crate::app::panels::{PANEL_COUNT, PanelHost};
use crate::app::theme::ThemeView;
use crate::app::workspace::Workspace;

use super::editor_pane::{EditorOptions, EditorPane};
use super::preview_pane::PreviewPane;
use super::theme::{
    accent_color, apply_chrome_theme, is_dark_theme, nav_base_color, nav_label_color,
};

pub const NAV_LABELS: [&str; PANEL_COUNT] = ["HTML", "CSS", "JS", "Preview"];

const WIN_W: i32 = 900;
const WIN_H: i32 = 600;
const MENU_H: i32 = 30;
const NAV_H: i32 = 40;

/// The main window and every widget the core addresses through its traits:
/// nav buttons and content panels (`PanelHost`), editors and the sun/moon
/// icon pair (`ThemeView`).
pub struct Shell {
    pub wind: Window,
    pub menu: MenuBar,
    nav_buttons: Vec<Button>,
    active_nav: usize,
    sun_icon: Frame,
    moon_icon: Frame,
    panels: Vec<Group>,
    pub editors: Vec<EditorPane>,
    pub preview: PreviewPane,
    dark: bool,
}

pub fn build_shell(sender: &Sender<Message>, workspace: &Workspace) -> Shell {
    let mut wind = Window::new(100, 100, WIN_W, WIN_H, "TriPane");
    wind.set_xclass("TriPane");

    let mut flex = Flex::new(0, 0, WIN_W, WIN_H, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_H, "");
    flex.fixed(&menu, MENU_H);

    // Nav row: one button per panel, theme and export controls on the right.
    let mut nav_row = Flex::new(0, 0, 0, NAV_H, None);
    nav_row.set_type(FlexType::Row);

    let mut nav_buttons = Vec::new();
    for (i, label) in NAV_LABELS.iter().enumerate() {
        let mut btn = Button::new(0, 0, 0, 0, *label);
        btn.set_frame(FrameType::FlatBox);
        btn.emit(*sender, Message::RunEdit(i));
        nav_row.fixed(&btn, 90);
        nav_buttons.push(btn);
    }

    // Flexible gap between nav buttons and the right-side controls.
    let _spacer = Frame::new(0, 0, 0, 0, "");

    let sun_icon = Frame::new(0, 0, 0, 0, "\u{2600}");
    nav_row.fixed(&sun_icon, 30);
    let mut moon_icon = Frame::new(0, 0, 0, 0, "\u{263d}");
    nav_row.fixed(&moon_icon, 30);
    moon_icon.hide();

    let mut theme_btn = Button::new(0, 0, 0, 0, "Theme");
    theme_btn.emit(*sender, Message::ToggleTheme);
    nav_row.fixed(&theme_btn, 70);

    let mut export_btn = Button::new(0, 0, 0, 0, "Export");
    export_btn.emit(*sender, Message::ExportPdf);
    nav_row.fixed(&export_btn, 70);

    nav_row.end();
    flex.fixed(&nav_row, NAV_H);

    // Content area: four stacked groups occupying the same region, exactly
    // one shown at a time.
    let content_y = MENU_H + NAV_H;
    let content_h = WIN_H - content_y;
    let content = Group::new(0, content_y, WIN_W, content_h, None);

    let options = EditorOptions::default();
    let mut panels = Vec::new();
    let mut editors = Vec::new();
    for kind in SourceKind::ALL {
        let mut group = Group::new(0, content_y, WIN_W, content_h, None);
        let mut pane = EditorPane::new(kind, workspace.source(kind), options);
        pane.editor.resize(0, content_y, WIN_W, content_h);
        group.resizable(&pane.editor);
        group.end();
        group.hide();
        panels.push(group);
        editors.push(pane);
    }

    let mut preview_group = Group::new(0, content_y, WIN_W, content_h, None);
    let mut preview = PreviewPane::new();
    preview.resize(0, content_y, WIN_W, content_h);
    preview_group.resizable(preview.widget());
    preview_group.end();
    preview_group.hide();
    panels.push(preview_group);

    content.end();
    flex.end();
    wind.resizable(&flex);
    wind.end();

    Shell {
        wind,
        menu,
        nav_buttons,
        active_nav: 0,
        sun_icon,
        moon_icon,
        panels,
        editors,
        preview,
        dark: true,
    }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Export as Text", Shortcut::Ctrl | Shortcut::Shift | 'e', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExportText) });
    menu.add("File/Export as PDF...", Shortcut::Ctrl | 'e', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ExportPdf) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // View
    menu.add("View/HTML Editor", Shortcut::Ctrl | '1', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RunEdit(0)) });
    menu.add("View/CSS Editor", Shortcut::Ctrl | '2', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RunEdit(1)) });
    menu.add("View/JavaScript Editor", Shortcut::Ctrl | '3', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RunEdit(2)) });
    menu.add("View/Preview", Shortcut::Ctrl | '4', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RunEdit(3)) });
    menu.add("View/Toggle Theme", Shortcut::Ctrl | 'd', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleTheme) });

    // Run
    menu.add("Run/Compile and Preview", Shortcut::Ctrl | Key::Enter, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RunEdit(3)) });
}

impl Shell {
    /// Current text of the editor pane for `kind`.
    pub fn editor_value(&self, kind: SourceKind) -> String {
        self.editors
            .iter()
            .find(|pane| pane.kind() == kind)
            .map(EditorPane::value)
            .unwrap_or_default()
    }

    fn paint_nav(&mut self, index: usize, active: bool) {
        let btn = &mut self.nav_buttons[index];
        if active {
            btn.set_color(accent_color());
            btn.set_label_color(Color::White);
        } else {
            btn.set_color(nav_base_color(self.dark));
            btn.set_label_color(nav_label_color(self.dark));
        }
        btn.redraw();
    }
}

impl PanelHost for Shell {
    fn set_nav_active(&mut self, index: usize, active: bool) {
        if active {
            self.active_nav = index;
        }
        self.paint_nav(index, active);
    }

    fn set_panel_visible(&mut self, index: usize, visible: bool) {
        if visible {
            self.panels[index].show();
        } else {
            self.panels[index].hide();
        }
    }

    fn relayout_editor(&mut self, index: usize) {
        if let Some(pane) = self.editors.get_mut(index) {
            pane.relayout();
        }
    }
}

impl ThemeView for Shell {
    fn apply_editor_theme(&mut self, theme_id: &str) {
        self.dark = is_dark_theme(theme_id);
        for pane in &mut self.editors {
            pane.set_theme(theme_id);
        }
        apply_chrome_theme(&mut self.wind, &mut self.menu, self.dark);
        for i in 0..PANEL_COUNT {
            let active = i == self.active_nav;
            self.paint_nav(i, active);
        }
    }

    fn show_sun_icon(&mut self, visible: bool) {
        if visible {
            self.sun_icon.show();
        } else {
            self.sun_icon.hide();
        }
    }

    fn show_moon_icon(&mut self, visible: bool) {
        if visible {
            self.moon_icon.show();
        } else {
            self.moon_icon.hide();
        }
    }
}
