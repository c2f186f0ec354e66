use fltk::{enums::Color, menu::MenuBar, prelude::*, text::TextEditor, window::Window};

/// Theme identifiers ending in "dark" select the dark palette.
pub fn is_dark_theme(theme_id: &str) -> bool {
    theme_id.ends_with("dark")
}

pub fn apply_editor_theme(editor: &mut TextEditor, theme_id: &str) {
    if is_dark_theme(theme_id) {
        editor.set_color(Color::from_rgb(30, 30, 30));
        editor.set_text_color(Color::from_rgb(220, 220, 220));
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        editor.set_linenumber_bgcolor(Color::from_rgb(40, 40, 40));
        editor.set_linenumber_fgcolor(Color::from_rgb(150, 150, 150));
    } else {
        editor.set_color(Color::White);
        editor.set_text_color(Color::Black);
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
        editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
    }
    editor.redraw();
}

pub fn apply_chrome_theme(window: &mut Window, menu: &mut MenuBar, is_dark: bool) {
    if is_dark {
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60));
    } else {
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200));
    }
    window.redraw();
    menu.redraw();
}

/// Accent used for the active nav button, matching the sample card's purple.
pub fn accent_color() -> Color {
    Color::from_rgb(139, 92, 246)
}

pub fn nav_base_color(is_dark: bool) -> Color {
    if is_dark {
        Color::from_rgb(45, 45, 45)
    } else {
        Color::from_rgb(225, 225, 225)
    }
}

pub fn nav_label_color(is_dark: bool) -> Color {
    if is_dark {
        Color::from_rgb(220, 220, 220)
    } else {
        Color::Black
    }
}
