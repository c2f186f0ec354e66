use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;

use super::buffers::{BufferStore, SourceKind};
use super::error::{AppError, Result};

/// Fixed artifact filenames; written into the user's download directory.
pub const TEXT_EXPORT_FILENAME: &str = "tripane_export.txt";
pub const PDF_EXPORT_FILENAME: &str = "tripane_export.pdf";

// A4 portrait, all offsets in millimetres from the top-left corner.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN: f32 = 20.0;
const TOP_MARGIN: f32 = 20.0;
/// A section started past this offset goes onto a fresh page instead.
const PAGE_BOTTOM: f32 = 250.0;
const BODY_LINE_HEIGHT: f32 = 5.0;
const HEADER_TO_BODY: f32 = 10.0;
const SECTION_GAP: f32 = 10.0;
/// Hard-wrap column for body text in the paginated shape.
const WRAP_COLUMNS: usize = 88;

pub const EXPORT_TITLE: &str = "Code Editor Export";
const ACCENT: (u8, u8, u8) = (124, 77, 255);
const GRAY: (u8, u8, u8) = (100, 100, 100);
const BLACK: (u8, u8, u8) = (0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkFont {
    Helvetica,
    HelveticaBold,
    Courier,
}

/// The page-oriented document renderer behind the paginated export shape.
/// Coordinates are millimetres from the top-left of the current page; the
/// sink owns the flip into its native coordinate system.
pub trait DocumentSink {
    fn set_font(&mut self, font: SinkFont, size_pt: f32);
    fn set_color(&mut self, r: u8, g: u8, b: u8);
    /// Draw `lines` starting at (x, y), advancing `line_height` per line.
    fn write_lines(&mut self, lines: &[String], x: f32, y: f32, line_height: f32);
    fn add_page(&mut self);
}

/// One labeled slice of the point-in-time buffer snapshot.
pub struct Section {
    pub label: &'static str,
    pub text: String,
}

/// Read all three buffers once, in the fixed HTML/CSS/JavaScript order.
pub fn snapshot(buffers: &BufferStore) -> Vec<Section> {
    SourceKind::ALL
        .iter()
        .map(|&kind| Section {
            label: kind.label(),
            text: buffers.text(kind).to_string(),
        })
        .collect()
}

/// Shape (a): a flat text artifact with labeled sections.
pub fn render_plain(buffers: &BufferStore) -> String {
    let mut out = String::new();
    for section in snapshot(buffers) {
        out.push_str(section.label);
        out.push_str(": ");
        out.push_str(&section.text);
        out.push_str("\n\n");
    }
    out
}

/// Hard-wrap `text` to `columns` characters. Every input line yields at least
/// one output line, so empty lines survive as vertical space.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(columns) {
            lines.push(chunk.iter().collect());
        }
    }
    if text.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shape (b): a paginated document with a title, generation timestamp and one
/// labeled section per buffer.
///
/// Pagination keeps a running vertical offset. A section whose header would
/// start below `PAGE_BOTTOM` is moved to a fresh page; within a section the
/// wrapped body advances the offset by line count times line height, plus a
/// fixed gap before the next section.
pub fn render_paginated(buffers: &BufferStore, sink: &mut dyn DocumentSink) {
    sink.set_font(SinkFont::HelveticaBold, 22.0);
    sink.set_color(BLACK.0, BLACK.1, BLACK.2);
    sink.write_lines(
        &[EXPORT_TITLE.to_string()],
        LEFT_MARGIN,
        TOP_MARGIN,
        BODY_LINE_HEIGHT,
    );

    sink.set_font(SinkFont::Helvetica, 16.0);
    sink.set_color(GRAY.0, GRAY.1, GRAY.2);
    let stamp = format!("Generated on: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    sink.write_lines(&[stamp], LEFT_MARGIN, 30.0, BODY_LINE_HEIGHT);

    let mut cursor = 50.0;
    for section in snapshot(buffers) {
        if cursor > PAGE_BOTTOM {
            sink.add_page();
            cursor = TOP_MARGIN;
        }

        sink.set_font(SinkFont::HelveticaBold, 18.0);
        sink.set_color(ACCENT.0, ACCENT.1, ACCENT.2);
        sink.write_lines(
            &[format!("{}:", section.label)],
            LEFT_MARGIN,
            cursor,
            BODY_LINE_HEIGHT,
        );

        let body = wrap_text(&section.text, WRAP_COLUMNS);
        sink.set_font(SinkFont::Courier, 10.0);
        sink.set_color(BLACK.0, BLACK.1, BLACK.2);
        sink.write_lines(&body, LEFT_MARGIN, cursor + HEADER_TO_BODY, BODY_LINE_HEIGHT);

        cursor += HEADER_TO_BODY + body.len() as f32 * BODY_LINE_HEIGHT + SECTION_GAP;
    }
    debug!("rendered paginated export, final offset {:.1}mm", cursor);
}

/// Where exported artifacts land: the download directory, or the working
/// directory when the platform has none.
pub fn export_path(filename: &str) -> PathBuf {
    dirs::download_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(filename)
}

/// Write a finished artifact to disk. Rendering never fails; this is the
/// only fallible step of either export shape.
pub fn save_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)
        .map_err(|e| AppError::Export(format!("cannot write {}: {}", path.display(), e)))
}
