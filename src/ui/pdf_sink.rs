use printpdf::text::TextItem;
use printpdf::{BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb, TextMatrix};

use crate::app::export::{DocumentSink, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, SinkFont};

/// printpdf-backed document sink for the paginated export shape. Pages are
/// built as op lists from builtin fonts, so no font files ship with the app.
pub struct PdfSink {
    document: PdfDocument,
    ops: Vec<Op>,
    font: SinkFont,
    font_size: f32,
}

impl PdfSink {
    pub fn new(title: &str) -> Self {
        Self {
            document: PdfDocument::new(title),
            ops: Vec::new(),
            font: SinkFont::Helvetica,
            font_size: 12.0,
        }
    }

    fn close_page(&mut self) {
        let ops = std::mem::take(&mut self.ops);
        self.document
            .pages
            .push(PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops));
    }

    /// Finalize all pages and serialize the document.
    pub fn finish(mut self) -> Vec<u8> {
        self.close_page();
        let mut warnings = Vec::new();
        self.document.save(&PdfSaveOptions::default(), &mut warnings)
    }
}

fn builtin(font: SinkFont) -> BuiltinFont {
    match font {
        SinkFont::Helvetica => BuiltinFont::Helvetica,
        SinkFont::HelveticaBold => BuiltinFont::HelveticaBold,
        SinkFont::Courier => BuiltinFont::Courier,
    }
}

impl DocumentSink for PdfSink {
    fn set_font(&mut self, font: SinkFont, size_pt: f32) {
        self.font = font;
        self.font_size = size_pt;
    }

    fn set_color(&mut self, r: u8, g: u8, b: u8) {
        let color = Rgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            None,
        );
        self.ops.push(Op::SetFillColor {
            col: printpdf::color::Color::Rgb(color),
        });
    }

    fn write_lines(&mut self, lines: &[String], x: f32, y: f32, line_height: f32) {
        let page_height_pt = Mm(PAGE_HEIGHT_MM).into_pt().0;

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(self.font_size),
            font: builtin(self.font),
        });

        for (i, line) in lines.iter().enumerate() {
            // Incoming y grows downward from the top edge; PDF origin is the
            // bottom-left corner.
            let y_mm = y + i as f32 * line_height;
            let pdf_y = Pt(page_height_pt - Mm(y_mm).into_pt().0);
            self.ops.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Mm(x).into_pt(), pdf_y),
            });
            self.ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(line.clone())],
                font: builtin(self.font),
            });
        }

        self.ops.push(Op::EndTextSection);
    }

    fn add_page(&mut self) {
        self.close_page();
    }
}
