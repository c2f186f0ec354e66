use log::debug;

use super::buffers::{BufferStore, SourceKind};

/// The sandboxed rendering surface the compiled document is written into.
/// `replace_content` discards whatever the surface held before; no state from
/// a previous compile survives into the next one.
pub trait PreviewSurface {
    fn replace_content(&mut self, document: &str);
}

/// Concatenate the three sources into a single renderable document, in the
/// fixed order style-wrapped, markup as-is, script-wrapped.
///
/// The buffers are inlined verbatim. A literal `</script>` inside the script
/// buffer will close the wrapper early; that cross-contamination is a known
/// gap inherited from the template and left unhandled on purpose.
pub fn compose_document(buffers: &BufferStore) -> String {
    format!(
        "<style>{}</style>{}<script>{}</script>",
        buffers.text(SourceKind::Style),
        buffers.text(SourceKind::Markup),
        buffers.text(SourceKind::Script),
    )
}

/// Full teardown-and-rebuild of the preview: compose the current buffers and
/// replace the surface's content wholesale. No diffing, no validation.
pub fn compile(buffers: &BufferStore, preview: &mut dyn PreviewSurface) {
    let document = compose_document(buffers);
    debug!("compiled preview document ({} bytes)", document.len());
    preview.replace_content(&document);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Preview fake that records every document written to it.
    #[derive(Default)]
    pub struct RecordingPreview {
        pub documents: Vec<String>,
    }

    impl RecordingPreview {
        pub fn last(&self) -> Option<&str> {
            self.documents.last().map(String::as_str)
        }
    }

    impl PreviewSurface for RecordingPreview {
        fn replace_content(&mut self, document: &str) {
            self.documents.push(document.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingPreview;
    use super::*;

    fn store(markup: &str, style: &str, script: &str) -> BufferStore {
        let mut buffers = BufferStore::new();
        buffers.set_text(SourceKind::Markup, markup);
        buffers.set_text(SourceKind::Style, style);
        buffers.set_text(SourceKind::Script, script);
        buffers
    }

    #[test]
    fn test_compose_exact_serialized_form() {
        let buffers = store("<p>hi</p>", "p{color:red}", "console.log(1)");
        assert_eq!(
            compose_document(&buffers),
            "<style>p{color:red}</style><p>hi</p><script>console.log(1)</script>"
        );
    }

    #[test]
    fn test_compose_order_is_style_markup_script() {
        let buffers = store("M", "S", "J");
        let doc = compose_document(&buffers);
        let style_at = doc.find("<style>S</style>").unwrap();
        let markup_at = doc.find('M').unwrap();
        let script_at = doc.find("<script>J</script>").unwrap();
        assert!(style_at < markup_at && markup_at < script_at);
    }

    #[test]
    fn test_empty_buffers_still_produce_wrappers() {
        let buffers = store("", "", "");
        assert_eq!(
            compose_document(&buffers),
            "<style></style><script></script>"
        );
    }

    #[test]
    fn test_script_buffer_is_not_escaped() {
        // Known gap: an early closing tag in the script source is passed through.
        let buffers = store("", "", "var s = \"</script>\";");
        assert!(compose_document(&buffers).contains("var s = \"</script>\";"));
    }

    #[test]
    fn test_compile_replaces_previous_document() {
        let mut buffers = store("<p>one</p>", "", "");
        let mut preview = RecordingPreview::default();

        compile(&buffers, &mut preview);
        buffers.set_text(SourceKind::Markup, "<p>two</p>");
        compile(&buffers, &mut preview);

        assert_eq!(preview.documents.len(), 2);
        assert!(preview.last().unwrap().contains("<p>two</p>"));
        assert!(!preview.last().unwrap().contains("<p>one</p>"));
    }

    #[test]
    fn test_compile_is_idempotent_without_edits() {
        let buffers = store("<p>hi</p>", "p{}", "1+1");
        let mut preview = RecordingPreview::default();
        compile(&buffers, &mut preview);
        compile(&buffers, &mut preview);
        assert_eq!(preview.documents[0], preview.documents[1]);
    }
}
