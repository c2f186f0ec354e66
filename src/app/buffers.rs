/// The three source languages fed into the compile pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Markup,
    Style,
    Script,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Markup, SourceKind::Style, SourceKind::Script];

    /// Human-facing section label, used by the export pipeline and nav buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Markup => "HTML",
            Self::Style => "CSS",
            Self::Script => "JavaScript",
        }
    }

    /// Index of the editor panel that edits this source.
    pub fn panel_index(&self) -> usize {
        match self {
            Self::Markup => 0,
            Self::Style => 1,
            Self::Script => 2,
        }
    }

    pub fn from_panel_index(index: usize) -> Option<SourceKind> {
        match index {
            0 => Some(Self::Markup),
            1 => Some(Self::Style),
            2 => Some(Self::Script),
            _ => None,
        }
    }
}

/// Holds the current text of the three sources for the lifetime of the session.
///
/// Content is arbitrary text; nothing here parses or validates it. The store
/// is mutated only through `set_text`, driven by editor change notifications.
pub struct BufferStore {
    markup: String,
    style: String,
    script: String,
}

impl BufferStore {
    /// A store pre-filled with the demo card project.
    pub fn new() -> Self {
        Self {
            markup: SAMPLE_MARKUP.to_string(),
            style: SAMPLE_STYLE.to_string(),
            script: SAMPLE_SCRIPT.to_string(),
        }
    }

    pub fn text(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Markup => &self.markup,
            SourceKind::Style => &self.style,
            SourceKind::Script => &self.script,
        }
    }

    pub fn set_text(&mut self, kind: SourceKind, text: impl Into<String>) {
        let slot = match kind {
            SourceKind::Markup => &mut self.markup,
            SourceKind::Style => &mut self.style,
            SourceKind::Script => &mut self.script,
        };
        *slot = text.into();
    }
}

impl Default for BufferStore {
    fn default() -> Self {
        Self::new()
    }
}

pub const SAMPLE_MARKUP: &str = r#"<!-- Modern Design Card -->
<div class="card">
  <h2>Hello World</h2>
  <p>Start building your amazing web project today.</p>
  <button onclick="greet()">Interact</button>
</div>"#;

pub const SAMPLE_STYLE: &str = r#"/* Sleek Integrated Styling */
body {
  margin: 0;
  height: 100%;
  display: flex;
  justify-content: center;
  align-items: center;
  font-family: 'Inter', sans-serif;
}

.card {
  padding: 40px;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 32px;
  text-align: center;
  box-shadow: 0 20px 40px rgba(0,0,0,0.2);
}

h2 { margin: 0 0 10px; }
p { opacity: 0.7; margin-bottom: 25px; }

button {
  background: #8b5cf6;
  color: white;
  border: none;
  padding: 12px 32px;
  border-radius: 14px;
  cursor: pointer;
  font-weight: 600;
}"#;

pub const SAMPLE_SCRIPT: &str = r#"// Simple Interactive Logic
function greet() {
  alert("The editor is ready for your code!");
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_has_sample_content() {
        let store = BufferStore::new();
        for kind in SourceKind::ALL {
            assert!(!store.text(kind).is_empty());
        }
        assert!(store.text(SourceKind::Markup).contains("card"));
    }

    #[test]
    fn test_set_text_replaces_content() {
        let mut store = BufferStore::new();
        store.set_text(SourceKind::Style, "p { color: red }");
        assert_eq!(store.text(SourceKind::Style), "p { color: red }");
    }

    #[test]
    fn test_buffers_are_independent() {
        let mut store = BufferStore::new();
        let markup_before = store.text(SourceKind::Markup).to_string();
        let script_before = store.text(SourceKind::Script).to_string();

        store.set_text(SourceKind::Style, "body { background: black }");
        store.set_text(SourceKind::Style, "");
        store.set_text(SourceKind::Style, "h1 { font-size: 3em }");

        assert_eq!(store.text(SourceKind::Markup), markup_before);
        assert_eq!(store.text(SourceKind::Script), script_before);
    }

    #[test]
    fn test_malformed_content_is_accepted_verbatim() {
        let mut store = BufferStore::new();
        store.set_text(SourceKind::Markup, "<div><span>unclosed");
        store.set_text(SourceKind::Script, "function broken( {");
        assert_eq!(store.text(SourceKind::Markup), "<div><span>unclosed");
        assert_eq!(store.text(SourceKind::Script), "function broken( {");
    }

    #[test]
    fn test_panel_index_round_trip() {
        for kind in SourceKind::ALL {
            assert_eq!(SourceKind::from_panel_index(kind.panel_index()), Some(kind));
        }
        assert_eq!(SourceKind::from_panel_index(3), None);
    }
}
