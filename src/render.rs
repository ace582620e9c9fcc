//! Result rendering model
//!
//! `OutputPane` owns what a tool panel's result region currently shows.
//! Showing new content always replaces the old content and unhides the
//! region, so rendering twice leaves only the latest result visible.
//! The actual widget drawing lives in `ui/draw`; this module is the pure
//! state side so replacement and error semantics stay testable.

/// Content of the result region.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputContent {
    /// Literal text shown in a monospaced block. Never interpreted, which
    /// keeps untrusted generated text (queries, formatted JSON) inert.
    Verbatim(String),
    /// Mock tool result: a read-only URL field with a copy affordance.
    MockUrl { url: String, copied: bool },
    /// Regex tool result: pattern block plus explanation block.
    RegexPair { regex: String, explanation: String },
    /// Failure message with a fixed red treatment.
    Error(String),
}

/// The displayed state of one panel's result region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputPane {
    content: Option<OutputContent>,
}

impl OutputPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is shown with `content` and unhide the region.
    pub fn show(&mut self, content: OutputContent) {
        self.content = Some(content);
    }

    pub fn show_verbatim(&mut self, text: impl Into<String>) {
        self.show(OutputContent::Verbatim(text.into()));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(OutputContent::Error(message.into()));
    }

    pub fn clear(&mut self) {
        self.content = None;
    }

    /// Hidden until the first show; cleared panes hide again.
    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&OutputContent> {
        self.content.as_ref()
    }

    /// URL of a displayed mock result, if that is what is showing.
    pub fn mock_url(&self) -> Option<&str> {
        match &self.content {
            Some(OutputContent::MockUrl { url, .. }) => Some(url),
            _ => None,
        }
    }

    /// Flip the copy affordance label between `Copy` and `Copied!`.
    /// No-op unless a mock URL is showing.
    pub fn set_copied(&mut self, value: bool) {
        if let Some(OutputContent::MockUrl { copied, .. }) = &mut self.content {
            *copied = value;
        }
    }
}
