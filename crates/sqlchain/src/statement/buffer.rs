/// Append-only SQL text.
///
/// Every fragment is surrounded by single spaces so pieces concatenate
/// safely no matter the call order. Nothing already written is ever
/// rewritten or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementBuffer {
    text: String,
}

impl StatementBuffer {
    /// Create a buffer seeded with `seed` followed by a single space.
    pub fn new(seed: impl Into<String>) -> Self {
        let mut text = seed.into();
        text.push(' ');
        Self { text }
    }

    /// Append ` fragment ` without any validation.
    pub fn append(&mut self, fragment: &str) {
        #[cfg(feature = "tracing")]
        tracing::trace!(fragment, "append");
        self.text.reserve(fragment.len() + 2);
        self.text.push(' ');
        self.text.push_str(fragment);
        self.text.push(' ');
    }

    /// The accumulated text, verbatim.
    pub fn read(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for StatementBuffer {
    fn default() -> Self {
        Self::new("")
    }
}
