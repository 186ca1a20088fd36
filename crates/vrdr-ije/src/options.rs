//! Codec options.

/// How values without a fixed-width rendition are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Fail on the first value that cannot be mapped (default).
    #[default]
    Strict,
    /// Leave such fields blank on encode and unset on decode.
    Lenient,
}

/// Options for encoding and decoding fixed-width records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    pub validation: ValidationMode,
    /// Cut over-long text to the field width instead of failing (default: true).
    pub truncate_text: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Strict,
            truncate_text: true,
        }
    }
}

impl CodecOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lenient() -> Self {
        Self {
            validation: ValidationMode::Lenient,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_truncation(mut self, truncate: bool) -> Self {
        self.truncate_text = truncate;
        self
    }

    pub fn is_lenient(&self) -> bool {
        self.validation == ValidationMode::Lenient
    }
}
