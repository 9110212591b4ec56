//! Rendering options and configuration.

/// Default input bound: 2 MiB of extracted text.
const DEFAULT_MAX_INPUT_LEN: usize = 2 * 1024 * 1024;

/// Options for the rendering pipeline.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum accepted input length in bytes. Inputs over the bound are
    /// rejected with `Error::InputTooLarge` before any formatting runs.
    pub max_input_len: usize,

    /// Stamp the render timestamp into the document footer
    pub include_footer: bool,

    /// Render section/page separators as dashed rules
    pub dashed_section_breaks: bool,

    /// Show line numbers on code lines
    pub line_numbers: bool,
}

impl RenderOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input length in bytes.
    pub fn with_max_input_len(mut self, bytes: usize) -> Self {
        self.max_input_len = bytes;
        self
    }

    /// Enable or disable the footer timestamp.
    pub fn with_footer(mut self, include: bool) -> Self {
        self.include_footer = include;
        self
    }

    /// Use dashed or solid section separators.
    pub fn with_dashed_breaks(mut self, dashed: bool) -> Self {
        self.dashed_section_breaks = dashed;
        self
    }

    /// Enable or disable code line numbers.
    pub fn with_line_numbers(mut self, numbers: bool) -> Self {
        self.line_numbers = numbers;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            include_footer: true,
            dashed_section_breaks: true,
            line_numbers: true,
        }
    }
}
