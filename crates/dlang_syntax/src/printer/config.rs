//! AST printer configuration.

/// Printer configuration
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Number of spaces per tree depth level
    pub indent_width: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        // Two spaces per level is the golden-file format.
        Self { indent_width: 2 }
    }
}

impl PrinterConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}
