//! Backend options.

use std::path::{MAIN_SEPARATOR_STR, PathBuf};

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Extension of generated files.
pub const FILE_EXTENSION: &str = "vala";

/// Options for the Vala backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValaOptions {
    output_dir: String,
    lazy: bool,
}

impl ValaOptions {
    /// Creates options with default settings: output to `.`, always
    /// regenerate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            lazy: false,
        }
    }

    /// Sets the output directory. An empty string writes next to the
    /// current directory without a separator.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Only regenerate files older than their schema source.
    #[must_use]
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    /// Returns the configured output directory.
    #[must_use]
    pub fn get_output_dir(&self) -> &str {
        &self.output_dir
    }

    /// Returns true if lazy regeneration is enabled.
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// Computes the output path of a struct:
    /// `<output-dir><separator><StructName>.vala`, with the separator only
    /// when the output directory is non-empty.
    #[must_use]
    pub fn output_path(&self, struct_name: &str) -> PathBuf {
        let separator = if self.output_dir.is_empty() {
            ""
        } else {
            MAIN_SEPARATOR_STR
        };
        PathBuf::from(format!(
            "{}{}{}.{}",
            self.output_dir, separator, struct_name, FILE_EXTENSION
        ))
    }
}

impl Default for ValaOptions {
    fn default() -> Self {
        Self::new()
    }
}
