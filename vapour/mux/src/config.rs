/*!
    Mux configuration types.
*/

use std::path::{Path, PathBuf};

/**
    Output format for a frame stream.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Y4M container (header + per-frame markers).
    Y4m,
    /// Bare concatenated planar frames.
    Raw,
}

impl OutputFormat {
    /**
        Get the typical file extension for this format.
    */
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Y4m => ".y4m",
            Self::Raw => ".yuv",
        }
    }
}

/**
    Configuration for muxing a frame stream, fixed for the stream's lifetime.
*/
#[derive(Clone, Debug)]
pub struct MuxConfig {
    /// Output format to use.
    pub format: OutputFormat,
    /// Explicit output file extension, overriding the format's default.
    pub extension: Option<String>,
}

impl Default for MuxConfig {
    fn default() -> Self {
        Self::y4m()
    }
}

impl MuxConfig {
    /**
        Create configuration for Y4M output.
    */
    pub fn y4m() -> Self {
        Self {
            format: OutputFormat::Y4m,
            extension: None,
        }
    }

    /**
        Create configuration for raw planar output.
    */
    pub fn raw() -> Self {
        Self {
            format: OutputFormat::Raw,
            extension: None,
        }
    }

    /**
        Set an explicit output file extension (with leading dot).
    */
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /**
        Returns true if Y4M framing is enabled.
    */
    pub fn is_y4m(&self) -> bool {
        self.format == OutputFormat::Y4m
    }

    /**
        The extension for output files.

        An explicitly configured extension always wins; otherwise the
        extension is derived from the output format.
    */
    pub fn output_extension(&self) -> &str {
        match &self.extension {
            Some(extension) => extension,
            None => self.format.extension(),
        }
    }

    /**
        Rewrite `path` to carry the output extension.
    */
    pub fn apply_extension(&self, path: &Path) -> PathBuf {
        path.with_extension(self.output_extension().trim_start_matches('.'))
    }
}
