//! Fence marker recognition.
//!
//! Only two exact line contents are meaningful to the extractor: the open
//! token (`~~~~cpp` by default) and the close token (`~~~~`). Everything else
//! is ordinary content. There is no indentation tolerance, no backtick
//! fences and no nesting.

/// Default language tag carried by the open token
pub const DEFAULT_LANGUAGE: &str = "cpp";

/// Fence prefix shared by the open and close tokens
pub const FENCE: &str = "~~~~";

/// Classification of a single input line
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineKind {
    /// Line exactly equal to the open token
    Open,
    /// Line exactly equal to the close token
    Close,
    /// Anything else
    Content,
}

/// The pair of tokens delimiting a capturable region
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FenceMarkers {
    open: String,
    close: String,
}

impl Default for FenceMarkers {
    fn default() -> Self {
        Self::for_language(DEFAULT_LANGUAGE)
    }
}

impl FenceMarkers {
    /// Markers whose open token is `~~~~<language>`
    ///
    /// `language` should be non-empty; an empty tag makes the open token equal
    /// to the close token and a region can then never be closed.
    pub fn for_language(language: &str) -> Self {
        Self {
            open: format!("{FENCE}{language}"),
            close: FENCE.to_string(),
        }
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    /// Classify a raw line, terminator included.
    ///
    /// Comparison is exact byte equality on the line content with its line
    /// ending removed.
    pub fn classify(&self, line: &[u8]) -> LineKind {
        let content = strip_line_ending(line);
        if content == self.open.as_bytes() {
            LineKind::Open
        } else if content == self.close.as_bytes() {
            LineKind::Close
        } else {
            LineKind::Content
        }
    }
}

/// Remove one trailing `\n`, then one trailing `\r` if present.
///
/// Stripping the `\r` means CRLF marker lines count as markers. This differs
/// from a line-anchored `^~~~~$` regex, which does not match before `\r` and
/// so treats `~~~~\r\n` as ordinary content.
pub fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
