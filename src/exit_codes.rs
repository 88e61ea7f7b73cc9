//! Exit codes for mdcode
//!
//! Usage mistakes and I/O failures get distinct non-zero codes.

/// Success - Output file written
pub const SUCCESS: i32 = 0;

/// Usage error - Wrong number of arguments or an unrecognized flag
pub const USAGE_ERROR: i32 = 1;

/// Tool error - Input unreadable or output unwritable
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{TOOL_ERROR, USAGE_ERROR};

    /// Exit with usage error code (1)
    pub fn usage_error() -> ! {
        std::process::exit(USAGE_ERROR);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
