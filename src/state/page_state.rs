//! Page state definitions for tracking crawl progress
//!
//! This module defines all possible states a page can be in during the crawl process.

use crate::FetchError;
use std::fmt;

/// Represents the current state of a page in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageState {
    // ===== Active States =====
    /// Page has been claimed by the crawler but not yet fetched
    #[default]
    Pending,

    // ===== Terminal Success States =====
    /// Page was fetched (with any HTTP status) and parsed
    Processed,

    // ===== Terminal Error States =====
    /// Page could not be reached (connection refused, DNS failure, timeout)
    Unreachable,

    /// Page fetch failed for other reasons (bad URL, unsupported scheme, body read)
    Failed,
}

impl PageState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Processed)
    }

    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Unreachable | Self::Failed)
    }

    /// Maps a transport failure to the state it leaves a page in
    pub fn from_fetch_error(error: &FetchError) -> Self {
        match error {
            FetchError::Timeout { .. } | FetchError::Connect { .. } => Self::Unreachable,
            _ => Self::Failed,
        }
    }

    /// Stable lowercase name, used in reports and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processed => "processed",
            Self::Unreachable => "unreachable",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
