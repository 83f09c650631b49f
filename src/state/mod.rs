//! State module for tracking crawl progress
//!
//! This module provides the lifecycle state of individual pages during a crawl.

mod page_state;

// Re-export main types
pub use page_state::PageState;
