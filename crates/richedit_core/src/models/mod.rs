//! Data models for persisted content.

/// Content records and list summaries.
pub mod content;

#[cfg(test)]
mod tests;
