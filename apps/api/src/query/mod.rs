// Query Matcher: rule-based answers to free-text questions about the profile.

pub mod format;
pub mod handlers;
pub mod matcher;
