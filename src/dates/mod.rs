//! Date detection and rendering
//!
//! Recognizes date-like strings against a strict allow-list of ISO 8601
//! layouts and renders them on demand at resolve time.
//!
//! # Features
//!
//! - **Strict Layouts**: The whole string must match one layout
//! - **Formatting**: Moment-style format tokens (`MMMM Do, YYYY`)
//! - **Relative Time**: Humanized "in 3 days" / "2 hours ago"
//! - **Differences**: Signed distance from now in a named unit

mod format;
mod parse;
mod relative;

pub use format::format_date;
pub use parse::{is_date, parse_date, DateLayout, ParsedDate};
pub use relative::{difference, from_now, TimeUnit};
