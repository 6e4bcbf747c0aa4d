//! Common utility functions shared by the domain validators.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **No wall clock** - "today" is always passed in by the caller

pub mod datetime;
pub mod string;

pub use datetime::{is_in_future, whole_days_between};
pub use string::{char_len, is_blank, is_letters_and_spaces, StringExt};
