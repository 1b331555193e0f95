//! Display formatting for terminal output
//!
//! Provides utilities for formatting records and amounts for terminal display.

pub mod record;
pub mod report;

pub use record::{format_record_details, format_record_list};
pub use report::{format_bar, format_money, separator, truncate};
