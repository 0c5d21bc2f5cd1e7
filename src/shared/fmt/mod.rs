//! Human-readable formatting for dashboard display.

mod num;

pub use num::{format_compact_usd, format_count, format_price, format_signed_percent};
