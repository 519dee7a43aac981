//! Report extraction: duration handling, header metadata and aggregation

pub mod aggregator;
pub mod duration;
pub mod metadata;

pub use aggregator::aggregate;
pub use duration::{format_minutes, parse_minutes, parse_minutes_str};
pub use metadata::{extract_company_code, extract_metadata, extract_period};
