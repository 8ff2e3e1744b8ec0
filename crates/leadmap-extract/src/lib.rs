//! Turns raw model output into [`leadmap_core::Lead`] records.
//!
//! Both entry points are total: malformed input degrades to fewer records or
//! an untouched phone string, never an error.

pub mod phone;
pub mod table;

pub use phone::normalize_phone;
pub use table::parse_leads_table;
