//! Core domain entities.
//!
//! - [`Link`] - A shortened URL mapping
//! - [`Click`] - A recorded redirect
//! - [`ClickSummary`] - Click counts grouped by region and device
//!
//! Entities are plain data. Creation inputs live in separate `New*` structs
//! because ids and timestamps are assigned by the database.

pub mod analytics;
pub mod click;
pub mod link;

pub use analytics::ClickSummary;
pub use click::{Click, NewClick};
pub use link::{Link, NewLink, ResolvedLink};
