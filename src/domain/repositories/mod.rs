//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! - [`LinkRepository`] - Link creation and lookup
//! - [`ClickRepository`] - Click recording and per-link click history

pub mod click_repository;
pub mod link_repository;

pub use click_repository::{ClickRepository, LinkWithClicks};
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
