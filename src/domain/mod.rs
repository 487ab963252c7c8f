//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`classifiers`] - Region and device classification contracts
//! - [`click_event`] - In-flight click model handed to the background worker
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application`].

pub mod classifiers;
pub mod click_event;
pub mod entities;
pub mod repositories;
