//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository and
//! cache calls with validation. Services consume trait objects and provide a
//! clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution
//! - [`services::analytics_service::AnalyticsService`] - Click recording and summaries
//!
//! [`click_worker`] records clicks off the request path.

pub mod click_worker;
pub mod services;
