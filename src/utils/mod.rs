//! Helper functions used across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Scheme validation for submitted URLs
//! - [`client_ip`] - Client address extraction for click records

pub mod client_ip;
pub mod code_generator;
pub mod url_validator;
