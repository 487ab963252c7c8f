//! Repository trait for click recording and analytics reads.

use crate::domain::entities::{Click, Link, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// A link together with its entire click history.
#[derive(Debug, Clone)]
pub struct LinkWithClicks {
    pub link: Link,
    pub clicks: Vec<Click>,
}

/// Append-only storage for clicks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// `link_id` that does not reference an existing link.
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Loads a link by short code with all of its clicks, in no particular order.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkWithClicks))` if the link exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_link_with_clicks(
        &self,
        short_code: &str,
    ) -> Result<Option<LinkWithClicks>, AppError>;
}
