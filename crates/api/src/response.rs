//! Shared response envelope for dashboard views.
//!
//! Every view uses a `{ "data": ..., "notices": [...] }` envelope. Use
//! [`Page`] (via [`crate::flash::Flash::page`]) instead of ad-hoc
//! `serde_json::json!` bodies so the shape stays consistent.

use coop_core::notice::RenderedNotice;
use serde::Serialize;

/// A rendered view: the page payload plus the notices pending for this
/// browser.
///
/// # Example
///
/// ```ignore
/// Ok(flash.page(StudentDashboard { .. }))
/// ```
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub data: T,
    pub notices: Vec<RenderedNotice>,
}
