//! Request/response middleware applied around every route.
//!
//! - [`origin::reject_disallowed_origin`] -- Rejects cross-origin requests from origins outside the allow-list.
//! - [`error_detail::render_error_detail`] -- Fills `detail` in error envelopes outside production.
//! - [`recovery`] -- Renders panics and timeouts as error envelopes.

pub mod error_detail;
pub mod origin;
pub mod recovery;
