//! Domain primitives shared by the storefront crates.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these types.

pub mod error;
pub mod product;
pub mod types;
