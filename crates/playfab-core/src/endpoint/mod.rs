//! Endpoint resolution: merge per-call overrides with shared defaults and
//! build fully qualified API URLs.
//!
//! Precedence is applied field by field (first non-empty wins) in
//! [`Endpoint::resolve`], so the rule lives in exactly one unit-testable
//! place. URL construction is a pure string transformation with no I/O;
//! both inputs are immutable borrows, so the defaults cannot change under
//! a resolution in progress.

mod query;
mod resolve;
mod url;

pub use query::QueryParams;
pub use resolve::{Endpoint, DEFAULT_API_HOST};
pub use self::url::resolve_url;
