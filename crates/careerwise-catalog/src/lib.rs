//! Career catalog: the two read-only datasets and every lookup over them.
//!
//! The catalog is built once at start-up (from the compiled-in JSON or an
//! alternate directory) and shared behind an `Arc` by all actions.

pub mod catalog;
pub mod matchers;
pub mod types;

pub use catalog::Catalog;
pub use matchers::{CareerMatch, CautionMatch, MatchTier, Profile, RiskSummary};
pub use types::*;
