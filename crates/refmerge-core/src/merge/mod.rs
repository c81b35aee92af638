//! Layered merge of reference streams into a record store.
//!
//! # State transitions
//!
//! | Cache lookup | Deleted | Layer | Effect |
//! |---|---|---|---|
//! | miss | yes | any | diagnostic, skip |
//! | hit, `BaseOnly` | yes | any | record and cache entry removed |
//! | hit, other state | yes | any | state becomes `Deleted` |
//! | miss | no | foundational | new `BaseOnly` record |
//! | miss | no | override | new `ModifiedOnly` record |
//! | hit | no | foundational | base slot overwritten, `Deleted` stays `Deleted` |
//! | hit | no | override | modified slot overwritten, state `Modified` |
//!
//! A foundational load never demotes a record that an override already
//! touched: `ModifiedOnly` becomes `Modified` and `Modified`/`Deleted` keep
//! their state.

pub mod report;
pub mod session;

pub use report::{LoadReport, Outcome};
pub use session::MergeSession;
