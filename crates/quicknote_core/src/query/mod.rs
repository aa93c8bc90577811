//! Displayed-list derivation.
//!
//! # Responsibility
//! - Turn the store's notes plus user criteria into the displayed order.
//! - Stay stateless with respect to the store; recompute on every change.
//!
//! # See also
//! - `crate::search` for the ranking strategy seam.

pub mod filter;
pub mod pipeline;
pub mod sort;
