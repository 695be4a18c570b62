//! Membership domain
//!
//! The rule engine for the join workflow and the closed outcome types
//! shared with the coordinator.

mod decision;

pub use decision::{decide, JoinDecision, JoinResult};
