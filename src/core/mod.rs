//! Core planning logic: wishlist items, the allocation engine and the
//! figures it is fed with.

pub mod allocation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod log;
pub mod planner;
pub mod safety;
pub mod wishlist;

// Re-export main types for cleaner imports
pub use allocation::{AllocationResult, AllocationStatus, evaluate, evaluate_item};
pub use error::InputError;
pub use wishlist::{AllocationMode, ItemId, Priority, WishlistItem};
