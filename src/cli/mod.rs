//! Terminal front-end: renders the budget and wishlist plan.

pub mod budget;
pub mod evaluate;
pub mod plan;
pub mod setup;
pub mod ui;
