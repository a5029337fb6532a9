//! SQLite storage models for goals.
//!
//! Goal rows are written and read through `UserRepository`; this module
//! only contributes the table models.

mod model;

pub use model::{GoalDB, NewGoalDB};
