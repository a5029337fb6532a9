//! Goals module - domain models.
//!
//! Goals have no repository of their own: they are written through user
//! registration (`UserRepositoryTrait::upsert_with_goals`) and read as part
//! of the user aggregates.

mod goals_model;

pub use goals_model::{Goal, NewGoal};
