//! Achievements module - domain models, services, and traits.

mod achievements_model;
mod achievements_service;
mod achievements_traits;


pub use achievements_model::{Achievement, NewAchievement};
pub use achievements_service::AchievementService;
pub use achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
