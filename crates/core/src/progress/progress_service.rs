use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::engine::{
    build_burnup, build_goal_progress, build_matrix, build_overview, build_race_board,
};
use super::progress_model::{
    BurnupChart, GoalMatrix, GoalProgress, MatrixRow, Overview, Period, RaceFilter, RaceStanding,
};
use crate::errors::{DatabaseError, Result};
use crate::users::UserRepositoryTrait;

/// Trait for progress view operations.
pub trait ProgressServiceTrait: Send + Sync {
    fn race_board(&self, period: Period, filter: &RaceFilter) -> Result<Vec<RaceStanding>>;
    fn burnup(&self, exercise: &str, viewer: Option<&str>) -> Result<BurnupChart>;
    fn matrix(&self) -> Result<Vec<MatrixRow>>;
    fn goal_matrix(&self, name: &str) -> Result<Vec<GoalMatrix>>;
    fn overview(&self, period: Period) -> Result<Overview>;
    fn goal_progress(&self, name: &str, period: Period) -> Result<Vec<GoalProgress>>;
}

/// Loads the user snapshot and evaluates the pure progress engine on it,
/// pinning `now` to the server's local date.
pub struct ProgressService {
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl ProgressService {
    pub fn new(user_repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { user_repository }
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl ProgressServiceTrait for ProgressService {
    fn race_board(&self, period: Period, filter: &RaceFilter) -> Result<Vec<RaceStanding>> {
        let stats = self.user_repository.load_stats()?;
        Ok(build_race_board(&stats, period, self.today(), filter))
    }

    fn burnup(&self, exercise: &str, viewer: Option<&str>) -> Result<BurnupChart> {
        let stats = self.user_repository.load_stats()?;
        Ok(build_burnup(&stats, exercise, viewer, self.today()))
    }

    fn matrix(&self) -> Result<Vec<MatrixRow>> {
        let stats = self.user_repository.load_stats()?;
        Ok(build_matrix(&stats, self.today()))
    }

    fn goal_matrix(&self, name: &str) -> Result<Vec<GoalMatrix>> {
        let matrix = self.matrix()?;
        matrix
            .into_iter()
            .find(|row| row.name == name)
            .map(|row| row.goals)
            .ok_or_else(|| {
                DatabaseError::NotFound(format!("User not found: {name}")).into()
            })
    }

    fn overview(&self, period: Period) -> Result<Overview> {
        let stats = self.user_repository.load_stats()?;
        Ok(build_overview(&stats, period, self.today()))
    }

    fn goal_progress(&self, name: &str, period: Period) -> Result<Vec<GoalProgress>> {
        let stats = self.user_repository.load_stats()?;
        let user = stats
            .iter()
            .find(|u| u.name == name)
            .ok_or_else(|| DatabaseError::NotFound(format!("User not found: {name}")))?;
        Ok(build_goal_progress(user, period, self.today()))
    }
}
