use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::goals::goals_errors::{GoalError, Result};
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::schema::goals;
use crate::schema::goals::dsl::*;

pub struct GoalRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl GoalRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        GoalRepository { pool }
    }

    pub fn load_goals_for_user(&self, goal_user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;
        Ok(goals
            .filter(user_id.eq(goal_user_id))
            .order(created_at.asc())
            .load::<Goal>(&mut conn)?)
    }

    pub fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;
        goals.find(goal_id).first::<Goal>(&mut conn).map_err(|e| match e {
            diesel::result::Error::NotFound => {
                GoalError::NotFound(format!("Goal with id {} not found", goal_id))
            }
            _ => GoalError::DatabaseError(e.to_string()),
        })
    }

    pub fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;
        self.insert_new_goal_in_transaction(&mut conn, new_goal)
    }

    pub fn insert_new_goal_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        mut new_goal: NewGoal,
    ) -> Result<Goal> {
        new_goal.validate()?;

        new_goal.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(goals::table)
            .values(&new_goal)
            .returning(goals::all_columns)
            .get_result(conn)?)
    }

    pub fn update_goal(&self, mut goal_update: Goal) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;
        let goal_id = goal_update.id.clone();

        goal_update.updated_at = chrono::Utc::now().naive_utc();

        diesel::update(goals.find(&goal_id))
            .set(&goal_update)
            .execute(&mut conn)?;

        Ok(goals.find(&goal_id).first(&mut conn)?)
    }

    pub fn delete_goal(&self, goal_id_to_delete: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;
        Ok(diesel::delete(goals.find(goal_id_to_delete)).execute(&mut conn)?)
    }

    pub fn get_by_id_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        goal_id: &str,
    ) -> Result<Goal> {
        goals.find(goal_id).first::<Goal>(conn).map_err(|e| match e {
            diesel::result::Error::NotFound => {
                GoalError::NotFound(format!("Goal with id {} not found", goal_id))
            }
            _ => GoalError::DatabaseError(e.to_string()),
        })
    }

    pub fn apply_contribution_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        goal_id: &str,
        amount: f64,
    ) -> Result<Goal> {
        let goal: Goal = goals.find(goal_id).first(conn).map_err(|e| match e {
            diesel::result::Error::NotFound => {
                GoalError::NotFound(format!("Goal with id {} not found", goal_id))
            }
            _ => GoalError::DatabaseError(e.to_string()),
        })?;

        let new_total = goal.current_amount + amount;
        let achieved = goal.is_achieved || new_total >= goal.target_amount;

        diesel::update(goals.find(goal_id))
            .set((
                current_amount.eq(new_total),
                is_achieved.eq(achieved),
                updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(conn)?;

        Ok(goals.find(goal_id).first(conn)?)
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn load_goals_for_user(&self, goal_user_id: &str) -> Result<Vec<Goal>> {
        GoalRepository::load_goals_for_user(self, goal_user_id)
    }

    fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        GoalRepository::get_by_id(self, goal_id)
    }

    fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        GoalRepository::insert_new_goal(self, new_goal)
    }

    fn insert_new_goal_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        new_goal: NewGoal,
    ) -> Result<Goal> {
        GoalRepository::insert_new_goal_in_transaction(self, conn, new_goal)
    }

    fn update_goal(&self, goal_update: Goal) -> Result<Goal> {
        GoalRepository::update_goal(self, goal_update)
    }

    fn delete_goal(&self, goal_id_to_delete: &str) -> Result<usize> {
        GoalRepository::delete_goal(self, goal_id_to_delete)
    }

    fn apply_contribution_in_transaction(
        &self,
        conn: &mut SqliteConnection,
        goal_id: &str,
        amount: f64,
    ) -> Result<Goal> {
        GoalRepository::apply_contribution_in_transaction(self, conn, goal_id, amount)
    }
}
