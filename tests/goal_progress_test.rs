use std::sync::Arc;

use diesel::sqlite::SqliteConnection;
use sprout_core::contributions::{
	ContributionRepository, ContributionRepositoryTrait, ContributionService,
	ContributionServiceTrait, NewContribution, SOURCE_MEMBER,
};
use sprout_core::errors::Error;
use sprout_core::goals::{GoalRepository, GoalService, GoalServiceTrait, NewGoal};
use sprout_core::milestones::{
	Milestone, MilestoneError, MilestoneRepository, MilestoneRepositoryTrait, MilestoneService,
};
use sprout_core::notifications::{
	NotificationRepository, NotificationService, NotificationServiceTrait,
};
use sprout_core::plant::PlantStage;
use sprout_core::users::{NewUser, UserService, ROLE_PARENT};

mod common;

fn member_contribution(goal_id: &str, user_id: &str, amount: f64) -> NewContribution {
	NewContribution {
		id: None,
		goal_id: goal_id.to_string(),
		contributor_user_id: Some(user_id.to_string()),
		contributor_name: None,
		amount,
		note: None,
		source: SOURCE_MEMBER.to_string(),
	}
}

#[test]
fn test_contributions_grow_the_plant() {
	let data_dir = common::get_test_db_path("goal-progress");
	let pool = common::get_db_pool(&data_dir);

	let user_service = UserService::new(pool.clone());
	let parent = user_service
		.create_user(NewUser {
			id: None,
			name: "Dana".to_string(),
			email: Some("dana@example.com".to_string()),
			role: ROLE_PARENT.to_string(),
			parent_id: None,
			is_active: true,
		})
		.unwrap();

	let goal_service = GoalService::new(
		pool.clone(),
		Arc::new(GoalRepository::new(pool.clone())),
		Arc::new(MilestoneRepository::new(pool.clone())),
	);

	let goal = tokio_test::block_on(goal_service.create_goal(NewGoal {
		id: None,
		user_id: parent.id.clone(),
		name: "New bike".to_string(),
		description: None,
		target_amount: 200.0,
		plant_type: "rose".to_string(),
	}))
	.unwrap();

	// Fresh goal: a seed in an empty pot
	let progress = goal_service.get_progress(&goal.id).unwrap();
	assert_eq!(progress.percentage, 0.0);
	assert_eq!(progress.visual.stage, PlantStage::Seed);
	assert_eq!(progress.visual.leaf_count, 0);
	assert_eq!(progress.visual.plant_height, 5.0);

	// Reward checkpoints are seeded with the goal
	let milestone_service = MilestoneService::new(pool.clone());
	let milestones = milestone_service.get_milestones(&goal.id).unwrap();
	assert_eq!(milestones.len(), 4);
	assert!(milestones.iter().all(|m| !m.is_achieved()));

	let contribution_service = ContributionService::new(pool.clone());

	// 30 of 200: 15%, a sprout, nothing awarded yet
	let outcome = tokio_test::block_on(contribution_service
		.record_contribution(member_contribution(&goal.id, &parent.id, 30.0)))
	.unwrap();
	assert_eq!(outcome.goal.current_amount, 30.0);
	assert!((outcome.percentage - 15.0).abs() < 1e-9);
	assert!(outcome.awarded_milestones.is_empty());
	assert!(!outcome.goal_newly_achieved);
	assert_eq!(
		goal_service.get_progress(&goal.id).unwrap().visual.stage,
		PlantStage::Sprout
	);

	// Jumping to 55% crosses the 25% and 50% checkpoints in one go
	let outcome = tokio_test::block_on(contribution_service
		.record_contribution(member_contribution(&goal.id, &parent.id, 80.0)))
	.unwrap();
	assert!((outcome.percentage - 55.0).abs() < 1e-9);
	assert_eq!(outcome.awarded_milestones.len(), 2);
	assert_eq!(outcome.awarded_milestones[0].percentage, 25.0);
	assert_eq!(outcome.awarded_milestones[1].percentage, 50.0);
	assert_eq!(
		goal_service.get_progress(&goal.id).unwrap().visual.stage,
		PlantStage::Medium
	);

	// A small top-up awards nothing new
	let outcome = tokio_test::block_on(contribution_service
		.record_contribution(member_contribution(&goal.id, &parent.id, 10.0)))
	.unwrap();
	assert!(outcome.awarded_milestones.is_empty());

	// Over-funding the goal: 110%, fruiting, goal flips to achieved
	let outcome = tokio_test::block_on(contribution_service
		.record_contribution(member_contribution(&goal.id, &parent.id, 100.0)))
	.unwrap();
	assert!((outcome.percentage - 110.0).abs() < 1e-9);
	assert_eq!(outcome.awarded_milestones.len(), 2);
	assert!(outcome.goal_newly_achieved);
	assert!(outcome.goal.is_achieved);

	let progress = goal_service.get_progress(&goal.id).unwrap();
	assert_eq!(progress.visual.stage, PlantStage::Fruiting);
	assert!(progress.visual.has_fruit);
	assert_eq!(progress.visual.petal_count, 8);

	let milestones = milestone_service.get_milestones(&goal.id).unwrap();
	assert!(milestones.iter().all(|m| m.is_achieved()));

	// The goal's running total is exactly the sum of its contributions
	let contribution_repo = ContributionRepository::new(pool.clone());
	let total = contribution_repo.total_for_goal(&goal.id).unwrap();
	assert!((total - 220.0).abs() < 1e-9);
	let goal = goal_service.get_goal(&goal.id).unwrap();
	assert!((goal.current_amount - total).abs() < 1e-9);

	// The owner heard about all of it: 4 contributions, 4 milestones,
	// 1 goal-achieved
	let notification_service =
		NotificationService::new(Arc::new(NotificationRepository::new(pool.clone())));
	let all = notification_service.get_notifications(&parent.id).unwrap();
	assert_eq!(all.len(), 9);
}

#[test]
fn test_goal_validation() {
	let data_dir = common::get_test_db_path("goal-validation");
	let pool = common::get_db_pool(&data_dir);

	let user_service = UserService::new(pool.clone());
	let parent = user_service
		.create_user(NewUser {
			id: None,
			name: "Sam".to_string(),
			email: Some("sam@example.com".to_string()),
			role: ROLE_PARENT.to_string(),
			parent_id: None,
			is_active: true,
		})
		.unwrap();

	let goal_service = GoalService::new(
		pool.clone(),
		Arc::new(GoalRepository::new(pool.clone())),
		Arc::new(MilestoneRepository::new(pool.clone())),
	);

	let result = tokio_test::block_on(goal_service.create_goal(NewGoal {
		id: None,
		user_id: parent.id.clone(),
		name: "  ".to_string(),
		description: None,
		target_amount: 100.0,
		plant_type: "sunflower".to_string(),
	}));
	assert!(result.is_err());

	let result = tokio_test::block_on(goal_service.create_goal(NewGoal {
		id: None,
		user_id: parent.id,
		name: "Telescope".to_string(),
		description: None,
		target_amount: 0.0,
		plant_type: "sunflower".to_string(),
	}));
	assert!(result.is_err());
}

struct FailingMilestoneRepository;

impl MilestoneRepositoryTrait for FailingMilestoneRepository {
	fn seed_for_goal(&self, _goal_id: &str) -> sprout_core::milestones::Result<Vec<Milestone>> {
		Err(MilestoneError::DatabaseError(
			"milestone table unavailable".to_string(),
		))
	}

	fn seed_in_transaction(
		&self,
		_conn: &mut SqliteConnection,
		_goal_id: &str,
	) -> sprout_core::milestones::Result<Vec<Milestone>> {
		Err(MilestoneError::DatabaseError(
			"milestone table unavailable".to_string(),
		))
	}

	fn list_for_goal(&self, _goal_id: &str) -> sprout_core::milestones::Result<Vec<Milestone>> {
		Ok(vec![])
	}

	fn award_up_to_in_transaction(
		&self,
		_conn: &mut SqliteConnection,
		_goal_id: &str,
		_percentage: f64,
	) -> sprout_core::milestones::Result<Vec<Milestone>> {
		Ok(vec![])
	}
}

#[test]
fn test_goal_creation_rolls_back_when_seeding_fails() {
	let data_dir = common::get_test_db_path("goal-seed-rollback");
	let pool = common::get_db_pool(&data_dir);

	let user_service = UserService::new(pool.clone());
	let parent = user_service
		.create_user(NewUser {
			id: None,
			name: "Jo".to_string(),
			email: Some("jo@example.com".to_string()),
			role: ROLE_PARENT.to_string(),
			parent_id: None,
			is_active: true,
		})
		.unwrap();

	let goal_repo = Arc::new(GoalRepository::new(pool.clone()));
	let goal_service = GoalService::new(
		pool.clone(),
		goal_repo.clone(),
		Arc::new(FailingMilestoneRepository),
	);

	let err = tokio_test::block_on(goal_service.create_goal(NewGoal {
		id: None,
		user_id: parent.id.clone(),
		name: "Skateboard".to_string(),
		description: None,
		target_amount: 120.0,
		plant_type: "rose".to_string(),
	}))
	.unwrap_err();
	assert!(matches!(err, Error::Milestone(_)));

	// The goal insert rolled back along with the failed checkpoint seeding
	assert!(goal_repo.load_goals_for_user(&parent.id).unwrap().is_empty());
}
