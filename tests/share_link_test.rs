use std::sync::Arc;

use sprout_core::contributions::{ContributionService, ContributionServiceTrait, SOURCE_LINK};
use sprout_core::errors::Error;
use sprout_core::goals::{GoalRepository, GoalService, GoalServiceTrait, NewGoal};
use sprout_core::links::{LinkError, NewShareLink, ShareLinkRepository, ShareLinkService};
use sprout_core::milestones::MilestoneRepository;
use sprout_core::users::{NewUser, UserService, ROLE_PARENT};

mod common;

async fn setup_goal(pool: &Arc<sprout_core::db::DbPool>) -> sprout_core::goals::Goal {
	let user_service = UserService::new(pool.clone());
	let parent = user_service
		.create_user(NewUser {
			id: None,
			name: "Riley".to_string(),
			email: Some("riley@example.com".to_string()),
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

	goal_service
		.create_goal(NewGoal {
			id: None,
			user_id: parent.id,
			name: "Camping trip".to_string(),
			description: None,
			target_amount: 100.0,
			plant_type: "daisy".to_string(),
		})
		.await
		.unwrap()
}

#[test]
fn test_link_contribution_lifecycle() {
	let data_dir = common::get_test_db_path("share-link");
	let pool = common::get_db_pool(&data_dir);
	let goal = tokio_test::block_on(setup_goal(&pool));

	let link_service = ShareLinkService::new(pool.clone());
	let link = link_service
		.create_link(NewShareLink {
			goal_id: goal.id.clone(),
			expires_at: None,
			max_uses: Some(1),
		})
		.unwrap();
	assert_eq!(link.use_count, 0);
	assert!(!link.is_revoked);

	// Resolving never consumes a use
	let resolved = link_service.resolve(&link.token).unwrap();
	assert_eq!(resolved.id, link.id);
	assert_eq!(link_service.resolve(&link.token).unwrap().use_count, 0);

	let contribution_service = ContributionService::new(pool.clone());
	let outcome = tokio_test::block_on(contribution_service.record_link_contribution(
		&link.token,
		"Grandma".to_string(),
		40.0,
		Some("For the tent".to_string()),
	))
	.unwrap();

	assert_eq!(outcome.contribution.source, SOURCE_LINK);
	assert_eq!(outcome.contribution.contributor_name.as_deref(), Some("Grandma"));
	assert_eq!(outcome.goal.current_amount, 40.0);

	// The single allowed use is spent now
	let links = link_service.get_links(&goal.id).unwrap();
	assert_eq!(links.len(), 1);
	assert_eq!(links[0].use_count, 1);

	let err = tokio_test::block_on(contribution_service.record_link_contribution(
		&link.token,
		"Grandma".to_string(),
		5.0,
		None,
	))
	.unwrap_err();
	assert!(matches!(err, Error::Link(LinkError::Exhausted(_))));
	assert!(matches!(
		link_service.resolve(&link.token),
		Err(LinkError::Exhausted(_))
	));
}

#[test]
fn test_expired_and_revoked_links_are_rejected() {
	let data_dir = common::get_test_db_path("link-rejection");
	let pool = common::get_db_pool(&data_dir);
	let goal = tokio_test::block_on(setup_goal(&pool));

	let link_service = ShareLinkService::new(pool.clone());

	let expired = link_service
		.create_link(NewShareLink {
			goal_id: goal.id.clone(),
			expires_at: Some(chrono::Utc::now().naive_utc() - chrono::Duration::hours(1)),
			max_uses: None,
		})
		.unwrap();
	assert!(matches!(
		link_service.resolve(&expired.token),
		Err(LinkError::Expired(_))
	));

	let revoked = link_service
		.create_link(NewShareLink {
			goal_id: goal.id.clone(),
			expires_at: None,
			max_uses: None,
		})
		.unwrap();
	link_service.revoke_link(&revoked.id).unwrap();
	assert!(matches!(
		link_service.resolve(&revoked.token),
		Err(LinkError::Revoked(_))
	));

	assert!(matches!(
		link_service.resolve("no-such-token"),
		Err(LinkError::NotFound(_))
	));
}

#[test]
fn test_use_counter_never_exceeds_max_uses() {
	let data_dir = common::get_test_db_path("link-use-counter");
	let pool = common::get_db_pool(&data_dir);
	let goal = tokio_test::block_on(setup_goal(&pool));

	let link_repo = ShareLinkRepository::new(pool.clone());
	let link = link_repo
		.create(NewShareLink {
			goal_id: goal.id.clone(),
			expires_at: None,
			max_uses: Some(1),
		})
		.unwrap();

	let mut conn = pool.get().unwrap();
	link_repo.record_use_in_transaction(&mut conn, &link.id).unwrap();

	// The guarded update refuses to move the counter past max_uses
	let err = link_repo
		.record_use_in_transaction(&mut conn, &link.id)
		.unwrap_err();
	assert!(matches!(err, LinkError::Exhausted(_)));
	assert_eq!(link_repo.find_by_token(&link.token).unwrap().use_count, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_link_uses_cannot_exceed_max() {
	let data_dir = common::get_test_db_path("link-concurrent-use");
	let pool = common::get_db_pool(&data_dir);
	let goal = setup_goal(&pool).await;

	let link_service = ShareLinkService::new(pool.clone());
	let link = link_service
		.create_link(NewShareLink {
			goal_id: goal.id.clone(),
			expires_at: None,
			max_uses: Some(1),
		})
		.unwrap();

	let contribution_service = Arc::new(ContributionService::new(pool.clone()));

	let first = {
		let service = contribution_service.clone();
		let token = link.token.clone();
		tokio::spawn(async move {
			service
				.record_link_contribution(&token, "Aunt May".to_string(), 40.0, None)
				.await
		})
	};
	let second = {
		let service = contribution_service.clone();
		let token = link.token.clone();
		tokio::spawn(async move {
			service
				.record_link_contribution(&token, "Uncle Ben".to_string(), 40.0, None)
				.await
		})
	};

	let outcomes = [first.await.unwrap(), second.await.unwrap()];
	let successes = outcomes.iter().filter(|o| o.is_ok()).count();

	// Exactly one of the racing contributions lands; the counter never
	// overshoots and only the winning contribution is recorded.
	assert_eq!(successes, 1);
	let links = link_service.get_links(&goal.id).unwrap();
	assert_eq!(links[0].use_count, 1);
	assert_eq!(
		contribution_service.get_contributions(&goal.id).unwrap().len(),
		1
	);
}
