use chrono::Local;
use sprout_core::db;
use sprout_core::db::DbPool;
use std::sync::Arc;

pub fn get_test_db_path(test_id: &str) -> String {
	let now = Local::now();

	let formatted_date_path =
		now.format(&format!("./tests/output/%Y%m%d/%H%M%S%f-{}/", test_id)).to_string();

	formatted_date_path
}

pub fn get_db_pool(data_dir: &str) -> Arc<DbPool> {
	let db_path = db::init(data_dir).expect("Failed to initialize database");

	let pool = db::create_pool(&db_path).expect("Failed to create database pool");

	db::run_migrations(&pool).expect("Failed to run migrations");

	pool
}
