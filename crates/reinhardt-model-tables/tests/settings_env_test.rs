use reinhardt_model_tables::TableSettings;
use reinhardt_model_tables::settings::{PAGINATION_COUNT_ENV, PAGINATION_SHOW_ALL_ENV};
use serial_test::serial;
use std::env;

fn clear_env() {
	// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
	// These tests use #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::remove_var(PAGINATION_COUNT_ENV);
		env::remove_var(PAGINATION_SHOW_ALL_ENV);
	}
}

#[test]
#[serial]
fn test_from_env_defaults() {
	clear_env();
	assert_eq!(TableSettings::from_env().unwrap(), TableSettings::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var(PAGINATION_COUNT_ENV, "50");
		env::set_var(PAGINATION_SHOW_ALL_ENV, "false");
	}

	let settings = TableSettings::from_env().unwrap();
	clear_env();

	assert_eq!(settings.pagination_count, 50);
	assert!(!settings.show_all);
}

#[test]
#[serial]
fn test_from_env_rejects_zero() {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var(PAGINATION_COUNT_ENV, "0");
	}

	let result = TableSettings::from_env();
	clear_env();

	assert!(result.is_err());
}
