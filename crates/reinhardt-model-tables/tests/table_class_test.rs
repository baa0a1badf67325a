use reinhardt_model_tables::{
	Action, ActionClass, ActionKind, BrowserContext, Column, TableClass, TableError, TableOptions,
};
use rstest::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn column_names(class: &TableClass) -> Vec<&str> {
	class.columns().keys().map(String::as_str).collect()
}

#[derive(Debug)]
struct DeleteAction;

impl Action for DeleteAction {
	fn name(&self) -> &str {
		"delete"
	}

	fn verbose_name(&self) -> &str {
		"Delete"
	}

	fn kind(&self) -> ActionKind {
		ActionKind::Row
	}
}

#[rstest]
fn test_columns_follow_creation_order() {
	let b = Column::new("b");
	let a = Column::new("a");
	let class = TableClass::builder("T")
		.column("a", a)
		.column("b", b)
		.build()
		.unwrap();

	assert_eq!(column_names(&class), vec!["b", "a"]);
}

#[rstest]
fn test_allow_list_filters_and_reorders() {
	let class = TableClass::builder("T")
		.options(TableOptions::new().columns(["c", "a"]))
		.column("a", Column::new("a"))
		.column("b", Column::new("b"))
		.column("c", Column::new("c"))
		.build()
		.unwrap();

	assert_eq!(column_names(&class), vec!["c", "a"]);
	// The allow-list does not touch the declared set
	assert_eq!(class.base_columns().len(), 3);
}

#[rstest]
#[case(BrowserContext::Navigation, 4, false)]
#[case(BrowserContext::Navigation, 3, true)]
#[case(BrowserContext::Content, 3, false)]
#[case(BrowserContext::Content, 2, true)]
fn test_browser_column_limits(
	#[case] context: BrowserContext,
	#[case] declared: usize,
	#[case] accepted: bool,
) {
	let builder = (0..declared).fold(
		TableClass::builder("BrowserTable").options(TableOptions::new().browser_table(context)),
		|builder, i| builder.column(format!("col{i}"), Column::new(format!("col{i}"))),
	);
	let result = builder.build();

	assert_eq!(result.is_ok(), accepted);
	if let Err(err) = result {
		assert!(err.is_configuration());
		assert!(matches!(
			err,
			TableError::TooManyColumns { max, found, .. } if max == context.max_columns() && found == declared
		));
	}
}

#[rstest]
fn test_navigation_table_has_no_multi_select() {
	let class = TableClass::builder("Nav")
		.options(
			TableOptions::new()
				.browser_table(BrowserContext::Navigation)
				.table_action(ActionClass::filter("filter")),
		)
		.column("name", Column::new("name"))
		.build()
		.unwrap();

	assert_eq!(column_names(&class), vec!["name"]);
}

#[rstest]
fn test_auto_columns_wrap_declared_ones() {
	let class = TableClass::builder("T")
		.options(
			TableOptions::new()
				.table_action(ActionClass::filter("filter"))
				.row_action(ActionClass::new("delete", ActionKind::Row, || -> Arc<dyn Action> {
					Arc::new(DeleteAction)
				})),
		)
		.column("name", Column::new("name"))
		.build()
		.unwrap();

	assert_eq!(column_names(&class), vec!["multi_select", "name", "actions"]);
	assert_eq!(class.columns()["actions"].header(), "Actions");
	assert_eq!(class.columns()["multi_select"].css_classes(), "multi_select_column");
}

#[rstest]
fn test_duplicate_actions_instantiated_once() {
	static CREATED: AtomicUsize = AtomicUsize::new(0);
	let delete = || {
		ActionClass::new("delete", ActionKind::Row, || -> Arc<dyn Action> {
			CREATED.fetch_add(1, Ordering::SeqCst);
			Arc::new(DeleteAction)
		})
	};

	let class = TableClass::builder("T")
		.options(TableOptions::new().row_action(delete()).row_action(delete()))
		.build()
		.unwrap();

	assert_eq!(class.base_actions().len(), 1);
	assert_eq!(class.row_actions().len(), 1);
	assert_eq!(class.row_actions()[0].verbose_name(), "Delete");
	assert_eq!(CREATED.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_actions_sorted_by_name() {
	let class = TableClass::builder("T")
		.options(
			TableOptions::new()
				.table_action(ActionClass::filter("search"))
				.row_action(ActionClass::new("delete", ActionKind::Row, || -> Arc<dyn Action> {
					Arc::new(DeleteAction)
				})),
		)
		.build()
		.unwrap();

	let names: Vec<_> = class.base_actions().keys().map(String::as_str).collect();
	assert_eq!(names, vec!["delete", "search"]);
	assert_eq!(class.filter_action().map(|a| a.name()), Some("search"));
}

#[rstest]
fn test_inheritance_puts_base_columns_first() {
	let base = TableClass::builder("Base")
		.column("id", Column::new("id"))
		.column("created", Column::new("created_at"))
		.table_data(|_| Ok(Vec::new()))
		.build()
		.unwrap();
	let child = TableClass::builder("Child")
		.extends(&base)
		.column("title", Column::new("title"))
		.build()
		.unwrap();

	assert_eq!(column_names(&child), vec!["id", "created", "title"]);
	assert_eq!(child.columns()["created"].transform(), "created_at");
	assert!(format!("{child:?}").contains("table_data: true"));
}

#[rstest]
fn test_table_name_defaults_to_class_name() {
	let plain = TableClass::builder("UserTable").build().unwrap();
	let named = TableClass::builder("UserTable")
		.options(TableOptions::new().name("users").verbose_name("Users"))
		.build()
		.unwrap();

	assert_eq!(plain.table_name(), "UserTable");
	assert_eq!(plain.verbose_name(), "UserTable");
	assert_eq!(named.table_name(), "users");
	assert_eq!(named.verbose_name(), "Users");
}
