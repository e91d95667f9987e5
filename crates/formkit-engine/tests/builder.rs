//! Field collection editing and definition lint.

use formkit_engine::lint::{
    DUPLICATE_ID, DUPLICATE_OPTION, INVERTED_RANGE, LAYOUT_TARGET, MISSING_TARGET, NO_OPTIONS,
    SELF_TARGET, SPARSE_ORDER,
};
use formkit_engine::{EngineError, FormBuilder, LintOptions, lint};
use formkit_model::{
    ConditionalRule, Field, FieldId, FieldOption, FieldType, IssueSeverity, Operator,
};
use serde_json::json;

fn id(value: &str) -> FieldId {
    FieldId::new(value).expect("field id")
}

fn labels(builder: &FormBuilder) -> Vec<String> {
    builder
        .sorted()
        .into_iter()
        .map(|field| field.label.clone())
        .collect()
}

fn builder_with(names: &[&str]) -> FormBuilder {
    let mut builder = FormBuilder::new();
    for name in names {
        builder
            .insert(Field::from_type_defaults(id(name), FieldType::Text, 0).with_label(*name))
            .expect("insert");
    }
    builder
}

#[test]
fn add_seeds_registry_defaults() {
    let mut builder = FormBuilder::new();
    let rating = builder.add(FieldType::Rating);
    let select = builder.add(FieldType::Select);

    let rating = builder.get(rating.as_str()).expect("rating");
    assert_eq!(rating.order, 0);
    assert_eq!(rating.number_property("maxRating"), Some(5.0));
    assert!(!rating.required);

    let select = builder.get(select.as_str()).expect("select");
    assert_eq!(select.order, 1);
    assert_eq!(select.options().len(), 2);
    assert_eq!(select.options()[0].value, "option_1");
}

#[test]
fn duplicate_appends_copy_with_new_id() {
    let mut builder = builder_with(&["Name", "Email"]);
    builder
        .get_mut("Name")
        .expect("field")
        .properties
        .insert("maxLength".to_string(), json!(40));

    let copy = builder.duplicate("Name").expect("duplicate");
    assert_ne!(copy.as_str(), "Name");
    let copied = builder.get(copy.as_str()).expect("copy");
    assert_eq!(copied.label, "Name (Copy)");
    assert_eq!(copied.order, 2);
    assert_eq!(copied.properties.get("maxLength"), Some(&json!(40)));
    assert!(builder.is_dense());
}

#[test]
fn remove_repacks_orders() {
    let mut builder = builder_with(&["a", "b", "c", "d"]);
    let removed = builder.remove("b").expect("remove");
    assert_eq!(removed.id.as_str(), "b");
    assert_eq!(labels(&builder), vec!["a", "c", "d"]);
    assert!(builder.is_dense());

    assert!(matches!(
        builder.remove("b"),
        Err(EngineError::FieldNotFound { .. })
    ));
}

#[test]
fn reorder_moves_between_positions() {
    let mut builder = builder_with(&["a", "b", "c", "d"]);
    builder.reorder("a", 2).expect("reorder");
    assert_eq!(labels(&builder), vec!["b", "c", "a", "d"]);
    builder.reorder("d", 0).expect("reorder");
    assert_eq!(labels(&builder), vec!["d", "b", "c", "a"]);
    assert!(builder.is_dense());

    assert!(matches!(
        builder.reorder("a", 4),
        Err(EngineError::IndexOutOfRange { index: 4, len: 4 })
    ));
    assert_eq!(labels(&builder), vec!["d", "b", "c", "a"]);
}

#[test]
fn insert_rejects_duplicate_id() {
    let mut builder = builder_with(&["a"]);
    let result = builder.insert(Field::from_type_defaults(id("a"), FieldType::Email, 0));
    assert!(matches!(result, Err(EngineError::DuplicateFieldId { .. })));
    assert_eq!(builder.len(), 1);
}

#[test]
fn loaded_gaps_are_kept_until_repack() {
    let mut builder = FormBuilder::from_fields(vec![
        Field::from_type_defaults(id("late"), FieldType::Text, 7),
        Field::from_type_defaults(id("early"), FieldType::Text, 3),
    ])
    .expect("unique ids");
    assert!(!builder.is_dense());

    let added = builder.add(FieldType::Text);
    assert_eq!(builder.get(added.as_str()).expect("added").order, 8);

    builder.repack();
    let order: Vec<(&str, usize)> = builder
        .sorted()
        .into_iter()
        .map(|field| (field.id.as_str(), field.order))
        .collect();
    assert_eq!(order, vec![("early", 0), ("late", 1), (added.as_str(), 2)]);
}

#[test]
fn option_edits() {
    let mut builder = FormBuilder::new();
    let radio = builder.add(FieldType::Radio);
    builder
        .add_option(radio.as_str(), FieldOption::new("Option 3", "option_3"))
        .expect("add");
    builder.move_option(radio.as_str(), 2, 0).expect("move");
    let values: Vec<&str> = builder
        .get(radio.as_str())
        .expect("radio")
        .options()
        .iter()
        .map(|option| option.value.as_str())
        .collect();
    assert_eq!(values, vec!["option_3", "option_1", "option_2"]);

    let removed = builder.remove_option(radio.as_str(), 1).expect("remove");
    assert_eq!(removed.value, "option_1");

    let text = builder.add(FieldType::Text);
    assert!(matches!(
        builder.add_option(text.as_str(), FieldOption::new("x", "x")),
        Err(EngineError::OptionsNotSupported { .. })
    ));
}

#[test]
fn removed_target_leaves_rule_dangling() {
    let mut builder = FormBuilder::new();
    builder
        .insert(Field::from_type_defaults(id("toggle"), FieldType::Checkbox, 0))
        .expect("insert");
    builder
        .insert(
            Field::from_type_defaults(id("details"), FieldType::Textarea, 0).with_conditional(
                ConditionalRule::new(id("toggle"), Operator::Equals, true),
            ),
        )
        .expect("insert");
    builder.remove("toggle").expect("remove");

    let details = builder.get("details").expect("details");
    assert!(details.conditional.is_some());
    assert_eq!(details.order, 0);

    let report = lint(builder.fields(), &LintOptions::default());
    assert!(report.has_code(MISSING_TARGET));
    assert!(!report.has_errors());
    assert!(lint(builder.fields(), &LintOptions::strict()).has_errors());
}

#[test]
fn lint_reports_definition_problems() {
    let fields = vec![
        Field::from_type_defaults(id("age"), FieldType::Number, 0)
            .with_property("min", json!(10))
            .with_property("max", json!(1)),
        Field::from_type_defaults(id("color"), FieldType::Select, 1).with_options(vec![
            FieldOption::new("Red", "red"),
            FieldOption::new("Also red", "red"),
        ]),
        Field::from_type_defaults(id("pick"), FieldType::Radio, 2).with_options(Vec::new()),
        Field::from_type_defaults(id("loop"), FieldType::Text, 3)
            .with_conditional(ConditionalRule::new(id("loop"), Operator::Equals, "x")),
        Field::from_type_defaults(id("title"), FieldType::Heading, 4),
        Field::from_type_defaults(id("after"), FieldType::Text, 9)
            .with_conditional(ConditionalRule::new(id("title"), Operator::Equals, "x")),
        Field::from_type_defaults(id("age"), FieldType::Text, 5),
    ];

    let report = lint(&fields, &LintOptions::default());
    for code in [
        DUPLICATE_ID,
        DUPLICATE_OPTION,
        INVERTED_RANGE,
        LAYOUT_TARGET,
        NO_OPTIONS,
        SELF_TARGET,
        SPARSE_ORDER,
    ] {
        assert!(report.has_code(code), "missing {code}");
    }
    let range = report
        .issues
        .iter()
        .find(|issue| issue.code == INVERTED_RANGE)
        .expect("range issue");
    assert_eq!(range.severity, IssueSeverity::Warning);

    let strict = lint(&fields, &LintOptions::strict());
    let range = strict
        .issues
        .iter()
        .find(|issue| issue.code == INVERTED_RANGE)
        .expect("range issue");
    assert_eq!(range.severity, IssueSeverity::Error);
}

#[test]
fn clean_definition_has_no_issues() {
    let mut builder = FormBuilder::new();
    for field_type in [FieldType::Text, FieldType::Email, FieldType::Radio] {
        builder.add(field_type);
    }
    let report = lint(builder.fields(), &LintOptions::default());
    assert!(report.issues.is_empty(), "{:?}", report.issues);
}
