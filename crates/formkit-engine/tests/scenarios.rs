//! End-to-end behavior of the visibility, gate and pagination pieces.

use formkit_engine::{
    FormBuilder, Navigation, PaginationPlan, SessionState, SubmissionId, SubmissionSession,
    can_advance, is_visible,
};
use formkit_model::{
    ConditionalRule, Field, FieldId, FieldOption, FieldType, FormDefinition, FormSettings,
    Operator, PaginationMode, ValueMap,
};
use serde_json::{Value, json};

fn id(value: &str) -> FieldId {
    FieldId::new(value).expect("field id")
}

/// A(text, required), B(select yes/no, required), C(text, shown when B = "yes").
fn abc_fields() -> Vec<Field> {
    vec![
        Field::from_type_defaults(id("A"), FieldType::Text, 0).with_required(true),
        Field::from_type_defaults(id("B"), FieldType::Select, 1)
            .with_required(true)
            .with_options(vec![
                FieldOption::new("Yes", "yes"),
                FieldOption::new("No", "no"),
            ]),
        Field::from_type_defaults(id("C"), FieldType::Text, 2).with_conditional(
            ConditionalRule::new(id("B"), Operator::Equals, "yes"),
        ),
    ]
}

fn values(entries: &[(&str, Value)]) -> ValueMap {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[test]
fn empty_values_hide_dependent_and_block() {
    let fields = abc_fields();
    let values = ValueMap::new();
    assert!(is_visible(&fields[0], &values));
    assert!(is_visible(&fields[1], &values));
    assert!(!is_visible(&fields[2], &values));

    let plan = PaginationPlan::build(&fields, PaginationMode::SinglePage);
    assert!(!can_advance(&plan.pages()[0], &values));
}

#[test]
fn satisfied_condition_shows_optional_field_without_blocking() {
    let fields = abc_fields();
    let values = values(&[("A", json!("hello")), ("B", json!("yes"))]);
    assert!(is_visible(&fields[2], &values));

    let plan = PaginationPlan::build(&fields, PaginationMode::SinglePage);
    assert!(can_advance(&plan.pages()[0], &values));
}

#[test]
fn unsatisfied_condition_keeps_field_hidden() {
    let fields = abc_fields();
    let values = values(&[("A", json!("hello")), ("B", json!("no"))]);
    assert!(!is_visible(&fields[2], &values));

    let plan = PaginationPlan::build(&fields, PaginationMode::SinglePage);
    assert!(can_advance(&plan.pages()[0], &values));
}

#[test]
fn hidden_required_field_does_not_block() {
    let mut fields = abc_fields();
    fields[2].required = true;
    let values = values(&[("A", json!("hello")), ("B", json!("no"))]);
    let plan = PaginationPlan::build(&fields, PaginationMode::SinglePage);
    assert!(can_advance(&plan.pages()[0], &values));

    let shown = self::values(&[("A", json!("hello")), ("B", json!("yes"))]);
    assert!(!can_advance(&plan.pages()[0], &shown));
}

#[test]
fn answering_optional_controller_can_close_the_gate() {
    let fields = vec![
        Field::from_type_defaults(id("plan"), FieldType::Radio, 0).with_options(vec![
            FieldOption::new("Solo", "solo"),
            FieldOption::new("Team", "team"),
        ]),
        Field::from_type_defaults(id("seats"), FieldType::Number, 1)
            .with_required(true)
            .with_conditional(ConditionalRule::new(id("plan"), Operator::Equals, "team")),
    ];
    let plan = PaginationPlan::build(&fields, PaginationMode::SinglePage);
    let page = &plan.pages()[0];

    assert!(can_advance(page, &ValueMap::new()));
    let answered = values(&[("plan", json!("team"))]);
    assert!(!can_advance(page, &answered));

    let complete = values(&[("plan", json!("team")), ("seats", json!(3))]);
    assert!(can_advance(page, &complete));
}

#[test]
fn fail_closed_even_for_not_equals() {
    let field = Field::from_type_defaults(id("X"), FieldType::Text, 0).with_conditional(
        ConditionalRule::new(id("missing"), Operator::NotEquals, "anything"),
    );
    assert!(!is_visible(&field, &ValueMap::new()));
    assert!(is_visible(&field, &values(&[("missing", json!("other"))])));
}

#[test]
fn numeric_and_contains_operators() {
    let over = Field::from_type_defaults(id("over"), FieldType::Text, 0)
        .with_conditional(ConditionalRule::new(id("age"), Operator::GreaterThan, 17));
    let under = Field::from_type_defaults(id("under"), FieldType::Text, 1)
        .with_conditional(ConditionalRule::new(id("age"), Operator::LessThan, json!("18")));
    let picked = Field::from_type_defaults(id("picked"), FieldType::Text, 2)
        .with_conditional(ConditionalRule::new(id("tags"), Operator::Contains, "vip"));

    let adult = values(&[("age", json!(30)), ("tags", json!(["new", "vip"]))]);
    assert!(is_visible(&over, &adult));
    assert!(!is_visible(&under, &adult));
    assert!(is_visible(&picked, &adult));

    let minor = values(&[("age", json!("12")), ("tags", json!([]))]);
    assert!(!is_visible(&over, &minor));
    assert!(is_visible(&under, &minor));
    assert!(!is_visible(&picked, &minor));
}

#[test]
fn nine_fields_make_three_pages() {
    let mut builder = FormBuilder::new();
    for _ in 0..9 {
        builder.add(FieldType::Text);
    }
    let plan = PaginationPlan::build(builder.fields(), PaginationMode::MultiPage);
    assert_eq!(plan.total_pages(), 3);
    let orders: Vec<Vec<usize>> = plan
        .pages()
        .iter()
        .map(|page| page.fields.iter().map(|field| field.order).collect())
        .collect();
    assert_eq!(orders, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8]]);
    assert!((plan.progress_fraction(0) - 1.0 / 3.0).abs() < f64::EPSILON);
    assert_eq!(plan.progress_fraction(2), 1.0);
}

#[test]
fn single_page_mode_keeps_everything_together() {
    let mut builder = FormBuilder::new();
    for _ in 0..9 {
        builder.add(FieldType::Email);
    }
    let plan = PaginationPlan::build(builder.fields(), PaginationMode::SinglePage);
    assert_eq!(plan.total_pages(), 1);
    assert_eq!(plan.pages()[0].fields.len(), 9);
}

#[test]
fn reorder_last_to_front() {
    let mut builder = FormBuilder::new();
    for name in ["X", "Y", "Z"] {
        builder
            .insert(Field::from_type_defaults(id(name), FieldType::Text, 0))
            .expect("insert");
    }
    builder.reorder("Z", 0).expect("reorder");
    let sequence: Vec<(&str, usize)> = builder
        .sorted()
        .into_iter()
        .map(|field| (field.id.as_str(), field.order))
        .collect();
    assert_eq!(sequence, vec![("Z", 0), ("X", 1), ("Y", 2)]);
}

#[test]
fn full_traversal_reaches_submitted() {
    let fields: Vec<Field> = (0..9)
        .map(|n| {
            Field::from_type_defaults(id(&format!("f{n}")), FieldType::Text, n).with_required(true)
        })
        .collect();
    let form = FormDefinition::new("survey", "Survey")
        .with_fields(fields)
        .with_settings(FormSettings {
            multi_page: true,
            ..FormSettings::default()
        });

    let mut session = SubmissionSession::start(&form);
    for page in 0..3 {
        assert_eq!(session.state(), &SessionState::ViewingPage(page));
        let current = session.current_page().expect("page");
        let keys: Vec<String> = current.fields.iter().map(|f| f.id.to_string()).collect();
        for key in keys {
            session.set_value(key, json!("answer")).expect("set");
        }
        let navigation = session.next().expect("next");
        if page < 2 {
            assert_eq!(
                navigation,
                Navigation::Moved {
                    from: page,
                    to: page + 1
                }
            );
        } else {
            assert_eq!(navigation, Navigation::Submitting);
        }
    }
    assert_eq!(session.state(), &SessionState::Submitting);
    session
        .complete_submission(SubmissionId::new("sub-1"))
        .expect("complete");
    assert_eq!(
        session.state(),
        &SessionState::Submitted(SubmissionId::new("sub-1"))
    );
    assert!(session.state().is_terminal());
}
