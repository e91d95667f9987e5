//! Property tests for collection ordering, pagination and the gate.

use std::collections::BTreeSet;

use formkit_engine::{FormBuilder, PaginationPlan, can_advance, is_visible, reorder};
use formkit_model::{
    ConditionalRule, Field, FieldId, FieldType, Operator, PaginationMode, ValueMap,
};
use proptest::prelude::*;
use proptest::test_runner::Config;
use serde_json::json;

#[derive(Debug, Clone)]
enum Edit {
    Add,
    Duplicate(usize),
    Remove(usize),
    Reorder(usize, usize),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        3 => Just(Edit::Add),
        1 => any::<usize>().prop_map(Edit::Duplicate),
        1 => any::<usize>().prop_map(Edit::Remove),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(from, to)| Edit::Reorder(from, to)),
    ]
}

fn apply(builder: &mut FormBuilder, edit: &Edit) {
    let ids: Vec<String> = builder.sorted().iter().map(|f| f.id.to_string()).collect();
    match edit {
        Edit::Add => {
            builder.add(FieldType::Text);
        }
        Edit::Duplicate(pick) if !ids.is_empty() => {
            builder.duplicate(&ids[pick % ids.len()]).expect("duplicate");
        }
        Edit::Remove(pick) if !ids.is_empty() => {
            builder.remove(&ids[pick % ids.len()]).expect("remove");
        }
        Edit::Reorder(pick, to) if !ids.is_empty() => {
            builder
                .reorder(&ids[pick % ids.len()], to % ids.len())
                .expect("reorder");
        }
        _ => {}
    }
}

fn text_fields(count: usize) -> Vec<Field> {
    (0..count)
        .map(|n| {
            Field::from_type_defaults(
                FieldId::new(format!("f{n}")).expect("id"),
                FieldType::Text,
                n,
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn edits_keep_orders_dense_and_ids_unique(edits in prop::collection::vec(edit(), 0..40)) {
        let mut builder = FormBuilder::new();
        for edit in &edits {
            apply(&mut builder, edit);
        }
        prop_assert!(builder.is_dense());
        let ids: BTreeSet<&str> = builder.fields().iter().map(|f| f.id.as_str()).collect();
        prop_assert_eq!(ids.len(), builder.len());
    }

    #[test]
    fn reorder_is_a_permutation(
        items in prop::collection::vec(any::<u16>(), 1..30),
        from in any::<usize>(),
        to in any::<usize>(),
    ) {
        let from = from % items.len();
        let to = to % items.len();
        let moved = reorder(items.clone(), from, to).expect("in range");
        prop_assert_eq!(moved.len(), items.len());
        prop_assert_eq!(moved[to], items[from]);

        let mut before = items.clone();
        let mut after = moved;
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn pages_cover_every_field_once(count in 0usize..60) {
        let fields = text_fields(count);
        let plan = PaginationPlan::build(&fields, PaginationMode::MultiPage);

        prop_assert_eq!(plan.total_pages(), count.div_ceil(4).max(1));
        let flattened: Vec<usize> = plan
            .pages()
            .iter()
            .flat_map(|page| page.fields.iter().map(|field| field.order))
            .collect();
        prop_assert_eq!(flattened, (0..count).collect::<Vec<_>>());
        for page in plan.pages() {
            prop_assert!(page.fields.len() <= 4);
        }
    }

    #[test]
    fn filling_unconditional_fields_never_closes_the_gate(count in 1usize..12, filled in prop::collection::vec(any::<bool>(), 12)) {
        let fields: Vec<Field> = text_fields(count)
            .into_iter()
            .map(|field| field.with_required(true))
            .collect();
        let plan = PaginationPlan::build(&fields, PaginationMode::SinglePage);
        let page = &plan.pages()[0];

        let mut values = ValueMap::new();
        for (field, fill) in fields.iter().zip(&filled) {
            if *fill {
                values.insert(field.id.to_string(), json!("x"));
            }
        }
        let open = can_advance(page, &values);

        let mut more = values.clone();
        for field in &fields {
            more.insert(field.id.to_string(), json!("y"));
        }
        prop_assert!(can_advance(page, &more));
        prop_assert_eq!(open, filled.iter().take(count).all(|fill| *fill));
    }

    #[test]
    fn absent_target_always_hides(value in any::<i64>(), op in 0usize..5) {
        let operator = Operator::all()[op];
        let field = Field::from_type_defaults(FieldId::new("dep").expect("id"), FieldType::Text, 0)
            .with_conditional(ConditionalRule::new(
                FieldId::new("target").expect("id"),
                operator,
                value,
            ));
        prop_assert!(!is_visible(&field, &ValueMap::new()));

        let plain = Field::from_type_defaults(FieldId::new("plain").expect("id"), FieldType::Text, 1);
        let mut values = ValueMap::new();
        values.insert("other".to_string(), json!(value));
        prop_assert!(is_visible(&plain, &values));
    }
}
