//! Unit tests for field grouping and selector resolution

use super::*;
use crate::spec::{FieldModel, SchemaModel};

fn field(name: &str) -> FieldModel {
    FieldModel {
        name: name.to_string(),
        ..Default::default()
    }
}

fn oneof(name: &str, group: &str) -> FieldModel {
    FieldModel {
        name: name.to_string(),
        schema: SchemaModel {
            oneof: Some(group.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn read_only(mut f: FieldModel) -> FieldModel {
    f.schema.read_only = true;
    f
}

fn write_only(mut f: FieldModel) -> FieldModel {
    f.schema.write_only = true;
    f
}

/// Compact shape of grouped output: `a` for a field, `[b,c]` for a group
fn shape(items: &[FieldItem<'_>]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            FieldItem::Field(f) => f.name.clone(),
            FieldItem::Oneof(g) => format!(
                "[{}]",
                g.items
                    .iter()
                    .map(|f| f.name.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            ),
        })
        .collect()
}

fn sel(raw: &str) -> Option<SelectorPath<'_>> {
    SelectorPath::parse(raw)
}

#[test]
fn test_groups_oneof_members() {
    let fields = vec![field("a"), oneof("b", "1"), oneof("c", "1")];
    let items = group_fields(&fields, FieldFilter::default(), None);
    assert_eq!(shape(&items), vec!["a", "[b,c]"]);
}

#[test]
fn test_selector_narrows_to_later_member() {
    let fields = vec![field("a"), oneof("b", "1"), oneof("c", "1")];
    let items = group_fields(&fields, FieldFilter::default(), sel("c"));
    assert_eq!(shape(&items), vec!["a", "[c]"]);
    assert_eq!(items[1].as_single_field().map(|f| f.name.as_str()), Some("c"));
}

#[test]
fn test_selector_matching_representative_drops_alternatives() {
    let fields = vec![oneof("b", "1"), oneof("c", "1"), oneof("d", "1"), field("z")];
    let items = group_fields(&fields, FieldFilter::default(), sel("b"));
    assert_eq!(shape(&items), vec!["[b]", "z"]);
}

#[test]
fn test_matched_member_locks_group() {
    // foo_bar and FooBar normalize to the same segment; once foo_bar replaced
    // the members it represents the group and later matches are dropped
    let fields = vec![oneof("x", "g"), oneof("foo_bar", "g"), oneof("FooBar2", "g"), oneof("FooBar", "g")];
    let items = group_fields(&fields, FieldFilter::default(), sel("foo-bar"));
    assert_eq!(shape(&items), vec!["[foo_bar]"]);
}

#[test]
fn test_unmatched_selector_does_not_narrow() {
    let fields = vec![field("a"), oneof("b", "1"), oneof("c", "1")];
    let items = group_fields(&fields, FieldFilter::default(), sel("zzz"));
    assert_eq!(shape(&items), vec!["a", "[b,c]"]);

    let items = group_fields(&fields, FieldFilter::default(), sel(".c"));
    assert_eq!(shape(&items), vec!["a", "[b,c]"]);
}

#[test]
fn test_skip_read_only_applies_before_grouping() {
    let fields = vec![field("a"), read_only(oneof("b", "1")), oneof("c", "1")];
    let filter = FieldFilter {
        skip_read_only: true,
        skip_write_only: false,
    };
    let items = group_fields(&fields, filter, None);
    assert_eq!(shape(&items), vec!["a", "[c]"]);
}

#[test]
fn test_skip_write_only() {
    let fields = vec![write_only(field("secret")), field("a"), write_only(oneof("b", "1"))];
    let filter = FieldFilter {
        skip_read_only: false,
        skip_write_only: true,
    };
    let items = group_fields(&fields, filter, None);
    assert_eq!(shape(&items), vec!["a"]);

    // read-only skipping leaves write-only fields alone
    let filter = FieldFilter {
        skip_read_only: true,
        skip_write_only: false,
    };
    let items = group_fields(&fields, filter, None);
    assert_eq!(shape(&items), vec!["secret", "a", "[b]"]);
}

#[test]
fn test_interleaved_groups_keep_first_seen_order() {
    let fields = vec![
        oneof("x1", "x"),
        field("a"),
        oneof("y1", "y"),
        oneof("x2", "x"),
        field("b"),
        oneof("y2", "y"),
        oneof("x3", "x"),
    ];
    let items = group_fields(&fields, FieldFilter::default(), None);
    assert_eq!(shape(&items), vec!["[x1,x2,x3]", "a", "[y1,y2]", "b"]);
}

#[test]
fn test_selector_applies_to_every_group() {
    let fields = vec![oneof("x1", "x"), oneof("x2", "x"), oneof("y1", "y"), oneof("x2b", "y")];
    let items = group_fields(&fields, FieldFilter::default(), sel("x2"));
    assert_eq!(shape(&items), vec!["[x2]", "[y1,x2b]"]);
}

#[test]
fn test_regrouping_flattened_output_is_stable() {
    let fields = vec![
        oneof("x1", "x"),
        field("a"),
        oneof("y1", "y"),
        oneof("x2", "x"),
        field("b"),
        oneof("y2", "y"),
    ];
    let first = group_fields(&fields, FieldFilter::default(), None);
    let flattened: Vec<FieldModel> = flatten(&first).into_iter().cloned().collect();
    let second = group_fields(&flattened, FieldFilter::default(), None);
    assert_eq!(shape(&first), shape(&second));
}

#[test]
fn test_empty_input() {
    let items = group_fields(&[], FieldFilter::default(), sel("a"));
    assert!(items.is_empty());
}

#[test]
fn test_as_single_field() {
    let fields = vec![field("a"), oneof("b", "1"), oneof("c", "1")];
    let items = group_fields(&fields, FieldFilter::default(), None);
    assert_eq!(items[0].as_single_field().map(|f| f.name.as_str()), Some("a"));
    assert!(items[1].as_single_field().is_none());
}

#[test]
fn test_normalize_name() {
    assert_eq!(normalize_name("FooBar"), "foobar");
    assert_eq!(normalize_name("foo_bar"), "foobar");
    assert_eq!(normalize_name("foo-bar"), "foobar");
    assert_eq!(normalize_name(" Foo Bar "), "foobar");
}

#[test]
fn test_selector_path_segments() {
    let path = SelectorPath::parse("outer.inner.leaf").unwrap();
    assert_eq!(path.first(), "outer");
    let rest = path.rest().unwrap();
    assert_eq!(rest.as_str(), "inner.leaf");
    assert_eq!(rest.rest().map(|p| p.as_str()), Some("leaf"));
    assert!(rest.rest().unwrap().rest().is_none());

    assert!(SelectorPath::parse("").is_none());
    assert!(SelectorPath::parse("   ").is_none());
    assert!(SelectorPath::parse("a.").unwrap().rest().is_none());
}

#[test]
fn test_selector_forwarding() {
    let path = SelectorPath::parse("Payment_Method.card").unwrap();
    assert_eq!(
        path.forward_for("paymentMethod").map(|p| p.as_str()),
        Some("card")
    );
    assert!(path.forward_for("amount").is_none());
    assert!(SelectorPath::parse("card").unwrap().forward_for("card").is_none());
}

#[test]
fn test_expand_by_default() {
    let single = ExpansionPolicy {
        expand_single_schema_field: true,
        schema_expansion_level: 0,
    };
    assert!(expand_by_default(1, 3, single));
    assert!(!expand_by_default(2, 3, single));

    let depth = ExpansionPolicy {
        expand_single_schema_field: false,
        schema_expansion_level: 2,
    };
    assert!(expand_by_default(5, 1, depth));
    assert!(expand_by_default(5, 2, depth));
    assert!(!expand_by_default(5, 3, depth));
    assert!(!expand_by_default(1, 3, depth));
}

#[test]
fn test_groups_never_empty() {
    let mut ro = oneof("b", "1");
    ro.schema.read_only = true;
    let fields = vec![ro, oneof("c", "1"), oneof("d", "2"), field("e"), oneof("f", "2")];
    let filter = FieldFilter {
        skip_read_only: true,
        skip_write_only: false,
    };

    for raw in ["b", "c", "d", "f", "zzz", "c.x", "."] {
        for filter in [FieldFilter::default(), filter] {
            let items = group_fields(&fields, filter, SelectorPath::parse(raw));
            for item in &items {
                if let FieldItem::Oneof(group) = item {
                    assert!(!group.items.is_empty(), "empty group {} for {raw}", group.id);
                }
            }
        }
    }

    // A group whose only member is filtered out never appears
    let items = group_fields(&fields[..1], filter, None);
    assert!(items.is_empty());
}
