use super::*;
use crate::TypeTemplate::Param;

fn names(query: &SealedTypeTable, types: &[TypeId]) -> Vec<String> {
    types.iter().map(|&ty| query.display(ty)).collect()
}

#[test]
fn class_types_are_hash_consed() {
    let mut table = TypeTable::with_builtins();
    let string = table.class_type("String", &[]);
    let a = table.class_type("List", &[string]);
    let b = table.class_type("List", &[string]);
    assert_eq!(a, b);
    assert_ne!(a, table.nullable(a));
    let nullable = table.nullable(a);
    assert_eq!(table.nullable(nullable), nullable);
}

#[test]
fn display_recurses_into_arguments() {
    let mut table = TypeTable::with_builtins();
    let string = table.class_type("String", &[]);
    let int = table.class_type("Int", &[]);
    let list = table.class_type("List", &[int]);
    let nullable_list = table.nullable(list);
    let map = table.class_type("Map", &[string, nullable_list]);
    let query = table.seal();

    assert_eq!(query.display(map), "Map<String, List<Int>?>");
    assert_eq!(query.constructor_name(map), "Map");
    assert_eq!(query.type_arguments(map), &[string, nullable_list]);
}

#[test]
fn supertypes_substitute_type_arguments() {
    let mut table = TypeTable::with_builtins();
    let string = table.class_type("String", &[]);
    let array_list = table.class_type("ArrayList", &[string]);
    let query = table.seal();

    let sups = query.immediate_supertypes(array_list);
    assert_eq!(
        names(&query, &sups),
        vec!["MutableList<String>", "RandomAccess"]
    );
}

#[test]
fn supertypes_are_one_level_only() {
    let mut table = TypeTable::with_builtins();
    let int = table.class_type("Int", &[]);
    let list = table.class_type("List", &[int]);
    let query = table.seal();

    assert_eq!(
        names(&query, &query.immediate_supertypes(list)),
        vec!["Collection<Int>"]
    );
}

#[test]
fn root_type_has_no_supertypes() {
    let mut table = TypeTable::with_builtins();
    let any = table.class_type(ROOT_TYPE_NAME, &[]);
    let unit = table.class_type("Unit", &[]);
    let query = table.seal();

    assert!(query.immediate_supertypes(any).is_empty());
    assert_eq!(names(&query, &query.immediate_supertypes(unit)), vec!["Any"]);
}

#[test]
fn unknown_classes_have_no_supertypes() {
    let mut table = TypeTable::new();
    let foreign = table.class_type("Foreign", &[]);
    let query = table.seal();
    assert!(query.immediate_supertypes(foreign).is_empty());
}

#[test]
fn nullable_types_keep_nullability_in_supertypes() {
    let mut table = TypeTable::with_builtins();
    let string = table.class_type("String", &[]);
    let nullable = table.nullable(string);
    let query = table.seal();

    assert_eq!(
        names(&query, &query.immediate_supertypes(nullable)),
        vec!["Comparable<String>?", "CharSequence?"]
    );
}

#[test]
fn raw_generic_use_leaves_parameters_unsubstituted() {
    let mut table = TypeTable::with_builtins();
    let raw = table.class_type("HashMap", &[]);
    let query = table.seal();
    assert_eq!(
        names(&query, &query.immediate_supertypes(raw)),
        vec!["MutableMap<K, V>"]
    );
}

#[test]
fn custom_classes_reorder_parameters() {
    let mut table = TypeTable::new();
    table.declare_class("Pair", &["A", "B"], vec![]);
    table.declare_class(
        "Swapped",
        &["A", "B"],
        vec![TypeTemplate::generic("Pair", vec![Param(1), Param(0)])],
    );
    let left = table.class_type("Left", &[]);
    let right = table.class_type("Right", &[]);
    let swapped = table.class_type("Swapped", &[left, right]);
    let query = table.seal();

    assert_eq!(
        names(&query, &query.immediate_supertypes(swapped)),
        vec!["Pair<Right, Left>"]
    );
}

#[test]
fn declaration_types_are_looked_up_by_node() {
    let mut table = TypeTable::with_builtins();
    let int = table.class_type("Int", &[]);
    table.record_declaration_type(NodeIndex(3), int);
    let query = table.seal();

    assert_eq!(query.declaration_type(NodeIndex(3)), Some(int));
    assert_eq!(query.declaration_type(NodeIndex(4)), None);
}
