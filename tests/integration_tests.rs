//! End-to-end: analyse a file, pick a suggestion, apply it.

use typereveal::common::Span;
use typereveal::syntax::NodeArena;
use typereveal::types::{TypeQuery, TypeTable, TypeTemplate};
use typereveal::{FixError, FixOutcome, TypeRevealConfig, inspect_file, parse_config};

/// `ArrayList<E> : List<E>` and nothing else, so the candidate list is exact.
fn list_hierarchy() -> TypeTable {
    let mut table = TypeTable::new();
    table.declare_class("String", &[], vec![]);
    table.declare_class("List", &["E"], vec![]);
    table.declare_class(
        "ArrayList",
        &["E"],
        vec![TypeTemplate::generic("List", vec![TypeTemplate::Param(0)])],
    );
    table
}

#[test]
fn array_list_property_offers_list_and_applies_it() {
    // val items = ArrayList<String>()
    let mut arena = NodeArena::new();
    let root = arena.add_source_file("Items.kt", Span::new(0, 31));
    let items = arena.add_property(root, "items", false, Span::new(0, 31), Span::new(4, 9));

    let mut table = list_hierarchy();
    let string = table.class_type("String", &[]);
    let array_list = table.class_type("ArrayList", &[string]);
    table.record_declaration_type(items, array_list);
    let query = table.seal();

    let problems = inspect_file(&TypeRevealConfig::default(), &arena, root, &query);

    assert_eq!(problems.len(), 1);
    let problem = &problems[0];
    let texts: Vec<&str> = problem.fixes.iter().map(|fix| fix.type_text()).collect();
    assert_eq!(texts, vec!["ArrayList<String>", "List<String>"]);

    let outcome = problem.apply_fix(1, &mut arena).unwrap();
    assert!(matches!(outcome, FixOutcome::Applied { .. }));
    assert_eq!(
        arena.property_type_text(items).as_deref(),
        Some("List<String>")
    );

    // Once annotated the declaration is no longer reported.
    assert!(inspect_file(&TypeRevealConfig::default(), &arena, root, &query).is_empty());
}

#[test]
fn top_level_flagged_local_not() {
    // val shared = 1
    // fun main() { val counter = 2 }
    let mut arena = NodeArena::new();
    let root = arena.add_source_file("Main.kt", Span::new(0, 50));
    let shared = arena.add_property(root, "shared", false, Span::new(0, 14), Span::new(4, 10));
    let main = arena.add_function(root, "main", Span::new(15, 50));
    let counter = arena.add_property(main, "counter", false, Span::new(28, 45), Span::new(32, 39));

    let mut table = TypeTable::with_builtins();
    let int = table.class_type("Int", &[]);
    table.record_declaration_type(shared, int);
    table.record_declaration_type(counter, int);
    let query = table.seal();

    let problems = inspect_file(&TypeRevealConfig::default(), &arena, root, &query);

    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].node, shared);
    let expected = 1 + query.immediate_supertypes(int).len();
    assert_eq!(problems[0].fixes.len(), expected);
    let texts: Vec<&str> = problems[0].fixes.iter().map(|fix| fix.type_text()).collect();
    assert_eq!(texts, vec!["Int", "Number", "Comparable<Int>"]);
}

#[test]
fn fix_after_further_edits_resolves_the_declaration_again() {
    let mut arena = NodeArena::new();
    let root = arena.add_source_file("Edit.kt", Span::new(0, 80));
    let first = arena.add_property(root, "first", false, Span::new(0, 20), Span::new(4, 9));
    let second = arena.add_property(root, "second", false, Span::new(21, 40), Span::new(25, 31));

    let mut table = TypeTable::with_builtins();
    let string = table.class_type("String", &[]);
    table.record_declaration_type(first, string);
    table.record_declaration_type(second, string);
    let query = table.seal();

    let problems = inspect_file(&TypeRevealConfig::default(), &arena, root, &query);
    assert_eq!(problems.len(), 2);

    // The user deletes `first` before invoking its fix.
    arena.remove_node(first);
    let stale = problems[0].apply_fix(0, &mut arena).unwrap_err();
    assert!(matches!(stale, FixError::StaleDeclaration { .. }));

    // The unrelated declaration is still fixable.
    problems[1].apply_fix(2, &mut arena).unwrap();
    assert_eq!(
        arena.property_type_text(second).as_deref(),
        Some("CharSequence")
    );
}

#[test]
fn config_can_switch_off_the_inspection() {
    let mut arena = NodeArena::new();
    let root = arena.add_source_file("Off.kt", Span::new(0, 20));
    arena.add_property(root, "value", false, Span::new(0, 20), Span::new(4, 9));
    let query = TypeTable::with_builtins().seal();

    let config = parse_config(r#"{ "propertyType": { "enabled": false } }"#).unwrap();
    assert!(inspect_file(&config, &arena, root, &query).is_empty());
}
