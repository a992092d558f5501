use super::*;

#[test]
fn intern_returns_same_atom_for_same_text() {
    let mut interner = Interner::new();
    let a = interner.intern("List");
    let b = interner.intern("List");
    let c = interner.intern("Map");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.resolve(a), "List");
    assert_eq!(interner.resolve(c), "Map");
}

#[test]
fn empty_string_is_none_atom() {
    let mut interner = Interner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Atom::NONE);
    assert!(Atom::NONE.is_none());
}

#[test]
fn lookup_does_not_insert() {
    let mut interner = Interner::new();
    assert_eq!(interner.lookup("String"), None);
    let atom = interner.intern("String");
    assert_eq!(interner.lookup("String"), Some(atom));
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_out_of_bounds_is_empty() {
    let interner = Interner::new();
    assert_eq!(interner.resolve(Atom(42)), "");
}
