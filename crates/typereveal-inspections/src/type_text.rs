//! Text form of supertypes for re-insertion into source.

use typereveal_types::{TypeId, TypeQuery};

/// Render `name<arg1, arg2, ...>`, or just `name` when there are no
/// arguments.
pub fn render_type_text<S: AsRef<str>>(name: &str, arguments: &[S]) -> String {
    let mut text = String::from(name);
    if arguments.is_empty() {
        return text;
    }
    text.push('<');
    for (index, argument) in arguments.iter().enumerate() {
        text.push_str(argument.as_ref());
        if index + 1 < arguments.len() {
            text.push_str(", ");
        }
    }
    text.push('>');
    text
}

/// Render a supertype using constructor names only.
///
/// Arguments are not expanded further: `Map<String, List<Int>?>` renders as
/// `Map<String, List>`. Nullability of the supertype and of its arguments is
/// dropped.
pub fn render_supertype(query: &dyn TypeQuery, ty: TypeId) -> String {
    let arguments: Vec<&str> = query
        .type_arguments(ty)
        .iter()
        .map(|&arg| query.constructor_name(arg))
        .collect();
    render_type_text(query.constructor_name(ty), &arguments)
}

#[cfg(test)]
#[path = "../tests/type_text_tests.rs"]
mod tests;
