//! Markdown formatting primitives for brief generation.
//!
//! Every generator in this crate builds its output from these helpers so
//! that labelled fields, lists, and section headers stay byte-identical
//! across templates. All functions are pure; absent or empty values render
//! as the empty string rather than an error.

use crate::labels::LabelTable;
use briefgen_types::AnswerValue;
use std::borrow::Cow;

/// A value accepted by [`field`] and [`conditional_field`].
///
/// Mirrors the loose set of shapes answers arrive in: plain text, a list of
/// items, or nothing at all.
pub enum FieldValue<'a> {
    Absent,
    Text(Cow<'a, str>),
    Items(&'a [String]),
}

/// Conversion into a [`FieldValue`], so call sites can pass resolved
/// strings, raw answers, or optional lookups without ceremony.
pub trait IntoFieldValue<'a> {
    fn into_field_value(self) -> FieldValue<'a>;
}

impl<'a> IntoFieldValue<'a> for FieldValue<'a> {
    fn into_field_value(self) -> FieldValue<'a> {
        self
    }
}

impl<'a> IntoFieldValue<'a> for &'a str {
    fn into_field_value(self) -> FieldValue<'a> {
        FieldValue::Text(Cow::Borrowed(self))
    }
}

impl<'a> IntoFieldValue<'a> for String {
    fn into_field_value(self) -> FieldValue<'a> {
        FieldValue::Text(Cow::Owned(self))
    }
}

impl<'a> IntoFieldValue<'a> for &'a String {
    fn into_field_value(self) -> FieldValue<'a> {
        FieldValue::Text(Cow::Borrowed(self))
    }
}

impl<'a> IntoFieldValue<'a> for &'a AnswerValue {
    fn into_field_value(self) -> FieldValue<'a> {
        match self {
            AnswerValue::Text(s) => FieldValue::Text(Cow::Borrowed(s)),
            AnswerValue::List(items) => FieldValue::Items(items),
            other => FieldValue::Text(Cow::Owned(other.display_string())),
        }
    }
}

impl<'a, T> IntoFieldValue<'a> for Option<T>
where
    T: IntoFieldValue<'a>,
{
    fn into_field_value(self) -> FieldValue<'a> {
        match self {
            Some(value) => value.into_field_value(),
            None => FieldValue::Absent,
        }
    }
}

/// Creates a markdown section header: `"\n## {title}\n\n"`.
pub fn section(title: &str) -> String {
    format!("\n## {title}\n\n")
}

/// Creates a labelled markdown field: `"**{name}:** {value}\n\n"`.
///
/// Absent values, empty strings, and empty lists render as the empty
/// string. List values are joined with `", "`.
pub fn field<'a>(name: &str, value: impl IntoFieldValue<'a>) -> String {
    match value.into_field_value() {
        FieldValue::Absent => String::new(),
        FieldValue::Text(text) => {
            if text.is_empty() {
                String::new()
            } else {
                format!("**{name}:** {text}\n\n")
            }
        }
        FieldValue::Items(items) => {
            if items.is_empty() {
                String::new()
            } else {
                format!("**{name}:** {}\n\n", items.join(", "))
            }
        }
    }
}

/// Alias of [`field`] kept for call-site intent: the value is expected to
/// be optional and the field silently disappears when it is not answered.
pub fn conditional_field<'a>(name: &str, value: impl IntoFieldValue<'a>) -> String {
    field(name, value)
}

/// Creates a markdown bullet list, one `- {item}\n` per non-empty item,
/// followed by a blank line. Returns the empty string when nothing
/// survives filtering.
pub fn list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for item in items {
        let item = item.as_ref();
        if item.is_empty() {
            continue;
        }
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
    if out.is_empty() {
        return out;
    }
    out.push('\n');
    out
}

/// Creates a bullet list from option codes, translating each through a
/// label table.
///
/// An item equal to `other_key` is replaced by `other_value` when present
/// (lists are joined with `", "`). Codes missing from the table fall back
/// to the raw code verbatim; that silent degradation is intentional, not a
/// lookup failure.
pub fn mapped_list(
    items: &[String],
    labels: &LabelTable,
    other_value: Option<&AnswerValue>,
    other_key: &str,
) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for item in items {
        if item == other_key {
            if let Some(other) = other_value {
                out.push_str("- ");
                out.push_str(&other.display_string());
                out.push('\n');
                continue;
            }
        }
        out.push_str("- ");
        out.push_str(labels.label_for(item));
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::LabelTable;

    static GREEK: LabelTable = LabelTable::new(&[("a", "Alpha"), ("b", "Beta")]);

    #[test]
    fn section_has_surrounding_blank_lines() {
        assert_eq!(section("Project Overview"), "\n## Project Overview\n\n");
    }

    #[test]
    fn field_renders_text_values() {
        assert_eq!(field("X", "hello"), "**X:** hello\n\n");
    }

    #[test]
    fn field_degenerate_inputs_render_nothing() {
        assert_eq!(field("X", None::<&str>), "");
        assert_eq!(field("X", ""), "");
        let empty = AnswerValue::List(vec![]);
        assert_eq!(field("X", &empty), "");
    }

    #[test]
    fn field_joins_arrays_with_comma_space() {
        let value = AnswerValue::from(vec!["a", "b"]);
        assert_eq!(field("X", &value), "**X:** a, b\n\n");
    }

    #[test]
    fn conditional_field_matches_field() {
        assert_eq!(conditional_field("X", Some("v")), field("X", "v"));
        assert_eq!(conditional_field("X", None::<&str>), "");
    }

    #[test]
    fn list_filters_empty_items() {
        assert_eq!(list(["a", "", "b"]), "- a\n- b\n\n");
        assert_eq!(list(Vec::<String>::new()), "");
        assert_eq!(list(["", ""]), "");
    }

    #[test]
    fn mapped_list_substitutes_other_value() {
        let items = vec!["a".to_owned(), "other".to_owned()];
        let custom = AnswerValue::from("custom text");
        assert_eq!(
            mapped_list(&items, &GREEK, Some(&custom), "other"),
            "- Alpha\n- custom text\n\n"
        );
    }

    #[test]
    fn mapped_list_falls_back_to_raw_codes() {
        let items = vec!["a".to_owned(), "unknown-code".to_owned()];
        assert_eq!(
            mapped_list(&items, &GREEK, None, "other"),
            "- Alpha\n- unknown-code\n\n"
        );
    }

    #[test]
    fn mapped_list_keeps_other_code_without_value() {
        // With no elaboration text the raw "other" code renders verbatim.
        let items = vec!["other".to_owned()];
        assert_eq!(mapped_list(&items, &GREEK, None, "other"), "- other\n\n");
    }

    #[test]
    fn mapped_list_joins_list_valued_other() {
        let items = vec!["other".to_owned()];
        let other = AnswerValue::from(vec!["x", "y"]);
        assert_eq!(
            mapped_list(&items, &GREEK, Some(&other), "other"),
            "- x, y\n\n"
        );
    }
}
