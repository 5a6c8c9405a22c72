//! Captured check arguments: labels paired positionally with rendered values.

use serde::{Deserialize, Serialize};

use crate::check::stringize::Stringize;
use crate::core::errors::{Result, UthError};

/// Shown in place of a value whose type has no rendering.
pub const NO_DEBUG_STRING: &str = "-No debug string-";

/// Hint attached to undisplayable values.
pub const NO_DEBUG_STRING_HINT: &str =
    "Implement Stringize for this type (stringize_display! or stringize_repr! may help).";

/// One captured argument: its label and rendered value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Argument label, usually the source expression text.
    pub name: String,
    /// Rendered value, or [`NO_DEBUG_STRING`] when undisplayable.
    pub value: String,
    /// The value's type had no rendering.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub undisplayable: bool,
}

impl Param {
    /// Pair a label with a rendered value, substituting the placeholder for
    /// an empty rendering.
    pub fn new(name: impl Into<String>, rendered: String) -> Self {
        let undisplayable = rendered.is_empty();
        Self {
            name: name.into(),
            value: if undisplayable {
                NO_DEBUG_STRING.to_string()
            } else {
                rendered
            },
            undisplayable,
        }
    }

    /// Render `value` and pair it with `name`.
    pub fn capture(name: impl Into<String>, value: &dyn Stringize) -> Self {
        Self::new(name, value.stringize())
    }
}

/// Split a comma-joined label list, one label per argument, in order.
///
/// Each step takes the text up to the next comma; surrounding whitespace is
/// trimmed. An empty or all-blank list yields no labels. Labels cannot
/// contain commas themselves.
pub fn split_labels(labels: &str) -> Vec<String> {
    if labels.trim().is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut rest = labels;
    loop {
        match rest.find(',') {
            Some(idx) => {
                out.push(rest[..idx].trim().to_string());
                rest = &rest[idx + 1..];
            }
            None => {
                out.push(rest.trim().to_string());
                break;
            }
        }
    }
    out
}

/// Ensure a label list names every argument exactly once.
pub fn check_label_count(labels: &[String], args: usize) -> Result<()> {
    if labels.len() == args {
        Ok(())
    } else {
        Err(UthError::LabelMismatch {
            labels: labels.len(),
            args,
        })
    }
}

/// Build the param list for `args`, labelled positionally by `labels`.
pub fn generate(labels: &[String], args: &[&dyn Stringize]) -> Result<Vec<Param>> {
    check_label_count(labels, args.len())?;
    Ok(labels
        .iter()
        .zip(args)
        .map(|(name, value)| Param::capture(name.as_str(), *value))
        .collect())
}

/// Re-indent embedded newlines of a multi-line value to `depth` tabs.
pub fn indent_multiline(value: &str, depth: usize) -> String {
    if depth == 0 || !value.contains('\n') {
        return value.to_string();
    }
    let indent = format!("\n{}", "\t".repeat(depth));
    value.replace('\n', &indent)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Opaque;
    impl Stringize for Opaque {}

    #[test]
    fn split_preserves_order_and_trims() {
        assert_eq!(split_labels("lhs, rhs, eps"), vec!["lhs", "rhs", "eps"]);
        assert_eq!(split_labels("a,b"), vec!["a", "b"]);
        assert_eq!(split_labels("single"), vec!["single"]);
    }

    #[test]
    fn split_empty_list_yields_nothing() {
        assert!(split_labels("").is_empty());
        assert!(split_labels("   ").is_empty());
    }

    #[test]
    fn split_keeps_empty_middle_labels_positional() {
        assert_eq!(split_labels("a, , c"), vec!["a", "", "c"]);
    }

    #[test]
    fn generate_pairs_labels_with_values() {
        let labels = split_labels("i, j");
        let params = generate(&labels, &[&5, &9]).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "i");
        assert_eq!(params[0].value, "5");
        assert_eq!(params[1].name, "j");
        assert_eq!(params[1].value, "9");
    }

    #[test]
    fn generate_rejects_count_mismatch() {
        let labels = split_labels("only_one");
        let err = generate(&labels, &[&1, &2]).unwrap_err();
        assert_eq!(err.code(), "UTH-2002");
    }

    #[test]
    fn undisplayable_value_gets_placeholder() {
        let p = Param::capture("thing", &Opaque);
        assert!(p.undisplayable);
        assert_eq!(p.value, NO_DEBUG_STRING);
    }

    #[test]
    fn multiline_values_follow_depth() {
        assert_eq!(indent_multiline("a\nb", 2), "a\n\t\tb");
        assert_eq!(indent_multiline("a\nb", 0), "a\nb");
        assert_eq!(indent_multiline("ab", 3), "ab");
    }
}
