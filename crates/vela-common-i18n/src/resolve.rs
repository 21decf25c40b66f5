// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dotted-path resolution inside a message tree.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static BRACKET_INDEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\[(\w+)\]").expect("bracket index pattern is valid"));

/// Resolve a dotted path such as `dataTable.ariaLabel.sortNone` against `tree`.
///
/// Resolution order:
/// 1. A property whose name is the whole path (`{"a.b": ...}`)
/// 2. A walk over dot-separated segments, with `a[0]` treated as `a.0` and
///    numeric segments indexing into arrays
///
/// Returns `None` for an empty path or when any segment is absent.
///
/// # Example
///
/// ```
/// use vela_common_i18n::value_by_path;
/// use serde_json::json;
///
/// let tree = json!({ "a": { "b": "hi" }, "list": ["x", "y"] });
///
/// assert_eq!(value_by_path(&tree, "a.b"), Some(&json!("hi")));
/// assert_eq!(value_by_path(&tree, "list[1]"), Some(&json!("y")));
/// assert_eq!(value_by_path(&tree, "a.missing"), None);
/// ```
pub fn value_by_path<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
	if path.is_empty() {
		return None;
	}

	if let Some(value) = tree.as_object().and_then(|obj| obj.get(path)) {
		return Some(value);
	}

	let normalized = BRACKET_INDEX.replace_all(path, ".$1");
	let normalized = normalized.strip_prefix('.').unwrap_or(&normalized);

	normalized
		.split('.')
		.try_fold(tree, |node, segment| match node {
			Value::Object(obj) => obj.get(segment),
			Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
			_ => None,
		})
}
