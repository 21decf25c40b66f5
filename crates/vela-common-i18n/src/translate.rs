// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Key translation with a current → fallback → raw key chain.

use serde_json::Value;
use tracing::{error, warn};

use crate::catalog::Messages;
use crate::interpolate::interpolate;
use crate::resolve::value_by_path;

/// Prefix marking a key as a lookup into the message catalog.
pub const KEY_PREFIX: &str = "$vuetify.";

/// Which branch of the lookup chain produced a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
	/// The key has no [`KEY_PREFIX`] and is used as literal text.
	Literal,
	/// Found in the current locale.
	Current(String),
	/// Missing in the current locale, found in the fallback locale.
	Fallback(String),
	/// Missing in both locales.
	Missing,
	/// Resolved to something other than a string.
	NotString,
}

impl Lookup {
	/// The text to interpolate: the resolved message, or the key itself.
	pub fn template<'a>(&'a self, key: &'a str) -> &'a str {
		match self {
			Lookup::Current(text) | Lookup::Fallback(text) => text.as_str(),
			Lookup::Literal | Lookup::Missing | Lookup::NotString => key,
		}
	}
}

/// Resolve `key` against `messages` without interpolating.
///
/// Misses in the current locale are logged as warnings, misses in the
/// fallback locale and non-string values as errors.
pub fn resolve_key(messages: &Messages, current: &str, fallback: &str, key: &str) -> Lookup {
	let Some(path) = key.strip_prefix(KEY_PREFIX) else {
		return Lookup::Literal;
	};

	let (value, from_fallback) = match lookup(messages, current, path) {
		Some(value) => (value, false),
		None => {
			warn!(
				key,
				locale = current,
				"Translation key not found in current locale, trying fallback locale"
			);
			match lookup(messages, fallback, path) {
				Some(value) => (value, true),
				None => {
					error!(key, locale = fallback, "Translation key not found in fallback locale");
					return Lookup::Missing;
				}
			}
		}
	};

	match value.as_str() {
		Some(text) if from_fallback => Lookup::Fallback(text.to_string()),
		Some(text) => Lookup::Current(text.to_string()),
		None => {
			error!(key, "Translation key has a non-string value");
			Lookup::NotString
		}
	}
}

/// Translate `key` for `current`, falling back to `fallback`, then to the key.
///
/// Keys without [`KEY_PREFIX`] never touch the catalog; they are only
/// interpolated with `params`.
pub fn translate(messages: &Messages, current: &str, fallback: &str, key: &str, params: &[&str]) -> String {
	let lookup = resolve_key(messages, current, fallback, key);
	interpolate(lookup.template(key), params)
}

fn lookup<'a>(messages: &'a Messages, locale: &str, path: &str) -> Option<&'a Value> {
	messages
		.get(locale)
		.and_then(|tree| value_by_path(tree, path))
		.filter(|value| is_present(value))
}

/// Empty strings, `null`, `false` and zero count as absent.
fn is_present(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
