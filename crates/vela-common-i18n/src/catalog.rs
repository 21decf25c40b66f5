// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message catalogs keyed by locale, plus the built-in English catalog.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::DEFAULT_LOCALE;

/// A nested tree of messages for a single locale.
///
/// Leaves are normally strings; any other JSON value is tolerated at load time
/// and reported when a key resolves to it.
pub type MessageTree = Value;

const EN_JSON: &str = include_str!("../locales/en.json");

static BUILTIN_EN: Lazy<MessageTree> = Lazy::new(|| match serde_json::from_str(EN_JSON) {
	Ok(tree) => tree,
	Err(e) => {
		tracing::error!(error = %e, "Failed to parse built-in English messages");
		Value::Object(Default::default())
	}
});

/// Mapping from locale identifier to that locale's message tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Messages(BTreeMap<String, MessageTree>);

impl Messages {
	pub fn new() -> Self {
		Self::default()
	}

	/// The catalog used when the host supplies nothing: `{ en: <built-in English> }`.
	pub fn builtin() -> Self {
		let mut messages = Self::new();
		messages.insert(DEFAULT_LOCALE, BUILTIN_EN.clone());
		messages
	}

	pub fn with_locale(mut self, locale: impl Into<String>, tree: MessageTree) -> Self {
		self.insert(locale, tree);
		self
	}

	/// Replaces the tree for `locale`, returning the previous one.
	pub fn insert(&mut self, locale: impl Into<String>, tree: MessageTree) -> Option<MessageTree> {
		self.0.insert(locale.into(), tree)
	}

	pub fn get(&self, locale: &str) -> Option<&MessageTree> {
		if locale.is_empty() {
			return None;
		}
		self.0.get(locale)
	}

	pub fn contains_locale(&self, locale: &str) -> bool {
		self.get(locale).is_some()
	}

	/// Locale identifiers in sorted order.
	pub fn locales(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Deep-merges `other` into `self`.
	///
	/// Objects are merged key by key; any other value in `other` replaces the
	/// value in `self`.
	pub fn merge(&mut self, other: &Messages) {
		for (locale, tree) in &other.0 {
			match self.0.get_mut(locale) {
				Some(existing) => merge_tree(existing, tree),
				None => {
					self.0.insert(locale.clone(), tree.clone());
				}
			}
		}
	}

	/// Returns a new catalog with `other` deep-merged over `self`.
	pub fn merged(&self, other: &Messages) -> Messages {
		let mut merged = self.clone();
		merged.merge(other);
		merged
	}
}

impl FromIterator<(String, MessageTree)> for Messages {
	fn from_iter<I: IntoIterator<Item = (String, MessageTree)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

fn merge_tree(target: &mut Value, source: &Value) {
	match (target, source) {
		(Value::Object(target), Value::Object(source)) => {
			for (key, value) in source {
				match target.get_mut(key) {
					Some(existing) => merge_tree(existing, value),
					None => {
						target.insert(key.clone(), value.clone());
					}
				}
			}
		}
		(target, source) => *target = source.clone(),
	}
}
