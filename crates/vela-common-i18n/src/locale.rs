// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and direction support.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
	/// Left-to-right (e.g., English, Swedish)
	#[default]
	Ltr,
	/// Right-to-left (e.g., Arabic, Hebrew)
	Rtl,
}

impl Direction {
	pub fn from_rtl(rtl: bool) -> Self {
		if rtl {
			Direction::Rtl
		} else {
			Direction::Ltr
		}
	}

	pub fn is_rtl(&self) -> bool {
		matches!(self, Direction::Rtl)
	}

	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	/// Returns the CSS `text-align` value for the start of text.
	pub fn text_align_start(&self) -> &'static str {
		match self {
			Direction::Ltr => "left",
			Direction::Rtl => "right",
		}
	}
}

/// Metadata about a locale the component library ships translations for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// Locale identifier as used in message catalogs (e.g., "en", "zh-Hans")
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Text direction
	pub direction: Direction,
}

/// Default locale used for both the current and the fallback locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Known locales and their text direction.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "de",
		name: "German",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "es",
		name: "Spanish",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "fa",
		name: "Persian",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "he",
		name: "Hebrew",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "ja",
		name: "Japanese",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ko",
		name: "Korean",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "nl",
		name: "Dutch",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "pt",
		name: "Portuguese",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ru",
		name: "Russian",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "sv",
		name: "Swedish",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ur",
		name: "Urdu",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "zh-Hans",
		name: "Chinese (Simplified)",
		direction: Direction::Ltr,
	},
];

/// Per-locale direction table, as configured by the host application.
///
/// A locale without an entry has no opinion; callers fall through to the
/// parent scope's direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RtlTable(BTreeMap<String, bool>);

impl RtlTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// A table with an entry for every locale in [`LOCALES`].
	pub fn builtin() -> Self {
		LOCALES
			.iter()
			.map(|info| (info.code.to_string(), info.direction.is_rtl()))
			.collect()
	}

	pub fn with(mut self, locale: impl Into<String>, rtl: bool) -> Self {
		self.insert(locale, rtl);
		self
	}

	pub fn insert(&mut self, locale: impl Into<String>, rtl: bool) -> Option<bool> {
		self.0.insert(locale.into(), rtl)
	}

	pub fn get(&self, locale: &str) -> Option<bool> {
		self.0.get(locale).copied()
	}

	pub fn direction(&self, locale: &str) -> Option<Direction> {
		self.get(locale).map(Direction::from_rtl)
	}

	/// Overlays the entries of `other` onto this table.
	pub fn merge(&mut self, other: &RtlTable) {
		for (locale, rtl) in &other.0 {
			self.0.insert(locale.clone(), *rtl);
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}
}

impl FromIterator<(String, bool)> for RtlTable {
	fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_locales_are_unique() {
		for (i, a) in LOCALES.iter().enumerate() {
			for b in &LOCALES[i + 1..] {
				assert_ne!(a.code, b.code, "duplicate locale entry");
			}
		}
	}

	#[test]
	fn test_direction_html_dir() {
		assert_eq!(Direction::Ltr.as_html_dir(), "ltr");
		assert_eq!(Direction::Rtl.as_html_dir(), "rtl");
	}

	#[test]
	fn test_direction_text_align() {
		assert_eq!(Direction::Ltr.text_align_start(), "left");
		assert_eq!(Direction::Rtl.text_align_start(), "right");
	}

	#[test]
	fn test_direction_from_rtl() {
		assert_eq!(Direction::from_rtl(true), Direction::Rtl);
		assert_eq!(Direction::from_rtl(false), Direction::Ltr);
		assert_eq!(Direction::default(), Direction::Ltr);
	}

	#[test]
	fn test_builtin_rtl_table_matches_locales() {
		let table = RtlTable::builtin();
		assert_eq!(table.len(), LOCALES.len());
		assert_eq!(table.get("ar"), Some(true));
		assert_eq!(table.get("en"), Some(false));
		assert_eq!(table.get("xx"), None);
	}

	#[test]
	fn test_rtl_table_merge_overrides() {
		let mut table = RtlTable::new().with("ar", true).with("en", false);
		table.merge(&RtlTable::new().with("en", true).with("sv", false));
		assert_eq!(table.get("ar"), Some(true));
		assert_eq!(table.get("en"), Some(true));
		assert_eq!(table.get("sv"), Some(false));
		assert_eq!(table.direction("en"), Some(Direction::Rtl));
	}
}
