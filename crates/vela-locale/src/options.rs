// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Root configuration and per-subtree override props.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vela_common_i18n::{MessageTree, Messages, RtlTable, DEFAULT_LOCALE};

use crate::error::ConfigError;

/// Library-root locale configuration supplied by the host application.
///
/// Every field is optional; unset fields resolve to the built-in defaults
/// (`locale = "en"`, `fallback_locale = "en"`, English messages).
///
/// ```toml
/// locale = "sv"
/// fallback_locale = "en"
///
/// [rtl]
/// ar = true
///
/// [messages.sv]
/// close = "Stäng"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleOptions {
	#[serde(alias = "default_locale", skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fallback_locale: Option<String>,
	pub messages: Messages,
	pub rtl: RtlTable,
}

impl LocaleOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());
		self
	}

	pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
		self.fallback_locale = Some(locale.into());
		self
	}

	pub fn with_messages(mut self, locale: impl Into<String>, tree: MessageTree) -> Self {
		self.messages.insert(locale, tree);
		self
	}

	pub fn with_rtl(mut self, locale: impl Into<String>, rtl: bool) -> Self {
		self.rtl.insert(locale, rtl);
		self
	}

	/// Seeds the direction table with every known locale; explicit entries win.
	pub fn with_builtin_rtl(mut self) -> Self {
		let mut table = RtlTable::builtin();
		table.merge(&self.rtl);
		self.rtl = table;
		self
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.locale.as_deref().is_some_and(str::is_empty) {
			return Err(ConfigError::invalid_value("locale", "must not be empty"));
		}
		if self.fallback_locale.as_deref().is_some_and(str::is_empty) {
			return Err(ConfigError::invalid_value("fallback_locale", "must not be empty"));
		}
		Ok(())
	}

	pub fn resolved_locale(&self) -> &str {
		self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
	}

	pub fn resolved_fallback_locale(&self) -> &str {
		self.fallback_locale.as_deref().unwrap_or(DEFAULT_LOCALE)
	}

	/// The built-in catalog with the configured messages deep-merged over it.
	pub fn resolved_messages(&self) -> Messages {
		Messages::builtin().merged(&self.messages)
	}

	/// Parse and validate options from a TOML string.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Self::parse(content, PathBuf::from("<inline>"))
	}

	/// Load and validate options from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading locale configuration");
		Self::parse(&content, path.to_path_buf())
	}

	fn parse(content: &str, path: PathBuf) -> Result<Self, ConfigError> {
		let options: LocaleOptions =
			toml::from_str(content).map_err(|source| ConfigError::TomlParse { path, source })?;
		options.validate()?;
		Ok(options)
	}
}

/// Override props for a nested locale provider.
///
/// `None` means "inherit from the parent scope".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeOptions {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fallback_locale: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub messages: Option<Messages>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rtl: Option<bool>,
}

impl ScopeOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());
		self
	}

	pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
		self.fallback_locale = Some(locale.into());
		self
	}

	pub fn with_messages(mut self, messages: Messages) -> Self {
		self.messages = Some(messages);
		self
	}

	pub fn with_rtl(mut self, rtl: bool) -> Self {
		self.rtl = Some(rtl);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::io::Write;

	#[test]
	fn test_defaults_resolve_to_english() {
		let options = LocaleOptions::default();
		assert_eq!(options.resolved_locale(), "en");
		assert_eq!(options.resolved_fallback_locale(), "en");
		let messages = options.resolved_messages();
		assert_eq!(messages.get("en").unwrap()["close"], "Close");
		assert!(options.rtl.is_empty());
	}

	#[test]
	fn test_resolved_messages_merge_over_builtin() {
		let options = LocaleOptions::new().with_messages("en", json!({ "close": "Shut" }));
		let messages = options.resolved_messages();
		let en = messages.get("en").unwrap();
		assert_eq!(en["close"], "Shut");
		assert_eq!(en["open"], "Open");
	}

	#[test]
	fn test_parse_toml() {
		let options = LocaleOptions::from_toml_str(
			r#"
locale = "sv"
fallback_locale = "en"

[rtl]
ar = true
sv = false

[messages.sv]
close = "Stäng"

[messages.sv.confirmEdit]
ok = "Okej"
"#,
		)
		.unwrap();

		assert_eq!(options.locale.as_deref(), Some("sv"));
		assert_eq!(options.fallback_locale.as_deref(), Some("en"));
		assert_eq!(options.rtl.get("ar"), Some(true));
		assert_eq!(options.rtl.get("sv"), Some(false));
		let sv = options.messages.get("sv").unwrap();
		assert_eq!(sv["close"], "Stäng");
		assert_eq!(sv["confirmEdit"]["ok"], "Okej");
	}

	#[test]
	fn test_default_locale_alias() {
		let options = LocaleOptions::from_toml_str(r#"default_locale = "ja""#).unwrap();
		assert_eq!(options.resolved_locale(), "ja");
	}

	#[test]
	fn test_deserialize_empty() {
		let options = LocaleOptions::from_toml_str("").unwrap();
		assert_eq!(options, LocaleOptions::default());
	}

	#[test]
	fn test_invalid_toml_reports_path() {
		let err = LocaleOptions::from_toml_str("locale = ").unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
		assert!(err.to_string().contains("<inline>"));
	}

	#[test]
	fn test_empty_locale_rejected() {
		let err = LocaleOptions::from_toml_str(r#"locale = """#).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "locale"));

		let err = LocaleOptions::new().with_fallback_locale("").validate().unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "fallback_locale"));
	}

	#[test]
	fn test_load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "locale = \"he\"\n[rtl]\nhe = true").unwrap();

		let options = LocaleOptions::load(file.path()).unwrap();
		assert_eq!(options.resolved_locale(), "he");
		assert_eq!(options.rtl.get("he"), Some(true));
	}

	#[test]
	fn test_load_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = LocaleOptions::load(dir.path().join("absent.toml")).unwrap_err();
		assert!(matches!(err, ConfigError::Io(_)));
	}

	#[test]
	fn test_builtin_rtl_keeps_explicit_entries() {
		let options = LocaleOptions::new().with_rtl("en", true).with_builtin_rtl();
		assert_eq!(options.rtl.get("en"), Some(true));
		assert_eq!(options.rtl.get("ar"), Some(true));
		assert_eq!(options.rtl.get("sv"), Some(false));
	}
}
