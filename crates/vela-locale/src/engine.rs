// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::scope::LocaleScope;

/// A host-provided translation engine that replaces the built-in lookup.
///
/// Scopes created by an [`ExternalAdapter`](crate::ExternalAdapter) still
/// resolve locale inheritance and direction themselves; only `t` is routed
/// here, with the calling scope so the engine can read its effective locale,
/// fallback locale and messages.
pub trait TranslationEngine {
	/// Short name used in logs.
	fn name(&self) -> &str {
		"external"
	}

	/// The engine's application-wide locale.
	///
	/// Read on every access by scopes that inherit their locale from the
	/// root, so a change made through the engine is seen immediately.
	fn global_locale(&self) -> String;

	/// The engine's fallback locale, if it has one. Read like
	/// [`global_locale`](Self::global_locale).
	fn fallback_locale(&self) -> Option<String> {
		None
	}

	/// Called after a child scope is derived, before it is published.
	fn create_scope(&self, _scope: &LocaleScope) {}

	fn translate(&self, scope: &LocaleScope, key: &str, params: &[&str]) -> String;
}
