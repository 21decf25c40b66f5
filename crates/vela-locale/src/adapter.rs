// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Adapters decide how locale scopes are created and retrieved.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;
use vela_common_i18n::{Messages, RtlTable};

use crate::context::LocaleContext;
use crate::engine::TranslationEngine;
use crate::error::{LocaleError, Result};
use crate::options::{LocaleOptions, ScopeOptions};
use crate::scope::LocaleScope;

/// Self-contained adapter backed by the built-in message lookup.
#[derive(Debug)]
pub struct DefaultAdapter {
	options: LocaleOptions,
	root_created: Cell<bool>,
}

impl DefaultAdapter {
	pub fn new(options: LocaleOptions) -> Self {
		Self {
			options,
			root_created: Cell::new(false),
		}
	}

	pub fn options(&self) -> &LocaleOptions {
		&self.options
	}

	fn build_root(&self) -> LocaleScope {
		LocaleScope::root(
			Some(self.options.resolved_locale().to_string()),
			Some(self.options.resolved_fallback_locale().to_string()),
			self.options.resolved_messages(),
			self.options.rtl.clone(),
			None,
		)
	}
}

/// Host configuration for wrapping an external translation engine.
#[derive(Clone)]
pub struct ExternalEngineOptions {
	pub engine: Rc<dyn TranslationEngine>,
	pub rtl: RtlTable,
}

impl ExternalEngineOptions {
	pub fn new(engine: impl TranslationEngine + 'static) -> Self {
		Self {
			engine: Rc::new(engine),
			rtl: RtlTable::default(),
		}
	}

	pub fn with_rtl(mut self, locale: impl Into<String>, rtl: bool) -> Self {
		self.rtl.insert(locale, rtl);
		self
	}
}

impl fmt::Debug for ExternalEngineOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExternalEngineOptions")
			.field("engine", &self.engine.name())
			.field("rtl", &self.rtl)
			.finish()
	}
}

/// Adapter delegating translation to a host-provided [`TranslationEngine`].
pub struct ExternalAdapter {
	engine: Rc<dyn TranslationEngine>,
	rtl: RtlTable,
	root_created: Cell<bool>,
}

impl ExternalAdapter {
	pub fn new(options: ExternalEngineOptions) -> Self {
		Self {
			engine: options.engine,
			rtl: options.rtl,
			root_created: Cell::new(false),
		}
	}

	pub fn engine(&self) -> &Rc<dyn TranslationEngine> {
		&self.engine
	}

	/// The root leaves both locales unset so they track the engine's global
	/// state instead of a snapshot taken at startup.
	fn build_root(&self) -> LocaleScope {
		LocaleScope::root(
			None,
			None,
			Messages::new(),
			self.rtl.clone(),
			Some(Rc::clone(&self.engine)),
		)
	}
}

impl fmt::Debug for ExternalAdapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExternalAdapter")
			.field("engine", &self.engine.name())
			.field("rtl", &self.rtl)
			.field("root_created", &self.root_created.get())
			.finish()
	}
}

/// What the host application hands the library at startup.
#[derive(Debug, Clone)]
pub enum LocaleSetup {
	/// Use the built-in adapter with these options.
	Options(LocaleOptions),
	/// Wrap an external translation engine.
	Engine(ExternalEngineOptions),
}

impl Default for LocaleSetup {
	fn default() -> Self {
		LocaleSetup::Options(LocaleOptions::default())
	}
}

impl From<LocaleOptions> for LocaleSetup {
	fn from(options: LocaleOptions) -> Self {
		LocaleSetup::Options(options)
	}
}

impl From<ExternalEngineOptions> for LocaleSetup {
	fn from(options: ExternalEngineOptions) -> Self {
		LocaleSetup::Engine(options)
	}
}

/// The pluggable strategy for creating and retrieving locale scopes.
///
/// The variant is fixed when the host configuration is converted; call sites
/// only ever see the three operations below.
#[derive(Debug)]
pub enum LocaleAdapter {
	Default(DefaultAdapter),
	External(ExternalAdapter),
}

impl LocaleAdapter {
	pub fn new(setup: impl Into<LocaleSetup>) -> Self {
		match setup.into() {
			LocaleSetup::Options(options) => LocaleAdapter::Default(DefaultAdapter::new(options)),
			LocaleSetup::Engine(options) => LocaleAdapter::External(ExternalAdapter::new(options)),
		}
	}

	pub fn kind(&self) -> &'static str {
		match self {
			LocaleAdapter::Default(_) => "default",
			LocaleAdapter::External(_) => "external",
		}
	}

	/// Build the application-wide root scope. Succeeds once per adapter.
	pub fn create_root(&self) -> Result<LocaleScope> {
		let root_created = match self {
			LocaleAdapter::Default(adapter) => &adapter.root_created,
			LocaleAdapter::External(adapter) => &adapter.root_created,
		};
		if root_created.replace(true) {
			return Err(LocaleError::RootAlreadyCreated);
		}

		let scope = match self {
			LocaleAdapter::Default(adapter) => adapter.build_root(),
			LocaleAdapter::External(adapter) => adapter.build_root(),
		};

		debug!(
			adapter = self.kind(),
			locale = %scope.locale(),
			fallback_locale = %scope.fallback_locale(),
			rtl = scope.is_rtl(),
			"created root locale scope"
		);
		Ok(scope)
	}

	/// The nearest scope published in `ctx`.
	pub fn get_scope(&self, ctx: &LocaleContext) -> Result<LocaleScope> {
		ctx.scope().cloned().ok_or(LocaleError::MissingScope)
	}

	/// Derive a child of the nearest scope in `ctx`.
	///
	/// The child is returned, not published; use [`LocaleContext::publish`]
	/// to make it visible to descendants.
	pub fn create_scope(&self, ctx: &LocaleContext, options: ScopeOptions) -> Result<LocaleScope> {
		let parent = self.get_scope(ctx)?;
		let scope = parent.child(options);
		if let LocaleAdapter::External(adapter) = self {
			adapter.engine.create_scope(&scope);
		}
		debug!(
			adapter = self.kind(),
			depth = scope.depth(),
			locale = %scope.locale(),
			"created locale scope"
		);
		Ok(scope)
	}
}

impl Default for LocaleAdapter {
	fn default() -> Self {
		LocaleAdapter::new(LocaleSetup::default())
	}
}

impl From<LocaleSetup> for LocaleAdapter {
	fn from(setup: LocaleSetup) -> Self {
		LocaleAdapter::new(setup)
	}
}

impl From<LocaleOptions> for LocaleAdapter {
	fn from(options: LocaleOptions) -> Self {
		LocaleAdapter::new(options)
	}
}

impl From<ExternalEngineOptions> for LocaleAdapter {
	fn from(options: ExternalEngineOptions) -> Self {
		LocaleAdapter::new(options)
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::context::{provide_locale, use_locale};
	use serde_json::json;

	struct UppercaseEngine;

	impl TranslationEngine for UppercaseEngine {
		fn name(&self) -> &str {
			"uppercase"
		}

		fn global_locale(&self) -> String {
			"ja".to_string()
		}

		fn translate(&self, scope: &LocaleScope, key: &str, _params: &[&str]) -> String {
			format!("{}:{}", scope.locale(), key.to_uppercase())
		}
	}

	#[test]
	fn test_setup_selects_variant() {
		assert_eq!(LocaleAdapter::new(LocaleOptions::default()).kind(), "default");
		assert_eq!(LocaleAdapter::new(ExternalEngineOptions::new(UppercaseEngine)).kind(), "external");
		assert_eq!(LocaleAdapter::default().kind(), "default");
	}

	#[test]
	fn test_default_root_uses_builtin_defaults() {
		let adapter = LocaleAdapter::default();
		let root = adapter.create_root().unwrap();
		assert_eq!(root.locale(), "en");
		assert_eq!(root.fallback_locale(), "en");
		assert_eq!(root.t("$vuetify.close", &[]), "Close");
		assert!(root.engine_name().is_none());
	}

	#[test]
	fn test_default_root_merges_options() {
		let adapter = LocaleAdapter::new(
			LocaleOptions::new()
				.with_locale("sv")
				.with_messages("sv", json!({ "close": "Stäng" }))
				.with_rtl("sv", true),
		);
		let root = adapter.create_root().unwrap();
		assert_eq!(root.locale(), "sv");
		assert_eq!(root.fallback_locale(), "en");
		assert_eq!(root.t("$vuetify.close", &[]), "Stäng");
		assert_eq!(root.t("$vuetify.open", &[]), "Open");
		assert!(root.is_rtl());
	}

	#[test]
	fn test_root_created_once() {
		let adapter = LocaleAdapter::default();
		assert!(adapter.create_root().is_ok());
		assert!(matches!(adapter.create_root(), Err(LocaleError::RootAlreadyCreated)));

		let external = LocaleAdapter::new(ExternalEngineOptions::new(UppercaseEngine));
		assert!(external.create_root().is_ok());
		assert!(matches!(external.create_root(), Err(LocaleError::RootAlreadyCreated)));
	}

	#[test]
	fn test_get_scope_without_published_scope_fails() {
		let adapter = LocaleAdapter::default();
		let ctx = LocaleContext::detached();
		assert!(matches!(adapter.get_scope(&ctx), Err(LocaleError::MissingScope)));
		assert!(matches!(
			adapter.create_scope(&ctx, ScopeOptions::default()),
			Err(LocaleError::MissingScope)
		));
	}

	#[test]
	fn test_external_engine_scopes() {
		let adapter = LocaleAdapter::new(ExternalEngineOptions::new(UppercaseEngine).with_rtl("he", true));
		let root = adapter.create_root().unwrap();
		assert_eq!(root.locale(), "ja");
		assert_eq!(root.fallback_locale(), "en");
		assert_eq!(root.engine_name(), Some("uppercase"));
		assert_eq!(root.t("$vuetify.close", &[]), "ja:$VUETIFY.CLOSE");

		let ctx = LocaleContext::new(adapter).publish(root);
		let hebrew = ctx
			.adapter()
			.unwrap()
			.create_scope(&ctx, ScopeOptions::new().with_locale("he"))
			.unwrap();
		assert_eq!(hebrew.t("k", &[]), "he:K");
		assert!(hebrew.is_rtl());
		assert_eq!(hebrew.engine_name(), Some("uppercase"));
	}

	/// Engine whose global locale the host can switch at runtime.
	struct SwitchableEngine {
		locale: Rc<RefCell<String>>,
		scopes_created: Rc<Cell<usize>>,
	}

	impl TranslationEngine for SwitchableEngine {
		fn global_locale(&self) -> String {
			self.locale.borrow().clone()
		}

		fn create_scope(&self, _scope: &LocaleScope) {
			self.scopes_created.set(self.scopes_created.get() + 1);
		}

		fn translate(&self, scope: &LocaleScope, key: &str, _params: &[&str]) -> String {
			format!("{}:{}", scope.locale(), key)
		}
	}

	#[test]
	fn test_external_root_follows_engine_locale() {
		let locale = Rc::new(RefCell::new("ja".to_string()));
		let scopes_created = Rc::new(Cell::new(0));
		let engine = SwitchableEngine {
			locale: Rc::clone(&locale),
			scopes_created: Rc::clone(&scopes_created),
		};
		let ctx = LocaleContext::install(ExternalEngineOptions::new(engine).with_rtl("ar", true)).unwrap();
		let root = use_locale(&ctx).unwrap();
		assert_eq!(root.locale(), "ja");
		assert!(!root.is_rtl());

		*locale.borrow_mut() = "ar".to_string();
		assert_eq!(root.locale(), "ar");
		assert!(root.is_rtl());
		assert_eq!(root.t("k", &[]), "ar:k");

		let (_, child) = provide_locale(&ctx, ScopeOptions::default()).unwrap();
		assert_eq!(child.locale(), "ar");
		assert!(child.is_rtl());
		assert_eq!(scopes_created.get(), 1);
	}

	#[test]
	fn test_debug_does_not_require_engine_debug() {
		let adapter = LocaleAdapter::new(ExternalEngineOptions::new(UppercaseEngine));
		assert!(format!("{adapter:?}").contains("uppercase"));
	}
}
