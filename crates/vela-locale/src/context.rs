// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Explicit scope chain threaded through component tree construction.

use std::rc::Rc;

use tracing::debug;

use crate::adapter::LocaleAdapter;
use crate::error::{LocaleError, Result};
use crate::options::ScopeOptions;
use crate::scope::LocaleScope;

/// What a component can see of the locale system: the installed adapter and
/// the nearest published scope.
///
/// Parents hand a context to their children; a provider hands its children a
/// new context with its own scope published. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct LocaleContext {
	adapter: Option<Rc<LocaleAdapter>>,
	scope: Option<LocaleScope>,
}

impl LocaleContext {
	/// A context with an adapter but nothing published yet.
	pub fn new(adapter: impl Into<LocaleAdapter>) -> Self {
		Self {
			adapter: Some(Rc::new(adapter.into())),
			scope: None,
		}
	}

	/// A context without an adapter, as seen by components rendered outside
	/// an application that installed the locale system.
	pub fn detached() -> Self {
		Self::default()
	}

	/// Build the adapter, create its root scope and publish it.
	///
	/// ```
	/// use vela_locale::{use_locale, LocaleContext, LocaleOptions};
	///
	/// let ctx = LocaleContext::install(LocaleOptions::new().with_locale("en")).unwrap();
	/// let scope = use_locale(&ctx).unwrap();
	/// assert_eq!(scope.t("$vuetify.close", &[]), "Close");
	/// ```
	pub fn install(setup: impl Into<LocaleAdapter>) -> Result<Self> {
		let ctx = Self::new(setup);
		let root = ctx.adapter()?.create_root()?;
		Ok(ctx.publish(root))
	}

	pub fn adapter(&self) -> Result<&LocaleAdapter> {
		self.adapter.as_deref().ok_or(LocaleError::MissingAdapter)
	}

	/// The nearest published scope.
	pub fn scope(&self) -> Option<&LocaleScope> {
		self.scope.as_ref()
	}

	/// A context for descendants in which `scope` is the nearest scope.
	pub fn publish(&self, scope: LocaleScope) -> Self {
		debug!(depth = scope.depth(), locale = %scope.locale(), "published locale scope");
		Self {
			adapter: self.adapter.clone(),
			scope: Some(scope),
		}
	}
}

/// Derive a child scope from the nearest one in `ctx` and publish it.
///
/// Returns the context to hand to descendants together with the new scope.
pub fn provide_locale(ctx: &LocaleContext, props: ScopeOptions) -> Result<(LocaleContext, LocaleScope)> {
	let scope = ctx.adapter()?.create_scope(ctx, props)?;
	Ok((ctx.publish(scope.clone()), scope))
}

/// The nearest locale scope visible from `ctx`.
pub fn use_locale(ctx: &LocaleContext) -> Result<LocaleScope> {
	ctx.adapter()?.get_scope(ctx)
}

/// Whether the nearest scope visible from `ctx` is right-to-left.
pub fn use_rtl(ctx: &LocaleContext) -> Result<bool> {
	Ok(use_locale(ctx)?.is_rtl())
}
