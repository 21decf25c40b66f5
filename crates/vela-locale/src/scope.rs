// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale scope nodes and their inheritance rules.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use vela_common_i18n::{resolve_key, translate, Direction, Lookup, Messages, RtlTable, DEFAULT_LOCALE};

use crate::engine::TranslationEngine;
use crate::options::ScopeOptions;

/// Locale and direction configuration for one region of a component tree.
///
/// A scope either overrides a setting or inherits it from its parent. Reads
/// walk the ancestor chain on every call, so a change made at an ancestor is
/// visible to every descendant that does not override it, and the resolved
/// direction is never stale.
///
/// Cloning a scope is cheap and yields a handle to the same node.
#[derive(Clone)]
pub struct LocaleScope {
	node: Rc<ScopeNode>,
}

struct ScopeNode {
	depth: usize,
	parent: Option<LocaleScope>,
	locale: RefCell<Option<String>>,
	fallback_locale: RefCell<Option<String>>,
	messages: RefCell<Option<Rc<Messages>>>,
	rtl: Cell<Option<bool>>,
	rtl_table: Rc<RtlTable>,
	engine: Option<Rc<dyn TranslationEngine>>,
}

impl LocaleScope {
	/// Build a root scope. Unset locales are read from `engine` on every
	/// access, falling back to the default locale.
	pub(crate) fn root(
		locale: Option<String>,
		fallback_locale: Option<String>,
		messages: Messages,
		rtl_table: RtlTable,
		engine: Option<Rc<dyn TranslationEngine>>,
	) -> Self {
		Self {
			node: Rc::new(ScopeNode {
				depth: 0,
				parent: None,
				locale: RefCell::new(locale),
				fallback_locale: RefCell::new(fallback_locale),
				messages: RefCell::new(Some(Rc::new(messages))),
				rtl: Cell::new(None),
				rtl_table: Rc::new(rtl_table),
				engine,
			}),
		}
	}

	/// Derive a child scope. Unset props inherit; provided messages are
	/// deep-merged over the parent's into a new mapping.
	pub(crate) fn child(&self, options: ScopeOptions) -> Self {
		let messages = options.messages.map(|m| Rc::new(self.messages().merged(&m)));
		Self {
			node: Rc::new(ScopeNode {
				depth: self.node.depth + 1,
				parent: Some(self.clone()),
				locale: RefCell::new(options.locale),
				fallback_locale: RefCell::new(options.fallback_locale),
				messages: RefCell::new(messages),
				rtl: Cell::new(options.rtl),
				rtl_table: Rc::clone(&self.node.rtl_table),
				engine: self.node.engine.clone(),
			}),
		}
	}

	pub fn is_root(&self) -> bool {
		self.node.parent.is_none()
	}

	/// Distance from the root scope, which has depth 0.
	pub fn depth(&self) -> usize {
		self.node.depth
	}

	pub fn parent(&self) -> Option<&LocaleScope> {
		self.node.parent.as_ref()
	}

	/// This scope followed by its ancestors, ending at the root.
	pub fn ancestors(&self) -> impl Iterator<Item = &LocaleScope> {
		std::iter::successors(Some(self), |scope| scope.parent())
	}

	pub fn root_scope(&self) -> &LocaleScope {
		self.ancestors().last().unwrap_or(self)
	}

	/// Effective locale: this scope's override, the nearest ancestor's, or
	/// the external engine's current global locale.
	pub fn locale(&self) -> String {
		self.ancestors()
			.find_map(|scope| scope.node.locale.borrow().clone())
			.or_else(|| self.node.engine.as_ref().map(|engine| engine.global_locale()))
			.unwrap_or_else(|| DEFAULT_LOCALE.to_string())
	}

	pub fn fallback_locale(&self) -> String {
		self.ancestors()
			.find_map(|scope| scope.node.fallback_locale.borrow().clone())
			.or_else(|| self.node.engine.as_ref().and_then(|engine| engine.fallback_locale()))
			.unwrap_or_else(|| DEFAULT_LOCALE.to_string())
	}

	/// Effective message mapping. Scopes without their own messages share the
	/// nearest ancestor's mapping.
	pub fn messages(&self) -> Rc<Messages> {
		self.ancestors()
			.find_map(|scope| scope.node.messages.borrow().clone())
			.unwrap_or_default()
	}

	pub fn overrides_locale(&self) -> bool {
		self.node.locale.borrow().is_some()
	}

	pub fn overrides_messages(&self) -> bool {
		self.node.messages.borrow().is_some()
	}

	/// The explicit direction override set on this scope, if any.
	pub fn rtl_override(&self) -> Option<bool> {
		self.node.rtl.get()
	}

	/// Locale → direction table shared by every scope under the same root.
	pub fn rtl_table(&self) -> &RtlTable {
		&self.node.rtl_table
	}

	/// Whether this scope renders right-to-left.
	///
	/// Resolution order:
	/// 1. This scope's explicit override
	/// 2. The direction table's entry for this scope's effective locale
	/// 3. The parent scope's resolved value (`false` above the root)
	pub fn is_rtl(&self) -> bool {
		for scope in self.ancestors() {
			if let Some(rtl) = scope.node.rtl.get() {
				return rtl;
			}
			if let Some(rtl) = scope.node.rtl_table.get(&scope.locale()) {
				return rtl;
			}
		}
		false
	}

	pub fn direction(&self) -> Direction {
		Direction::from_rtl(self.is_rtl())
	}

	pub fn set_locale(&self, locale: impl Into<String>) {
		let locale = locale.into();
		tracing::debug!(depth = self.depth(), %locale, "locale changed");
		*self.node.locale.borrow_mut() = Some(locale);
	}

	pub fn set_fallback_locale(&self, locale: impl Into<String>) {
		*self.node.fallback_locale.borrow_mut() = Some(locale.into());
	}

	/// Replace this scope's messages. The new trees are merged over the
	/// parent's mapping on a child scope and over the built-in catalog on
	/// the root, as at creation.
	pub fn set_messages(&self, messages: Messages) {
		let merged = match self.parent() {
			Some(parent) => parent.messages().merged(&messages),
			None => Messages::builtin().merged(&messages),
		};
		*self.node.messages.borrow_mut() = Some(Rc::new(merged));
	}

	/// Set or clear the explicit direction override.
	pub fn set_rtl(&self, rtl: Option<bool>) {
		self.node.rtl.set(rtl);
	}

	/// Re-apply provider props after they changed.
	///
	/// On a child scope every prop is taken as given, so `None` resumes
	/// inheritance. The root keeps its current value for unset props.
	pub fn apply(&self, props: &ScopeOptions) {
		if self.is_root() {
			if let Some(locale) = &props.locale {
				self.set_locale(locale.clone());
			}
			if let Some(fallback) = &props.fallback_locale {
				self.set_fallback_locale(fallback.clone());
			}
			if let Some(messages) = &props.messages {
				let merged = self.messages().merged(messages);
				*self.node.messages.borrow_mut() = Some(Rc::new(merged));
			}
		} else {
			*self.node.locale.borrow_mut() = props.locale.clone();
			*self.node.fallback_locale.borrow_mut() = props.fallback_locale.clone();
			match &props.messages {
				Some(messages) => self.set_messages(messages.clone()),
				None => *self.node.messages.borrow_mut() = None,
			}
		}
		self.set_rtl(props.rtl);
	}

	/// Translate `key` in this scope.
	///
	/// Scopes created by an external adapter route through its engine;
	/// otherwise the built-in current → fallback → key chain is used.
	pub fn t(&self, key: &str, params: &[&str]) -> String {
		match &self.node.engine {
			Some(engine) => engine.translate(self, key, params),
			None => translate(&self.messages(), &self.locale(), &self.fallback_locale(), key, params),
		}
	}

	/// Resolve `key` against this scope's own messages, without interpolation
	/// and bypassing any external engine.
	pub fn resolve(&self, key: &str) -> Lookup {
		resolve_key(&self.messages(), &self.locale(), &self.fallback_locale(), key)
	}

	/// Name of the external engine serving this scope, if any.
	pub fn engine_name(&self) -> Option<&str> {
		self.node.engine.as_deref().map(|engine| engine.name())
	}

	/// Locales with messages visible from this scope.
	pub fn available_locales(&self) -> Vec<String> {
		self.messages().locales().map(str::to_string).collect()
	}

	/// True when both handles refer to the same scope node.
	pub fn ptr_eq(a: &LocaleScope, b: &LocaleScope) -> bool {
		Rc::ptr_eq(&a.node, &b.node)
	}
}

impl fmt::Debug for LocaleScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LocaleScope")
			.field("depth", &self.depth())
			.field("locale", &self.locale())
			.field("fallback_locale", &self.fallback_locale())
			.field("rtl", &self.is_rtl())
			.field("engine", &self.engine_name())
			.finish()
	}
}
