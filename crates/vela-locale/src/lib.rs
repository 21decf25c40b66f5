// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scoped locale, translation and text direction for Vela component trees.
//!
//! A host application installs one [`LocaleAdapter`] at the root of its
//! component tree. Nested providers derive child [`LocaleScope`]s that
//! override locale, fallback locale, messages or direction and inherit
//! everything else from their ancestors.
//!
//! There is no implicit registry: the adapter and the nearest scope travel
//! down the tree inside a [`LocaleContext`] that each component receives from
//! its parent.
//!
//! # Adapters
//!
//! - [`DefaultAdapter`]: built-in lookup of `$vuetify.`-prefixed keys in
//!   nested message trees, with a current → fallback → raw key chain
//! - [`ExternalAdapter`]: routes translation to a host-provided
//!   [`TranslationEngine`] while keeping the same scope semantics
//!
//! # Example
//!
//! ```
//! use vela_locale::{provide_locale, use_locale, use_rtl, LocaleContext, LocaleOptions, ScopeOptions};
//! use serde_json::json;
//!
//! let app = LocaleContext::install(
//!     LocaleOptions::new()
//!         .with_messages("en", json!({ "greeting": "hi {0}" }))
//!         .with_messages("ar", json!({ "greeting": "مرحبا {0}" }))
//!         .with_rtl("ar", true),
//! )
//! .unwrap();
//!
//! let (arabic, _) = provide_locale(&app, ScopeOptions::new().with_locale("ar")).unwrap();
//!
//! assert_eq!(use_locale(&app).unwrap().t("$vuetify.greeting", &["Sam"]), "hi Sam");
//! assert_eq!(use_locale(&arabic).unwrap().t("$vuetify.greeting", &["Sam"]), "مرحبا Sam");
//! assert!(use_rtl(&arabic).unwrap());
//! ```

mod adapter;
mod context;
mod engine;
mod error;
mod options;
mod scope;

pub use adapter::{DefaultAdapter, ExternalAdapter, ExternalEngineOptions, LocaleAdapter, LocaleSetup};
pub use context::{provide_locale, use_locale, use_rtl, LocaleContext};
pub use engine::TranslationEngine;
pub use error::{ConfigError, LocaleError, Result};
pub use options::{LocaleOptions, ScopeOptions};
pub use scope::LocaleScope;

pub use vela_common_i18n::{Direction, Lookup, MessageTree, Messages, RtlTable, DEFAULT_LOCALE, KEY_PREFIX};
