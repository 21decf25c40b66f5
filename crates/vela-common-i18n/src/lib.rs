// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization primitives for Vela components.
//!
//! This crate holds the stateless half of the locale system: message trees,
//! dotted-path key lookup, positional interpolation, the translate function
//! with its fallback chain, and text direction metadata. Scoping, inheritance
//! and adapters live in `vela-locale`.
//!
//! # Key Naming Convention
//!
//! Keys owned by the component library carry the reserved [`KEY_PREFIX`]
//! (`$vuetify.`). The remainder is a dotted path into the active locale's
//! message tree:
//!
//! - `$vuetify.close` resolves `messages[locale].close`
//! - `$vuetify.dataFooter.pageText` resolves `messages[locale].dataFooter.pageText`
//!
//! Keys without the prefix are treated as literal text and only interpolated.
//!
//! # Example
//!
//! ```
//! use vela_common_i18n::{translate, Messages};
//!
//! let messages: Messages = serde_json::from_str(r#"{"en": {"a": {"b": "hi {0}"}}}"#).unwrap();
//!
//! assert_eq!(translate(&messages, "en", "en", "$vuetify.a.b", &["Sam"]), "hi Sam");
//! assert_eq!(translate(&messages, "fr", "en", "$vuetify.a.b", &["Sam"]), "hi Sam");
//! assert_eq!(translate(&messages, "en", "en", "{0} items", &["3"]), "3 items");
//! ```

mod catalog;
mod interpolate;
mod locale;
mod resolve;
mod translate;

pub use catalog::{MessageTree, Messages};
pub use interpolate::interpolate;
pub use locale::{Direction, LocaleInfo, RtlTable};
pub use resolve::value_by_path;
pub use translate::{resolve_key, translate, Lookup, KEY_PREFIX};

pub use locale::{DEFAULT_LOCALE, LOCALES};
