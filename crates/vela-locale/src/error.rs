// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for locale scoping and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`LocaleError`] as the default error type.
pub type Result<T, E = LocaleError> = std::result::Result<T, E>;

/// Errors raised while wiring locale scopes into a component tree.
///
/// `MissingAdapter` and `MissingScope` signal programming errors in how the
/// tree was built; they are not meant to be recovered from at runtime.
#[derive(Debug, Error)]
pub enum LocaleError {
	#[error("no locale adapter is installed in this context")]
	MissingAdapter,

	#[error("no locale scope has been published in this context")]
	MissingScope,

	#[error("the root locale scope has already been created for this adapter")]
	RootAlreadyCreated,

	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),
}

/// Errors that can occur while loading locale configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// I/O error reading config file
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// TOML parsing error
	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// Invalid value
	#[error("Invalid value for {field}: {message}")]
	InvalidValue { field: String, message: String },
}

impl ConfigError {
	/// Create an invalid value error
	pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			field: field.into(),
			message: message.into(),
		}
	}
}
