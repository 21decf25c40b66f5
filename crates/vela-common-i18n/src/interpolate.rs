// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Substitute positional placeholders (`{0}`, `{1}`, ...) with `params`.
///
/// Placeholders without a matching argument are left as written.
///
/// # Example
///
/// ```
/// use vela_common_i18n::interpolate;
///
/// assert_eq!(interpolate("{0}-{1} of {2}", &["1", "10", "42"]), "1-10 of 42");
/// assert_eq!(interpolate("Rating {0} of {1}", &["3"]), "Rating 3 of {1}");
/// ```
pub fn interpolate(template: &str, params: &[&str]) -> String {
	PLACEHOLDER
		.replace_all(template, |caps: &Captures| {
			caps[1]
				.parse::<usize>()
				.ok()
				.and_then(|index| params.get(index))
				.map(|param| (*param).to_string())
				.unwrap_or_else(|| caps[0].to_string())
		})
		.into_owned()
}
