// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Backward-compatible free functions wrapping [`TomTomGeoSearchEngine`].
//!
//! These exist for consumers of the pre-engine API and depend only on the
//! engine's public surface. They return the flat result vector instead of
//! the [`GeoSearchResults`](crate::GeoSearchResults) wrapper, and — unlike
//! the engine defaults — do not restrict results to AU: the historical
//! behavior searched all countries with `limit=100`. New code should use
//! [`TomTomGeoSearchEngine`] directly.

use crate::client::TomTomGeoSearchEngine;
use crate::error::GeoSearchError;
use crate::options::GeoSearchOptions;
use crate::types::{GeoSearchConfig, GeoSearchResult};

/// Environment variable supplying the API key for
/// [`get_auto_complete_details`].
pub const TOMTOM_API_KEY_ENV: &str = "TOMTOM_API_KEY";

const LEGACY_RESULT_LIMIT: u32 = 100;

fn legacy_config(api_key: &str) -> GeoSearchConfig {
	// limit=100 and an explicitly empty country set: the empty set takes
	// precedence over the engine's AU default and is not transmitted.
	GeoSearchConfig::new(api_key).with_defaults(GeoSearchOptions {
		limit: Some(LEGACY_RESULT_LIMIT),
		country_set: Some(Vec::new()),
		..Default::default()
	})
}

async fn autocomplete(
	config: GeoSearchConfig,
	address: &str,
) -> Result<Vec<GeoSearchResult>, GeoSearchError> {
	let engine = TomTomGeoSearchEngine::new(config)?;
	let results = engine.search(address, None).await?;
	Ok(results.results)
}

/// Searches for `address` using the API key from the `TOMTOM_API_KEY`
/// environment variable.
///
/// Delegates to [`get_place_autocomplete`], so results are not filtered to
/// AU. Errors from the underlying engine propagate unchanged; a missing or
/// empty environment variable is a configuration error.
pub async fn get_auto_complete_details(
	address: &str,
) -> Result<Vec<GeoSearchResult>, GeoSearchError> {
	let api_key = std::env::var(TOMTOM_API_KEY_ENV).unwrap_or_default();
	if api_key.is_empty() {
		return Err(GeoSearchError::Configuration(format!(
			"no API key provided (set {TOMTOM_API_KEY_ENV})"
		)));
	}
	get_place_autocomplete(&api_key, address).await
}

/// Searches for `address` with an explicit API key, returning the inner
/// ordered result sequence without the collection wrapper. A query that
/// matches nothing yields an empty vector, not an error; an empty query
/// surfaces the provider's rejection.
pub async fn get_place_autocomplete(
	key: &str,
	address: &str,
) -> Result<Vec<GeoSearchResult>, GeoSearchError> {
	autocomplete(legacy_config(key), address).await
}
