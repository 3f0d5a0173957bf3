// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Stable output types and client configuration.
//!
//! The address record is a normalized record: every field is present in the
//! serialized output, with `null` marking values the provider did not
//! return. None of the fields here use `skip_serializing_if` for that
//! reason.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::options::GeoSearchOptions;

/// A WGS84 coordinate pair. Values pass through from the provider without
/// range validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
	pub lat: f64,
	pub lon: f64,
}

/// Normalized address record with a fixed field set.
///
/// All 18 fields are always present; a field the provider omitted is `None`
/// and serializes as an explicit `null`, never as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoSearchAddress {
	pub country: Option<String>,
	pub country_code: Option<String>,
	#[serde(rename = "countryCodeISO3")]
	pub country_code_iso3: Option<String>,
	pub country_secondary_subdivision: Option<String>,
	pub country_subdivision: Option<String>,
	pub country_subdivision_code: Option<String>,
	pub country_subdivision_name: Option<String>,
	pub country_tertiary_subdivision: Option<String>,
	pub extended_postal_code: Option<String>,
	pub freeform_address: Option<String>,
	pub local_name: Option<String>,
	pub municipality: Option<String>,
	pub municipality_secondary_subdivision: Option<String>,
	pub municipality_subdivision: Option<String>,
	pub neighbourhood: Option<String>,
	pub postal_code: Option<String>,
	pub street_name: Option<String>,
	pub street_number: Option<String>,
}

/// One place returned by a search: provider-assigned opaque id, normalized
/// address, and coordinate. Provider metadata (score, POI details,
/// viewport, entry points) is not part of the stable contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoSearchResult {
	#[serde(rename = "placeId")]
	pub place_id: String,
	pub address: GeoSearchAddress,
	pub position: GeoPoint,
}

/// Ordered collection of search results. Preserves provider order; may be
/// empty, never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoSearchResults {
	pub results: Vec<GeoSearchResult>,
}

/// Configuration for [`TomTomGeoSearchEngine`](crate::TomTomGeoSearchEngine).
///
/// `base_url` and `api_version` default at construction of the config;
/// the nested option defaults (`limit=10`, `countrySet=AU`) are layered in
/// when the engine is built, with caller-supplied `defaults` winning
/// field-by-field.
#[derive(Debug, Clone)]
pub struct GeoSearchConfig {
	pub api_key: String,
	pub base_url: String,
	pub api_version: String,
	/// Transport passthrough; `None` keeps the reqwest default.
	pub timeout: Option<Duration>,
	pub defaults: GeoSearchOptions,
}

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.tomtom.com";
pub(crate) const DEFAULT_API_VERSION: &str = "2";

impl GeoSearchConfig {
	pub fn new(api_key: impl Into<String>) -> Self {
		Self {
			api_key: api_key.into(),
			base_url: DEFAULT_BASE_URL.to_string(),
			api_version: DEFAULT_API_VERSION.to_string(),
			timeout: None,
			defaults: GeoSearchOptions::default(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
		self.api_version = api_version.into();
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Sets default search options applied to every call. Fields left unset
	/// here still inherit the built-in defaults when the engine is built.
	pub fn with_defaults(mut self, defaults: GeoSearchOptions) -> Self {
		self.defaults = defaults;
		self
	}
}
