// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! TomTom fuzzy-search client implementation.

use reqwest::Client;
use tracing::{debug, error, instrument, trace};

use crate::error::GeoSearchError;
use crate::mapping::{map_response, RawResponse};
use crate::options::GeoSearchOptions;
use crate::types::{GeoSearchConfig, GeoSearchResults};

const DEFAULT_RESULT_LIMIT: u32 = 10;
const DEFAULT_COUNTRY: &str = "AU";

/// Client for the TomTom fuzzy-search (geocoding/places) API.
///
/// Construction validates the API key and merges defaults once; the engine
/// is immutable afterwards. Each call issues exactly one GET and maps the
/// body into [`GeoSearchResults`]; there is no caching and no retry.
#[derive(Debug, Clone)]
pub struct TomTomGeoSearchEngine {
	http_client: Client,
	api_key: String,
	base_url: String,
	api_version: String,
	defaults: GeoSearchOptions,
}

fn default_options() -> GeoSearchOptions {
	GeoSearchOptions {
		limit: Some(DEFAULT_RESULT_LIMIT),
		country_set: Some(vec![DEFAULT_COUNTRY.to_string()]),
		..Default::default()
	}
}

impl TomTomGeoSearchEngine {
	/// Creates a new engine from the given configuration.
	///
	/// Fails with [`GeoSearchError::Configuration`] when the API key is
	/// empty; no partially configured engine is ever observable. The
	/// built-in option defaults (`limit=10`, `countrySet=AU`) fill in only
	/// the fields `config.defaults` left unset.
	pub fn new(config: GeoSearchConfig) -> Result<Self, GeoSearchError> {
		if config.api_key.is_empty() {
			return Err(GeoSearchError::Configuration(
				"no API key provided".to_string(),
			));
		}

		let mut builder = compass_common_http::builder();
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		let http_client = builder.build().map_err(GeoSearchError::Network)?;

		Ok(Self {
			http_client,
			api_key: config.api_key,
			base_url: config.base_url,
			api_version: config.api_version,
			defaults: default_options().overlay(config.defaults),
		})
	}

	/// Performs a fuzzy search for `query`.
	///
	/// `options` overlays the configured defaults for this call only; the
	/// stored defaults are never mutated. The query is percent-encoded into
	/// the request path; an empty query is transmitted as-is and surfaces
	/// whatever the provider returns for it (a rejection, not an empty
	/// collection).
	#[instrument(skip(self, options), fields(query = %query))]
	pub async fn search(
		&self,
		query: &str,
		options: Option<GeoSearchOptions>,
	) -> Result<GeoSearchResults, GeoSearchError> {
		let merged = match options {
			Some(overlay) => self.defaults.clone().overlay(overlay),
			None => self.defaults.clone(),
		};

		let url = format!(
			"{}/search/{}/search/{}.json",
			self.base_url,
			self.api_version,
			urlencoding::encode(query)
		);

		debug!(url = %url, "Sending fuzzy search request to TomTom");

		let response = self
			.http_client
			.get(&url)
			.query(&[("key", self.api_key.as_str())])
			.query(&merged)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return GeoSearchError::Timeout;
				}
				error!(error = %e, "Network error during TomTom request");
				GeoSearchError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from TomTom");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();
			error!(status = status_code, body = %body, "TomTom API error");
			return Err(GeoSearchError::Api {
				status: status_code,
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			GeoSearchError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let raw: RawResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse TomTom response");
			GeoSearchError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		let results = map_response(raw)?;

		debug!(
			result_count = results.results.len(),
			"Search completed successfully"
		);

		Ok(results)
	}
}
