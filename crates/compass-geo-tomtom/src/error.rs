// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the TomTom geo-search client.

use thiserror::Error;

/// Errors that can occur when interacting with the TomTom search API.
#[derive(Debug, Error)]
pub enum GeoSearchError {
	/// Client configuration rejected at construction (e.g., empty API key).
	#[error("Invalid configuration: {0}")]
	Configuration(String),

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// TomTom returned a non-success status. The response body is preserved
	/// for inspection; the call is not retried.
	#[error("TomTom API error: {status} - {message}")]
	Api { status: u16, message: String },

	/// The response body was not valid JSON for the TomTom search schema.
	#[error("Invalid response from TomTom: {0}")]
	InvalidResponse(String),

	/// The response parsed as JSON but is structurally incomplete
	/// (missing `results`, or a result missing `id`/`address`/`position`).
	#[error("Failed to map TomTom response: {0}")]
	Mapping(String),
}
