// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Raw TomTom wire types and mapping into the stable output shape.
//!
//! Only the subset of the fuzzy-search response we carry forward is
//! modeled; provider-only metadata (type, score, info, poi, viewport,
//! entryPoints) and the summary block are ignored on deserialization. A
//! structurally incomplete body (no `results` array, or a result missing
//! `id`/`address`/`position`) maps to [`GeoSearchError::Mapping`] rather
//! than defaulting.

use serde::Deserialize;

use crate::error::GeoSearchError;
use crate::types::{GeoPoint, GeoSearchAddress, GeoSearchResult, GeoSearchResults};

#[derive(Debug, Deserialize)]
pub(crate) struct RawResponse {
	pub results: Option<Vec<RawResult>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawResult {
	pub id: Option<String>,
	pub address: Option<RawAddress>,
	pub position: Option<GeoPoint>,
}

/// Raw provider address. Every field is optional on the wire; unknown
/// provider fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAddress {
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

/// Maps a raw address into the fixed-field normalized record. Present
/// fields copy through verbatim; absent fields become `None`. Pure and
/// infallible: missing input fields are expected, not exceptional.
pub(crate) fn normalize_address(raw: RawAddress) -> GeoSearchAddress {
	GeoSearchAddress {
		country: raw.country,
		country_code: raw.country_code,
		country_code_iso3: raw.country_code_iso3,
		country_secondary_subdivision: raw.country_secondary_subdivision,
		country_subdivision: raw.country_subdivision,
		country_subdivision_code: raw.country_subdivision_code,
		country_subdivision_name: raw.country_subdivision_name,
		country_tertiary_subdivision: raw.country_tertiary_subdivision,
		extended_postal_code: raw.extended_postal_code,
		freeform_address: raw.freeform_address,
		local_name: raw.local_name,
		municipality: raw.municipality,
		municipality_secondary_subdivision: raw.municipality_secondary_subdivision,
		municipality_subdivision: raw.municipality_subdivision,
		neighbourhood: raw.neighbourhood,
		postal_code: raw.postal_code,
		street_name: raw.street_name,
		street_number: raw.street_number,
	}
}

/// Maps one raw result. The id passes through verbatim as the opaque
/// `placeId`; the position is carried without unit conversion.
pub(crate) fn map_result(raw: RawResult) -> Result<GeoSearchResult, GeoSearchError> {
	let place_id = raw
		.id
		.ok_or_else(|| GeoSearchError::Mapping("result is missing id".to_string()))?;
	let address = raw.address.ok_or_else(|| {
		GeoSearchError::Mapping(format!("result {place_id} is missing address"))
	})?;
	let position = raw.position.ok_or_else(|| {
		GeoSearchError::Mapping(format!("result {place_id} is missing position"))
	})?;

	Ok(GeoSearchResult {
		place_id,
		address: normalize_address(address),
		position,
	})
}

/// Maps a full raw response, preserving provider order. An empty results
/// list is a valid empty collection; an absent `results` key is not.
pub(crate) fn map_response(raw: RawResponse) -> Result<GeoSearchResults, GeoSearchError> {
	let results = raw.results.ok_or_else(|| {
		GeoSearchError::Mapping("response is missing the results array".to_string())
	})?;

	let results = results
		.into_iter()
		.map(map_result)
		.collect::<Result<Vec<_>, _>>()?;

	Ok(GeoSearchResults { results })
}
