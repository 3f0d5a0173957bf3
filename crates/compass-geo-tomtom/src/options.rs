// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Typed query parameters for the TomTom fuzzy-search endpoint.
//!
//! Every field is optional; unset fields are not transmitted. Values pass
//! through verbatim — the client performs no validation of value domains
//! (e.g., radius <= 0 is sent as-is and ignored upstream).

use std::fmt;

use serde::{Serialize, Serializer};

/// Search options, serialized as query parameters with TomTom's wire names.
///
/// Set-valued parameters (`countrySet`, `entityTypeSet`, `vehicleTypeSet`)
/// serialize comma-joined. An explicitly empty set behaves like any other
/// supplied value during an overlay (it replaces an inherited restriction)
/// but is not transmitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoSearchOptions {
	/// Bounding box to constrain results. Merged as a whole unit during an
	/// overlay, never corner-by-corner.
	#[serde(flatten)]
	pub bounding_box: Option<BoundingBox>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub brand_set: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category_set: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub connector_set: Option<String>,
	/// ISO 3166-1 alpha-2 or alpha-3 country codes limiting the search.
	#[serde(
		skip_serializing_if = "is_unset_or_empty",
		serialize_with = "join_csv"
	)]
	pub country_set: Option<Vec<String>>,
	#[serde(
		skip_serializing_if = "is_unset_or_empty",
		serialize_with = "join_csv"
	)]
	pub entity_type_set: Option<Vec<EntityType>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extended_postal_codes_for: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fuel_set: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub geo_bias: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub idx_set: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub language: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub latitude: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub limit: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub longitude: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mapcodes: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_fuzzy_level: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_fuzzy_level: Option<u32>,
	#[serde(rename = "maxPowerKW", skip_serializing_if = "Option::is_none")]
	pub max_power_kw: Option<f64>,
	#[serde(rename = "minPowerKW", skip_serializing_if = "Option::is_none")]
	pub min_power_kw: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub opening_hours: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub radius: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub related_pois: Option<RelatedPois>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub time_zone: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub typeahead: Option<bool>,
	#[serde(
		skip_serializing_if = "is_unset_or_empty",
		serialize_with = "join_csv"
	)]
	pub vehicle_type_set: Option<Vec<VehicleType>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub view: Option<String>,
}

impl GeoSearchOptions {
	/// Shallow field-level merge: fields supplied in `other` replace the
	/// corresponding fields of `self`; fields `other` leaves unset are
	/// inherited. Nothing here merges recursively — the bounding box is
	/// replaced as a whole unit.
	#[must_use]
	pub fn overlay(self, other: Self) -> Self {
		Self {
			bounding_box: other.bounding_box.or(self.bounding_box),
			brand_set: other.brand_set.or(self.brand_set),
			category_set: other.category_set.or(self.category_set),
			connector_set: other.connector_set.or(self.connector_set),
			country_set: other.country_set.or(self.country_set),
			entity_type_set: other.entity_type_set.or(self.entity_type_set),
			extended_postal_codes_for: other
				.extended_postal_codes_for
				.or(self.extended_postal_codes_for),
			fuel_set: other.fuel_set.or(self.fuel_set),
			geo_bias: other.geo_bias.or(self.geo_bias),
			idx_set: other.idx_set.or(self.idx_set),
			language: other.language.or(self.language),
			latitude: other.latitude.or(self.latitude),
			limit: other.limit.or(self.limit),
			longitude: other.longitude.or(self.longitude),
			mapcodes: other.mapcodes.or(self.mapcodes),
			max_fuzzy_level: other.max_fuzzy_level.or(self.max_fuzzy_level),
			min_fuzzy_level: other.min_fuzzy_level.or(self.min_fuzzy_level),
			max_power_kw: other.max_power_kw.or(self.max_power_kw),
			min_power_kw: other.min_power_kw.or(self.min_power_kw),
			offset: other.offset.or(self.offset),
			opening_hours: other.opening_hours.or(self.opening_hours),
			radius: other.radius.or(self.radius),
			related_pois: other.related_pois.or(self.related_pois),
			time_zone: other.time_zone.or(self.time_zone),
			typeahead: other.typeahead.or(self.typeahead),
			vehicle_type_set: other.vehicle_type_set.or(self.vehicle_type_set),
			view: other.view.or(self.view),
		}
	}
}

/// Bounding box constraint. Both corners are position-pair strings
/// (`"lat,lon"`); TomTom expects them to be supplied together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub top_left: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bottom_right: Option<String>,
}

/// Geography entity types recognized by `entityTypeSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
	Country,
	CountrySubdivision,
	CountrySecondarySubdivision,
	CountryTertiarySubdivision,
	Municipality,
	MunicipalitySubdivision,
	MunicipalitySecondarySubdivision,
	Neighbourhood,
	PostalCodeArea,
}

impl EntityType {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Country => "Country",
			Self::CountrySubdivision => "CountrySubdivision",
			Self::CountrySecondarySubdivision => "CountrySecondarySubdivision",
			Self::CountryTertiarySubdivision => "CountryTertiarySubdivision",
			Self::Municipality => "Municipality",
			Self::MunicipalitySubdivision => "MunicipalitySubdivision",
			Self::MunicipalitySecondarySubdivision => "MunicipalitySecondarySubdivision",
			Self::Neighbourhood => "Neighbourhood",
			Self::PostalCodeArea => "PostalCodeArea",
		}
	}
}

impl fmt::Display for EntityType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Vehicle types recognized by `vehicleTypeSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
	Car,
	Truck,
}

impl VehicleType {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Car => "Car",
			Self::Truck => "Truck",
		}
	}
}

impl fmt::Display for VehicleType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Related POI return mode for `relatedPois`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedPois {
	Off,
	Child,
	Parent,
	All,
}

fn is_unset_or_empty<T>(values: &Option<Vec<T>>) -> bool {
	values.as_ref().is_none_or(Vec::is_empty)
}

fn join_csv<S, T>(values: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
	T: fmt::Display,
{
	match values {
		Some(values) => {
			let joined = values
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(",");
			serializer.serialize_str(&joined)
		}
		None => serializer.serialize_none(),
	}
}
