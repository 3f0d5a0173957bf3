// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! TomTom fuzzy-search (geocoding/places) API client for Compass.
//!
//! This crate provides a typed Rust client for the TomTom search service,
//! encapsulating HTTP communication, query-parameter defaulting, and
//! normalization of the response into a stable shape, plus two legacy
//! compatibility functions for consumers of the pre-engine API.

pub mod client;
pub mod error;
pub mod legacy;
mod mapping;
pub mod options;
pub mod types;

pub use client::TomTomGeoSearchEngine;
pub use error::GeoSearchError;
pub use legacy::{get_auto_complete_details, get_place_autocomplete, TOMTOM_API_KEY_ENV};
pub use options::{BoundingBox, EntityType, GeoSearchOptions, RelatedPois, VehicleType};
pub use types::{
	GeoPoint, GeoSearchAddress, GeoSearchConfig, GeoSearchResult, GeoSearchResults,
};
