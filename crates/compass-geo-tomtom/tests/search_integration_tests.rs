// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! End-to-end tests for `TomTomGeoSearchEngine` against a mock TomTom
//! server: transmitted query parameters, response mapping, and error
//! surfaces.

use compass_geo_tomtom::{
	GeoSearchConfig, GeoSearchError, GeoSearchOptions, TomTomGeoSearchEngine,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn engine(server: &MockServer) -> TomTomGeoSearchEngine {
	TomTomGeoSearchEngine::new(GeoSearchConfig::new("test-key").with_base_url(server.uri()))
		.unwrap()
}

fn brisbane_body() -> serde_json::Value {
	json!({
		"summary": { "query": "sydney", "numResults": 1 },
		"results": [{
			"type": "Geography",
			"id": "geo-1",
			"score": 3.2,
			"address": {
				"municipality": "Sydney",
				"countrySubdivision": "New South Wales",
				"countryCode": "AU",
				"countryCodeISO3": "AUS",
				"country": "Australia",
				"freeformAddress": "Sydney, New South Wales"
			},
			"position": { "lat": -33.8688, "lon": 151.2093 },
			"viewport": {
				"topLeftPoint": { "lat": -33.5, "lon": 150.5 },
				"btmRightPoint": { "lat": -34.1, "lon": 151.6 }
			}
		}]
	})
}

#[tokio::test]
async fn default_search_transmits_key_limit_and_country() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search/2/search/Sydney.json"))
		.and(query_param("key", "test-key"))
		.and(query_param("limit", "10"))
		.and(query_param("countrySet", "AU"))
		.respond_with(ResponseTemplate::new(200).set_body_json(brisbane_body()))
		.expect(1)
		.mount(&server)
		.await;

	let results = engine(&server).search("Sydney", None).await.unwrap();

	assert_eq!(results.results.len(), 1);
	let first = &results.results[0];
	assert_eq!(first.place_id, "geo-1");
	assert_eq!(first.address.municipality.as_deref(), Some("Sydney"));
	assert_eq!(first.address.country_code_iso3.as_deref(), Some("AUS"));
	assert_eq!(first.address.street_number, None);
	assert_eq!(first.position.lat, -33.8688);
	assert_eq!(first.position.lon, 151.2093);
}

#[tokio::test]
async fn overlay_overrides_limit_but_inherits_country() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search/2/search/Sydney.json"))
		.and(query_param("limit", "1"))
		.and(query_param("countrySet", "AU"))
		.and(query_param("radius", "5000"))
		.respond_with(ResponseTemplate::new(200).set_body_json(brisbane_body()))
		.expect(1)
		.mount(&server)
		.await;

	let options = GeoSearchOptions {
		limit: Some(1),
		radius: Some(5000),
		..Default::default()
	};
	let results = engine(&server)
		.search("Sydney", Some(options))
		.await
		.unwrap();
	assert_eq!(results.results.len(), 1);
}

#[tokio::test]
async fn per_call_overlay_does_not_mutate_stored_defaults() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search/2/search/Sydney.json"))
		.and(query_param("limit", "1"))
		.respond_with(ResponseTemplate::new(200).set_body_json(brisbane_body()))
		.expect(1)
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/search/2/search/Sydney.json"))
		.and(query_param("limit", "10"))
		.respond_with(ResponseTemplate::new(200).set_body_json(brisbane_body()))
		.expect(1)
		.mount(&server)
		.await;

	let engine = engine(&server);
	let overlay = GeoSearchOptions {
		limit: Some(1),
		..Default::default()
	};
	engine.search("Sydney", Some(overlay)).await.unwrap();
	// Second call with no overlay goes back to the configured default.
	engine.search("Sydney", None).await.unwrap();
}

#[tokio::test]
async fn query_is_percent_encoded_into_the_path() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search/2/search/Charlotte%20Street.json"))
		.respond_with(ResponseTemplate::new(200).set_body_json(brisbane_body()))
		.expect(1)
		.mount(&server)
		.await;

	engine(&server)
		.search("Charlotte Street", None)
		.await
		.unwrap();
}

#[tokio::test]
async fn custom_api_version_shapes_the_path() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search/3/search/Sydney.json"))
		.respond_with(ResponseTemplate::new(200).set_body_json(brisbane_body()))
		.expect(1)
		.mount(&server)
		.await;

	let engine = TomTomGeoSearchEngine::new(
		GeoSearchConfig::new("test-key")
			.with_base_url(server.uri())
			.with_api_version("3"),
	)
	.unwrap();
	engine.search("Sydney", None).await.unwrap();
}

#[tokio::test]
async fn empty_results_yield_an_empty_collection() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/search/2/search/nowhere.json"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"summary": { "numResults": 0 },
			"results": []
		})))
		.mount(&server)
		.await;

	let results = engine(&server).search("nowhere", None).await.unwrap();
	assert!(results.results.is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_api_error_with_body_preserved() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(403).set_body_string("Developer inactive"))
		.mount(&server)
		.await;

	let err = engine(&server).search("Sydney", None).await.unwrap_err();
	match err {
		GeoSearchError::Api { status, message } => {
			assert_eq!(status, 403);
			assert_eq!(message, "Developer inactive");
		}
		other => panic!("expected API error, got {other}"),
	}
}

#[tokio::test]
async fn malformed_body_is_an_invalid_response_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
		.mount(&server)
		.await;

	let err = engine(&server).search("Sydney", None).await.unwrap_err();
	assert!(matches!(err, GeoSearchError::InvalidResponse(_)));
}

#[tokio::test]
async fn body_without_results_array_is_a_mapping_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(json!({ "summary": { "numResults": 0 } })),
		)
		.mount(&server)
		.await;

	let err = engine(&server).search("Sydney", None).await.unwrap_err();
	assert!(matches!(err, GeoSearchError::Mapping(_)));
}

#[tokio::test]
async fn result_without_position_is_a_mapping_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"results": [{ "id": "broken-1", "address": {} }]
		})))
		.mount(&server)
		.await;

	let err = engine(&server).search("Sydney", None).await.unwrap_err();
	match err {
		GeoSearchError::Mapping(message) => assert!(message.contains("broken-1")),
		other => panic!("expected mapping error, got {other}"),
	}
}
