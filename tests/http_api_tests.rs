//! End-to-end tests for the HTTP surface
//!
//! These tests run the full router over a fresh in-memory store and verify
//! the documented contract of every endpoint: payload shapes, status codes,
//! and the `{ "message": ... }` error body.

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;

use lexmatch::prelude::*;

fn fixture(name: &str, area: PracticeArea, rating: f64, rate: u32) -> NewLawyer {
    NewLawyer {
        name: name.to_string(),
        profile_image: "https://example.com/p.jpg".to_string(),
        bio: format!("{} practice", area.label()),
        practice_areas: vec![area],
        hourly_rate: rate,
        rating,
        review_count: 12,
        location: "Springfield, IL".to_string(),
        experience_level: ExperienceLevel::Mid,
        available_for_consultation: true,
        featured: false,
        contact_email: "contact@example.com".to_string(),
        contact_phone: "+12175550100".to_string(),
        address: "1 Capitol Ave".to_string(),
    }
}

/// A server over four known records (ids 1-4).
async fn test_server() -> (TestServer, Arc<InMemoryLawyerStore>) {
    let store = Arc::new(InMemoryLawyerStore::new());

    let mut alice = fixture("Alice Grant", PracticeArea::FamilyLaw, 4.8, 250);
    alice.featured = true;
    let mut bob = fixture("Bob Tanaka", PracticeArea::CriminalDefense, 3.5, 150);
    bob.available_for_consultation = false;
    bob.experience_level = ExperienceLevel::Junior;
    let mut carol = fixture("Carol Reyes", PracticeArea::TaxLaw, 4.2, 300);
    carol.experience_level = ExperienceLevel::Senior;
    carol.location = "Madison, WI".to_string();
    let dan = fixture("Dan Whitfield", PracticeArea::FamilyLaw, 2.9, 90);

    for record in [alice, bob, carol, dan] {
        store.create(record).await.expect("fixture create");
    }

    let server = TestServer::try_new(app(AppState::new(store.clone()))).expect("test server");
    (server, store)
}

fn names(body: &[Value]) -> Vec<&str> {
    body.iter()
        .map(|l| l["name"].as_str().unwrap_or_default())
        .collect()
}

// =============================================================================
// Listing and detail
// =============================================================================

#[tokio::test]
async fn list_returns_all_records_in_insertion_order() {
    let (server, _) = test_server().await;

    let response = server.get("/lawyers").await;
    response.assert_status_ok();

    let body: Vec<Value> = response.json();
    assert_eq!(
        names(&body),
        vec!["Alice Grant", "Bob Tanaka", "Carol Reyes", "Dan Whitfield"]
    );
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[0]["hourlyRate"], 250);
    assert_eq!(body[0]["practiceAreas"][0], "family_law");
}

#[tokio::test]
async fn detail_by_id() {
    let (server, _) = test_server().await;

    let response = server.get("/lawyers/3").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Carol Reyes");
    assert_eq!(body["experienceLevel"], "senior");
}

#[tokio::test]
async fn detail_rejects_malformed_ids() {
    let (server, _) = test_server().await;

    for path in ["/lawyers/abc", "/lawyers/0", "/lawyers/-1", "/lawyers/1.5"] {
        let response = server.get(path).await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid lawyer ID", "path {}", path);
    }
}

#[tokio::test]
async fn detail_missing_id_is_404() {
    let (server, _) = test_server().await;

    let response = server.get("/lawyers/999").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["message"], "Lawyer not found");
}

// =============================================================================
// Single-dimension filters
// =============================================================================

#[tokio::test]
async fn filter_by_practice_area() {
    let (server, _) = test_server().await;

    let response = server.get("/lawyers/practice/family_law").await;
    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Alice Grant", "Dan Whitfield"]);

    let response = server.get("/lawyers/practice/space_law").await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid practice area");
}

#[tokio::test]
async fn filter_by_rating_floor() {
    let (server, _) = test_server().await;

    let response = server.get("/lawyers/rating/4").await;
    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Alice Grant", "Carol Reyes"]);

    for bad in ["0.5", "5.5", "abc"] {
        let response = server.get(&format!("/lawyers/rating/{}", bad)).await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid rating. Must be between 1 and 5");
    }
}

#[tokio::test]
async fn filter_by_price_band() {
    let (server, _) = test_server().await;

    let response = server.get("/lawyers/price?min=100&max=260").await;
    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Alice Grant", "Bob Tanaka"]);

    // Defaults are min=0, max=500: every fixture is inside the band.
    let response = server.get("/lawyers/price").await;
    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 4);

    for bad in [
        "/lawyers/price?min=abc",
        "/lawyers/price?max=abc",
        "/lawyers/price?min=-5",
        "/lawyers/price?max=0",
        "/lawyers/price?min=300&max=200",
    ] {
        let response = server.get(bad).await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid price range", "path {}", bad);
    }
}

#[tokio::test]
async fn filter_by_experience_level() {
    let (server, _) = test_server().await;

    let response = server.get("/lawyers/experience/senior").await;
    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Carol Reyes"]);

    let response = server.get("/lawyers/experience/partner").await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid experience level");
}

#[tokio::test]
async fn available_and_featured_subsets() {
    let (server, _) = test_server().await;

    let response = server.get("/lawyers/available").await;
    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(
        names(&body),
        vec!["Alice Grant", "Carol Reyes", "Dan Whitfield"]
    );

    let response = server.get("/lawyers/featured").await;
    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Alice Grant"]);
}

#[tokio::test]
async fn free_text_search() {
    let (server, _) = test_server().await;

    for query in ["alice", "ALICE", "Alice Grant"] {
        let response = server
            .get(&format!("/lawyers/search?q={}", query.replace(' ', "%20")))
            .await;
        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(names(&body), vec!["Alice Grant"], "query {:?}", query);
    }

    // Location and raw practice-area tags are part of the search surface.
    let response = server.get("/lawyers/search?q=madison").await;
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Carol Reyes"]);

    let response = server.get("/lawyers/search?q=tax_law").await;
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Carol Reyes"]);

    for bad in ["/lawyers/search", "/lawyers/search?q=", "/lawyers/search?q=%20%20"] {
        let response = server.get(bad).await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "Search query is required", "path {}", bad);
    }
}

// =============================================================================
// Composite filter
// =============================================================================

#[tokio::test]
async fn composite_filter_conjoins_dimensions() {
    let (server, _) = test_server().await;

    let response = server
        .post("/lawyers/filter")
        .json(&json!({
            "practiceAreas": ["family_law", "tax_law"],
            "minRating": 4.0,
            "onlyAvailable": true
        }))
        .await;
    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Alice Grant", "Carol Reyes"]);
}

#[tokio::test]
async fn composite_filter_with_empty_body_returns_everything() {
    let (server, _) = test_server().await;

    let response = server.post("/lawyers/filter").json(&json!({})).await;
    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 4);
}

#[tokio::test]
async fn composite_filter_rejects_schema_violations() {
    let (server, _) = test_server().await;

    // Unknown enum member in the practice-area array.
    let response = server
        .post("/lawyers/filter")
        .json(&json!({ "practiceAreas": ["space_law"] }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid filter criteria");
    assert!(body["details"].is_string());

    // Out-of-range rating floor.
    let response = server
        .post("/lawyers/filter")
        .json(&json!({ "minRating": 0.5 }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid rating. Must be between 1 and 5");
}

// =============================================================================
// Catalog administration
// =============================================================================

#[tokio::test]
async fn create_assigns_next_id_and_round_trips() {
    let (server, _) = test_server().await;

    let response = server
        .post("/lawyers")
        .json(&json!({
            "name": "Eve Laurent",
            "profileImage": "https://example.com/eve.jpg",
            "bio": "Cross-border transactions",
            "practiceAreas": ["business_law"],
            "hourlyRate": 410,
            "rating": 4.9,
            "reviewCount": 3,
            "location": "New Orleans, LA",
            "experienceLevel": "senior",
            "contactEmail": "eve@example.com",
            "contactPhone": "+15045550177",
            "address": "201 St Charles Ave"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["id"], 5);
    assert_eq!(created["availableForConsultation"], true);

    let response = server.get("/lawyers/5").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Eve Laurent");
}

#[tokio::test]
async fn create_rejects_invalid_payloads_without_mutation() {
    let (server, store) = test_server().await;

    let response = server
        .post("/lawyers")
        .json(&json!({
            "name": "No Areas",
            "profileImage": "not a url",
            "bio": "",
            "practiceAreas": [],
            "hourlyRate": 0,
            "rating": 6.0,
            "reviewCount": 0,
            "location": "Nowhere",
            "experienceLevel": "junior",
            "contactEmail": "broken",
            "contactPhone": "123",
            "address": ""
        }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    let fields = body["details"]["fields"].as_array().expect("field details");
    assert!(fields.len() >= 4);

    assert_eq!(store.list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn patch_merges_partial_updates() {
    let (server, _) = test_server().await;

    let response = server
        .patch("/lawyers/2")
        .json(&json!({ "hourlyRate": 175, "availableForConsultation": true }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["hourlyRate"], 175);
    assert_eq!(body["availableForConsultation"], true);
    assert_eq!(body["name"], "Bob Tanaka");

    let response = server.patch("/lawyers/999").json(&json!({})).await;
    response.assert_status_not_found();

    let response = server
        .patch("/lawyers/2")
        .json(&json!({ "rating": 9.0 }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn delete_then_lookup_is_404_and_delete_again_too() {
    let (server, _) = test_server().await;

    let response = server.delete("/lawyers/4").await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server.get("/lawyers/4").await;
    response.assert_status_not_found();

    let response = server.delete("/lawyers/4").await;
    response.assert_status_not_found();

    // Ids are not reused: the next create continues the sequence.
    let response = server
        .post("/lawyers")
        .json(&serde_json::to_value(fixture("Frank Young", PracticeArea::RealEstateLaw, 4.0, 120)).unwrap())
        .await;
    let created: Value = response.json();
    assert_eq!(created["id"], 5);
}

// =============================================================================
// End-to-end browse scenario
// =============================================================================

#[tokio::test]
async fn filter_then_sort_then_paginate_over_the_api() {
    let store = Arc::new(InMemoryLawyerStore::new());
    for (name, rating, rate) in [("Five", 5.0, 100), ("Three", 3.0, 200), ("Four", 4.0, 150)] {
        let mut record = fixture(name, PracticeArea::EmploymentLaw, rating, rate);
        record.location = "Columbus, OH".to_string();
        store.create(record).await.unwrap();
    }
    let server = TestServer::try_new(app(AppState::new(store))).unwrap();

    let response = server
        .post("/lawyers/filter")
        .json(&json!({ "minRating": 4.0 }))
        .await;
    response.assert_status_ok();
    let filtered: Vec<Lawyer> = response.json();
    let ratings: Vec<f64> = filtered.iter().map(|l| l.rating).collect();
    assert_eq!(ratings, vec![5.0, 4.0]);

    let mut sorted = filtered;
    sort_lawyers(&mut sorted, SortKey::parse("rating-high"));

    let page1 = paginate(sorted.clone(), 1, 1);
    assert_eq!(page1.items[0].rating, 5.0);
    let page2 = paginate(sorted.clone(), 2, 1);
    assert_eq!(page2.items[0].rating, 4.0);
    let page3 = paginate(sorted, 3, 1);
    assert!(page3.items.is_empty());
    assert_eq!(page3.meta.total_pages, 2);
}
