//! HTTP tests for the claims API
//!
//! Each test builds its own router over its own store, so tests never share
//! claims.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum_test::TestServer;
use proptest::prelude::*;
use serde_json::{json, Value};

use domain_claims::ClaimStatus;
use interface_api::{claim_service, config::ApiConfig, create_router};
use test_utils::*;

fn server() -> TestServer {
    TestServer::new(create_router(ServiceFixtures::empty(), ApiConfig::default()))
        .expect("test server")
}

fn seeded_server() -> TestServer {
    TestServer::new(create_router(ServiceFixtures::seeded(), ApiConfig::default()))
        .expect("test server")
}

async fn create(server: &TestServer, payload: &Value) -> Value {
    let response = server.post("/claims").json(payload).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

async fn patch_status(server: &TestServer, id: &Value, status: &str) -> (StatusCode, Value) {
    let response = server
        .patch(&format!("/claims/{id}"))
        .json(&json!({ "status": status }))
        .await;
    (response.status_code(), response.json::<Value>())
}

// ============================================================================
// Create
// ============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_open_claim_and_fetches_identically() {
        let server = server();
        let payload = ClaimPayloadBuilder::new().build();

        let created = create(&server, &payload).await;
        assert_claim_shape(&created);
        assert_claim_matches_payload(&created, &payload);
        assert_eq!(created["status"], "OPEN");
        assert_eq!(created["id"], 1);

        let fetched = server.get(&format!("/claims/{}", created["id"])).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Value>(), created);
    }

    #[tokio::test]
    async fn test_ids_increase_across_creations() {
        let server = server();
        let first = create(&server, &ClaimPayloadBuilder::new().build()).await;
        let second = create(&server, &ClaimPayloadBuilder::new().build()).await;
        assert!(second["id"].as_u64() > first["id"].as_u64());
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_naming_all_fields() {
        let server = server();
        let payload = ClaimPayloadBuilder::new().without("claimantName").build();

        let response = server.post("/claims").json(&payload).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<Value>();
        assert_error_body(&body, "validation_error", "required");
        assert_names_required_fields(&body);
        assert_eq!(body["details"], json!(["claimantName"]));
    }

    #[tokio::test]
    async fn test_each_empty_field_is_rejected() {
        let server = server();
        for field in ["policyNumber", "claimantName", "damageDate", "lossDescription"] {
            let payload = ClaimPayloadBuilder::new().with_value(field, json!("")).build();
            let response = server.post("/claims").json(&payload).await;
            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "empty {field}");
        }
        assert!(server.get("/claims").await.json::<Vec<Value>>().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_fields_are_not_echoed() {
        let server = server();
        let payload = ClaimPayloadBuilder::new()
            .with_value("unknownField", json!("ignored"))
            .with_value("status", json!("PAID"))
            .with_value("id", json!(77))
            .build();

        let created = create(&server, &payload).await;
        assert_claim_shape(&created);
        assert_eq!(created["status"], "OPEN");
        assert_eq!(created["id"], 1);
    }

    #[tokio::test]
    async fn test_unicode_roundtrip() {
        let server = server();
        let payload = PayloadFixtures::unicode();
        let created = create(&server, &payload).await;
        assert_claim_matches_payload(&created, &payload);
    }

    #[tokio::test]
    async fn test_free_form_damage_date_is_accepted() {
        let server = server();
        let payload = ClaimPayloadBuilder::new().with_damage_date("01/11/2025").build();
        let created = create(&server, &payload).await;
        assert_eq!(created["damageDate"], "01/11/2025");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let server = server();
        let response = server
            .post("/claims")
            .content_type("application/json")
            .bytes(Bytes::from_static(b"{\"policyNumber\": "))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_error_body(&response.json::<Value>(), "bad_request", "Malformed");
    }

    #[tokio::test]
    async fn test_absent_body_is_bad_request() {
        let server = server();
        let response = server.post("/claims").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_names_required_fields(&response.json::<Value>());
    }

    #[tokio::test]
    async fn test_non_object_body_is_bad_request() {
        let server = server();
        let response = server.post("/claims").json(&json!(["PN-1"])).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_json_content_type_is_treated_as_empty() {
        let server = server();
        let body = PayloadFixtures::valid().to_string();
        let response = server.post("/claims").text(body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

// ============================================================================
// Get
// ============================================================================

mod get_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let server = seeded_server();
        let response = server.get("/claims/999999").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_error_body(&response.json::<Value>(), "not_found", "Claim not found");
    }

    #[tokio::test]
    async fn test_boundary_ids_are_not_found() {
        let server = seeded_server();
        for raw in ["0", "-1", "abc", "NaN", "%20"] {
            let response = server.get(&format!("/claims/{raw}")).await;
            assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "id {raw}");
        }
    }

    #[tokio::test]
    async fn test_lenient_integer_prefix() {
        let server = seeded_server();
        let response = server.get("/claims/1.5").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["id"], 1);

        let response = server.get("/claims/2abc").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["policyNumber"], "PN-1002");
    }
}

// ============================================================================
// List
// ============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let server = seeded_server();
        let claims = server.get("/claims").await.json::<Vec<Value>>();
        let ids: Vec<_> = claims.iter().map(|c| c["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_filter_by_each_status() {
        let server = seeded_server();
        for status in ClaimStatus::ALL {
            let response = server
                .get("/claims")
                .add_query_param("status", status.as_str())
                .await;
            response.assert_status_ok();
            let claims = response.json::<Vec<Value>>();
            assert_eq!(claims.len(), 1);
            assert!(claims.iter().all(|c| c["status"] == status.as_str()));
        }
    }

    #[tokio::test]
    async fn test_created_claim_appears_in_open_view_only() {
        let server = server();
        let created = create(&server, &ClaimPayloadBuilder::new().build()).await;

        let open = server.get("/claims").add_query_param("status", "OPEN").await;
        assert!(open.json::<Vec<Value>>().iter().any(|c| c["id"] == created["id"]));

        let paid = server.get("/claims").add_query_param("status", "PAID").await;
        assert!(paid.json::<Vec<Value>>().is_empty());
    }

    #[tokio::test]
    async fn test_bogus_filter_is_bad_request() {
        let server = seeded_server();
        let response = server.get("/claims").add_query_param("status", "BOGUS").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_error_body(&response.json::<Value>(), "validation_error", "Invalid status filter");
    }

    #[tokio::test]
    async fn test_lowercase_filter_is_bad_request() {
        let server = seeded_server();
        let response = server.get("/claims").add_query_param("status", "open").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_repeated_filter_is_bad_request() {
        let server = seeded_server();
        let response = server
            .get("/claims")
            .add_query_param("status", "OPEN")
            .add_query_param("status", "PAID")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_filter_lists_everything() {
        let server = seeded_server();
        let response = server.get("/claims").add_query_param("status", "").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Value>>().len(), 4);
    }
}

// ============================================================================
// Update
// ============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_full_lifecycle_scenario() {
        let server = server();
        let created = create(&server, &PayloadFixtures::scenario()).await;
        assert_eq!(created["status"], "OPEN");
        let id = &created["id"];

        for status in ["IN_REVIEW", "APPROVED", "PAID"] {
            let (code, body) = patch_status(&server, id, status).await;
            assert_eq!(code, StatusCode::OK);
            assert_eq!(body["status"], status);
            assert_eq!(body["createdAt"], created["createdAt"]);
            assert_claim_matches_payload(&body, &created);
        }

        let (code, body) = patch_status(&server, id, "APPROVED").await;
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_error_body(&body, "invalid_transition", "already in final status PAID");
    }

    #[tokio::test]
    async fn test_skipping_a_step_is_rejected() {
        let server = server();
        let created = create(&server, &ClaimPayloadBuilder::new().build()).await;

        let (code, body) = patch_status(&server, &created["id"], "APPROVED").await;
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_error_body(&body, "invalid_transition", "from OPEN to APPROVED");

        let fetched = server.get(&format!("/claims/{}", created["id"])).await;
        assert_eq!(fetched.json::<Value>()["status"], "OPEN");
    }

    #[tokio::test]
    async fn test_same_status_is_rejected() {
        let server = server();
        let created = create(&server, &ClaimPayloadBuilder::new().build()).await;
        let (code, _) = patch_status(&server, &created["id"], "OPEN").await;
        assert_eq!(code, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_empty_or_invalid_status() {
        let server = server();
        let created = create(&server, &ClaimPayloadBuilder::new().build()).await;
        let path = format!("/claims/{}", created["id"]);

        for body in [json!({}), json!({ "status": "" }), json!({ "status": "DONE" }), json!({ "status": 1 })] {
            let response = server.patch(&path).json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_error_body(&response.json::<Value>(), "validation_error", "Valid status is required");
        }
    }

    #[tokio::test]
    async fn test_unknown_update_fields_are_ignored() {
        let server = server();
        let created = create(&server, &ClaimPayloadBuilder::new().build()).await;
        let response = server
            .patch(&format!("/claims/{}", created["id"]))
            .json(&json!({ "status": "IN_REVIEW", "claimantName": "Someone Else" }))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["claimantName"], created["claimantName"]);
    }

    #[tokio::test]
    async fn test_nonexistent_claim_is_not_found() {
        let server = server();
        let (code, _) = patch_status(&server, &json!(999999), "IN_REVIEW").await;
        assert_eq!(code, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_not_found_wins_over_bad_status() {
        let server = server();
        for body in [json!({}), json!({ "status": "BOGUS" })] {
            let response = server.patch("/claims/999999").json(&body).await;
            response.assert_status(StatusCode::NOT_FOUND);
        }
        let response = server.patch("/claims/abc").json(&json!({ "status": "BOGUS" })).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_seeded_paid_claim_is_final() {
        let server = seeded_server();
        let (code, body) = patch_status(&server, &json!(4), "PAID").await;
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_error_body(&body, "invalid_transition", "final");
    }
}

// ============================================================================
// Ambient Routes
// ============================================================================

mod ambient_route_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_is_not_routed() {
        let server = seeded_server();
        let response = server.delete("/claims/1").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_health_reports_claim_count() {
        let server = seeded_server();
        let response = server.get("/health").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["claims"], 4);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let server = server();
        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["openapi"], "3.0.0");
        assert!(body["paths"]["/claims/{id}"]["patch"].is_object());

        let page = server.get("/api-docs").await;
        page.assert_status_ok();
        assert!(page.text().contains("swagger-ui"));
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let server = server();
        let response = server.get("/claims").await;
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_seeding_follows_config() {
        let config = ApiConfig {
            seed_sample_claims: false,
            ..ApiConfig::default()
        };
        let server = TestServer::new(create_router(claim_service(&config), config)).expect("test server");
        assert!(server.get("/claims").await.json::<Vec<Value>>().is_empty());

        let config = ApiConfig::default();
        let server = TestServer::new(create_router(claim_service(&config), config)).expect("test server");
        let created = create(&server, &ClaimPayloadBuilder::new().build()).await;
        assert_eq!(created["id"], 5);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_falsy_field_is_rejected(field in 0usize..4, value in falsy_value_strategy()) {
        let key = ["policyNumber", "claimantName", "damageDate", "lossDescription"][field];
        let payload = ClaimPayloadBuilder::new().with_value(key, value).build();
        let status = block_on(async {
            server().post("/claims").json(&payload).await.status_code()
        });
        prop_assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn prop_non_empty_text_is_stored_verbatim(text in accepted_text_strategy()) {
        let payload = ClaimPayloadBuilder::new().with_loss_description(text.clone()).build();
        let created = block_on(async { create(&server(), &payload).await });
        prop_assert_eq!(created["lossDescription"].as_str(), Some(text.as_str()));
    }

    #[test]
    fn prop_patch_succeeds_iff_designated_successor(
        depth in lifecycle_depth_strategy(),
        target in claim_status_strategy(),
    ) {
        let current = ClaimStatus::ALL[depth];
        let code = block_on(async {
            let server = server();
            let created = create(&server, &ClaimPayloadBuilder::new().build()).await;
            for step in &ClaimStatus::ALL[1..=depth] {
                let (code, _) = patch_status(&server, &created["id"], step.as_str()).await;
                assert_eq!(code, StatusCode::OK);
            }
            patch_status(&server, &created["id"], target.as_str()).await.0
        });

        let expected = if current.next() == Some(target) {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };
        prop_assert_eq!(code, expected);
    }

    #[test]
    fn prop_unknown_status_text_is_rejected(text in unknown_status_strategy()) {
        let code = block_on(async {
            let server = server();
            let created = create(&server, &ClaimPayloadBuilder::new().build()).await;
            patch_status(&server, &created["id"], &text).await.0
        });
        prop_assert_eq!(code, StatusCode::BAD_REQUEST);
    }
}
