//! API documentation handlers
//!
//! Serves an OpenAPI 3.0 description of the claim routes and a Swagger UI
//! page that renders it.

use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};

use domain_claims::{lifecycle::REQUIRED_FIELDS, ClaimStatus};

use crate::AppState;

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Claims Management API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

/// Swagger UI page
pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// OpenAPI document for the claim routes
pub async fn openapi_document(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_spec(state.config.port))
}

/// Builds the OpenAPI document advertising a local server on `port`
pub fn openapi_spec(port: u16) -> Value {
    let statuses: Vec<&str> = ClaimStatus::ALL.iter().map(|s| s.as_str()).collect();
    let claim_ref = json!({ "$ref": "#/components/schemas/Claim" });
    let id_param = json!({
        "in": "path",
        "name": "id",
        "schema": { "type": "integer" },
        "required": true,
        "description": "Claim ID"
    });
    let error_response = |description: &str| {
        json!({
            "description": description,
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
        })
    };

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Claims Management API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "API for managing insurance claims"
        },
        "servers": [
            { "url": format!("http://localhost:{port}"), "description": "Development server" }
        ],
        "tags": [{ "name": "Claims" }],
        "paths": {
            "/claims": {
                "get": {
                    "summary": "Returns the list of claims (optionally filtered by status)",
                    "tags": ["Claims"],
                    "parameters": [{
                        "in": "query",
                        "name": "status",
                        "schema": { "type": "string", "enum": statuses },
                        "required": false,
                        "description": "Filter claims by status"
                    }],
                    "responses": {
                        "200": {
                            "description": "The list of claims",
                            "content": { "application/json": { "schema": { "type": "array", "items": claim_ref } } }
                        },
                        "400": error_response("Invalid status filter")
                    }
                },
                "post": {
                    "summary": "Create a new claim",
                    "tags": ["Claims"],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/NewClaim" } } }
                    },
                    "responses": {
                        "201": {
                            "description": "The created claim",
                            "content": { "application/json": { "schema": claim_ref } }
                        },
                        "400": error_response("A required field is missing or empty")
                    }
                }
            },
            "/claims/{id}": {
                "get": {
                    "summary": "Get a claim by ID",
                    "tags": ["Claims"],
                    "parameters": [id_param],
                    "responses": {
                        "200": {
                            "description": "The claim",
                            "content": { "application/json": { "schema": claim_ref } }
                        },
                        "404": error_response("Claim not found")
                    }
                },
                "patch": {
                    "summary": "Update a claim status",
                    "tags": ["Claims"],
                    "parameters": [id_param],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": { "status": { "type": "string", "enum": statuses } },
                                    "required": ["status"]
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "The updated claim with new status",
                            "content": { "application/json": { "schema": claim_ref } }
                        },
                        "400": error_response("Invalid status or status transition"),
                        "404": error_response("Claim not found")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "NewClaim": {
                    "type": "object",
                    "required": REQUIRED_FIELDS,
                    "properties": {
                        "policyNumber": { "type": "string", "description": "Policy number associated with the claim" },
                        "claimantName": { "type": "string", "description": "Name of the claimant" },
                        "damageDate": { "type": "string", "format": "date", "description": "Date of damage (YYYY-MM-DD)" },
                        "lossDescription": { "type": "string", "description": "Description of the loss" }
                    }
                },
                "Claim": {
                    "allOf": [
                        { "$ref": "#/components/schemas/NewClaim" },
                        {
                            "type": "object",
                            "properties": {
                                "id": { "type": "integer", "description": "The auto-generated ID of the claim" },
                                "status": { "type": "string", "enum": statuses, "default": "OPEN" },
                                "createdAt": { "type": "string", "format": "date-time", "description": "The date the claim was created" }
                            }
                        }
                    ]
                },
                "Error": {
                    "type": "object",
                    "required": ["error", "message"],
                    "properties": {
                        "error": { "type": "string" },
                        "message": { "type": "string" },
                        "details": { "type": "array", "items": { "type": "string" } }
                    }
                }
            }
        }
    })
}
