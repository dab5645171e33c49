//! API documentation endpoints.

use axum::{
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};

pub async fn api_docs() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Spoken Time API</title>
    <style>
        body { font-family: Arial, sans-serif; padding: 2rem; }
        .container { max-width: 640px; margin: 0 auto; }
        code { background: #f4f4f4; padding: 0 0.25rem; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Spoken Time API v1</h1>
        <p>Converts 24-hour clock times into spoken British English.</p>
        <ul>
            <li><code>GET /api/v1/spoken-time?time=HH:mm</code></li>
            <li><code>GET /api/v1/spoken-time/{hour}/{minute}</code></li>
            <li><code>POST /api/v1/spoken-time/upload</code> (multipart field <code>file</code>)</li>
        </ul>
        <p><a href="/api/v1/openapi.json">View OpenAPI Specification</a></p>
    </div>
</body>
</html>
"#,
    )
}

pub async fn openapi_spec() -> impl IntoResponse {
    Json(openapi_document())
}

fn locale_param() -> Value {
    json!({
        "name": "locale",
        "in": "query",
        "required": false,
        "schema": { "type": "string", "example": "british" }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Error" } }
        }
    })
}

/// OpenAPI 3.0 description of the public endpoints.
pub fn openapi_document() -> Value {
    let spoken = json!({
        "description": "Spoken form of the time",
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/SpokenTime" } }
        }
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Spoken Time API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Converts 24-hour clock times into spoken British English"
        },
        "paths": {
            "/api/v1/spoken-time": {
                "get": {
                    "summary": "Convert an HH:mm time",
                    "parameters": [
                        {
                            "name": "time",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "string", "example": "07:30" }
                        },
                        locale_param()
                    ],
                    "responses": {
                        "200": spoken.clone(),
                        "400": error_response("invalid_time")
                    }
                }
            },
            "/api/v1/spoken-time/{hour}/{minute}": {
                "get": {
                    "summary": "Convert an hour and minute",
                    "parameters": [
                        { "name": "hour", "in": "path", "required": true, "schema": { "type": "integer" } },
                        { "name": "minute", "in": "path", "required": true, "schema": { "type": "integer" } },
                        locale_param()
                    ],
                    "responses": {
                        "200": spoken,
                        "400": error_response("invalid_time")
                    }
                }
            },
            "/api/v1/spoken-time/upload": {
                "post": {
                    "summary": "Convert every time in an uploaded file",
                    "parameters": [locale_param()],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "multipart/form-data": {
                                "schema": {
                                    "type": "object",
                                    "properties": { "file": { "type": "string", "format": "binary" } }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "One result per time, in input order",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/SpokenTime" }
                                    }
                                }
                            }
                        },
                        "400": error_response("invalid_file or invalid_time")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "SpokenTime": {
                    "type": "object",
                    "properties": {
                        "original": { "type": "string", "example": "07:30" },
                        "spoken": { "type": "string", "example": "half past seven" }
                    }
                },
                "Error": {
                    "type": "object",
                    "properties": {
                        "code": { "type": "string", "example": "invalid_time" },
                        "message": { "type": "string" }
                    }
                }
            }
        }
    })
}
