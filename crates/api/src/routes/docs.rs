//! Machine-readable API description served at `/api-docs`.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::state::AppState;

/// Serve the OpenAPI document.
pub async fn api_docs(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_document(&state.config().base_url))
}

/// Build the OpenAPI 3.0.1 document for every user and home endpoint.
#[must_use]
pub fn openapi_document(base_url: &str) -> Value {
    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "Technical Knowledge",
            "version": "1.0.0",
            "description": "CRUD over users and the homes they own."
        },
        "servers": [{ "url": format!("{base_url}/api") }],
        "tags": [{ "name": "Users" }, { "name": "Homes" }],
        "paths": {
            "/users": {
                "get": {
                    "summary": "Get all users",
                    "tags": ["Users"],
                    "responses": {
                        "200": list_response("Users retrieved successfully", "User")
                    }
                },
                "post": {
                    "summary": "Create a user",
                    "tags": ["Users"],
                    "requestBody": request_body(true, &user_fields()),
                    "responses": {
                        "201": empty_response("User has been created successfully"),
                        "400": error_response("Invalid body parameters")
                    }
                }
            },
            "/users/{userId}": {
                "get": {
                    "summary": "Get user by id",
                    "tags": ["Users"],
                    "parameters": [user_id_param()],
                    "responses": {
                        "200": {
                            "description": "User has been retrieved successfully",
                            "content": json_content(&schema_ref("User"))
                        },
                        "400": error_response("Invalid user id"),
                        "404": error_response("User not found")
                    }
                },
                "patch": {
                    "summary": "Update some user fields",
                    "tags": ["Users"],
                    "parameters": [user_id_param()],
                    "requestBody": request_body(false, &user_fields()),
                    "responses": {
                        "200": empty_response("User has been updated successfully"),
                        "400": error_response("Invalid user id or body parameters"),
                        "404": error_response("User not found")
                    }
                },
                "put": {
                    "summary": "Replace user fields",
                    "tags": ["Users"],
                    "parameters": [user_id_param()],
                    "requestBody": request_body(true, &user_fields()),
                    "responses": {
                        "200": empty_response("User has been updated successfully"),
                        "400": error_response("Invalid user id or body parameters"),
                        "404": error_response("User not found")
                    }
                },
                "delete": {
                    "summary": "Delete user",
                    "tags": ["Users"],
                    "parameters": [user_id_param()],
                    "responses": {
                        "200": empty_response("User has been deleted successfully"),
                        "400": error_response("Invalid user id"),
                        "404": error_response("User not found"),
                        "409": error_response("User still owns homes")
                    }
                }
            },
            "/users/{userId}/homes": {
                "get": {
                    "summary": "Get user homes",
                    "tags": ["Homes"],
                    "parameters": [
                        user_id_param(),
                        filter_param("street"),
                        filter_param("city"),
                        filter_param("country")
                    ],
                    "responses": {
                        "200": list_response("User homes have been retrieved successfully", "Home"),
                        "400": error_response("Invalid user id or query parameters"),
                        "404": error_response("User not found")
                    }
                },
                "post": {
                    "summary": "Create a home for a specific user",
                    "tags": ["Homes"],
                    "parameters": [user_id_param()],
                    "requestBody": request_body(true, &home_fields()),
                    "responses": {
                        "201": empty_response("User home has been created successfully"),
                        "400": error_response("Invalid user id or body parameters")
                    }
                }
            },
            "/users/{userId}/homes/{homeId}": {
                "patch": {
                    "summary": "Update some user home fields",
                    "tags": ["Homes"],
                    "parameters": [user_id_param(), home_id_param()],
                    "requestBody": request_body(false, &home_fields()),
                    "responses": {
                        "200": empty_response("User home has been updated successfully"),
                        "400": error_response("Invalid user id, home id or body parameters"),
                        "404": error_response("Home not found")
                    }
                },
                "put": {
                    "summary": "Replace user home fields",
                    "tags": ["Homes"],
                    "parameters": [user_id_param(), home_id_param()],
                    "requestBody": request_body(true, &home_fields()),
                    "responses": {
                        "200": empty_response("User home has been updated successfully"),
                        "400": error_response("Invalid user id, home id or body parameters"),
                        "404": error_response("Home not found")
                    }
                },
                "delete": {
                    "summary": "Delete user home",
                    "tags": ["Homes"],
                    "parameters": [user_id_param(), home_id_param()],
                    "responses": {
                        "200": empty_response("User home has been deleted successfully"),
                        "400": error_response("Invalid user id or home id"),
                        "404": error_response("User home not found")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "User": {
                    "type": "object",
                    "properties": properties(&user_fields()),
                    "required": ["name", "surname"],
                    "example": { "name": "Juan", "surname": "Martínez" }
                },
                "Home": {
                    "type": "object",
                    "properties": properties(&home_fields()),
                    "required": ["street", "city", "country"],
                    "example": { "street": "La Gran Vía", "city": "Madrid", "country": "Spain" }
                },
                "GeneralError": {
                    "type": "object",
                    "properties": {
                        "msg": { "type": "string", "description": "Error message" }
                    }
                }
            }
        }
    })
}

fn user_fields() -> [(&'static str, &'static str); 2] {
    [("name", "User name"), ("surname", "User surname")]
}

fn home_fields() -> [(&'static str, &'static str); 3] {
    [
        ("street", "Street where home is located"),
        ("city", "City where home is located"),
        ("country", "Country where home is located"),
    ]
}

fn properties(fields: &[(&str, &str)]) -> Value {
    fields
        .iter()
        .map(|(name, description)| {
            (
                (*name).to_string(),
                json!({ "type": "string", "description": description }),
            )
        })
        .collect::<serde_json::Map<_, _>>()
        .into()
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn json_content(schema: &Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn request_body(required: bool, fields: &[(&str, &str)]) -> Value {
    json!({
        "required": required,
        "content": json_content(&json!({
            "type": "object",
            "properties": properties(fields)
        }))
    })
}

fn empty_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": json_content(&json!({ "type": "object" }))
    })
}

fn list_response(description: &str, item: &str) -> Value {
    json!({
        "description": description,
        "content": json_content(&json!({ "type": "array", "items": schema_ref(item) }))
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": json_content(&schema_ref("GeneralError"))
    })
}

fn path_id_param(name: &str, description: &str) -> Value {
    json!({
        "in": "path",
        "name": name,
        "schema": { "type": "integer", "minimum": 0 },
        "required": true,
        "description": description
    })
}

fn user_id_param() -> Value {
    path_id_param("userId", "User ID")
}

fn home_id_param() -> Value {
    path_id_param("homeId", "Home ID")
}

fn filter_param(name: &str) -> Value {
    json!({
        "in": "query",
        "name": name,
        "schema": { "type": "string" },
        "required": false,
        "description": format!("Home {name} to filter by (exact match)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_operation() {
        let doc = openapi_document("http://localhost:8080");
        let paths = &doc["paths"];

        let operations: [(&str, &[&str]); 4] = [
            ("/users", &["get", "post"]),
            ("/users/{userId}", &["get", "patch", "put", "delete"]),
            ("/users/{userId}/homes", &["get", "post"]),
            ("/users/{userId}/homes/{homeId}", &["patch", "put", "delete"]),
        ];
        for (path, methods) in operations {
            for method in methods {
                assert!(paths[path][method].is_object(), "{method} {path}");
            }
        }
    }

    #[test]
    fn test_document_server_url() {
        let doc = openapi_document("https://api.example.com");
        assert_eq!(doc["servers"][0]["url"], "https://api.example.com/api");
    }

    #[test]
    fn test_document_schemas() {
        let doc = openapi_document("http://localhost:8080");
        let schemas = &doc["components"]["schemas"];
        assert_eq!(schemas["User"]["required"], json!(["name", "surname"]));
        assert_eq!(schemas["Home"]["properties"]["city"]["type"], "string");
        assert!(schemas["GeneralError"]["properties"]["msg"].is_object());
        assert_eq!(
            doc["paths"]["/users/{userId}"]["delete"]["responses"]["409"]["content"]
                ["application/json"]["schema"]["$ref"],
            "#/components/schemas/GeneralError"
        );
    }
}
