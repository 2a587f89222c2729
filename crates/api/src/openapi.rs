use serde_json::{Value, json};

/// OpenAPI 3.1 document for the three POST operations.
pub fn document(base_url: &str) -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Color Accessibility & Research API",
            "description": "Check WCAG color contrast and run web research.",
            "version": "1.0.0"
        },
        "servers": [{ "url": base_url }],
        "paths": {
            "/api/analyze": {
                "post": {
                    "operationId": "analyzeContrast",
                    "summary": "Analyze the contrast of two colors",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "foreground": { "type": "string", "description": "Text color (e.g. #000000)" },
                                        "background": { "type": "string", "description": "Background color (e.g. #FFFFFF)" }
                                    },
                                    "required": ["foreground", "background"]
                                }
                            }
                        }
                    },
                    "responses": { "200": { "description": "Analysis result" } }
                }
            },
            "/api/search": {
                "post": {
                    "operationId": "searchWeb",
                    "summary": "Search the web",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "query": { "type": "string", "description": "Search query" },
                                        "max_results": { "type": "integer", "description": "Maximum number of results", "default": 5 }
                                    },
                                    "required": ["query"]
                                }
                            }
                        }
                    },
                    "responses": { "200": { "description": "Search results" } }
                }
            },
            "/api/fetch": {
                "post": {
                    "operationId": "fetchUrl",
                    "summary": "Fetch the content of a URL",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "url": { "type": "string", "description": "URL to download" }
                                    },
                                    "required": ["url"]
                                }
                            }
                        }
                    },
                    "responses": { "200": { "description": "Page content" } }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_describes_all_operations() {
        let doc = document("http://localhost:8080");
        let paths = doc.get("paths").unwrap();
        for path in ["/api/analyze", "/api/search", "/api/fetch"] {
            assert!(paths.get(path).is_some(), "missing {}", path);
        }
        assert_eq!(
            doc["servers"][0]["url"],
            json!("http://localhost:8080")
        );
    }
}
