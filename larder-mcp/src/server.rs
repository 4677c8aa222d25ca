//! JSON-RPC request handling

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{info, warn};
use larder_core::LarderError;
use larder_units::UnitRegistry;

use crate::config::Config;
use crate::store::RecipeStore;
use crate::tools::{self, ToolContext, TOOL_NAMES};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "larder";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const RESOURCE_PREFIX: &str = "larder://recipes/";

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        McpError { code, message: message.into(), data: None }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        McpError::new(McpError::INVALID_PARAMS, message)
    }
}

impl McpResponse {
    pub fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    pub fn failure(id: Option<JsonValue>, error: McpError) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

/// Decode one line of input, or build the error response for it.
///
/// Text that is not JSON is a parse error; JSON that is not a request
/// object is an invalid request, answered with its id when it has one.
pub fn decode_request(line: &str) -> Result<McpRequest, McpResponse> {
    let value: JsonValue = serde_json::from_str(line).map_err(|e| {
        McpResponse::failure(None, McpError::new(McpError::PARSE_ERROR, format!("Parse error: {}", e)))
    })?;

    let id = value.get("id").filter(|id| id.is_string() || id.is_number()).cloned();
    serde_json::from_value(value).map_err(|e| {
        McpResponse::failure(id, McpError::new(McpError::INVALID_REQUEST, format!("Invalid Request: {}", e)))
    })
}

/// Everything a request needs: the unit registry, recipes on disk and defaults
pub struct Server {
    registry: &'static UnitRegistry,
    store: RecipeStore,
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Server {
            registry: UnitRegistry::standard(),
            store: RecipeStore::new(config.data_path.clone()),
            config,
        }
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn handle_request(&self, request: &McpRequest) -> McpResponse {
        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => self.handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => Ok(tools_list()),
            "tools/call" => self.handle_tool_call(&request.params),

            // Resources
            "resources/list" => Ok(self.handle_resources_list()),
            "resources/read" => self.handle_resources_read(&request.params),

            _ => Err(McpError::new(
                McpError::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        match result {
            Ok(r) => McpResponse::success(request.id.clone(), r),
            Err(e) => McpResponse::failure(request.id.clone(), e),
        }
    }

    fn handle_initialize(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let client_info = params.as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");

        // Use client's protocol version for compatibility
        let client_protocol = params.as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(|v| v.as_str())
            .unwrap_or(PROTOCOL_VERSION);

        info!(client = client_info, protocol = client_protocol, "client connected");

        Ok(json!({
            "protocolVersion": client_protocol,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
                "description": "Exact cooking measurements: parse, add, scale and render"
            },
            "capabilities": {
                "tools": {
                    "listChanged": false
                },
                "resources": {
                    "subscribe": false,
                    "listChanged": false
                }
            },
            "instructions": format!(
                "Larder parses cooking measurements such as '1 1/2 cups' or '20.5 oz', adds and scales them exactly, and renders them in metric or imperial units. The default system is {}. Recipes in the data directory can be scaled or combined into shopping lists.",
                self.config.system
            )
        }))
    }

    fn handle_tool_call(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));

        let ctx = ToolContext {
            registry: self.registry,
            store: &self.store,
            system: self.config.system,
        };

        match tools::call(&ctx, name, &args) {
            Some(Ok(result)) => Ok(result),
            Some(Err(error)) => {
                warn!(tool = name, code = %error.code, "{}", error.message);
                Ok(tool_error(&error))
            }
            None => Err(McpError {
                code: McpError::INVALID_PARAMS,
                message: format!("Unknown tool: {}", name),
                data: Some(json!({ "available": TOOL_NAMES })),
            }),
        }
    }

    fn handle_resources_list(&self) -> JsonValue {
        let resources: Vec<JsonValue> = self.store.list().iter().map(|r| {
            json!({
                "uri": format!("{}{}", RESOURCE_PREFIX, r.name),
                "name": r.name,
                "description": r.title.clone().unwrap_or_else(|| format!("Recipe document: {}.json", r.name)),
                "mimeType": "application/json"
            })
        }).collect();

        json!({ "resources": resources })
    }

    fn handle_resources_read(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let uri = params.as_ref()
            .and_then(|p| p.get("uri"))
            .and_then(|u| u.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing uri parameter"))?;

        let name = uri.strip_prefix(RESOURCE_PREFIX).ok_or_else(|| {
            McpError::invalid_params(format!(
                "Invalid URI: {}. Expected {}{{name}}",
                uri, RESOURCE_PREFIX
            ))
        })?;

        let content = self.store.read_raw(name).map_err(|e| McpError {
            code: McpError::INVALID_PARAMS,
            message: e.message.clone(),
            data: serde_json::to_value(&e).ok(),
        })?;

        Ok(json!({
            "contents": [{
                "uri": uri,
                "mimeType": "application/json",
                "text": content
            }]
        }))
    }
}

/// Tool-level failure: a normal result flagged with isError
fn tool_error(error: &LarderError) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": error.to_string() }],
        "isError": true,
        "error": error
    })
}

fn system_schema() -> JsonValue {
    json!({
        "type": "string",
        "description": "Display system (default from LARDER_SYSTEM)",
        "enum": ["metric", "imperial"]
    })
}

fn tools_list() -> JsonValue {
    json!({
        "tools": [
            {
                "name": "parse_measurement",
                "description": "Parse a measurement such as '1 1/2 cups' and show it in both systems.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "text": {
                            "type": "string",
                            "description": "Measurement text: '<amount> <unit>'"
                        }
                    },
                    "required": ["text"]
                }
            },
            {
                "name": "render_measurement",
                "description": "Render a measurement in the largest sensible units of one system.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string", "description": "Measurement text" },
                        "system": system_schema()
                    },
                    "required": ["text"]
                }
            },
            {
                "name": "add_measurements",
                "description": "Add measurements of the same kind exactly.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "measurements": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Measurements to add, all volume or all weight"
                        },
                        "system": system_schema()
                    },
                    "required": ["measurements"]
                }
            },
            {
                "name": "scale_measurement",
                "description": "Multiply a measurement by an exact factor.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string", "description": "Measurement text" },
                        "factor": {
                            "type": ["string", "integer"],
                            "description": "Factor such as 2, \"3/2\" or \"2.5\""
                        },
                        "system": system_schema()
                    },
                    "required": ["text", "factor"]
                }
            },
            {
                "name": "shopping_list",
                "description": "Combine the ingredients of one or more recipes into a shopping list.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "recipes": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Recipe names (file names without .json)"
                        },
                        "system": system_schema()
                    },
                    "required": ["recipes"]
                }
            },
            {
                "name": "scale_recipe",
                "description": "Scale a recipe by a factor or to a number of servings.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Recipe name" },
                        "factor": {
                            "type": ["string", "integer"],
                            "description": "Factor such as 2 or \"1/2\""
                        },
                        "servings": {
                            "type": "integer",
                            "description": "Target servings; needs a recipe that states its servings"
                        },
                        "system": system_schema()
                    },
                    "required": ["name"]
                }
            },
            {
                "name": "list_units",
                "description": "List known units and their accepted spellings.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "kind": {
                            "type": "string",
                            "enum": ["volume", "weight"]
                        }
                    }
                }
            }
        ]
    })
}
