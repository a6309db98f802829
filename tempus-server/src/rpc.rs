//! JSON-RPC 2.0 envelope types

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tempus_core::{codes, TempusError};

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
/// Well-formed request that failed in the period library
pub const DOMAIN_ERROR: i32 = -32000;

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    pub fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<JsonValue>, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn parse_error(details: impl std::fmt::Display) -> Self {
        Self::new(PARSE_ERROR, format!("Parse error: {}", details))
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }

    pub fn invalid_params(details: impl std::fmt::Display) -> Self {
        Self::from(TempusError::invalid_request(details.to_string()))
    }
}

/// Structured library errors travel in `data`; bad requests map to
/// invalid-params, internal failures to internal-error
impl From<TempusError> for RpcError {
    fn from(err: TempusError) -> Self {
        let code = match err.code.as_str() {
            codes::INVALID_REQUEST => INVALID_PARAMS,
            codes::INTERNAL => INTERNAL_ERROR,
            _ => DOMAIN_ERROR,
        };
        Self {
            code,
            message: err.message.clone(),
            data: serde_json::to_value(&err).ok(),
        }
    }
}

impl From<tempus::PeriodError> for RpcError {
    fn from(err: tempus::PeriodError) -> Self {
        TempusError::from(err).into()
    }
}

impl From<tempus_core::CalendarError> for RpcError {
    fn from(err: tempus_core::CalendarError) -> Self {
        TempusError::from(err).into()
    }
}
