use thiserror::Error;

use crate::protocol::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};

/// Errors raised by the engine host. The ranking and filtering core never
/// fails; missing terms, vectors and empty pools degrade to neutral values.
#[derive(Debug, Error)]
pub enum EngineError {
	#[error("Method not found: {0}")]
	MethodNotFound(String),
	#[error("Invalid params: {0}")]
	InvalidParams(String),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl EngineError {
	pub fn code(&self) -> &str {
		match self {
			Self::MethodNotFound(_) => "PAPERRANK_METHOD_NOT_FOUND",
			Self::InvalidParams(_) => "PAPERRANK_INVALID_PARAMS",
			Self::Io(_) => "PAPERRANK_IO",
			Self::Json(_) => "PAPERRANK_JSON",
		}
	}

	/// JSON-RPC error code this error is reported with.
	pub fn rpc_code(&self) -> i32 {
		match self {
			Self::MethodNotFound(_) => METHOD_NOT_FOUND,
			Self::InvalidParams(_) => INVALID_PARAMS,
			Self::Io(_) | Self::Json(_) => INTERNAL_ERROR,
		}
	}

	pub fn to_json_rpc_error(&self) -> serde_json::Value {
		serde_json::json!({
			"engineCode": self.code(),
			"message": self.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_are_stable() {
		assert_eq!(EngineError::InvalidParams("x".into()).code(), "PAPERRANK_INVALID_PARAMS");
		let io = EngineError::from(std::io::Error::other("boom"));
		assert_eq!(io.code(), "PAPERRANK_IO");
		assert_eq!(io.rpc_code(), INTERNAL_ERROR);
		assert_eq!(EngineError::MethodNotFound("x".into()).rpc_code(), METHOD_NOT_FOUND);
	}

	#[test]
	fn json_rpc_error_payload() {
		let err = EngineError::InvalidParams("missing field `papers`".into());
		let value = err.to_json_rpc_error();
		assert_eq!(value["engineCode"], "PAPERRANK_INVALID_PARAMS");
		assert_eq!(value["message"], "Invalid params: missing field `papers`");
	}
}
