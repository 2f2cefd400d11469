use std::io::{self, Write};

use serde::Serialize;

use crate::protocol::{JsonRpcError, JsonRpcResponse};

/// NDJSON transport over stdout: one JSON-RPC message per line.
/// Logs go to stderr so they never interleave with protocol frames.
pub struct NdjsonTransport;

impl Default for NdjsonTransport {
	fn default() -> Self {
		Self::new()
	}
}

impl NdjsonTransport {
	pub fn new() -> Self {
		Self
	}

	/// Write a successful JSON-RPC response.
	pub fn write_response(&self, id: u64, result: serde_json::Value) {
		self.write_line(&JsonRpcResponse {
			jsonrpc: "2.0",
			id,
			result: Some(result),
			error: None,
		});
	}

	/// Write a JSON-RPC error response.
	pub fn write_error(
		&self,
		id: u64,
		code: i32,
		message: impl Into<String>,
		data: Option<serde_json::Value>,
	) {
		self.write_line(&JsonRpcResponse {
			jsonrpc: "2.0",
			id,
			result: None,
			error: Some(JsonRpcError {
				code,
				message: message.into(),
				data,
			}),
		});
	}

	fn write_line(&self, value: &impl Serialize) {
		let mut stdout = io::stdout().lock();
		if let Err(e) = serde_json::to_writer(&mut stdout, value) {
			tracing::error!("Failed to serialize response: {}", e);
			return;
		}
		if let Err(e) = writeln!(stdout) {
			tracing::error!("Failed to write newline: {}", e);
		}
		if let Err(e) = stdout.flush() {
			tracing::error!("Failed to flush stdout: {}", e);
		}
	}
}
