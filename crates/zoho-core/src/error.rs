/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use thiserror::Error;

/// The main error type for zoho-* crates
///
/// Three kinds of failure reach callers of a resource operation: transport
/// failures (`Http`, `Status`, `Auth`), remote business failures (`Api`) and
/// decode failures (`Parse`, `Serde`). Resource operations wrap all of them in
/// [`Error::Operation`] so the failing action is part of the message.
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Network, connection or timeout failure
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-success HTTP status without a Zoho error envelope
  #[error("HTTP status {status}: {message}")]
  Status {
    /// HTTP status code
    status: u16,
    /// Status line or an excerpt of the response body
    message: String,
  },

  /// Access token could not be obtained or refreshed
  #[error("Authentication error: {0}")]
  Auth(String),

  /// The remote service rejected the request with a non-zero code
  #[error("API error {code}: {message}")]
  Api {
    /// Zoho status code from the response envelope
    code: i64,
    /// Human readable message from the response envelope
    message: String,
  },

  /// Response body did not match the expected shape
  #[error("Parse error: {0}")]
  Parse(String),

  /// Caller supplied input that cannot be sent
  #[error("Invalid input: {0}")]
  InvalidInput(String),

  /// Failure of a named resource operation
  #[error("{action}: {source}")]
  Operation {
    /// Name of the failing action, e.g. "Failed to retrieve invoice"
    action: String,
    /// Underlying failure
    source: Box<Error>,
  },
}

impl Error {
  /// Wrap an error with the name of the action that produced it
  pub fn operation(action: impl Into<String>, source: Error) -> Self {
    Error::Operation { action: action.into(), source: Box::new(source) }
  }

  /// The innermost error, looking through any `Operation` wrappers
  pub fn root(&self) -> &Error {
    match self {
      Error::Operation { source, .. } => source.root(),
      other => other,
    }
  }

  /// Name of the outermost failing action, if any
  pub fn action(&self) -> Option<&str> {
    match self {
      Error::Operation { action, .. } => Some(action),
      _ => None,
    }
  }

  /// True when the remote service reported a business failure
  pub fn is_api(&self) -> bool {
    matches!(self.root(), Error::Api { .. })
  }

  /// Zoho status code of a remote business failure
  pub fn api_code(&self) -> Option<i64> {
    match self.root() {
      Error::Api { code, .. } => Some(*code),
      _ => None,
    }
  }

  /// Message of a remote business failure
  pub fn api_message(&self) -> Option<&str> {
    match self.root() {
      Error::Api { message, .. } => Some(message),
      _ => None,
    }
  }

  /// HTTP status of a transport level failure
  pub fn http_status(&self) -> Option<u16> {
    match self.root() {
      Error::Status { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Result type alias for zoho-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_operation_display_includes_action_and_message() {
    let err = Error::operation(
      "Failed to create invoice",
      Error::Api { code: 1001, message: "Invoice number already exists".to_string() },
    );

    let text = err.to_string();
    assert!(text.starts_with("Failed to create invoice: "));
    assert!(text.contains("Invoice number already exists"));
    assert_eq!(err.action(), Some("Failed to create invoice"));
  }

  #[test]
  fn test_inspection_through_wrappers() {
    let err = Error::operation(
      "outer",
      Error::operation("inner", Error::Api { code: 5, message: "nope".to_string() }),
    );

    assert!(err.is_api());
    assert_eq!(err.api_code(), Some(5));
    assert_eq!(err.api_message(), Some("nope"));
    assert_eq!(err.http_status(), None);
  }

  #[test]
  fn test_status_is_not_api() {
    let err = Error::Status { status: 503, message: "503 Service Unavailable".to_string() };
    assert!(!err.is_api());
    assert_eq!(err.http_status(), Some(503));
    assert_eq!(err.action(), None);
  }
}
