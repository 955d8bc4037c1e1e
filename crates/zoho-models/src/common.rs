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

//! Types shared by the invoicing and subscriptions payloads

use serde::{Deserialize, Serialize};

/// Response envelope contract shared by every Zoho JSON response.
///
/// `code == 0` means success. Any other value means the service rejected the
/// request and `message` explains why.
pub trait ApiResponse {
  /// Zoho status code
  fn code(&self) -> i64;

  /// Human readable status message
  fn message(&self) -> &str;

  /// True when the service accepted the request
  fn is_success(&self) -> bool {
    self.code() == 0
  }
}

/// Implements [`ApiResponse`] for envelopes with `code` and `message` fields
#[macro_export]
macro_rules! impl_api_response {
  ($($envelope:ty),+ $(,)?) => {
    $(
      impl $crate::common::ApiResponse for $envelope {
        fn code(&self) -> i64 {
          self.code
        }

        fn message(&self) -> &str {
          &self.message
        }
      }
    )+
  };
}

/// Envelope of actions that only report a status (email, mark as sent, delete, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
  #[serde(default)]
  pub code: i64,

  #[serde(default)]
  pub message: String,
}

impl_api_response!(StatusResponse);

/// A boolean the service sometimes encodes as a string.
///
/// `ach_payment_initiated` is documented as a boolean but arrives as `""` on
/// some responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseBool {
  Bool(bool),
  Text(String),
}

impl LooseBool {
  /// `true` only for `true` and the string `"true"`
  pub fn as_bool(&self) -> bool {
    match self {
      LooseBool::Bool(value) => *value,
      LooseBool::Text(text) => text.eq_ignore_ascii_case("true"),
    }
  }
}

impl Default for LooseBool {
  fn default() -> Self {
    LooseBool::Bool(false)
  }
}

impl From<bool> for LooseBool {
  fn from(value: bool) -> Self {
    LooseBool::Bool(value)
  }
}

/// Custom field as returned on a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub customfield_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub index: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub placeholder: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub show_on_pdf: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub show_in_all_pdf: Option<bool>,

  /// Value type depends on `data_type`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<serde_json::Value>,
}

/// Custom field as sent on create/update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldRequest {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub customfield_id: Option<String>,

  #[serde(default)]
  pub label: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<serde_json::Value>,
}

impl From<&CustomField> for CustomFieldRequest {
  fn from(field: &CustomField) -> Self {
    CustomFieldRequest {
      customfield_id: field.customfield_id.clone(),
      label: field.label.clone().unwrap_or_default(),
      value: field.value.clone(),
    }
  }
}

/// Reporting tag attached to a line item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag_option_id: Option<String>,
}

/// File attached to a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file_size_formatted: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub document_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attachment_order: Option<i64>,
}

/// Comment or history entry on a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub commented_by_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub commented_by: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub operation_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub transaction_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub transaction_type: Option<String>,
}

/// Billing or shipping address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attention: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub street: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub street2: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub city: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub state: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub zip: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fax: Option<String>,
}

/// Pagination block of list responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
  #[serde(default)]
  pub page: i64,

  #[serde(default)]
  pub per_page: i64,

  #[serde(default)]
  pub has_more_page: bool,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub report_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sort_column: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sort_order: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_de_tokens, Token};

  #[test]
  fn test_loose_bool_accepts_bool_and_string() {
    assert_de_tokens(&LooseBool::Bool(true), &[Token::Bool(true)]);
    assert_de_tokens(&LooseBool::Text(String::new()), &[Token::Str("")]);

    let parsed: LooseBool = serde_json::from_str("false").unwrap();
    assert!(!parsed.as_bool());
    let parsed: LooseBool = serde_json::from_str("\"\"").unwrap();
    assert_eq!(parsed, LooseBool::Text(String::new()));
    assert!(!parsed.as_bool());
    let parsed: LooseBool = serde_json::from_str("\"TRUE\"").unwrap();
    assert!(parsed.as_bool());
  }

  #[test]
  fn test_status_response_defaults_when_fields_absent() {
    let response: StatusResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(response.code, 0);
    assert!(response.message.is_empty());
    assert!(response.is_success());

    let response: StatusResponse =
      serde_json::from_str(r#"{"code": 1002, "message": "Invoice does not exist."}"#).unwrap();
    assert!(!response.is_success());
    assert_eq!(response.message(), "Invoice does not exist.");
  }

  #[test]
  fn test_empty_address_serializes_to_empty_object() {
    let json = serde_json::to_string(&Address::default()).unwrap();
    assert_eq!(json, "{}");
  }

  #[test]
  fn test_custom_field_request_from_custom_field() {
    let field = CustomField {
      customfield_id: Some("cf-1".to_string()),
      label: Some("PO".to_string()),
      value: Some(serde_json::json!("PO-77")),
      ..Default::default()
    };
    let request = CustomFieldRequest::from(&field);
    assert_eq!(request.customfield_id.as_deref(), Some("cf-1"));
    assert_eq!(request.label, "PO");
    assert_eq!(request.value, Some(serde_json::json!("PO-77")));
  }
}
