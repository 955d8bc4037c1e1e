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

//! HTTP transport layer for Zoho API requests

use crate::auth::TokenManager;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;
use zoho_core::{ApiFamily, Config, Error, Result, AUTH_SCHEME};
use zoho_models::StatusResponse;

/// Request body of an [`Endpoint`]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
  #[default]
  None,
  /// JSON encoded request
  Json(serde_json::Value),
  /// Multipart upload: the file plus an optional JSON sibling request
  File {
    bytes: Vec<u8>,
    filename: String,
    json: Option<serde_json::Value>,
  },
}

/// Per-call overrides applied on top of an operation's defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
  /// Extra query parameters; a key already set by the operation is replaced
  pub query: HashMap<String, String>,
  /// Request deadline replacing the client-wide timeout
  pub timeout: Option<Duration>,
}

impl RequestOptions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add or replace one query parameter
  pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.query.insert(key.into(), value.into());
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  pub fn is_empty(&self) -> bool {
    self.query.is_empty() && self.timeout.is_none()
  }
}

/// Declarative description of one HTTP call.
///
/// Built fresh for every operation and handed to [`Transport`]. The same
/// descriptor is sent again when the access token is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
  /// Action name, used to label errors and log lines
  pub name: String,
  pub method: Method,
  pub url: Url,
  pub headers: HashMap<String, String>,
  pub query: HashMap<String, String>,
  pub body: RequestBody,
  pub timeout: Option<Duration>,
}

impl Endpoint {
  pub fn new(name: impl Into<String>, method: Method, url: Url) -> Self {
    Self {
      name: name.into(),
      method,
      url,
      headers: HashMap::new(),
      query: HashMap::new(),
      body: RequestBody::None,
      timeout: None,
    }
  }

  pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.headers.insert(name.into(), value.into());
    self
  }

  /// Set one query parameter, replacing any previous value
  pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.query.insert(key.into(), value.into());
    self
  }

  /// Set query parameters that are not present yet
  pub fn query_defaults<K, V>(mut self, defaults: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<String>,
    V: Into<String>,
  {
    for (key, value) in defaults {
      self.query.entry(key.into()).or_insert_with(|| value.into());
    }
    self
  }

  /// Apply caller overrides: their query keys win over the defaults
  pub fn with_options(mut self, options: &RequestOptions) -> Self {
    self.query.extend(options.query.iter().map(|(k, v)| (k.clone(), v.clone())));
    if options.timeout.is_some() {
      self.timeout = options.timeout;
    }
    self
  }

  /// JSON encode `body` as the request body
  pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
    self.body = RequestBody::Json(serde_json::to_value(body)?);
    Ok(self)
  }

  /// Send `bytes` as a multipart upload; `request` goes along as `JSONString`
  pub fn file<B: Serialize + ?Sized>(
    mut self,
    bytes: Vec<u8>,
    filename: impl Into<String>,
    request: Option<&B>,
  ) -> Result<Self> {
    let json = request.map(serde_json::to_value).transpose()?;
    self.body = RequestBody::File { bytes, filename: filename.into(), json };
    Ok(self)
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }
}

/// Append path segments to a base URL.
///
/// Segments are percent-encoded and joined with exactly one slash, whether
/// or not the base ends with one.
pub fn build_url(base: &str, segments: &[&str]) -> Result<Url> {
  let mut url = Url::parse(base).map_err(|e| Error::Config(format!("Invalid base URL '{base}': {e}")))?;

  if let Some(empty) = segments.iter().position(|s| s.trim().is_empty()) {
    return Err(Error::InvalidInput(format!("Path segment {empty} must not be empty")));
  }

  url
    .path_segments_mut()
    .map_err(|_| Error::Config(format!("Base URL '{base}' cannot carry a path")))?
    .pop_if_empty()
    .extend(segments);

  Ok(url)
}

/// HTTP transport layer for making requests to the Zoho APIs
pub struct Transport {
  client: Client,
  tokens: Arc<TokenManager>,
  organization_id: String,
  invoice_base_url: String,
  subscriptions_base_url: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config, tokens: Arc<TokenManager>) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("zoho-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

    Ok(Self {
      client,
      tokens,
      organization_id: config.organization_id.clone(),
      invoice_base_url: config.invoice_base_url.clone(),
      subscriptions_base_url: config.subscriptions_base_url.clone(),
      timeout,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    let config = Config::new("test-org")
      .with_invoice_base_url("https://mock.zoho.test/invoice/v3/")
      .with_subscriptions_base_url("https://mock.zoho.test/api/v1");
    let tokens = Arc::new(TokenManager::new(Arc::new(crate::auth::StaticTokenProvider::new("test-token"))));
    Self {
      client: Client::new(),
      tokens,
      organization_id: config.organization_id,
      invoice_base_url: config.invoice_base_url,
      subscriptions_base_url: config.subscriptions_base_url,
      timeout: Duration::from_secs(30),
    }
  }

  /// Base URL serving the given API family
  pub fn base_url(&self, family: ApiFamily) -> &str {
    match family {
      ApiFamily::Invoicing => &self.invoice_base_url,
      ApiFamily::Subscriptions => &self.subscriptions_base_url,
    }
  }

  pub fn organization_id(&self) -> &str {
    &self.organization_id
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Descriptor for `segments` under the family's base URL, carrying the
  /// family's organization header
  pub fn endpoint(
    &self,
    family: ApiFamily,
    name: impl Into<String>,
    method: Method,
    segments: &[&str],
  ) -> Result<Endpoint> {
    let url = build_url(self.base_url(family), segments)?;
    Ok(Endpoint::new(name, method, url).header(family.organization_header(), &self.organization_id))
  }

  /// Send the descriptor and decode the JSON response into `T`.
  ///
  /// A non-2xx response carrying a Zoho envelope with a non-zero code is
  /// reported as [`Error::Api`], any other non-2xx as [`Error::Status`].
  #[instrument(skip(self, endpoint), fields(action = %endpoint.name, method = %endpoint.method))]
  pub async fn execute_json<T>(&self, endpoint: &Endpoint) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let response = self.send(endpoint).await?;
    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

    debug!("Response body length: {} bytes", text.len());

    if !status.is_success() {
      return Err(status_error(status, &text));
    }

    serde_json::from_str::<T>(&text).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      error!("Response text (first 200 chars): {}", excerpt(&text, 200));
      Error::Parse(format!("Failed to parse response: {e}. Response: {}", excerpt(&text, 200)))
    })
  }

  /// Send the descriptor and return the raw response body
  #[instrument(skip(self, endpoint), fields(action = %endpoint.name, method = %endpoint.method))]
  pub async fn execute_bytes(&self, endpoint: &Endpoint) -> Result<Vec<u8>> {
    let response = self.send(endpoint).await?;
    let status = response.status();

    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(Error::Status { status: status.as_u16(), message: status.to_string() });
    }

    let bytes = response
      .bytes()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

    debug!("Downloaded {} bytes", bytes.len());
    Ok(bytes.to_vec())
  }

  /// Send once; on 401 replace the token and send the same descriptor again
  async fn send(&self, endpoint: &Endpoint) -> Result<Response> {
    let token = self.tokens.token().await?;
    let response = self.send_with_token(endpoint, &token).await?;

    if response.status() != StatusCode::UNAUTHORIZED {
      return Ok(response);
    }

    warn!("{} rejected the access token, retrying once", endpoint.url);
    let token = self.tokens.refresh_rejected(&token).await?;
    self.send_with_token(endpoint, &token).await
  }

  async fn send_with_token(&self, endpoint: &Endpoint, token: &str) -> Result<Response> {
    debug!("{} {}", endpoint.method, endpoint.url);

    let mut request = self
      .client
      .request(endpoint.method.clone(), endpoint.url.clone())
      .header(reqwest::header::AUTHORIZATION, format!("{AUTH_SCHEME} {token}"));

    for (name, value) in &endpoint.headers {
      request = request.header(name.as_str(), value.as_str());
    }

    if !endpoint.query.is_empty() {
      request = request.query(&endpoint.query);
    }

    if let Some(timeout) = endpoint.timeout {
      request = request.timeout(timeout);
    }

    request = match &endpoint.body {
      RequestBody::None => request,
      RequestBody::Json(value) => request.json(value),
      RequestBody::File { bytes, filename, json } => request.multipart(multipart_form(bytes, filename, json.as_ref())?),
    };

    let response = request.send().await.map_err(|e| {
      if e.is_timeout() {
        Error::Http(format!("Request timed out: {e}"))
      } else {
        Error::Http(format!("Request failed: {e}"))
      }
    })?;

    debug!("Response status: {}", response.status());
    Ok(response)
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("organization_id", &self.organization_id)
      .field("invoice_base_url", &self.invoice_base_url)
      .field("subscriptions_base_url", &self.subscriptions_base_url)
      .field("timeout", &self.timeout)
      .finish()
  }
}

/// `attachment` file part, `file_name` text part, optional `JSONString` part
fn multipart_form(bytes: &[u8], filename: &str, json: Option<&serde_json::Value>) -> Result<Form> {
  let mut form = Form::new()
    .part("attachment", Part::bytes(bytes.to_vec()).file_name(filename.to_string()))
    .text("file_name", filename.to_string());

  if let Some(json) = json {
    form = form.text("JSONString", serde_json::to_string(json)?);
  }
  Ok(form)
}

/// Error for a non-2xx response
fn status_error(status: StatusCode, body: &str) -> Error {
  if let Ok(envelope) = serde_json::from_str::<StatusResponse>(body) {
    if envelope.code != 0 {
      error!("Request failed with status {}: {}", status, envelope.message);
      return Error::Api { code: envelope.code, message: envelope.message };
    }
  }

  error!("Request failed with status: {}", status);
  let detail = excerpt(body, 200);
  let message = if detail.trim().is_empty() { status.to_string() } else { format!("{status}: {detail}") };
  Error::Status { status: status.as_u16(), message }
}

/// At most `max` bytes of `text`, cut on a char boundary
fn excerpt(text: &str, max: usize) -> &str {
  if text.len() <= max {
    return text;
  }
  let mut end = max;
  while !text.is_char_boundary(end) {
    end -= 1;
  }
  &text[..end]
}
