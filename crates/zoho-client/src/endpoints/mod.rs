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

pub mod contact_persons;
pub mod invoices;
pub mod subscription_invoices;

use crate::transport::{Endpoint, RequestOptions, Transport};
use governor::{
  RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use zoho_core::{ApiFamily, Error, Result};
use zoho_models::ApiResponse;

/// Rate limiter shared by every endpoint group of one client
pub type ClientRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Base trait for endpoint implementations
///
/// Ties an endpoint group to the API family it talks to.
pub trait EndpointBase {
  /// API family serving this group
  const FAMILY: ApiFamily;

  /// Shared transport, rate limiter and per-call options
  fn core(&self) -> &EndpointCore;

  /// Descriptor for `segments` under this family's base URL
  fn endpoint(&self, action: &str, method: Method, segments: &[&str]) -> Result<Endpoint> {
    self.core().transport.endpoint(Self::FAMILY, action, method, segments)
  }
}

/// Implements `EndpointBase` plus construction and `with_options` for an
/// endpoint group holding a `core: EndpointCore` field
macro_rules! impl_endpoint_base {
  ($struct_name:ident, $family:expr) => {
    impl $struct_name {
      /// Create a new endpoint group
      pub fn new(transport: Arc<Transport>, rate_limiter: Arc<ClientRateLimiter>) -> Self {
        Self { core: EndpointCore::new(transport, rate_limiter) }
      }

      /// Attach extra query parameters and a timeout to every call made
      /// through this group
      pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.core.options = options;
        self
      }
    }

    impl EndpointBase for $struct_name {
      const FAMILY: ApiFamily = $family;

      fn core(&self) -> &EndpointCore {
        &self.core
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Common endpoint structure
///
/// All endpoint groups share a transport layer and rate limiter, plus the
/// caller's per-call options.
pub struct EndpointCore {
  pub transport: Arc<Transport>,
  pub rate_limiter: Arc<ClientRateLimiter>,
  pub options: RequestOptions,
}

impl EndpointCore {
  /// Create a new endpoint core
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<ClientRateLimiter>) -> Self {
    Self { transport, rate_limiter, options: RequestOptions::default() }
  }

  /// Wait for rate limit before making a request
  pub async fn wait_for_rate_limit(&self) {
    self.rate_limiter.until_ready().await;
  }

  /// Pace, apply caller options, send, then decode and check the envelope
  pub async fn call<T>(&self, endpoint: Endpoint) -> Result<T>
  where
    T: DeserializeOwned + ApiResponse,
  {
    self.wait_for_rate_limit().await;
    let endpoint = endpoint.with_options(&self.options);
    let result = self.transport.execute_json::<T>(&endpoint).await;
    check_response(&endpoint.name, result)
  }

  /// Pace, apply caller options and return the raw body
  pub async fn download(&self, endpoint: Endpoint) -> Result<Vec<u8>> {
    self.wait_for_rate_limit().await;
    let endpoint = endpoint.with_options(&self.options);
    self
      .transport
      .execute_bytes(&endpoint)
      .await
      .map_err(|e| Error::operation(endpoint.name.as_str(), e))
  }
}

/// Decode-and-check.
///
/// Dispatch failures are wrapped with `action`. A decoded envelope with a
/// non-zero code becomes [`Error::Api`] carrying the envelope's code and
/// message, also wrapped with `action`.
pub fn check_response<T: ApiResponse>(action: &str, result: Result<T>) -> Result<T> {
  match result {
    Ok(envelope) if envelope.is_success() => Ok(envelope),
    Ok(envelope) => {
      debug!(code = envelope.code(), "{} rejected: {}", action, envelope.message());
      Err(Error::operation(
        action,
        Error::Api { code: envelope.code(), message: envelope.message().to_string() },
      ))
    }
    Err(e) => Err(Error::operation(action, e)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use governor::Quota;
  use std::num::NonZeroU32;
  use zoho_models::StatusResponse;

  #[test]
  fn test_endpoint_core_creation() {
    let transport = Arc::new(Transport::new_mock());
    let quota = Quota::per_minute(NonZeroU32::new(100).unwrap());
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    let core = EndpointCore::new(transport, rate_limiter);

    assert_eq!(core.transport.base_url(ApiFamily::Invoicing), "https://mock.zoho.test/invoice/v3/");
    assert!(core.options.is_empty());
  }

  #[test]
  fn test_check_response_success_passes_envelope_through() {
    let envelope = StatusResponse { code: 0, message: "The invoice has been sent.".to_string() };
    let checked = check_response("Failed to send invoice", Ok(envelope.clone())).unwrap();
    assert_eq!(checked, envelope);
  }

  #[test]
  fn test_check_response_non_zero_code() {
    let envelope = StatusResponse { code: 1002, message: "Invoice does not exist.".to_string() };
    let err = check_response("Failed to retrieve invoice", Ok(envelope)).unwrap_err();

    assert_eq!(err.action(), Some("Failed to retrieve invoice"));
    assert_eq!(err.api_code(), Some(1002));
    assert!(err.to_string().contains("Invoice does not exist."));
  }

  #[test]
  fn test_check_response_wraps_dispatch_error() {
    let result: Result<StatusResponse> = Err(Error::Http("connection refused".to_string()));
    let err = check_response("Failed to delete invoice", result).unwrap_err();

    assert_eq!(err.action(), Some("Failed to delete invoice"));
    assert!(matches!(err.root(), Error::Http(_)));
  }
}
