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

use crate::auth::{OAuthTokenProvider, StaticTokenProvider, TokenManager, TokenProvider};
use crate::endpoints::{
  contact_persons::ContactPersonEndpoints, invoices::InvoiceEndpoints,
  subscription_invoices::SubscriptionInvoiceEndpoints, ClientRateLimiter,
};
use crate::transport::Transport;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;
use zoho_core::{Config, Error, Product, Result};

/// Main Zoho API client
///
/// Gives access to the invoicing (Invoice or Books) and subscriptions
/// endpoints through endpoint groups. Handles authentication, token refresh
/// and rate limiting for all of them.
///
/// # Examples
///
/// ```ignore
/// use zoho_client::ZohoClient;
/// use zoho_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ZohoClient::from_config(Config::from_env()?)?;
///
///     let invoice = client.invoices().get_invoice("982000000567114").await?;
///     println!("Balance: {:?}", invoice.invoice.balance);
///
///     Ok(())
/// }
/// ```
pub struct ZohoClient {
  rate_limiter: Arc<ClientRateLimiter>,
  transport: Arc<Transport>,
  product: Product,
}

impl ZohoClient {
  /// Create a client using `provider` for access tokens
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be created.
  pub fn new(config: Config, provider: Arc<dyn TokenProvider>) -> Result<Self> {
    config.validate()?;

    let rate_limit = NonZeroU32::new(config.rate_limit)
      .or(NonZeroU32::new(zoho_core::DEFAULT_RATE_LIMIT))
      .ok_or_else(|| Error::Config("rate_limit must be non-zero".to_string()))?;
    let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_minute(rate_limit)));

    let tokens = Arc::new(TokenManager::new(provider));
    let transport = Arc::new(Transport::new(&config, tokens)?);

    debug!(product = %config.product, "Zoho client ready");
    Ok(Self { rate_limiter, transport, product: config.product })
  }

  /// Create a client with the token provider the configuration allows.
  ///
  /// OAuth credentials take precedence; a bare access token is used as a
  /// static token.
  pub fn from_config(config: Config) -> Result<Self> {
    let provider: Arc<dyn TokenProvider> = if config.has_oauth_credentials() {
      Arc::new(OAuthTokenProvider::from_config(&config)?)
    } else if let Some(token) = &config.access_token {
      Arc::new(StaticTokenProvider::new(token.clone()))
    } else {
      return Err(Error::Config(
        "No credentials: set ZOHO_ACCESS_TOKEN or the OAuth client id, secret and refresh token"
          .to_string(),
      ));
    };

    Self::new(config, provider)
  }

  /// Create a client with a caller-supplied rate limiter
  pub fn with_rate_limiter(
    config: Config,
    provider: Arc<dyn TokenProvider>,
    rate_limiter: Arc<ClientRateLimiter>,
  ) -> Result<Self> {
    let mut client = Self::new(config, provider)?;
    client.rate_limiter = rate_limiter;
    Ok(client)
  }

  /// Invoicing product the invoice and contact person endpoints talk to
  pub fn product(&self) -> Product {
    self.product
  }

  /// Invoice endpoints of the invoicing API
  pub fn invoices(&self) -> InvoiceEndpoints {
    InvoiceEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Contact person endpoints of the invoicing API
  pub fn contact_persons(&self) -> ContactPersonEndpoints {
    ContactPersonEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Invoice endpoints of the subscriptions API
  pub fn subscription_invoices(&self) -> SubscriptionInvoiceEndpoints {
    SubscriptionInvoiceEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Wait for rate limit to allow next request
  ///
  /// Endpoint groups do this before every call; use it to pace work done
  /// outside of them.
  pub async fn wait_for_rate_limit(&self) {
    self.rate_limiter.until_ready().await;
  }
}

impl std::fmt::Debug for ZohoClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ZohoClient")
      .field("transport", &self.transport)
      .field("product", &self.product)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}
