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

//! Access token providers and single-flight refresh

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use zoho_core::{Config, Error, Result};

/// Seconds subtracted from `expires_in` so a token is renewed before the
/// server stops accepting it
pub const EXPIRY_SKEW_SECS: i64 = 60;

/// Source of OAuth access tokens.
///
/// Implementations own the token state. Callers go through [`TokenManager`],
/// which guarantees that concurrent callers never refresh twice.
#[async_trait]
pub trait TokenProvider: Send + Sync {
  /// Token to send right now, if one has been obtained
  fn current_token(&self) -> Option<String>;

  /// True when the current token must not be used any more
  fn is_expired(&self) -> bool;

  /// Obtain a new access token
  async fn refresh(&self) -> Result<()>;
}

/// Fixed, pre-issued access token
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
  token: String,
}

impl StaticTokenProvider {
  pub fn new(token: impl Into<String>) -> Self {
    Self { token: token.into() }
  }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
  fn current_token(&self) -> Option<String> {
    Some(self.token.clone())
  }

  fn is_expired(&self) -> bool {
    false
  }

  async fn refresh(&self) -> Result<()> {
    Err(Error::Auth("Static access token cannot be refreshed".to_string()))
  }
}

#[derive(Debug, Clone)]
struct IssuedToken {
  access_token: String,
  /// `None` when the token was supplied without a known lifetime
  expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct TokenGrant {
  access_token: Option<String>,
  expires_in: Option<i64>,
  error: Option<String>,
}

/// Refresh-token grant against the Zoho accounts server
pub struct OAuthTokenProvider {
  http: Client,
  token_url: String,
  client_id: String,
  client_secret: String,
  refresh_token: String,
  issued: RwLock<Option<IssuedToken>>,
}

impl OAuthTokenProvider {
  /// Provider for the given accounts server (e.g. `https://accounts.zoho.com`)
  pub fn new(
    accounts_url: &str,
    client_id: impl Into<String>,
    client_secret: impl Into<String>,
    refresh_token: impl Into<String>,
  ) -> Result<Self> {
    let http = Client::builder()
      .user_agent(concat!("zoho-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

    Ok(Self {
      http,
      token_url: format!("{}/oauth/v2/token", accounts_url.trim_end_matches('/')),
      client_id: client_id.into(),
      client_secret: client_secret.into(),
      refresh_token: refresh_token.into(),
      issued: RwLock::new(None),
    })
  }

  /// Provider built from the OAuth fields of a [`Config`].
  ///
  /// A configured access token is used until the server rejects it.
  pub fn from_config(config: &Config) -> Result<Self> {
    let (Some(client_id), Some(client_secret), Some(refresh_token)) =
      (&config.client_id, &config.client_secret, &config.refresh_token)
    else {
      return Err(Error::Config(
        "OAuth requires ZOHO_CLIENT_ID, ZOHO_CLIENT_SECRET and ZOHO_REFRESH_TOKEN".to_string(),
      ));
    };

    let provider = Self::new(&config.accounts_url, client_id, client_secret, refresh_token)?;
    if let Some(token) = &config.access_token {
      provider.store(IssuedToken { access_token: token.clone(), expires_at: None });
    }
    Ok(provider)
  }

  /// Seed the provider with an already issued token
  pub fn with_access_token(self, token: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
    self.store(IssuedToken { access_token: token.into(), expires_at });
    self
  }

  /// Expiry of the current token, if known
  pub fn expires_at(&self) -> Option<DateTime<Utc>> {
    self.read().and_then(|issued| issued.expires_at)
  }

  fn read(&self) -> Option<IssuedToken> {
    self.issued.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
  }

  fn store(&self, token: IssuedToken) {
    *self.issued.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token);
  }
}

impl std::fmt::Debug for OAuthTokenProvider {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OAuthTokenProvider")
      .field("token_url", &self.token_url)
      .field("client_id", &self.client_id)
      .field("expires_at", &self.expires_at())
      .finish()
  }
}

#[async_trait]
impl TokenProvider for OAuthTokenProvider {
  fn current_token(&self) -> Option<String> {
    self.read().map(|issued| issued.access_token)
  }

  fn is_expired(&self) -> bool {
    match self.read() {
      None => true,
      Some(IssuedToken { expires_at: Some(at), .. }) => Utc::now() >= at,
      Some(IssuedToken { expires_at: None, .. }) => false,
    }
  }

  #[instrument(skip(self))]
  async fn refresh(&self) -> Result<()> {
    debug!("Requesting new access token from {}", self.token_url);

    let params = [
      ("grant_type", "refresh_token"),
      ("client_id", self.client_id.as_str()),
      ("client_secret", self.client_secret.as_str()),
      ("refresh_token", self.refresh_token.as_str()),
    ];

    let response = self
      .http
      .post(&self.token_url)
      .form(&params)
      .send()
      .await
      .map_err(|e| Error::Auth(format!("Token request failed: {e}")))?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Auth(format!("Failed to read token response: {e}")))?;

    if !status.is_success() {
      return Err(Error::Auth(format!("Token endpoint returned {status}")));
    }

    let grant: TokenGrant = serde_json::from_str(&text)
      .map_err(|e| Error::Auth(format!("Unexpected token response: {e}")))?;

    if let Some(error) = grant.error {
      return Err(Error::Auth(format!("Token refresh rejected: {error}")));
    }

    let access_token =
      grant.access_token.ok_or_else(|| Error::Auth("Token response has no access_token".to_string()))?;
    let expires_at = grant
      .expires_in
      .map(|secs| Utc::now() + ChronoDuration::seconds((secs - EXPIRY_SKEW_SECS).max(0)));

    self.store(IssuedToken { access_token, expires_at });
    info!("Access token refreshed");
    Ok(())
  }
}

/// Serializes token refresh for every request sharing one provider
pub struct TokenManager {
  provider: Arc<dyn TokenProvider>,
  refresh_lock: Mutex<()>,
}

impl TokenManager {
  pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
    Self { provider, refresh_lock: Mutex::new(()) }
  }

  /// A usable token, refreshing first when the current one has expired.
  ///
  /// Callers that find the token expired queue on the refresh lock and
  /// re-check after acquiring it, so only the first one refreshes.
  pub async fn token(&self) -> Result<String> {
    if let Some(token) = self.usable_token() {
      return Ok(token);
    }

    let _guard = self.refresh_lock.lock().await;
    if let Some(token) = self.usable_token() {
      return Ok(token);
    }

    debug!("Access token missing or expired, refreshing");
    self.provider.refresh().await?;
    self.fresh_token()
  }

  /// Replace a token the server rejected.
  ///
  /// Does nothing but return the current token when another caller has
  /// already replaced `rejected`.
  pub async fn refresh_rejected(&self, rejected: &str) -> Result<String> {
    let _guard = self.refresh_lock.lock().await;
    if self.provider.current_token().as_deref() == Some(rejected) {
      warn!("Access token rejected, refreshing");
      self.provider.refresh().await?;
    }
    self.fresh_token()
  }

  fn usable_token(&self) -> Option<String> {
    if self.provider.is_expired() {
      return None;
    }
    self.provider.current_token()
  }

  fn fresh_token(&self) -> Result<String> {
    self
      .provider
      .current_token()
      .ok_or_else(|| Error::Auth("Token provider returned no access token".to_string()))
  }
}

impl std::fmt::Debug for TokenManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TokenManager").field("expired", &self.provider.is_expired()).finish()
  }
}
