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

//! Configuration management for the Zoho client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Which invoicing product the `v3` endpoints are served from.
///
/// Zoho Invoice and Zoho Books expose the same invoice and contact resources
/// under different base paths. The choice is made once, when the
/// configuration is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
  /// `https://www.zohoapis.{tld}/invoice/v3/`
  #[default]
  Invoice,
  /// `https://www.zohoapis.{tld}/books/v3/`
  Books,
}

impl Product {
  /// Base URL of the invoicing API for this product in the given data center
  pub fn invoice_base_url(self, tld: &str) -> String {
    match self {
      Product::Invoice => format!("https://www.zohoapis.{tld}/invoice/v3/"),
      Product::Books => format!("https://www.zohoapis.{tld}/books/v3/"),
    }
  }
}

impl fmt::Display for Product {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Product::Invoice => write!(f, "invoice"),
      Product::Books => write!(f, "books"),
    }
  }
}

impl FromStr for Product {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "invoice" => Ok(Product::Invoice),
      "books" => Ok(Product::Books),
      other => Err(Error::Config(format!("Unknown product '{other}', expected invoice or books"))),
    }
  }
}

/// Base URL of the subscriptions API in the given data center
pub fn subscriptions_base_url(tld: &str) -> String {
  format!("https://subscriptions.zoho.{tld}/api/v1/")
}

/// Base URL of the OAuth accounts server in the given data center
pub fn accounts_url(tld: &str) -> String {
  format!("https://accounts.zoho.{tld}")
}

/// Main configuration struct for the Zoho client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Organization id sent in the organization header of every request
  pub organization_id: String,

  /// Invoicing product serving the `v3` endpoints
  pub product: Product,

  /// Data center top level domain ("com", "eu", "in", ...)
  pub tld: String,

  /// OAuth client id, required for token refresh
  pub client_id: Option<String>,

  /// OAuth client secret, required for token refresh
  pub client_secret: Option<String>,

  /// OAuth refresh token
  pub refresh_token: Option<String>,

  /// Pre-issued access token
  pub access_token: Option<String>,

  /// API rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for invoices and contact persons
  pub invoice_base_url: String,

  /// Base URL for the subscriptions API
  pub subscriptions_base_url: String,

  /// OAuth accounts server
  pub accounts_url: String,
}

impl Config {
  /// Configuration for the Invoice product in the `.com` data center
  pub fn new(organization_id: impl Into<String>) -> Self {
    let tld = crate::DEFAULT_TLD.to_string();
    Config {
      organization_id: organization_id.into(),
      product: Product::Invoice,
      client_id: None,
      client_secret: None,
      refresh_token: None,
      access_token: None,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      invoice_base_url: Product::Invoice.invoice_base_url(&tld),
      subscriptions_base_url: subscriptions_base_url(&tld),
      accounts_url: accounts_url(&tld),
      tld,
    }
  }

  /// Select the invoicing product; re-derives the invoicing base URL
  pub fn with_product(mut self, product: Product) -> Self {
    self.product = product;
    self.invoice_base_url = product.invoice_base_url(&self.tld);
    self
  }

  /// Select the data center; re-derives every base URL
  pub fn with_tld(mut self, tld: impl Into<String>) -> Self {
    self.tld = tld.into();
    self.invoice_base_url = self.product.invoice_base_url(&self.tld);
    self.subscriptions_base_url = subscriptions_base_url(&self.tld);
    self.accounts_url = accounts_url(&self.tld);
    self
  }

  /// OAuth client credentials and refresh token
  pub fn with_oauth(
    mut self,
    client_id: impl Into<String>,
    client_secret: impl Into<String>,
    refresh_token: impl Into<String>,
  ) -> Self {
    self.client_id = Some(client_id.into());
    self.client_secret = Some(client_secret.into());
    self.refresh_token = Some(refresh_token.into());
    self
  }

  /// Pre-issued access token
  pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
    self.access_token = Some(token.into());
    self
  }

  /// Override the invoicing base URL
  pub fn with_invoice_base_url(mut self, url: impl Into<String>) -> Self {
    self.invoice_base_url = url.into();
    self
  }

  /// Override the subscriptions base URL
  pub fn with_subscriptions_base_url(mut self, url: impl Into<String>) -> Self {
    self.subscriptions_base_url = url.into();
    self
  }

  /// Override the OAuth accounts server
  pub fn with_accounts_url(mut self, url: impl Into<String>) -> Self {
    self.accounts_url = url.into();
    self
  }

  /// Requests per minute
  pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
    self.rate_limit = rate_limit;
    self
  }

  /// Request timeout in seconds
  pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let organization_id = env::var("ZOHO_ORGANIZATION_ID")
      .map_err(|_| Error::Config("ZOHO_ORGANIZATION_ID not set".to_string()))?;

    let product = match env::var("ZOHO_PRODUCT") {
      Ok(value) => value.parse()?,
      Err(_) => Product::default(),
    };

    let tld = env::var("ZOHO_TLD").unwrap_or_else(|_| crate::DEFAULT_TLD.to_string());

    let rate_limit = env::var("ZOHO_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid ZOHO_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("ZOHO_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid ZOHO_TIMEOUT_SECS".to_string()))?;

    let mut config = Config::new(organization_id)
      .with_tld(tld)
      .with_product(product)
      .with_rate_limit(rate_limit)
      .with_timeout_secs(timeout_secs);

    config.client_id = env::var("ZOHO_CLIENT_ID").ok();
    config.client_secret = env::var("ZOHO_CLIENT_SECRET").ok();
    config.refresh_token = env::var("ZOHO_REFRESH_TOKEN").ok();
    config.access_token = env::var("ZOHO_ACCESS_TOKEN").ok();

    if let Ok(url) = env::var("ZOHO_INVOICE_BASE_URL") {
      config.invoice_base_url = url;
    }
    if let Ok(url) = env::var("ZOHO_SUBSCRIPTIONS_BASE_URL") {
      config.subscriptions_base_url = url;
    }
    if let Ok(url) = env::var("ZOHO_ACCOUNTS_URL") {
      config.accounts_url = url;
    }

    config.validate()?;
    Ok(config)
  }

  /// Check that the configuration can be used to build a client
  pub fn validate(&self) -> Result<()> {
    if self.organization_id.trim().is_empty() {
      return Err(Error::Config("organization_id must not be empty".to_string()));
    }
    for (name, value) in [
      ("invoice_base_url", &self.invoice_base_url),
      ("subscriptions_base_url", &self.subscriptions_base_url),
      ("accounts_url", &self.accounts_url),
    ] {
      Url::parse(value).map_err(|e| Error::Config(format!("Invalid {name} '{value}': {e}")))?;
    }
    Ok(())
  }

  /// True when client id, secret and refresh token are all present
  pub fn has_oauth_credentials(&self) -> bool {
    self.client_id.is_some() && self.client_secret.is_some() && self.refresh_token.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config_targets_invoice() {
    let config = Config::new("org-1");
    assert_eq!(config.product, Product::Invoice);
    assert_eq!(config.invoice_base_url, "https://www.zohoapis.com/invoice/v3/");
    assert_eq!(config.subscriptions_base_url, "https://subscriptions.zoho.com/api/v1/");
    assert_eq!(config.accounts_url, "https://accounts.zoho.com");
    assert_eq!(config.rate_limit, crate::DEFAULT_RATE_LIMIT);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_books_product_switches_base_url() {
    let config = Config::new("org-1").with_product(Product::Books);
    assert!(config.invoice_base_url.ends_with("/books/v3/"));
  }

  #[test]
  fn test_tld_rederives_urls() {
    let config = Config::new("org-1").with_product(Product::Books).with_tld("eu");
    assert_eq!(config.invoice_base_url, "https://www.zohoapis.eu/books/v3/");
    assert_eq!(config.subscriptions_base_url, "https://subscriptions.zoho.eu/api/v1/");
    assert_eq!(config.accounts_url, "https://accounts.zoho.eu");
  }

  #[test]
  fn test_product_parsing() {
    assert_eq!("Books".parse::<Product>().unwrap(), Product::Books);
    assert_eq!(" invoice ".parse::<Product>().unwrap(), Product::Invoice);
    assert!("crm".parse::<Product>().is_err());
  }

  #[test]
  fn test_validate_rejects_bad_input() {
    assert!(Config::new("  ").validate().is_err());
    assert!(Config::new("org").with_invoice_base_url("not a url").validate().is_err());
  }

  #[test]
  fn test_config_from_env() {
    env::remove_var("ZOHO_ORGANIZATION_ID");
    let err = Config::from_env().unwrap_err();
    assert!(matches!(&err, Error::Config(message) if message.contains("ZOHO_ORGANIZATION_ID")));

    env::set_var("ZOHO_ORGANIZATION_ID", "env-org");
    env::set_var("ZOHO_PRODUCT", "books");
    let config = Config::from_env().unwrap();
    assert_eq!(config.organization_id, "env-org");
    assert_eq!(config.product, Product::Books);
    assert!(config.invoice_base_url.contains("/books/v3/"));
  }
}
