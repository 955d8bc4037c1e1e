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

//! # zoho-core
//!
//! Configuration and error types shared by the zoho-* crates.

pub mod config;
pub mod error;

pub use config::{Config, Product};
pub use error::{Error, Result};

/// Organization header sent with every invoicing (Invoice and Books) request.
pub const INVOICE_ORGANIZATION_HEADER: &str = "X-com-zoho-invoice-organizationid";

/// Organization header sent with every subscriptions request.
pub const SUBSCRIPTIONS_ORGANIZATION_HEADER: &str = "X-com-zoho-subscriptions-organizationid";

/// Authorization scheme prefix expected by Zoho for OAuth access tokens.
pub const AUTH_SCHEME: &str = "Zoho-oauthtoken";

/// Default top level domain of the Zoho data center.
pub const DEFAULT_TLD: &str = "com";

/// Zoho's documented limit is 100 requests per minute per organization.
pub const DEFAULT_RATE_LIMIT: u32 = 100; // requests per minute

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The remote product lines covered by this library.
///
/// Each family has its own base URL and its own organization header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
  /// Zoho Invoice / Zoho Books `v3` APIs
  Invoicing,
  /// Zoho Subscriptions `v1` API
  Subscriptions,
}

impl ApiFamily {
  /// Header carrying the organization id for this family
  pub const fn organization_header(self) -> &'static str {
    match self {
      ApiFamily::Invoicing => INVOICE_ORGANIZATION_HEADER,
      ApiFamily::Subscriptions => SUBSCRIPTIONS_ORGANIZATION_HEADER,
    }
  }
}

impl std::fmt::Display for ApiFamily {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ApiFamily::Invoicing => write!(f, "invoicing"),
      ApiFamily::Subscriptions => write!(f, "subscriptions"),
    }
  }
}
