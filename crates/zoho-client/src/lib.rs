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

//! # zoho-client
//!
//! Async client for the Zoho Invoice, Zoho Books and Zoho Subscriptions APIs.
//!
//! ## Features
//!
//! - **Typed operations**: one method per remote action, returning the typed
//!   response envelope from zoho-models
//! - **Uniform errors**: transport, remote business and decode failures all
//!   surface as `zoho_core::Error`, labelled with the failing action
//! - **Token refresh**: expired or rejected access tokens are refreshed once,
//!   even under concurrent use
//! - **Rate Limiting**: requests are paced to the configured per-minute quota
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zoho_client::ZohoClient;
//! use zoho_core::Config;
//! use zoho_models::subscriptions::InvoiceStatus;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ZohoClient::from_config(Config::from_env()?)?;
//!
//!     let pdf = client.invoices().get_invoice_pdf("982000000567114").await?;
//!     std::fs::write("invoice.pdf", pdf)?;
//!
//!     let unpaid = client
//!         .subscription_invoices()
//!         .list_all_invoices(InvoiceStatus::Unpaid)
//!         .await?;
//!     println!("{} unpaid invoices", unpaid.invoices.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Per-call options
//!
//! Extra query parameters and a timeout can be attached to an endpoint group
//! with `with_options`; they override the operation's defaults:
//!
//! ```rust,no_run
//! # use zoho_client::{RequestOptions, ZohoClient};
//! # async fn run(client: ZohoClient) -> zoho_core::Result<()> {
//! let overdue = client
//!     .invoices()
//!     .with_options(RequestOptions::new().query("filter_by", "Status.Overdue"))
//!     .list_invoices()
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod transport;

pub use auth::{OAuthTokenProvider, StaticTokenProvider, TokenManager, TokenProvider};
pub use client::ZohoClient;
pub use transport::{build_url, Endpoint, RequestBody, RequestOptions, Transport};
pub use zoho_core::{Config, Error, Product, Result};

pub use endpoints::{
  check_response,
  contact_persons::ContactPersonEndpoints,
  invoices::{CreateInvoiceOutcome, InvoiceEndpoints},
  subscription_invoices::SubscriptionInvoiceEndpoints,
  EndpointBase,
};
