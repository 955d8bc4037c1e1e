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

//! Invoice endpoints of the Zoho Subscriptions `v1` API

use super::{impl_endpoint_base, ClientRateLimiter, EndpointBase, EndpointCore};
use crate::transport::{RequestOptions, Transport};
use reqwest::Method;
use std::sync::Arc;
use tracing::instrument;
use zoho_core::{ApiFamily, Result};
use zoho_models::subscriptions::{
  AddItemsRequest, AddItemsResponse, AttachmentResponse, CollectChargeResponse,
  CollectChargeViaBankAccountRequest, CollectChargeViaCreditCardRequest, EmailInvoiceRequest,
  InvoiceResponse, InvoiceStatus, InvoicesResponse,
};
use zoho_models::StatusResponse;

const INVOICES: &str = "invoices";

/// Subscription invoice endpoints
pub struct SubscriptionInvoiceEndpoints {
  core: EndpointCore,
}

impl_endpoint_base!(SubscriptionInvoiceEndpoints, ApiFamily::Subscriptions);

impl SubscriptionInvoiceEndpoints {
  /// List invoices in the given status
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let unpaid = client.subscription_invoices().list_all_invoices(InvoiceStatus::Unpaid).await?;
  /// for invoice in &unpaid.invoices {
  ///     println!("{:?} {:?}", invoice.number, invoice.balance);
  /// }
  /// ```
  #[instrument(skip(self), fields(status = %status))]
  pub async fn list_all_invoices(&self, status: InvoiceStatus) -> Result<InvoicesResponse> {
    self.list_invoices_with_param(status, None).await
  }

  /// Invoices raised for one subscription
  #[instrument(skip(self), fields(status = %status))]
  pub async fn list_invoices_for_subscription(
    &self,
    status: InvoiceStatus,
    subscription_id: &str,
  ) -> Result<InvoicesResponse> {
    self.list_invoices_with_param(status, Some(("subscription_id", subscription_id))).await
  }

  /// Invoices raised for one customer
  #[instrument(skip(self), fields(status = %status))]
  pub async fn list_invoices_for_customer(
    &self,
    status: InvoiceStatus,
    customer_id: &str,
  ) -> Result<InvoicesResponse> {
    self.list_invoices_with_param(status, Some(("customer_id", customer_id))).await
  }

  async fn list_invoices_with_param(
    &self,
    status: InvoiceStatus,
    filter: Option<(&str, &str)>,
  ) -> Result<InvoicesResponse> {
    let mut endpoint = self
      .endpoint("Failed to retrieve invoices", Method::GET, &[INVOICES])?
      .query("filter_by", status.as_str());

    if let Some((name, value)) = filter {
      endpoint = endpoint.query(name, value);
    }

    self.core.call(endpoint).await
  }

  #[instrument(skip(self))]
  pub async fn get_invoice(&self, invoice_id: &str) -> Result<InvoiceResponse> {
    let endpoint = self.endpoint("Failed to retrieve invoice", Method::GET, &[INVOICES, invoice_id])?;

    self.core.call(endpoint).await
  }

  /// Download the rendered PDF of an invoice
  #[instrument(skip(self))]
  pub async fn get_invoice_pdf(&self, invoice_id: &str) -> Result<Vec<u8>> {
    let endpoint = self
      .endpoint("Failed to download invoice PDF", Method::GET, &[INVOICES, invoice_id])?
      .query("accept", "pdf");

    self.core.download(endpoint).await
  }

  /// Attach a file to an invoice
  #[instrument(skip(self, file), fields(file_size = file.len()))]
  pub async fn add_attachment(
    &self,
    invoice_id: &str,
    file: Vec<u8>,
    filename: &str,
    can_send_in_email: bool,
  ) -> Result<AttachmentResponse> {
    let endpoint = self
      .endpoint("Failed to attach file to invoice", Method::POST, &[INVOICES, invoice_id, "attachment"])?
      .query("can_send_in_mail", can_send_in_email.to_string())
      .file(file, filename, None::<&()>)?;

    self.core.call(endpoint).await
  }

  /// Email an invoice to the customer
  #[instrument(skip(self, request), fields(recipients = request.to_mail_ids.len()))]
  pub async fn email_invoice(
    &self,
    invoice_id: &str,
    request: &EmailInvoiceRequest,
  ) -> Result<StatusResponse> {
    let endpoint = self
      .endpoint("Failed to email invoice", Method::POST, &[INVOICES, invoice_id, "email"])?
      .json(request)?;

    self.core.call(endpoint).await
  }

  /// Add line items to a pending invoice
  #[instrument(skip(self, request), fields(items = request.invoice_items.len()))]
  pub async fn add_items(&self, invoice_id: &str, request: &AddItemsRequest) -> Result<AddItemsResponse> {
    let endpoint = self
      .endpoint("Failed to add items to invoice", Method::POST, &[INVOICES, invoice_id, "lineitems"])?
      .json(request)?;

    self.core.call(endpoint).await
  }

  /// Charge the outstanding balance to a stored card
  #[instrument(skip(self, request))]
  pub async fn collect_charge_via_credit_card(
    &self,
    invoice_id: &str,
    request: &CollectChargeViaCreditCardRequest,
  ) -> Result<CollectChargeResponse> {
    let endpoint = self
      .endpoint("Failed to collect charge via credit card", Method::POST, &[INVOICES, invoice_id, "collect"])?
      .json(request)?;

    self.core.call(endpoint).await
  }

  /// Debit the outstanding balance from a bank account
  #[instrument(skip(self, request))]
  pub async fn collect_charge_via_bank_account(
    &self,
    invoice_id: &str,
    request: &CollectChargeViaBankAccountRequest,
  ) -> Result<CollectChargeResponse> {
    let endpoint = self
      .endpoint("Failed to collect charge via bank account", Method::POST, &[INVOICES, invoice_id, "collect"])?
      .json(request)?;

    self.core.call(endpoint).await
  }

  #[instrument(skip(self))]
  pub async fn void_invoice(&self, invoice_id: &str) -> Result<StatusResponse> {
    let endpoint = self.endpoint("Failed to void invoice", Method::POST, &[INVOICES, invoice_id, "void"])?;

    self.core.call(endpoint).await
  }
}
