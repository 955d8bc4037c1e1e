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

//! Invoice endpoints of the Zoho Invoice / Zoho Books `v3` API

use super::{impl_endpoint_base, ClientRateLimiter, EndpointBase, EndpointCore};
use crate::transport::{RequestOptions, Transport};
use reqwest::Method;
use std::sync::Arc;
use tracing::{instrument, warn};
use zoho_core::{ApiFamily, Error, Result};
use zoho_models::invoice::{
  AttachmentRequest, AttachmentResponse, CommentRequest, CommentResponse, CommentsResponse,
  CreateInvoiceRequest, CreateInvoiceResponse, EmailInvoiceRequest, GetInvoiceResponse,
  ListInvoicesResponse, UpdateInvoiceRequest, UpdateInvoiceResponse,
};
use zoho_models::StatusResponse;

const INVOICES: &str = "invoices";

/// Query every invoice operation sends unless the caller overrides it
const DEFAULT_QUERY: [(&str, &str); 1] = [("filter_by", "")];

/// Result of [`InvoiceEndpoints::create_invoice`].
///
/// The invoice exists once this value is returned. `mark_sent_error` is set
/// when marking it as sent was requested and failed.
#[derive(Debug)]
pub struct CreateInvoiceOutcome {
  pub response: CreateInvoiceResponse,
  pub mark_sent_error: Option<Error>,
}

impl CreateInvoiceOutcome {
  /// True when creation and, if requested, marking as sent both succeeded
  pub fn is_complete(&self) -> bool {
    self.mark_sent_error.is_none()
  }
}

/// Invoice endpoints
pub struct InvoiceEndpoints {
  core: EndpointCore,
}

impl_endpoint_base!(InvoiceEndpoints, ApiFamily::Invoicing);

impl InvoiceEndpoints {
  /// Create an invoice, optionally marking it as sent right away.
  ///
  /// A failed creation is an error. When creation succeeds but marking as
  /// sent fails, the created invoice is still returned with the failure in
  /// [`CreateInvoiceOutcome::mark_sent_error`].
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let request = CreateInvoiceRequest {
  ///     customer_id: "982000000567001".to_string(),
  ///     line_items: vec![InvoiceLineItem { item_id: Some("982000000030049".into()), ..Default::default() }],
  ///     ..Default::default()
  /// };
  /// let outcome = client.invoices().create_invoice(&request, true).await?;
  /// if let Some(err) = outcome.mark_sent_error {
  ///     eprintln!("created but not sent: {err}");
  /// }
  /// ```
  #[instrument(skip(self, request), fields(customer_id = %request.customer_id))]
  pub async fn create_invoice(
    &self,
    request: &CreateInvoiceRequest,
    mark_sent: bool,
  ) -> Result<CreateInvoiceOutcome> {
    let endpoint = self
      .endpoint("Failed to create invoice", Method::POST, &[INVOICES])?
      .query_defaults(DEFAULT_QUERY)
      .json(request)?;

    let response: CreateInvoiceResponse = self.core.call(endpoint).await?;

    if !mark_sent {
      return Ok(CreateInvoiceOutcome { response, mark_sent_error: None });
    }

    let mark_sent_error = match response.invoice.invoice_id.as_deref() {
      Some(invoice_id) => self.mark_as_sent(invoice_id).await.err(),
      None => Some(Error::operation(
        "Failed to mark invoice as sent",
        Error::Parse("Created invoice has no invoice_id".to_string()),
      )),
    };

    if let Some(err) = &mark_sent_error {
      warn!("Invoice created but not marked as sent: {}", err);
    }

    Ok(CreateInvoiceOutcome { response, mark_sent_error })
  }

  /// Mark a draft invoice as sent
  #[instrument(skip(self))]
  pub async fn mark_as_sent(&self, invoice_id: &str) -> Result<StatusResponse> {
    self.change_status(invoice_id, "sent", "Failed to mark invoice as sent").await
  }

  /// Mark an invoice as void
  #[instrument(skip(self))]
  pub async fn mark_as_void(&self, invoice_id: &str) -> Result<StatusResponse> {
    self.change_status(invoice_id, "void", "Failed to mark invoice as void").await
  }

  /// Mark a voided invoice as draft
  #[instrument(skip(self))]
  pub async fn mark_as_draft(&self, invoice_id: &str) -> Result<StatusResponse> {
    self.change_status(invoice_id, "draft", "Failed to mark invoice as draft").await
  }

  async fn change_status(&self, invoice_id: &str, status: &str, action: &str) -> Result<StatusResponse> {
    let endpoint = self
      .endpoint(action, Method::POST, &[INVOICES, invoice_id, "status", status])?
      .query_defaults(DEFAULT_QUERY);

    self.core.call(endpoint).await
  }

  /// Get the details of an invoice
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let response = client.invoices().get_invoice("982000000567114").await?;
  /// println!("{:?} {:?}", response.invoice.invoice_number, response.invoice.total);
  /// ```
  #[instrument(skip(self))]
  pub async fn get_invoice(&self, invoice_id: &str) -> Result<GetInvoiceResponse> {
    let endpoint = self
      .endpoint("Failed to retrieve invoice", Method::GET, &[INVOICES, invoice_id])?
      .query_defaults(DEFAULT_QUERY);

    self.core.call(endpoint).await
  }

  /// Download the rendered PDF of an invoice
  #[instrument(skip(self))]
  pub async fn get_invoice_pdf(&self, invoice_id: &str) -> Result<Vec<u8>> {
    let endpoint = self
      .endpoint("Failed to download invoice PDF", Method::GET, &[INVOICES, invoice_id])?
      .query_defaults([("organization_id", self.core.transport.organization_id())])
      .query("accept", "pdf");

    self.core.download(endpoint).await
  }

  /// List invoices.
  ///
  /// Filters and paging (`filter_by`, `customer_id`, `page`, ...) are passed
  /// through [`RequestOptions`].
  #[instrument(skip(self))]
  pub async fn list_invoices(&self) -> Result<ListInvoicesResponse> {
    let endpoint = self
      .endpoint("Failed to list invoices", Method::GET, &[INVOICES])?
      .query_defaults(DEFAULT_QUERY);

    self.core.call(endpoint).await
  }

  /// Update an existing invoice
  #[instrument(skip(self, request))]
  pub async fn update_invoice(
    &self,
    invoice_id: &str,
    request: &UpdateInvoiceRequest,
  ) -> Result<UpdateInvoiceResponse> {
    let endpoint = self
      .endpoint("Failed to update invoice", Method::PUT, &[INVOICES, invoice_id])?
      .query_defaults(DEFAULT_QUERY)
      .json(request)?;

    self.core.call(endpoint).await
  }

  #[instrument(skip(self))]
  pub async fn delete_invoice(&self, invoice_id: &str) -> Result<StatusResponse> {
    let endpoint = self
      .endpoint("Failed to delete invoice", Method::DELETE, &[INVOICES, invoice_id])?
      .query_defaults(DEFAULT_QUERY);

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
      .query_defaults(DEFAULT_QUERY)
      .json(request)?;

    self.core.call(endpoint).await
  }

  /// Email an invoice with an extra file attached.
  ///
  /// The file is uploaded as multipart form data and `request` travels as
  /// the `JSONString` part.
  #[instrument(skip(self, request, file), fields(file_size = file.len()))]
  pub async fn email_invoice_with_file(
    &self,
    invoice_id: &str,
    request: &EmailInvoiceRequest,
    file: Vec<u8>,
    filename: &str,
  ) -> Result<StatusResponse> {
    let endpoint = self
      .endpoint("Failed to email invoice", Method::POST, &[INVOICES, invoice_id, "email"])?
      .query_defaults(DEFAULT_QUERY)
      .query_defaults([("send_attachment", "true")])
      .file(file, filename, Some(request))?;

    self.core.call(endpoint).await
  }

  /// Attach a file to an invoice
  #[instrument(skip(self, request, file), fields(file_size = file.len()))]
  pub async fn attach_file(
    &self,
    invoice_id: &str,
    request: &AttachmentRequest,
    file: Vec<u8>,
    filename: &str,
  ) -> Result<AttachmentResponse> {
    let endpoint = self
      .endpoint("Failed to attach file to invoice", Method::POST, &[INVOICES, invoice_id, "attachment"])?
      .query_defaults(DEFAULT_QUERY)
      .query_defaults([("can_send_in_mail", "true"), ("send_attachment", "true")])
      .file(file, filename, Some(request))?;

    self.core.call(endpoint).await
  }

  /// Download the file attached to an invoice
  #[instrument(skip(self))]
  pub async fn get_attachment(&self, invoice_id: &str) -> Result<Vec<u8>> {
    let endpoint =
      self.endpoint("Failed to retrieve invoice attachment", Method::GET, &[INVOICES, invoice_id, "attachment"])?;

    self.core.download(endpoint).await
  }

  /// Delete one attachment of an invoice
  #[instrument(skip(self))]
  pub async fn delete_attachment(&self, invoice_id: &str, attachment_id: &str) -> Result<StatusResponse> {
    let endpoint = self
      .endpoint(
        "Failed to delete invoice attachment",
        Method::DELETE,
        &[INVOICES, invoice_id, "attachment", attachment_id],
      )?
      .query_defaults(DEFAULT_QUERY);

    self.core.call(endpoint).await
  }

  /// Comments and history of an invoice
  #[instrument(skip(self))]
  pub async fn list_comments(&self, invoice_id: &str) -> Result<CommentsResponse> {
    let endpoint = self
      .endpoint("Failed to list invoice comments", Method::GET, &[INVOICES, invoice_id, "comments"])?
      .query_defaults(DEFAULT_QUERY);

    self.core.call(endpoint).await
  }

  #[instrument(skip(self, request))]
  pub async fn add_comment(&self, invoice_id: &str, request: &CommentRequest) -> Result<CommentResponse> {
    let endpoint = self
      .endpoint("Failed to add invoice comment", Method::POST, &[INVOICES, invoice_id, "comments"])?
      .query_defaults(DEFAULT_QUERY)
      .json(request)?;

    self.core.call(endpoint).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::transport::RequestBody;
  use governor::{Quota, RateLimiter};
  use std::num::NonZeroU32;

  fn endpoints() -> InvoiceEndpoints {
    let quota = Quota::per_minute(NonZeroU32::new(100).unwrap());
    InvoiceEndpoints::new(Arc::new(Transport::new_mock()), Arc::new(RateLimiter::direct(quota)))
  }

  #[test]
  fn test_invoice_endpoints_use_invoice_header() {
    let invoices = endpoints();
    let endpoint = invoices.endpoint("x", Method::GET, &[INVOICES, "inv-1"]).unwrap();

    assert_eq!(endpoint.url.as_str(), "https://mock.zoho.test/invoice/v3/invoices/inv-1");
    assert_eq!(
      endpoint.headers.get("X-com-zoho-invoice-organizationid").map(String::as_str),
      Some("test-org")
    );
    assert_eq!(endpoint.body, RequestBody::None);
  }

  #[test]
  fn test_with_options_is_stored_on_core() {
    let invoices = endpoints().with_options(RequestOptions::new().query("page", "3"));
    assert_eq!(invoices.core().options.query["page"], "3");
  }

  #[test]
  fn test_outcome_completeness() {
    let outcome = CreateInvoiceOutcome { response: CreateInvoiceResponse::default(), mark_sent_error: None };
    assert!(outcome.is_complete());

    let outcome = CreateInvoiceOutcome {
      response: CreateInvoiceResponse::default(),
      mark_sent_error: Some(Error::Http("boom".to_string())),
    };
    assert!(!outcome.is_complete());
  }
}
