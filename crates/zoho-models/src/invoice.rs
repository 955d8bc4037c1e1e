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

//! Invoice payloads of the Zoho Invoice / Zoho Books `v3` API

use crate::common::{Address, Comment, CustomField, CustomFieldRequest, Document, LooseBool};
use crate::impl_api_response;
use serde::{Deserialize, Serialize};

/// Tax line of an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTax {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_amount: Option<f64>,
}

/// Online payment gateway offered on an invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentGateway {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub configured: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub additional_field1: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub gateway_name: Option<String>,
}

/// Payment options of an invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOptions {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub payment_gateways: Vec<PaymentGateway>,
}

/// Line item of an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub line_item_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub item_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_name: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub time_entry_ids: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub item_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub product_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expense_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub item_order: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bcy_rate: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rate: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub quantity: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub unit: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount_amount: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_exemption_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_percentage: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub item_total: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hsn_or_sac: Option<i64>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub item_custom_fields: Vec<CustomFieldRequest>,
}

/// An invoice as returned by the invoicing API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoice_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ach_payment_initiated: Option<LooseBool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoice_number: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_pre_gst: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub place_of_supply: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub gst_no: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub gst_treatment: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_terms: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_terms_label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub due_date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_expected_date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_payment_date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reference_number: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub customer_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub customer_name: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub contact_persons: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub currency_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub currency_code: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exchange_rate: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_discount_before_tax: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_inclusive_tax: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub recurring_invoice_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_viewed_by_client: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub has_attachment: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub client_viewed_time: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub line_items: Vec<InvoiceLineItem>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub shipping_charge: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub adjustment: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub adjustment_description: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sub_total: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_total: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total: Option<f64>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub taxes: Vec<InvoiceTax>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_reminder_enabled: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_made: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub credits_applied: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_amount_withheld: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub balance: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub write_off_amount: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub allow_partial_payments: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price_precision: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_options: Option<PaymentOptions>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_emailed: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reminders_sent: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_reminder_sent_date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub billing_address: Option<Address>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub shipping_address: Option<Address>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub terms: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub custom_fields: Vec<CustomField>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub template_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub template_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_time: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_modified_time: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attachment_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_in_mail: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub salesperson_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub salesperson_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoice_url: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub documents: Vec<Document>,
}

/// Body of `POST invoices`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
  pub customer_id: String,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub contact_persons: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoice_number: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reference_number: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub place_of_supply: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub gst_treatment: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub gst_no: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub template_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_terms: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_terms_label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub due_date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_discount_before_tax: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_inclusive_tax: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exchange_rate: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub recurring_invoice_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoiced_estimate_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub salesperson_id: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub custom_fields: Vec<CustomFieldRequest>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_id: Option<String>,

  /// Always sent, even when empty
  #[serde(default)]
  pub line_items: Vec<InvoiceLineItem>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_options: Option<PaymentOptions>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub allow_partial_payments: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_body: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_subject: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub terms: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub shipping_charge: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub adjustment: Option<f64>,

  /// Always sent, even when empty
  #[serde(default)]
  pub adjustment_description: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_authority_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_exemption_id: Option<String>,
}

/// Body of `PUT invoices/{invoice_id}`.
///
/// The service expects a flat body: invoice fields sit next to the
/// request-only fields (`reason`, `custom_body`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateInvoiceRequest {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub customer_id: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub contact_persons: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoice_number: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reference_number: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub place_of_supply: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub gst_treatment: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub gst_no: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub template_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_terms: Option<i64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_terms_label: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub due_date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_discount_before_tax: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_inclusive_tax: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exchange_rate: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub recurring_invoice_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoiced_estimate_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub salesperson_id: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub custom_fields: Vec<CustomFieldRequest>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_id: Option<String>,

  #[serde(default)]
  pub line_items: Vec<InvoiceLineItem>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_options: Option<PaymentOptions>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub allow_partial_payments: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_body: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_subject: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub terms: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub shipping_charge: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub adjustment: Option<f64>,

  #[serde(default)]
  pub adjustment_description: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_authority_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_exemption_id: Option<String>,
}

impl UpdateInvoiceRequest {
  /// Lift the editable fields of a fetched invoice into an update body
  pub fn from_invoice(invoice: &Invoice) -> Self {
    UpdateInvoiceRequest {
      customer_id: invoice.customer_id.clone(),
      contact_persons: invoice.contact_persons.clone(),
      invoice_number: invoice.invoice_number.clone(),
      reference_number: invoice.reference_number.clone(),
      place_of_supply: invoice.place_of_supply.clone(),
      gst_treatment: invoice.gst_treatment.clone(),
      gst_no: invoice.gst_no.clone(),
      template_id: invoice.template_id.clone(),
      date: invoice.date.clone(),
      payment_terms: invoice.payment_terms,
      payment_terms_label: invoice.payment_terms_label.clone(),
      due_date: invoice.due_date.clone(),
      discount: invoice.discount,
      is_discount_before_tax: invoice.is_discount_before_tax,
      discount_type: invoice.discount_type.clone(),
      is_inclusive_tax: invoice.is_inclusive_tax,
      exchange_rate: invoice.exchange_rate,
      recurring_invoice_id: invoice.recurring_invoice_id.clone(),
      salesperson_id: invoice.salesperson_id.clone(),
      custom_fields: invoice.custom_fields.iter().map(CustomFieldRequest::from).collect(),
      line_items: invoice.line_items.clone(),
      payment_options: invoice.payment_options.clone(),
      allow_partial_payments: invoice.allow_partial_payments,
      notes: invoice.notes.clone(),
      terms: invoice.terms.clone(),
      shipping_charge: invoice.shipping_charge,
      adjustment: invoice.adjustment,
      adjustment_description: invoice.adjustment_description.clone().unwrap_or_default(),
      ..Default::default()
    }
  }
}

/// Body of `POST invoices/{invoice_id}/email`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInvoiceRequest {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub send_from_org_email_id: Option<bool>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub to_mail_ids: Vec<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub cc_mail_ids: Vec<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subject: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
}

/// JSON sibling of the file part when attaching a file to an invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRequest {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_in_mail: Option<bool>,
}

/// Body of `POST invoices/{invoice_id}/comments`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRequest {
  pub description: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub show_comment_to_clients: Option<bool>,
}

/// Response of `POST invoices`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateInvoiceResponse {
  pub code: i64,
  pub message: String,
  pub invoice: Invoice,
}

/// Response of `GET invoices/{invoice_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetInvoiceResponse {
  pub code: i64,
  pub message: String,
  pub invoice: Invoice,
}

/// Response of `PUT invoices/{invoice_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateInvoiceResponse {
  pub code: i64,
  pub message: String,
  pub invoice: Invoice,
}

/// Response of `GET invoices`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListInvoicesResponse {
  pub code: i64,
  pub message: String,
  pub invoices: Vec<Invoice>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub page_context: Option<crate::common::PageContext>,
}

/// Response of `POST invoices/{invoice_id}/attachment`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentResponse {
  pub code: i64,
  pub message: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub documents: Vec<Document>,
}

/// Response of `GET invoices/{invoice_id}/comments`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsResponse {
  pub code: i64,
  pub message: String,
  pub comments: Vec<Comment>,
}

/// Response of `POST invoices/{invoice_id}/comments`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentResponse {
  pub code: i64,
  pub message: String,
  pub comment: Comment,
}

impl_api_response!(
  CreateInvoiceResponse,
  GetInvoiceResponse,
  UpdateInvoiceResponse,
  ListInvoicesResponse,
  AttachmentResponse,
  CommentsResponse,
  CommentResponse,
);
