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

//! Invoice payloads of the Zoho Subscriptions `v1` API

use crate::common::{Address, Comment, CustomField, Document, LooseBool, Tag};
use crate::impl_api_response;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status filter accepted by the subscriptions invoice listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InvoiceStatus {
  #[default]
  #[serde(rename = "Status.All")]
  All,
  #[serde(rename = "Status.Sent")]
  Sent,
  #[serde(rename = "Status.Draft")]
  Draft,
  #[serde(rename = "Status.OverDue")]
  OverDue,
  #[serde(rename = "Status.Paid")]
  Paid,
  #[serde(rename = "Status.PartiallyPaid")]
  PartiallyPaid,
  #[serde(rename = "Status.Void")]
  Void,
  #[serde(rename = "Status.Unpaid")]
  Unpaid,
  /// Undocumented, accepted by the service
  #[serde(rename = "Status.Pending")]
  Pending,
}

impl InvoiceStatus {
  /// Wire value used in the `filter_by` query parameter
  pub fn as_str(&self) -> &'static str {
    match self {
      InvoiceStatus::All => "Status.All",
      InvoiceStatus::Sent => "Status.Sent",
      InvoiceStatus::Draft => "Status.Draft",
      InvoiceStatus::OverDue => "Status.OverDue",
      InvoiceStatus::Paid => "Status.Paid",
      InvoiceStatus::PartiallyPaid => "Status.PartiallyPaid",
      InvoiceStatus::Void => "Status.Void",
      InvoiceStatus::Unpaid => "Status.Unpaid",
      InvoiceStatus::Pending => "Status.Pending",
    }
  }
}

impl fmt::Display for InvoiceStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for InvoiceStatus {
  type Err = String;

  /// Accepts both the wire form (`Status.Paid`) and the bare name (`paid`)
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let name = s.trim();
    let name = name.strip_prefix("Status.").unwrap_or(name);
    match name.to_ascii_lowercase().as_str() {
      "all" | "" => Ok(InvoiceStatus::All),
      "sent" => Ok(InvoiceStatus::Sent),
      "draft" => Ok(InvoiceStatus::Draft),
      "overdue" => Ok(InvoiceStatus::OverDue),
      "paid" => Ok(InvoiceStatus::Paid),
      "partiallypaid" | "partially_paid" => Ok(InvoiceStatus::PartiallyPaid),
      "void" => Ok(InvoiceStatus::Void),
      "unpaid" => Ok(InvoiceStatus::Unpaid),
      "pending" => Ok(InvoiceStatus::Pending),
      _ => Err(format!("Unknown invoice status: {s}")),
    }
  }
}

/// Line of a subscription invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub item_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<Tag>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub item_custom_fields: Vec<CustomField>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub quantity: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount_amount: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub item_total: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub product_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hsn_or_sac: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_exemption_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_exemption_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub coupon_code: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub coupon_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub discount_amount: Option<f64>,
}

/// Credit note applied to an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credit {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub creditnote_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub creditnotes_number: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub credited_date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub credited_amount: Option<f64>,
}

/// Payment recorded against an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_mode: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoice_payment_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub amount_refunded: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub gateway_transaction_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reference_number: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub amount: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bank_charges: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exchange_rate: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub card_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_four_digits: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub settlement_status: Option<String>,
}

/// An invoice as returned by the subscriptions API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionInvoice {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoice_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub number: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoice_date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub due_date: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub customer_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub customer_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub balance: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_made: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub credits_applied: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub write_off_amount: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub currency_code: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub currency_symbol: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub has_attachment: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_time: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_time: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub salesperson_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub salesperson_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invoice_url: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_expected_date: Option<String>,

  /// Documented as a boolean, sometimes sent as `""`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ach_payment_initiated: Option<LooseBool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub transaction_type: Option<String>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub invoice_items: Vec<InvoiceItem>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub coupons: Vec<Coupon>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub credits: Vec<Credit>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub payments: Vec<Payment>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub billing_address: Option<Address>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub shipping_address: Option<Address>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub comments: Vec<Comment>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub custom_fields: Vec<CustomField>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_in_mail: Option<bool>,

  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub documents: Vec<Document>,
}

/// Response of `GET invoices`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoicesResponse {
  pub code: i64,
  pub message: String,
  pub invoices: Vec<SubscriptionInvoice>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub page_context: Option<crate::common::PageContext>,
}

/// Envelope carrying one subscription invoice (get, add items)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceResponse {
  pub code: i64,
  pub message: String,
  pub invoice: SubscriptionInvoice,
}

/// Response of `POST invoices/{invoice_id}/attachment`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentResponse {
  pub code: i64,
  pub message: String,
  pub documents: Vec<Document>,
}

/// Body of `POST invoices/{invoice_id}/email`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInvoiceRequest {
  #[serde(default)]
  pub to_mail_ids: Vec<String>,

  #[serde(default)]
  pub cc_mail_ids: Vec<String>,

  #[serde(default)]
  pub subject: String,

  #[serde(default)]
  pub body: String,
}

/// Line added to an existing invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItemRequest {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub product_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub quantity: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tax_exemption_id: Option<String>,
}

/// Body of `POST invoices/{invoice_id}/lineitems`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddItemsRequest {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub invoice_items: Vec<InvoiceItemRequest>,
}

/// Response of `POST invoices/{invoice_id}/lineitems`
pub type AddItemsResponse = InvoiceResponse;

/// Body of `POST invoices/{invoice_id}/collect` charging a stored card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectChargeViaCreditCardRequest {
  pub card_id: String,
}

/// Body of `POST invoices/{invoice_id}/collect` debiting a bank account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectChargeViaBankAccountRequest {
  pub account_id: String,
}

/// Contact person reference on a charged invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceContactPerson {
  pub contactperson_id: String,
  pub email: String,
  pub mobile: String,
  pub phone: String,
  pub zcrm_contact_id: String,
}

/// Gateway offered on a charged invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoicePaymentGateway {
  pub payment_gateway: String,
}

/// Invoice block of a collect charge response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectChargeInvoice {
  pub invoice_id: String,
  pub number: String,
  pub status: String,
  pub invoice_date: String,
  pub date: String,
  pub due_date: String,
  pub payment_expected_date: String,
  pub ach_payment_initiated: Option<LooseBool>,
  pub transaction_type: String,
  pub customer_id: String,
  pub customer_name: String,
  pub email: String,
  pub contactpersons: Vec<InvoiceContactPerson>,
  pub invoice_items: Vec<InvoiceItem>,
  pub coupons: Vec<Coupon>,
  pub credits: Vec<Credit>,
  pub payments: Vec<Payment>,
  pub payment_gateways: Vec<InvoicePaymentGateway>,
  pub adjustment: f64,
  pub adjustment_description: String,
  pub allow_partial_payments: bool,
  pub approver_id: String,
  pub auto_reminders_configured: bool,
  pub sub_total: f64,
  pub tax_total: f64,
  pub discount_percent: f64,
  pub discount_total: f64,
  pub shipping_charge: f64,
  pub total: f64,
  pub bcy_adjustment: f64,
  pub bcy_discount_total: f64,
  pub bcy_shipping_charge: f64,
  pub bcy_sub_total: f64,
  pub bcy_tax_total: f64,
  pub bcy_total: f64,
  pub balance: f64,
  pub payment_made: f64,
  pub credits_applied: f64,
  pub write_off_amount: f64,
  pub unused_credits_receivable_amount: f64,
  pub exchange_rate: f64,
  pub currency_code: String,
  pub currency_id: String,
  pub currency_symbol: String,
  pub payment_terms: i64,
  pub payment_terms_label: String,
  pub payment_reminder_enabled: bool,
  pub price_precision: i64,
  pub billing_address: Address,
  pub shipping_address: Address,
  pub custom_fields: Vec<CustomField>,
  pub customer_custom_fields: Vec<CustomField>,
  pub documents: Vec<Document>,
  pub can_edit_items: bool,
  pub can_send_in_mail: bool,
  pub can_send_invoice_sms: bool,
  pub can_skip_payment_info: bool,
  pub inprocess_transaction_present: bool,
  pub is_inclusive_tax: bool,
  pub is_reverse_charge_applied: bool,
  pub is_viewed_by_client: bool,
  pub is_viewed_in_mail: bool,
  pub client_viewed_time: String,
  pub mail_first_viewed_time: String,
  pub mail_last_viewed_time: String,
  pub notes: String,
  pub terms: String,
  pub reference_id: String,
  pub reference_number: String,
  pub salesperson_id: String,
  pub salesperson_name: String,
  pub pricebook_id: String,
  pub template_id: String,
  pub template_name: String,
  pub template_type: String,
  pub tax_rounding: String,
  pub vat_treatment: String,
  pub invoice_url: String,
  pub page_width: String,
  pub created_by_id: String,
  pub created_date: String,
  pub created_time: String,
  pub last_modified_by_id: String,
  pub updated_time: String,
  pub submitter_id: String,
  pub unbilled_charges_id: String,
  pub zcrm_potential_id: String,
}

/// Gateway transaction behind a collected payment.
///
/// Card charges fill the card fields, bank debits fill `account_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Autotransaction {
  pub autotransaction_id: String,
  pub payment_gateway: String,
  pub gateway_transaction_id: String,
  pub gateway_error_message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub card_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_four_digits: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expiry_month: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expiry_year: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
}

/// Invoice settled by a collected payment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppliedInvoice {
  pub invoice_id: String,
  pub invoice_number: String,
  pub date: String,
  pub invoice_amount: f64,
  pub amount_applied: f64,
  pub balance_amount: f64,
}

/// Payment block of a collect charge response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectChargePayment {
  pub payment_id: String,
  pub payment_mode: String,
  pub amount: f64,
  pub amount_refunded: f64,
  pub bank_charges: f64,
  pub date: String,
  pub status: String,
  pub reference_number: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub due_date: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub amount_due: Option<f64>,
  pub description: String,
  pub customer_id: String,
  pub customer_name: String,
  pub email: String,
  pub autotransaction: Autotransaction,
  pub invoices: Vec<AppliedInvoice>,
  pub currency_code: String,
  pub currency_symbol: String,
  pub custom_fields: Vec<CustomField>,
  pub created_time: String,
  pub updated_time: String,
}

/// Response of `POST invoices/{invoice_id}/collect`, card or bank account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectChargeResponse {
  pub code: i64,
  pub message: String,
  pub invoice: CollectChargeInvoice,
  pub payment: CollectChargePayment,
}

impl_api_response!(InvoicesResponse, InvoiceResponse, AttachmentResponse, CollectChargeResponse);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::ApiResponse;
  use serde_json::json;

  #[test]
  fn test_invoice_status_wire_values() {
    assert_eq!(InvoiceStatus::default(), InvoiceStatus::All);
    assert_eq!(serde_json::to_string(&InvoiceStatus::OverDue).unwrap(), "\"Status.OverDue\"");
    assert_eq!(InvoiceStatus::Pending.to_string(), "Status.Pending");

    let status: InvoiceStatus = serde_json::from_str("\"Status.PartiallyPaid\"").unwrap();
    assert_eq!(status, InvoiceStatus::PartiallyPaid);

    assert_eq!("paid".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Paid);
    assert_eq!("Status.Unpaid".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Unpaid);
    assert!("refunded".parse::<InvoiceStatus>().is_err());
  }

  #[test]
  fn test_ach_payment_initiated_accepts_false_and_empty_string() {
    let with_bool: SubscriptionInvoice =
      serde_json::from_value(json!({"invoice_id": "1", "ach_payment_initiated": false})).unwrap();
    assert_eq!(with_bool.ach_payment_initiated, Some(LooseBool::Bool(false)));

    let with_text: SubscriptionInvoice =
      serde_json::from_value(json!({"invoice_id": "2", "ach_payment_initiated": ""})).unwrap();
    assert_eq!(with_text.ach_payment_initiated, Some(LooseBool::Text(String::new())));

    let absent: SubscriptionInvoice = serde_json::from_value(json!({"invoice_id": "3"})).unwrap();
    assert_eq!(absent.ach_payment_initiated, None);
  }

  #[test]
  fn test_invoices_response_decoding() {
    let body = json!({
      "code": 0,
      "message": "success",
      "invoices": [{
        "invoice_id": "90300000079426",
        "number": "INV-00001",
        "status": "paid",
        "total": 50,
        "invoice_items": [{"item_id": "9030000001", "quantity": 1, "price": 50, "tags": [{"tag_id": "t1"}]}],
        "payments": [{"payment_id": "p1", "amount": 50}]
      }]
    });

    let response: InvoicesResponse = serde_json::from_value(body).unwrap();
    assert!(response.is_success());
    let invoice = &response.invoices[0];
    assert_eq!(invoice.number.as_deref(), Some("INV-00001"));
    assert_eq!(invoice.invoice_items[0].tags[0].tag_id.as_deref(), Some("t1"));
    assert_eq!(invoice.payments[0].amount, Some(50.0));
    assert!(invoice.coupons.is_empty());
  }

  #[test]
  fn test_collect_charge_response_decoding() {
    let body = json!({
      "code": 0,
      "message": "The payment has been made successfully.",
      "invoice": {"invoice_id": "inv-1", "status": "paid", "balance": 0, "ach_payment_initiated": false},
      "payment": {
        "payment_id": "pay-1",
        "payment_mode": "autotransaction",
        "amount": 25.5,
        "autotransaction": {"autotransaction_id": "at-1", "card_id": "card-9", "last_four_digits": "4242"},
        "invoices": [{"invoice_id": "inv-1", "amount_applied": 25.5}]
      }
    });

    let response: CollectChargeResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.invoice.status, "paid");
    assert_eq!(response.payment.amount, 25.5);
    assert_eq!(response.payment.autotransaction.card_id.as_deref(), Some("card-9"));
    assert_eq!(response.payment.autotransaction.account_id, None);
    assert_eq!(response.payment.invoices[0].amount_applied, 25.5);
  }

  #[test]
  fn test_add_items_request_serialization() {
    let request = AddItemsRequest {
      invoice_items: vec![InvoiceItemRequest {
        code: Some("setup-fee".to_string()),
        price: Some(10.0),
        quantity: Some(1.0),
        ..Default::default()
      }],
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, json!({"invoice_items": [{"code": "setup-fee", "price": 10.0, "quantity": 1.0}]}));
  }
}
