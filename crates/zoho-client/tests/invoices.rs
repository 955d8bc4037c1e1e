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

mod common;

use common::{auth_header, client_for, config_for, ORG_ID, TOKEN};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoho_client::{Error, RequestOptions, StaticTokenProvider, ZohoClient};
use zoho_models::invoice::{
  AttachmentRequest, CommentRequest, CreateInvoiceRequest, EmailInvoiceRequest, InvoiceLineItem,
  UpdateInvoiceRequest,
};

const INVOICE_HEADER: &str = "X-com-zoho-invoice-organizationid";

fn invoice_body(invoice_id: &str) -> serde_json::Value {
  json!({
    "code": 0,
    "message": "success",
    "invoice": {
      "invoice_id": invoice_id,
      "invoice_number": "INV-00003",
      "customer_id": "982000000567001",
      "status": "draft",
      "total": 240.0,
      "ach_payment_initiated": false
    }
  })
}

#[tokio::test]
async fn test_get_invoice_success() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/invoice/v3/invoices/982000000567114"))
    .and(header(INVOICE_HEADER, ORG_ID))
    .and(header("Authorization", auth_header(TOKEN).as_str()))
    .and(query_param("filter_by", ""))
    .respond_with(ResponseTemplate::new(200).set_body_json(invoice_body("982000000567114")))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let response = client.invoices().get_invoice("982000000567114").await.unwrap();

  assert_eq!(response.code, 0);
  assert_eq!(response.invoice.invoice_id.as_deref(), Some("982000000567114"));
  assert_eq!(response.invoice.total, Some(240.0));
}

#[tokio::test]
async fn test_non_zero_code_is_api_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/invoice/v3/invoices/missing"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"code": 1002, "message": "Invoice does not exist."})),
    )
    .mount(&server)
    .await;

  let err = client_for(&server).invoices().get_invoice("missing").await.unwrap_err();

  assert_eq!(err.action(), Some("Failed to retrieve invoice"));
  assert_eq!(err.api_code(), Some(1002));
  assert_eq!(err.api_message(), Some("Invoice does not exist."));
  assert!(err.to_string().contains("Invoice does not exist."));
}

#[tokio::test]
async fn test_error_status_with_envelope_is_api_error() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices"))
    .respond_with(
      ResponseTemplate::new(400)
        .set_body_json(json!({"code": 1001, "message": "Invoice \"INV-1\" already exists."})),
    )
    .mount(&server)
    .await;

  let request = CreateInvoiceRequest { customer_id: "c-1".to_string(), ..Default::default() };
  let err = client_for(&server).invoices().create_invoice(&request, true).await.unwrap_err();

  assert!(err.is_api());
  assert_eq!(err.action(), Some("Failed to create invoice"));
  assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn test_error_status_without_envelope() {
  let server = MockServer::start().await;
  Mock::given(method("DELETE"))
    .and(path("/invoice/v3/invoices/inv-1"))
    .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
    .mount(&server)
    .await;

  let err = client_for(&server).invoices().delete_invoice("inv-1").await.unwrap_err();

  assert_eq!(err.http_status(), Some(503));
  assert!(!err.is_api());
  assert_eq!(err.action(), Some("Failed to delete invoice"));
}

#[tokio::test]
async fn test_transport_error_is_wrapped_with_action() {
  let config = zoho_client::Config::new(ORG_ID).with_invoice_base_url("http://127.0.0.1:1/invoice/v3/");
  let client = ZohoClient::new(config, Arc::new(StaticTokenProvider::new(TOKEN))).unwrap();

  let err = client.invoices().get_invoice("inv-1").await.unwrap_err();

  assert_eq!(err.action(), Some("Failed to retrieve invoice"));
  assert!(matches!(err.root(), Error::Http(_)));
}

#[tokio::test]
async fn test_undecodable_body_is_parse_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/invoice/v3/invoices"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  let err = client_for(&server).invoices().list_invoices().await.unwrap_err();
  assert!(matches!(err.root(), Error::Parse(_)));
}

#[tokio::test]
async fn test_create_invoice_and_mark_sent() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices"))
    .and(body_json(json!({
      "customer_id": "982000000567001",
      "line_items": [{"item_id": "982000000030049", "quantity": 2.0}],
      "adjustment_description": ""
    })))
    .respond_with(ResponseTemplate::new(201).set_body_json(invoice_body("inv-9")))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices/inv-9/status/sent"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"code": 0, "message": "Invoice status has been changed to Sent."})),
    )
    .expect(1)
    .mount(&server)
    .await;

  let request = CreateInvoiceRequest {
    customer_id: "982000000567001".to_string(),
    line_items: vec![InvoiceLineItem {
      item_id: Some("982000000030049".to_string()),
      quantity: Some(2.0),
      ..Default::default()
    }],
    ..Default::default()
  };

  let outcome = client_for(&server).invoices().create_invoice(&request, true).await.unwrap();
  assert!(outcome.is_complete());
  assert_eq!(outcome.response.invoice.invoice_id.as_deref(), Some("inv-9"));
}

#[tokio::test]
async fn test_create_invoice_mark_sent_failure_is_partial_success() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices"))
    .respond_with(ResponseTemplate::new(201).set_body_json(invoice_body("inv-9")))
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices/inv-9/status/sent"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"code": 1, "message": "Invoice cannot be marked as sent."})),
    )
    .mount(&server)
    .await;

  let request = CreateInvoiceRequest { customer_id: "982000000567001".to_string(), ..Default::default() };
  let outcome = client_for(&server).invoices().create_invoice(&request, true).await.unwrap();

  assert_eq!(outcome.response.invoice.invoice_id.as_deref(), Some("inv-9"));
  let err = outcome.mark_sent_error.expect("mark sent should have failed");
  assert_eq!(err.action(), Some("Failed to mark invoice as sent"));
  assert_eq!(err.api_message(), Some("Invoice cannot be marked as sent."));
}

#[tokio::test]
async fn test_create_invoice_without_mark_sent_makes_one_call() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices"))
    .respond_with(ResponseTemplate::new(201).set_body_json(invoice_body("inv-9")))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices/inv-9/status/sent"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "message": "ok"})))
    .expect(0)
    .mount(&server)
    .await;

  let request = CreateInvoiceRequest { customer_id: "c".to_string(), ..Default::default() };
  let outcome = client_for(&server).invoices().create_invoice(&request, false).await.unwrap();
  assert!(outcome.mark_sent_error.is_none());
}

#[tokio::test]
async fn test_status_changes_hit_status_paths() {
  let server = MockServer::start().await;
  for status in ["void", "draft"] {
    Mock::given(method("POST"))
      .and(path(format!("/invoice/v3/invoices/inv-2/status/{status}")))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "message": "ok"})))
      .expect(1)
      .mount(&server)
      .await;
  }

  let invoices = client_for(&server).invoices();
  invoices.mark_as_void("inv-2").await.unwrap();
  invoices.mark_as_draft("inv-2").await.unwrap();
}

#[tokio::test]
async fn test_get_invoice_pdf_returns_raw_bytes() {
  let pdf = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n1 0 obj".to_vec();

  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/invoice/v3/invoices/inv-3"))
    .and(query_param("accept", "pdf"))
    .and(query_param("organization_id", ORG_ID))
    .and(header(INVOICE_HEADER, ORG_ID))
    .respond_with(
      ResponseTemplate::new(200).insert_header("content-type", "application/pdf").set_body_bytes(pdf.clone()),
    )
    .expect(1)
    .mount(&server)
    .await;

  let bytes = client_for(&server).invoices().get_invoice_pdf("inv-3").await.unwrap();
  assert_eq!(bytes, pdf);
}

#[tokio::test]
async fn test_download_failure_carries_status() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/invoice/v3/invoices/gone"))
    .respond_with(ResponseTemplate::new(404))
    .mount(&server)
    .await;

  let err = client_for(&server).invoices().get_invoice_pdf("gone").await.unwrap_err();
  assert_eq!(err.http_status(), Some(404));
  assert_eq!(err.action(), Some("Failed to download invoice PDF"));
  assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_attach_file_sends_multipart() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices/inv-4/attachment"))
    .and(query_param("can_send_in_mail", "true"))
    .and(query_param("send_attachment", "true"))
    .and(header(INVOICE_HEADER, ORG_ID))
    .and(body_string_contains("name=\"attachment\"; filename=\"receipt.txt\""))
    .and(body_string_contains("name=\"file_name\""))
    .and(body_string_contains("name=\"JSONString\""))
    .and(body_string_contains(r#"{"can_send_in_mail":true}"#))
    .and(body_string_contains("paid in full"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "code": 0,
      "message": "Your file has been attached.",
      "documents": [{"file_name": "receipt.txt", "document_id": "doc-1"}]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let request = AttachmentRequest { can_send_in_mail: Some(true) };
  let response = client_for(&server)
    .invoices()
    .attach_file("inv-4", &request, b"paid in full".to_vec(), "receipt.txt")
    .await
    .unwrap();

  assert_eq!(response.documents[0].document_id.as_deref(), Some("doc-1"));
}

#[tokio::test]
async fn test_email_invoice_with_file() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices/inv-5/email"))
    .and(query_param("send_attachment", "true"))
    .and(body_string_contains("name=\"JSONString\""))
    .and(body_string_contains("billing@example.com"))
    .and(body_string_contains("terms and conditions"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"code": 0, "message": "Your invoice has been sent."})),
    )
    .expect(1)
    .mount(&server)
    .await;

  let request = EmailInvoiceRequest {
    to_mail_ids: vec!["billing@example.com".to_string()],
    subject: Some("Invoice INV-00005".to_string()),
    ..Default::default()
  };
  client_for(&server)
    .invoices()
    .email_invoice_with_file("inv-5", &request, b"terms and conditions".to_vec(), "terms.txt")
    .await
    .unwrap();
}

#[tokio::test]
async fn test_email_invoice_sends_json() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices/inv-5/email"))
    .and(body_json(json!({"to_mail_ids": ["billing@example.com"], "subject": "Your invoice"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "message": "sent"})))
    .expect(1)
    .mount(&server)
    .await;

  let request = EmailInvoiceRequest {
    to_mail_ids: vec!["billing@example.com".to_string()],
    subject: Some("Your invoice".to_string()),
    ..Default::default()
  };
  let response = client_for(&server).invoices().email_invoice("inv-5", &request).await.unwrap();
  assert_eq!(response.message, "sent");
}

#[tokio::test]
async fn test_attachment_download_and_delete() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/invoice/v3/invoices/inv-6/attachment"))
    .respond_with(ResponseTemplate::new(200).set_body_bytes(b"attached".to_vec()))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("DELETE"))
    .and(path("/invoice/v3/invoices/inv-6/attachment/doc-7"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"code": 0, "message": "Your file is no longer attached."})),
    )
    .expect(1)
    .mount(&server)
    .await;

  let invoices = client_for(&server).invoices();
  assert_eq!(invoices.get_attachment("inv-6").await.unwrap(), b"attached");
  invoices.delete_attachment("inv-6", "doc-7").await.unwrap();
}

#[tokio::test]
async fn test_update_invoice_sends_flat_body() {
  let server = MockServer::start().await;
  Mock::given(method("PUT"))
    .and(path("/invoice/v3/invoices/inv-7"))
    .and(body_json(json!({
      "customer_id": "cust-1",
      "notes": "Updated notes",
      "line_items": [],
      "adjustment_description": "",
      "reason": "typo"
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(invoice_body("inv-7")))
    .expect(1)
    .mount(&server)
    .await;

  let request = UpdateInvoiceRequest {
    customer_id: Some("cust-1".to_string()),
    notes: Some("Updated notes".to_string()),
    reason: Some("typo".to_string()),
    ..Default::default()
  };
  let response = client_for(&server).invoices().update_invoice("inv-7", &request).await.unwrap();
  assert_eq!(response.invoice.invoice_id.as_deref(), Some("inv-7"));
}

#[tokio::test]
async fn test_comments() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/invoice/v3/invoices/inv-8/comments"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "code": 0,
      "message": "success",
      "comments": [{"comment_id": "c-1", "description": "Invoice created", "comment_type": "system"}]
    })))
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/invoice/v3/invoices/inv-8/comments"))
    .and(body_json(json!({"description": "Called the customer", "show_comment_to_clients": false})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "code": 0,
      "message": "Comments added.",
      "comment": {"comment_id": "c-2", "description": "Called the customer"}
    })))
    .expect(1)
    .mount(&server)
    .await;

  let invoices = client_for(&server).invoices();
  let comments = invoices.list_comments("inv-8").await.unwrap();
  assert_eq!(comments.comments.len(), 1);

  let request =
    CommentRequest { description: "Called the customer".to_string(), show_comment_to_clients: Some(false) };
  let added = invoices.add_comment("inv-8", &request).await.unwrap();
  assert_eq!(added.comment.comment_id.as_deref(), Some("c-2"));
}

#[tokio::test]
async fn test_caller_query_overrides_default() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/invoice/v3/invoices"))
    .and(query_param("filter_by", "Status.Overdue"))
    .and(query_param("page", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "code": 0,
      "message": "success",
      "invoices": [{"invoice_id": "inv-1", "status": "overdue"}],
      "page_context": {"page": 2, "per_page": 200, "has_more_page": false}
    })))
    .expect(1)
    .mount(&server)
    .await;

  let options = RequestOptions::new().query("filter_by", "Status.Overdue").query("page", "2");
  let response = client_for(&server).invoices().with_options(options).list_invoices().await.unwrap();

  assert_eq!(response.invoices.len(), 1);
  assert_eq!(response.page_context.map(|p| p.page), Some(2));
}

#[tokio::test]
async fn test_per_call_timeout() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/invoice/v3/invoices/slow"))
    .respond_with(ResponseTemplate::new(200).set_body_json(invoice_body("slow")).set_delay(Duration::from_secs(2)))
    .mount(&server)
    .await;

  let err = client_for(&server)
    .invoices()
    .with_options(RequestOptions::new().timeout(Duration::from_millis(100)))
    .get_invoice("slow")
    .await
    .unwrap_err();

  assert!(matches!(err.root(), Error::Http(_)));
}

#[tokio::test]
async fn test_books_product_uses_books_path() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/books/v3/invoices/inv-1"))
    .and(header(INVOICE_HEADER, ORG_ID))
    .respond_with(ResponseTemplate::new(200).set_body_json(invoice_body("inv-1")))
    .expect(1)
    .mount(&server)
    .await;

  let config = config_for(&server).with_invoice_base_url(format!("{}/books/v3", server.uri()));
  let client = ZohoClient::new(config, Arc::new(StaticTokenProvider::new(TOKEN))).unwrap();
  client.invoices().get_invoice("inv-1").await.unwrap();
}
