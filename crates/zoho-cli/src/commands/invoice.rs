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

use super::print_json;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;
use zoho_client::{RequestOptions, ZohoClient};
use zoho_models::invoice::EmailInvoiceRequest;

#[derive(Args, Debug)]
pub struct InvoiceCommand {
  #[command(subcommand)]
  command: InvoiceSubcommands,
}

#[derive(Subcommand, Debug)]
enum InvoiceSubcommands {
  /// Show one invoice
  Get {
    /// Invoice id
    invoice_id: String,
  },

  /// List invoices
  List {
    /// `filter_by` value sent as is (e.g. Status.OverDue, Status.Unpaid, Date.PaymentExpectedDate)
    #[arg(short, long)]
    filter_by: Option<String>,
  },

  /// Download the invoice PDF
  Pdf {
    /// Invoice id
    invoice_id: String,

    /// Where to write the PDF
    #[arg(short, long)]
    output: PathBuf,
  },

  /// Mark a draft invoice as sent
  MarkSent {
    /// Invoice id
    invoice_id: String,
  },

  /// Email an invoice
  Email {
    /// Invoice id
    invoice_id: String,

    /// Recipient address, may be repeated
    #[arg(long = "to", required = true)]
    to: Vec<String>,

    /// Carbon copy address, may be repeated
    #[arg(long)]
    cc: Vec<String>,

    #[arg(long)]
    subject: Option<String>,
  },
}

pub async fn execute(cmd: InvoiceCommand, client: &ZohoClient) -> Result<()> {
  match cmd.command {
    InvoiceSubcommands::Get { invoice_id } => {
      let response = client.invoices().get_invoice(&invoice_id).await?;
      print_json(&response.invoice)
    }
    InvoiceSubcommands::List { filter_by } => {
      let mut invoices = client.invoices();
      if let Some(filter_by) = filter_by {
        invoices = invoices.with_options(RequestOptions::new().query("filter_by", filter_by));
      }
      let response = invoices.list_invoices().await?;
      info!("Retrieved {} invoices", response.invoices.len());
      print_json(&response.invoices)
    }
    InvoiceSubcommands::Pdf { invoice_id, output } => {
      let pdf = client.invoices().get_invoice_pdf(&invoice_id).await?;
      std::fs::write(&output, &pdf).with_context(|| format!("Failed to write {}", output.display()))?;
      info!("Wrote {} bytes to {}", pdf.len(), output.display());
      Ok(())
    }
    InvoiceSubcommands::MarkSent { invoice_id } => {
      let response = client.invoices().mark_as_sent(&invoice_id).await?;
      print_json(&response)
    }
    InvoiceSubcommands::Email { invoice_id, to, cc, subject } => {
      let request = EmailInvoiceRequest { to_mail_ids: to, cc_mail_ids: cc, subject, ..Default::default() };
      let response = client.invoices().email_invoice(&invoice_id, &request).await?;
      print_json(&response)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;

  #[derive(Parser, Debug)]
  struct TestCli {
    #[command(flatten)]
    invoice: InvoiceCommand,
  }

  #[test]
  fn test_list_filter_is_passed_verbatim() {
    let cli = TestCli::try_parse_from(["zoho", "list", "--filter-by", "Date.PaymentExpectedDate"]).unwrap();
    match cli.invoice.command {
      InvoiceSubcommands::List { filter_by } => assert_eq!(filter_by.as_deref(), Some("Date.PaymentExpectedDate")),
      other => panic!("unexpected command {other:?}"),
    }

    let cli = TestCli::try_parse_from(["zoho", "list"]).unwrap();
    assert!(matches!(cli.invoice.command, InvoiceSubcommands::List { filter_by: None }));
  }

  #[test]
  fn test_email_requires_recipient() {
    assert!(TestCli::try_parse_from(["zoho", "email", "inv-1"]).is_err());

    let cli = TestCli::try_parse_from(["zoho", "email", "inv-1", "--to", "a@example.com", "--to", "b@example.com"])
      .unwrap();
    match cli.invoice.command {
      InvoiceSubcommands::Email { to, cc, .. } => {
        assert_eq!(to, vec!["a@example.com", "b@example.com"]);
        assert!(cc.is_empty());
      }
      other => panic!("unexpected command {other:?}"),
    }
  }
}
