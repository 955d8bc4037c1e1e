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
use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::info;
use zoho_client::ZohoClient;
use zoho_models::subscriptions::InvoiceStatus;

#[derive(Args, Debug)]
pub struct SubscriptionsCommand {
  #[command(subcommand)]
  command: SubscriptionsSubcommands,
}

#[derive(Subcommand, Debug)]
enum SubscriptionsSubcommands {
  /// List subscription invoices
  List {
    /// Only invoices in this status; defaults to all
    #[arg(short, long, default_value = "all")]
    status: InvoiceStatus,

    /// Only invoices of this customer
    #[arg(long, conflicts_with = "subscription")]
    customer: Option<String>,

    /// Only invoices of this subscription
    #[arg(long)]
    subscription: Option<String>,
  },
}

pub async fn execute(cmd: SubscriptionsCommand, client: &ZohoClient) -> Result<()> {
  match cmd.command {
    SubscriptionsSubcommands::List { status, customer, subscription } => {
      let invoices = client.subscription_invoices();
      let response = match (customer, subscription) {
        (Some(customer_id), _) => invoices.list_invoices_for_customer(status, &customer_id).await?,
        (None, Some(subscription_id)) => invoices.list_invoices_for_subscription(status, &subscription_id).await?,
        (None, None) => invoices.list_all_invoices(status).await?,
      };
      info!("Retrieved {} {} invoices", response.invoices.len(), status);
      print_json(&response.invoices)
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
    subscriptions: SubscriptionsCommand,
  }

  #[test]
  fn test_list_defaults_to_all() {
    let cli = TestCli::try_parse_from(["zoho", "list"]).unwrap();
    let SubscriptionsSubcommands::List { status, customer, subscription } = cli.subscriptions.command;
    assert_eq!(status, InvoiceStatus::All);
    assert!(customer.is_none());
    assert!(subscription.is_none());
  }

  #[test]
  fn test_customer_and_subscription_conflict() {
    assert!(TestCli::try_parse_from(["zoho", "list", "--customer", "c-1", "--subscription", "s-1"]).is_err());

    let cli = TestCli::try_parse_from(["zoho", "list", "--status", "unpaid", "--subscription", "s-1"]).unwrap();
    let SubscriptionsSubcommands::List { status, subscription, .. } = cli.subscriptions.command;
    assert_eq!(status, InvoiceStatus::Unpaid);
    assert_eq!(subscription.as_deref(), Some("s-1"));
  }
}
