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

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use zoho_client::ZohoClient;
use zoho_core::{Config, Product};

mod commands;
use commands::{invoice::InvoiceCommand, subscriptions::SubscriptionsCommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "zoho")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Use the Zoho Books API instead of Zoho Invoice
  #[arg(long, global = true)]
  books: bool,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Work with invoices of the invoicing product
  Invoice(InvoiceCommand),
  /// Work with Zoho Subscriptions invoices
  Subscriptions(SubscriptionsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  dotenv().ok();

  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let mut config = Config::from_env().context("Failed to load Zoho configuration")?;
  if cli.books {
    config = config.with_product(Product::Books);
  }

  let client = ZohoClient::from_config(config).context("Failed to build Zoho client")?;

  match cli.command {
    Commands::Invoice(cmd) => commands::invoice::execute(cmd, &client).await?,
    Commands::Subscriptions(cmd) => commands::subscriptions::execute(cmd, &client).await?,
  }

  Ok(())
}
