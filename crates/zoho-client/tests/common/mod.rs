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

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;
use zoho_client::{Config, Result, StaticTokenProvider, TokenProvider, ZohoClient};

pub const ORG_ID: &str = "10234695";
pub const TOKEN: &str = "1000.test-token";

/// Route client logs through the test harness. `RUST_LOG` overrides the default level.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zoho_client=debug"));
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// Config pointing every base URL at the mock server
pub fn config_for(server: &MockServer) -> Config {
  init_tracing();
  Config::new(ORG_ID)
    .with_invoice_base_url(format!("{}/invoice/v3/", server.uri()))
    .with_subscriptions_base_url(format!("{}/api/v1/", server.uri()))
    .with_accounts_url(server.uri())
    .with_rate_limit(6000)
}

pub fn client_for(server: &MockServer) -> ZohoClient {
  ZohoClient::new(config_for(server), Arc::new(StaticTokenProvider::new(TOKEN))).unwrap()
}

pub fn auth_header(token: &str) -> String {
  format!("Zoho-oauthtoken {token}")
}

/// Starts with `initial`; every refresh issues `fresh-N`
pub struct RotatingProvider {
  pub refreshes: AtomicUsize,
  token: RwLock<String>,
}

impl RotatingProvider {
  pub fn new(initial: &str) -> Arc<Self> {
    Arc::new(Self { refreshes: AtomicUsize::new(0), token: RwLock::new(initial.to_string()) })
  }

  pub fn refresh_count(&self) -> usize {
    self.refreshes.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl TokenProvider for RotatingProvider {
  fn current_token(&self) -> Option<String> {
    Some(self.token.read().unwrap().clone())
  }

  fn is_expired(&self) -> bool {
    false
  }

  async fn refresh(&self) -> Result<()> {
    let n = self.refreshes.fetch_add(1, Ordering::SeqCst) + 1;
    *self.token.write().unwrap() = format!("fresh-{n}");
    Ok(())
  }
}
