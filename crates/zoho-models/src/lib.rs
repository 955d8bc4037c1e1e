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

//! # zoho-models
//!
//! Data models for the Zoho Invoice, Zoho Books and Zoho Subscriptions APIs.
//!
//! Every shape mirrors the remote JSON schema field for field. Optional fields
//! are omitted when serializing and default to their zero value when absent
//! from a response.
//!
//! ## Usage
//!
//! ```ignore
//! use zoho_models::invoice::GetInvoiceResponse;
//! use zoho_models::ApiResponse;
//!
//! let response: GetInvoiceResponse = serde_json::from_str(&body)?;
//! if response.is_success() {
//!     println!("{:?}", response.invoice.invoice_number);
//! }
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod contact_person;
pub mod invoice;
pub mod subscriptions;

// Re-export common types for convenience
pub use common::*;
