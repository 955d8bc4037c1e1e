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

//! Contact person endpoints

use super::{impl_endpoint_base, ClientRateLimiter, EndpointBase, EndpointCore};
use crate::transport::{RequestOptions, Transport};
use reqwest::Method;
use std::sync::Arc;
use tracing::instrument;
use zoho_core::{ApiFamily, Result};
use zoho_models::contact_person::{
  ContactPersonResponse, CreateContactPersonRequest, ListContactPersonsResponse,
  UpdateContactPersonRequest, UpdateContactPersonResponse,
};
use zoho_models::StatusResponse;

const CONTACTS: &str = "contacts";
const CONTACT_PERSONS: &str = "contactpersons";
const DEFAULT_QUERY: [(&str, &str); 1] = [("filter_by", "")];

/// Contact person endpoints
pub struct ContactPersonEndpoints {
  core: EndpointCore,
}

impl_endpoint_base!(ContactPersonEndpoints, ApiFamily::Invoicing);

impl ContactPersonEndpoints {
  /// Add a contact person to the contact named in `request.contact_id`
  #[instrument(skip(self, request), fields(contact_id = %request.contact_id))]
  pub async fn create_contact_person(
    &self,
    request: &CreateContactPersonRequest,
  ) -> Result<ContactPersonResponse> {
    let endpoint = self
      .endpoint("Failed to create contact person", Method::POST, &[CONTACTS, CONTACT_PERSONS])?
      .query_defaults(DEFAULT_QUERY)
      .json(request)?;

    self.core.call(endpoint).await
  }

  /// Get one contact person of a contact
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let person = client
  ///     .contact_persons()
  ///     .get_contact_person("460000000026049", "460000000026051")
  ///     .await?;
  /// println!("{:?}", person.contact_person.email);
  /// ```
  #[instrument(skip(self))]
  pub async fn get_contact_person(
    &self,
    contact_id: &str,
    contact_person_id: &str,
  ) -> Result<ContactPersonResponse> {
    let endpoint = self
      .endpoint(
        "Failed to retrieve contact person",
        Method::GET,
        &[CONTACTS, contact_id, CONTACT_PERSONS, contact_person_id],
      )?
      .query_defaults(DEFAULT_QUERY);

    self.core.call(endpoint).await
  }

  /// All contact persons of a contact
  #[instrument(skip(self))]
  pub async fn list_contact_persons(&self, contact_id: &str) -> Result<ListContactPersonsResponse> {
    let endpoint = self
      .endpoint("Failed to list contact persons", Method::GET, &[CONTACTS, contact_id, CONTACT_PERSONS])?
      .query_defaults(DEFAULT_QUERY);

    self.core.call(endpoint).await
  }

  #[instrument(skip(self, request))]
  pub async fn update_contact_person(
    &self,
    contact_person_id: &str,
    request: &UpdateContactPersonRequest,
  ) -> Result<UpdateContactPersonResponse> {
    let endpoint = self
      .endpoint(
        "Failed to update contact person",
        Method::PUT,
        &[CONTACTS, CONTACT_PERSONS, contact_person_id],
      )?
      .query_defaults(DEFAULT_QUERY)
      .json(request)?;

    self.core.call(endpoint).await
  }

  #[instrument(skip(self))]
  pub async fn delete_contact_person(&self, contact_person_id: &str) -> Result<StatusResponse> {
    let endpoint = self
      .endpoint(
        "Failed to delete contact person",
        Method::DELETE,
        &[CONTACTS, CONTACT_PERSONS, contact_person_id],
      )?
      .query_defaults(DEFAULT_QUERY);

    self.core.call(endpoint).await
  }

  /// Make this person the primary contact of its contact
  #[instrument(skip(self))]
  pub async fn mark_as_primary(&self, contact_person_id: &str) -> Result<StatusResponse> {
    let endpoint = self
      .endpoint(
        "Failed to mark contact person as primary",
        Method::POST,
        &[CONTACTS, CONTACT_PERSONS, contact_person_id, "primary"],
      )?
      .query_defaults(DEFAULT_QUERY);

    self.core.call(endpoint).await
  }
}
