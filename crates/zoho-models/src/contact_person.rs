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

//! Contact person payloads

use crate::impl_api_response;
use serde::{Deserialize, Serialize};

/// Communication channels a contact person accepts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationPreference {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_sms_enabled: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_whatsapp_enabled: Option<bool>,
}

/// A person attached to a contact (customer)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPerson {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contact_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contact_person_id: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub salutation: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mobile: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub designation: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub department: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub skype: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_primary_contact: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub communication_preference: Option<CommunicationPreference>,
}

/// Body of `POST contacts/contactpersons`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContactPersonRequest {
  pub contact_id: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub salutation: Option<String>,

  pub first_name: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mobile: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub designation: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub department: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub skype: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub enable_portal: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub communication_preference: Option<CommunicationPreference>,
}

/// Body of `PUT contacts/contactpersons/{contact_person_id}`.
///
/// Person fields are written at the top level next to `enable_portal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContactPersonRequest {
  #[serde(flatten)]
  pub contact_person: ContactPerson,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub enable_portal: Option<bool>,
}

impl From<ContactPerson> for UpdateContactPersonRequest {
  fn from(contact_person: ContactPerson) -> Self {
    UpdateContactPersonRequest { contact_person, enable_portal: None }
  }
}

/// Envelope carrying a single contact person (create, get)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPersonResponse {
  pub code: i64,
  pub message: String,
  pub contact_person: ContactPerson,
}

/// Response of `PUT contacts/contactpersons/{contact_person_id}`.
///
/// The server wraps the updated person in a one-element array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateContactPersonResponse {
  pub code: i64,
  pub message: String,
  pub contact_person: Vec<ContactPerson>,
}

/// Response of `GET contacts/{contact_id}/contactpersons`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListContactPersonsResponse {
  pub code: i64,
  pub message: String,
  pub contact_persons: Vec<ContactPerson>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub page_context: Option<crate::common::PageContext>,
}

impl_api_response!(ContactPersonResponse, UpdateContactPersonResponse, ListContactPersonsResponse);
