//! User schema and page decoding
//!
//! Serde mirror of the identity provider's user object. Only a handful of
//! fields end up in the export; the rest are carried through undecorated so
//! a page decodes without loss. Every field the API may omit is optional,
//! and unknown fields are ignored.

use crate::error::{Error, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as returned by the listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<String>,
    pub status: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub activated: Option<DateTime<Utc>>,
    pub status_changed: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub password_changed: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub type_ref: UserTypeRef,
    pub profile: Profile,
    pub credentials: Credentials,
    #[serde(rename = "_links")]
    pub links: UserLinks,
}

impl User {
    /// Plain suffix match on the profile email. A user with no email never
    /// matches, so it is kept by a domain-exclusion filter.
    pub fn email_in_domain(&self, domain_suffix: &str) -> bool {
        self.profile
            .email
            .as_deref()
            .is_some_and(|email| email.ends_with(domain_suffix))
    }
}

/// Reference to the user's type object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTypeRef {
    pub id: Option<String>,
}

/// The user profile. Field set mirrors the upstream schema; everything is
/// optional because sparse profiles are common.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub login: Option<String>,
    pub email: Option<String>,
    pub second_email: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub nick_name: Option<String>,
    pub title: Option<String>,
    pub manager: Option<String>,
    pub manager_id: Option<String>,
    pub employee_number: Option<String>,
    pub division: Option<String>,
    pub department: Option<String>,
    pub user_type: Option<String>,
    pub primary_phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub postal_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country_code: Option<String>,
}

/// Credential block carried on each user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub email: EmailCredential,
    pub provider: Provider,
}

/// Email credential entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailCredential {
    pub value: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Identity provider that owns the credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
}

/// Hypermedia links attached to a user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: Option<Href>,
}

/// A single link target
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Href {
    pub href: Option<String>,
}

/// Decode one page body, a JSON array of user objects
pub fn decode_page(body: &[u8]) -> Result<Vec<User>> {
    serde_json::from_slice(body).map_err(|e| Error::decode(format!("invalid user page: {e}")))
}

/// Decode all page bodies in pagination order into one flat list.
///
/// A malformed page fails the whole decode; the error names the offending
/// page by its 1-based position.
pub fn decode_pages(pages: &[Bytes]) -> Result<Vec<User>> {
    let mut users = Vec::new();
    for (index, body) in pages.iter().enumerate() {
        let page: Vec<User> = serde_json::from_slice(body)
            .map_err(|e| Error::decode(format!("page {}: {e}", index + 1)))?;
        users.extend(page);
    }
    Ok(users)
}
