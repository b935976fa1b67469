//! Contact record model.
//!
//! # Responsibility
//! - Define the immutable record the display composer reads.
//! - Enforce non-empty required fields at construction and on the wire.
//!
//! # Invariants
//! - `name`, `family_name` and `address` are never empty after construction
//!   (they seed initials and the always-rendered address row).
//! - Optional fields carry no placeholder values; absence is `None` and every
//!   fallback decision lives in the view layer, not here.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for contact construction and deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// `name` is empty or whitespace-only.
    EmptyName,
    /// `family_name` is empty or whitespace-only.
    EmptyFamilyName,
    /// `address` is empty or whitespace-only.
    EmptyAddress,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact `name` must be non-empty"),
            Self::EmptyFamilyName => write!(f, "contact `family_name` must be non-empty"),
            Self::EmptyAddress => write!(f, "contact `address` must be non-empty"),
        }
    }
}

impl Error for ContactValidationError {}

/// Immutable value record for one contact-detail screen.
///
/// Optional fields keep per-field display policy out of the data shape:
/// - `surname`: absent means the name line shows `name` alone.
/// - `phone`: absent means the phone row shows a placeholder dash.
/// - `email`: absent means the email row is omitted entirely.
/// - `image_ref`: absent means the avatar falls back to an initials badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactDraft")]
pub struct ContactRecord {
    /// Required given name; first char seeds the initials badge.
    pub name: String,
    /// Optional patronymic-like middle name.
    pub surname: Option<String>,
    /// Required family name; first char seeds the initials badge.
    pub family_name: String,
    /// Optional avatar URL resolved by the host's image fetcher.
    pub image_ref: Option<String>,
    /// Favorite marker; renders a star after the family name when set.
    pub is_favorite: bool,
    /// Optional phone digits, stored without the leading `+`.
    pub phone: Option<String>,
    /// Required postal address.
    pub address: String,
    /// Optional email address.
    pub email: Option<String>,
}

impl ContactRecord {
    /// Creates a record from the required fields.
    ///
    /// Optional fields start as `None` and `is_favorite` as `false`; callers
    /// fill them in directly before handing the record to the composer.
    ///
    /// # Errors
    /// - Returns a `ContactValidationError` when any required field is empty
    ///   or whitespace-only.
    pub fn new(
        name: impl Into<String>,
        family_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        let record = Self {
            name: name.into(),
            surname: None,
            family_name: family_name.into(),
            image_ref: None,
            is_favorite: false,
            phone: None,
            address: address.into(),
            email: None,
        };
        record.validate()?;
        Ok(record)
    }

    /// Checks required-field invariants.
    ///
    /// Deserialization calls this through the draft conversion, so records
    /// arriving over the wire carry the same guarantees as constructed ones.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        if self.family_name.trim().is_empty() {
            return Err(ContactValidationError::EmptyFamilyName);
        }
        if self.address.trim().is_empty() {
            return Err(ContactValidationError::EmptyAddress);
        }
        Ok(())
    }
}

/// Wire-shape mirror used to validate during deserialization.
#[derive(Deserialize)]
struct ContactDraft {
    name: String,
    #[serde(default)]
    surname: Option<String>,
    family_name: String,
    #[serde(default)]
    image_ref: Option<String>,
    #[serde(default)]
    is_favorite: bool,
    #[serde(default)]
    phone: Option<String>,
    address: String,
    #[serde(default)]
    email: Option<String>,
}

impl TryFrom<ContactDraft> for ContactRecord {
    type Error = ContactValidationError;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        let record = Self {
            name: draft.name,
            surname: draft.surname,
            family_name: draft.family_name,
            image_ref: draft.image_ref,
            is_favorite: draft.is_favorite,
            phone: draft.phone,
            address: draft.address,
            email: draft.email,
        };
        record.validate()?;
        Ok(record)
    }
}
