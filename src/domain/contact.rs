use std::fmt;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use super::{trim::trim_decorations, InvalidArgument};

const MIN_LEN: usize = 6;

/// A way to reach a customer (email, phone, fax, ...). Only the trimmed
/// length is checked, never the format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Contact(String);

impl Contact {
    pub fn parse(s: &str) -> Result<Contact, InvalidArgument> {
        if s.trim().is_empty() {
            return Err(InvalidArgument::EmptyContact);
        }

        let contact = trim_decorations(s);
        if contact.graphemes(true).count() < MIN_LEN {
            return Err(InvalidArgument::ContactTooShort(s.to_string()));
        }

        Ok(Self(contact.to_string()))
    }
}

/// Returns the trimmed contact, or `None` when `candidate` is not one.
pub fn validate_contact(candidate: &str) -> Option<Contact> {
    Contact::parse(candidate).ok()
}

impl AsRef<str> for Contact {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
