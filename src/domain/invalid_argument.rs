/// Violated precondition of a customer operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("name empty")]
    EmptyName,
    #[error("last name empty")]
    EmptyLastName,
    #[error("invalid id (negative)")]
    NegativeId,
    #[error("contact argument is null or empty")]
    EmptyContact,
    #[error("contact less than 6 characters: \"{0}\".")]
    ContactTooShort(String),
}
