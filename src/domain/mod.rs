mod contact;
mod customer;
mod invalid_argument;
mod name_parts;
mod trim;

pub use contact::{validate_contact, Contact};
pub use customer::Customer;
pub use invalid_argument::InvalidArgument;
pub use name_parts::NameParts;
