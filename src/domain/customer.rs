use serde::Serialize;

use super::{Contact, InvalidArgument, NameParts};

/// A person who creates and owns orders.
///
/// Setters return `&mut Self` so calls can be chained:
///
/// ```
/// use customers::domain::Customer;
///
/// let mut customer = Customer::new();
/// customer
///     .set_id(648)?
///     .set_full_name("Meyer, Eric")?
///     .add_contact("eric98@yahoo.com")?;
///
/// assert_eq!(customer.id(), Some(648));
/// assert_eq!(customer.first_name(), "Eric");
/// # Ok::<(), customers::domain::InvalidArgument>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: Option<i64>,
    first_name: String,
    last_name: String,
    contacts: Vec<Contact>,
}

impl Customer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unassigned customer from a single-string name, see
    /// [`NameParts`] for the splitting rules.
    pub fn with_name(name: &str) -> Result<Self, InvalidArgument> {
        let mut customer = Self::new();
        customer.set_full_name(name)?;
        Ok(customer)
    }

    /// Assembles a customer from already validated parts.
    pub(crate) fn from_parts(id: i64, name: NameParts, contacts: Vec<Contact>) -> Self {
        let (first_name, last_name) = name.into_parts();
        let mut customer = Self {
            id: Some(id),
            first_name,
            last_name,
            contacts: Vec::with_capacity(contacts.len()),
        };
        for contact in contacts {
            customer.push_contact(contact);
        }
        customer
    }

    /// `None` until an id has been assigned.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Assigns `id` once. Later calls and `0` are ignored, negative ids
    /// always fail.
    pub fn set_id(&mut self, id: i64) -> Result<&mut Self, InvalidArgument> {
        if id < 0 {
            return Err(InvalidArgument::NegativeId);
        }
        if self.id.is_none() && id > 0 {
            self.id = Some(id);
        }
        Ok(self)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Sets both name parts as given, without splitting.
    pub fn set_name(&mut self, first: &str, last: &str) -> Result<&mut Self, InvalidArgument> {
        if last.trim().is_empty() {
            return Err(InvalidArgument::EmptyLastName);
        }
        self.first_name = first.to_string();
        self.last_name = last.to_string();
        Ok(self)
    }

    /// Splits a single-string name like `"Eric Meyer"` into its parts.
    pub fn set_full_name(&mut self, name: &str) -> Result<&mut Self, InvalidArgument> {
        let (first_name, last_name) = NameParts::parse(name)?.into_parts();
        self.first_name = first_name;
        self.last_name = last_name;
        Ok(self)
    }

    pub fn contacts_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Adds a contact unless it is already present. Blank contacts and
    /// contacts shorter than 6 characters fail.
    pub fn add_contact(&mut self, contact: &str) -> Result<&mut Self, InvalidArgument> {
        let contact = Contact::parse(contact)?;
        self.push_contact(contact);
        Ok(self)
    }

    fn push_contact(&mut self, contact: Contact) {
        if !self.contacts.contains(&contact) {
            self.contacts.push(contact);
        }
    }

    /// Removes the contact at `index`, out of range indices are ignored.
    pub fn delete_contact(&mut self, index: usize) {
        if index < self.contacts.len() {
            self.contacts.remove(index);
        }
    }

    pub fn delete_all_contacts(&mut self) {
        self.contacts.clear();
    }
}
