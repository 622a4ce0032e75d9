use rand::{rngs::StdRng, Rng};

use crate::{
    configuration::IdPoolSettings,
    domain::{validate_contact, Customer, NameParts},
    id_pool::{IdPool, IdPoolError, INITIAL_CUSTOMER_IDS},
};

#[derive(thiserror::Error, Debug)]
pub enum FactoryError {
    #[error(transparent)]
    IdPool(#[from] IdPoolError),
}

/// Creates customers from validated arguments only and assigns their ids
/// from a pool it owns.
#[derive(Debug)]
pub struct CustomerFactory<R = StdRng> {
    customer_ids: IdPool<R>,
}

impl CustomerFactory<StdRng> {
    pub fn from_settings(settings: IdPoolSettings) -> Result<Self, FactoryError> {
        let customer_ids = IdPool::from_settings(&INITIAL_CUSTOMER_IDS, settings)?;
        Ok(Self::with_id_pool(customer_ids))
    }
}

impl<R: Rng> CustomerFactory<R> {
    pub fn with_id_pool(customer_ids: IdPool<R>) -> Self {
        Self { customer_ids }
    }

    /// Creates a customer from a mix of name parts and contacts, e.g.
    /// `["Eric", "Meyer", "eric98@yahoo.com", "(030) 3945-642298"]`.
    ///
    /// Arguments that pass as contacts become contacts, everything else
    /// is joined into the name. Returns `Ok(None)` if no name is left.
    #[tracing::instrument(name = "Creating a new customer", skip(self, args))]
    pub fn create_customer<I, S>(&mut self, args: I) -> Result<Option<Customer>, FactoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flat_name = String::new();
        let mut contacts = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            match validate_contact(arg) {
                Some(contact) => contacts.push(contact),
                None => {
                    flat_name.push_str(arg);
                    flat_name.push(' ');
                }
            }
        }

        let name = match NameParts::parse(&flat_name) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(error = %e, contacts = contacts.len(), "No customer created");
                return Ok(None);
            }
        };

        let id = self.customer_ids.next_id()?;
        let customer = Customer::from_parts(id, name, contacts);
        tracing::info!(
            customer_id = id,
            contacts = customer.contacts_count(),
            "Customer created"
        );

        Ok(Some(customer))
    }

    pub fn id_pool(&self) -> &IdPool<R> {
        &self.customer_ids
    }
}

#[cfg(test)]
mod tests {
    use claim::{assert_none, assert_ok, assert_some};
    use rand::{rngs::StdRng, SeedableRng};

    use super::CustomerFactory;
    use crate::{
        configuration::IdPoolSettings,
        id_pool::{IdPool, INITIAL_CUSTOMER_IDS},
    };

    fn factory() -> CustomerFactory {
        let pool = IdPool::with_rng(
            &INITIAL_CUSTOMER_IDS,
            IdPoolSettings::default(),
            StdRng::seed_from_u64(1),
        )
        .expect("Failed to build pool.");
        CustomerFactory::with_id_pool(pool)
    }

    #[test]
    fn short_arguments_form_the_name() {
        let mut factory = factory();

        let customer = assert_some!(assert_ok!(factory.create_customer([" Tim ", "Bauer", "tim2346@gmx.de"])));

        assert_eq!(customer.first_name(), "Tim");
        assert_eq!(customer.last_name(), "Bauer");
        assert_eq!(customer.contacts_count(), 1);
    }

    #[test]
    fn ids_come_from_the_initial_pool_first() {
        let mut factory = factory();

        for expected in INITIAL_CUSTOMER_IDS {
            let customer = factory.create_customer(["Eric", "Meyer"]).unwrap().unwrap();
            assert_eq!(customer.id(), Some(expected));
        }
    }

    #[test]
    fn nameless_arguments_create_nothing_and_draw_no_id() {
        let mut factory = factory();

        assert_none!(assert_ok!(factory.create_customer(["eric98@yahoo.com", "(030) 3945-642298"])));
        assert_none!(assert_ok!(factory.create_customer(Vec::<String>::new())));
        assert_none!(assert_ok!(factory.create_customer(["  ", "''"])));

        assert_eq!(factory.id_pool().dispensed(), 0);
    }
}
