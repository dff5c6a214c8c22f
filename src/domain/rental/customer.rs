use derive_more::{Deref, Display, Error, From};
use tracing::debug;

use crate::domain::{Entity, ErrorKind, Id};

/// Customer number
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, From, Deref, Default)]
pub struct CustomerId(u64);

impl Id for CustomerId {
    type Inner = u64;
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    address: String,
    tax_id: Option<String>,
}

impl Customer {
    pub fn create(
        id: CustomerId,
        first_name: String,
        last_name: String,
        address: String,
        tax_id: Option<String>,
    ) -> Result<Self, CustomerError> {
        Self::validate_created(&first_name, &last_name, &address)?;
        let entity = Customer {
            id,
            first_name,
            last_name,
            address,
            tax_id,
        };
        debug!(entity = Self::ENTITY_NAME, id = %id, "entity created");
        Ok(entity)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn tax_id(&self) -> Option<&str> {
        self.tax_id.as_deref()
    }

    fn validate_created(
        first_name: &str,
        last_name: &str,
        address: &str,
    ) -> Result<(), CustomerError> {
        Self::validate_required(first_name, CustomerError::FirstNameRequired)?;
        Self::validate_required(last_name, CustomerError::LastNameRequired)?;
        Self::validate_required(address, CustomerError::AddressRequired)?;
        Ok(())
    }

    fn validate_required(value: &str, error: CustomerError) -> Result<(), CustomerError> {
        match value.is_empty() {
            true => Err(error),
            false => Ok(()),
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    const ENTITY_NAME: &'static str = "customer";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Customer error
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum CustomerError {
    #[display(fmt = "first_name: first name must not be empty")]
    FirstNameRequired,
    #[display(fmt = "last_name: last name must not be empty")]
    LastNameRequired,
    #[display(fmt = "address: address must not be empty")]
    AddressRequired,
}

impl CustomerError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    /// Name of the offending constructor argument.
    pub fn field(&self) -> &'static str {
        match self {
            CustomerError::FirstNameRequired => "first_name",
            CustomerError::LastNameRequired => "last_name",
            CustomerError::AddressRequired => "address",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(first_name: &str, last_name: &str, address: &str) -> Result<Customer, CustomerError> {
        Customer::create(
            CustomerId(7),
            first_name.to_owned(),
            last_name.to_owned(),
            address.to_owned(),
            None,
        )
    }

    #[test]
    fn test_customer_create() {
        let customer = Customer::create(
            CustomerId(42),
            "Jan".to_owned(),
            "Peeters".to_owned(),
            "Kerkstraat 1, 9000 Gent".to_owned(),
            Some("BE0123456789".to_owned()),
        )
        .unwrap();
        assert_eq!(customer.id(), CustomerId(42));
        assert_eq!(*customer.id(), 42);
        assert_eq!(customer.first_name(), "Jan");
        assert_eq!(customer.last_name(), "Peeters");
        assert_eq!(customer.address(), "Kerkstraat 1, 9000 Gent");
        assert_eq!(customer.tax_id(), Some("BE0123456789"));
    }

    #[test]
    fn test_customer_without_tax_id() {
        let customer = create("Jan", "Peeters", "Kerkstraat 1").unwrap();
        assert_eq!(customer.tax_id(), None);
    }

    #[test]
    fn test_customer_required_fields() {
        let err = create("", "Peeters", "Kerkstraat 1").unwrap_err();
        assert_eq!(err, CustomerError::FirstNameRequired);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.field(), "first_name");

        let err = create("Jan", "", "Kerkstraat 1").unwrap_err();
        assert_eq!(err, CustomerError::LastNameRequired);
        assert_eq!(err.field(), "last_name");

        let err = create("Jan", "Peeters", "").unwrap_err();
        assert_eq!(err, CustomerError::AddressRequired);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_customer_first_failing_field_is_reported() {
        let err = create("", "", "").unwrap_err();
        assert_eq!(err, CustomerError::FirstNameRequired);
        assert!(err.to_string().starts_with("first_name"));
    }
}
