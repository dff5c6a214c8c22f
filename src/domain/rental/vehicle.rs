use derive_more::{Deref, Display, Error, From};
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{ErrorKind, Id};

/// Vehicle ID
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, From, Deref, Default)]
pub struct VehicleId(u64);

impl Id for VehicleId {
    type Inner = u64;
}

/// Rentable vehicle with its listed rates.
///
/// The nightlife and wedding rates are part of the listing only; reservation
/// pricing is driven by the unit price captured on the reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: Option<VehicleId>,
    name: String,
    first_hour_price: Decimal,
    nightlife_price: Decimal,
    wedding_price: Decimal,
    build_year: i32,
}

impl Vehicle {
    pub const ENTITY_NAME: &'static str = "vehicle";

    pub fn create(
        name: String,
        first_hour_price: Decimal,
        nightlife_price: Decimal,
        wedding_price: Decimal,
        build_year: i32,
    ) -> Result<Self, VehicleError> {
        Self::validate_created(
            &name,
            first_hour_price,
            nightlife_price,
            wedding_price,
            build_year,
        )?;
        debug!(entity = Self::ENTITY_NAME, name = %name, "entity created");
        Ok(Vehicle {
            id: None,
            name,
            first_hour_price,
            nightlife_price,
            wedding_price,
            build_year,
        })
    }

    pub fn with_id(mut self, id: VehicleId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<VehicleId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn first_hour_price(&self) -> Decimal {
        self.first_hour_price
    }

    pub fn nightlife_price(&self) -> Decimal {
        self.nightlife_price
    }

    pub fn wedding_price(&self) -> Decimal {
        self.wedding_price
    }

    pub fn build_year(&self) -> i32 {
        self.build_year
    }

    fn validate_created(
        name: &str,
        first_hour_price: Decimal,
        nightlife_price: Decimal,
        wedding_price: Decimal,
        build_year: i32,
    ) -> Result<(), VehicleError> {
        Self::validate_name(name)?;
        Self::validate_price(first_hour_price, VehicleError::InvalidFirstHourPrice)?;
        Self::validate_price(nightlife_price, VehicleError::InvalidNightlifePrice)?;
        Self::validate_price(wedding_price, VehicleError::InvalidWeddingPrice)?;
        Self::validate_build_year(build_year)?;
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), VehicleError> {
        match name.is_empty() {
            true => Err(VehicleError::NameRequired),
            false => Ok(()),
        }
    }

    fn validate_price(price: Decimal, error: VehicleError) -> Result<(), VehicleError> {
        match price <= Decimal::ZERO {
            true => Err(error),
            false => Ok(()),
        }
    }

    fn validate_build_year(build_year: i32) -> Result<(), VehicleError> {
        match build_year <= 0 {
            true => Err(VehicleError::InvalidBuildYear),
            false => Ok(()),
        }
    }
}

/// Vehicle error
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum VehicleError {
    #[display(fmt = "name: vehicle name must not be empty")]
    NameRequired,
    #[display(fmt = "first_hour_price: must be greater than 0")]
    InvalidFirstHourPrice,
    #[display(fmt = "nightlife_price: must be greater than 0")]
    InvalidNightlifePrice,
    #[display(fmt = "wedding_price: must be greater than 0")]
    InvalidWeddingPrice,
    #[display(fmt = "build_year: must be greater than 0")]
    InvalidBuildYear,
}

impl VehicleError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    pub fn field(&self) -> &'static str {
        match self {
            VehicleError::NameRequired => "name",
            VehicleError::InvalidFirstHourPrice => "first_hour_price",
            VehicleError::InvalidNightlifePrice => "nightlife_price",
            VehicleError::InvalidWeddingPrice => "wedding_price",
            VehicleError::InvalidBuildYear => "build_year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(
        name: &str,
        first_hour_price: i64,
        nightlife_price: i64,
        wedding_price: i64,
        build_year: i32,
    ) -> Result<Vehicle, VehicleError> {
        Vehicle::create(
            name.to_owned(),
            Decimal::from(first_hour_price),
            Decimal::from(nightlife_price),
            Decimal::from(wedding_price),
            build_year,
        )
    }

    #[test]
    fn test_vehicle_create() {
        let vehicle = Vehicle::create(
            "Cadillac Escalade".to_owned(),
            Decimal::new(1995, 1),
            Decimal::from(600),
            Decimal::from(900),
            2019,
        )
        .unwrap();
        assert_eq!(vehicle.id(), None);
        assert_eq!(vehicle.name(), "Cadillac Escalade");
        assert_eq!(vehicle.first_hour_price(), Decimal::new(1995, 1));
        assert_eq!(vehicle.nightlife_price(), Decimal::from(600));
        assert_eq!(vehicle.wedding_price(), Decimal::from(900));
        assert_eq!(vehicle.build_year(), 2019);
        assert_eq!(Vehicle::ENTITY_NAME, "vehicle");
    }

    #[test]
    fn test_vehicle_with_id() {
        let vehicle = create("Rolls-Royce Phantom", 300, 1200, 1500, 1998)
            .unwrap()
            .with_id(VehicleId::from(3));
        assert_eq!(vehicle.id(), Some(VehicleId(3)));
        assert_eq!(vehicle.name(), "Rolls-Royce Phantom");
    }

    #[test]
    fn test_vehicle_name_required() {
        let err = create("", 300, 1200, 1500, 1998).unwrap_err();
        assert_eq!(err, VehicleError::NameRequired);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_vehicle_prices_must_be_positive() {
        assert_eq!(
            create("Hummer", 0, 1200, 1500, 2004).unwrap_err(),
            VehicleError::InvalidFirstHourPrice
        );
        assert_eq!(
            create("Hummer", 300, -1, 1500, 2004).unwrap_err(),
            VehicleError::InvalidNightlifePrice
        );
        assert_eq!(
            create("Hummer", 300, 1200, 0, 2004).unwrap_err(),
            VehicleError::InvalidWeddingPrice
        );
    }

    #[test]
    fn test_vehicle_build_year_must_be_positive() {
        let err = create("Hummer", 300, 1200, 1500, 0).unwrap_err();
        assert_eq!(err, VehicleError::InvalidBuildYear);
        assert_eq!(err.field(), "build_year");
        assert!(create("Hummer", 300, 1200, 1500, -2004).is_err());
    }
}
