use std::sync::Arc;

use chrono::{DateTime, Duration, Local, NaiveDateTime, Timelike};
use derive_more::{Deref, Display, Error, From};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::domain::{Entity, ErrorKind, Id};

use super::{Customer, HourRate, Tariff, Vehicle};

/// Longest reservation that can be booked, in hours.
pub const MAX_DURATION_HOURS: i64 = 11;

/// Highest accepted unit price. Pricing stays within `Decimal` range for any tariff.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000_000_000;

/// Reservation number
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, From, Deref, Default)]
pub struct ReservationNumber(u64);

impl Id for ReservationNumber {
    type Inner = u64;
}

/// Reservation entity
///
/// Customer and vehicle are shared with the rest of the application. The unit
/// price is captured at booking time and does not follow later changes to the
/// vehicle's listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    number: ReservationNumber,
    customer: Arc<Customer>,
    vehicle: Arc<Vehicle>,
    start: DateTime<Local>,
    duration: Duration,
    unit_price: Decimal,
    vehicles: Vec<Arc<Vehicle>>,
    start_hour: Option<DateTime<Local>>,
}

/// One billed hour of a reservation, starting at a local wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilledHour {
    pub starts_at: NaiveDateTime,
    pub rate: HourRate,
    pub amount: Decimal,
}

impl Reservation {
    /// Creates a reservation, rejecting start times before the current local time.
    pub fn create(
        number: ReservationNumber,
        customer: Option<Arc<Customer>>,
        vehicle: Option<Arc<Vehicle>>,
        start: DateTime<Local>,
        duration: Duration,
        unit_price: Decimal,
    ) -> Result<Self, ReservationError> {
        Self::create_as_of(
            number,
            customer,
            vehicle,
            start,
            duration,
            unit_price,
            Local::now(),
        )
    }

    /// Same as [`Reservation::create`], with `now` as the earliest accepted start.
    pub fn create_as_of(
        number: ReservationNumber,
        customer: Option<Arc<Customer>>,
        vehicle: Option<Arc<Vehicle>>,
        start: DateTime<Local>,
        duration: Duration,
        unit_price: Decimal,
        now: DateTime<Local>,
    ) -> Result<Self, ReservationError> {
        let customer = customer.ok_or(ReservationError::CustomerRequired)?;
        let vehicle = vehicle.ok_or(ReservationError::VehicleRequired)?;
        Self::validate_start(&start, &now)?;
        Self::validate_duration(&duration)?;
        Self::validate_unit_price(unit_price)?;
        debug!(
            entity = Self::ENTITY_NAME,
            id = %number,
            start = %start,
            minutes = duration.num_minutes(),
            "entity created"
        );
        Ok(Reservation {
            number,
            customer,
            vehicle,
            start,
            duration,
            unit_price,
            vehicles: Vec::new(),
            start_hour: None,
        })
    }

    pub fn number(&self) -> ReservationNumber {
        self.number
    }

    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn vehicle(&self) -> &Arc<Vehicle> {
        &self.vehicle
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Additional vehicles attached to the reservation. Not used for pricing.
    pub fn vehicles(&self) -> &[Arc<Vehicle>] {
        &self.vehicles
    }

    pub fn vehicles_mut(&mut self) -> &mut Vec<Arc<Vehicle>> {
        &mut self.vehicles
    }

    pub fn start_hour(&self) -> Option<DateTime<Local>> {
        self.start_hour
    }

    pub fn set_start_hour(&mut self, start_hour: Option<DateTime<Local>>) {
        self.start_hour = start_hour;
    }

    /// Total price under the default tariff.
    pub fn total_price(&self) -> Decimal {
        self.total_price_with(&Tariff::default())
    }

    pub fn total_price_with(&self, tariff: &Tariff) -> Decimal {
        self.price_breakdown_with(tariff)
            .iter()
            .map(|hour| hour.amount)
            .sum()
    }

    pub fn price_breakdown(&self) -> Vec<BilledHour> {
        self.price_breakdown_with(&Tariff::default())
    }

    /// Billed hours: the first hour at the unit price, then every whole hour
    /// past the first at the day or night rate of its local start hour.
    /// Hours are counted on the wall clock, so a daylight saving change does
    /// not shift them. A trailing partial hour is not billed.
    pub fn price_breakdown_with(&self, tariff: &Tariff) -> Vec<BilledHour> {
        let start = self.start.naive_local();
        let mut hours = vec![BilledHour {
            starts_at: start,
            rate: HourRate::FirstHour,
            amount: tariff.amount(self.unit_price, HourRate::FirstHour),
        }];
        if self.duration > Duration::hours(1) {
            let additional = (self.duration - Duration::hours(1)).num_hours();
            for i in 0..additional {
                let starts_at = start + Duration::hours(i + 1);
                let rate = tariff.rate_for(starts_at.hour());
                let amount = tariff.amount(self.unit_price, rate);
                trace!(
                    id = %self.number,
                    starts_at = %starts_at,
                    rate = %rate,
                    amount = %amount,
                    "billed hour"
                );
                hours.push(BilledHour {
                    starts_at,
                    rate,
                    amount,
                });
            }
        }
        hours
    }

    fn validate_start(
        start: &DateTime<Local>,
        now: &DateTime<Local>,
    ) -> Result<(), ReservationError> {
        match start < now {
            true => Err(ReservationError::StartInPast),
            false => Ok(()),
        }
    }

    fn validate_duration(duration: &Duration) -> Result<(), ReservationError> {
        match *duration <= Duration::zero() || *duration > Duration::hours(MAX_DURATION_HOURS) {
            true => Err(ReservationError::InvalidDuration),
            false => Ok(()),
        }
    }

    fn validate_unit_price(unit_price: Decimal) -> Result<(), ReservationError> {
        match unit_price <= Decimal::ZERO || unit_price > Decimal::from(MAX_UNIT_PRICE) {
            true => Err(ReservationError::InvalidUnitPrice),
            false => Ok(()),
        }
    }
}

impl Entity for Reservation {
    type Id = ReservationNumber;

    const ENTITY_NAME: &'static str = "reservation";

    fn id(&self) -> Self::Id {
        self.number
    }
}

/// Reservation error
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum ReservationError {
    #[display(fmt = "customer: a customer is required")]
    CustomerRequired,
    #[display(fmt = "vehicle: a vehicle is required")]
    VehicleRequired,
    #[display(fmt = "start: start date cannot be in the past")]
    StartInPast,
    #[display(fmt = "duration: must be more than 0 and at most 11 hours")]
    InvalidDuration,
    #[display(fmt = "unit_price: must be greater than 0 and at most {}", MAX_UNIT_PRICE)]
    InvalidUnitPrice,
}

impl ReservationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReservationError::CustomerRequired | ReservationError::VehicleRequired => {
                ErrorKind::AbsentReference
            }
            ReservationError::StartInPast
            | ReservationError::InvalidDuration
            | ReservationError::InvalidUnitPrice => ErrorKind::InvalidArgument,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ReservationError::CustomerRequired => "customer",
            ReservationError::VehicleRequired => "vehicle",
            ReservationError::StartInPast => "start",
            ReservationError::InvalidDuration => "duration",
            ReservationError::InvalidUnitPrice => "unit_price",
        }
    }
}
