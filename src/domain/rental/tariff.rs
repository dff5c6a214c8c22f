use derive_more::{Display, Error};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

/// Rate applied to one billed hour of a reservation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum HourRate {
    #[display(fmt = "first hour")]
    FirstHour,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "night")]
    Night,
}

/// Pricing parameters for the hours after the first one.
///
/// Rates are percentages of the reservation's unit price. The night window
/// runs from `night_start_hour` (inclusive) to `night_end_hour` (exclusive)
/// and wraps around midnight when the start is later than the end.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tariff {
    pub day_rate_percent: u32,
    pub night_rate_percent: u32,
    pub night_start_hour: u32,
    pub night_end_hour: u32,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            day_rate_percent: 60,
            night_rate_percent: 120,
            night_start_hour: 22,
            night_end_hour: 7,
        }
    }
}

impl Tariff {
    pub fn is_night(&self, hour: u32) -> bool {
        if self.night_start_hour > self.night_end_hour {
            hour >= self.night_start_hour || hour < self.night_end_hour
        } else {
            hour >= self.night_start_hour && hour < self.night_end_hour
        }
    }

    /// Rate for an additional hour starting at the given local hour of day.
    pub fn rate_for(&self, hour: u32) -> HourRate {
        if self.is_night(hour) {
            HourRate::Night
        } else {
            HourRate::Day
        }
    }

    /// Amount billed for one hour, rounded to a whole unit with midpoints away from zero.
    pub fn amount(&self, unit_price: Decimal, rate: HourRate) -> Decimal {
        let percent = match rate {
            HourRate::FirstHour => return unit_price,
            HourRate::Day => self.day_rate_percent,
            HourRate::Night => self.night_rate_percent,
        };
        (unit_price * Decimal::from(percent) / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn validate(&self) -> Result<(), TariffError> {
        Self::validate_rate(self.day_rate_percent, TariffError::InvalidDayRate)?;
        Self::validate_rate(self.night_rate_percent, TariffError::InvalidNightRate)?;
        Self::validate_hour(self.night_start_hour, TariffError::InvalidNightStartHour)?;
        Self::validate_hour(self.night_end_hour, TariffError::InvalidNightEndHour)?;
        Ok(())
    }

    fn validate_rate(percent: u32, error: TariffError) -> Result<(), TariffError> {
        match percent == 0 {
            true => Err(error),
            false => Ok(()),
        }
    }

    fn validate_hour(hour: u32, error: TariffError) -> Result<(), TariffError> {
        match hour > 23 {
            true => Err(error),
            false => Ok(()),
        }
    }
}

/// Tariff error
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum TariffError {
    #[display(fmt = "day_rate_percent: must be greater than 0")]
    InvalidDayRate,
    #[display(fmt = "night_rate_percent: must be greater than 0")]
    InvalidNightRate,
    #[display(fmt = "night_start_hour: must be an hour of day (0-23)")]
    InvalidNightStartHour,
    #[display(fmt = "night_end_hour: must be an hour of day (0-23)")]
    InvalidNightEndHour,
}
