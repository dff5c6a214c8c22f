mod customer;
mod reservation;
mod tariff;
mod vehicle;

pub use self::customer::*;
pub use self::reservation::*;
pub use self::tariff::*;
pub use self::vehicle::*;
