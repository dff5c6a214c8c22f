pub mod rental;

use std::{fmt, ops::Deref, str::FromStr};

use derive_more::Display;

pub trait Id:
    Copy + Eq + Deref<Target = Self::Inner> + From<Self::Inner> + fmt::Display + fmt::Debug
{
    type Inner: FromStr;
}

pub trait Entity {
    type Id: Id;

    const ENTITY_NAME: &'static str;

    fn id(&self) -> Self::Id;
}

/// Category of a construction failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// A required reference was not supplied
    #[display(fmt = "absent required reference")]
    AbsentReference,
    /// A supplied value is out of range or empty
    #[display(fmt = "invalid argument")]
    InvalidArgument,
}
