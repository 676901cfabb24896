use crate::primitives::{PrimitiveType, PRIMITIVES};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

/// Byte width of a container element. Only the four unsigned integer widths exist.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementWidth {
    U8,
    U16,
    U32,
    U64,
}
impl ElementWidth {
    pub const ALL: [ElementWidth; 4] = [Self::U8, Self::U16, Self::U32, Self::U64];

    pub const fn size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
            Self::U64 => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }

    pub fn primitive(self) -> PrimitiveType {
        PRIMITIVES[self.name()]
    }

    pub fn from_size(size: usize) -> Result<Self> {
        PRIMITIVES
            .by_size(size)
            .map(|primitive| primitive.width)
            .ok_or_else(|| Error::UnknownElementWidth(format!("{size} bytes")))
    }

    pub fn from_name(name: &str) -> Result<Self> {
        PRIMITIVES
            .get(name)
            .map(|primitive| primitive.width)
            .ok_or_else(|| {
                Error::UnknownElementWidth(format!(
                    "{name:?} (available: {:?})",
                    PRIMITIVES.names()
                ))
            })
    }
}
impl Display for ElementWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either a primitive name (`u16`) or a byte count (`2`).
impl FromStr for ElementWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.parse::<usize>() {
            Ok(size) => Self::from_size(size),
            Err(_) => Self::from_name(s),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer that can be stored in a [`Vector`](crate::Vector) or
/// [`LinkedList`](crate::LinkedList).
pub trait Element: sealed::Sealed + Copy + Debug + Display + 'static {
    const WIDTH: ElementWidth;

    fn to_u64(self) -> u64;

    /// Narrowing conversion, `None` if `value` does not fit.
    fn from_u64(value: u64) -> Option<Self>;
}

macro_rules! element_primitive {
    ($primitive_type:ty, $width:ident) => {
        impl sealed::Sealed for $primitive_type {}

        impl Element for $primitive_type {
            const WIDTH: ElementWidth = ElementWidth::$width;

            fn to_u64(self) -> u64 {
                u64::from(self)
            }

            fn from_u64(value: u64) -> Option<Self> {
                <$primitive_type>::try_from(value).ok()
            }
        }
    };
}

element_primitive!(u8, U8);
element_primitive!(u16, U16);
element_primitive!(u32, U32);
element_primitive!(u64, U64);
