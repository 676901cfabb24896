//! Fixed-width unsigned integer containers: a growable [`Vector`] and a
//! doubly-linked [`LinkedList`], both homogeneous over `u8`, `u16`, `u32` or `u64`.

mod display;
pub mod error;
pub mod list;
pub mod primitives;
pub mod vector;
pub mod width;

pub use error::{Error, Result};
pub use list::{LinkedList, Node};
pub use vector::Vector;
pub use width::{Element, ElementWidth};
