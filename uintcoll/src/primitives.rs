use crate::width::ElementWidth;
use serde::Serialize;
use std::mem::{align_of, size_of};
use std::ops::Index;

#[derive(Copy, Clone, Debug, Serialize)]
pub struct PrimitiveType {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
    pub width: ElementWidth,
}

pub struct Primitives(phf::OrderedMap<&'static str, PrimitiveType>);
impl Primitives {
    const fn new() -> Self {
        let map = phf::phf_ordered_map! {
            "u8" => PrimitiveType {
                name: "u8",
                size: size_of::<u8>(),
                align: align_of::<u8>(),
                width: ElementWidth::U8,
            },
            "u16" => PrimitiveType {
                name: "u16",
                size: size_of::<u16>(),
                align: align_of::<u16>(),
                width: ElementWidth::U16,
            },
            "u32" => PrimitiveType {
                name: "u32",
                size: size_of::<u32>(),
                align: align_of::<u32>(),
                width: ElementWidth::U32,
            },
            "u64" => PrimitiveType {
                name: "u64",
                size: size_of::<u64>(),
                align: align_of::<u64>(),
                width: ElementWidth::U64,
            }
        };

        Self(map)
    }

    pub fn get(&self, name: &str) -> Option<PrimitiveType> {
        self.0.get(name).copied()
    }

    pub fn by_size(&self, size: usize) -> Option<PrimitiveType> {
        self.0.values().find(|r#type| r#type.size == size).copied()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.keys().copied().collect()
    }
}
impl Index<&str> for Primitives {
    type Output = PrimitiveType;

    fn index(&self, index: &str) -> &Self::Output {
        &self.0[index]
    }
}

pub const PRIMITIVES: Primitives = Primitives::new();
