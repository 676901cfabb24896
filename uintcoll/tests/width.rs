use uintcoll::primitives::PRIMITIVES;
use uintcoll::{Element, ElementWidth, Error};

#[test]
fn widths_from_sizes() {
    assert_eq!(ElementWidth::from_size(1), Ok(ElementWidth::U8));
    assert_eq!(ElementWidth::from_size(2), Ok(ElementWidth::U16));
    assert_eq!(ElementWidth::from_size(4), Ok(ElementWidth::U32));
    assert_eq!(ElementWidth::from_size(8), Ok(ElementWidth::U64));

    for size in [0, 3, 5, 16] {
        assert!(matches!(
            ElementWidth::from_size(size),
            Err(Error::UnknownElementWidth(_))
        ));
    }
}

#[test]
fn widths_from_strings() {
    assert_eq!("u16".parse::<ElementWidth>(), Ok(ElementWidth::U16));
    assert_eq!("8".parse::<ElementWidth>(), Ok(ElementWidth::U64));
    assert!(matches!(
        "i32".parse::<ElementWidth>(),
        Err(Error::UnknownElementWidth(_))
    ));
    assert!("u128".parse::<ElementWidth>().is_err());
}

#[test]
fn primitive_table_matches_widths() {
    for width in ElementWidth::ALL {
        let primitive = width.primitive();
        assert_eq!(primitive.name, width.name());
        assert_eq!(primitive.size, width.size());
        assert_eq!(primitive.width, width);
    }

    assert_eq!(PRIMITIVES.names(), ["u8", "u16", "u32", "u64"]);
    assert_eq!(PRIMITIVES["u32"].align, std::mem::align_of::<u32>());
}

#[test]
fn element_conversions() {
    assert_eq!(<u8 as Element>::WIDTH, ElementWidth::U8);
    assert_eq!(<u64 as Element>::WIDTH, ElementWidth::U64);
    assert_eq!(u8::from_u64(255), Some(255));
    assert_eq!(u8::from_u64(256), None);
    assert_eq!(u32::from_u64(u64::MAX), None);
    assert_eq!(u64::from_u64(u64::MAX), Some(u64::MAX));
    assert_eq!(40_000u16.to_u64(), 40_000);
}

#[test]
fn width_serializes_as_primitive_name() {
    assert_eq!(serde_json::to_string(&ElementWidth::U16).unwrap(), "\"u16\"");
    assert_eq!(
        serde_json::from_str::<ElementWidth>("\"u64\"").unwrap(),
        ElementWidth::U64
    );

    let primitive = serde_json::to_value(ElementWidth::U32.primitive()).unwrap();
    assert_eq!(primitive["size"], 4);
    assert_eq!(primitive["width"], "u32");
}
