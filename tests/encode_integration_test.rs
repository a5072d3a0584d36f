use packwire::{Encoder, EncoderConfig, Error, Value, ValueKind};
use proptest::prelude::*;

/// Minimal reader for the subset of the format the encoder emits.
#[derive(Debug, PartialEq)]
enum Decoded {
    Int(i128),
    Array(Vec<Decoded>),
}

fn be(data: &[u8], width: usize) -> u64 {
    data[..width].iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Decodes one value and returns it with the number of bytes consumed.
fn decode(data: &[u8]) -> (Decoded, usize) {
    let tag = data[0];
    let rest = &data[1..];
    match tag {
        0x00..=0x7f => (Decoded::Int(tag as i128), 1),
        0xe0..=0xff => (Decoded::Int(tag as i8 as i128), 1),
        0xcc => (Decoded::Int(be(rest, 1) as i128), 2),
        0xcd => (Decoded::Int(be(rest, 2) as i128), 3),
        0xce => (Decoded::Int(be(rest, 4) as i128), 5),
        0xcf => (Decoded::Int(be(rest, 8) as i128), 9),
        0xd0 => (Decoded::Int(be(rest, 1) as u8 as i8 as i128), 2),
        0xd1 => (Decoded::Int(be(rest, 2) as u16 as i16 as i128), 3),
        0xd2 => (Decoded::Int(be(rest, 4) as u32 as i32 as i128), 5),
        0xd3 => (Decoded::Int(be(rest, 8) as i64 as i128), 9),
        0x90..=0x9f => decode_elements(&data[1..], (tag & 0x0f) as usize, 1),
        0xdc => decode_elements(&data[3..], be(rest, 2) as usize, 3),
        0xdd => decode_elements(&data[5..], be(rest, 4) as usize, 5),
        other => panic!("unexpected tag {:#04x}", other),
    }
}

fn decode_elements(data: &[u8], count: usize, header_len: usize) -> (Decoded, usize) {
    let mut offset = 0;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let (item, used) = decode(&data[offset..]);
        items.push(item);
        offset += used;
    }
    (Decoded::Array(items), header_len + offset)
}

fn narrowest_unsigned_len(v: u64) -> usize {
    match v {
        0..=0x7f => 1,
        0x80..=0xff => 2,
        0x100..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

fn narrowest_signed_len(v: i64) -> usize {
    if v >= 0 {
        narrowest_unsigned_len(v as u64)
    } else if v >= -32 {
        1
    } else if v >= i8::MIN as i64 {
        2
    } else if v >= i16::MIN as i64 {
        3
    } else if v >= i32::MIN as i64 {
        5
    } else {
        9
    }
}

fn encode_one_i64(v: i64) -> Vec<u8> {
    let mut enc = Encoder::new();
    enc.encode_i64(v);
    enc.snapshot().to_vec()
}

fn array_header_len(count: usize) -> usize {
    match count {
        0..=14 => 1,
        15..=0xffff => 3,
        _ => 5,
    }
}

#[test]
fn test_boundary_encodings() {
    let cases: &[(i64, &[u8])] = &[
        (0, &[0x00]),
        (127, &[0x7f]),
        (128, &[0xcc, 0x80]),
        (65536, &[0xce, 0x00, 0x01, 0x00, 0x00]),
        (-1, &[0xff]),
        (-32, &[0xe0]),
        (-33, &[0xd0, 0xdf]),
        (-128, &[0xd0, 0x80]),
        (-129, &[0xd1, 0xff, 0x7f]),
        (-32768, &[0xd1, 0x80, 0x00]),
        (-32769, &[0xd2, 0xff, 0xff, 0x7f, 0xff]),
        (-(1 << 31), &[0xd2, 0x80, 0x00, 0x00, 0x00]),
        (-(1 << 31) - 1, &[0xd3, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xff]),
        (i64::MIN, &[0xd3, 0x80, 0, 0, 0, 0, 0, 0, 0]),
    ];
    for (value, expected) in cases {
        assert_eq!(encode_one_i64(*value), expected.to_vec(), "value {}", value);
    }
}

#[test]
fn test_mixed_sequence_stops_at_unsupported_element() {
    let value = Value::from(vec![
        Value::U32(1),
        Value::U64(2),
        Value::from("Hello"),
        Value::from(3isize),
    ]);
    let mut enc = Encoder::new();
    let err = enc.encode_value(&value).unwrap_err();
    assert_eq!(err, Error::UnsupportedType(ValueKind::Str));
    assert_eq!(err.to_string(), "Unsupported Type: str");
    assert_eq!(enc.snapshot(), &[0x94, 0x01, 0x02]);
}

#[test]
fn test_int_array() {
    let mut enc = Encoder::new();
    enc.encode(&vec![1isize, 2, 3]).unwrap();
    assert_eq!(enc.snapshot(), &[0x93, 0x01, 0x02, 0x03]);
    let (decoded, used) = decode(enc.snapshot());
    assert_eq!(used, 4);
    assert_eq!(
        decoded,
        Decoded::Array(vec![Decoded::Int(1), Decoded::Int(2), Decoded::Int(3)])
    );
}

#[test]
fn test_growth_from_zero_capacity() {
    let config = EncoderConfig::default()
        .with_initial_capacity(0)
        .with_min_grow_capacity(8);
    let mut enc = Encoder::with_config(config);
    let mut expected = Vec::new();
    for v in 0..1000u64 {
        let v = v * 1_000_003;
        enc.encode_u64(v);
        let mut single = Encoder::new();
        single.encode_u64(v);
        expected.extend_from_slice(single.snapshot());
    }
    assert_eq!(enc.snapshot(), expected.as_slice());
    assert!(enc.buffer().capacity().is_power_of_two());
}

#[test]
fn test_large_array_uses_array16_header() {
    let items: Vec<u8> = vec![0; 20];
    let mut enc = Encoder::new();
    enc.encode(&items).unwrap();
    assert_eq!(&enc.snapshot()[..3], &[0xdc, 0x00, 0x14]);
    assert_eq!(enc.len(), 23);
}

proptest! {
    #[test]
    fn prop_unsigned_round_trip_is_narrowest(v in any::<u64>()) {
        let mut enc = Encoder::new();
        enc.encode_u64(v);
        let bytes = enc.snapshot();
        let (decoded, used) = decode(bytes);
        prop_assert_eq!(decoded, Decoded::Int(v as i128));
        prop_assert_eq!(used, bytes.len());
        prop_assert_eq!(bytes.len(), narrowest_unsigned_len(v));
    }

    #[test]
    fn prop_signed_round_trip_is_narrowest(v in any::<i64>()) {
        let bytes = encode_one_i64(v);
        let (decoded, used) = decode(&bytes);
        prop_assert_eq!(decoded, Decoded::Int(v as i128));
        prop_assert_eq!(used, bytes.len());
        prop_assert_eq!(bytes.len(), narrowest_signed_len(v));
        // Signed tags are reserved for negative values.
        if v >= 0 {
            prop_assert!(!(0xd0..=0xd3).contains(&bytes[0]));
        }
    }

    #[test]
    fn prop_encoding_is_width_independent(v in any::<i32>(), u in any::<u16>()) {
        let mut narrow = Encoder::new();
        narrow.encode_i32(v);
        narrow.encode_u16(u);
        let mut wide = Encoder::new();
        wide.encode_i64(v as i64);
        wide.encode_u64(u as u64);
        prop_assert_eq!(narrow.snapshot(), wide.snapshot());
    }

    #[test]
    fn prop_array_framing(items in prop::collection::vec(any::<i64>(), 0..300)) {
        let mut enc = Encoder::new();
        enc.encode(&items).unwrap();
        let bytes = enc.snapshot();

        let header = array_header_len(items.len());
        let body: Vec<u8> = items.iter().flat_map(|&v| encode_one_i64(v)).collect();
        prop_assert_eq!(bytes.len(), header + body.len());
        prop_assert_eq!(&bytes[header..], body.as_slice());

        let (decoded, used) = decode(bytes);
        prop_assert_eq!(used, bytes.len());
        let expected = Decoded::Array(items.iter().map(|&v| Decoded::Int(v as i128)).collect());
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn prop_growth_preserves_concatenation(values in prop::collection::vec(any::<i64>(), 0..2000)) {
        let mut enc = Encoder::with_capacity(1);
        for &v in &values {
            enc.encode_i64(v);
        }
        let expected: Vec<u8> = values.iter().flat_map(|&v| encode_one_i64(v)).collect();
        prop_assert_eq!(enc.snapshot(), expected.as_slice());
    }

    #[test]
    fn prop_reset_is_idempotent(values in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut enc = Encoder::with_capacity(4);
        enc.encode(&values).unwrap();
        let first = enc.snapshot().to_vec();
        enc.reset();
        enc.encode(&values).unwrap();
        prop_assert_eq!(enc.snapshot(), first.as_slice());
    }

    #[test]
    fn prop_unsupported_value_writes_nothing(prefix in any::<u32>(), f in any::<f64>()) {
        let mut enc = Encoder::new();
        enc.encode_u32(prefix);
        let before = enc.snapshot().to_vec();
        let err = enc.encode_value(&Value::F64(f)).unwrap_err();
        prop_assert_eq!(err, Error::UnsupportedType(ValueKind::F64));
        prop_assert_eq!(enc.snapshot(), before.as_slice());
    }
}
