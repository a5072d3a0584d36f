use byteorder::{BigEndian, ByteOrder};
use tracing::trace;

use super::Encoder;
use crate::codec::types::{
    Typecode, NEGATIVE_FIXINT_MASK, NEGATIVE_FIXINT_MIN, POSITIVE_FIXINT_MAX,
};

// Raw stores: one tag byte followed by a big-endian payload.
impl Encoder {
    pub(crate) fn store_typecode(&mut self, byte: u8) {
        self.buf.reserve(1)[0] = byte;
        self.buf.commit(1);
    }

    pub(crate) fn store_u8(&mut self, tag: Typecode, value: u8) {
        let window = self.buf.reserve(2);
        window[0] = tag as u8;
        window[1] = value;
        self.buf.commit(2);
    }

    pub(crate) fn store_u16(&mut self, tag: Typecode, value: u16) {
        let window = self.buf.reserve(3);
        window[0] = tag as u8;
        BigEndian::write_u16(&mut window[1..], value);
        self.buf.commit(3);
    }

    pub(crate) fn store_u32(&mut self, tag: Typecode, value: u32) {
        let window = self.buf.reserve(5);
        window[0] = tag as u8;
        BigEndian::write_u32(&mut window[1..], value);
        self.buf.commit(5);
    }

    pub(crate) fn store_u64(&mut self, tag: Typecode, value: u64) {
        let window = self.buf.reserve(9);
        window[0] = tag as u8;
        BigEndian::write_u64(&mut window[1..], value);
        self.buf.commit(9);
    }
}

/// Scalar integer encoders.
///
/// Each width first tries the next narrower encoder and only falls back to its own
/// fixed-width form when the value does not fit, so the output always uses the smallest
/// typecode that represents the value exactly.
impl Encoder {
    pub fn encode_u8(&mut self, value: u8) {
        trace!(value, "encode_u8");
        if value <= POSITIVE_FIXINT_MAX {
            self.store_typecode(value);
        } else {
            self.store_u8(Typecode::Uint8, value);
        }
    }

    pub fn encode_u16(&mut self, value: u16) {
        trace!(value, "encode_u16");
        match u8::try_from(value) {
            Ok(narrow) => self.encode_u8(narrow),
            Err(_) => self.store_u16(Typecode::Uint16, value),
        }
    }

    pub fn encode_u32(&mut self, value: u32) {
        trace!(value, "encode_u32");
        match u16::try_from(value) {
            Ok(narrow) => self.encode_u16(narrow),
            Err(_) => self.store_u32(Typecode::Uint32, value),
        }
    }

    pub fn encode_u64(&mut self, value: u64) {
        trace!(value, "encode_u64");
        match u32::try_from(value) {
            Ok(narrow) => self.encode_u32(narrow),
            Err(_) => self.store_u64(Typecode::Uint64, value),
        }
    }

    pub fn encode_usize(&mut self, value: usize) {
        self.encode_u64(value as u64);
    }

    pub fn encode_i8(&mut self, value: i8) {
        trace!(value, "encode_i8");
        if value >= 0 {
            self.encode_u8(value as u8);
        } else if value >= NEGATIVE_FIXINT_MIN {
            let low_bits = value as u8 & NEGATIVE_FIXINT_MASK;
            self.store_typecode(Typecode::NegativeFixInt as u8 | low_bits);
        } else {
            self.store_u8(Typecode::Int8, value as u8);
        }
    }

    pub fn encode_i16(&mut self, value: i16) {
        trace!(value, "encode_i16");
        if value >= 0 {
            self.encode_u16(value as u16);
        } else if let Ok(narrow) = i8::try_from(value) {
            self.encode_i8(narrow);
        } else {
            self.store_u16(Typecode::Int16, value as u16);
        }
    }

    pub fn encode_i32(&mut self, value: i32) {
        trace!(value, "encode_i32");
        if value >= 0 {
            self.encode_u32(value as u32);
        } else if let Ok(narrow) = i16::try_from(value) {
            self.encode_i16(narrow);
        } else {
            self.store_u32(Typecode::Int32, value as u32);
        }
    }

    pub fn encode_i64(&mut self, value: i64) {
        trace!(value, "encode_i64");
        if value >= 0 {
            self.encode_u64(value as u64);
        } else if let Ok(narrow) = i32::try_from(value) {
            self.encode_i32(narrow);
        } else {
            self.store_u64(Typecode::Int64, value as u64);
        }
    }

    pub fn encode_isize(&mut self, value: isize) {
        self.encode_i64(value as i64);
    }
}
