use tracing::trace;

use super::Encoder;
use crate::codec::types::{Typecode, Value, FIXARRAY_MAX};
use crate::codec::Encode;
use crate::internal::error::{Error, Result};

impl Encoder {
    /// Writes the header announcing `count` array elements.
    ///
    /// Counts above `u32::MAX` are rejected before anything is written.
    pub fn encode_array_header(&mut self, count: usize) -> Result<()> {
        trace!(count, "encode_array_header");
        if count <= FIXARRAY_MAX {
            self.store_typecode(Typecode::FixArray as u8 | count as u8);
        } else if let Ok(count) = u16::try_from(count) {
            self.store_u16(Typecode::Array16, count);
        } else if let Ok(count) = u32::try_from(count) {
            self.store_u32(Typecode::Array32, count);
        } else {
            return Err(Error::ArrayLengthOutOfRange(count));
        }
        Ok(())
    }

    /// Encodes a header followed by every element in order.
    pub fn encode_array<T: Encode>(&mut self, items: &[T]) -> Result<()> {
        self.encode_array_header(items.len())?;
        for item in items {
            item.encode(self)?;
        }
        Ok(())
    }

    /// Dispatches a runtime-typed value to the matching encoder.
    ///
    /// Kinds without an encoder fail with [`Error::UnsupportedType`] and write nothing
    /// for that value. Elements of an enclosing array that were already written stay
    /// in the buffer.
    pub fn encode_value(&mut self, value: &Value) -> Result<()> {
        trace!(kind = %value.kind(), "encode_value");
        match *value {
            Value::U8(v) => self.encode_u8(v),
            Value::U16(v) => self.encode_u16(v),
            Value::U32(v) => self.encode_u32(v),
            Value::U64(v) => self.encode_u64(v),
            Value::I8(v) => self.encode_i8(v),
            Value::I16(v) => self.encode_i16(v),
            Value::I32(v) => self.encode_i32(v),
            Value::I64(v) => self.encode_i64(v),
            Value::Array(ref items) => return self.encode_array(items.as_slice()),
            ref other => return Err(Error::UnsupportedType(other.kind())),
        }
        Ok(())
    }
}
