use std::fmt;

/// Leading byte of every encoded value.
///
/// The fixint and fixarray families carry their payload inside the tag itself, so they
/// are exposed as ranges/masks rather than single variants.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Typecode {
    FixArray = 0x90,
    Uint8 = 0xcc,
    Uint16 = 0xcd,
    Uint32 = 0xce,
    Uint64 = 0xcf,
    Int8 = 0xd0,
    Int16 = 0xd1,
    Int32 = 0xd2,
    Int64 = 0xd3,
    Array16 = 0xdc,
    Array32 = 0xdd,
    NegativeFixInt = 0xe0,
}

/// Largest value stored as a positive fixint.
pub const POSITIVE_FIXINT_MAX: u8 = 0x7f;
/// Smallest value stored as a negative fixint.
pub const NEGATIVE_FIXINT_MIN: i8 = -0x20;
/// Low-bit mask of a negative fixint tag.
pub const NEGATIVE_FIXINT_MASK: u8 = 0x1f;
/// Largest element count embedded in a fixarray tag.
pub const FIXARRAY_MAX: usize = 0x0e;

impl Typecode {
    /// Number of payload bytes that follow the tag.
    ///
    /// Fixint and fixarray tags carry no separate payload.
    pub fn payload_width(self) -> usize {
        match self {
            Typecode::FixArray | Typecode::NegativeFixInt => 0,
            Typecode::Uint8 | Typecode::Int8 => 1,
            Typecode::Uint16 | Typecode::Int16 | Typecode::Array16 => 2,
            Typecode::Uint32 | Typecode::Int32 | Typecode::Array32 => 4,
            Typecode::Uint64 | Typecode::Int64 => 8,
        }
    }

    /// Classifies a leading byte.
    ///
    /// Returns `None` for positive fixints and for tags this encoder never emits.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x90..=0x9f => Some(Typecode::FixArray),
            0xcc => Some(Typecode::Uint8),
            0xcd => Some(Typecode::Uint16),
            0xce => Some(Typecode::Uint32),
            0xcf => Some(Typecode::Uint64),
            0xd0 => Some(Typecode::Int8),
            0xd1 => Some(Typecode::Int16),
            0xd2 => Some(Typecode::Int32),
            0xd3 => Some(Typecode::Int64),
            0xdc => Some(Typecode::Array16),
            0xdd => Some(Typecode::Array32),
            0xe0..=0xff => Some(Typecode::NegativeFixInt),
            _ => None,
        }
    }
}

/// A value whose concrete type is only known at runtime.
///
/// Only the integer and array variants are encodable; the rest exist so that callers can
/// hand heterogeneous data to the encoder and get an explicit rejection back.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Array(Vec<Value>),
    Nil,
    Bool(bool),
    F32(f32),
    F64(f64),
    Str(String),
    Bin(Vec<u8>),
    Map(Vec<(Value, Value)>),
}

/// Discriminant of a [`Value`], used to report unencodable input.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ValueKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    Array,
    Nil,
    Bool,
    F32,
    F64,
    Str,
    Bin,
    Map,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::I8 => "i8",
            ValueKind::I16 => "i16",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::Array => "array",
            ValueKind::Nil => "nil",
            ValueKind::Bool => "bool",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::Str => "str",
            ValueKind::Bin => "bin",
            ValueKind::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the corresponding ValueKind for the Value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::U8(_) => ValueKind::U8,
            Value::U16(_) => ValueKind::U16,
            Value::U32(_) => ValueKind::U32,
            Value::U64(_) => ValueKind::U64,
            Value::I8(_) => ValueKind::I8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::Array(_) => ValueKind::Array,
            Value::Nil => ValueKind::Nil,
            Value::Bool(_) => ValueKind::Bool,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Str(_) => ValueKind::Str,
            Value::Bin(_) => ValueKind::Bin,
            Value::Map(_) => ValueKind::Map,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    bool => Bool,
    f32 => F32,
    f64 => F64,
    String => Str,
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::U64(v as u64)
    }
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::I64(v as i64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}
