// Codec module for the MessagePack-style wire format

pub mod buffer;
pub mod config;
pub mod encode;
pub mod types;

use crate::codec::encode::Encoder;
use crate::codec::types::{Value, ValueKind};
use crate::internal::error::{Error, Result};

/// Types that know how to write themselves into an [`Encoder`].
pub trait Encode {
    fn encode(&self, enc: &mut Encoder) -> Result<()>;
}

macro_rules! impl_encode_scalar {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, enc: &mut Encoder) -> Result<()> {
                    enc.$method(*self);
                    Ok(())
                }
            }
        )*
    };
}

impl_encode_scalar! {
    u8 => encode_u8,
    u16 => encode_u16,
    u32 => encode_u32,
    u64 => encode_u64,
    usize => encode_usize,
    i8 => encode_i8,
    i16 => encode_i16,
    i32 => encode_i32,
    i64 => encode_i64,
    isize => encode_isize,
}

impl Encode for Value {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_value(self)
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_array(self)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_array(self.as_slice())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_array(self.as_slice())
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        (**self).encode(enc)
    }
}

// Nil has no encoder, so `None` is rejected like any other unsupported kind.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        match self {
            Some(value) => value.encode(enc),
            None => Err(Error::UnsupportedType(ValueKind::Nil)),
        }
    }
}
