//! packwire: a streaming encoder for a compact, self-describing MessagePack-style
//! binary format.
//!
//! Integers are written with the narrowest typecode that holds them exactly, and arrays
//! are framed by an element count. Output accumulates in a growable buffer owned by the
//! [`Encoder`].
//!
//! ```
//! use packwire::{Encoder, Value};
//!
//! let mut enc = Encoder::new();
//! enc.encode(&vec![1i64, 2, 3]).unwrap();
//! enc.encode_value(&Value::I32(-33)).unwrap();
//! assert_eq!(enc.snapshot(), &[0x93, 0x01, 0x02, 0x03, 0xd0, 0xdf]);
//! ```

pub mod codec;
pub mod internal;

pub use codec::buffer::GrowableBuffer;
pub use codec::config::EncoderConfig;
pub use codec::encode::{Checkpoint, Encoder};
pub use codec::types::{Typecode, Value, ValueKind};
pub use codec::Encode;
pub use internal::error::{Error, Result};
