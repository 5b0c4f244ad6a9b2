//! A growable sequence container over an exclusively owned backing buffer.
//!
//! [`GrowVec`] tracks a logical size on top of an
//! [`OwnedBuffer`](growvec_buffer::OwnedBuffer) of allocated slots, and
//! implements the full construction, access and mutation surface of a
//! dynamic array: push/pop, insert/remove, resize/reserve, deep cloning and
//! lexicographic comparison.

pub mod error;
pub mod vector;

pub use error::Error;
pub use vector::GrowVec;

pub type Result<T> = std::result::Result<T, Error>;
