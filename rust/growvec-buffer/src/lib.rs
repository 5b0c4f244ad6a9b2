//! Exclusive ownership of a contiguous block of element slots.
//!
//! [`OwnedBuffer`] is the storage primitive beneath the `growvec` container:
//! it owns a fixed-length run of initialized `T` slots, knows nothing about
//! the container's logical size, and hands its block around only through
//! moves, [`swap`](OwnedBuffer::swap) and an explicit
//! [`release`](OwnedBuffer::release).

use std::fmt;
use std::ops::{Index, IndexMut};

/// A move-only owner of a contiguous, fixed-length block of `T` slots.
///
/// The empty state owns no allocation: a zero-length buffer never touches
/// the allocator, so `len() == 0` is equivalent to "no block owned".
///
/// The type deliberately implements neither `Clone` nor `Copy`. A block has
/// exactly one owner at any time; ownership changes hands only by moving the
/// buffer, swapping two buffers, or releasing the block to the caller.
///
/// Every slot of the block always holds a valid `T` value. Allocation
/// initializes each slot with `T::default()`, so dropping the buffer (or a
/// released block) is always well-defined, regardless of how many slots the
/// container above considers "live".
pub struct OwnedBuffer<T> {
    block: Box<[T]>,
}

impl<T> OwnedBuffer<T> {
    /// Creates an empty buffer that owns no block.
    pub fn new() -> OwnedBuffer<T> {
        OwnedBuffer {
            block: Box::default(),
        }
    }

    /// Allocates a block of exactly `len` slots, each initialized with
    /// `T::default()`.
    ///
    /// `len == 0` yields the empty (unowned) state without allocating.
    pub fn allocate(len: usize) -> OwnedBuffer<T>
    where
        T: Default,
    {
        OwnedBuffer {
            block: (0..len).map(|_| T::default()).collect(),
        }
    }

    /// Adopts an existing block without allocating.
    ///
    /// Adopting a zero-length block produces the empty state.
    pub fn from_block(block: Box<[T]>) -> OwnedBuffer<T> {
        OwnedBuffer { block }
    }

    /// Hands the owned block to the caller and resets this buffer to empty.
    ///
    /// No deallocation happens here; the caller becomes responsible for the
    /// block's lifetime. Releasing an empty buffer returns the empty block.
    pub fn release(&mut self) -> Box<[T]> {
        std::mem::take(&mut self.block)
    }

    /// Consumes the buffer, returning the owned block.
    pub fn into_block(self) -> Box<[T]> {
        self.block
    }

    /// Returns the number of allocated slots (0 when no block is owned).
    #[inline]
    pub fn len(&self) -> usize {
        self.block.len()
    }

    /// Returns `true` if the buffer owns no block.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    /// Returns a raw pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block.as_mut_ptr()
    }

    /// Returns the whole block as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.block
    }

    /// Returns the whole block as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.block
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](OwnedBuffer::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        unsafe { self.block.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](OwnedBuffer::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        unsafe { self.block.get_unchecked_mut(index) }
    }

    /// Exchanges the owned blocks of two buffers in O(1), without allocating
    /// or moving any elements.
    #[inline]
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        std::mem::swap(&mut self.block, &mut other.block);
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> OwnedBuffer<T> {
        OwnedBuffer::new()
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.block[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.block[index]
    }
}

impl<T> From<Box<[T]>> for OwnedBuffer<T> {
    fn from(block: Box<[T]>) -> OwnedBuffer<T> {
        OwnedBuffer::from_block(block)
    }
}

impl<T> From<Vec<T>> for OwnedBuffer<T> {
    fn from(vec: Vec<T>) -> OwnedBuffer<T> {
        OwnedBuffer::from_block(vec.into_boxed_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("len", &self.len())
            .field("slots", &self.as_slice())
            .finish()
    }
}
