//! The growable vector container.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use growvec_buffer::OwnedBuffer;

use crate::{Error, Result};

/// A dynamically resizable sequence of `T`, backed by a single exclusively
/// owned [`OwnedBuffer`].
///
/// The vector tracks a logical size on top of the buffer's allocated length:
/// slots `[0, len)` are the live elements, slots `[len, capacity)` are
/// allocated but logically absent. Since the buffer keeps every slot
/// initialized, capacity always equals the real allocated block length and
/// the spare slots hold valid (default or stale) values until overwritten.
///
/// Growth-related operations (`push`, `insert`, `resize`, `reserve`) require
/// `T: Default`, which is how spare slots get their placeholder values and
/// how elements are moved between blocks without cloning.
pub struct GrowVec<T> {
    buf: OwnedBuffer<T>,
    len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty vector with no allocated storage.
    pub fn new() -> GrowVec<T> {
        GrowVec {
            buf: OwnedBuffer::new(),
            len: 0,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots backing the vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the vector holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf.as_mut_slice()[..self.len]
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`, or
    /// [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        if index < self.len {
            Ok(&self.buf[index])
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.len,
            })
        }
    }

    /// Returns a mutable reference to the element at `index`, or
    /// [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index < self.len {
            Ok(&mut self.buf[index])
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.len,
            })
        }
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](GrowVec::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { self.buf.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](GrowVec::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        unsafe { self.buf.get_unchecked_mut(index) }
    }

    /// Resets the logical size to zero.
    ///
    /// Capacity and allocated storage are untouched; the old values stay in
    /// their slots until overwritten or freed.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks the logical size to `new_len` if it is currently larger.
    ///
    /// Nothing is deallocated and no element is destroyed eagerly.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Logically removes the last element. No-op on an empty vector.
    ///
    /// The vacated slot keeps its value until overwritten or the storage is
    /// freed.
    pub fn pop(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }

    /// Exchanges contents with `other` in O(1): buffers and sizes swap,
    /// no element is moved.
    pub fn swap_with(&mut self, other: &mut GrowVec<T>) {
        mem::swap(self, other);
    }
}

impl<T: Default> GrowVec<T> {
    /// Creates a vector of `len` default-valued elements, with
    /// `len() == capacity() == len`.
    pub fn with_len(len: usize) -> GrowVec<T> {
        GrowVec {
            buf: OwnedBuffer::allocate(len),
            len,
        }
    }

    /// Creates an empty vector with exactly `capacity` pre-allocated slots.
    pub fn with_capacity(capacity: usize) -> GrowVec<T> {
        GrowVec {
            buf: OwnedBuffer::allocate(capacity),
            len: 0,
        }
    }

    /// Ensures the vector has at least `new_cap` allocated slots.
    ///
    /// When `new_cap` exceeds the current capacity, a block of exactly
    /// `new_cap` slots is allocated and the live elements are moved into it;
    /// otherwise this is a no-op. The logical size never changes.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.capacity() {
            self.regrow(new_cap);
        }
    }

    /// Changes the logical size to `new_size`.
    ///
    /// Shrinking only lowers the size. Growing within capacity overwrites the
    /// newly exposed slots with `T::default()`. Growing beyond capacity
    /// allocates a block of exactly `new_size` slots, moves the live elements
    /// across, and adopts it; capacity becomes exactly `new_size`.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.len {
            self.len = new_size;
            return;
        }
        if new_size <= self.capacity() {
            for slot in &mut self.buf.as_mut_slice()[self.len..new_size] {
                *slot = T::default();
            }
        } else {
            self.regrow(new_size);
        }
        self.len = new_size;
    }

    /// Appends `value` at the end of the vector.
    ///
    /// When the vector is full, capacity doubles first (a capacity of 0 grows
    /// to 1), so repeated pushes produce the capacity sequence 0, 1, 2, 4, 8…
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.regrow(self.grown_capacity());
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Inserts `value` at position `index`, shifting the elements at
    /// `[index, len)` one slot to the right. `index == len()` appends.
    ///
    /// When capacity suffices the shift happens in place; when the vector is
    /// full a doubled block is built with the new element already in position
    /// and swapped in. Either way the relative order of the elements before
    /// and after `index` is preserved.
    ///
    /// Returns a reference to the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        assert!(
            index <= self.len,
            "insertion index {index} out of range for vector of size {}",
            self.len
        );
        if self.len < self.capacity() {
            let slots = self.buf.as_mut_slice();
            for i in (index..self.len).rev() {
                slots[i + 1] = mem::take(&mut slots[i]);
            }
            slots[index] = value;
        } else {
            let mut block = OwnedBuffer::allocate(self.grown_capacity());
            let dst = block.as_mut_slice();
            let src = self.buf.as_mut_slice();
            for i in 0..index {
                dst[i] = mem::take(&mut src[i]);
            }
            dst[index] = value;
            for i in index..self.len {
                dst[i + 1] = mem::take(&mut src[i]);
            }
            self.buf.swap(&mut block);
        }
        self.len += 1;
        &mut self.buf[index]
    }

    /// Removes and returns the element at position `index`, shifting the
    /// elements at `[index + 1, len)` one slot to the left.
    ///
    /// After the call, `index` holds the removed element's former successor
    /// (or equals the new `len()` when the last element was removed).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index {index} out of range for vector of size {}",
            self.len
        );
        let slots = self.buf.as_mut_slice();
        let removed = mem::take(&mut slots[index]);
        for i in index + 1..self.len {
            slots[i - 1] = mem::take(&mut slots[i]);
        }
        self.len -= 1;
        removed
    }

    /// Allocates a block of exactly `new_cap` slots, moves the live elements
    /// into it, and swaps it in as the new backing buffer.
    fn regrow(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let mut block = OwnedBuffer::allocate(new_cap);
        let dst = block.as_mut_slice();
        let src = self.buf.as_mut_slice();
        for i in 0..self.len {
            dst[i] = mem::take(&mut src[i]);
        }
        self.buf.swap(&mut block);
    }

    /// Next capacity for a full vector: doubling, seeded at 1.
    fn grown_capacity(&self) -> usize {
        if self.capacity() == 0 {
            1
        } else {
            self.capacity() * 2
        }
    }
}

impl<T: Clone> GrowVec<T> {
    /// Creates a vector of `len` clones of `value`, with
    /// `len() == capacity() == len`.
    pub fn from_elem(len: usize, value: T) -> GrowVec<T> {
        GrowVec::from(vec![value; len])
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> GrowVec<T> {
        GrowVec::new()
    }
}

impl<T: Clone + Default> Clone for GrowVec<T> {
    /// Deep copy, independent of the source. The source's capacity is
    /// preserved as well as its contents.
    fn clone(&self) -> GrowVec<T> {
        let mut buf = OwnedBuffer::allocate(self.capacity());
        buf.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        GrowVec { buf, len: self.len }
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    fn from(vec: Vec<T>) -> GrowVec<T> {
        let len = vec.len();
        GrowVec {
            buf: OwnedBuffer::from(vec),
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(values: [T; N]) -> GrowVec<T> {
        GrowVec {
            buf: OwnedBuffer::from_block(Box::from(values)),
            len: N,
        }
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(values: &[T]) -> GrowVec<T> {
        GrowVec::from(values.to_vec())
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> GrowVec<T> {
        GrowVec::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the vector, yielding the live elements by value. The spare
    /// slots beyond the logical size are dropped here.
    fn into_iter(self) -> Self::IntoIter {
        let GrowVec { buf, len } = self;
        let mut vec = buf.into_block().into_vec();
        vec.truncate(len);
        vec.into_iter()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &GrowVec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    /// Lexicographic over the live ranges: pairwise element ordering decides
    /// first, length breaks ties only when one sequence is a prefix of the
    /// other.
    fn partial_cmp(&self, other: &GrowVec<T>) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &GrowVec<T>) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GrowVec").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A move-only element type: `Default` but deliberately not `Clone`.
    #[derive(Debug, Default, PartialEq)]
    struct Token(Option<Box<u32>>);

    fn token(value: u32) -> Token {
        Token(Some(Box::new(value)))
    }

    #[test]
    fn new_vector_is_empty() {
        let v = GrowVec::<u32>::new();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn with_len_fills_with_defaults() {
        for n in [0, 1, 5, 64] {
            let v = GrowVec::<u32>::with_len(n);
            assert_eq!(v.len(), n);
            assert_eq!(v.capacity(), n);
            assert!(v.iter().all(|&x| x == 0));
        }
    }

    #[test]
    fn from_elem_fills_with_value() {
        let v = GrowVec::from_elem(4, 7u32);
        assert_eq!(v.as_slice(), &[7, 7, 7, 7]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn with_capacity_preallocates() {
        let v = GrowVec::<u32>::with_capacity(8);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 8);
        assert!(v.is_empty());
    }

    #[test]
    fn from_array_matches_initializer_list() {
        let v = GrowVec::from([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn push_doubles_capacity_from_one() {
        let mut v = GrowVec::new();
        assert_eq!((v.len(), v.capacity()), (0, 0));
        v.push(1u32);
        assert_eq!((v.len(), v.capacity()), (1, 1));
        v.push(2);
        assert_eq!((v.len(), v.capacity()), (2, 2));
        v.push(3);
        assert_eq!((v.len(), v.capacity()), (3, 4));
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        let mut expected_cap = 4;
        for i in 3..100u32 {
            v.push(i + 1);
            if i as usize == expected_cap {
                expected_cap *= 2;
            }
            assert_eq!(v.len(), i as usize + 1);
            assert_eq!(v.capacity(), expected_cap);
        }
        for (i, &x) in v.iter().enumerate() {
            assert_eq!(x, i as u32 + 1);
        }
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut v = GrowVec::<u32>::new();
        v.pop();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);

        v.push(1);
        v.pop();
        v.pop();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn checked_access_boundaries() {
        let mut v = GrowVec::from([10u32, 20]);
        assert_eq!(v.at(1), Ok(&20));
        assert_eq!(
            v.at(2),
            Err(Error::IndexOutOfRange { index: 2, size: 2 })
        );
        *v.at_mut(0).unwrap() = 11;
        assert_eq!(v[0], 11);

        let empty = GrowVec::<u32>::new();
        assert!(empty.at(0).is_err());
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let v = GrowVec::from([1u32]);
        let _ = v[1];
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut v = GrowVec::from([1u32, 2, 3]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn truncate_only_shrinks() {
        let mut v = GrowVec::from([1u32, 2, 3]);
        v.truncate(5);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.truncate(1);
        assert_eq!(v.as_slice(), &[1]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn resize_shrinks_and_grows() {
        let mut v = GrowVec::from([1u32, 2, 3, 4]);
        v.resize(2);
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 4);

        // Regrowth within capacity default-fills the exposed slots.
        v.resize(4);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0]);
        assert_eq!(v.capacity(), 4);

        // Growth beyond capacity allocates exactly the requested size.
        v.resize(7);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0, 0, 0, 0]);
        assert_eq!(v.capacity(), 7);
    }

    #[test]
    fn reserve_reallocates_and_preserves_contents() {
        let mut v = GrowVec::from([1u32, 2, 3]);
        v.reserve(10);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        // No-op when capacity already suffices.
        v.reserve(4);
        assert_eq!(v.capacity(), 10);

        let mut empty = GrowVec::<u32>::new();
        empty.reserve(5);
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.capacity(), 5);
    }

    #[test]
    fn insert_in_middle() {
        let mut v = GrowVec::from([1u32, 2, 3, 4]);
        let inserted = v.insert(1, 9);
        assert_eq!(*inserted, 9);
        assert_eq!(v.as_slice(), &[1, 9, 2, 3, 4]);
    }

    #[test]
    fn insert_at_ends_and_growth() {
        let mut v = GrowVec::<u32>::new();
        v.insert(0, 2);
        assert_eq!((v.len(), v.capacity()), (1, 1));
        v.insert(0, 1);
        assert_eq!((v.len(), v.capacity()), (2, 2));
        v.insert(2, 3);
        assert_eq!((v.len(), v.capacity()), (3, 4));
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        // Room left: the in-place path.
        v.insert(1, 5);
        assert_eq!(v.as_slice(), &[1, 5, 2, 3]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn insert_past_end_panics() {
        let mut v = GrowVec::from([1u32]);
        v.insert(2, 9);
    }

    #[test]
    fn remove_shifts_successors_left() {
        let mut v = GrowVec::from([1u32, 2, 3]);
        let removed = v.remove(1);
        assert_eq!(removed, 2);
        assert_eq!(v.as_slice(), &[1, 3]);
        assert_eq!(v[1], 3);

        let removed = v.remove(1);
        assert_eq!(removed, 3);
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn remove_past_end_panics() {
        let mut v = GrowVec::from([1u32]);
        v.remove(1);
    }

    #[test]
    fn remove_undoes_insert() {
        let original = [3u32, 1, 4, 1, 5, 9];
        for pos in 0..=original.len() {
            let mut v = GrowVec::from(original);
            v.insert(pos, 77);
            assert_eq!(v.remove(pos), 77);
            assert_eq!(v.as_slice(), &original);
        }
    }

    #[test]
    fn clone_is_deep_and_preserves_capacity() {
        let mut a = GrowVec::<u32>::with_capacity(8);
        a.extend([1, 2, 3]);
        let b = a.clone();
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.capacity(), a.capacity());

        a.push(4);
        a[0] = 100;
        assert_eq!(b.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a = GrowVec::from([1u32, 2]);
        let mut b = GrowVec::<u32>::with_capacity(9);
        b.push(7);
        a.swap_with(&mut b);
        assert_eq!(a.as_slice(), &[7]);
        assert_eq!(a.capacity(), 9);
        assert_eq!(b.as_slice(), &[1, 2]);
        assert_eq!(b.capacity(), 2);
    }

    #[test]
    fn comparisons_are_lexicographic() {
        let a = GrowVec::from([1u32, 2]);
        let b = GrowVec::from([1u32, 2, 3]);
        let c = GrowVec::from([1u32, 3]);
        let d = GrowVec::from([1u32, 2, 9]);
        let e = GrowVec::from([1u32, 2]);

        assert!(a < b);
        assert!(c > d);
        assert!(a == e);
        assert!(a != b);
        assert!(a <= e);
        assert!(b >= a);
        // Element ordering decides before length does.
        assert!(c > b);
    }

    #[test]
    fn iteration_spans_live_range_only() {
        let mut v = GrowVec::<u32>::with_capacity(10);
        v.extend([5, 6, 7]);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7]);

        for x in &mut v {
            *x += 1;
        }
        assert_eq!(v.as_slice(), &[6, 7, 8]);

        let collected: Vec<u32> = v.into_iter().collect();
        assert_eq!(collected, vec![6, 7, 8]);
    }

    #[test]
    fn from_iterator_collects() {
        let v: GrowVec<u32> = (1..=4).collect();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn move_only_elements_full_workout() {
        let mut v = GrowVec::<Token>::new();
        v.push(token(1));
        v.push(token(3));
        v.insert(1, token(2));
        assert_eq!(v.as_slice(), &[token(1), token(2), token(3)]);

        let removed = v.remove(0);
        assert_eq!(removed, token(1));
        assert_eq!(v.as_slice(), &[token(2), token(3)]);

        v.resize(5);
        assert_eq!(v.len(), 5);
        assert_eq!(v[4], Token(None));

        v.reserve(12);
        assert_eq!(v.capacity(), 12);
        assert_eq!(v[0], token(2));

        let moved = v;
        assert_eq!(moved.len(), 5);
    }

    #[test]
    fn randomized_workload_matches_std_vec() {
        fastrand::seed(8837561294);
        let mut v = GrowVec::<u32>::new();
        let mut model = Vec::<u32>::new();

        for _ in 0..2000 {
            match fastrand::u32(..6) {
                0 | 1 => {
                    let x = fastrand::u32(..1000);
                    v.push(x);
                    model.push(x);
                }
                2 => {
                    v.pop();
                    model.pop();
                }
                3 => {
                    let i = fastrand::usize(..=model.len());
                    let x = fastrand::u32(..1000);
                    v.insert(i, x);
                    model.insert(i, x);
                }
                4 => {
                    if !model.is_empty() {
                        let i = fastrand::usize(..model.len());
                        assert_eq!(v.remove(i), model.remove(i));
                    }
                }
                _ => {
                    let n = fastrand::usize(..=model.len() + 8);
                    v.resize(n);
                    model.resize(n, 0);
                }
            }
            assert_eq!(v.as_slice(), model.as_slice());
            assert!(v.len() <= v.capacity());
        }
    }
}
