use crate::display::{write_bracketed, write_line};
use crate::width::{Element, ElementWidth};
use crate::{Error, Result};
use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Display};
use std::io;
use std::ptr::NonNull;
use std::slice;

/// A growable array of one unsigned integer width.
///
/// Storage is a single allocation of `capacity * elem_size()` bytes, resized
/// through the global allocator's `realloc` rather than by copying elements.
/// Capacity grows 0 → 4 → 16 → 32 → 64 and so on, and only shrinks through
/// an explicit [`Vector::realloc`].
#[repr(C)]
pub struct Vector<T: Element> {
    ptr: NonNull<T>,
    length: usize,
    capacity: usize,
}
impl<T: Element> Vector<T> {
    pub fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            length: 0,
            capacity: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut vector = Self::new();
        vector.realloc(capacity)?;

        Ok(vector)
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn element_width(&self) -> ElementWidth {
        T::WIDTH
    }

    pub fn elem_size(&self) -> usize {
        T::WIDTH.size()
    }

    /// Appends `value`, growing first whenever the new length reaches the capacity.
    pub fn push(&mut self, value: T) -> Result<()> {
        let length = self.length + 1;
        if length >= self.capacity {
            self.grow()?;
        }

        unsafe { self.ptr.as_ptr().add(length - 1).write(value) };
        self.length = length;

        Ok(())
    }

    pub fn get_ref(&self, index: usize) -> Result<&T> {
        let length = self.length;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfBounds { index, length })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let length = self.length;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfBounds { index, length })
    }

    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.length) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.length) }
    }

    /// Live elements as raw bytes in native byte order.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            slice::from_raw_parts(
                self.ptr.as_ptr().cast::<u8>(),
                self.length * T::WIDTH.size(),
            )
        }
    }

    pub fn grow(&mut self) -> Result<()> {
        let target_capacity = match self.capacity {
            0 => 4,
            4 => 16,
            capacity => capacity
                .checked_mul(2)
                .ok_or_else(|| Self::allocation_failure(capacity as u128 * 2))?,
        };

        self.realloc(target_capacity)
    }

    /// Resizes storage to exactly `capacity` elements. Elements past the new
    /// capacity are discarded and the length is truncated to match.
    pub fn realloc(&mut self, capacity: usize) -> Result<()> {
        let old_capacity = self.capacity;
        let new_layout = Self::layout(capacity)?;

        if capacity == 0 {
            self.release();
        } else {
            let ptr = if old_capacity == 0 {
                unsafe { alloc::alloc(new_layout) }
            } else {
                let old_layout = Self::layout(old_capacity)?;
                unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
            };

            self.ptr = match NonNull::new(ptr.cast::<T>()) {
                Some(ptr) => ptr,
                None => alloc::handle_alloc_error(new_layout),
            };
        }

        log::trace!(
            "Vector<{}> reallocated: capacity {old_capacity} -> {capacity}",
            T::WIDTH
        );

        self.capacity = capacity;
        self.length = self.length.min(capacity);

        Ok(())
    }

    /// Frees the storage. The vector is left empty and can be reused.
    pub fn destroy(&mut self) {
        log::debug!(
            "Destroying Vector<{}> (length: {}, capacity: {})",
            T::WIDTH,
            self.length,
            self.capacity
        );

        self.release();
        self.length = 0;
    }

    pub fn display(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    /// Same output as [`Vector::display`], into any writer.
    pub fn write_to(&self, writer: &mut impl io::Write) -> io::Result<()> {
        write_line(writer, self)
    }

    fn release(&mut self) {
        if self.capacity != 0 {
            if let Ok(layout) = Self::layout(self.capacity) {
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }

        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }

    fn layout(capacity: usize) -> Result<Layout> {
        Layout::array::<T>(capacity)
            .map_err(|_| Self::allocation_failure(capacity as u128))
    }

    fn allocation_failure(capacity: u128) -> Error {
        Error::AllocationFailure {
            bytes: capacity * T::WIDTH.size() as u128,
        }
    }
}
impl<T: Element> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Element> Drop for Vector<T> {
    fn drop(&mut self) {
        self.release();
    }
}
impl<T: Element> Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
impl<T: Element> Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.as_slice().iter().copied())
    }
}
