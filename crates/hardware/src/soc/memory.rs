//! Main Memory.
//!
//! This module implements the LS-8 main memory. It provides:
//! 1. **Storage:** A flat, zero-filled array of 256 byte cells.
//! 2. **Bounds Checking:** Every access outside `[0, 256)` is a `MemoryError::OutOfBounds`.
//! 3. **Bulk Loading:** Copying a program image into memory at a given offset.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::MemoryError;

/// LS-8 random-access memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Ram {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Returns the number of addressable cells.
    #[inline]
    pub const fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Always `false`; LS-8 memory has a fixed, non-zero size.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfBounds` if `addr >= 256`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, MemoryError> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(MemoryError::OutOfBounds(addr))
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfBounds` if `addr >= 256`.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), MemoryError> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(MemoryError::OutOfBounds(addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// Nothing is written unless the whole image fits.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfBounds` naming the first address that does not fit.
    pub fn load(&mut self, offset: usize, data: &[u8]) -> Result<(), MemoryError> {
        let end = offset.saturating_add(data.len());
        if end > MEMORY_SIZE {
            return Err(MemoryError::OutOfBounds(offset.max(MEMORY_SIZE)));
        }
        self.cells[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Returns the whole memory as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}
