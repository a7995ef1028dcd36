//! Scratch buffer pool for grid calculations.
//!
//! Track offsets and sizes are recomputed on every refresh. Buffers are
//! borrowed from a thread-local pool and handed back when the `ScratchBuf`
//! drops, so a calculation can't leak them on any exit path.

use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};

use crate::types::Coord;

/// Buffers kept for reuse. More are allocated on demand and dropped on
/// release once the pool is full.
const POOL_LIMIT: usize = 16;

thread_local! {
    static POOL: RefCell<Vec<Vec<Coord>>> = const { RefCell::new(Vec::new()) };
    static IN_USE: Cell<usize> = const { Cell::new(0) };
}

/// A zeroed `Coord` buffer on loan from the pool.
#[derive(Debug)]
pub struct ScratchBuf {
    buf: Vec<Coord>,
}

impl ScratchBuf {
    /// Borrow a buffer of `len` zeroes.
    pub fn acquire(len: usize) -> Self {
        let mut buf = POOL.with(|pool| pool.borrow_mut().pop()).unwrap_or_default();
        buf.clear();
        buf.resize(len, 0);
        IN_USE.with(|n| n.set(n.get() + 1));
        Self { buf }
    }
}

impl Deref for ScratchBuf {
    type Target = [Coord];

    fn deref(&self) -> &[Coord] {
        &self.buf
    }
}

impl DerefMut for ScratchBuf {
    fn deref_mut(&mut self) -> &mut [Coord] {
        &mut self.buf
    }
}

impl Drop for ScratchBuf {
    fn drop(&mut self) {
        IN_USE.with(|n| n.set(n.get().saturating_sub(1)));
        let buf = std::mem::take(&mut self.buf);
        // The pool may already be gone during thread teardown
        let _ = POOL.try_with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < POOL_LIMIT {
                pool.push(buf);
            }
        });
    }
}

/// Buffers currently on loan. Zero between refreshes.
pub fn scratch_in_use() -> usize {
    IN_USE.with(Cell::get)
}

/// Buffers waiting in the pool.
pub fn scratch_pooled() -> usize {
    POOL.with(|pool| pool.borrow().len())
}
