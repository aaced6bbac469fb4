// SPDX-License-Identifier: Apache-2.0

use alloc::vec::{Drain, Vec};

/// A growable LIFO arena with an explicit cursor.
///
/// One instance is shared by every nested call of a single parse. Data is
/// pushed at the top and read back by popping the same amount, so every
/// subtree's pushes are consumed before the parent rule continues:
/// - `push(n)` hands out `n` slots at the top, growing capacity by 1.5x
///   (starting from the initial size) whenever `top + n` would reach it
/// - `pop(n)` rewinds the cursor and yields the exposed slots in push order;
///   collecting the drain commits them, dropping it discards them
///
/// A non-zero `top()` after a full parse means an unpaired push.
#[derive(Debug)]
pub struct ScratchStack<T> {
    /// Backing storage; `buffer.len()` is always equal to `top`
    buffer: Vec<T>,
    /// Logical capacity, grown geometrically
    size: usize,
    /// Capacity used for the first allocation
    initial_size: usize,
}

impl<T: Default> ScratchStack<T> {
    /// Create an empty stack. Nothing is allocated until the first push.
    pub fn new(initial_size: usize) -> Self {
        Self {
            buffer: Vec::new(),
            size: 0,
            initial_size: initial_size.max(1),
        }
    }

    /// Current cursor position
    pub fn top(&self) -> usize {
        self.buffer.len()
    }

    /// Current logical capacity (0 before the first push)
    #[cfg(test)]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Reserve `n` slots at the top and return them for writing.
    ///
    /// The returned slots hold `T::default()` until written.
    pub fn push(&mut self, n: usize) -> &mut [T] {
        debug_assert!(n > 0, "push of zero slots");
        let top = self.top();
        let needed = top.saturating_add(n);
        if needed >= self.size {
            let old_size = self.size;
            if self.size == 0 {
                self.size = self.initial_size;
            }
            while needed >= self.size {
                self.size = self.size.saturating_add((self.size >> 1).max(1));
            }
            self.buffer.reserve_exact(self.size.saturating_sub(top));
            log::trace!("scratch stack grown from {} to {} slots", old_size, self.size);
        }
        self.buffer.resize_with(needed, T::default);
        &mut self.buffer[top..]
    }

    /// Push a single item at the top.
    pub fn push_one(&mut self, item: T) {
        if let Some(slot) = self.push(1).first_mut() {
            *slot = item;
        }
    }

    /// Rewind the cursor by `n` and yield the exposed slots in push order.
    pub fn pop(&mut self, n: usize) -> Drain<'_, T> {
        debug_assert!(self.top() >= n, "pop of {} slots with top {}", n, self.top());
        let start = self.top().saturating_sub(n);
        self.buffer.drain(start..)
    }

    /// Rewind the cursor to `mark`, dropping everything pushed since.
    pub fn rewind_to(&mut self, mark: usize) {
        debug_assert!(mark <= self.top(), "rewind past the cursor");
        self.buffer.truncate(mark);
    }
}
