//======================================================================
// src/sparse.rs
// Fisher-Yates over a virtual identity array. Only slots that differ
// from the identity are stored; everything else is implied.
//======================================================================

use std::collections::BTreeMap;

use rand::Rng;

/// Incremental Fisher-Yates shuffle of `[0, n)` with sparse storage.
///
/// Each call to [`next`](Iterator::next) performs one shuffle step:
/// draw `j` uniformly from `[cursor, n)`, emit the value living at `j`,
/// and move the value from `cursor` into `j`. The virtual array starts
/// as the identity, so the value at any untouched slot is its own
/// index; `displaced` records only the slots that differ.
///
/// Two facts keep the map small. Slots at indices at or below the
/// cursor can never be drawn again, so they are dropped as soon as the
/// cursor passes them. And each step adds at most one entry, so the
/// map never holds more entries than steps taken. Taking `k` values
/// out of an `n`-sized domain costs `O(k)` memory regardless of `n`.
#[derive(Debug, Clone)]
pub struct SparseShuffle<R> {
    n: u64,
    cursor: u64,
    displaced: BTreeMap<u64, u64>,
    rng: R,
}

impl<R: Rng> SparseShuffle<R> {
    /// Shuffle `[0, n)`, consuming values from `rng` one step at a time.
    ///
    /// `n == 0` yields an empty iterator.
    pub fn new(n: u64, rng: R) -> Self {
        Self { n, cursor: 0, displaced: BTreeMap::new(), rng }
    }

    /// The domain size.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Values not yet emitted.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.n - self.cursor
    }

    /// Number of slots currently diverging from the identity.
    ///
    /// Bounded by the number of steps taken; drops back to zero once
    /// the shuffle completes.
    #[inline]
    pub fn tracked_len(&self) -> usize {
        self.displaced.len()
    }

    /// One shuffle step with the draw `j` supplied by the caller.
    ///
    /// Emits the value at `j`, moves the cursor's value into `j`, then
    /// retires the slot the cursor is leaving behind. All map keys are
    /// at least `cursor` on entry, so the cursor's own value is either
    /// the front entry or the identity.
    pub(crate) fn swap_out(&mut self, j: u64) -> u64 {
        debug_assert!(self.cursor <= j && j < self.n);
        let i = self.cursor;

        let value_at_i = match self.displaced.first_key_value() {
            Some((&k, &v)) if k == i => v,
            _ => i,
        };

        let out = match self.displaced.get_mut(&j) {
            Some(slot) => std::mem::replace(slot, value_at_i),
            None => {
                self.displaced.insert(j, value_at_i);
                j
            }
        };

        // Slot i is now behind the cursor; if it is tracked, it is the
        // front entry. Drop it.
        if let Some((&k, _)) = self.displaced.first_key_value() {
            if k <= i {
                self.displaced.pop_first();
            }
        }

        self.cursor = i + 1;
        out
    }

    // The final step has a one-value range, so no draw is needed: the
    // only slot left is n-1, holding either its tracked value or itself.
    fn final_value(&mut self) -> u64 {
        let out = self.displaced.pop_first().map_or(self.n - 1, |(_, v)| v);
        self.cursor += 1;
        out
    }
}

impl<R: Rng> Iterator for SparseShuffle<R> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.cursor >= self.n {
            return None;
        }
        if self.cursor == self.n - 1 {
            return Some(self.final_value());
        }
        let j = self.rng.gen_range(self.cursor..self.n);
        Some(self.swap_out(j))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Run a full shuffle of `[0, n)`, handing each value to `visit` in
/// shuffled order.
pub fn lazy_fisher_yates<R: Rng, C: FnMut(u64)>(n: u64, rng: R, mut visit: C) {
    for value in SparseShuffle::new(n, rng) {
        visit(value);
    }
}
