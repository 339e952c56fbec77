// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;

use crate::hash;
use crate::table::DEFAULT_CAPACITY;
use crate::table::EMPTY_SLOT_TOKEN;
use crate::table::LOAD_FACTOR;
use crate::table::TOMBSTONE_TOKEN;
use crate::table::builder::WordTableBuilder;
use crate::table::prime::next_prime;
use crate::table::slot::Entry;
use crate::table::slot::Slot;

/// Linear probe advance between consecutive slots.
const PROBING_STEP: usize = 1;

/// Open-addressing hash table of words and their occurrence counts.
///
/// Collisions are resolved by linear probing with step 1. Removed words leave
/// tombstones so probe chains stay connected, and inserts reclaim the first
/// open slot on their path once the word is known to be absent. When the live
/// count exceeds [`LOAD_FACTOR`] of the capacity, every entry is rehashed into
/// a table of at least twice the size, rounded up to a prime.
///
/// Keys are non-empty runs of ASCII letters. Anything else is not a key:
/// mutations ignore it and queries report absence.
#[derive(Debug, Clone)]
pub struct WordTable {
    slots: Vec<Slot>,
    num_live: usize,
    num_collisions: u64,
}

impl WordTable {
    /// Creates a table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table with `capacity` buckets.
    ///
    /// The capacity is used as given; only rehash capacities are rounded up
    /// to a prime.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            slots: vec![Slot::Empty; capacity],
            num_live: 0,
            num_collisions: 0,
        }
    }

    /// Returns a builder for configuring a table.
    pub fn builder() -> WordTableBuilder {
        WordTableBuilder::default()
    }

    /// Inserts one occurrence of `word`.
    ///
    /// A word already in the table has its frequency raised by one; a new
    /// word is stored with frequency 1 at the first open slot on its probe
    /// path. Invalid words are ignored. An insert that pushes the live count
    /// past the load limit grows the table before returning.
    pub fn insert(&mut self, word: &str) {
        if !is_valid_word(word) {
            return;
        }

        let entry = Entry::new(word.to_owned());
        if Self::place(&mut self.slots, entry, &mut self.num_collisions) {
            self.num_live += 1;
            if self.num_live > Self::load_limit(self.slots.len()) {
                self.grow();
            }
        }
    }

    /// Returns true if `word` is stored in the table.
    pub fn contains(&self, word: &str) -> bool {
        is_valid_word(word) && Self::find(&self.slots, word).is_some()
    }

    /// How many times `word` has been inserted, or 0 if it is absent.
    pub fn frequency(&self, word: &str) -> u64 {
        if !is_valid_word(word) {
            return 0;
        }
        Self::find(&self.slots, word)
            .and_then(|index| self.slots[index].entry())
            .map_or(0, Entry::frequency)
    }

    /// Removes `word` and returns its stored text.
    ///
    /// The slot is left as a tombstone so longer probe chains survive the
    /// removal. The table never shrinks.
    pub fn remove(&mut self, word: &str) -> Option<String> {
        if !is_valid_word(word) {
            return None;
        }

        let index = Self::find(&self.slots, word)?;
        let slot = std::mem::replace(&mut self.slots[index], Slot::Tombstone);
        let Slot::Occupied(entry) = slot else {
            unreachable!("find only returns occupied slots");
        };
        self.num_live -= 1;
        Some(entry.into_word())
    }

    /// Number of distinct words currently stored.
    pub fn len(&self) -> usize {
        self.num_live
    }

    /// Returns true if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.num_live == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of colliding inserts since creation or the last rehash.
    ///
    /// An insert is charged once when its probe crossed a live entry homed on
    /// the same bucket as the new word. Frequency bumps are never charged.
    /// The counter restarts at every rehash and reflects the replayed
    /// entries' collisions under the new capacity.
    pub fn collisions(&self) -> u64 {
        self.num_collisions
    }

    /// The home bucket for `word` under the current capacity.
    ///
    /// Pure hash computation over any input, present or not; no probing. The
    /// result changes when the table grows.
    pub fn bucket_of(&self, word: &str) -> usize {
        hash::word_bucket(word, self.slots.len())
    }

    /// The buckets in index order, for diagnostics and rendering.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Iterates over the live `(word, frequency)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.slots
            .iter()
            .filter_map(Slot::entry)
            .map(|entry| (entry.word(), entry.frequency()))
    }

    /// Largest live count a capacity can hold before an insert must grow.
    fn load_limit(capacity: usize) -> usize {
        (LOAD_FACTOR * capacity as f64) as usize
    }

    /// Rehashes every live entry into the next prime capacity at least twice
    /// the current one.
    ///
    /// The new buckets are fully built before they replace the old ones.
    /// Tombstones are dropped, frequencies move with their words, and the
    /// collision counter is rebuilt against the new capacity.
    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = next_prime(2 * old_capacity);
        log::debug!("growing table from {old_capacity} to {new_capacity} buckets");

        let mut new_slots = vec![Slot::Empty; new_capacity];
        let mut new_collisions = 0;
        for slot in std::mem::take(&mut self.slots) {
            let Slot::Occupied(entry) = slot else {
                continue;
            };
            let placed = Self::place(&mut new_slots, entry, &mut new_collisions);
            debug_assert!(placed, "every live entry must fit in the grown table");
        }

        self.slots = new_slots;
        self.num_collisions = new_collisions;
    }

    /// Finds the slot holding `word`.
    ///
    /// Probes forward from the word's home bucket, through tombstones, until
    /// an empty slot or a full wraparound proves the word absent.
    fn find(slots: &[Slot], word: &str) -> Option<usize> {
        let capacity = slots.len();
        let home = hash::word_bucket(word, capacity);

        let mut index = home;
        loop {
            match &slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied(entry) => {
                    if entry.word() == word {
                        return Some(index);
                    }
                }
            }
            index = (index + PROBING_STEP) % capacity;
            if index == home {
                return None;
            }
        }
    }

    /// Insert-or-bump against a slot slice.
    ///
    /// Returns true if a new entry was placed, false if an existing entry was
    /// bumped. The probe runs until the word's absence is certain, then the
    /// entry claims the first open slot seen on the path, tombstoned or
    /// empty. Charges `collisions` at most once when the probe crossed a live
    /// entry homed on the same bucket as the new word.
    fn place(slots: &mut [Slot], entry: Entry, collisions: &mut u64) -> bool {
        let capacity = slots.len();
        let home = hash::word_bucket(entry.word(), capacity);
        let mut open_slot = None;
        let mut collided = false;

        let mut index = home;
        loop {
            match &mut slots[index] {
                Slot::Empty => {
                    if open_slot.is_none() {
                        open_slot = Some(index);
                    }
                    break;
                }
                Slot::Tombstone => {
                    if open_slot.is_none() {
                        open_slot = Some(index);
                    }
                }
                Slot::Occupied(existing) => {
                    if existing.word() == entry.word() {
                        existing.bump(entry.frequency());
                        return false;
                    }
                    if !collided && hash::word_bucket(existing.word(), capacity) == home {
                        collided = true;
                    }
                }
            }
            index = (index + PROBING_STEP) % capacity;
            if index == home {
                break;
            }
        }

        // A saturated table has no open slot; leave it unchanged.
        let Some(target) = open_slot else {
            return false;
        };
        slots[target] = Slot::Occupied(entry);
        if collided {
            *collisions += 1;
        }
        true
    }
}

impl Default for WordTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match slot {
                Slot::Empty => f.write_str(EMPTY_SLOT_TOKEN)?,
                Slot::Tombstone => f.write_str(TOMBSTONE_TOKEN)?,
                Slot::Occupied(entry) => write!(f, "[{}, {}]", entry.word(), entry.frequency())?,
            }
        }
        Ok(())
    }
}

/// A key must be a non-empty run of ASCII letters.
fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}
