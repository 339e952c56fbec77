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

/// A stored word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    frequency: u64,
}

impl Entry {
    /// Creates an entry for a word seen once.
    pub(crate) fn new(word: String) -> Self {
        Self { word, frequency: 1 }
    }

    /// The stored word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// How many times the word has been inserted.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub(crate) fn bump(&mut self, amount: u64) {
        self.frequency += amount;
    }

    pub(crate) fn into_word(self) -> String {
        self.word
    }
}

/// One bucket of the table.
///
/// A removed entry leaves a [`Slot::Tombstone`] rather than reverting to
/// [`Slot::Empty`]: probe sequences that ran past the slot while it was
/// occupied must still find their entries after the removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Never occupied since the last rehash. Ends every probe sequence.
    Empty,
    /// Held an entry that was since removed. Probes continue through it.
    Tombstone,
    /// Holds a live entry.
    Occupied(Entry),
}

impl Slot {
    /// Returns true if the slot has never been occupied since the last rehash.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns true if the slot held an entry that was removed.
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// The live entry in this slot, if any.
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }
}
