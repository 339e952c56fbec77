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

use crate::error::Error;
use crate::error::ErrorKind;
use crate::table::DEFAULT_CAPACITY;
use crate::table::word_table::WordTable;

/// Builder for creating word tables.
///
/// # Examples
///
/// ```
/// use wordtable::table::WordTable;
///
/// let table = WordTable::builder().capacity(101).build().unwrap();
/// assert_eq!(table.capacity(), 101);
/// assert!(table.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct WordTableBuilder {
    capacity: usize,
}

impl Default for WordTableBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl WordTableBuilder {
    /// Sets the starting number of buckets.
    ///
    /// The capacity is used as given; only rehash capacities are rounded up
    /// to a prime.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtable::table::WordTable;
    ///
    /// let table = WordTable::builder().capacity(40).build().unwrap();
    /// assert_eq!(table.capacity(), 40);
    /// ```
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds the table.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if the configured capacity is 0.
    pub fn build(self) -> Result<WordTable, Error> {
        if self.capacity == 0 {
            return Err(
                Error::new(ErrorKind::InvalidArgument, "capacity must be positive")
                    .with_context("capacity", self.capacity),
            );
        }
        Ok(WordTable::with_capacity(self.capacity))
    }
}
