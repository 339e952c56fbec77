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

//! Word-frequency hash table with open addressing.
//!
//! The table stores each distinct word once together with the number of times
//! it was inserted. Collisions are resolved by linear probing, removals leave
//! tombstones so probe chains stay intact, and crossing the load factor grows
//! the table to a prime capacity with every entry rehashed.
//!
//! # Usage
//!
//! ```rust
//! use wordtable::table::WordTable;
//!
//! let mut table = WordTable::new();
//! table.insert("cats");
//! table.insert("cats");
//! table.insert("dogs");
//!
//! assert_eq!(table.frequency("cats"), 2);
//! assert!(table.contains("dogs"));
//! assert_eq!(table.len(), 2);
//! ```

mod builder;
mod prime;
mod slot;
mod word_table;

pub use self::builder::WordTableBuilder;
pub use self::slot::Entry;
pub use self::slot::Slot;
pub use self::word_table::WordTable;

/// Default number of buckets for a table created without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 10;
/// Occupancy fraction above which an insert grows the table.
pub const LOAD_FACTOR: f64 = 0.5;
/// Rendering of an empty bucket in the diagnostic table dump.
pub const EMPTY_SLOT_TOKEN: &str = "**";
/// Rendering of a tombstoned bucket in the diagnostic table dump.
pub const TOMBSTONE_TOKEN: &str = "#DEL#";
