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

//! Positional base-27 word hash.
//!
//! A word is read as a numeral in base 27 over the alphabet blank = 0,
//! a = 1, ..., z = 26 and evaluated with Horner's rule. The accumulator is
//! reduced modulo the table capacity after every character, so the bucket for
//! a long word is exact without ever overflowing.

/// Base of the positional numeral: 26 letters plus blank.
const HASH_MULTIPLIER: u64 = 27;

/// Computes the home bucket for `word` in a table of `capacity` buckets.
///
/// The result depends on the capacity; it must be recomputed whenever the
/// table size changes. The empty string maps to bucket 0.
///
/// # Panics
///
/// Panics if `capacity` is 0.
pub fn word_bucket(word: &str, capacity: usize) -> usize {
    assert!(capacity > 0, "capacity must be positive");

    let modulus = capacity as u64;
    let mut bucket = 0u64;
    for byte in word.bytes() {
        bucket = (bucket * HASH_MULTIPLIER + letter_ordinal(byte)) % modulus;
    }
    bucket as usize
}

/// Maps an ASCII letter to its alphabet ordinal (a = 1, ..., z = 26).
///
/// The ordinal lives in the low five bits of the ASCII byte for both cases,
/// so `A`..`Z` fold onto `a`..`z`.
fn letter_ordinal(byte: u8) -> u64 {
    u64::from(byte & 0x1f)
}
