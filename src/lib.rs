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

//! An open-addressing hash table of words and occurrence counts.
//!
//! Words are bucketed by a positional base-27 hash, collisions are resolved
//! by linear probing with tombstone deletion, and the table grows to a prime
//! capacity whenever the live count crosses the load factor. See
//! [`table::WordTable`] for the table itself and [`table`] for the tuning
//! constants.

pub mod error;
pub mod hash;
pub mod table;
