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

use wordtable::table::WordTable;

#[test]
fn fresh_table_renders_all_empty() {
    let table = WordTable::builder().capacity(3).build().unwrap();
    assert_eq!(table.to_string(), "** ** **");
    assert!(table.is_empty());
}

#[test]
fn frequencies_accumulate_per_word() {
    let mut table = WordTable::new();
    for word in ["the", "cat", "the", "hat", "the"] {
        table.insert(word);
    }

    assert_eq!(table.frequency("the"), 3);
    assert_eq!(table.frequency("cat"), 1);
    assert_eq!(table.frequency("hat"), 1);
    assert_eq!(table.len(), 3);
    assert_eq!(table.collisions(), 0);
    assert_eq!(
        table.to_string(),
        "** [the, 3] ** ** [cat, 1] ** ** ** ** [hat, 1]"
    );
}

#[test]
fn reinsert_after_removal_walks_the_tombstone() {
    // increase and finished share home bucket 34 of a 40-bucket table.
    let mut table = WordTable::builder().capacity(40).build().unwrap();
    table.insert("increase");
    table.insert("finished");
    assert_eq!(table.bucket_of("finished"), table.bucket_of("increase"));
    assert_eq!(table.collisions(), 1);

    assert_eq!(table.remove("increase"), Some("increase".to_string()));
    table.insert("finished");

    assert_eq!(table.frequency("finished"), 2);
    assert!(!table.contains("increase"));
    assert_eq!(table.len(), 1);
}

#[test]
fn emptied_table_reports_absence_everywhere() {
    let mut table = WordTable::builder().capacity(2).build().unwrap();
    table.insert("increase");
    table.remove("increase");
    table.insert("creeping");
    table.remove("creeping");

    // Every bucket is a tombstone; probes terminate by wrapping around.
    assert_eq!(table.to_string(), "#DEL# #DEL#");
    assert_eq!(table.len(), 0);
    assert!(!table.contains("haha"));
    assert_eq!(table.frequency("lala"), 0);
    assert_eq!(table.remove("lala"), None);
}

#[test]
fn tokens_with_punctuation_never_enter_the_table() {
    let mut table = WordTable::new();
    for token in ["", "it's", "end.", "two words", "x1"] {
        table.insert(token);
    }

    assert!(table.is_empty());
    assert_eq!(table.to_string(), "** ** ** ** ** ** ** ** ** **");
}

#[test]
fn iter_matches_display_order() {
    let mut table = WordTable::builder().capacity(11).build().unwrap();
    table.insert("w");
    table.insert("a");
    table.insert("b");

    let pairs: Vec<_> = table.iter().collect();
    assert_eq!(pairs, vec![("w", 1), ("a", 1), ("b", 1)]);
    assert_eq!(table.collisions(), 1);
}
