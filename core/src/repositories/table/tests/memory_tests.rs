//! Tests for the in-memory table and the provided single-key helpers

use crate::repositories::table::{KeyValueTable, MemoryTable};

#[test]
fn test_new_table_is_empty() {
    let mut table: MemoryTable<bool> = MemoryTable::new("revoked");
    assert!(table.is_empty());
    assert!(table.load_all().unwrap().is_empty());
    assert_eq!(table.location(), "memory:revoked");
}

#[test]
fn test_set_get_delete() {
    let mut table: MemoryTable<i64> = MemoryTable::default();

    table.set("a", 1).unwrap();
    table.set("b", 2).unwrap();
    table.set("a", 3).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("a").unwrap(), Some(3));
    assert_eq!(table.get("missing").unwrap(), None);

    assert!(table.delete("a").unwrap());
    assert!(!table.delete("a").unwrap());
    assert_eq!(table.len(), 1);
}

#[test]
fn test_persist_all_replaces_entries() {
    let mut table: MemoryTable<bool> = MemoryTable::default();
    table.set("old", true).unwrap();

    let mut entries = table.load_all().unwrap();
    entries.clear();
    entries.insert("new".to_string(), true);
    table.persist_all(&entries).unwrap();

    let loaded = table.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains_key("new"));
}
