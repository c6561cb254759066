//! Single-or-array encoding for relation collections.
//!
//! HAL allows every member of `_links` and `_embedded` to be either one
//! object or an array of objects. A relation holding exactly one element is
//! written as that element; any other length is written as an array in
//! insertion order.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Borrowed view over a relation's elements that serializes collapsed.
#[derive(Debug)]
pub struct OneOrMany<'a, T>(pub &'a [T]);

impl<T> Serialize for OneOrMany<'_, T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            [single] => single.serialize(serializer),
            many => many.serialize(serializer),
        }
    }
}

/// Serializes a relation map with every relation collapsed by [`OneOrMany`].
#[derive(Debug)]
pub struct CollapsedRelations<'a, T>(pub &'a BTreeMap<String, Vec<T>>);

impl<T> Serialize for CollapsedRelations<'_, T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, items) in self.0 {
            map.serialize_entry(rel, &OneOrMany(items))?;
        }
        map.end()
    }
}
