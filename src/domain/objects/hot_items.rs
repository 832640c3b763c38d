//! Ordered collection of [`HotItem`]s.

use crate::domain::diagnostics::{Diagnostic, LineSink};
use crate::domain::entities::HotItem;
use crate::domain::objects::DictObject;
use crate::domain::raw::{RawData, into_object};
use crate::error::{BggError, Result};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::ops::Index;
use tracing::{debug, warn};

const COLLECTION: &str = "HotItems";
const ITEMS: &str = "items";

/// A hot list: the ranked items plus whatever other fields the response
/// carried (e.g. `termsofuse`).
///
/// Each item keeps its own raw mapping, so the exported `items` sequence
/// always has exactly one entry per item. Indexing and iteration return the
/// same instances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotItems {
    data: DictObject,
    items: Vec<HotItem>,
}

impl HotItems {
    /// Builds the collection from a response mapping. A missing or `null`
    /// `items` key gives an empty list.
    ///
    /// # Errors
    ///
    /// - [`BggError::InvalidField`] if `items` is not a sequence
    /// - [`BggError::Value`] if an entry is not a mapping
    /// - any error raised by [`HotItem::new`] for an entry
    pub fn new(mut data: RawData) -> Result<Self> {
        let raw_items = match data.remove(ITEMS) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(BggError::invalid_field(
                    COLLECTION,
                    ITEMS,
                    format!("expected a sequence, got {other}"),
                ));
            }
        };

        let items = raw_items
            .into_iter()
            .map(HotItem::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!(count = items.len(), "Built hot items");

        Ok(Self {
            data: DictObject::new(data),
            items,
        })
    }

    /// Appends a new item built from `data`.
    ///
    /// The item is validated before anything is stored: on error the
    /// collection is left unchanged.
    pub fn add_item(&mut self, data: RawData) -> Result<&HotItem> {
        let item = HotItem::new(data).inspect_err(|e| {
            warn!(error = %e, "Rejected hot item");
        })?;

        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HotItem> {
        self.items.get(index)
    }

    /// Like [`HotItems::get`], but reports a missing position as an error.
    pub fn item(&self, index: usize) -> Result<&HotItem> {
        self.items.get(index).ok_or(BggError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn items(&self) -> &[HotItem] {
        &self.items
    }

    /// Iterates the items in list order. Can be called any number of times.
    pub fn iter(&self) -> std::slice::Iter<'_, HotItem> {
        self.items.iter()
    }

    /// Fields of the response other than `items`.
    pub fn extra(&self) -> &DictObject {
        &self.data
    }

    /// Rebuilds the full response mapping, items included.
    pub fn to_data(&self) -> RawData {
        let mut data = self.data.to_data();
        let items = self
            .items
            .iter()
            .map(|item| Value::Object(item.to_data()))
            .collect();
        data.insert(ITEMS.to_string(), Value::Array(items));
        data
    }
}

impl TryFrom<Value> for HotItems {
    type Error = BggError;

    fn try_from(value: Value) -> Result<Self> {
        Self::new(into_object(COLLECTION, value)?)
    }
}

impl Index<usize> for HotItems {
    type Output = HotItem;

    fn index(&self, index: usize) -> &HotItem {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a HotItems {
    type Item = &'a HotItem;
    type IntoIter = std::slice::Iter<'a, HotItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for HotItems {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_data().serialize(serializer)
    }
}

impl Diagnostic for HotItems {
    fn format(&self, log: &mut dyn LineSink) {
        log.line(&format!("hot items          : {}", self.len()));
        for item in self {
            item.format(log);
        }
    }
}
