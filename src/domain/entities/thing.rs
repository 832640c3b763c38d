//! Identity fields shared by every API entity.

use crate::domain::diagnostics::{Diagnostic, LineSink, display_opt};
use crate::domain::objects::DictObject;
use crate::domain::raw::{Fields, RawData, into_object};
use crate::error::{BggError, Result};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

const ENTITY: &str = "Thing";

/// Identifier of an entity. Games and users use numeric ids, some lists
/// (e.g. person or company hot lists) return textual ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThingId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Base entity: the common `id` and `name` fields plus the mapping they came
/// from.
///
/// Specific entities embed a `Thing` built with [`Thing::with_entity`], which
/// does not insist on an `id`. A standalone `Thing` built with [`Thing::new`]
/// always has one.
#[derive(Debug, Clone, PartialEq)]
pub struct Thing {
    id: Option<ThingId>,
    name: Option<String>,
    data: DictObject,
}

impl Thing {
    /// Builds a standalone entity.
    ///
    /// # Errors
    ///
    /// Returns [`BggError::MissingField`] if `id` is absent and
    /// [`BggError::InvalidField`] if `id` or `name` have the wrong shape.
    pub fn new(data: RawData) -> Result<Self> {
        Fields::new(ENTITY, &data).require("id")?;
        Self::with_entity(ENTITY, data)
    }

    /// Builds the identity part of a specific entity. Error messages name
    /// `entity` rather than `Thing`.
    pub(crate) fn with_entity(entity: &'static str, data: RawData) -> Result<Self> {
        let fields = Fields::new(entity, &data);
        let id = fields.decode::<ThingId>("id")?;
        let name = fields.text("name")?;

        Ok(Self {
            id,
            name,
            data: DictObject::new(data),
        })
    }

    pub fn id(&self) -> Option<&ThingId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Read access to every field of the mapping, including ones without a
    /// typed accessor.
    pub fn data(&self) -> &DictObject {
        &self.data
    }

    pub fn to_data(&self) -> RawData {
        self.data.to_data()
    }
}

impl TryFrom<Value> for Thing {
    type Error = BggError;

    fn try_from(value: Value) -> Result<Self> {
        Self::new(into_object(ENTITY, value)?)
    }
}

impl Serialize for Thing {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl Diagnostic for Thing {
    fn format(&self, log: &mut dyn LineSink) {
        log.line(&format!("id   : {}", display_opt(self.id())));
        log.line(&format!("name : {}", display_opt(self.name())));
    }
}
