//! A single entry of a "hot" list.

use crate::domain::diagnostics::{Diagnostic, LineSink, display_opt};
use crate::domain::entities::thing::{Thing, ThingId};
use crate::domain::raw::{Fields, RawData, into_object};
use crate::error::{BggError, Result};
use crate::utils::url_normalizer::{fix_url, parse_fixed_url};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use tracing::debug;
use url::Url;

const ENTITY: &str = "HotItem";

pub(crate) const RANK: &str = "rank";
pub(crate) const YEAR_PUBLISHED: &str = "yearpublished";
pub(crate) const THUMBNAIL: &str = "thumbnail";

/// An item from a hot list.
///
/// Depending on the list requested it can be a game (`boardgame`,
/// `videogame`, ...), a person (`boardgameperson`) or a company
/// (`boardgamecompany`). Only `rank` is mandatory.
///
/// The thumbnail is repaired with [`fix_url`] during construction; both
/// [`HotItem::thumbnail`] and [`HotItem::to_data`] return the repaired URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HotItem {
    thing: Thing,
    rank: i64,
    year: Option<i32>,
    thumbnail: Option<String>,
}

impl HotItem {
    /// Builds a hot item from one raw list entry.
    ///
    /// # Errors
    ///
    /// - [`BggError::MissingField`] if `rank` is absent, `null` or blank text
    /// - [`BggError::InvalidField`] if a present field has the wrong shape
    ///
    /// # Examples
    ///
    /// ```
    /// use boardgamegeek_core::domain::entities::HotItem;
    /// use serde_json::json;
    ///
    /// let item = HotItem::try_from(json!({ "rank": 2, "thumbnail": "//x.com/i.png" })).unwrap();
    /// assert_eq!(item.rank(), 2);
    /// assert_eq!(item.thumbnail(), Some("https://x.com/i.png"));
    /// assert_eq!(item.year(), None);
    /// ```
    pub fn new(mut data: RawData) -> Result<Self> {
        let fields = Fields::new(ENTITY, &data);
        let rank = fields.required_number::<i64>(RANK)?;
        let year = fields.number::<i32>(YEAR_PUBLISHED)?;
        let thumbnail = fields
            .text(THUMBNAIL)?
            .map(|raw| fix_url(&raw).into_owned());

        if let Some(url) = &thumbnail {
            data.insert(THUMBNAIL.to_string(), Value::String(url.clone()));
        }

        let thing = Thing::with_entity(ENTITY, data)?;
        debug!(rank, id = %display_opt(thing.id()), "Built hot item");

        Ok(Self {
            thing,
            rank,
            year,
            thumbnail,
        })
    }

    pub fn id(&self) -> Option<&ThingId> {
        self.thing.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.thing.name()
    }

    /// Position of this item in the list, as reported by the API.
    pub fn rank(&self) -> i64 {
        self.rank
    }

    /// Publishing year, `None` if unknown.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Absolute thumbnail URL, `None` if the item has none.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    /// Thumbnail parsed as a URL. `None` when absent or unparsable.
    pub fn thumbnail_url(&self) -> Option<Url> {
        self.thumbnail.as_deref().and_then(parse_fixed_url)
    }

    pub fn thing(&self) -> &Thing {
        &self.thing
    }

    /// Copy of the stored mapping, with the repaired thumbnail.
    pub fn to_data(&self) -> RawData {
        self.thing.to_data()
    }
}

impl TryFrom<Value> for HotItem {
    type Error = BggError;

    fn try_from(value: Value) -> Result<Self> {
        Self::new(into_object(ENTITY, value)?)
    }
}

impl fmt::Display for HotItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HotItem (id: {})", display_opt(self.id()))
    }
}

impl Serialize for HotItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.thing.serialize(serializer)
    }
}

impl Diagnostic for HotItem {
    fn format(&self, log: &mut dyn LineSink) {
        log.line(&format!("hot item id        : {}", display_opt(self.id())));
        log.line(&format!("hot item name      : {}", display_opt(self.name())));
        log.line(&format!("hot item rank      : {}", self.rank));
        log.line(&format!("hot item published : {}", display_opt(self.year)));
        log.line(&format!("hot item thumbnail : {}", display_opt(self.thumbnail())));
    }
}
