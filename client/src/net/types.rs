//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! `GET /activities` returns a JSON object keyed by activity name. Display
//! order is the document order of that object, so the collection is decoded
//! into an ordered list of entries rather than a hash map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One activity as returned by the listing endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in server order. Required: an entry without a
    /// roster fails the whole listing.
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the backend reports more participants
    /// than seats.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// The full activity listing, in the order the backend sent it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    entries: Vec<(String, Activity)>,
    /// Position of each name in `entries`.
    index: HashMap<String, usize>,
}

impl ActivityCollection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, activity)` pairs in fetched order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Insert or replace by name. A replaced entry keeps its original position.
    pub fn insert(&mut self, name: String, activity: Activity) {
        if let Some(&i) = self.index.get(&name) {
            self.entries[i].1 = activity;
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push((name, activity));
        }
    }
}

impl FromIterator<(String, Activity)> for ActivityCollection {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut collection = Self::default();
        for (name, activity) in iter {
            collection.insert(name, activity);
        }
        collection
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut collection = ActivityCollection::default();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    collection.insert(name, activity);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// Body of the signup/unregister endpoints. Success carries `message`,
/// failure carries `detail`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ActivityReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
