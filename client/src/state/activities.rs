//! Activity list state: the rendered cards and the signup selector options.
//!
//! DESIGN
//! ======
//! Cards and selector options are always written together from a single
//! fetch so they can never disagree. Each refresh is tagged with a sequence
//! number; a result that arrives after a newer refresh was issued is dropped.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use std::collections::HashSet;

use crate::net::types::{Activity, ActivityCollection};

/// List-area text shown when the listing fetch fails.
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// List-area text shown before the first fetch resolves.
pub const LOADING_TEXT: &str = "Loading activities...";

/// Identifies one participant row: the activity it belongs to and the email
/// it displays.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParticipantKey {
    pub activity: String,
    pub email: String,
}

/// Render model for one activity card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    /// Rows in server order.
    pub participants: Vec<ParticipantKey>,
}

impl ActivityCard {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_owned(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantKey { activity: name.to_owned(), email: email.clone() })
                .collect(),
        }
    }

    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// What the list area currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct ActivitiesState {
    pub status: ListStatus,
    pub cards: Vec<ActivityCard>,
    /// Selector option values (and labels), one per card.
    pub options: Vec<String>,
    /// Rows dimmed while their removal settles; dropped on the next render.
    pub removing: HashSet<ParticipantKey>,
    /// Sequence number of the most recently issued refresh.
    pub latest_refresh: u64,
}

impl ActivitiesState {
    /// Issue a new refresh sequence number. Results tagged with an older
    /// number are ignored from now on.
    pub fn begin_refresh(&mut self) -> u64 {
        self.latest_refresh += 1;
        self.latest_refresh
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_refresh
    }

    /// Replace cards and options with `collection`. Returns `false` and leaves
    /// state untouched if `seq` is stale.
    pub fn apply_loaded(&mut self, seq: u64, collection: &ActivityCollection) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.cards = collection
            .iter()
            .map(|(name, activity)| ActivityCard::from_activity(name, activity))
            .collect();
        self.options = self.cards.iter().map(|card| card.name.clone()).collect();
        self.removing.clear();
        self.status = ListStatus::Ready;
        true
    }

    /// Swap the list for the failure text. Selector options are left as they
    /// were. Returns `false` if `seq` is stale.
    pub fn apply_failed(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.cards.clear();
        self.removing.clear();
        self.status = ListStatus::Failed;
        true
    }

    pub fn mark_removing(&mut self, key: ParticipantKey) {
        self.removing.insert(key);
    }

    pub fn is_removing(&self, key: &ParticipantKey) -> bool {
        self.removing.contains(key)
    }
}
