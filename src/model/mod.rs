//! The in-memory activity store.
//!
//! `Activities` owns the data and implements the check-then-mutate operations synchronously.
//! `ActivityStore` wraps it in an `Arc<RwLock<_>>` so it can be cloned into every request handler.

mod error;
mod seed;

pub use error::{ModelError, ModelResult};

use std::{collections::BTreeMap, sync::Arc};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

// ###################################
// ->   STRUCTS
// ###################################
/// A single activity and the emails of everyone signed up for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Reported to clients but never enforced on signup.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Mapping from activity name to its `Activity` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Activities(BTreeMap<String, Activity>);

/// Shared handle to the process-wide `Activities`.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<Activities>>,
}

// ###################################
// ->   IMPLs
// ###################################
impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Activity {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

impl Activities {
    /// The fixed set of activities every process starts with.
    pub fn seeded() -> Self {
        seed::seed_activities().collect()
    }

    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.0.get(activity_name)
    }

    pub fn list(&self) -> Activities {
        self.clone()
    }

    /// Appends `email` to the participants of `activity_name`.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> ModelResult<String> {
        let activity = self
            .0
            .get_mut(activity_name)
            .ok_or_else(|| ModelError::ActivityNotFound(activity_name.to_string()))?;

        if activity.is_registered(email) {
            return Err(ModelError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());

        Ok(format!("Signed up {email} for {activity_name}"))
    }

    /// Removes `email` from the participants of `activity_name`.
    pub fn remove_participant(&mut self, activity_name: &str, email: &str) -> ModelResult<String> {
        let activity = self
            .0
            .get_mut(activity_name)
            .ok_or_else(|| ModelError::ActivityNotFound(activity_name.to_string()))?;

        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| ModelError::ParticipantNotFound {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;
        activity.participants.remove(idx);

        Ok(format!("Removed {email} from {activity_name}"))
    }
}

impl FromIterator<(String, Activity)> for Activities {
    fn from_iter<T: IntoIterator<Item = (String, Activity)>>(iter: T) -> Self {
        Activities(iter.into_iter().collect())
    }
}

impl ActivityStore {
    pub fn new(activities: Activities) -> Self {
        ActivityStore {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// A store populated with `Activities::seeded`.
    pub fn init() -> Self {
        let activities = Activities::seeded();
        info!(
            "{:<20} - Seeded {} activities",
            "activity store",
            activities.0.len()
        );
        Self::new(activities)
    }

    pub async fn list_activities(&self) -> Activities {
        self.inner.read().await.list()
    }

    pub async fn activity(&self, activity_name: &str) -> Option<Activity> {
        self.inner.read().await.get(activity_name).cloned()
    }

    pub async fn signup(&self, activity_name: &str, email: &str) -> ModelResult<String> {
        self.inner.write().await.signup(activity_name, email)
    }

    pub async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> ModelResult<String> {
        self.inner
            .write()
            .await
            .remove_participant(activity_name, email)
    }
}
