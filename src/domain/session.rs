//! Session state. The current profile, swapped by full-value replacement.

use super::entities::UserProfile;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the profile for the lifetime of the process. Nothing is persisted.
///
/// Readers take an `Arc` snapshot; writers replace the whole value, so a
/// snapshot handed to an in-flight request never changes underneath it.
pub struct SessionState {
    profile: RwLock<Arc<UserProfile>>,
}

impl SessionState {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile: RwLock::new(Arc::new(profile)),
        }
    }

    pub async fn profile(&self) -> Arc<UserProfile> {
        Arc::clone(&*self.profile.read().await)
    }

    pub async fn replace_profile(&self, profile: UserProfile) {
        *self.profile.write().await = Arc::new(profile);
    }

    /// Derives the next profile from the current one and swaps it in.
    pub async fn update_profile<F>(&self, f: F) -> Arc<UserProfile>
    where
        F: FnOnce(UserProfile) -> UserProfile,
    {
        let mut guard = self.profile.write().await;
        let next = Arc::new(f((**guard).clone()));
        *guard = Arc::clone(&next);
        next
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}
