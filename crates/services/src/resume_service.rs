use std::sync::Arc;

use course_core::Clock;
use course_core::model::ResumeState;
use storage::repository::KeyValueRepository;

use crate::error::ResumeServiceError;

/// Storage key holding the serialized last-viewed resource.
pub const LAST_VIEWED_KEY: &str = "lastViewed";

/// Reads and writes the persisted last-viewed resource.
#[derive(Clone)]
pub struct ResumeService {
    clock: Clock,
    kv: Arc<dyn KeyValueRepository>,
}

impl ResumeService {
    #[must_use]
    pub fn new(clock: Clock, kv: Arc<dyn KeyValueRepository>) -> Self {
        Self { clock, kv }
    }

    /// Load the persisted resume state.
    ///
    /// A record that fails to parse is treated as "no prior session".
    ///
    /// # Errors
    ///
    /// Returns `ResumeServiceError::Storage` if the store cannot be read.
    pub async fn load(&self) -> Result<Option<ResumeState>, ResumeServiceError> {
        let Some(entry) = self.kv.get_entry(LAST_VIEWED_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<ResumeState>(&entry.value) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    updated_at = %entry.updated_at,
                    "ignoring malformed last-viewed record"
                );
                Ok(None)
            }
        }
    }

    /// Persist `state` as the last-viewed resource.
    ///
    /// Returns `false` when the stored record already matches and no write
    /// happened.
    ///
    /// # Errors
    ///
    /// Returns `ResumeServiceError` if encoding or storage fails.
    pub async fn record(&self, state: &ResumeState) -> Result<bool, ResumeServiceError> {
        if self.load().await?.as_ref() == Some(state) {
            return Ok(false);
        }
        let encoded = serde_json::to_string(state)?;
        self.kv
            .put_entry(LAST_VIEWED_KEY, &encoded, self.clock.now())
            .await?;
        tracing::debug!(
            module_id = %state.module_id,
            resource_id = %state.resource_id,
            "recorded last-viewed resource"
        );
        Ok(true)
    }

    /// Forget the last-viewed resource.
    ///
    /// # Errors
    ///
    /// Returns `ResumeServiceError::Storage` if the store cannot be written.
    pub async fn clear(&self) -> Result<bool, ResumeServiceError> {
        Ok(self.kv.remove_entry(LAST_VIEWED_KEY).await?)
    }
}
