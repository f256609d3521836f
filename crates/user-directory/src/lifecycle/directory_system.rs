use crate::clients::DirectoryClient;
use crate::directory::{self, DirectoryError};
use crate::lifecycle::{ConfigError, DirectoryConfig};
use resource_actor::ActorClient;
use tracing::{error, info};

/// Owns the running directory actor and hands out clients to it.
///
/// The directory lives exactly as long as this value (and any clients cloned from it).
/// There is no global instance: whatever needs the directory receives a [`DirectoryClient`].
///
/// # Example
///
/// ```ignore
/// let system = DirectorySystem::new(&DirectoryConfig::default())?;
///
/// let user = system.directory.insert(NewUser::new("Sergio", "del Amo", "sdelamo")).await?;
///
/// system.shutdown().await?;
/// ```
pub struct DirectorySystem {
    /// Client for interacting with the directory actor
    pub directory: DirectoryClient,

    handle: tokio::task::JoinHandle<()>,
}

impl DirectorySystem {
    /// Spawns the directory actor with the validation rules taken from `config`.
    ///
    /// Must be called from within a Tokio runtime. `config` is checked with
    /// [`DirectoryConfig::validate`] first, so a zero channel capacity or username limit is a
    /// [`ConfigError::Invalid`] and nothing is spawned.
    pub fn new(config: &DirectoryConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (actor, directory) = directory::new(config.channel_capacity);
        let handle = tokio::spawn(actor.run(config.validation_rules()));

        Ok(Self { directory, handle })
    }

    /// Gracefully shuts the directory down.
    ///
    /// Dropping the system's client closes the channel once every clone handed out
    /// earlier has also been dropped; the actor then drains pending requests and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(DirectoryError::Unavailable)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), DirectoryError> {
        let size = self.directory.len().await.unwrap_or_default();
        info!(size, "Shutting down directory...");

        drop(self.directory);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Directory task failed");
            return Err(DirectoryError::Unavailable(format!(
                "directory task failed: {e}"
            )));
        }

        info!("Directory shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_channel_capacity_is_rejected() {
        let config = DirectoryConfig {
            channel_capacity: 0,
            ..Default::default()
        };

        let result = DirectorySystem::new(&config);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[tokio::test]
    async fn valid_config_starts_a_directory() {
        let system = DirectorySystem::new(&DirectoryConfig::default()).unwrap();

        assert_eq!(system.directory.len().await.unwrap(), 0);
        system.shutdown().await.unwrap();
    }
}
