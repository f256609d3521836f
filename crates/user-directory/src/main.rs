//! Demo of the user directory.
//!
//! Loads configuration (`USER_DIRECTORY_CONFIG`), starts the directory, drives it through the
//! request handlers and shuts it down.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p user-directory
//! ```

use tracing::{info, Instrument};
use user_directory::handlers;
use user_directory::lifecycle::{setup_tracing, DirectoryConfig, DirectorySystem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DirectoryConfig::from_env()?;
    setup_tracing(&config.log_level);

    info!(?config, "Starting user directory");
    let system = DirectorySystem::new(&config)?;

    let span = tracing::info_span!("registration");
    async {
        let body = r#"{"firstName":"Sergio","lastName":"del Amo","username":"sdelamo"}"#;

        let created = handlers::add_user(&system.directory, body).await;
        info!(status = created.status.code(), body = %created.body, "First insert");

        let duplicate = handlers::add_user(&system.directory, body).await;
        info!(status = duplicate.status.code(), body = %duplicate.body, "Duplicate insert");
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("lookup");
    async {
        for id in [1, 2] {
            let reply = handlers::find_user(&system.directory, id).await;
            info!(id, status = reply.status.code(), body = %reply.body, "Find by id");
        }

        let all = handlers::list_users(&system.directory).await;
        info!(status = all.status.code(), body = %all.body, "List");
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
