//! Execution of the `list` command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use roster_listing::{
    InMemoryMemberStore, ListingConfig, ListingError, ListingService, MembersConnection,
};
use tracing::info;

/// Exit code for requests the caller must fix.
pub const EXIT_CLIENT_ERROR: u8 = 2;
/// Exit code for everything else.
pub const EXIT_FAILURE: u8 = 1;

/// Loads the data file and runs one listing.
pub async fn list(args: &crate::args::ListArgs) -> Result<MembersConnection> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ListingConfig::default(),
    };

    let data = fs::read_to_string(&args.data)
        .with_context(|| format!("failed to read member data from {}", args.data.display()))?;
    let store = InMemoryMemberStore::from_json(&data)
        .with_context(|| format!("failed to parse member data in {}", args.data.display()))?;
    info!(members = store.len(), path = %args.data.display(), "loaded member data");

    let service = ListingService::new(store).with_config(config);
    let connection = service.list_connection(&args.request()).await?;
    Ok(connection)
}

/// Renders a listing as pretty JSON.
pub fn render(connection: &MembersConnection) -> Result<String> {
    serde_json::to_string_pretty(connection).context("failed to serialize listing")
}

/// Maps a failed run to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ListingError>() {
        Some(err) if err.is_client_error() => EXIT_CLIENT_ERROR,
        _ => EXIT_FAILURE,
    }
}

fn load_config(path: &Path) -> Result<ListingConfig> {
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let config = ListingConfig::from_yaml_str(&yaml)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    info!(?config, "loaded listing config");
    Ok(config)
}
