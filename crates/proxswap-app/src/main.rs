//! proxswap application entry point.
//!
//! Wires the storage infrastructure to the profile registry and reports the
//! configured profiles.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ profile_file_path()   -- ~/proxswap.ini by convention
//!  └─ open_store()          -- missing file == first run, empty store
//!  └─ ProfileRegistry       -- named-profile view over the store
//! ```
//!
//! The tray icon, window, and registry-backed proxy adapter mount on top of
//! this in the platform GUI shell; the headless variant only opens the
//! store and lists what it found.

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use proxswap_app::application::manage_profiles::ProfileRegistry;
use proxswap_app::infrastructure::storage::profiles::{open_store, profile_file_path};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("proxswap starting");

    let path = profile_file_path()?;
    let store = open_store(&path)?;
    let section_count = store.len();
    let registry = ProfileRegistry::new(store);

    let profiles = registry.profiles();
    if section_count > profiles.len() {
        warn!(
            skipped = section_count - profiles.len(),
            "some sections lack a host or port and are not listed"
        );
    }

    if profiles.is_empty() {
        info!("no proxy profiles configured yet");
    }
    for profile in &profiles {
        info!(name = %profile.name, endpoint = %profile.endpoint(), "profile");
    }

    info!(count = profiles.len(), path = %path.display(), "proxswap ready");
    Ok(())
}
