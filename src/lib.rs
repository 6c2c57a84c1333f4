pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::error::{BundleError, BundleResult};
pub use crate::core::wine::{
    AttributeTool, BundleLayout, BundleStatus, WineBundle, XattrTool, QUARANTINE_ATTRIBUTE,
};

/// Installs the process-wide structured logger. Hosts call this once at
/// startup, before resolving the bundle layout.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,whisky_wine_lib=debug")),
        )
        .try_init();
}

/// Resolves the bundled runtime for the running app, exiting if the app's
/// Resources directory cannot be found.
pub fn bundled_wine() -> WineBundle {
    let layout = BundleLayout::resolve_or_exit();
    tracing::debug!("Bundled Wine root: {:?}", layout.libraries_dir());
    WineBundle::new(layout)
}
