use std::path::{Path, PathBuf};
use std::sync::Arc;

use semver::Version;
use serde::Serialize;
use tracing::{debug, warn};

use super::paths::BundleLayout;
use super::quarantine::{remove_quarantine_attribute, AttributeTool, XattrTool};
use super::version::read_descriptor;

/// Diagnostic snapshot of the bundled runtime.
#[derive(Debug, Clone, Serialize)]
pub struct BundleStatus {
    pub bundle_root: PathBuf,
    pub executables_dir: PathBuf,
    pub installed: bool,
    pub version: Option<Version>,
}

/// Wine shipped inside the app bundle.
///
/// The runtime is assembled at build time, so install/uninstall/update are
/// reduced to quarantine maintenance and fixed answers. Nothing is cached:
/// every query looks at the filesystem again.
#[derive(Debug, Clone)]
pub struct WineBundle {
    layout: BundleLayout,
    tool: Arc<dyn AttributeTool>,
}

impl WineBundle {
    pub fn new(layout: BundleLayout) -> Self {
        Self::with_tool(layout, Arc::new(XattrTool::default()))
    }

    pub fn with_tool(layout: BundleLayout, tool: Arc<dyn AttributeTool>) -> Self {
        Self { layout, tool }
    }

    pub fn layout(&self) -> &BundleLayout {
        &self.layout
    }

    /// `Contents/Resources/Libraries`
    pub fn bundle_root(&self) -> &Path {
        self.layout.libraries_dir()
    }

    /// `Contents/Resources/Libraries/Wine/bin`
    pub fn executables_directory(&self) -> PathBuf {
        self.layout.bin_dir()
    }

    pub fn is_installed(&self) -> bool {
        self.executables_directory().exists()
    }

    /// The bundled runtime is never fetched; `_from` is accepted for callers
    /// written against a downloading installer and ignored.
    pub fn install(&self, _from: &Path) {
        self.remove_quarantine_attribute();
    }

    fn remove_quarantine_attribute(&self) {
        remove_quarantine_attribute(self.tool.as_ref(), self.bundle_root());
    }

    pub fn uninstall(&self) {
        warn!("Bundled Wine cannot be uninstalled");
    }

    /// Bundled Wine never self-updates.
    pub async fn should_check_for_update(&self) -> (bool, Version) {
        let version = self.read_version().unwrap_or(Version::new(0, 0, 0));
        (false, version)
    }

    pub fn read_version(&self) -> Option<Version> {
        let plist = self.layout.version_plist();
        if !plist.exists() {
            return None;
        }

        match read_descriptor(&plist) {
            Ok(version) => Some(version),
            Err(err) => {
                warn!("Failed to read WhiskyWineVersion plist: {}", err);
                None
            }
        }
    }

    pub fn status(&self) -> BundleStatus {
        let status = BundleStatus {
            bundle_root: self.bundle_root().to_path_buf(),
            executables_dir: self.executables_directory(),
            installed: self.is_installed(),
            version: self.read_version(),
        };
        debug!(
            "Bundled Wine at {:?}: installed={}, version={}",
            status.bundle_root,
            status.installed,
            status
                .version
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "unknown".to_string())
        );
        status
    }
}
