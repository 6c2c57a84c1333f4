use std::path::{Path, PathBuf};

use tracing::error;

use crate::core::error::{BundleError, BundleResult};

pub const LIBRARIES_DIR: &str = "Libraries";
pub const VERSION_PLIST: &str = "WhiskyWineVersion.plist";

/// Fixed locations of the Wine runtime bundled inside the app package.
///
/// Resolved once at startup; every path below is derived from the app's
/// `Contents/Resources` directory and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    resource_dir: PathBuf,
    libraries_dir: PathBuf,
}

impl BundleLayout {
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        let resource_dir = resource_dir.into();
        let libraries_dir = resource_dir.join(LIBRARIES_DIR);
        Self {
            resource_dir,
            libraries_dir,
        }
    }

    /// Locates `Contents/Resources` for an executable living in
    /// `Foo.app/Contents/MacOS/`.
    pub fn from_executable(exe: &Path) -> BundleResult<Self> {
        let contents_dir = exe
            .parent()
            .and_then(|p| p.parent())
            .filter(|p| p.file_name().is_some_and(|name| name == "Contents"))
            .ok_or_else(|| {
                BundleError::ResourceDirUnavailable(format!(
                    "unexpected executable location: {}",
                    exe.display()
                ))
            })?;

        let resource_dir = contents_dir.join("Resources");
        if !resource_dir.is_dir() {
            return Err(BundleError::ResourceDirUnavailable(format!(
                "missing {}",
                resource_dir.display()
            )));
        }

        Ok(Self::new(resource_dir))
    }

    pub fn resolve() -> BundleResult<Self> {
        let exe = std::env::current_exe().map_err(|source| BundleError::Io {
            path: PathBuf::from("<current_exe>"),
            source,
        })?;
        Self::from_executable(&exe)
    }

    /// Like [`BundleLayout::resolve`], but a missing resource directory is a
    /// packaging defect: log it and terminate.
    pub fn resolve_or_exit() -> Self {
        match Self::resolve() {
            Ok(layout) => layout,
            Err(err) => {
                error!("Cannot start without the bundled runtime layout: {}", err);
                std::process::exit(1);
            }
        }
    }

    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    /// `<resources>/Libraries`
    pub fn libraries_dir(&self) -> &Path {
        &self.libraries_dir
    }

    /// `<resources>/Libraries/Wine/bin`
    pub fn bin_dir(&self) -> PathBuf {
        self.libraries_dir.join("Wine").join("bin")
    }

    pub fn version_plist(&self) -> PathBuf {
        self.libraries_dir.join(VERSION_PLIST)
    }
}
