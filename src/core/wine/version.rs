use std::path::Path;

use semver::{BuildMetadata, Prerelease, Version};
use serde::Deserialize;

use crate::core::error::{BundleError, BundleResult};

/// Contents of `WhiskyWineVersion.plist`, written by the packaging step.
#[derive(Debug, Deserialize)]
struct WineVersionDescriptor {
    version: EncodedVersion,
}

/// The packaging step has written the version both as a plain semver
/// string and as the keyed dictionary Swift's `Codable` produces.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EncodedVersion {
    Text(String),
    Parts {
        major: u64,
        minor: u64,
        patch: u64,
        #[serde(rename = "preRelease", default)]
        pre_release: String,
        #[serde(default)]
        build: String,
    },
}

impl EncodedVersion {
    fn into_version(self) -> BundleResult<Version> {
        match self {
            EncodedVersion::Text(raw) => Ok(Version::parse(raw.trim())?),
            EncodedVersion::Parts {
                major,
                minor,
                patch,
                pre_release,
                build,
            } => {
                let mut version = Version::new(major, minor, patch);
                if !pre_release.is_empty() {
                    version.pre = Prerelease::new(&pre_release)?;
                }
                if !build.is_empty() {
                    version.build = BuildMetadata::new(&build)?;
                }
                Ok(version)
            }
        }
    }
}

/// Decodes a version descriptor from XML or binary plist bytes.
pub fn parse_descriptor(bytes: &[u8]) -> BundleResult<Version> {
    let descriptor: WineVersionDescriptor = plist::from_bytes(bytes)?;
    descriptor.version.into_version()
}

pub fn read_descriptor(path: &Path) -> BundleResult<Version> {
    let bytes = std::fs::read(path).map_err(|source| BundleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_descriptor(&bytes)
}
