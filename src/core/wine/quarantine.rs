use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, error, info, instrument, warn};

pub const QUARANTINE_ATTRIBUTE: &str = "com.apple.quarantine";
pub const XATTR_PATH: &str = "/usr/bin/xattr";

/// Something able to strip an extended attribute from a directory tree.
pub trait AttributeTool: fmt::Debug + Send + Sync {
    /// Blocks until the removal finishes. `Ok(None)` means the utility was
    /// killed by a signal and left no exit code.
    fn remove_recursive(&self, attribute: &str, root: &Path) -> std::io::Result<Option<i32>>;
}

/// Runs the system `xattr` utility.
#[derive(Debug, Clone)]
pub struct XattrTool {
    program: PathBuf,
}

impl XattrTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for XattrTool {
    fn default() -> Self {
        Self::new(XATTR_PATH)
    }
}

impl AttributeTool for XattrTool {
    fn remove_recursive(&self, attribute: &str, root: &Path) -> std::io::Result<Option<i32>> {
        debug!("Running {:?} -dr {} {:?}", self.program, attribute, root);
        // status() waits on the child, so it is reaped on every path.
        let status = Command::new(&self.program)
            .arg("-dr")
            .arg(attribute)
            .arg(root)
            .status()?;
        Ok(status.code())
    }
}

/// Best-effort: every outcome is logged, nothing reaches the caller.
#[instrument(skip(tool), fields(tool = ?tool))]
pub(crate) fn remove_quarantine_attribute(tool: &dyn AttributeTool, root: &Path) {
    match tool.remove_recursive(QUARANTINE_ATTRIBUTE, root) {
        Ok(Some(0)) => info!("Successfully removed quarantine attribute from bundled Wine"),
        Ok(Some(code)) => warn!("Quarantine removal exited with code {}", code),
        Ok(None) => warn!("Quarantine removal was terminated by a signal"),
        Err(err) => error!("Failed to remove quarantine attribute: {}", err),
    }
}
