pub mod installer;
pub mod paths;
pub mod quarantine;
pub mod version;

pub use installer::{BundleStatus, WineBundle};
pub use paths::{BundleLayout, LIBRARIES_DIR, VERSION_PLIST};
pub use quarantine::{AttributeTool, XattrTool, QUARANTINE_ATTRIBUTE, XATTR_PATH};
pub use version::parse_descriptor;

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::AttributeTool;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs `f` under a scoped subscriber and returns everything it logged.
    pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
        (result, logs)
    }

    #[derive(Debug)]
    pub struct RecordingTool {
        exit_code: Option<i32>,
        calls: Mutex<Vec<(String, PathBuf)>>,
    }

    impl RecordingTool {
        pub fn exiting_with(exit_code: i32) -> Self {
            Self {
                exit_code: Some(exit_code),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn killed_by_signal() -> Self {
            Self {
                exit_code: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(String, PathBuf)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AttributeTool for RecordingTool {
        fn remove_recursive(&self, attribute: &str, root: &Path) -> std::io::Result<Option<i32>> {
            self.calls
                .lock()
                .unwrap()
                .push((attribute.to_string(), root.to_path_buf()));
            Ok(self.exit_code)
        }
    }
}
