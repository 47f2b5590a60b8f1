use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Log or report file path as shown in outcome records.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - absolute paths are kept as-is (tool logs often live outside the run directory)
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct LogPath(String);

impl LogPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().trim().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// File name component, used for compact log lines.
    pub fn file_name(&self) -> Option<&str> {
        Utf8Path::new(self.as_str()).file_name()
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }
}

impl From<&Utf8Path> for LogPath {
    fn from(value: &Utf8Path) -> Self {
        LogPath::new(value.as_str())
    }
}

impl From<&str> for LogPath {
    fn from(value: &str) -> Self {
        LogPath::new(value)
    }
}
