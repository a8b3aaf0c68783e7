//! Generated configuration, ready to be written.

use std::ffi::OsString;
use std::path::PathBuf;

/// A rendered file and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigArtifact {
    pub destination: PathBuf,
    pub content: String,

    /// Copy the destination's prior content to [`ConfigArtifact::backup_path`]
    /// before writing.
    pub backup: bool,
}

impl ConfigArtifact {
    pub fn new(destination: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            content: content.into(),
            backup: false,
        }
    }

    #[must_use]
    pub fn with_backup(mut self) -> Self {
        self.backup = true;
        self
    }

    /// `<destination>.bak`, alongside the original.
    pub fn backup_path(&self) -> PathBuf {
        let mut path = OsString::from(self.destination.as_os_str());
        path.push(".bak");
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_sits_next_to_destination() {
        let artifact = ConfigArtifact::new("/etc/nginx/nginx.conf", "").with_backup();
        assert!(artifact.backup);
        assert_eq!(
            artifact.backup_path(),
            PathBuf::from("/etc/nginx/nginx.conf.bak")
        );
    }
}
