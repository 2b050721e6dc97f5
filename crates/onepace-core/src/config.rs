use std::path::PathBuf;

/// Marker identifying files produced by One Pace.
pub const DEFAULT_MARKER: &str = "[One Pace]";

/// Configuration for an organize or reset run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerConfig {
    /// Root directory holding the episode files.
    pub root: PathBuf,
    /// Substring a file stem must contain to be considered an episode
    pub marker: String,
    /// Only report moves, never touch the filesystem
    pub dry_run: bool,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            marker: DEFAULT_MARKER.to_string(),
            dry_run: false,
        }
    }
}

impl OrganizerConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the file marker. An empty marker falls back to the default.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        self.marker = if marker.is_empty() {
            DEFAULT_MARKER.to_string()
        } else {
            marker
        };
        self
    }

    /// Enable or disable dry-run.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrganizerConfig::new();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.marker, "[One Pace]");
        assert!(!config.dry_run);
    }

    #[test]
    fn test_builder() {
        let config = OrganizerConfig::new()
            .with_root("/media/one-pace")
            .with_marker("[OP]")
            .with_dry_run(true);

        assert_eq!(config.root, PathBuf::from("/media/one-pace"));
        assert_eq!(config.marker, "[OP]");
        assert!(config.dry_run);
    }

    #[test]
    fn test_empty_marker_falls_back() {
        let config = OrganizerConfig::new().with_marker("");
        assert_eq!(config.marker, DEFAULT_MARKER);
    }
}
