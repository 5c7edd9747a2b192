//! Version resolution for plugin and engine version strings.

use semver::Version;
use std::fmt;

/// A version string resolved either to a semantic version or kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVersion {
    /// Parsed as `major.minor.patch`, possibly after appending `.0`.
    Semantic(Version),
    /// Not a semantic version; rendered as-is.
    Opaque(String),
}

impl ResolvedVersion {
    /// Resolve a raw version string.
    ///
    /// Engine versions are usually written as `5.1`, so a failed strict parse
    /// is retried with a `.0` patch component before giving up.
    ///
    /// # Example
    ///
    /// ```
    /// use plugin_packer::ResolvedVersion;
    ///
    /// let engine = ResolvedVersion::resolve("5.1");
    /// assert_eq!(engine.full(), "5.1.0");
    /// assert_eq!(engine.short(), "5.1");
    /// ```
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        if let Ok(version) = Version::parse(raw) {
            return Self::Semantic(version);
        }

        match Version::parse(&format!("{raw}.0")) {
            Ok(version) => Self::Semantic(version),
            Err(_) => Self::Opaque(raw.to_string()),
        }
    }

    /// `major.minor.patch`, without pre-release or build metadata.
    #[must_use]
    pub fn full(&self) -> String {
        match self {
            Self::Semantic(v) => format!("{}.{}.{}", v.major, v.minor, v.patch),
            Self::Opaque(raw) => raw.clone(),
        }
    }

    /// `major.minor`.
    #[must_use]
    pub fn short(&self) -> String {
        match self {
            Self::Semantic(v) => format!("{}.{}", v.major, v.minor),
            Self::Opaque(raw) => raw.clone(),
        }
    }

    #[must_use]
    pub fn major(&self) -> Option<u64> {
        match self {
            Self::Semantic(v) => Some(v.major),
            Self::Opaque(_) => None,
        }
    }

    #[must_use]
    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic(_))
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Semantic(v) => write!(f, "{v}"),
            Self::Opaque(raw) => write!(f, "{raw}"),
        }
    }
}
