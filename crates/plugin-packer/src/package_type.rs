//! Distribution variant of a package.

use std::fmt;

/// Which kind of installation a package targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PackageType {
    /// Installed into a game project's `Plugins` directory.
    #[default]
    Game,
    /// Installed into the engine's own plugin directory.
    Engine,
}

impl PackageType {
    /// Map the `--engine` command-line flag to a package type.
    #[must_use]
    pub fn from_engine_flag(engine: bool) -> Self {
        if engine { Self::Engine } else { Self::Game }
    }

    /// Get the suffix used in version strings (e.g., "game").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Engine => "engine",
        }
    }

    /// Engine installs read `Base*.ini` instead of `Default*.ini`.
    #[must_use]
    pub fn renames_config(&self) -> bool {
        matches!(self, Self::Engine)
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
