//! Default values shared by both tools

/// Name of the optional configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "dailybpy.toml";

/// Package defaults
pub mod package {
    /// Distribution name as published in the index
    pub const NAME: &str = "bpy";

    /// Importable module checked after installation
    pub const MODULE: &str = "bpy";

    /// Version embedded in the nightly wheel filenames
    pub const VERSION: &str = "5.1.0a0";
}

/// Repository defaults
pub mod repository {
    /// GitHub `owner/name` hosting the releases
    pub const SLUG: &str = "BradyAJohnston/dailybpy";

    /// Public URL the generated index is served from
    pub const INDEX_URL: &str = "https://bradyajohnston.github.io/dailybpy/";
}

/// Index builder defaults
pub mod index {
    /// Output directory, relative to the working directory
    pub const OUTPUT_DIR: &str = "simple";

    /// Maximum number of releases requested from the release host
    pub const RELEASE_LIMIT: usize = 100;
}

/// Installer defaults
pub mod installer {
    /// Interpreter used when none is configured
    #[cfg(windows)]
    pub const PYTHON: &str = "python";

    /// Interpreter used when none is configured
    #[cfg(not(windows))]
    pub const PYTHON: &str = "python3";
}
