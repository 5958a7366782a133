//! Default values for configuration fields and options.

use std::path::PathBuf;

pub fn config_file() -> PathBuf {
    "metaseo.toml".into()
}

// ============================================================================
// [seo] Section Defaults
// ============================================================================

pub mod seo {
    pub const fn home_index() -> bool {
        true
    }

    pub const fn home_follow() -> bool {
        true
    }

    pub const fn posts_index() -> bool {
        true
    }

    pub const fn posts_follow() -> bool {
        true
    }

    /// Archives are kept out of the index by default.
    pub const fn archives_index() -> bool {
        false
    }

    pub const fn archives_follow() -> bool {
        true
    }
}
