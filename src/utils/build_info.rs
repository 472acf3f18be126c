/// What `build.rs` recorded about the binary being run.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub commit: &'static str,
    pub tree: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: CLI_VERSION,
        commit: option_env!("EXPENSE_TRACKER_COMMIT").unwrap_or("unknown"),
        tree: option_env!("EXPENSE_TRACKER_TREE").unwrap_or("unknown"),
        target: option_env!("EXPENSE_TRACKER_TARGET").unwrap_or("unknown"),
        profile: option_env!("EXPENSE_TRACKER_PROFILE").unwrap_or("unknown"),
    }
}

impl BuildMetadata {
    /// Banner form, e.g. `0.1.0 (abc1234, clean)`.
    pub fn short_label(&self) -> String {
        format!("{} ({}, {})", self.version, self.commit, self.tree)
    }
}
