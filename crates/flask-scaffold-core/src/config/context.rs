//! Process-wide host state, read once at startup

use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Immutable view of the host environment passed to every component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    home: PathBuf,
    shell: Option<String>,
    path_entries: Vec<PathBuf>,
}

impl HostContext {
    pub fn new(home: PathBuf, shell: Option<String>, path_entries: Vec<PathBuf>) -> Self {
        Self {
            home,
            shell,
            path_entries,
        }
    }

    /// Build the context from the process environment
    ///
    /// Home resolution: explicit override, then `home_env`, then the
    /// platform home directory.
    pub fn from_env(home_override: Option<PathBuf>, home_env: &str) -> Result<Self> {
        let home = home_override
            .or_else(|| {
                std::env::var_os(home_env)
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(dirs::home_dir)
            .ok_or(ScaffoldError::HomeNotFound)?;

        Ok(Self::new(
            home,
            std::env::var("SHELL").ok(),
            split_path_var(std::env::var_os("PATH")),
        ))
    }

    /// Build the context using the product's home override variable
    pub fn from_config<C: ProductConfig>(
        config: &C,
        home_override: Option<PathBuf>,
    ) -> Result<Self> {
        Self::from_env(home_override, config.home_env())
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Value of `SHELL`, if set
    pub fn shell(&self) -> Option<&str> {
        self.shell.as_deref()
    }

    pub fn path_entries(&self) -> &[PathBuf] {
        &self.path_entries
    }
}

/// Parse a PATH-style variable into a list of directories
pub fn split_path_var(value: Option<OsString>) -> Vec<PathBuf> {
    value
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let ctx = HostContext::from_env(
            Some(PathBuf::from("/tmp/somewhere")),
            "FLASK_SCAFFOLD_TEST_UNSET_HOME",
        )
        .unwrap();
        assert_eq!(ctx.home(), Path::new("/tmp/somewhere"));
    }

    #[test]
    fn test_home_lookup_order() {
        // Variable name is private to this test
        let var = "FLASK_SCAFFOLD_TEST_LOOKUP_HOME";
        std::env::set_var(var, "/tmp/from-env");

        let ctx = HostContext::from_env(None, var).unwrap();
        assert_eq!(ctx.home(), Path::new("/tmp/from-env"));

        let ctx = HostContext::from_env(Some(PathBuf::from("/tmp/flag")), var).unwrap();
        assert_eq!(ctx.home(), Path::new("/tmp/flag"));

        // An empty value falls through to the platform home
        std::env::set_var(var, "");
        let ctx = HostContext::from_env(None, var).unwrap();
        assert_eq!(Some(ctx.home().to_path_buf()), dirs::home_dir());

        std::env::remove_var(var);
    }

    #[test]
    fn test_split_path_var() {
        let joined = std::env::join_paths(["/usr/bin", "/opt/tools/bin"]).unwrap();
        let entries = split_path_var(Some(joined));
        assert_eq!(
            entries,
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/opt/tools/bin")]
        );
        assert!(split_path_var(None).is_empty());
    }
}
