use std::path::{Path, PathBuf};

use crate::{config::CONFIG_FILE_NAME, draft::DRAFT_FILE_NAME};

#[derive(Clone, Debug, PartialEq)]
pub struct SignupDirectory(PathBuf);

impl SignupDirectory {
    pub fn new(p: PathBuf) -> Self {
        SignupDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(SignupDirectory::new)
    }
}

impl SignupDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_file(&self) -> PathBuf {
        self.0.join(CONFIG_FILE_NAME)
    }
    pub fn draft_file(&self) -> PathBuf {
        self.0.join(DRAFT_FILE_NAME)
    }
}

/// Get the absolute path to the scaleheight data folder.
///
/// This a "ScaleHeight" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.scaleheight`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".scaleheight");

        #[cfg(not(target_os = "linux"))]
        path.push("ScaleHeight");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    // TODO: permissions on Windows..
    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = SignupDirectory::new(tmp.path().join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        // Idempotent.
        dir.init().unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(dir.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }

    #[test]
    fn file_locations() {
        let dir = SignupDirectory::new(PathBuf::from("/tmp/sh"));
        assert_eq!(dir.config_file(), PathBuf::from("/tmp/sh/config.toml"));
        assert_eq!(
            dir.draft_file(),
            PathBuf::from("/tmp/sh/scaleheight_signup_step1.json")
        );
    }
}
