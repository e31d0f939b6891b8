//! `ax --update` - replace the installed executable with a fresh download

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use ax_core::{config::UPDATE_URL_VAR, Error, Settings};
use tempfile::NamedTempFile;

const EXECUTABLE: &str = "ax";

/// The installed `ax` on PATH, with symlinks resolved.
fn installed_executable() -> Result<PathBuf, Error> {
    let found = which::which(EXECUTABLE).map_err(|_| {
        Error::MissingPrerequisite(format!("'{EXECUTABLE}' not found on PATH"))
    })?;
    Ok(found.canonicalize()?)
}

fn download(url: &str) -> Result<Vec<u8>> {
    tracing::debug!(url, "downloading update");
    let bytes = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::bytes)
        .with_context(|| format!("Failed to download {url}"))?;
    if bytes.is_empty() {
        anyhow::bail!("Downloaded update from {url} is empty");
    }
    Ok(bytes.to_vec())
}

/// Atomically replace `target` with `contents`, keeping it executable.
pub fn replace_executable(target: &Path, contents: &[u8]) -> Result<()> {
    let dir = target
        .parent()
        .with_context(|| format!("{} has no parent directory", target.display()))?;

    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to stage update in {}", dir.display()))?;
    staged.write_all(contents)?;
    staged.flush()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(staged.path(), std::fs::Permissions::from_mode(0o755))?;
    }

    staged
        .persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", target.display()))?;
    Ok(())
}

pub fn run(settings: &Settings) -> Result<()> {
    let target = installed_executable()?;
    let url = settings.update_url.as_deref().ok_or_else(|| {
        Error::MissingPrerequisite(format!("no update source configured; set {UPDATE_URL_VAR}"))
    })?;

    let contents = download(url)?;
    replace_executable(&target, &contents)?;
    println!("Updated {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_replace_executable() -> Result<()> {
        let tmp = TempDir::new()?;
        let target = tmp.path().join("ax");
        fs::write(&target, "old")?;

        replace_executable(&target, b"#!/bin/sh\necho new\n")?;
        assert_eq!(fs::read_to_string(&target)?, "#!/bin/sh\necho new\n");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&target)?.permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }

        let leftovers = fs::read_dir(tmp.path())?.count();
        assert_eq!(leftovers, 1);
        Ok(())
    }
}
