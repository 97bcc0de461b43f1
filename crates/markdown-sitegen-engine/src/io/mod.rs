use std::fs;
use std::path::{Path, PathBuf};

/// Extension of source pages.
pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("No such file: {0}")]
    NotFound(PathBuf),
    #[error("Not a directory: {0}")]
    InvalidDir(PathBuf),
    #[error("Directories overlap: {} and {}", .src.display(), .dst.display())]
    OverlappingDirs { src: PathBuf, dst: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads a UTF-8 text file.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Writes `content` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(fs::write(path, content)?)
}

/// Every `.md` file below `root`, at any depth, in path order.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(root)?;

    let mut pages = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path
                .extension()
                .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
            {
                pages.push(path);
            }
        }
    }
    pages.sort();
    Ok(pages)
}

/// Replace `dst` with a recursive copy of `src`.
///
/// Any existing `dst` is removed first so stale files never survive a rebuild.
/// Fails without touching either side when one directory contains the other.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<(), IoError> {
    validate_dir(src)?;
    if is_within(dst, src)? || is_within(src, dst)? {
        return Err(IoError::OverlappingDirs {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        });
    }

    if dst.exists() {
        log::debug!("Removing {}", dst.display());
        fs::remove_dir_all(dst)?;
    }
    copy_tree(src, dst)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<(), IoError> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if from.is_dir() {
            copy_tree(&from, &to)?;
        } else if !from.is_file() {
            log::warn!("Skipping {}: not a regular file", from.display());
        } else {
            log::debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)?;
        }
    }

    Ok(())
}

/// Whether `inner` is `outer` or lies below it, after resolving `.`, `..`
/// and symlinks. Neither path has to exist.
pub fn is_within(inner: &Path, outer: &Path) -> Result<bool, IoError> {
    Ok(canonical(inner)?.starts_with(canonical(outer)?))
}

/// Canonical form of `path`, resolving its longest existing prefix and
/// appending the rest.
fn canonical(path: &Path) -> Result<PathBuf, IoError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut missing = Vec::new();
    let mut existing = absolute.as_path();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = fs::canonicalize(existing)?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(IoError::InvalidDir(path.to_path_buf()))
    }
}
