//! Writes rendered theme documents to disk.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::{ErrorKind, Read, Write};

use crate::error::{ThemeError, ThemeResult};

/// Writes `content` to `path`, creating parent directories and truncating any
/// existing file.
///
/// # Errors
///
/// Returns [`ThemeError::Io`] when a directory cannot be created or the file
/// cannot be written.
pub fn write_rendered(path: &Utf8Path, content: &str) -> ThemeResult<()> {
    let (dir, file_name) = open_parent(path, true)?;
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|err| ThemeError::io(path, err))?;
    file.write_all(content.as_bytes())
        .map_err(|err| ThemeError::io(path, err))?;
    Ok(())
}

/// Reads the current contents of `path`, returning `None` when it does not exist.
///
/// # Errors
///
/// Returns [`ThemeError::Io`] for failures other than a missing file.
pub fn read_existing(path: &Utf8Path) -> ThemeResult<Option<String>> {
    let Some((dir, file_name)) = open_parent_if_present(path)? else {
        return Ok(None);
    };
    let mut file = match dir.open(file_name) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ThemeError::io(path, err)),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|err| ThemeError::io(path, err))?;
    Ok(Some(content))
}

fn split_parent(path: &Utf8Path) -> ThemeResult<(&Utf8Path, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        ThemeError::io(
            path,
            std::io::Error::new(ErrorKind::InvalidInput, "output path has no file name"),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Ok((parent, file_name))
}

fn open_parent(path: &Utf8Path, create: bool) -> ThemeResult<(Dir, &str)> {
    let (parent, file_name) = split_parent(path)?;
    let dir = match Dir::open_ambient_dir(parent, ambient_authority()) {
        Ok(dir) => dir,
        Err(err) if create && err.kind() == ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(parent, ambient_authority())
                .map_err(|io_err| ThemeError::io(parent, io_err))?;
            Dir::open_ambient_dir(parent, ambient_authority())
                .map_err(|io_err| ThemeError::io(parent, io_err))?
        }
        Err(err) => return Err(ThemeError::io(parent, err)),
    };
    Ok((dir, file_name))
}

fn open_parent_if_present(path: &Utf8Path) -> ThemeResult<Option<(Dir, &str)>> {
    match open_parent(path, false) {
        Ok(opened) => Ok(Some(opened)),
        Err(ThemeError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
