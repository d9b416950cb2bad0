use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Paging direction through an [`ImageList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
        }
    }
}

/// Ordered image paths with a cursor. Stepping never leaves `[0, len - 1]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageList {
    paths: Vec<PathBuf>,
    index: usize,
}

impl ImageList {
    /// Build a list with the cursor at `index`, clamped into range.
    pub fn new(paths: Vec<PathBuf>, index: usize) -> Self {
        let index = index.min(paths.len().saturating_sub(1));
        Self { paths, index }
    }

    /// List the images that sit next to `file`, sorted by file name, with the
    /// cursor on `file`. `file` itself is always included.
    pub fn from_directory_of(file: &Path, extensions: &[String]) -> Result<Self> {
        let dir = match file.parent() {
            Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)?
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && has_extension(p, extensions))
            .collect();

        let file_name = file.file_name();
        if !paths.iter().any(|p| p.file_name() == file_name) {
            paths.push(file.to_path_buf());
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let index = paths
            .iter()
            .position(|p| p.file_name() == file_name)
            .unwrap_or(0);

        Ok(Self { paths, index })
    }

    /// Move the cursor one step. Returns the new current path, or `None`
    /// when already at the boundary or the list is empty.
    pub fn step(&mut self, direction: Direction) -> Option<&Path> {
        let target = self.peek(direction)?;
        self.index = target;
        self.current()
    }

    /// Index the cursor would move to, without moving it.
    pub fn peek(&self, direction: Direction) -> Option<usize> {
        if self.paths.is_empty() {
            return None;
        }
        match direction {
            Direction::Previous if self.index > 0 => Some(self.index - 1),
            Direction::Next if self.index + 1 < self.paths.len() => Some(self.index + 1),
            _ => None,
        }
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.paths.len().saturating_sub(1));
    }

    pub fn current(&self) -> Option<&Path> {
        self.paths.get(self.index).map(PathBuf::as_path)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            extensions.iter().any(|x| x.eq_ignore_ascii_case(&e))
        })
        .unwrap_or(false)
}

/// Strip surrounding whitespace and one pair of enclosing braces, the form
/// some drag sources use for paths containing spaces.
pub fn unwrap_drop_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(trimmed);
    PathBuf::from(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_braced() {
        assert_eq!(
            unwrap_drop_path("{/tmp/my photo.jpg}"),
            PathBuf::from("/tmp/my photo.jpg")
        );
    }

    #[test]
    fn test_unwrap_plain() {
        assert_eq!(unwrap_drop_path(" /tmp/a.png\n"), PathBuf::from("/tmp/a.png"));
    }

    #[test]
    fn test_unwrap_unbalanced_kept() {
        assert_eq!(unwrap_drop_path("{/tmp/a.png"), PathBuf::from("{/tmp/a.png"));
    }

    #[test]
    fn test_new_clamps_index() {
        let list = ImageList::new(vec!["a.png".into(), "b.png".into()], 9);
        assert_eq!(list.index(), 1);
    }
}
