//! Slide source for the camera slideshow panel.
//!
//! Scans a directory for raster images, sorted by filename. The dashboard
//! logic only ever consumes the deck's count and the current index; pixel
//! data is never read here.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::{fs, io};

use thiserror::Error;

/// File extensions accepted as slides (case-insensitive).
const SLIDE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Failure to scan the slide directory. Callers degrade to an empty deck;
/// a missing slideshow never takes the dashboard down.
#[derive(Debug, Error)]
pub enum SlideError {
    #[error("slide directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("failed to read slide directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One slide in the deck.
#[derive(Debug)]
pub struct Slide {
    /// File name, used as the on-screen caption.
    pub name: String,
}

/// Ordered collection of slides.
#[derive(Debug)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// A deck with no slides; the valid degenerate input everywhere.
    pub const fn empty() -> Self {
        Self { slides: Vec::new() }
    }

    /// Scan `dir` for slides, sorted by filename. Entries that are not
    /// regular files with a recognized extension are skipped, as are
    /// entries the scan cannot stat.
    pub fn load(dir: &Path) -> Result<Self, SlideError> {
        if !dir.is_dir() {
            return Err(SlideError::MissingDirectory(dir.to_path_buf()));
        }

        let entries = fs::read_dir(dir).map_err(|source| SlideError::ReadDirectory {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut slides = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            if !path.is_file() || !has_slide_extension(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(OsStr::to_str) {
                slides.push(Slide { name: name.to_owned() });
            }
        }

        slides.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

fn has_slide_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| SLIDE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::path::PathBuf;

    use super::*;

    /// Create a unique scratch directory for one test.
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cardash-slides-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_sorts_and_filters() {
        let dir = scratch_dir("filter");
        for name in ["b.png", "a.jpg", "zz.jpeg", "notes.txt", "c.gif"] {
            File::create(dir.join(name)).unwrap();
        }

        let deck = SlideDeck::load(&dir).unwrap();
        let names: Vec<&str> = (0..deck.len()).map(|i| deck.get(i).unwrap().name.as_str()).collect();
        assert_eq!(names, ["a.jpg", "b.png", "zz.jpeg"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_accepts_uppercase_extensions() {
        let dir = scratch_dir("case");
        File::create(dir.join("snap.PNG")).unwrap();
        File::create(dir.join("snap2.JpEg")).unwrap();

        let deck = SlideDeck::load(&dir).unwrap();
        assert_eq!(deck.len(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = std::env::temp_dir().join("cardash-slides-does-not-exist");
        let err = SlideDeck::load(&dir).unwrap_err();
        assert!(matches!(err, SlideError::MissingDirectory(_)));
    }

    #[test]
    fn test_empty_deck() {
        let deck = SlideDeck::empty();
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert!(deck.get(0).is_none());
    }
}
