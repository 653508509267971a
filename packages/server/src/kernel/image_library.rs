//! Local image library backed by the `public` folder.
//!
//! The gallery serves member portraits from two places: the storage bucket
//! (explicit `image` values) and this folder (name-matched fallbacks). The
//! library lists image files, matches filenames to member names, and can sync
//! new files in from a source directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Extensions the gallery treats as images.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// One file in the public folder, as exposed by GET /api/images.
#[derive(Debug, Clone, Serialize)]
pub struct ImageEntry {
    /// Filename including extension.
    pub name: String,
    /// URL path the web server exposes the file under.
    pub path: String,
    /// Filename without extension, used as a display label.
    pub label: String,
}

/// Result of syncing images from the source directory.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub total_images: usize,
    pub copied_files: Vec<String>,
    pub skipped_files: Vec<String>,
}

pub struct ImageLibrary {
    public_dir: PathBuf,
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn list_image_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(&path) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

impl ImageLibrary {
    pub fn new(public_dir: PathBuf) -> Self {
        Self { public_dir }
    }

    /// List the image files currently in the public folder.
    pub fn list(&self) -> Result<Vec<ImageEntry>> {
        let entries = list_image_files(&self.public_dir)?
            .into_iter()
            .map(|name| {
                let label = name
                    .rsplit_once('.')
                    .map(|(stem, _)| stem.to_string())
                    .unwrap_or_else(|| name.clone());
                ImageEntry {
                    path: format!("/{}", name),
                    name,
                    label,
                }
            })
            .collect();
        Ok(entries)
    }

    /// Resolve a member's display image by name.
    ///
    /// Exact match (`{name}.png|.jpg|.jpeg`) first, then the first file whose
    /// stem contains the name. Case-insensitive. Returns the served path.
    pub fn find_matching_image(&self, member_name: &str) -> Option<String> {
        let entries = self.list().ok()?;
        let lowered = member_name.to_lowercase();

        let exact = entries.iter().find(|e| {
            let candidate = e.name.to_lowercase();
            candidate == format!("{}.png", lowered)
                || candidate == format!("{}.jpg", lowered)
                || candidate == format!("{}.jpeg", lowered)
        });
        if let Some(entry) = exact {
            return Some(entry.path.clone());
        }

        entries
            .iter()
            .find(|e| e.label.to_lowercase().contains(&lowered))
            .map(|e| e.path.clone())
    }

    /// Copy image files from `source_dir` into the public folder, skipping
    /// files that already exist.
    pub fn sync_from(&self, source_dir: &Path) -> Result<SyncReport> {
        let source_files = list_image_files(source_dir)?;
        let existing: HashSet<String> = list_image_files(&self.public_dir)
            .unwrap_or_default()
            .into_iter()
            .collect();

        let mut copied_files = Vec::new();
        let mut skipped_files = Vec::new();

        for name in &source_files {
            if existing.contains(name) {
                skipped_files.push(name.clone());
                continue;
            }
            fs::copy(source_dir.join(name), self.public_dir.join(name))
                .with_context(|| format!("Failed to copy {}", name))?;
            copied_files.push(name.clone());
        }

        Ok(SyncReport {
            total_images: source_files.len(),
            copied_files,
            skipped_files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"img").unwrap();
    }

    #[test]
    fn list_filters_non_images() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "김지수.png");
        touch(dir.path(), "readme.txt");
        touch(dir.path(), "team.JPEG");

        let library = ImageLibrary::new(dir.path().to_path_buf());
        let entries = library.list().unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["team.JPEG", "김지수.png"]);
        assert_eq!(entries[1].path, "/김지수.png");
        assert_eq!(entries[1].label, "김지수");
    }

    #[test]
    fn exact_name_match_beats_partial() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "김지수_old.jpg");
        touch(dir.path(), "김지수.png");

        let library = ImageLibrary::new(dir.path().to_path_buf());
        assert_eq!(
            library.find_matching_image("김지수").as_deref(),
            Some("/김지수.png")
        );
    }

    #[test]
    fn partial_match_on_stem() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "2024_이민호_프로필.jpg");

        let library = ImageLibrary::new(dir.path().to_path_buf());
        assert_eq!(
            library.find_matching_image("이민호").as_deref(),
            Some("/2024_이민호_프로필.jpg")
        );
        assert!(library.find_matching_image("박서연").is_none());
    }

    #[test]
    fn sync_copies_new_and_skips_existing() {
        let source = tempfile::tempdir().unwrap();
        let public = tempfile::tempdir().unwrap();
        touch(source.path(), "a.png");
        touch(source.path(), "b.jpg");
        touch(source.path(), "notes.md");
        touch(public.path(), "a.png");

        let library = ImageLibrary::new(public.path().to_path_buf());
        let report = library.sync_from(source.path()).unwrap();

        assert_eq!(report.total_images, 2);
        assert_eq!(report.copied_files, vec!["b.jpg"]);
        assert_eq!(report.skipped_files, vec!["a.png"]);
        assert!(public.path().join("b.jpg").exists());
    }
}
