//! # Project Scaffolding
//!
//! Turns a `ValidatedPlayground` into files on disk.
//!
//! ```text
//! <output_dir>/<project_name>/
//! ├── playground.toml   (manifest: name, team, components, created_at)
//! └── README.md
//! ```
//!
//! Files are written atomically (`.tmp` + rename) so an interrupted run never
//! leaves a half-written manifest behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::component::Component;
use crate::core::playground::ValidatedPlayground;

pub const MANIFEST_FILE: &str = "playground.toml";
pub const README_FILE: &str = "README.md";

#[derive(Debug, Error)]
pub enum CreationError {
    #[error("invalid project name '{0}': must be a single path component")]
    InvalidProjectName(String),
    #[error("{} already exists and is not empty", .0.display())]
    AlreadyExists(PathBuf),
    #[error("failed to write project files: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Receives the validated form once the user submits.
pub trait ProjectCreator {
    /// Create the project, returning the directory it lives in.
    fn create_project(&self, validated: ValidatedPlayground) -> Result<PathBuf, CreationError>;
}

/// Contents of `playground.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub name: String,
    pub team: String,
    pub components: Vec<Component>,
    pub created_at: DateTime<Utc>,
}

impl ProjectManifest {
    pub fn new(validated: &ValidatedPlayground, created_at: DateTime<Utc>) -> Self {
        Self {
            name: validated.project_name().to_string(),
            team: validated.team_name().to_string(),
            components: validated.chosen_components().iter().copied().collect(),
            created_at,
        }
    }

    fn readme(&self) -> String {
        let mut readme = format!("# {}\n\nOwned by {}.\n\n## Components\n\n", self.name, self.team);
        for component in &self.components {
            readme.push_str(&format!("- {component}\n"));
        }
        readme
    }
}

/// Writes projects under `output_dir`.
#[derive(Debug, Clone)]
pub struct FsProjectCreator {
    output_dir: PathBuf,
    dry_run: bool,
}

impl FsProjectCreator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    /// Log what would be written instead of writing it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Directory the project would be created in.
    pub fn target_dir(&self, project_name: &str) -> Result<PathBuf, CreationError> {
        let mut components = Path::new(project_name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(std::path::Component::Normal(_)), None)
        );
        if !single_normal || project_name.contains(['/', '\\']) {
            return Err(CreationError::InvalidProjectName(project_name.to_string()));
        }
        Ok(self.output_dir.join(project_name))
    }
}

impl ProjectCreator for FsProjectCreator {
    fn create_project(&self, validated: ValidatedPlayground) -> Result<PathBuf, CreationError> {
        let dir = self.target_dir(validated.project_name())?;
        if is_non_empty_dir(&dir)? {
            return Err(CreationError::AlreadyExists(dir));
        }

        let manifest = ProjectManifest::new(&validated, Utc::now());
        let manifest_toml = toml::to_string_pretty(&manifest)?;

        if self.dry_run {
            info!(
                "Dry run: would create {} with {} component(s)",
                dir.display(),
                manifest.components.len()
            );
            debug!("Dry run manifest:\n{manifest_toml}");
            return Ok(dir);
        }

        fs::create_dir_all(&dir)?;
        atomic_write(&dir.join(MANIFEST_FILE), &manifest_toml)?;
        atomic_write(&dir.join(README_FILE), &manifest.readme())?;
        info!("Wrote {} and {} to {}", MANIFEST_FILE, README_FILE, dir.display());
        Ok(dir)
    }
}

fn is_non_empty_dir(path: &Path) -> io::Result<bool> {
    match fs::read_dir(path) {
        Ok(mut entries) => Ok(entries.next().is_some()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Atomically write `contents` to `path` (via `.tmp` + rename).
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::playground::Playground;

    fn validated(name: &str) -> ValidatedPlayground {
        let mut playground = Playground::new();
        playground.project_name = name.to_string();
        playground.team_name = "Platform".to_string();
        playground.toggle(Component::Web);
        playground.toggle(Component::Cli);
        playground.make_validated().unwrap()
    }

    #[test]
    fn test_create_project_writes_manifest_and_readme() {
        let tmp = tempfile::tempdir().unwrap();
        let creator = FsProjectCreator::new(tmp.path());

        let dir = creator.create_project(validated("demo")).unwrap();
        assert_eq!(dir, tmp.path().join("demo"));

        let manifest: ProjectManifest =
            toml::from_str(&fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap()).unwrap();
        assert_eq!(manifest.name, "demo");
        assert_eq!(manifest.team, "Platform");
        assert_eq!(manifest.components, vec![Component::Cli, Component::Web]);

        let readme = fs::read_to_string(dir.join(README_FILE)).unwrap();
        assert!(readme.starts_with("# demo"));
        assert!(readme.contains("- CLI\n- Web\n"));
        assert!(!dir.join("playground.tmp").exists());
    }

    #[test]
    fn test_manifest_uses_component_labels() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = FsProjectCreator::new(tmp.path())
            .create_project(validated("labels"))
            .unwrap();
        let raw = fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();
        assert!(raw.contains("\"CLI\""));
        assert!(raw.contains("created_at"));
    }

    #[test]
    fn test_rejects_path_like_names() {
        let creator = FsProjectCreator::new("/tmp");
        for name in ["..", ".", "a/b", "a\\b", "/abs"] {
            assert!(
                matches!(
                    creator.target_dir(name),
                    Err(CreationError::InvalidProjectName(_))
                ),
                "{name} should be rejected"
            );
        }
        assert!(creator.target_dir("my-project").is_ok());
    }

    #[test]
    fn test_refuses_non_empty_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let existing = tmp.path().join("taken");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("keep.txt"), "mine").unwrap();

        let result = FsProjectCreator::new(tmp.path()).create_project(validated("taken"));
        assert!(matches!(result, Err(CreationError::AlreadyExists(_))));
        assert_eq!(fs::read_to_string(existing.join("keep.txt")).unwrap(), "mine");
    }

    #[test]
    fn test_empty_directory_is_reused() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("empty")).unwrap();
        let dir = FsProjectCreator::new(tmp.path())
            .create_project(validated("empty"))
            .unwrap();
        assert!(dir.join(MANIFEST_FILE).exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = FsProjectCreator::new(tmp.path())
            .dry_run(true)
            .create_project(validated("ghost"))
            .unwrap();
        assert_eq!(dir, tmp.path().join("ghost"));
        assert!(!dir.exists());
    }
}
