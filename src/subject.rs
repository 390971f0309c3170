use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use strsim::levenshtein;
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

/// Largest edit distance at which a subject still counts as a likely typo.
const MAX_TYPO_DISTANCE: usize = 2;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no subject was given")]
    MissingName,

    #[error("could not find the subject {0}")]
    NotFound(String),

    #[error("cannot read the subject folder {}", root.display())]
    RootUnreadable {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the subject folder {} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),
}

impl ResolveError {
    /// True for outcomes the user caused (no name, unknown name), false when
    /// the root itself is broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MissingName | Self::NotFound(_))
    }
}

/// Finds subject folders below the configured root.
#[derive(Debug, Clone)]
pub struct SubjectResolver {
    config: Config,
}

impl SubjectResolver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn root(&self) -> &Path {
        self.config.root()
    }

    /// Returns the folder whose name equals `name` ignoring case.
    ///
    /// Several folders may differ only in case; the first one the filesystem
    /// lists wins.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ResolveError> {
        if name.is_empty() {
            return Err(ResolveError::MissingName);
        }

        let query = name.to_lowercase();
        for entry in self.subject_dirs()? {
            if entry.file_name().to_string_lossy().to_lowercase() == query {
                debug!(subject = name, path = %entry.path().display(), "resolved subject");
                return Ok(entry.into_path());
            }
        }

        Err(ResolveError::NotFound(name.to_string()))
    }

    /// Names of all subjects, in the order the filesystem yields them.
    pub fn list(&self) -> Result<Vec<String>, ResolveError> {
        Ok(self
            .subject_dirs()?
            .iter()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect())
    }

    /// Closest subject to a name that did not resolve, if any is close enough.
    pub fn suggest(&self, name: &str) -> Result<Option<String>, ResolveError> {
        let query = name.to_lowercase();
        if query.is_empty() {
            return Ok(None);
        }

        let mut best: Option<(usize, String)> = None;
        for subject in self.list()? {
            let lower = subject.to_lowercase();
            let score = levenshtein(&lower, &query);
            if !lower.contains(&query) && score > MAX_TYPO_DISTANCE {
                continue;
            }

            match &best {
                Some((current, _)) if *current <= score => {}
                _ => best = Some((score, subject)),
            }
        }

        Ok(best.map(|(_, subject)| subject))
    }

    fn subject_dirs(&self) -> Result<Vec<DirEntry>, ResolveError> {
        let root = self.root();
        debug!(root = %root.display(), "scanning subjects");

        let meta = fs::metadata(root).map_err(|source| ResolveError::RootUnreadable {
            root: root.to_path_buf(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(ResolveError::RootNotDirectory(root.to_path_buf()));
        }

        let mut dirs = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| ResolveError::RootUnreadable {
                root: root.to_path_buf(),
                source: io::Error::from(err),
            })?;

            // Plain files and symlinks are never subjects.
            if !entry.file_type().is_dir() {
                trace!(entry = %entry.path().display(), "skipping non-directory");
                continue;
            }
            dirs.push(entry);
        }

        Ok(dirs)
    }
}

/// Shortcut files a subject folder may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bookmark {
    Vowi,
    Tuwel,
    Tiss,
}

impl Bookmark {
    pub fn file_name(self) -> &'static str {
        match self {
            Bookmark::Vowi => "vowi.url",
            Bookmark::Tuwel => "tuwel.url",
            Bookmark::Tiss => "tiss.url",
        }
    }

    /// Path of the bookmark inside `subject_dir`, if such a file exists.
    pub fn locate(self, subject_dir: &Path) -> Option<PathBuf> {
        let path = subject_dir.join(self.file_name());
        match fs::metadata(&path) {
            Ok(meta) if !meta.is_dir() => Some(path),
            Ok(_) => None,
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                trace!(path = %path.display(), error = %err, "cannot inspect bookmark");
                None
            }
        }
    }
}
