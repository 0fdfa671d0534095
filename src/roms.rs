//! Best-effort matching of catalog titles against a ROM directory.
//!
//! Titles are turned into a handful of filename spellings and looked up
//! case-insensitively. A matched file can be renamed to
//! `YEAR - Title (USA) (Publisher).ext`. Nothing here retries or rolls back;
//! failures are reported per file.

#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::error::Result;
use crate::record::GameRecord;

/// Extensions tried, in order.
pub const ROM_EXTENSIONS: &[&str] = &[".zip", ".nes", ".7z"];

/// Characters that cannot appear in filenames on common filesystems.
static FORBIDDEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("FORBIDDEN_RE regex"));

const REGION_TAG: &str = " (usa)";

/// Remove filename-forbidden characters and trim.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    FORBIDDEN_RE.replace_all(title, "").trim().to_string()
}

/// Lowercase filename spellings for a title, most literal first, without
/// duplicates.
#[must_use]
pub fn title_variations(title: &str) -> Vec<String> {
    let base = sanitize_title(title).to_lowercase();
    let strip_punct = |s: &str| s.replace([':', '!', '?'], "");

    let candidates = [
        base.clone(),
        base.replace(' ', ""),
        base.replace(' ', "_"),
        base.replace(' ', "-"),
        base.replace(' ', "."),
        strip_punct(&base.replace(' ', "")),
        strip_punct(&base),
        strip_article(&base, "the "),
        strip_article(&base, "a "),
        strip_article(&base, "an "),
    ];

    let mut variations: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !variations.contains(&candidate) {
            variations.push(candidate);
        }
    }
    variations
}

fn strip_article(s: &str, article: &str) -> String {
    s.strip_prefix(article).unwrap_or(s).to_string()
}

/// New filename for a matched ROM: `YEAR - Base (USA) (Publisher).ext`.
///
/// Any existing ` (USA)` tag is dropped from the base name before the
/// canonical one is appended.
#[must_use]
pub fn renamed_file_name(old_name: &str, full_year: u16, publisher: &str) -> String {
    let path = Path::new(old_name);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    let stem = old_name.strip_suffix(ext.as_str()).unwrap_or(old_name);
    let base = stem.replace(" (USA)", "").replace(" (usa)", "");
    let publisher = sanitize_title(publisher);

    format!("{full_year} - {} (USA) ({publisher}){ext}", base.trim())
}

/// Outcome of a rename attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Existing file name.
    pub from: String,
    /// Proposed file name.
    pub to: String,
    /// Whether the file was actually renamed.
    pub applied: bool,
}

/// Snapshot of the files in a ROM directory.
#[derive(Debug, Clone)]
pub struct RomLibrary {
    dir: PathBuf,
    /// Lowercase name to on-disk name.
    files: HashMap<String, String>,
}

impl RomLibrary {
    /// List the regular files in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the directory cannot be read.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut files = HashMap::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if let Some(kept) = files.get(&name.to_lowercase()) {
                    warn!(kept = %kept, ignored = %name, "File names differ only by case");
                    continue;
                }
                files.insert(name.to_lowercase(), name.to_string());
            }
        }
        info!(dir = %dir.display(), files = files.len(), "Scanned ROM directory");
        Ok(Self {
            dir: dir.to_path_buf(),
            files,
        })
    }

    /// Number of files in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the directory had no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// On-disk name of the first file matching the title, trying each
    /// extension, then each variation, with and without the region tag.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&str> {
        let variations = title_variations(title);
        for ext in ROM_EXTENSIONS {
            for variation in &variations {
                for tag in [REGION_TAG, ""] {
                    let key = format!("{variation}{tag}{ext}");
                    if let Some(actual) = self.files.get(&key) {
                        return Some(actual.as_str());
                    }
                }
            }
        }
        None
    }

    /// Rename `file_name` after `record`. With `dry_run` only the plan is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` with `AlreadyExists` when the target name is
    /// taken, or any error from the rename itself.
    pub fn rename(&mut self, file_name: &str, record: &GameRecord, dry_run: bool) -> Result<RenamePlan> {
        let to = renamed_file_name(file_name, record.full_year(), &record.publisher);
        let mut plan = RenamePlan {
            from: file_name.to_string(),
            to,
            applied: false,
        };
        if dry_run || plan.from == plan.to {
            return Ok(plan);
        }

        let target = self.dir.join(&plan.to);
        if self.files.contains_key(&plan.to.to_lowercase()) || target.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", target.display()),
            )
            .into());
        }

        fs::rename(self.dir.join(&plan.from), target)?;
        self.files.remove(&plan.from.to_lowercase());
        self.files.insert(plan.to.to_lowercase(), plan.to.clone());
        plan.applied = true;
        info!(from = %plan.from, to = %plan.to, "Renamed");
        Ok(plan)
    }

    /// Match every record and rename the hits. Failures are logged and left
    /// out of the result.
    pub fn match_and_rename(&mut self, records: &[&GameRecord], dry_run: bool) -> Vec<RenamePlan> {
        let mut plans = Vec::new();
        for record in records {
            let Some(found) = self.find(&record.title).map(str::to_string) else {
                continue;
            };
            match self.rename(&found, record, dry_run) {
                Ok(plan) => plans.push(plan),
                Err(e) => warn!(file = %found, error = %e, "Rename failed"),
            }
        }
        plans
    }
}
