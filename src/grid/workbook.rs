//! Workbook persistence.
//!
//! A workbook is the schedule sheet plus an optional statistics table,
//! stored as a single JSON document. Saving falls back once to a sibling
//! file with a random numeric suffix when the requested path cannot be
//! written (typically because another program holds it open).

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::GridError;
use super::sheet::Sheet;
use super::stats::StatsTable;
use super::types::RosterGrid;

/// A schedule sheet and its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    pub schedule: Sheet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<StatsTable>,
}

impl Workbook {
    pub fn new(schedule: Sheet) -> Self {
        Self {
            schedule,
            statistics: None,
        }
    }

    /// Reads a workbook from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let workbook: Workbook = serde_json::from_str(&text)?;
        if workbook.schedule.max_row() < 2 || workbook.schedule.max_column() < 2 {
            return Err(GridError::Malformed(format!(
                "{} needs a header row and at least one day column",
                path.display()
            )));
        }
        info!(path = %path.display(), "workbook loaded");
        Ok(workbook)
    }

    /// Recomputes the statistics table from the schedule.
    pub fn refresh_statistics(&mut self) {
        self.statistics = Some(StatsTable::from_grid(&self.schedule));
    }

    /// Saves to `path`, falling back once to an alternate file name.
    ///
    /// Returns the path actually written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, GridError> {
        self.save_with_rng(path, &mut rand::rng())
    }

    /// Like [`Workbook::save`], drawing the fallback suffix from `rng`.
    pub fn save_with_rng<R: Rng + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        rng: &mut R,
    ) -> Result<PathBuf, GridError> {
        let primary = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        match fs::write(primary, &json) {
            Ok(()) => {
                info!(path = %primary.display(), "workbook saved");
                Ok(primary.to_path_buf())
            }
            Err(err) => {
                let alternate = alternate_path(primary, rng);
                warn!(
                    path = %primary.display(),
                    fallback = %alternate.display(),
                    "save failed ({err}), retrying under fallback name"
                );
                fs::write(&alternate, &json).map_err(|source| GridError::Save {
                    primary: primary.to_path_buf(),
                    alternate: alternate.clone(),
                    source,
                })?;
                info!(path = %alternate.display(), "workbook saved");
                Ok(alternate)
            }
        }
    }
}

/// `dir/name.ext` becomes `dir/name_NNNN.ext` with four random digits.
pub fn alternate_path<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> PathBuf {
    let suffix: u32 = rng.random_range(1000..10000);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };
    path.with_file_name(name)
}

/// Picks the input file: the explicit choice if it exists, else the first
/// existing default, else the first default.
pub fn resolve_input(preferred: Option<&Path>, defaults: &[&str]) -> PathBuf {
    preferred
        .into_iter()
        .map(Path::to_path_buf)
        .chain(defaults.iter().map(PathBuf::from))
        .find(|p| p.exists())
        .or_else(|| preferred.map(Path::to_path_buf))
        .or_else(|| defaults.first().map(PathBuf::from))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "u-rosterfill-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn workbook() -> Workbook {
        Workbook::new(Sheet::from_rows(
            "Horario",
            [vec!["SIGLA", "1", "2"], vec!["GCE", "DESC", ""]],
        ))
    }

    #[test]
    fn test_alternate_path_keeps_extension() {
        let mut rng = StdRng::seed_from_u64(7);
        let alt = alternate_path(Path::new("/tmp/out/roster.json"), &mut rng);
        let name = alt.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("roster_"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "roster_0000.json".len());
        assert_eq!(alt.parent(), Some(Path::new("/tmp/out")));
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("save");
        let mut wb = workbook();
        wb.refresh_statistics();
        let written = wb.save(dir.join("out.json")).unwrap();
        assert_eq!(written, dir.join("out.json"));

        let back = Workbook::load(&written).unwrap();
        assert_eq!(back, wb);
        assert_eq!(back.statistics.unwrap().row("GCE").unwrap().rest, 1);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_falls_back_once() {
        let dir = scratch_dir("fallback");
        // A directory at the target path makes the first write fail.
        let blocked = dir.join("busy.json");
        fs::create_dir_all(&blocked).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let written = workbook().save_with_rng(&blocked, &mut rng).unwrap();
        assert_ne!(written, blocked);
        assert!(written.exists());
        assert!(Workbook::load(&written).is_ok());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_empty_schedule() {
        let dir = scratch_dir("malformed");
        let path = dir.join("empty.json");
        fs::write(&path, r#"{"schedule":{"title":"x","rows":[]}}"#).unwrap();
        assert!(matches!(
            Workbook::load(&path),
            Err(GridError::Malformed(_))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_resolve_input_order() {
        let dir = scratch_dir("resolve");
        let second = dir.join("second.json");
        fs::write(&second, "{}").unwrap();
        let missing = dir.join("missing.json");
        let first_default = dir.join("first.json");
        let defaults = [
            first_default.to_str().unwrap(),
            second.to_str().unwrap(),
        ];

        assert_eq!(resolve_input(Some(&missing), &defaults), second);
        assert_eq!(resolve_input(Some(&second), &defaults), second);

        fs::remove_file(&second).unwrap();
        assert_eq!(resolve_input(Some(&missing), &defaults), missing);
        assert_eq!(resolve_input(None, &defaults), first_default);
        let _ = fs::remove_dir_all(&dir);
    }
}
