use crate::app::error::SyncError;
use crate::app::models::{SyncConfig, TargetEntry};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists target files and looks up their replacements.
pub struct Scanner {
    source_dirs: Vec<PathBuf>,
    exclude_set: GlobSet,
}

impl Scanner {
    pub fn new(config: &SyncConfig) -> Result<Self, SyncError> {
        Ok(Self {
            source_dirs: config
                .source_subdirs
                .iter()
                .map(|subdir| config.source_root.join(subdir))
                .collect(),
            exclude_set: build_globset(&config.exclude)?,
        })
    }

    /// Regular files directly inside `dir`, sorted by name.
    pub fn list_target(&self, dir: &Path) -> Result<Vec<TargetEntry>, SyncError> {
        let read_dir = fs::read_dir(dir).map_err(|error| SyncError::ListDir {
            dir: dir.to_path_buf(),
            error,
        })?;

        let mut entries = Vec::new();
        for result in read_dir {
            let entry = result.map_err(|error| SyncError::ListDir {
                dir: dir.to_path_buf(),
                error,
            })?;
            if let Some(processed) = self.process_entry(entry.path()) {
                entries.push(processed);
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn process_entry(&self, path: PathBuf) -> Option<TargetEntry> {
        let name = path.file_name()?.to_os_string();

        if !path.is_file() {
            log::debug!("Skipping non-file entry {}", path.display());
            return None;
        }

        if self.exclude_set.is_match(Path::new(&name)) {
            log::debug!("Excluded {}", path.display());
            return None;
        }

        let file_name = name.to_string_lossy().into_owned();
        Some(TargetEntry {
            path,
            name,
            file_name,
        })
    }

    /// First source subdirectory, in declared order, holding a regular file
    /// called `file_name`.
    pub fn find_source(&self, file_name: &OsStr) -> Option<PathBuf> {
        self.source_dirs
            .iter()
            .map(|dir| dir.join(file_name))
            .find(|candidate| candidate.is_file())
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, SyncError> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(root: &Path, exclude: &[&str]) -> SyncConfig {
        SyncConfig {
            target_root: root.join("project"),
            target_subdirs: vec!["src".to_string()],
            source_root: root.join("gen"),
            source_subdirs: vec!["Core/Inc".to_string(), "Core/Src".to_string()],
            exclude: exclude.iter().map(|s| s.to_string()).collect(),
            dry_run: false,
            keep_going: false,
        }
    }

    fn touch(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn lists_only_regular_files_in_name_order() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("project/src");
        touch(&src.join("main.c"), "");
        touch(&src.join("gpio.c"), "");
        fs::create_dir_all(src.join("drivers")).unwrap();

        let scanner = Scanner::new(&config(tmp.path(), &[])).unwrap();
        let names: Vec<_> = scanner
            .list_target(&src)
            .unwrap()
            .into_iter()
            .map(|e| e.file_name)
            .collect();

        assert_eq!(names, vec!["gpio.c", "main.c"]);
    }

    #[test]
    fn excluded_names_are_dropped() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("project/src");
        touch(&src.join("main.c"), "");
        touch(&src.join("main.c.bak"), "");

        let scanner = Scanner::new(&config(tmp.path(), &["*.bak"])).unwrap();
        let entries = scanner.list_target(&src).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, "main.c");
    }

    #[test]
    fn first_source_subdir_wins() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("gen/Core/Inc/main.h"), "inc");
        touch(&tmp.path().join("gen/Core/Src/main.h"), "src");

        let scanner = Scanner::new(&config(tmp.path(), &[])).unwrap();
        assert_eq!(
            scanner.find_source(OsStr::new("main.h")),
            Some(tmp.path().join("gen/Core/Inc/main.h"))
        );
    }

    #[test]
    fn directories_never_match_as_sources() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("gen/Core/Inc/main.c")).unwrap();
        touch(&tmp.path().join("gen/Core/Src/main.c"), "src");

        let scanner = Scanner::new(&config(tmp.path(), &[])).unwrap();
        assert_eq!(
            scanner.find_source(OsStr::new("main.c")),
            Some(tmp.path().join("gen/Core/Src/main.c"))
        );
        assert_eq!(scanner.find_source(OsStr::new("absent.c")), None);
    }

    #[test]
    fn missing_target_subdir_is_reported() {
        let tmp = TempDir::new().unwrap();
        let scanner = Scanner::new(&config(tmp.path(), &[])).unwrap();

        let err = scanner
            .list_target(&tmp.path().join("project/src"))
            .unwrap_err();
        assert!(matches!(err, SyncError::ListDir { .. }));
    }

    #[test]
    fn bad_pattern_is_rejected() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            Scanner::new(&config(tmp.path(), &["a[b"])),
            Err(SyncError::InvalidGlob(_))
        ));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_looked_up_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"f\xffo.c");
        let src = tmp.path().join("project/src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join(name), "").unwrap();
        let inc = tmp.path().join("gen/Core/Inc");
        fs::create_dir_all(&inc).unwrap();
        fs::write(inc.join(name), "").unwrap();

        let scanner = Scanner::new(&config(tmp.path(), &[])).unwrap();
        let entries = scanner.list_target(&src).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name.as_os_str(), name);
        assert_eq!(entries[0].file_name, "f\u{fffd}o.c");
        assert_eq!(scanner.find_source(&entries[0].name), Some(inc.join(name)));
    }
}
