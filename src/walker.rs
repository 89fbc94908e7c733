use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively discovers files under `folder` whose extension matches one
/// of `allowed_extensions` (case-insensitive). Unreadable entries are
/// skipped; order follows the filesystem traversal.
pub fn find_gif_files(folder: &Path, allowed_extensions: &HashSet<String>) -> Vec<PathBuf> {
    log::info!("Starting file discovery in {:?}", folder);
    log::debug!("Configured allowed extensions: {:?}", allowed_extensions);

    let mut paths = Vec::new();
    for entry in WalkDir::new(folder).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            let path = entry.path();
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                if allowed_extensions.contains(&ext.to_lowercase()) {
                    log::debug!("Discovered GIF file: {:?}", path);
                    paths.push(path.to_path_buf());
                } else {
                    log::trace!("Skipping file due to unsupported extension: {:?}", path);
                }
            } else {
                log::trace!("Skipping file with no extension: {:?}", path);
            }
        } else {
            log::trace!("Skipping non-file entry: {:?}", entry.path());
        }
    }

    log::info!("File discovery complete, {} files found", paths.len());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn gif_extensions() -> HashSet<String> {
        HashSet::from(["gif".to_string()])
    }

    #[test]
    fn finds_gifs_recursively_and_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("a.gif"), b"x").unwrap();
        fs::write(nested.join("b.GIF"), b"x").unwrap();
        fs::write(dir.path().join("c.png"), b"x").unwrap();
        fs::write(dir.path().join("noext"), b"x").unwrap();

        let mut found = find_gif_files(dir.path(), &gif_extensions());
        found.sort();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.gif", "b.GIF"]);
    }

    #[test]
    fn empty_folder_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.txt"), b"x").unwrap();

        assert!(find_gif_files(dir.path(), &gif_extensions()).is_empty());
    }
}
