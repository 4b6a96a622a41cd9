use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every `*.json` file under `root`, ordered by path.
pub fn list_json_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect()
}

pub fn sha256_hex(hasher: Sha256) -> String {
    let digest = hasher.finalize();
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn list_json_files_is_sorted_and_filtered() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("nested")).expect("nested dir should create");
        fs::write(dir.path().join("b.json"), "{}").expect("b should write");
        fs::write(dir.path().join("a.json"), "{}").expect("a should write");
        fs::write(dir.path().join("notes.txt"), "skip").expect("notes should write");
        fs::write(dir.path().join("nested/c.JSON"), "{}").expect("c should write");

        let names = list_json_files(dir.path())
            .iter()
            .map(|path| {
                path.strip_prefix(dir.path())
                    .expect("path should be under root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a.json", "b.json", "nested/c.JSON"]);
    }

    #[test]
    fn sha256_of_empty_input_is_well_known() {
        assert_eq!(
            sha256_hex(Sha256::new()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
