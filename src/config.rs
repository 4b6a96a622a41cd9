use crate::error::{LeadscoreError, Result};
use crate::types::config::LeadscoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "leadscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".leadscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/leadscore/config.toml";

/// Loads the layered configuration for `root`.
///
/// Layers merge global, then project (`explicit` or `leadscore.toml`), then
/// local overrides. Returns `None` when no project file exists.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<LeadscoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<LeadscoreConfig>> {
    let project_path = match explicit {
        Some(path) if !path.exists() => {
            return Err(LeadscoreError::ConfigNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_FILE),
    };
    if !project_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: LeadscoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| LeadscoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| LeadscoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_project_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_rejects_missing_explicit_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(dir.path(), Some(&missing), None)
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, LeadscoreError::ConfigNotFound(_)));
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[input]
max_records = 100

[logging]
level = "info"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[input]
max_records = 500

[report]
format = "json"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".leadscore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
show_signals = false
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.max_records(), Some(500));
        assert_eq!(cfg.report_format(), Some(OutputFormat::Json));
        assert!(!cfg.show_signals());
        assert_eq!(cfg.log_level(), "info");
    }

    #[test]
    fn load_config_validates_merged_result() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nformat = \"html\"\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None, None)
            .expect_err("invalid format should fail");
        assert!(err.to_string().contains("report.format"));
    }

    #[test]
    fn toml_syntax_and_type_errors_surface_as_config_parse() {
        let root = TempDir::new().expect("root temp dir should be created");
        let project = root.path().join(DEFAULT_CONFIG_FILE);

        fs::write(&project, "[input\n").expect("project config should write");
        let err = load_config_with_global(root.path(), None, None)
            .expect_err("malformed toml should fail");
        assert!(matches!(err, LeadscoreError::ConfigParse(ref detail) if detail.contains("leadscore.toml")));

        fs::write(&project, "[input]\nmax_records = \"lots\"\n").expect("project config should write");
        let err = load_config_with_global(root.path(), None, None)
            .expect_err("mistyped field should fail");
        assert!(matches!(err, LeadscoreError::ConfigParse(_)));
    }

    #[test]
    fn explicit_config_path_replaces_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        let explicit = root.path().join("ci.toml");
        fs::write(&explicit, "[input]\nmax_records = 7\n").expect("explicit config should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed")
            .expect("explicit config should exist");
        assert_eq!(cfg.max_records(), Some(7));
    }
}
