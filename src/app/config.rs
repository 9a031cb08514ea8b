use crate::app::cli::Cli;
use crate::app::models::SyncConfig;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TARGET_SUBDIRS: &[&str] = &["src"];
const DEFAULT_SOURCE_SUBDIRS: &[&str] = &["Core/Inc", "Core/Src"];

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
struct PresetConfig {
    target_root: Option<PathBuf>,
    target_subdirs: Option<Vec<String>>,
    source_root: Option<PathBuf>,
    source_subdirs: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
}

fn default_presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home
        .join(".config")
        .join("codegen_sync")
        .join("presets.toml"))
}

/// An explicit path must exist; the default one is optional.
fn load_presets_file(explicit: Option<&Path>) -> Result<HashMap<String, PresetConfig>> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_presets_path()?;
            if !path.exists() {
                return Ok(HashMap::new());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let parsed: PresetsFile = toml::from_str(&content)
        .context(format!("Failed to parse {}", config_path.display()))?;

    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

fn or_defaults(list: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if list.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        list
    }
}

pub fn resolve_config(cli: Cli, project_name: Option<&str>) -> Result<SyncConfig> {
    let presets = load_presets_file(cli.config.as_deref())?;

    // Determine preset to use: CLI flag > Auto-detect > None
    let preset = match cli.preset.as_deref() {
        Some(name) => presets
            .get(name)
            .cloned()
            .context(format!("Unknown preset '{}'", name))?,
        None => project_name
            .and_then(|k| presets.get(k))
            .cloned()
            .unwrap_or_default(),
    };

    let Some(target_root) = cli.target_root.or(preset.target_root) else {
        bail!("No target root configured (use --target-root or a preset)");
    };
    let Some(source_root) = cli.source_root.or(preset.source_root) else {
        bail!("No source root configured (use --source-root or a preset)");
    };

    let config = SyncConfig {
        target_root,
        target_subdirs: or_defaults(
            merge_vecs(preset.target_subdirs, cli.target_subdir),
            DEFAULT_TARGET_SUBDIRS,
        ),
        source_root,
        source_subdirs: or_defaults(
            merge_vecs(preset.source_subdirs, cli.source_subdir),
            DEFAULT_SOURCE_SUBDIRS,
        ),
        exclude: merge_vecs(preset.exclude, cli.exclude),
        dry_run: cli.dry_run,
        keep_going: cli.keep_going,
    };

    Ok(config)
}
