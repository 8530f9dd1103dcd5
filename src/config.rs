use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::stats::DEFAULT_WORDS_PER_MINUTE;
use crate::upload::DEFAULT_MAX_BYTES;

/// Saved defaults, read from an rc file of command-line style flags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_autopair: bool,
    pub words_per_minute: Option<usize>,
    pub max_upload_mb: Option<u64>,
}

/// Effective editor settings once all flag sources are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub autopair: bool,
    pub words_per_minute: usize,
    pub max_upload_bytes: u64,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_autopair: self.no_autopair || other.no_autopair,
            words_per_minute: other.words_per_minute.or(self.words_per_minute),
            max_upload_mb: other.max_upload_mb.or(self.max_upload_mb),
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            autopair: !self.no_autopair,
            words_per_minute: self
                .words_per_minute
                .filter(|wpm| *wpm > 0)
                .unwrap_or(DEFAULT_WORDS_PER_MINUTE),
            max_upload_bytes: self
                .max_upload_mb
                .map_or(DEFAULT_MAX_BYTES, |mb| mb.saturating_mul(1024 * 1024)),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("markdraft").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("markdraft")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("markdraft").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("markdraft")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".markdraftrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# markdraft defaults (saved with --save)".to_string());
    if flags.no_autopair {
        lines.push("--no-autopair".to_string());
    }
    if let Some(wpm) = flags.words_per_minute {
        lines.push(format!("--wpm {wpm}"));
    }
    if let Some(mb) = flags.max_upload_mb {
        lines.push(format!("--max-upload-mb {mb}"));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the flags this module knows out of a token list; everything else,
/// including malformed numbers, is ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-autopair" {
            flags.no_autopair = true;
        } else if token == "--wpm" {
            if let Some(next) = tokens.get(i + 1) {
                flags.words_per_minute = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--wpm=") {
            flags.words_per_minute = value.parse().ok();
        } else if token == "--max-upload-mb" {
            if let Some(next) = tokens.get(i + 1) {
                flags.max_upload_mb = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--max-upload-mb=") {
            flags.max_upload_mb = value.parse().ok();
        }
        i += 1;
    }
    flags
}
