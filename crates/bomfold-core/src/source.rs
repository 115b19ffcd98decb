//! Reading raw entries from manifest files.
//!
//! Two formats are understood. The text format has one `key: value` entry per
//! line:
//!
//! ```text
//! multiDexEnabled: true
//! platform-bom: com.google.firebase:firebase-bom@32.7.0
//! dependency: com.google.firebase:firebase-analytics (version: inherited)
//! dependency: androidx.multidex:multidex:2.0.1
//! plugin: com.google.gms.google-services
//! ```
//!
//! A dependency spec is `coordinate@version`, `group:artifact:version`,
//! `coordinate (version: <v>|inherited)` or a bare versionless coordinate.
//! Classifiers (`group:artifact:version:classifier`) are not supported.
//!
//! The TOML format is an array of `[[entry]]` tables tagged by `kind`.

use serde::Deserialize;
use std::path::Path;

use bomfold_util::errors::BomfoldError;

use crate::dependency::DependencyScope;
use crate::entry::RawEntry;
use crate::error::ManifestError;
use crate::properties;

/// On-disk format of a manifest source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Text,
    Toml,
}

impl SourceFormat {
    /// `.toml` files use the TOML format, everything else the text format.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Text,
        }
    }
}

#[derive(Deserialize)]
struct EntryFile {
    #[serde(default, rename = "entry")]
    entries: Vec<RawEntry>,
}

/// Read a manifest file into raw entries.
///
/// `${env:VAR}` references are resolved first, using `env_file` from the
/// manifest's directory (if present) and the process environment.
pub fn read_entries(path: &Path, env_file: &str) -> miette::Result<Vec<RawEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| BomfoldError::Manifest {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;

    let dir = path.parent().unwrap_or(Path::new("."));
    let env_vars = properties::load_env_file(&dir.join(env_file))?;
    let resolved = properties::interpolate(&content, &env_vars);

    let entries = parse(&resolved, SourceFormat::for_path(path))?;
    tracing::debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse manifest content in the given format (no interpolation).
pub fn parse(content: &str, format: SourceFormat) -> Result<Vec<RawEntry>, ManifestError> {
    match format {
        SourceFormat::Text => parse_text(content),
        SourceFormat::Toml => parse_toml(content),
    }
}

/// Parse the line-oriented text format.
pub fn parse_text(content: &str) -> Result<Vec<RawEntry>, ManifestError> {
    let mut entries = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if let Some(entry) = parse_line(idx + 1, line)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Parse the `[[entry]]` TOML format.
pub fn parse_toml(content: &str) -> Result<Vec<RawEntry>, ManifestError> {
    toml::from_str::<EntryFile>(content)
        .map(|file| file.entries)
        .map_err(|e| ManifestError::Syntax {
            line: e
                .span()
                .and_then(|span| content.get(..span.start))
                .map(|before| before.matches('\n').count() + 1)
                .unwrap_or(1),
            message: e.message().to_string(),
        })
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<RawEntry>, ManifestError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return Ok(None);
    }

    let syntax = |message: String| ManifestError::Syntax {
        line: line_no,
        message,
    };

    let (key, value) = trimmed
        .split_once(':')
        .ok_or_else(|| syntax(format!("expected `key: value`, found '{trimmed}'")))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() {
        return Err(syntax("missing key before ':'".to_string()));
    }
    if value.is_empty() {
        return Err(syntax(format!("missing value for '{key}'")));
    }

    if key == "plugin" {
        return Ok(Some(RawEntry::plugin(value)));
    }
    if DependencyScope::from_token(key).is_none() {
        match value {
            "true" => return Ok(Some(RawEntry::flag(key, true))),
            "false" => return Ok(Some(RawEntry::flag(key, false))),
            _ => {}
        }
    }

    let (coordinate, version) = split_spec(value).map_err(syntax)?;
    Ok(Some(RawEntry::Dependency {
        scope: key.to_string(),
        coordinate,
        version,
    }))
}

/// Split a dependency spec into its coordinate and optional version.
fn split_spec(spec: &str) -> Result<(String, Option<String>), String> {
    let (coordinate, version) = if let Some((coordinate, note)) = spec
        .strip_suffix(')')
        .and_then(|s| s.rsplit_once('('))
    {
        let note = note.trim();
        let version = note
            .strip_prefix("version:")
            .map(str::trim)
            .ok_or_else(|| format!("unknown annotation '({note})'"))?;
        match version {
            "" => return Err(format!("empty version annotation in '{spec}'")),
            "inherited" => (coordinate, None),
            v => (coordinate, Some(v)),
        }
    } else if let Some((coordinate, version)) = spec.rsplit_once('@') {
        if version.trim().is_empty() {
            return Err(format!("missing version after '@' in '{spec}'"));
        }
        (coordinate, Some(version))
    } else if spec.matches(':').count() == 2 {
        let (coordinate, version) = spec.rsplit_once(':').unwrap_or((spec, ""));
        if version.trim().is_empty() {
            return Err(format!("missing version in '{spec}'"));
        }
        (coordinate, Some(version))
    } else if spec.matches(':').count() > 2 {
        return Err(format!(
            "too many ':' separated parts in '{spec}' (expected group:artifact[:version])"
        ));
    } else {
        (spec, None)
    };

    let coordinate = coordinate.trim();
    if coordinate.is_empty() {
        return Err(format!("missing coordinate in '{spec}'"));
    }
    Ok((coordinate.to_string(), version.map(|v| v.trim().to_string())))
}
