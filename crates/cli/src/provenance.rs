use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a sidecar records about the run that produced an artifact.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value, tag: Option<String>) -> Self {
        Self {
            command,
            params,
            tag,
        }
    }

    fn to_json(&self, artifact: &Path, callsite: &Location<'_>) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "hull2d_version": hull2d::VERSION,
            "command": self.command,
            "tag": self.tag,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "params": self.params,
            "outputs": [artifact.to_string_lossy()]
        })
    }
}

/// Write `<stem>.provenance.json` next to `artifact`; returns its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = payload.to_json(artifact, Location::caller());
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::debug!(sidecar = %sidecar.display(), "provenance written");
    Ok(sidecar)
}

/// Provenance block for stdout (no artifact).
pub fn report(tag: Option<String>) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "hull2d_version": hull2d::VERSION,
        "tag": tag,
        "defaults": {
            "tolerance": hull2d::cfg::DEFAULT_TOLERANCE,
            "region_eps": hull2d::cfg::DEFAULT_REGION_EPS
        }
    })
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/region.json"));
        assert_eq!(derived, Path::new("/tmp/out/region.provenance.json"));
    }

    #[test]
    fn sidecar_records_command_tag_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("r.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("region", json!({"tolerance": 1e-10}), Some("run-7".into()));
        let path = write_sidecar(&artifact, &payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "region");
        assert_eq!(parsed["tag"], "run-7");
        assert_eq!(parsed["params"]["tolerance"], 1e-10);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert!(parsed["callsite"]["file"]
            .as_str()
            .unwrap()
            .ends_with("provenance.rs"));
    }

    #[test]
    fn report_lists_defaults() {
        let r = report(None);
        assert!(r["tag"].is_null());
        assert_eq!(r["defaults"]["tolerance"], hull2d::cfg::DEFAULT_TOLERANCE);
    }
}
