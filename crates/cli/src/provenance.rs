//! Provenance sidecars: every artifact `x.json` gets `x.provenance.json`
//! describing the code revision, parameters, input skeletons, and a result summary.

use anyhow::{Context, Result};
use polyskel::geom3::Skeleton;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Skeleton file read by a command, with its size and scale.
#[derive(Clone, Debug, Serialize)]
pub struct SkeletonInput {
    pub path: String,
    pub vertices: usize,
    pub edges: usize,
    pub bbox_diagonal: f64,
}

/// What produced an artifact.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<SkeletonInput>,
    pub summary: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
            summary: Value::Null,
        }
    }

    pub fn with_skeleton(mut self, path: impl Into<String>, skel: &Skeleton) -> Self {
        self.inputs.push(SkeletonInput {
            path: path.into(),
            vertices: skel.vertex_count(),
            edges: skel.edge_count(),
            bbox_diagonal: skel.bbox_diagonal(),
        });
        self
    }

    /// Counts describing the written artifact (faces, failures, ...).
    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    polyskel: &'static str,
    callsite: Callsite,
    params: &'a Value,
    inputs: &'a [SkeletonInput],
    output: String,
    summary: &'a Value,
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        polyskel: polyskel::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params: &payload.params,
        inputs: &payload.inputs,
        output: artifact.to_string_lossy().into_owned(),
        summary: &payload.summary,
    };
    // Artifacts are written first, so the parent directory already exists.
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/faces.json` → `dir/faces.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn code_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyskel::geom3::special;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/out/faces.json")),
            Path::new("/tmp/out/faces.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("cube")),
            Path::new("cube.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_skeleton_input_and_summary() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("faces.json");
        fs::write(&artifact, "{}").unwrap();
        let cube = special::cube(1.0);
        let payload = Payload::new(json!({"eps_plane": 1e-7}))
            .with_skeleton("cube.json", &cube)
            .with_summary(json!({"faces": 6}));
        let path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["output"], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["inputs"][0]["path"], "cube.json");
        assert_eq!(parsed["inputs"][0]["vertices"], 8);
        assert_eq!(parsed["inputs"][0]["edges"], 12);
        assert_eq!(parsed["summary"]["faces"], 6);
        assert_eq!(parsed["polyskel"], polyskel::VERSION);
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }
}
