use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polyskel::boundary::reconstruct_with_interior;
use polyskel::geom3::{special, MarkPolicy, ReconCfg, Skeleton};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{FacesDoc, SkeletonDoc};
use provenance::{code_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Reconstruct polytope faces from skeleton JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Reconstruct faces and triangles from a skeleton file
    Reconstruct {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Plane tolerance relative to the bounding-box diagonal
        #[arg(long)]
        eps: Option<f64>,
        /// Absolute hop bound per boundary walk (default 10 per vertex)
        #[arg(long)]
        max_hops: Option<usize>,
        /// Commit half-edge marks only when a walk closes
        #[arg(long)]
        commit_on_success: bool,
        /// Fail if any boundary walk failed
        #[arg(long)]
        strict: bool,
    },
    /// Write the skeleton of a special polytope
    Sample {
        #[arg(long, value_enum)]
        shape: Shape,
        /// Polygon sides for prism/pyramid/bipyramid
        #[arg(long, default_value_t = 6)]
        n: usize,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Tetrahedron,
    Cube,
    Octahedron,
    Prism,
    Pyramid,
    Bipyramid,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Reconstruct {
            input,
            out,
            eps,
            max_hops,
            commit_on_success,
            strict,
        } => {
            let mut cfg = ReconCfg {
                max_hops,
                ..ReconCfg::default()
            };
            if let Some(eps) = eps {
                cfg.eps_plane = eps;
            }
            if commit_on_success {
                cfg.mark_policy = MarkPolicy::OnSuccess;
            }
            run_reconstruct(&input, &out, cfg, strict)
        }
        Action::Sample { shape, n, out } => sample(shape, n, &out),
        Action::Report => report(),
    }
}

fn run_reconstruct(input: &str, out: &str, cfg: ReconCfg, strict: bool) -> Result<()> {
    tracing::info!(
        input,
        out,
        eps = cfg.eps_plane,
        max_hops = ?cfg.max_hops,
        policy = ?cfg.mark_policy,
        strict,
        "reconstruct"
    );
    let doc = SkeletonDoc::read(Path::new(input))?;
    let (skel, interior) = doc.to_skeleton()?;
    let rec = reconstruct_with_interior(&skel, interior, &cfg)?;
    let chi = rec.euler_characteristic(&skel);
    if chi != 2 {
        tracing::warn!(chi, faces = rec.faces.len(), "Euler characteristic is not 2");
    }
    if strict {
        if let Err(e) = rec.clone().ensure_complete() {
            bail!("{input}: {e}");
        }
    }
    let faces = FacesDoc::new(&rec, &skel);
    io::write_json(Path::new(out), &faces)?;
    let params = serde_json::json!({
        "eps_plane": cfg.eps_plane,
        "max_hops": cfg.max_hops,
        "commit_on_success": cfg.mark_policy == MarkPolicy::OnSuccess,
        "strict": strict,
    });
    let summary = serde_json::json!({
        "faces": faces.faces.len(),
        "triangles": faces.triangles.len(),
        "failures": faces.report.failures.len(),
        "euler_characteristic": chi,
    });
    write_sidecar(
        out,
        Payload::new(params)
            .with_skeleton(input, &skel)
            .with_summary(summary),
    )?;
    tracing::info!(
        faces = faces.faces.len(),
        triangles = faces.triangles.len(),
        failures = faces.report.failures.len(),
        "wrote {out}"
    );
    Ok(())
}

fn sample_skeleton(shape: Shape, n: usize) -> Result<Skeleton> {
    let skel = match shape {
        Shape::Tetrahedron => special::tetrahedron(),
        Shape::Cube => special::cube(1.0),
        Shape::Octahedron => special::octahedron(1.0),
        Shape::Prism => special::prism(n, 1.0, 0.5)?,
        Shape::Pyramid => special::pyramid(n, 1.0, 1.0)?,
        Shape::Bipyramid => special::bipyramid(n, 1.0, 1.0)?,
    };
    Ok(skel)
}

fn sample(shape: Shape, n: usize, out: &str) -> Result<()> {
    tracing::info!(?shape, n, out, "sample");
    let skel = sample_skeleton(shape, n)?;
    io::write_json(Path::new(out), &SkeletonDoc::from_skeleton(&skel))?;
    let params = serde_json::json!({ "shape": format!("{shape:?}"), "n": n });
    let summary = serde_json::json!({
        "vertices": skel.vertex_count(),
        "edges": skel.edge_count(),
    });
    write_sidecar(out, Payload::new(params).with_summary(summary))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": code_rev(),
        "polyskel": polyskel::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
