mod points;
mod provenance;
mod summary;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hull2d::cfg::{DEFAULT_REGION_EPS, DEFAULT_TOLERANCE};
use hull2d::rand::{draw_convex_polygon, PolygonCfg, ReplayToken, VertexCount};
use hull2d::{ConvexHull2D, GeomCfg};
use provenance::Payload;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "hull2d-cli")]
#[command(about = "Validate ordered 2D convex hulls and build their regions")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate a vertex table (x,y columns, boundary order) and print a JSON summary
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
        #[arg(long, default_value_t = DEFAULT_REGION_EPS)]
        region_eps: f64,
    },
    /// Build the hull region and write it as JSON with a provenance sidecar
    Region {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
        #[arg(long, default_value_t = DEFAULT_REGION_EPS)]
        region_eps: f64,
    },
    /// Write a random convex polygon (CCW) as CSV
    Sample {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            input,
            tolerance,
            region_eps,
        } => check(&input, GeomCfg { tolerance, region_eps }, cmd.tag),
        Action::Region {
            input,
            out,
            tolerance,
            region_eps,
        } => region(&input, &out, GeomCfg { tolerance, region_eps }, cmd.tag),
        Action::Sample {
            vertices,
            seed,
            index,
            radius,
            out,
        } => sample(vertices, ReplayToken::new(seed, index), radius, &out, cmd.tag),
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&provenance::report(cmd.tag))?);
            Ok(())
        }
    }
}

fn check(input: &Path, cfg: GeomCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), tolerance = cfg.tolerance, tag = ?tag, "check");
    let pts = points::read_points(input)?;
    let s = summary::summarize(pts, cfg)
        .with_context(|| format!("validating hull from {}", input.display()))?;
    println!("{}", serde_json::to_string_pretty(&s)?);
    Ok(())
}

fn region(input: &Path, out: &Path, cfg: GeomCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "region");
    let pts = points::read_points(input)?;
    let hull = ConvexHull2D::with_cfg(pts, cfg)
        .with_context(|| format!("validating hull from {}", input.display()))?;
    let r = hull
        .create_region()
        .with_context(|| format!("building region from {}", input.display()))?;
    let doc = summary::RegionSummary::from(&r);
    write_json(out, &serde_json::to_value(&doc)?)?;
    let payload = Payload::new(
        "region",
        serde_json::json!({
            "input": input.to_string_lossy(),
            "tolerance": cfg.tolerance,
            "region_eps": cfg.region_eps,
            "hull_vertices": hull.len()
        }),
        tag,
    );
    provenance::write_sidecar(out, &payload)?;
    Ok(())
}

fn sample(n: usize, tok: ReplayToken, radius: f64, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(vertices = n, seed = tok.seed, index = tok.index, tag = ?tag, "sample");
    let cfg = PolygonCfg {
        vertex_count: VertexCount::Fixed(n),
        radius,
        ..PolygonCfg::default()
    };
    let verts = draw_convex_polygon(cfg, tok);
    points::write_points_csv(out, &verts)?;
    let payload = Payload::new(
        "sample",
        serde_json::json!({
            "vertices": verts.len(),
            "seed": tok.seed,
            "index": tok.index,
            "radius": radius
        }),
        tag,
    );
    provenance::write_sidecar(out, &payload)?;
    Ok(())
}

fn write_json(out: &Path, doc: &serde_json::Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
