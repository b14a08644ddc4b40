//! Vertex tables on disk: `x,y` columns in CSV or Parquet.

use anyhow::{bail, Context, Result};
use hull2d::Vector2D;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read rows of `x,y` in file order; nulls are rejected.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Vector2D>> {
    let path = path.as_ref();
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => bail!("unsupported input {} (expected .csv or .parquet)", path.display()),
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Vector2D::new(x, y)),
            _ => bail!("null coordinate in row {row} of {}", path.display()),
        }
    }
    tracing::debug!(rows = out.len(), input = %path.display(), "points read");
    Ok(out)
}

/// Write `points` as a CSV table with an `x,y` header.
pub fn write_points_csv<P: AsRef<Path>>(path: P, points: &[Vector2D]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let xs: Vec<f64> = points.iter().map(Vector2D::x).collect();
    let ys: Vec<f64> = points.iter().map(Vector2D::y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    Ok(())
}
