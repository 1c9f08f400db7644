//! Generate a synthetic V0 decay, run the full pair-vertexing pipeline on
//! it, and print the report plus the text-dump line.

use anyhow::Result;
use vertex_core::synthetic::{jitter_points, try_hits_along, LineTrackModel};
use vertex_core::{FieldSign, Pt3, Real, Track, Vec3};
use vertex_pipeline::{format_pair_line, vertex_pair, PairVertexingConfig};

fn main() -> Result<()> {
    let decay = Pt3::new(10.0, -5.0, -620.0);
    let up = LineTrackModel::through(decay, Vec3::new(0.08, 0.25, 1.0), 0.85);
    let down = LineTrackModel::through(decay, Vec3::new(-0.04, -0.18, 1.0), 1.05);

    let hit_zs: Vec<Real> = (0..12).map(|i| -520.0 + 15.0 * i as Real).collect();
    let hits_up = jitter_points(&try_hits_along(&up, &hit_zs)?, 0.01, 1);
    let hits_down = jitter_points(&try_hits_along(&down, &hit_zs)?, 0.01, 2);

    let electron = Track::new(-1, hits_up, up);
    let positron = Track::new(1, hits_down, down);

    let config = PairVertexingConfig {
        z_reference: -674.0,
        field_sign: FieldSign::Negative,
        ..Default::default()
    };

    let report = vertex_pair(1, &electron, &positron, &config)?;
    println!(
        "vertex = ({:.3}, {:.3}, {:.3})  separation = {:.5}  mass = {:.5}",
        report.vertex.x, report.vertex.y, report.vertex.z, report.separation, report.invariant_mass
    );
    println!("dump: {}", format_pair_line(&report));
    Ok(())
}
