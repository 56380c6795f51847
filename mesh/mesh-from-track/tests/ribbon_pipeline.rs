//! End-to-end tests for the track-to-ribbon pipeline.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use mesh_from_track::{ribbon_from_track, sample_rails, RibbonConfig};
use nalgebra::Point3;
use track_types::BezierTrack;

/// The reference scenario: the default track (anchors `(0,0,0)`/`(0,0,10)`,
/// controls `(-2.5,0,2.5)`/`(2.5,0,7.5)`) with width 1, 4 samples per
/// segment, resolution 1.
#[test]
fn reference_scenario_buffer_sizes() {
    let track = BezierTrack::default();
    let config = RibbonConfig::default()
        .with_width(1.0)
        .with_segments(4)
        .with_resolution(1);

    let sweep = sample_rails(&track, &config).unwrap();
    assert_eq!(sweep.len(), 5);
    assert_eq!(sweep.degenerate_tangents, 0);

    let mesh = ribbon_from_track(&track, &config).unwrap();
    assert_eq!(mesh.vertices.len(), 10);
    assert_eq!(mesh.triangle_count(), 8);
    assert_eq!(mesh.indices.len(), 24);
}

#[test]
fn ribbon_starts_and_ends_at_anchors() {
    let track = BezierTrack::default();
    let config = RibbonConfig::default()
        .with_width(2.0)
        .with_segments(4)
        .with_resolution(2);

    let mesh = ribbon_from_track(&track, &config).unwrap();

    // The middle column of the first and last rows lies on the curve, which
    // passes through the anchors exactly.
    let columns = config.resolution + 1;
    let first_mid = mesh.vertices[columns / 2];
    let last_row = mesh.vertices.len() - columns;
    let last_mid = mesh.vertices[last_row + columns / 2];

    assert_relative_eq!(first_mid.coords, track.anchors()[0].coords, epsilon = 1e-10);
    assert_relative_eq!(last_mid.coords, track.anchors()[1].coords, epsilon = 1e-10);
}

#[test]
fn indices_stay_within_vertex_buffer() {
    let track = BezierTrack::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 10.0),
            Point3::new(10.0, 2.0, 10.0),
            Point3::new(20.0, 0.0, 0.0),
        ],
        vec![
            Point3::new(-2.5, 0.0, 2.5),
            Point3::new(2.5, 1.0, 7.5),
            Point3::new(7.5, 2.0, 12.5),
            Point3::new(15.0, 1.0, 5.0),
        ],
    )
    .unwrap();
    let config = RibbonConfig::default().with_segments(7).with_resolution(3);

    let mesh = ribbon_from_track(&track, &config).unwrap();

    // 3 segments * 7 samples + 1 pairs, 4 columns each.
    assert_eq!(mesh.vertices.len(), 22 * 4);

    let vertex_count = u32::try_from(mesh.vertices.len()).unwrap();
    for &index in &mesh.indices {
        assert!(index < vertex_count);
    }
}

#[test]
fn pipeline_is_idempotent() {
    let track = BezierTrack::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 1.0, 8.0),
            Point3::new(9.0, -1.0, 12.0),
        ],
        vec![
            Point3::new(-1.0, 0.5, 3.0),
            Point3::new(4.0, 1.5, 9.0),
            Point3::new(7.0, 0.0, 11.0),
        ],
    )
    .unwrap();
    let config = RibbonConfig::default().with_width(1.5).with_segments(12);

    let first = ribbon_from_track(&track, &config).unwrap();
    let second = ribbon_from_track(&track, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn tracks_under_construction_yield_empty_meshes() {
    let config = RibbonConfig::default();

    let empty = BezierTrack::new(vec![], vec![]).unwrap();
    let mesh = ribbon_from_track(&empty, &config).unwrap();
    assert!(mesh.vertices.is_empty());
    assert!(mesh.indices.is_empty());

    let single = BezierTrack::new(
        vec![Point3::origin()],
        vec![Point3::new(-2.5, 0.0, 2.5)],
    )
    .unwrap();
    let mesh = ribbon_from_track(&single, &config).unwrap();
    assert!(mesh.vertices.is_empty());
    assert!(mesh.indices.is_empty());
}

#[test]
fn degenerate_track_still_produces_a_mesh() {
    // Fully collapsed track: every tangent is recovered via fallback.
    let p = Point3::new(2.0, 0.0, -1.0);
    let track = BezierTrack::new(vec![p, p], vec![p, p]).unwrap();
    let config = RibbonConfig::default().with_width(2.0).with_segments(4);

    let mesh = ribbon_from_track(&track, &config).unwrap();

    assert_eq!(mesh.vertices.len(), 10);
    assert_eq!(mesh.triangle_count(), 8);
    assert_eq!(mesh.degenerate_tangents, 5);
}
