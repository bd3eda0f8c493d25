/// Literal geometry for the sample multipatch house.
use shapefile::{Multipatch, NO_DATA, Patch, PointZ};

/// Value of the single "name" attribute attached to the house record
pub const HOUSE_NAME: &str = "house1";

/// Wall outline as a closed quad strip, wound clockwise.
/// Alternates base and eave corners, ending on the starting pair.
pub const WALL_STRIP: &[(f64, f64, f64)] = &[
    (0.0, 0.0, 0.0),
    (0.0, 0.0, 3.0),
    (5.0, 0.0, 0.0),
    (5.0, 0.0, 3.0),
    (5.0, 5.0, 0.0),
    (5.0, 5.0, 3.0),
    (0.0, 5.0, 0.0),
    (0.0, 5.0, 3.0),
    (0.0, 0.0, 0.0),
    (0.0, 0.0, 3.0),
];

/// Roof fan: apex first, then the eave corners in wall order.
pub const ROOF_FAN: &[(f64, f64, f64)] = &[
    (2.5, 2.5, 5.0),
    (0.0, 0.0, 3.0),
    (5.0, 0.0, 3.0),
    (5.0, 5.0, 3.0),
    (0.0, 5.0, 3.0),
    (0.0, 0.0, 3.0),
];

/// Convert (longitude, latitude, elevation) triples to shapefile points.
/// Measures are never supplied, so M carries the format's no-data value.
fn points(coords: &[(f64, f64, f64)]) -> Vec<PointZ> {
    coords
        .iter()
        .map(|&(x, y, z)| PointZ::new(x, y, z, NO_DATA))
        .collect()
}

/// Assemble the two-part house mesh: wall strip, then roof fan.
pub fn house_multipatch() -> Multipatch {
    Multipatch::with_parts(vec![
        Patch::TriangleStrip(points(WALL_STRIP)),
        Patch::TriangleFan(points(ROOF_FAN)),
    ])
}
