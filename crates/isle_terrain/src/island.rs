//! Radial island falloff.

/// Blend a raw height with a radial falloff centred on the map.
///
/// The tile coordinate is mapped into a `[-0.5, 0.5]` square, its distance
/// from the centre is scaled into `[0, ~1.41]` and raised to
/// `island_exponent`, then `(1 - d + height) / 2` is returned. The centre
/// tile gains half a unit over the corners' deficit, which produces a
/// roughly circular landmass whatever the noise field does.
#[must_use]
pub fn island_height(map_size: i32, height: f64, x: i32, y: i32, island_exponent: f64) -> f64 {
    let size = f64::from(map_size);
    let dx = f64::from(x) / size - 0.5;
    let dy = f64::from(y) / size - 0.5;
    let d = (dx * dx + dy * dy).sqrt() * 2.0;
    let d = d.powf(island_exponent);
    (1.0 - d + height) / 2.0
}
