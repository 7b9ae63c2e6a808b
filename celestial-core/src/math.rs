#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Returns `(sin²x, sin⁴x)` for `x` in radians: the two basis terms of
/// latitude-polynomial rate laws.
#[inline]
pub fn sin2_sin4(angle_rad: f64) -> (f64, f64) {
    let s = libm::sin(angle_rad);
    let sin2 = s * s;
    (sin2, sin2 * sin2)
}
