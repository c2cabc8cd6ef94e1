// Math utilities and helper functions

/// Clamp a value between min and max
///
/// Unlike `f32::clamp` this never panics when `min > max`; the lower bound
/// wins, which is what a sprite wider than the viewport needs.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Convert an 8-bit sRGB channel to a linear channel in [0, 1]
pub fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_prefers_min() {
        // A 300px wide frame in a 200px viewport: [150, 50]
        assert_eq!(clamp(100.0, 150.0, 50.0), 150.0);
        assert_eq!(clamp(10.0, 150.0, 50.0), 150.0);
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_relative_eq!(srgb_to_linear(0), 0.0);
        assert_relative_eq!(srgb_to_linear(255), 1.0);
    }

    #[test]
    fn test_srgb_to_linear_midtone() {
        // 0xb7 = 183 -> ~0.473 linear
        assert_relative_eq!(srgb_to_linear(0xb7), 0.4735, epsilon = 1e-3);
    }
}
