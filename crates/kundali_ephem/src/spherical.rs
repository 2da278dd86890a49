//! Cartesian -> spherical conversion.

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees [0, 360), measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees [-90, 90], elevation above the x-y plane.
    pub lat_deg: f64,
    /// Distance from the origin, in the input's units.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    SphericalCoords {
        lon_deg: y.atan2(x).to_degrees().rem_euclid(360.0),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_axes() {
        let s = cartesian_to_spherical(&[0.0, 2.0, 0.0]);
        assert!((s.lon_deg - 90.0).abs() < 1e-12);
        assert!(s.lat_deg.abs() < 1e-12);
        assert!((s.distance - 2.0).abs() < 1e-12);

        let s = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((s.lon_deg - 270.0).abs() < 1e-12);

        let s = cartesian_to_spherical(&[0.0, 0.0, 1.0]);
        assert!((s.lat_deg - 90.0).abs() < 1e-12);
    }

    #[test]
    fn origin_is_zero() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance, 0.0);
    }
}
