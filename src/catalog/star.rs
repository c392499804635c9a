use nalgebra::Vector3;
use serde_derive::Serialize;

/// name prefix marking generated background points, which are not real stars
pub const SYNTHETIC_PREFIX: &str = "BG-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialPoint {
    /// the catalog name of the star, or `BG-<n>` for a background point
    pub name: String,
    /// right ascension in hours, [0, 24)
    pub ra_hours: f64,
    /// declination in degrees, [-90, 90]
    pub dec_degrees: f64,
    /// the visual brightness of the star in magnitudes, smaller is brighter
    pub magnitude: f64,
}

impl CelestialPoint {
    pub fn new(name: impl Into<String>, ra_hours: f64, dec_degrees: f64, magnitude: f64) -> Self {
        CelestialPoint {
            name: name.into(),
            ra_hours,
            dec_degrees,
            magnitude,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.name.starts_with(SYNTHETIC_PREFIX)
    }

    /// right ascension converted from hours to radians (1h = 15 deg)
    pub fn ra_radians(&self) -> f64 {
        (self.ra_hours * 15.0).to_radians()
    }

    pub fn dec_radians(&self) -> f64 {
        self.dec_degrees.to_radians()
    }

    /// the x, y, z direction of the star on the unit celestial sphere
    pub fn unit_vector(&self) -> Vector3<f64> {
        let (ra, dec) = (self.ra_radians(), self.dec_radians());
        Vector3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin())
    }
}

/// returns the cosine of the angle between two points
pub fn cos_angle_between(a: &CelestialPoint, b: &CelestialPoint) -> f64 {
    // dot product
    a.unit_vector().dot(&b.unit_vector())
}

/// great-circle distance between two points in degrees, via the spherical law of cosines
pub fn angular_separation_deg(a: &CelestialPoint, b: &CelestialPoint) -> f64 {
    let (dec1, dec2) = (a.dec_radians(), b.dec_radians());
    let cos_angle =
        dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (a.ra_radians() - b.ra_radians()).cos();
    // rounding can push the cosine of coincident points past 1, and leaves sub-arcsecond
    // noise near 0 degrees where acos is steep
    cos_angle.clamp(-1.0, 1.0).acos().to_degrees()
}
