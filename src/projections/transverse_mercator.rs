use lazy_static::lazy_static;

use crate::{
    constants::{UTM_K0, WGS84_A, WGS84_E2, WGS84_E4, WGS84_E6, WGS84_EP2},
    latlon::LatLon,
    utility::GeoMath,
};

// ================================
// Transverse Mercator Constants
// ================================

/// Truncated series coefficients for the WGS84 ellipsoid.
///
/// `m` holds the meridian arc terms M1..M4 (powers of e²), `p` holds the
/// footprint latitude terms P2..P5 (powers of the third flattening).
#[derive(Debug)]
pub(crate) struct SeriesCoefficients {
    pub m: [f64; 4],
    pub p: [f64; 4],
}

impl SeriesCoefficients {
    #[allow(clippy::similar_names)]
    fn wgs84() -> SeriesCoefficients {
        let (e, e2, e3) = (WGS84_E2, WGS84_E4, WGS84_E6);

        let m = [
            1. - e / 4. - 3. * e2 / 64. - 5. * e3 / 256.,
            3. * e / 8. + 3. * e2 / 32. + 45. * e3 / 1024.,
            15. * e2 / 256. + 45. * e3 / 1024.,
            35. * e3 / 3072.,
        ];

        let sqrt_e = (1. - e).sqrt();
        let n = (1. - sqrt_e) / (1. + sqrt_e);
        let (n2, n3, n4, n5) = (n.powi(2), n.powi(3), n.powi(4), n.powi(5));

        let p = [
            3. / 2. * n - 27. / 32. * n3 + 269. / 512. * n5,
            21. / 16. * n2 - 55. / 32. * n4,
            151. / 96. * n3 - 417. / 128. * n5,
            1097. / 512. * n4,
        ];

        Self { m, p }
    }
}

lazy_static! {
    static ref COEFFS: SeriesCoefficients = SeriesCoefficients::wgs84();
}

/// Closed-form transverse Mercator series used for UTM.
///
/// Inputs and outputs exclude the false easting and northing, those are
/// applied by the zone.
pub(crate) struct TransverseMercator {
    a: f64,
    k0: f64,
    coeffs: &'static SeriesCoefficients,
}

impl TransverseMercator {
    pub fn utm() -> TransverseMercator {
        Self {
            a: WGS84_A,
            k0: UTM_K0,
            coeffs: &COEFFS,
        }
    }

    /// Meridian arc length from the equator to `lat` (radians).
    fn meridian_arc(&self, lat: f64) -> f64 {
        let m = &self.coeffs.m;

        self.a * (
            m[0] * lat
            - m[1] * (2. * lat).sin()
            + m[2] * (4. * lat).sin()
            - m[3] * (6. * lat).sin()
        )
    }

    /// Latitude whose meridian arc equals `arc`, via the footprint series.
    fn footprint_latitude(&self, arc: f64) -> f64 {
        let p = &self.coeffs.p;
        let mu = arc / (self.a * self.coeffs.m[0]);

        mu
            + p[0] * (2. * mu).sin()
            + p[1] * (4. * mu).sin()
            + p[2] * (6. * mu).sin()
            + p[3] * (8. * mu).sin()
    }

    /// Projects `lat`/`lon` (degrees) onto the cylinder tangent at
    /// `lon0` (degrees). Returns `(x, y)` in meters.
    #[allow(clippy::many_single_char_names)]
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let lat_rad = lat.to_radians();
        let dlon = (lon.to_radians() - lon0.to_radians()).ang_normalize();

        let (lat_sin, lat_cos) = lat_rad.sin_cos();
        let t = lat_sin / lat_cos;
        let t2 = t * t;
        let t4 = t2 * t2;

        let n = self.a / (1. - WGS84_E2 * lat_sin * lat_sin).sqrt();
        let c = WGS84_EP2 * lat_cos * lat_cos;
        let a = lat_cos * dlon;

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let m = self.meridian_arc(lat_rad);

        let x = self.k0 * n * (
            a
            + a3 / 6. * (1. - t2 + c)
            + a5 / 120. * (5. - 18. * t2 + t4 + 72. * c - 58. * WGS84_EP2)
        );

        let y = self.k0 * (
            m + n * t * (
                a2 / 2.
                + a4 / 24. * (5. - t2 + 9. * c + 4. * c * c)
                + a6 / 720. * (61. - 58. * t2 + t4 + 600. * c - 330. * WGS84_EP2)
            )
        );

        (x, y)
    }

    /// Inverse of [`TransverseMercator::from_latlon`]. The returned
    /// longitude is normalized into `[-180, 180)`.
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    pub fn to_latlon(&self, lon0: f64, x: f64, y: f64) -> LatLon {
        let phi1 = self.footprint_latitude(y / self.k0);

        let (p_sin, p_cos) = phi1.sin_cos();
        let p_sin2 = p_sin * p_sin;
        let p_tan = p_sin / p_cos;
        let t1 = p_tan * p_tan;
        let t1_2 = t1 * t1;

        let ep_sin = 1. - WGS84_E2 * p_sin2;
        let n1 = self.a / ep_sin.sqrt();
        let r1 = (1. - WGS84_E2) / ep_sin;
        let c1 = WGS84_EP2 * p_cos * p_cos;
        let c1_2 = c1 * c1;

        let d = x / (n1 * self.k0);
        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        // Sixth order term is applied outside the tan/r1 factor
        let lat = phi1
            - (p_tan / r1) * (
                d2 / 2.
                - d4 / 24. * (5. + 3. * t1 + 10. * c1 - 4. * c1_2 - 9. * WGS84_EP2)
            )
            + d6 / 720. * (61. + 90. * t1 + 298. * c1 + 45. * t1_2 - 252. * WGS84_EP2 - 3. * c1_2);

        let lon_offset = (
            d
            - d3 / 6. * (1. + 2. * t1 + c1)
            + d5 / 120. * (5. - 2. * c1 + 28. * t1 - 3. * c1_2 + 8. * WGS84_EP2 + 24. * t1_2)
        ) / p_cos;

        let lon = (lon_offset + lon0.to_radians()).ang_normalize();

        LatLon::new(lat.to_degrees(), lon.to_degrees())
    }
}
