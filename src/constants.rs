// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// First eccentricity squared, truncated to the precision the series were fitted with
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_E2: f64 = 0.00669438;
pub(crate) const WGS84_E4: f64 = WGS84_E2 * WGS84_E2;
pub(crate) const WGS84_E6: f64 = WGS84_E4 * WGS84_E2;
// Second eccentricity squared
pub(crate) const WGS84_EP2: f64 = WGS84_E2 / (1. - WGS84_E2);

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

pub(crate) const FALSE_EASTING: f64 = 500_000.;
// Only applied in the southern hemisphere
pub(crate) const FALSE_NORTHING: f64 = 10_000_000.;

pub(crate) const SRID_NORTH_BASE: i32 = 32_600;
pub(crate) const SRID_SOUTH_BASE: i32 = 32_700;
