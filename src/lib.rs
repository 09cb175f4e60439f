#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod latlon;
pub mod utm;
pub mod utility;
pub mod zone;

pub use latlon::LatLon;
pub use utm::Utm;
pub use zone::Zone;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("UTM zone string is invalid: {0}")]
    InvalidZone(String),
    #[error("SRID {0} is not a WGS84 UTM zone code")]
    UnknownSrid(i32),
}

pub trait ParseCoord {
    /// Parses a value from its textual representation.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] describing why the text was rejected.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// Forwards the error of the target type's parser.
///
/// # Usage
///
/// ```
/// use utmzone::Zone;
///
/// let zone: Zone = utmzone::from_str("33T").unwrap();
/// assert_eq!(zone.number(), 33);
/// assert!(zone.is_north());
///
/// assert!(utmzone::from_str::<_, Zone>("61T").is_err());
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Converts a lat/lon point into UTM, picking the standard zone for it.
///
/// # Usage
///
/// ```
/// let (utm, zone) = utmzone::to_utm(40.71435, -74.00597);
///
/// assert_eq!(zone.number(), 18);
/// assert!(zone.is_north());
/// assert!((utm.easting() - 583959.959).abs() < 1e-3);
/// assert!((utm.northing() - 4507523.087).abs() < 1e-3);
/// ```
pub fn to_utm(lat: f64, lon: f64) -> (Utm, Zone) {
    let zone = Zone::from_latlon(lat, lon);
    (zone.to_utm(lat, lon), zone)
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
