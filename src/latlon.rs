use std::fmt::Display;

use crate::{utm::Utm, zone::Zone, Error};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Representation of a WGS84 Latitude/Longitude point in degrees. Can be
/// converted to/from [`Utm`] given a [`Zone`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First
    /// checks if the values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be finite. Any value is accepted since conversions
    ///   normalize it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::LatLon;
    ///
    /// let coord = LatLon::create(40.71435, -74.00597);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 40.71435);
    /// assert_eq!(coord.longitude(), -74.00597);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, f64::NAN);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !lon.is_finite() {
            Err(Error::InvalidCoord(format!("Longitude {lon} is not a finite number.")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere
    /// (latitude `>= 0`).
    ///
    /// # Example
    ///
    /// ```
    /// use utmzone::LatLon;
    ///
    /// let coord = LatLon::create(40.71435, -74.00597).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = LatLon::create(-41.28646, 174.77624).unwrap();
    /// assert!(!coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Standard UTM zone of this point.
    pub fn zone(&self) -> Zone {
        Zone::from_latlon(self.latitude, self.longitude)
    }

    /// Converts to [`Utm`] in the point's standard zone, returning the zone
    /// alongside.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::LatLon;
    ///
    /// let coord = LatLon::create(50.77535, 6.08389).unwrap();
    /// let (utm, zone) = coord.to_utm();
    ///
    /// assert_eq!(zone.to_string(), "32U (north)");
    /// assert!((utm.easting() - 294408.917).abs() < 1e-3);
    /// assert!((utm.northing() - 5628897.997).abs() < 1e-3);
    /// ```
    pub fn to_utm(&self) -> (Utm, Zone) {
        crate::to_utm(self.latitude, self.longitude)
    }

    /// Converts from [`Utm`] in `zone` to [`LatLon`]
    pub fn from_utm(value: &Utm, zone: &Zone) -> LatLon {
        value.to_latlon(zone)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
