use std::fmt::Display;

use crate::{latlon::LatLon, zone::Zone};

/// A projected UTM position in meters, false easting and northing included.
///
/// The point carries no zone of its own; pair it with the [`Zone`] it was
/// projected into.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl Utm {
    /// Creates a projected point. Values are taken as-is.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::Utm;
    ///
    /// let coord = Utm::new(583959.959, 4507523.087);
    /// assert_eq!(coord.easting(), 583959.959);
    /// assert_eq!(coord.northing(), 4507523.087);
    /// ```
    pub fn new(easting: f64, northing: f64) -> Utm {
        Self {
            easting,
            northing,
        }
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`Utm`] in `zone` to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::{Utm, Zone};
    ///
    /// let zone = Zone::parse_str("18T").unwrap();
    /// let coord = Utm::new(583959.959, 4507523.087).to_latlon(&zone);
    ///
    /// assert!((coord.latitude() - 40.71435).abs() < 1e-6);
    /// assert!((coord.longitude() - -74.00597).abs() < 1e-6);
    /// ```
    pub fn to_latlon(&self, zone: &Zone) -> LatLon {
        zone.to_latlon(self.easting, self.northing)
    }

    /// Converts from [`LatLon`] to [`Utm`], forcing the point into `zone`.
    pub fn from_latlon(value: &LatLon, zone: &Zone) -> Utm {
        zone.to_utm(value.latitude, value.longitude)
    }
}

impl Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{easting} {northing}",
        )
    }
}
