use std::{fmt::Display, str::FromStr};

use tracing::{debug, trace};

use crate::{
    constants::{FALSE_EASTING, FALSE_NORTHING, SRID_NORTH_BASE, SRID_SOUTH_BASE},
    latlon::LatLon,
    projections::transverse_mercator::TransverseMercator,
    utility::GeoMath,
    utm::Utm,
    Error, ParseCoord, ThisOrThat,
};

pub const MIN_ZONE: i32 = 1;
pub const MAX_ZONE: i32 = 60;

/// Latitude band letters, south to north, 8° each starting at 80°S. The
/// trailing duplicate `X` covers the 84°N edge of the last (12°) band.
const LATBAND: &str = "CDEFGHJKLMNPQRSTUVWXX";
const SOUTH_BANDS: &str = "CDEFGHJKLM";
const NORTH_BANDS: &str = "NPQRSTUVWX";

const MIN_BAND_LAT: f64 = -80.;
const MAX_BAND_LAT: f64 = 84.;

/// Returns the latitude band letter for `lat`, or `None` outside of
/// `[-80, 84]`.
///
/// # Usage
///
/// ```
/// use utmzone::zone::latitude_band;
///
/// assert_eq!(latitude_band(50.77535), Some('U'));
/// assert_eq!(latitude_band(-80.0), Some('C'));
/// assert_eq!(latitude_band(84.0), Some('X'));
/// assert_eq!(latitude_band(85.0), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn latitude_band(lat: f64) -> Option<char> {
    if !(MIN_BAND_LAT..=MAX_BAND_LAT).contains(&lat) {
        return None;
    }

    let idx = ((lat - MIN_BAND_LAT) / 8.).floor() as usize;
    LATBAND.chars().nth(idx)
}

fn band_is_north(letter: char) -> Option<bool> {
    if NORTH_BANDS.contains(letter) {
        Some(true)
    } else if SOUTH_BANDS.contains(letter) {
        Some(false)
    } else {
        None
    }
}

/// A UTM zone: number, hemisphere and optional latitude band letter.
///
/// The hemisphere flag alone decides whether the false northing applies. The
/// band letter is informational; use [`Zone::is_valid`] to check that the
/// two agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub(crate) number: i32,
    pub(crate) letter: Option<char>,
    #[cfg_attr(feature = "serde", serde(alias = "northp", alias = "is_north"))]
    pub(crate) north: bool,
}

impl Zone {
    /// Creates a zone without a band letter. No range checking is done, so
    /// the result may not be [valid](Zone::is_valid).
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::Zone;
    ///
    /// let zone = Zone::new(18, true);
    /// assert_eq!(zone.number(), 18);
    /// assert_eq!(zone.letter(), None);
    /// assert!(zone.is_valid());
    ///
    /// assert!(!Zone::new(61, true).is_valid());
    /// ```
    pub fn new(number: i32, north: bool) -> Zone {
        Self {
            number,
            letter: None,
            north,
        }
    }

    /// Attaches a latitude band letter (stored upper-case).
    pub fn with_letter(self, letter: char) -> Zone {
        Self {
            letter: Some(letter.to_ascii_uppercase()),
            ..self
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn is_north(&self) -> bool {
        self.north
    }

    /// Longitude of the zone's central meridian in degrees.
    ///
    /// # Example
    /// ```
    /// use utmzone::Zone;
    ///
    /// assert_eq!(Zone::new(1, true).central_meridian(), -177.0);
    /// assert_eq!(Zone::new(32, true).central_meridian(), 9.0);
    /// assert_eq!(Zone::new(60, false).central_meridian(), 177.0);
    /// ```
    pub fn central_meridian(&self) -> f64 {
        f64::from((self.number - 1) * 6 - 180 + 3)
    }

    /// Picks the standard zone for a lat/lon point, including the Norway and
    /// Svalbard exceptions. The band letter is set when `lat` is within
    /// `[-80, 84]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::Zone;
    ///
    /// let zone = Zone::from_latlon(50.77535, 6.08389);
    /// assert_eq!(zone.number(), 32);
    /// assert_eq!(zone.letter(), Some('U'));
    /// assert!(zone.is_north());
    ///
    /// // Svalbard
    /// assert_eq!(Zone::from_latlon(78.2, 15.6).number(), 33);
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_latlon(lat: f64, lon: f64) -> Zone {
        let north = lat >= 0.;
        let lon = lon.deg_normalize();

        let number = if let Some(number) = exception_zone(lat, lon) {
            trace!(lat, lon, number, "zone exception applied");
            number
        } else {
            ((lon + 180.) / 6.).floor() as i32 + 1
        };

        Zone {
            number,
            letter: latitude_band(lat),
            north,
        }
    }

    /// Returns `true` if the number is within `[1, 60]` and any band letter is
    /// a real band that lies in the zone's hemisphere.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::Zone;
    ///
    /// assert!(Zone::new(1, true).with_letter('S').is_valid());
    /// // 'S' is a northern band
    /// assert!(!Zone::new(8, false).with_letter('S').is_valid());
    /// // No band 'O'
    /// assert!(!Zone::new(34, true).with_letter('O').is_valid());
    /// assert!(!Zone::new(0, true).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        if !(MIN_ZONE..=MAX_ZONE).contains(&self.number) {
            return false;
        }

        match self.letter {
            None => true,
            Some(letter) => band_is_north(letter) == Some(self.north),
        }
    }

    /// EPSG code of the WGS84 UTM zone: `326xx` north, `327xx` south.
    ///
    /// # Example
    /// ```
    /// use utmzone::Zone;
    ///
    /// assert_eq!(Zone::new(17, true).srid(), 32617);
    /// assert_eq!(Zone::new(34, false).srid(), 32734);
    /// ```
    pub fn srid(&self) -> i32 {
        self.north.ternary(SRID_NORTH_BASE, SRID_SOUTH_BASE) + self.number
    }

    /// Looks up a zone by EPSG code. The result never carries a band letter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSrid`] if `srid` is not one of
    /// `32601..=32660` or `32701..=32760`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::Zone;
    ///
    /// let zone = Zone::from_srid(32617).unwrap();
    /// assert_eq!(zone, Zone::new(17, true));
    /// assert_eq!(zone.to_string(), "17? (north)");
    ///
    /// assert!(Zone::from_srid(32661).is_err());
    /// assert!(Zone::from_srid(4326).is_err());
    /// ```
    pub fn from_srid(srid: i32) -> Result<Zone, Error> {
        let north = (SRID_NORTH_BASE + MIN_ZONE)..=(SRID_NORTH_BASE + MAX_ZONE);
        let south = (SRID_SOUTH_BASE + MIN_ZONE)..=(SRID_SOUTH_BASE + MAX_ZONE);

        if north.contains(&srid) {
            Ok(Zone::new(srid - SRID_NORTH_BASE, true))
        } else if south.contains(&srid) {
            Ok(Zone::new(srid - SRID_SOUTH_BASE, false))
        } else {
            debug!(srid, "not a UTM zone SRID");
            Err(Error::UnknownSrid(srid))
        }
    }

    /// Parses a zone number followed by a band letter, e.g. `"33T"`. The
    /// letter is case-insensitive and decides the hemisphere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the text is shorter than 2 characters,
    /// the number is not an integer in `[1, 60]` or the last character is not
    /// a band letter.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::Zone;
    ///
    /// let zone = Zone::parse_str("12j").unwrap();
    /// assert_eq!(zone.number(), 12);
    /// assert_eq!(zone.letter(), Some('J'));
    /// assert!(!zone.is_north());
    ///
    /// assert!(Zone::parse_str("5").is_err());
    /// assert!(Zone::parse_str("RR").is_err());
    /// assert!(Zone::parse_str("555R").is_err());
    /// ```
    pub fn parse_str(zone_str: &str) -> Result<Zone, Error> {
        Self::from_str(zone_str)
    }

    /// Projects a lat/lon point into this zone, even if the point lies
    /// outside of it. The false northing follows the zone's hemisphere flag.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::Zone;
    ///
    /// let zone = Zone::new(60, false);
    /// let utm = zone.to_utm(-41.28646, 174.77624);
    ///
    /// assert!((utm.easting() - 313784.305).abs() < 1e-3);
    /// assert!((utm.northing() - 5427057.321).abs() < 1e-3);
    /// ```
    pub fn to_utm(&self, lat: f64, lon: f64) -> Utm {
        let (x, y) = TransverseMercator::utm().from_latlon(self.central_meridian(), lat, lon);

        let northing = self.north.ternary(y, y + FALSE_NORTHING);

        Utm::new(x + FALSE_EASTING, northing)
    }

    /// Converts an easting/northing in this zone back to lat/lon.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmzone::Zone;
    ///
    /// let zone = Zone::from_srid(32632).unwrap();
    /// let coord = zone.to_latlon(289059.493943, 5629111.846925);
    ///
    /// assert!((coord.latitude() - 50.77535).abs() < 1e-6);
    /// assert!((coord.longitude() - 6.008).abs() < 1e-6);
    /// ```
    pub fn to_latlon(&self, easting: f64, northing: f64) -> LatLon {
        let x = easting - FALSE_EASTING;
        let y = self.north.ternary(northing, northing - FALSE_NORTHING);

        TransverseMercator::utm().to_latlon(self.central_meridian(), x, y)
    }
}

// Norway and Svalbard, checked before the regular 6° split.
fn exception_zone(lat: f64, lon: f64) -> Option<i32> {
    if (56. ..=64.).contains(&lat) && (3. ..=12.).contains(&lon) {
        return Some(32);
    }

    if (72. ..=84.).contains(&lat) && lon >= 0. {
        return match lon {
            l if l <= 9. => Some(31),
            l if l <= 21. => Some(33),
            l if l <= 33. => Some(35),
            l if l <= 42. => Some(37),
            _ => None,
        };
    }

    None
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let last = chars.next_back();
        let prefix = chars.as_str();

        let (Some(last), false) = (last, prefix.is_empty()) else {
            debug!(zone = s, "zone string too short");
            return Err(Error::InvalidZone(format!("Too short: {s:?}")));
        };

        let number: i32 = prefix.parse().map_err(|_| {
            debug!(zone = s, "zone number is not an integer");
            Error::InvalidZone(format!("Zone number {prefix:?} is not an integer"))
        })?;

        if !(MIN_ZONE..=MAX_ZONE).contains(&number) {
            debug!(zone = s, number, "zone number out of range");
            return Err(Error::InvalidZone(format!("Zone {number} not in [{MIN_ZONE},{MAX_ZONE}]")));
        }

        let letter = last.to_ascii_uppercase();
        let Some(north) = band_is_north(letter) else {
            debug!(zone = s, %letter, "unknown band letter");
            return Err(Error::InvalidZone(format!("Band letter {last} not in set {}", &LATBAND[..20])));
        };

        Ok(Zone {
            number,
            letter: Some(letter),
            north,
        })
    }
}

impl ParseCoord for Zone {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        Self::from_str(value)
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} ({})",
            self.number,
            self.letter.unwrap_or('?'),
            self.north.ternary("north", "south"),
        )
    }
}
