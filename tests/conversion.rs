use approx::assert_abs_diff_eq;
use utmzone::{LatLon, Utm, Zone};

struct Reference {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    easting: f64,
    northing: f64,
    zone: Zone,
}

fn references() -> Vec<Reference> {
    vec![
        Reference {
            name: "Aachen, Germany",
            latitude: 50.77535,
            longitude: 6.08389,
            easting: 294_408.917,
            northing: 5_628_897.997,
            zone: Zone::new(32, true).with_letter('U'),
        },
        Reference {
            name: "New York, USA",
            latitude: 40.71435,
            longitude: -74.00597,
            easting: 583_959.959,
            northing: 4_507_523.087,
            zone: Zone::new(18, true).with_letter('T'),
        },
        Reference {
            name: "Wellington, New Zealand",
            latitude: -41.28646,
            longitude: 174.77624,
            easting: 313_784.305,
            northing: 5_427_057.321,
            zone: Zone::new(60, false).with_letter('G'),
        },
        Reference {
            name: "Capetown, South Africa",
            latitude: -33.92487,
            longitude: 18.42406,
            easting: 261_877.816,
            northing: 6_243_185.589,
            zone: Zone::new(34, false).with_letter('H'),
        },
        Reference {
            name: "Mendoza, Argentina",
            latitude: -32.89018,
            longitude: -68.84405,
            easting: 514_586.227,
            northing: 6_360_876.824,
            zone: Zone::new(19, false).with_letter('H'),
        },
        Reference {
            name: "Fairbanks, Alaska, USA",
            latitude: 64.83778,
            longitude: -147.71639,
            easting: 466_013.272,
            northing: 7_190_568.,
            zone: Zone::new(6, true).with_letter('W'),
        },
        Reference {
            name: "Ben Nevis, Scotland, UK",
            latitude: 56.79680,
            longitude: -5.00601,
            easting: 377_485.765,
            northing: 6_296_561.854,
            zone: Zone::new(30, true).with_letter('V'),
        },
    ]
}

#[test]
fn zone_for_reference_points() {
    for r in references() {
        assert_eq!(Zone::from_latlon(r.latitude, r.longitude), r.zone, "{}", r.name);
    }
}

#[test]
fn latlon_to_utm() {
    for r in references() {
        let (utm, zone) = utmzone::to_utm(r.latitude, r.longitude);

        assert_eq!(zone, r.zone, "{}", r.name);
        assert_abs_diff_eq!(utm.easting(), r.easting, epsilon = 1e-3);
        assert_abs_diff_eq!(utm.northing(), r.northing, epsilon = 1e-3);
    }
}

#[test]
fn utm_to_latlon() {
    for r in references() {
        let coord = Utm::new(r.easting, r.northing).to_latlon(&r.zone);

        assert_abs_diff_eq!(coord.latitude(), r.latitude, epsilon = 1e-3);
        assert_abs_diff_eq!(coord.longitude(), r.longitude, epsilon = 1e-3);
    }
}

#[test]
fn hemisphere_flag_decides_false_northing() {
    // A northern band letter on a southern zone is invalid, but the flag still wins
    let stale = Zone::new(60, false).with_letter('N');
    assert!(!stale.is_valid());

    let utm = stale.to_utm(-41.28646, 174.77624);
    assert_abs_diff_eq!(utm.northing(), 5_427_057.321, epsilon = 1e-3);

    let coord = stale.to_latlon(utm.easting(), utm.northing());
    assert_abs_diff_eq!(coord.latitude(), -41.28646, epsilon = 1e-6);
}

#[test]
fn forcing_across_antimeridian() {
    // Point just west of the antimeridian forced into zone 1
    let zone = Zone::parse_str("1N").unwrap();
    let utm = zone.to_utm(0., 179.9);
    let coord = zone.to_latlon(utm.easting(), utm.northing());
    assert!((179.9 - coord.longitude()).abs() < 1e-5);

    // Point just east of the antimeridian forced into zone 60
    let zone = Zone::parse_str("60N").unwrap();
    let utm = zone.to_utm(0., -179.9);
    let coord = zone.to_latlon(utm.easting(), utm.northing());
    assert!((-179.9 - coord.longitude()).abs() < 1e-5);
}

#[test]
fn forced_neighbour_zone_stays_on_the_near_side() {
    // Once wrapped, 179.9°E lies 3.1° west of zone 1's central meridian
    let utm = Zone::new(1, true).to_utm(0., 179.9);
    assert!(utm.easting() < 500_000.);
    assert!(utm.easting() > 100_000.);

    let utm = Zone::new(60, true).to_utm(0., -179.9);
    assert!(utm.easting() > 500_000.);
    assert!(utm.easting() < 900_000.);
}

#[test]
fn longitude_outside_standard_range() {
    let (expected, zone) = utmzone::to_utm(40.71435, -74.00597);
    let (utm, wrapped_zone) = utmzone::to_utm(40.71435, -74.00597 + 360.);

    assert_eq!(wrapped_zone, zone);
    assert_abs_diff_eq!(utm.easting(), expected.easting(), epsilon = 1e-6);
    assert_abs_diff_eq!(utm.northing(), expected.northing(), epsilon = 1e-6);

    let coord = zone.to_latlon(utm.easting(), utm.northing());
    assert_abs_diff_eq!(coord.longitude(), -74.00597, epsilon = 1e-6);
}

#[test]
fn latlon_methods_match_free_functions() {
    let coord = LatLon::create(-33.92487, 18.42406).unwrap();
    let (utm, zone) = coord.to_utm();

    assert_eq!(coord.zone(), zone);
    assert_eq!(Utm::from_latlon(&coord, &zone), utm);

    let back = LatLon::from_utm(&utm, &zone);
    assert!(coord.haversine(&back) < 1e-2);
}
