use utmzone::{Error, Zone};

#[test]
fn parse_zone() {
    let cases = [
        ("45N", Some(Zone::new(45, true).with_letter('N'))),
        ("12J", Some(Zone::new(12, false).with_letter('J'))),
        ("3G", Some(Zone::new(3, false).with_letter('G'))),
        ("5R", Some(Zone::new(5, true).with_letter('R'))),
        ("33t", Some(Zone::new(33, true).with_letter('T'))),
        ("60X", Some(Zone::new(60, true).with_letter('X'))),
        ("1C", Some(Zone::new(1, false).with_letter('C'))),
        ("5", None),
        ("", None),
        ("RR", None),
        ("555R", None),
        ("0N", None),
        ("61N", None),
        ("-5N", None),
        ("33O", None),
        ("33I", None),
        ("33A", None),
        ("3 3T", None),
    ];

    for (input, expected) in cases {
        let parsed = Zone::parse_str(input);
        match expected {
            Some(zone) => assert_eq!(parsed, Ok(zone), "{input}"),
            None => assert!(matches!(parsed, Err(Error::InvalidZone(_))), "{input}: {parsed:?}"),
        }
    }
}

#[test]
fn parse_through_from_str() {
    let zone: Zone = "18T".parse().unwrap();
    assert_eq!(zone, Zone::new(18, true).with_letter('T'));

    let zone: Zone = utmzone::from_str("34H").unwrap();
    assert_eq!(zone, Zone::new(34, false).with_letter('H'));
}

#[test]
fn zone_validity() {
    let cases = [
        (Zone::new(1, true).with_letter('S'), true),
        (Zone::new(8, false).with_letter('S'), false),
        (Zone::new(70, true).with_letter('S'), false),
        (Zone::new(34, true).with_letter('O'), false),
        (Zone::new(0, true), false),
        (Zone::new(61, false), false),
        (Zone::new(60, false), true),
        (Zone::new(12, false).with_letter('j'), true),
        (Zone::new(12, true).with_letter('M'), false),
    ];

    for (zone, valid) in cases {
        assert_eq!(zone.is_valid(), valid, "{zone}");
    }
}

#[test]
fn srid_lookup() {
    let cases = [
        (32610, Zone::new(10, true)),
        (32659, Zone::new(59, true)),
        (32734, Zone::new(34, false)),
        (32701, Zone::new(1, false)),
        (32660, Zone::new(60, true)),
        (32760, Zone::new(60, false)),
    ];

    for (srid, zone) in cases {
        assert_eq!(Zone::from_srid(srid), Ok(zone), "{srid}");
        assert_eq!(zone.srid(), srid);
    }
}

#[test]
fn unknown_srid() {
    for srid in [0, 4326, 32600, 32661, 32700, 32761, i32::MIN, i32::MAX] {
        assert_eq!(Zone::from_srid(srid), Err(Error::UnknownSrid(srid)));
    }
}

#[test]
fn srid_round_trip_drops_letter() {
    for number in 1..=60 {
        for (north, letter) in [(true, 'N'), (false, 'M')] {
            let zone = Zone::new(number, north).with_letter(letter);
            assert_eq!(Zone::from_srid(zone.srid()), Ok(Zone::new(number, north)));
        }
    }
}

#[test]
fn format_zone() {
    assert_eq!(Zone::parse_str("32U").unwrap().to_string(), "32U (north)");
    assert_eq!(Zone::parse_str("60G").unwrap().to_string(), "60G (south)");
    assert_eq!(Zone::new(17, true).to_string(), "17? (north)");
    assert_eq!(Zone::new(17, false).to_string(), "17? (south)");
    // The hemisphere shown always comes from the flag
    assert_eq!(Zone::new(8, false).with_letter('S').to_string(), "8S (south)");
}

#[test]
fn standard_zone() {
    let z = Zone::from_latlon(0., -180.);
    assert_eq!((z.number(), z.letter(), z.is_north()), (1, Some('N'), true));

    let z = Zone::from_latlon(0., 180.);
    assert_eq!(z.number(), 1);

    let z = Zone::from_latlon(-0.5, 179.99);
    assert_eq!((z.number(), z.letter(), z.is_north()), (60, Some('M'), false));

    assert_eq!(Zone::from_latlon(10., 5.9).number(), 31);
    assert_eq!(Zone::from_latlon(10., 6.).number(), 32);
}

#[test]
fn norway_exception() {
    assert_eq!(Zone::from_latlon(60., 5.).number(), 32);
    assert_eq!(Zone::from_latlon(56., 3.).number(), 32);
    assert_eq!(Zone::from_latlon(64., 12.).number(), 32);
    assert_eq!(Zone::from_latlon(60., 2.9).number(), 31);
    assert_eq!(Zone::from_latlon(55.9, 5.).number(), 31);
    assert_eq!(Zone::from_latlon(64.1, 5.).number(), 31);
}

#[test]
fn svalbard_exception() {
    assert_eq!(Zone::from_latlon(78., 0.).number(), 31);
    assert_eq!(Zone::from_latlon(78., 9.).number(), 31);
    assert_eq!(Zone::from_latlon(78., 9.5).number(), 33);
    assert_eq!(Zone::from_latlon(78., 21.).number(), 33);
    assert_eq!(Zone::from_latlon(78., 25.).number(), 35);
    assert_eq!(Zone::from_latlon(78., 33.).number(), 35);
    assert_eq!(Zone::from_latlon(78., 40.).number(), 37);
    assert_eq!(Zone::from_latlon(78., 42.5).number(), 38);
    assert_eq!(Zone::from_latlon(78., -1.).number(), 30);
    assert_eq!(Zone::from_latlon(71.9, 9.5).number(), 32);
}

#[test]
fn band_letters() {
    assert_eq!(Zone::from_latlon(-80., 0.).letter(), Some('C'));
    assert_eq!(Zone::from_latlon(-80.1, 0.).letter(), None);
    assert_eq!(Zone::from_latlon(-0.1, 0.).letter(), Some('M'));
    assert_eq!(Zone::from_latlon(0., 0.).letter(), Some('N'));
    assert_eq!(Zone::from_latlon(72., 0.).letter(), Some('X'));
    assert_eq!(Zone::from_latlon(84., 0.).letter(), Some('X'));
    assert_eq!(Zone::from_latlon(84.1, 0.).letter(), None);
}

#[test]
fn zones_from_latlon_are_valid() {
    let mut lat = -80.;
    while lat <= 84. {
        let mut lon = -180.;
        while lon < 180. {
            let zone = Zone::from_latlon(lat, lon);
            assert!(zone.is_valid(), "{lat} {lon} -> {zone}");
            lon += 1.5;
        }
        lat += 1.;
    }
}
