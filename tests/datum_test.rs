// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

extern crate epsg_geodesy;

use epsg_geodesy::datum::{self, ED50, ETRS89, NAD27, NAD83, OSGB36, WGS84};
use epsg_geodesy::ellipsoid::{AIRY_1830, CLARKE_1866, GRS_1980, INTERNATIONAL_1924, WGS_84};
use epsg_geodesy::{ArcSeconds, Datum, Ellipsoid, HelmertParameters, Metres};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_create_helmert_parameters() {
    let params = HelmertParameters::new(
        Metres(1.0),
        Metres(2.0),
        Metres(3.0),
        ArcSeconds(0.1),
        ArcSeconds(0.2),
        ArcSeconds(0.3),
        0.5,
    );
    assert_eq!(Metres(1.0), params.tx());
    assert_eq!(Metres(2.0), params.ty());
    assert_eq!(Metres(3.0), params.tz());
    assert_eq!(ArcSeconds(0.1), params.rx());
    assert_eq!(ArcSeconds(0.2), params.ry());
    assert_eq!(ArcSeconds(0.3), params.rz());
    assert_eq!(0.5, params.s());
}

#[test]
fn test_helmert_parameters_negative_values() {
    let params = HelmertParameters::new(
        Metres(-87.0),
        Metres(-98.0),
        Metres(-121.0),
        ArcSeconds(-0.1),
        ArcSeconds(-0.2),
        ArcSeconds(-0.3),
        -20.0,
    );
    assert_eq!(Metres(-87.0), params.tx());
    assert_eq!(Metres(-98.0), params.ty());
    assert_eq!(Metres(-121.0), params.tz());
    assert_eq!(ArcSeconds(-0.1), params.rx());
    assert_eq!(ArcSeconds(-0.2), params.ry());
    assert_eq!(ArcSeconds(-0.3), params.rz());
    assert_eq!(-20.0, params.s());
}

#[test]
fn test_helmert_parameters_equality() {
    let p1 = HelmertParameters::new(
        Metres(1.0),
        Metres(2.0),
        Metres(3.0),
        ArcSeconds(0.1),
        ArcSeconds(0.2),
        ArcSeconds(0.3),
        0.5,
    );
    let p2 = HelmertParameters::new(
        Metres(1.0),
        Metres(2.0),
        Metres(3.0),
        ArcSeconds(0.1),
        ArcSeconds(0.2),
        ArcSeconds(0.3),
        0.5,
    );
    let p3 = HelmertParameters::new(
        Metres(9.0),
        Metres(2.0),
        Metres(3.0),
        ArcSeconds(0.1),
        ArcSeconds(0.2),
        ArcSeconds(0.3),
        0.5,
    );
    assert_eq!(p1, p2);
    assert_ne!(p1, p3);
}

#[test]
fn test_helmert_parameters_hash() {
    let p1 = HelmertParameters::new(
        Metres(1.0),
        Metres(2.0),
        Metres(3.0),
        ArcSeconds(0.1),
        ArcSeconds(0.2),
        ArcSeconds(0.3),
        0.5,
    );
    let p2 = p1;
    assert_eq!(hash_of(&p1), hash_of(&p2));

    let mut params = HashSet::new();
    params.insert(p1);
    params.insert(p2);
    assert_eq!(1, params.len());
}

#[test]
fn test_create_datum() {
    let datum = Datum::new("Test Datum", 1234, Ellipsoid::clone(&WGS_84), None, None);
    assert_eq!("Test Datum", datum.name());
    assert_eq!(1234, datum.code());
    assert_eq!(&*WGS_84, datum.ellipsoid());
    assert!(datum.to_wgs84().is_none());
    assert!(datum.remarks().is_none());
}

#[test]
fn test_create_datum_with_helmert_parameters() {
    let helmert = HelmertParameters::new(
        Metres(446.448),
        Metres(-125.157),
        Metres(542.060),
        ArcSeconds(0.1502),
        ArcSeconds(0.2470),
        ArcSeconds(0.8421),
        -20.4894,
    );
    let datum = Datum::new(
        "Test",
        1234,
        Ellipsoid::clone(&AIRY_1830),
        Some(helmert),
        None,
    );
    assert_eq!(Some(&helmert), datum.to_wgs84());
}

#[test]
fn test_create_datum_with_remarks() {
    let datum = Datum::new(
        "Test",
        1234,
        Ellipsoid::clone(&WGS_84),
        None,
        Some("Test remarks for this datum"),
    );
    assert_eq!(Some("Test remarks for this datum"), datum.remarks());
}

#[test]
fn test_datum_equality() {
    let d1 = Datum::new("Test", 1234, Ellipsoid::clone(&WGS_84), None, None);
    let d2 = Datum::new("Test", 1234, Ellipsoid::clone(&WGS_84), None, None);
    let d3 = Datum::new("Other", 5678, Ellipsoid::clone(&WGS_84), None, None);
    let d4 = Datum::new("Test", 1234, Ellipsoid::clone(&GRS_1980), None, None);
    assert_eq!(d1, d2);
    assert_ne!(d1, d3);
    assert_ne!(d1, d4);
}

#[test]
fn test_datum_hash() {
    let d1 = Datum::new("Test", 1234, Ellipsoid::clone(&WGS_84), None, None);
    let d2 = Datum::new("Test", 1234, Ellipsoid::clone(&WGS_84), None, None);
    assert_eq!(hash_of(&d1), hash_of(&d2));

    let mut datums = HashSet::new();
    datums.insert(d1);
    datums.insert(d2);
    assert_eq!(1, datums.len());
}

#[test]
fn test_datum_urn() {
    let datum = Datum::new("Test", 6326, Ellipsoid::clone(&WGS_84), None, None);
    assert_eq!("urn:ogc:def:datum:EPSG::6326", datum.urn());

    let custom = Datum::new("Custom", 9999, Ellipsoid::clone(&WGS_84), None, None);
    assert_eq!("urn:ogc:def:datum:EPSG::9999", custom.urn());

    assert_eq!("urn:ogc:def:datum:EPSG::6326", WGS84.urn());
}

#[test]
fn test_wgs84_attributes() {
    assert_eq!("World Geodetic System 1984 ensemble", WGS84.name());
    assert_eq!(6326, WGS84.code());
    assert_eq!(&*WGS_84, WGS84.ellipsoid());
    assert_eq!(Some(&HelmertParameters::IDENTITY), WGS84.to_wgs84());
    assert!(WGS84.remarks().is_some());
}

#[test]
fn test_etrs89_attributes() {
    assert_eq!(
        "European Terrestrial Reference System 1989 ensemble",
        ETRS89.name()
    );
    assert_eq!(6258, ETRS89.code());
    assert_eq!(&*GRS_1980, ETRS89.ellipsoid());
    assert_eq!(Some(&HelmertParameters::IDENTITY), ETRS89.to_wgs84());
    assert!(ETRS89.remarks().is_some());
}

#[test]
fn test_nad83_attributes() {
    assert_eq!("North American Datum 1983", NAD83.name());
    assert_eq!(6269, NAD83.code());
    assert_eq!(&*GRS_1980, NAD83.ellipsoid());
    assert_eq!(Some(&HelmertParameters::IDENTITY), NAD83.to_wgs84());
    assert!(NAD83.remarks().is_some());
}

#[test]
fn test_nad27_attributes() {
    assert_eq!("North American Datum 1927", NAD27.name());
    assert_eq!(6267, NAD27.code());
    assert_eq!(&*CLARKE_1866, NAD27.ellipsoid());
    assert!(NAD27.remarks().is_some());

    let helmert = NAD27
        .to_wgs84()
        .expect("NAD27 publishes a transformation to WGS 84");
    assert_eq!(Metres(-8.0), helmert.tx());
    assert_eq!(Metres(160.0), helmert.ty());
    assert_eq!(Metres(176.0), helmert.tz());
    assert_eq!(ArcSeconds(0.0), helmert.rx());
    assert_eq!(ArcSeconds(0.0), helmert.ry());
    assert_eq!(ArcSeconds(0.0), helmert.rz());
    assert_eq!(0.0, helmert.s());
}

#[test]
fn test_ed50_attributes() {
    assert_eq!("European Datum 1950", ED50.name());
    assert_eq!(6230, ED50.code());
    assert_eq!(&*INTERNATIONAL_1924, ED50.ellipsoid());

    let helmert = ED50
        .to_wgs84()
        .expect("ED50 publishes a transformation to WGS 84");
    assert_eq!(Metres(-87.0), helmert.tx());
    assert_eq!(Metres(-98.0), helmert.ty());
    assert_eq!(Metres(-121.0), helmert.tz());
    assert_eq!(ArcSeconds(0.0), helmert.rx());
    assert_eq!(ArcSeconds(0.0), helmert.ry());
    assert_eq!(ArcSeconds(0.0), helmert.rz());
    assert_eq!(0.0, helmert.s());
}

#[test]
fn test_osgb36_attributes() {
    assert_eq!("Ordnance Survey of Great Britain 1936", OSGB36.name());
    assert_eq!(6277, OSGB36.code());
    assert_eq!(&*AIRY_1830, OSGB36.ellipsoid());
    assert!(OSGB36.remarks().is_some());

    let helmert = OSGB36
        .to_wgs84()
        .expect("OSGB36 publishes a transformation to WGS 84");
    assert_eq!(Metres(446.448), helmert.tx());
    assert_eq!(Metres(-125.157), helmert.ty());
    assert_eq!(Metres(542.060), helmert.tz());
    assert_eq!(ArcSeconds(0.1502), helmert.rx());
    assert_eq!(ArcSeconds(0.2470), helmert.ry());
    assert_eq!(ArcSeconds(0.8421), helmert.rz());
    assert_eq!(-20.4894, helmert.s());
}

#[test]
fn test_builtins_have_unique_codes() {
    let codes: HashSet<u32> = datum::builtins().into_iter().map(Datum::code).collect();
    assert_eq!(6, codes.len());
}

#[test]
fn test_builtins_have_wgs84_transformations() {
    for datum in datum::builtins() {
        assert!(datum.to_wgs84().is_some());
        assert!(datum.ellipsoid().a().0 > 0.0);
    }
}

#[test]
fn test_etrs89_and_nad83_share_grs_1980() {
    assert_eq!(ETRS89.ellipsoid(), NAD83.ellipsoid());
    assert_eq!(7019, ETRS89.ellipsoid().code());
    // The datums themselves are distinct values.
    assert_ne!(*ETRS89, *NAD83);
}

#[test]
fn test_ellipsoid_accessible_through_datum() {
    assert_eq!(Metres(6_378_137.0), WGS84.ellipsoid().a());
    assert!(OSGB36.ellipsoid().b().0 < OSGB36.ellipsoid().a().0);
}

#[test]
fn test_from_epsg() {
    for datum in datum::builtins() {
        assert_eq!(Some(datum), datum::from_epsg(datum.code()));
    }
    assert!(datum::from_epsg(1234).is_none());
}

#[test]
fn test_default() {
    assert_eq!(*WGS84, Datum::default());
}
