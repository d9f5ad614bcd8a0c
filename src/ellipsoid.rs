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

//! The ellipsoid module contains types and functions for defining a reference
//! ellipsoid given its Semimajor axis (the equivalent of its radius) and
//! flattening ratio, together with the standard EPSG ellipsoids.

#![allow(clippy::suboptimal_flops)]

use icao_units::si::Metres;
use once_cell::sync::Lazy;
use std::hash::{Hash, Hasher};

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use epsg_geodesy::Metres;
/// use epsg_geodesy::ellipsoid::{calculate_minor_axis, WGS_84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(WGS_84.a(), WGS_84.f()));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use epsg_geodesy::ellipsoid::{calculate_sq_eccentricity, WGS_84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(WGS_84.f()));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_eccentricity(f: f64) -> f64 {
    calculate_sq_eccentricity(f).sqrt()
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use epsg_geodesy::ellipsoid::{calculate_sq_2nd_eccentricity, WGS_84};
///
/// // The WGS 84 sq 2nd eccentricity.
/// assert_eq!(0.006739496742276434, calculate_sq_2nd_eccentricity(WGS_84.f()));
/// ```
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// A reference ellipsoid for geodetic calculations.
///
/// An ellipsoid is defined by its Semimajor axis (`a`) and flattening (`f`);
/// the other geometric parameters are derived from those two and calculated
/// on construction.
/// # Examples
/// ```
/// use epsg_geodesy::Metres;
/// use epsg_geodesy::ellipsoid::WGS_84;
///
/// assert_eq!(Metres(6_378_137.0), WGS_84.a());
/// // The Semiminor axis is derived.
/// assert_eq!(Metres(6_356_752.314_245_179), WGS_84.b());
/// ```
#[derive(Clone, Debug)]
pub struct Ellipsoid {
    /// The human-readable name of the ellipsoid.
    name: String,
    /// The EPSG code of the ellipsoid.
    code: u32,
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// Remarks, if any.
    remarks: Option<String>,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The Eccentricity of the ellipsoid.
    e: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    ///
    /// Values are accepted as given; the derived parameters are total
    /// functions of `a > 0` and `0 <= f < 1`.
    /// * `name` - the name of the `Ellipsoid`.
    /// * `code` - the EPSG code of the `Ellipsoid`.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    /// * `remarks` - remarks, if any.
    #[must_use]
    pub fn new(name: &str, code: u32, a: Metres, f: f64, remarks: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            code,
            a,
            f,
            remarks: remarks.map(str::to_string),
            b: calculate_minor_axis(a, f),
            e: calculate_eccentricity(f),
            e_2: calculate_sq_eccentricity(f),
            ep_2: calculate_sq_2nd_eccentricity(f),
        }
    }

    /// The name of the ellipsoid.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The EPSG code of the ellipsoid.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// Remarks about the ellipsoid definition, if any.
    #[must_use]
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e(&self) -> f64 {
        self.e
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The OGC Uniform Resource Name of the ellipsoid.
    /// # Examples
    /// ```
    /// use epsg_geodesy::ellipsoid::WGS_84;
    ///
    /// assert_eq!("urn:ogc:def:ellipsoid:EPSG::7030", WGS_84.urn());
    /// ```
    #[must_use]
    pub fn urn(&self) -> String {
        format!("urn:ogc:def:ellipsoid:EPSG::{}", self.code)
    }
}

/// Identity is the defining fields; the derived parameters are functions of
/// `a` and `f` so they always agree for equal defining fields.
impl PartialEq for Ellipsoid {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.code == other.code
            && self.a == other.a
            && self.f == other.f
            && self.remarks == other.remarks
    }
}

/// Defining field values are finite, never NaN.
impl Eq for Ellipsoid {}

impl Hash for Ellipsoid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.code.hash(state);
        self.a.0.to_bits().hash(state);
        self.f.to_bits().hash(state);
        self.remarks.hash(state);
    }
}

impl Default for Ellipsoid {
    /// The WGS 84 ellipsoid.
    fn default() -> Self {
        Self::clone(&WGS_84)
    }
}

/// The Airy 1830 ellipsoid ([EPSG:7001](https://epsg.io/7001-ellipsoid)).
/// Used by the OSGB36 datum.
pub static AIRY_1830: Lazy<Ellipsoid> = Lazy::new(|| {
    Ellipsoid::new(
        "Airy 1830",
        7001,
        Metres(6_377_563.396),
        1.0 / 299.324_964_6,
        Some("Original definition is a=20923713, b=20853810 feet of 1796. 1/f is given to 7 decimal places. For the 1936 retriangulation OSGB defines the relationship of 10 feet of 1796 to the International metre through ([10^0.48401603]/10) exactly = 0.3048007491..."),
    )
});

/// The Clarke 1866 ellipsoid ([EPSG:7008](https://epsg.io/7008-ellipsoid)).
/// Used by the NAD27 datum.
pub static CLARKE_1866: Lazy<Ellipsoid> = Lazy::new(|| {
    Ellipsoid::new(
        "Clarke 1866",
        7008,
        Metres(6_378_206.4),
        1.0 / 294.978_698_213_898,
        Some("Original definition a=20926062 and b=20855121 (British) feet. Uses Clarke's 1865 inch-metre ratio of 39.370432 to obtain metres. (Metric value then converted to US survey feet for use in the US and international feet for use in Cayman Islands)."),
    )
});

/// The GRS 1980 ellipsoid ([EPSG:7019](https://epsg.io/7019-ellipsoid)).
/// Used by the NAD83 and ETRS89 datums.
pub static GRS_1980: Lazy<Ellipsoid> = Lazy::new(|| {
    Ellipsoid::new(
        "GRS 1980",
        7019,
        Metres(6_378_137.0),
        1.0 / 298.257_222_101,
        Some("Adopted by IUGG 1979 Canberra. Inverse flattening is derived from geocentric gravitational constant GM = 3986005e8 m*m*m/s/s; dynamic form factor J2 = 108263e-8 and Earth's angular velocity = 7292115e-11 rad/s."),
    )
});

/// The International 1924 ellipsoid ([EPSG:7022](https://epsg.io/7022-ellipsoid)),
/// also known as Hayford 1909. Used by the ED50 datum.
pub static INTERNATIONAL_1924: Lazy<Ellipsoid> = Lazy::new(|| {
    Ellipsoid::new(
        "International 1924",
        7022,
        Metres(6_378_388.0),
        1.0 / 297.0,
        Some("Adopted by IUGG 1924 in Madrid. Based on Hayford 1909/1910 figures."),
    )
});

/// The WGS 84 ellipsoid ([EPSG:7030](https://epsg.io/7030-ellipsoid)).
/// Used by the WGS84 datum.
pub static WGS_84: Lazy<Ellipsoid> = Lazy::new(|| {
    Ellipsoid::new(
        "WGS 84",
        7030,
        Metres(6_378_137.0),
        1.0 / 298.257_223_563,
        Some("1/f derived from four defining parameters semi-major axis; C20 = -484.16685*10e-6; earth's angular velocity ω = 7292115e-11 rad/sec; gravitational constant GM = 3986005e8 m*m*m/s/s. In 1994 new GM = 3986004.418e8 m*m*m/s/s but a and 1/f retained."),
    )
});

/// The built-in EPSG ellipsoids.
#[must_use]
pub fn builtins() -> [&'static Ellipsoid; 5] {
    [
        Lazy::force(&AIRY_1830),
        Lazy::force(&CLARKE_1866),
        Lazy::force(&GRS_1980),
        Lazy::force(&INTERNATIONAL_1924),
        Lazy::force(&WGS_84),
    ]
}

/// Find a built-in ellipsoid by its EPSG code.
///
/// Returns `None` if `code` is not the code of a built-in ellipsoid.
/// # Examples
/// ```
/// use epsg_geodesy::ellipsoid;
///
/// let grs80 = ellipsoid::from_epsg(7019);
/// assert_eq!("GRS 1980", grs80.map_or("", |e| e.name()));
/// assert!(ellipsoid::from_epsg(9999).is_none());
/// ```
#[must_use]
pub fn from_epsg(code: u32) -> Option<&'static Ellipsoid> {
    builtins()
        .into_iter()
        .find(|ellipsoid| ellipsoid.code() == code)
}
