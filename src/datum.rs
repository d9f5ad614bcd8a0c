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

//! The datum module contains types for defining a geodetic datum: a reference
//! ellipsoid together with its position and orientation relative to the
//! Earth, and the standard EPSG datums.

#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::{
    Ellipsoid, AIRY_1830, CLARKE_1866, GRS_1980, INTERNATIONAL_1924, WGS_84,
};
use angle_sc::Radians;
use icao_units::si::Metres;
use once_cell::sync::Lazy;
use std::hash::{Hash, Hasher};

/// The angle subtended by one arc-second, measured in radians.
pub const RADIANS_PER_ARC_SECOND: f64 = std::f64::consts::PI / 648_000.0;

/// An angle measured in arc-seconds, the unit of Helmert rotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ArcSeconds(pub f64);

impl From<ArcSeconds> for Radians {
    /// # Examples
    /// ```
    /// use angle_sc::Radians;
    /// use epsg_geodesy::ArcSeconds;
    ///
    /// let right_angle = Radians::from(ArcSeconds(324_000.0));
    /// assert!((right_angle.0 - std::f64::consts::FRAC_PI_2).abs() < 1.0e-15);
    /// ```
    fn from(value: ArcSeconds) -> Self {
        Self(value.0 * RADIANS_PER_ARC_SECOND)
    }
}

/// The parameters of a 7-parameter Helmert (Bursa-Wolf) transformation
/// to WGS 84.
///
/// A transform engine applies the translations in metres, the rotations in
/// radians and the scale as a multiplier, see [`scale_factor`](Self::scale_factor).
/// # Examples
/// ```
/// use epsg_geodesy::datum::OSGB36;
/// use epsg_geodesy::Metres;
///
/// let helmert = OSGB36.to_wgs84().expect("OSGB36 publishes a transformation to WGS 84");
/// assert_eq!(Metres(446.448), helmert.tx());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelmertParameters {
    /// Translation along the X-axis.
    tx: Metres,
    /// Translation along the Y-axis.
    ty: Metres,
    /// Translation along the Z-axis.
    tz: Metres,
    /// Rotation around the X-axis.
    rx: ArcSeconds,
    /// Rotation around the Y-axis.
    ry: ArcSeconds,
    /// Rotation around the Z-axis.
    rz: ArcSeconds,
    /// Scale factor in parts per million.
    s: f64,
}

impl HelmertParameters {
    /// The identity transformation, for datums coincident with WGS 84.
    pub const IDENTITY: Self = Self::new(
        Metres(0.0),
        Metres(0.0),
        Metres(0.0),
        ArcSeconds(0.0),
        ArcSeconds(0.0),
        ArcSeconds(0.0),
        0.0,
    );

    /// Constructor.
    /// * `tx`, `ty`, `tz` - the translations along the X, Y and Z axes.
    /// * `rx`, `ry`, `rz` - the rotations around the X, Y and Z axes.
    /// * `s` - the scale factor in parts per million.
    #[must_use]
    pub const fn new(
        tx: Metres,
        ty: Metres,
        tz: Metres,
        rx: ArcSeconds,
        ry: ArcSeconds,
        rz: ArcSeconds,
        s: f64,
    ) -> Self {
        Self {
            tx,
            ty,
            tz,
            rx,
            ry,
            rz,
            s,
        }
    }

    /// The translation along the X-axis.
    #[must_use]
    pub const fn tx(&self) -> Metres {
        self.tx
    }

    /// The translation along the Y-axis.
    #[must_use]
    pub const fn ty(&self) -> Metres {
        self.ty
    }

    /// The translation along the Z-axis.
    #[must_use]
    pub const fn tz(&self) -> Metres {
        self.tz
    }

    /// The rotation around the X-axis.
    #[must_use]
    pub const fn rx(&self) -> ArcSeconds {
        self.rx
    }

    /// The rotation around the Y-axis.
    #[must_use]
    pub const fn ry(&self) -> ArcSeconds {
        self.ry
    }

    /// The rotation around the Z-axis.
    #[must_use]
    pub const fn rz(&self) -> ArcSeconds {
        self.rz
    }

    /// The scale factor in parts per million.
    #[must_use]
    pub const fn s(&self) -> f64 {
        self.s
    }

    /// The scale as the multiplier applied by a transform engine,
    /// i.e. `1 + s * 1e-6`.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        1.0 + self.s * 1.0e-6
    }
}

/// Field values are finite, never NaN.
impl Eq for HelmertParameters {}

impl Hash for HelmertParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tx.0.to_bits().hash(state);
        self.ty.0.to_bits().hash(state);
        self.tz.0.to_bits().hash(state);
        self.rx.0.to_bits().hash(state);
        self.ry.0.to_bits().hash(state);
        self.rz.0.to_bits().hash(state);
        self.s.to_bits().hash(state);
    }
}

/// A geodetic datum for coordinate reference systems.
///
/// A datum ties a reference ellipsoid to a physical position and orientation
/// relative to the Earth. Where published, `to_wgs84` holds the Helmert
/// transformation parameters from the datum to WGS 84.
/// # Examples
/// ```
/// use epsg_geodesy::datum::WGS84;
/// use epsg_geodesy::Metres;
///
/// assert_eq!(Metres(6_378_137.0), WGS84.ellipsoid().a());
/// assert_eq!("urn:ogc:def:datum:EPSG::6326", WGS84.urn());
/// ```
#[derive(Clone, Debug)]
pub struct Datum {
    /// The human-readable name of the datum.
    name: String,
    /// The EPSG code of the datum.
    code: u32,
    /// The reference ellipsoid of the datum.
    ellipsoid: Ellipsoid,
    /// The Helmert transformation to WGS 84, if published.
    to_wgs84: Option<HelmertParameters>,
    /// Remarks, if any.
    remarks: Option<String>,
}

impl Datum {
    /// Constructor.
    /// * `name` - the name of the `Datum`.
    /// * `code` - the EPSG code of the `Datum`.
    /// * `ellipsoid` - the reference `Ellipsoid` of the `Datum`.
    /// * `to_wgs84` - the Helmert transformation parameters to WGS 84,
    ///   if published.
    /// * `remarks` - remarks, if any.
    #[must_use]
    pub fn new(
        name: &str,
        code: u32,
        ellipsoid: Ellipsoid,
        to_wgs84: Option<HelmertParameters>,
        remarks: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            code,
            ellipsoid,
            to_wgs84,
            remarks: remarks.map(str::to_string),
        }
    }

    /// The name of the datum.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The EPSG code of the datum.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// The reference ellipsoid of the datum.
    #[must_use]
    pub const fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// The Helmert transformation parameters to WGS 84, if published.
    #[must_use]
    pub const fn to_wgs84(&self) -> Option<&HelmertParameters> {
        self.to_wgs84.as_ref()
    }

    /// Remarks about the datum definition, if any.
    #[must_use]
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// The OGC Uniform Resource Name of the datum.
    /// # Examples
    /// ```
    /// use epsg_geodesy::datum::OSGB36;
    ///
    /// assert_eq!("urn:ogc:def:datum:EPSG::6277", OSGB36.urn());
    /// ```
    #[must_use]
    pub fn urn(&self) -> String {
        format!("urn:ogc:def:datum:EPSG::{}", self.code)
    }
}

impl PartialEq for Datum {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.code == other.code
            && self.ellipsoid == other.ellipsoid
            && self.to_wgs84 == other.to_wgs84
            && self.remarks == other.remarks
    }
}

/// Field values are finite, never NaN.
impl Eq for Datum {}

impl Hash for Datum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.code.hash(state);
        self.ellipsoid.hash(state);
        self.to_wgs84.hash(state);
        self.remarks.hash(state);
    }
}

impl Default for Datum {
    /// The WGS84 datum.
    fn default() -> Self {
        Self::clone(&WGS84)
    }
}

/// The European Datum 1950 ([EPSG:6230](https://epsg.io/6230-datum)).
/// Uses the International 1924 ellipsoid.
pub static ED50: Lazy<Datum> = Lazy::new(|| {
    Datum::new(
        "European Datum 1950",
        6230,
        Ellipsoid::clone(&INTERNATIONAL_1924),
        Some(HelmertParameters::new(
            Metres(-87.0),
            Metres(-98.0),
            Metres(-121.0),
            ArcSeconds(0.0),
            ArcSeconds(0.0),
            ArcSeconds(0.0),
            0.0,
        )),
        None,
    )
});

/// The European Terrestrial Reference System 1989
/// ([EPSG:6258](https://epsg.io/6258-datum)), coincident with WGS 84 at
/// epoch 1989.0. Uses the GRS 1980 ellipsoid.
pub static ETRS89: Lazy<Datum> = Lazy::new(|| {
    Datum::new(
        "European Terrestrial Reference System 1989 ensemble",
        6258,
        Ellipsoid::clone(&GRS_1980),
        Some(HelmertParameters::IDENTITY),
        Some("Has been realized through ETRF89, ETRF90, ETRF91, ETRF92, ETRF93, ETRF94, ETRF96, ETRF97, ETRF2000, ETRF2005, ETRF2014 and ETRF2020. This 'ensemble' covers any or all of these realizations without distinction."),
    )
});

/// The North American Datum 1927 ([EPSG:6267](https://epsg.io/6267-datum)).
/// Uses the Clarke 1866 ellipsoid.
pub static NAD27: Lazy<Datum> = Lazy::new(|| {
    Datum::new(
        "North American Datum 1927",
        6267,
        Ellipsoid::clone(&CLARKE_1866),
        Some(HelmertParameters::new(
            Metres(-8.0),
            Metres(160.0),
            Metres(176.0),
            ArcSeconds(0.0),
            ArcSeconds(0.0),
            ArcSeconds(0.0),
            0.0,
        )),
        Some("In United States (USA) and Canada, replaced by North American Datum 1983 (NAD83) (code 6269) ; in Mexico, replaced by Mexican Datum of 1993 (code 1042)."),
    )
});

/// The North American Datum 1983 ([EPSG:6269](https://epsg.io/6269-datum)),
/// coincident with WGS 84 within the original realization accuracy.
/// Uses the GRS 1980 ellipsoid.
pub static NAD83: Lazy<Datum> = Lazy::new(|| {
    Datum::new(
        "North American Datum 1983",
        6269,
        Ellipsoid::clone(&GRS_1980),
        Some(HelmertParameters::IDENTITY),
        Some("Although the 1986 adjustment included connections to Greenland and Mexico, it has not been adopted there. In Canada and US, replaced NAD27."),
    )
});

/// The Ordnance Survey of Great Britain 1936 datum
/// ([EPSG:6277](https://epsg.io/6277-datum)). Uses the Airy 1830 ellipsoid.
pub static OSGB36: Lazy<Datum> = Lazy::new(|| {
    Datum::new(
        "Ordnance Survey of Great Britain 1936",
        6277,
        Ellipsoid::clone(&AIRY_1830),
        Some(HelmertParameters::new(
            Metres(446.448),
            Metres(-125.157),
            Metres(542.060),
            ArcSeconds(0.1502),
            ArcSeconds(0.2470),
            ArcSeconds(0.8421),
            -20.4894,
        )),
        Some("The average accuracy of OSTN compared to the old triangulation network (down to 3rd order) is 0.1m. With the introduction of OSTN15, the area for OGSB36 has effectively been extended from Britain to cover the adjacent UK Continental Shelf."),
    )
});

/// The World Geodetic System 1984 ([EPSG:6326](https://epsg.io/6326-datum)),
/// the global reference datum for GPS. Uses the WGS 84 ellipsoid.
pub static WGS84: Lazy<Datum> = Lazy::new(|| {
    Datum::new(
        "World Geodetic System 1984 ensemble",
        6326,
        Ellipsoid::clone(&WGS_84),
        Some(HelmertParameters::IDENTITY),
        Some("EPSG::6326 has been the then current realization. No distinction is made between the original and subsequent (G730, G873, G1150, G1674, G1762, G2139 and G2296) WGS 84 frames. Since 1997, WGS 84 has been maintained within 10cm of the then current ITRF."),
    )
});

/// The built-in EPSG datums.
#[must_use]
pub fn builtins() -> [&'static Datum; 6] {
    [
        Lazy::force(&ED50),
        Lazy::force(&ETRS89),
        Lazy::force(&NAD27),
        Lazy::force(&NAD83),
        Lazy::force(&OSGB36),
        Lazy::force(&WGS84),
    ]
}

/// Find a built-in datum by its EPSG code.
///
/// Returns `None` if `code` is not the code of a built-in datum.
/// # Examples
/// ```
/// use epsg_geodesy::datum;
///
/// let nad27 = datum::from_epsg(6267);
/// assert_eq!("North American Datum 1927", nad27.map_or("", |d| d.name()));
/// assert!(datum::from_epsg(1234).is_none());
/// ```
#[must_use]
pub fn from_epsg(code: u32) -> Option<&'static Datum> {
    builtins().into_iter().find(|datum| datum.code() == code)
}
