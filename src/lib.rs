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

//! epsg-geodesy
//!
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library of reference ellipsoids and geodetic datums for coordinate
//! reference systems.
//!
//! A reference [ellipsoid](https://en.wikipedia.org/wiki/Earth_ellipsoid) is a
//! mathematical model of the Earth's shape, defined by its Semimajor axis
//! (`a`) and flattening (`f`). A geodetic
//! [datum](https://en.wikipedia.org/wiki/Geodetic_datum) ties a reference
//! ellipsoid to a physical position and orientation relative to the Earth,
//! and, where the [EPSG registry](https://epsg.org/) publishes one, carries a
//! 7-parameter [Helmert transformation](https://en.wikipedia.org/wiki/Helmert_transformation)
//! to WGS 84.
//!
//! The library provides:
//!
//! - the [`Ellipsoid`] value type with its derived geometric parameters:
//!   Semiminor axis, first and second Eccentricities;
//! - the [`Datum`] and [`HelmertParameters`] value types;
//! - the five standard EPSG ellipsoids and six standard EPSG datums as
//!   process-wide statics, available without explicit initialization;
//! - OGC Uniform Resource Names for every ellipsoid and datum.
//!
//! All types are immutable values with structural equality and hashing, so
//! they can be read concurrently from any number of threads without locking.
//!
//! ## Design
//!
//! Each `Ellipsoid` stores its two defining parameters and calculates the
//! dependent parameters once, on construction; every accessor is a pure,
//! total function for `a > 0` and `0 <= f < 1`. Constructors are permissive:
//! parameters are accepted as given, matching the published EPSG values they
//! are intended to carry.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Radians`,
//!   the target unit of Helmert rotation conversions;
//! - [icao-units](https://crates.io/crates/icao-units) - to define `Metres`
//!   for axes and Helmert translations;
//! - [once_cell](https://crates.io/crates/once_cell) - to define the built-in
//!   ellipsoid and datum statics.
//!
//! # Examples
//! ```
//! use epsg_geodesy::{Metres, OSGB36, WGS_84};
//!
//! assert_eq!(Metres(6_378_137.0), WGS_84.a());
//! assert_eq!("urn:ogc:def:ellipsoid:EPSG::7030", WGS_84.urn());
//!
//! let helmert = OSGB36.to_wgs84().expect("OSGB36 publishes a transformation to WGS 84");
//! assert_eq!(Metres(446.448), helmert.tx());
//! ```

extern crate angle_sc;
extern crate icao_units;

pub mod datum;
pub mod ellipsoid;

pub use angle_sc::Radians;
pub use icao_units::si::Metres;

pub use datum::{
    ArcSeconds, Datum, HelmertParameters, ED50, ETRS89, NAD27, NAD83, OSGB36, WGS84,
};
pub use ellipsoid::{
    Ellipsoid, AIRY_1830, CLARKE_1866, GRS_1980, INTERNATIONAL_1924, WGS_84,
};
