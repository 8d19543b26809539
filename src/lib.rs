//! # Solar SPA
//!
//! The Solar Position Algorithm (SPA): the Sun's topocentric zenith and
//! azimuth for any instant between the years -2000 and 6000, with an
//! uncertainty of about ±0.0003°.
//!
//! The computation follows the published algorithm stage by stage. It
//! converts the time to Julian scales and sums Earth's heliocentric
//! periodic terms. It then applies nutation, aberration and sidereal time,
//! corrects for the observer's parallax and atmospheric refraction, and
//! optionally adds the incidence angle on a tilted surface and the day's
//! sunrise, sun transit and sunset.
//!
//! ## Basic Usage
//!
//! ```
//! use solar_spa::{calculate, SolarEventResult, SpaFunction, SpaInput};
//!
//! // 2003-10-17 12:30:30 local time (UTC-7) in Golden, Colorado
//! let input = SpaInput {
//!     year: 2003,
//!     month: 10,
//!     day: 17,
//!     hour: 12,
//!     minute: 30,
//!     second: 30.0,
//!     timezone: -7.0,
//!     ..SpaInput::default()
//! }
//! .with_location(39.742476, -105.1786, 1830.14)   // latitude, longitude, elevation (m)
//! .with_atmosphere(820.0, 11.0, 0.5667)           // mbar, °C, refraction at horizon (°)
//! .with_surface(30.0, -10.0)                      // slope, azimuth rotation (°)
//! .with_time_corrections(0.0, 67.0)               // ΔUT1, ΔT (s)
//! .with_function(SpaFunction::All);
//!
//! let output = calculate(&input).unwrap();
//! println!("Zenith:  {:.6}°", output.zenith());
//! println!("Azimuth: {:.6}°", output.azimuth());
//!
//! if let Some(rts) = output.rise_transit_set {
//!     match rts.sunrise_event() {
//!         SolarEventResult::Occurs(hours) => println!("Sunrise at {:.4} h", hours),
//!         SolarEventResult::AllDay => println!("Sun never sets (midnight sun)"),
//!         SolarEventResult::AllNight => println!("Sun never rises (polar night)"),
//!     }
//! }
//! ```
//!
//! ## Status codes
//!
//! [`evaluate`] keeps the classic calling convention: it always returns an
//! output together with a status code, 0 on success or the code of the
//! first invalid input (see [`SpaError::code`]). [`calculate`] is the
//! strict form returning `Result`.
#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod heliocentric;
mod incidence;
mod math;
mod nutation;
mod rts;
mod spa;
mod terms;
mod time;
mod topocentric;
mod types;
mod validate;

#[cfg(test)]
mod _tests;

pub use error::SpaError;
pub use heliocentric::{GeocentricPosition, HeliocentricPosition};
pub use nutation::{FundamentalArguments, Nutation, Obliquity};
pub use rts::{RiseTransitSet, SolarEventResult, SunHorizon, NO_RISE_SET};
pub use spa::{calculate, evaluate, geocentric_sun, GeocentricSun};
pub use time::{julian_day, JulianTime};
pub use topocentric::TopocentricPosition;
pub use types::{SpaFunction, SpaInput, SpaOutput};
pub use validate::validate_inputs;
