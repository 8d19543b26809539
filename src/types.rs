use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rts::RiseTransitSet;
use crate::spa::GeocentricSun;
use crate::topocentric::TopocentricPosition;

/// Selects which optional parts of the algorithm run.
///
/// Zenith and azimuth are always computed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpaFunction {
    /// Zenith and azimuth only.
    ZenithAzimuth,
    /// Zenith, azimuth and the incidence angle on a tilted surface.
    ZenithAzimuthIncidence,
    /// Zenith, azimuth, equation of time and sunrise/transit/sunset.
    ZenithAzimuthRiseTransitSet,
    /// Everything.
    #[default]
    All,
}

impl SpaFunction {
    pub const fn includes_incidence(self) -> bool {
        matches!(self, SpaFunction::ZenithAzimuthIncidence | SpaFunction::All)
    }

    pub const fn includes_rise_transit_set(self) -> bool {
        matches!(self, SpaFunction::ZenithAzimuthRiseTransitSet | SpaFunction::All)
    }
}

/// Everything one evaluation needs: the instant, the observer and the
/// optional surface.
///
/// Angles are in degrees, longitudes positive east of Greenwich, latitudes
/// positive north.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpaInput {
    /// Year, valid range -2000..=6000.
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Local hour, 0..=24 (24 only at the exact end of the day).
    pub hour: i32,
    pub minute: i32,
    /// Seconds, 0 <= second < 60.
    pub second: f64,
    /// UT1 − UTC in seconds, -1 < ΔUT1 < 1.
    pub delta_ut1: f64,
    /// TT − UT1 in seconds, |ΔT| <= 8000.
    pub delta_t: f64,
    /// Offset from UTC in hours, positive east.
    pub timezone: f64,
    pub longitude: f64,
    pub latitude: f64,
    /// Observer elevation in meters.
    pub elevation: f64,
    /// Annual average local pressure in millibars.
    pub pressure: f64,
    /// Annual average local temperature in °C.
    pub temperature: f64,
    /// Surface slope from the horizontal.
    pub slope: f64,
    /// Surface azimuth rotation, measured from south, positive toward west.
    pub azm_rotation: f64,
    /// Atmospheric refraction at sunrise and sunset (0.5667° is typical).
    pub atmos_refract: f64,
    pub function: SpaFunction,
}

impl Default for SpaInput {
    fn default() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0.0,
            delta_ut1: 0.0,
            delta_t: 0.0,
            timezone: 0.0,
            longitude: 0.0,
            latitude: 0.0,
            elevation: 0.0,
            pressure: 1010.0,
            temperature: 10.0,
            slope: 0.0,
            azm_rotation: 0.0,
            atmos_refract: 0.5667,
            function: SpaFunction::All,
        }
    }
}

impl SpaInput {
    /// Takes the calendar fields and UTC offset from a chrono date-time.
    ///
    /// Sub-second precision is kept in `second`. A leap second (nanoseconds
    /// past 10^9) yields `second >= 60`, which validation rejects.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let offset_seconds = datetime.offset().fix().local_minus_utc();
        Self {
            year: datetime.year(),
            month: datetime.month() as i32,
            day: datetime.day() as i32,
            hour: datetime.hour() as i32,
            minute: datetime.minute() as i32,
            second: f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1.0e9,
            timezone: f64::from(offset_seconds) / 3600.0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_location(mut self, latitude: f64, longitude: f64, elevation: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self.elevation = elevation;
        self
    }

    /// Sets pressure (mbar), temperature (°C) and refraction at the horizon (degrees).
    #[must_use]
    pub fn with_atmosphere(mut self, pressure: f64, temperature: f64, atmos_refract: f64) -> Self {
        self.pressure = pressure;
        self.temperature = temperature;
        self.atmos_refract = atmos_refract;
        self
    }

    #[must_use]
    pub fn with_surface(mut self, slope: f64, azm_rotation: f64) -> Self {
        self.slope = slope;
        self.azm_rotation = azm_rotation;
        self
    }

    /// Sets ΔUT1 and ΔT, both in seconds.
    #[must_use]
    pub fn with_time_corrections(mut self, delta_ut1: f64, delta_t: f64) -> Self {
        self.delta_ut1 = delta_ut1;
        self.delta_t = delta_t;
        self
    }

    #[must_use]
    pub fn with_function(mut self, function: SpaFunction) -> Self {
        self.function = function;
        self
    }
}

/// The result of one evaluation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpaOutput {
    /// Date-dependent intermediates, shared by every observer.
    pub sun: GeocentricSun,
    pub topocentric: TopocentricPosition,
    /// Surface incidence angle in degrees, if requested.
    pub incidence: Option<f64>,
    /// Equation of time and sunrise/transit/sunset, if requested.
    pub rise_transit_set: Option<RiseTransitSet>,
}

impl SpaOutput {
    /// Topocentric zenith angle in degrees.
    pub fn zenith(&self) -> f64 {
        self.topocentric.zenith
    }

    /// Topocentric azimuth in degrees, eastward from north.
    pub fn azimuth(&self) -> f64 {
        self.topocentric.azimuth
    }

    /// Topocentric azimuth in degrees, westward from south.
    pub fn azimuth_astronomical(&self) -> f64 {
        self.topocentric.azimuth_astronomical
    }

    /// Refraction-corrected elevation angle in degrees.
    pub fn elevation(&self) -> f64 {
        self.topocentric.elevation
    }
}
