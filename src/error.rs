use thiserror::Error;

/// An input that lies outside its documented range.
///
/// Every variant carries a stable numeric code (see [`SpaError::code`]),
/// which is what [`evaluate`](crate::evaluate) reports alongside its output.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SpaError {
    #[error("year out of range (-2000..=6000)")]
    YearOutOfRange,

    #[error("month out of range (1..=12)")]
    MonthOutOfRange,

    #[error("day out of range (1..=31)")]
    DayOutOfRange,

    #[error("hour out of range (0..=24)")]
    HourOutOfRange,

    #[error("minute out of range (0..=59, and 0 at hour 24)")]
    MinuteOutOfRange,

    #[error("second out of range (0 <= second < 60, and 0 at hour 24)")]
    SecondOutOfRange,

    #[error("ΔT out of range (|ΔT| <= 8000 s)")]
    DeltaTOutOfRange,

    #[error("timezone out of range (|timezone| <= 18 h)")]
    TimezoneOutOfRange,

    #[error("longitude out of range (|longitude| <= 180°)")]
    LongitudeOutOfRange,

    #[error("latitude out of range (|latitude| <= 90°)")]
    LatitudeOutOfRange,

    #[error("elevation out of range (>= -6500000 m)")]
    ElevationOutOfRange,

    #[error("pressure out of range (0..=5000 mbar)")]
    PressureOutOfRange,

    #[error("temperature out of range (-273 < temperature <= 6000 °C)")]
    TemperatureOutOfRange,

    #[error("surface slope out of range (|slope| <= 360°)")]
    SlopeOutOfRange,

    #[error("surface azimuth rotation out of range (|rotation| <= 360°)")]
    AzimuthRotationOutOfRange,

    #[error("atmospheric refraction at sunrise/sunset out of range (|refraction| <= 5°)")]
    AtmosphericRefractionOutOfRange,

    #[error("ΔUT1 out of range (-1 < ΔUT1 < 1 s)")]
    DeltaUt1OutOfRange,
}

impl SpaError {
    /// The numeric status code; 0 is reserved for success.
    pub const fn code(self) -> i32 {
        match self {
            SpaError::YearOutOfRange => 1,
            SpaError::MonthOutOfRange => 2,
            SpaError::DayOutOfRange => 3,
            SpaError::HourOutOfRange => 4,
            SpaError::MinuteOutOfRange => 5,
            SpaError::SecondOutOfRange => 6,
            SpaError::DeltaTOutOfRange => 7,
            SpaError::TimezoneOutOfRange => 8,
            SpaError::LongitudeOutOfRange => 9,
            SpaError::LatitudeOutOfRange => 10,
            SpaError::ElevationOutOfRange => 11,
            SpaError::PressureOutOfRange => 12,
            SpaError::TemperatureOutOfRange => 13,
            SpaError::SlopeOutOfRange => 14,
            SpaError::AzimuthRotationOutOfRange => 15,
            SpaError::AtmosphericRefractionOutOfRange => 16,
            SpaError::DeltaUt1OutOfRange => 17,
        }
    }

    /// Maps a status code back to its error. Returns `None` for 0 and for
    /// unknown codes.
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => SpaError::YearOutOfRange,
            2 => SpaError::MonthOutOfRange,
            3 => SpaError::DayOutOfRange,
            4 => SpaError::HourOutOfRange,
            5 => SpaError::MinuteOutOfRange,
            6 => SpaError::SecondOutOfRange,
            7 => SpaError::DeltaTOutOfRange,
            8 => SpaError::TimezoneOutOfRange,
            9 => SpaError::LongitudeOutOfRange,
            10 => SpaError::LatitudeOutOfRange,
            11 => SpaError::ElevationOutOfRange,
            12 => SpaError::PressureOutOfRange,
            13 => SpaError::TemperatureOutOfRange,
            14 => SpaError::SlopeOutOfRange,
            15 => SpaError::AzimuthRotationOutOfRange,
            16 => SpaError::AtmosphericRefractionOutOfRange,
            17 => SpaError::DeltaUt1OutOfRange,
            _ => return None,
        })
    }
}
