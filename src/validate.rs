use crate::error::SpaError;
use crate::types::SpaInput;

/// Checks every input against its valid range.
///
/// Checks run in a fixed order and the first violation wins: the calendar
/// and clock ranges, then pressure, temperature and ΔUT1, then the
/// end-of-day rules for hour 24, then ΔT, timezone, longitude, latitude,
/// horizon refraction and elevation. Slope and azimuth rotation are only
/// checked when the incidence angle is requested.
///
/// NaN fails every range check.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn validate_inputs(input: &SpaInput) -> Result<(), SpaError> {
    if !(-2000..=6000).contains(&input.year) {
        return Err(SpaError::YearOutOfRange);
    }
    if !(1..=12).contains(&input.month) {
        return Err(SpaError::MonthOutOfRange);
    }
    if !(1..=31).contains(&input.day) {
        return Err(SpaError::DayOutOfRange);
    }
    if !(0..=24).contains(&input.hour) {
        return Err(SpaError::HourOutOfRange);
    }
    if !(0..=59).contains(&input.minute) {
        return Err(SpaError::MinuteOutOfRange);
    }
    if !(0.0..60.0).contains(&input.second) {
        return Err(SpaError::SecondOutOfRange);
    }
    if !(0.0..=5000.0).contains(&input.pressure) {
        return Err(SpaError::PressureOutOfRange);
    }
    if input.temperature <= -273.0 || !(input.temperature <= 6000.0) {
        return Err(SpaError::TemperatureOutOfRange);
    }
    if !(input.delta_ut1 > -1.0 && input.delta_ut1 < 1.0) {
        return Err(SpaError::DeltaUt1OutOfRange);
    }

    if input.hour == 24 && input.minute > 0 {
        return Err(SpaError::MinuteOutOfRange);
    }
    if input.hour == 24 && input.second > 0.0 {
        return Err(SpaError::SecondOutOfRange);
    }

    if !(input.delta_t.abs() <= 8000.0) {
        return Err(SpaError::DeltaTOutOfRange);
    }
    if !(input.timezone.abs() <= 18.0) {
        return Err(SpaError::TimezoneOutOfRange);
    }
    if !(input.longitude.abs() <= 180.0) {
        return Err(SpaError::LongitudeOutOfRange);
    }
    if !(input.latitude.abs() <= 90.0) {
        return Err(SpaError::LatitudeOutOfRange);
    }
    if !(input.atmos_refract.abs() <= 5.0) {
        return Err(SpaError::AtmosphericRefractionOutOfRange);
    }
    if !(input.elevation >= -6_500_000.0) {
        return Err(SpaError::ElevationOutOfRange);
    }

    if input.function.includes_incidence() {
        if !(input.slope.abs() <= 360.0) {
            return Err(SpaError::SlopeOutOfRange);
        }
        if !(input.azm_rotation.abs() <= 360.0) {
            return Err(SpaError::AzimuthRotationOutOfRange);
        }
    }

    Ok(())
}
