//! Birth form input and its validation.
//!
//! The form submits strings: a `YYYY-MM-DD` date, an `HH:MM` time, the picked
//! city label and, optionally, coordinates and a UTC offset. [`BirthRequest::validate`]
//! checks all of it at once and resolves it into a [`BirthInfo`] whose instant is UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::error::{BirthError, ValidationErrors};
use crate::locations::{self, Location};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRequest {
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: String,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    /// `+HH:MM` / `-HH:MM`; the configured default applies when absent.
    #[serde(default)]
    pub utc_offset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInfo {
    pub date_time: DateTime<Utc>,
    pub location: Location,
    pub place: Option<String>,
}

impl BirthInfo {
    pub fn new(date_time: DateTime<Utc>, location: Location) -> Self {
        BirthInfo {
            date_time,
            location,
            place: None,
        }
    }
}

impl BirthRequest {
    pub fn new(birth_date: impl Into<String>, birth_time: impl Into<String>) -> Self {
        BirthRequest {
            birth_date: birth_date.into(),
            birth_time: birth_time.into(),
            ..Default::default()
        }
    }

    pub fn with_city(mut self, city_name: impl Into<String>) -> Self {
        self.city_name = Some(city_name.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude.to_string());
        self.longitude = Some(longitude.to_string());
        self
    }

    pub fn with_offset(mut self, utc_offset: impl Into<String>) -> Self {
        self.utc_offset = Some(utc_offset.into());
        self
    }

    /// Checks every field and reports all problems together.
    ///
    /// `now` bounds the birth instant from above; the configured earliest
    /// date bounds the calendar date from below.
    pub fn validate(&self, now: DateTime<Utc>, config: &ChartConfig) -> Result<BirthInfo, ValidationErrors> {
        let mut errors = Vec::new();

        let date = self.parse_date(config, &mut errors);
        let time = self.parse_time(&mut errors);
        let offset = self.parse_offset(config, &mut errors);
        let place = self.resolve_place(&mut errors);

        let date_time = match (date, time, offset) {
            (Some(date), Some(time), Some(offset)) => {
                let local = date.and_time(time);
                offset
                    .from_local_datetime(&local)
                    .single()
                    .map(|dt| dt.with_timezone(&Utc))
            }
            _ => None,
        };

        match (date_time, date) {
            (Some(instant), _) if instant > now => errors.push(BirthError::FutureDate),
            (None, Some(date)) if date > now.date_naive() => errors.push(BirthError::FutureDate),
            _ => {}
        }

        if let Some(errors) = ValidationErrors::from_vec(errors) {
            return Err(errors);
        }

        match (date_time, place) {
            (Some(date_time), Some((location, label))) => Ok(BirthInfo {
                date_time,
                location,
                place: label,
            }),
            // every None above pushed an error
            _ => Err(BirthError::InvalidDate(self.birth_date.clone()).into()),
        }
    }

    fn parse_date(&self, config: &ChartConfig, errors: &mut Vec<BirthError>) -> Option<NaiveDate> {
        let raw = self.birth_date.trim();
        if raw.is_empty() {
            errors.push(BirthError::MissingDate);
            return None;
        }
        let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
            errors.push(BirthError::InvalidDate(raw.to_string()));
            return None;
        };
        let earliest = config.chart.earliest_birth_date;
        if date < earliest {
            errors.push(BirthError::TooEarly(earliest));
            return None;
        }
        Some(date)
    }

    fn parse_time(&self, errors: &mut Vec<BirthError>) -> Option<NaiveTime> {
        let raw = self.birth_time.trim();
        if raw.is_empty() {
            errors.push(BirthError::MissingTime);
            return None;
        }
        let time = parse_clock(raw);
        if time.is_none() {
            errors.push(BirthError::InvalidTime(raw.to_string()));
        }
        time
    }

    fn parse_offset(&self, config: &ChartConfig, errors: &mut Vec<BirthError>) -> Option<FixedOffset> {
        let raw = match self.utc_offset.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => config.chart.default_utc_offset.as_str(),
        };
        let offset = parse_offset(raw);
        if offset.is_none() {
            errors.push(BirthError::InvalidOffset(raw.to_string()));
        }
        offset
    }

    /// Explicit coordinates win; otherwise the city label must be in the catalog.
    fn resolve_place(&self, errors: &mut Vec<BirthError>) -> Option<(Location, Option<String>)> {
        let city = non_blank(self.city_name.as_deref());
        let latitude = non_blank(self.latitude.as_deref());
        let longitude = non_blank(self.longitude.as_deref());

        let Some(city) = city else {
            errors.push(BirthError::MissingCity);
            return None;
        };

        if let (Some(lat), Some(lon)) = (latitude, longitude) {
            let location = match (lat.parse::<f64>(), lon.parse::<f64>()) {
                (Ok(latitude), Ok(longitude)) => Some(Location::new(latitude, longitude)),
                _ => None,
            };
            return match location.filter(Location::is_valid) {
                Some(location) => Some((location, Some(city.to_string()))),
                None => {
                    errors.push(BirthError::InvalidCoordinates {
                        latitude: lat.to_string(),
                        longitude: lon.to_string(),
                    });
                    None
                }
            };
        }

        match locations::parse_label(city) {
            Some(found) => Some((found.location(), Some(found.label()))),
            None => {
                errors.push(BirthError::UnknownCity(city.to_string()));
                None
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses `HH:MM` or `HH:MM:SS` on a 24-hour clock.
pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let mut fields = [0u32; 3];
    let mut count = 0;
    for part in raw.trim().split(':') {
        if count == 3 || part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        fields[count] = part.parse().ok()?;
        count += 1;
    }
    if count < 2 {
        return None;
    }
    let [hour, minute, second] = fields;
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Parses a UTC offset written as `+HH:MM`, `-HH:MM` or `Z`.
pub fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }
    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::utc_datetime;

    fn now() -> DateTime<Utc> {
        utc_datetime(2024, 10, 7, 12, 0, 0).unwrap()
    }

    fn config() -> ChartConfig {
        ChartConfig::default()
    }

    #[test]
    fn valid_request_with_catalog_city() {
        let info = BirthRequest::new("1990-05-15", "14:30")
            .with_city("Recife, PE")
            .validate(now(), &config())
            .unwrap();
        assert_eq!(info.date_time, utc_datetime(1990, 5, 15, 14, 30, 0).unwrap());
        assert_eq!(info.location, Location::new(-8.0476, -34.8770));
        assert_eq!(info.place.as_deref(), Some("Recife, PE"));
    }

    #[test]
    fn offset_shifts_to_utc() {
        let info = BirthRequest::new("1990-05-15", "23:30")
            .with_city("São Paulo, SP")
            .with_offset("-03:00")
            .validate(now(), &config())
            .unwrap();
        assert_eq!(info.date_time, utc_datetime(1990, 5, 16, 2, 30, 0).unwrap());
    }

    #[test]
    fn configured_offset_is_the_default() {
        let config: ChartConfig = "[chart]\ndefault_utc_offset = \"+05:30\"".parse().unwrap();
        let info = BirthRequest::new("1991-06-18", "07:10")
            .with_city("Kozhikode")
            .with_coordinates(11.2588, 75.7804)
            .validate(now(), &config)
            .unwrap();
        assert_eq!(info.date_time, utc_datetime(1991, 6, 18, 1, 40, 0).unwrap());
        assert_eq!(info.place.as_deref(), Some("Kozhikode"));
    }

    #[test]
    fn empty_form_reports_everything() {
        let errs = BirthRequest::default().validate(now(), &config()).unwrap_err();
        assert_eq!(
            errs.errors(),
            &[BirthError::MissingDate, BirthError::MissingTime, BirthError::MissingCity]
        );
    }

    #[test]
    fn malformed_fields() {
        let errs = BirthRequest::new("15/05/1990", "25:00")
            .with_city("Recife, PE")
            .with_offset("GMT-3")
            .validate(now(), &config())
            .unwrap_err();
        assert!(errs.contains(&BirthError::InvalidDate("15/05/1990".into())));
        assert!(errs.contains(&BirthError::InvalidTime("25:00".into())));
        assert!(errs.contains(&BirthError::InvalidOffset("GMT-3".into())));
        assert_eq!(errs.errors().len(), 3);
    }

    #[test]
    fn future_instants_are_rejected() {
        // later the same day
        let errs = BirthRequest::new("2024-10-07", "12:01")
            .with_city("Natal, RN")
            .validate(now(), &config())
            .unwrap_err();
        assert_eq!(errs.errors(), &[BirthError::FutureDate]);

        // future date even when the time is broken
        let errs = BirthRequest::new("2030-01-01", "99:99")
            .with_city("Natal, RN")
            .validate(now(), &config())
            .unwrap_err();
        assert!(errs.contains(&BirthError::FutureDate));

        assert!(BirthRequest::new("2024-10-07", "11:59")
            .with_city("Natal, RN")
            .validate(now(), &config())
            .is_ok());
    }

    #[test]
    fn dates_before_1900_are_rejected() {
        let errs = BirthRequest::new("1899-12-31", "10:00")
            .with_city("Natal, RN")
            .validate(now(), &config())
            .unwrap_err();
        assert_eq!(
            errs.errors(),
            &[BirthError::TooEarly(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap())]
        );
    }

    #[test]
    fn pre_epoch_births_are_fine() {
        let info = BirthRequest::new("1900-01-01", "00:00")
            .with_city("Manaus, AM")
            .validate(now(), &config())
            .unwrap();
        assert!(info.date_time < crate::time::j2000());
    }

    #[test]
    fn city_resolution() {
        let errs = BirthRequest::new("1990-05-15", "14:30")
            .with_city("Gotham, XX")
            .validate(now(), &config())
            .unwrap_err();
        assert_eq!(errs.errors(), &[BirthError::UnknownCity("Gotham, XX".into())]);

        let errs = BirthRequest::new("1990-05-15", "14:30")
            .with_city("Somewhere")
            .with_coordinates(123.0, 10.0)
            .validate(now(), &config())
            .unwrap_err();
        assert!(matches!(errs.errors(), [BirthError::InvalidCoordinates { .. }]));
    }

    #[test]
    fn clock_parsing() {
        assert_eq!(parse_clock("07:05"), NaiveTime::from_hms_opt(7, 5, 0));
        assert_eq!(parse_clock("7:05"), NaiveTime::from_hms_opt(7, 5, 0));
        assert_eq!(parse_clock("23:59:59"), NaiveTime::from_hms_opt(23, 59, 59));
        assert_eq!(parse_clock("24:00"), None);
        assert_eq!(parse_clock("12:60"), None);
        assert_eq!(parse_clock("12"), None);
        assert_eq!(parse_clock("12:00:00:00"), None);
        assert_eq!(parse_clock("ab:cd"), None);
        assert_eq!(parse_clock("-1:00"), None);
    }

    #[test]
    fn offset_parsing() {
        assert_eq!(parse_offset("+05:30"), FixedOffset::east_opt(19_800));
        assert_eq!(parse_offset("-03:00"), FixedOffset::west_opt(10_800));
        assert_eq!(parse_offset("Z"), FixedOffset::east_opt(0));
        assert_eq!(parse_offset("05:30"), None);
        assert_eq!(parse_offset("+5:30"), None);
        assert_eq!(parse_offset("+15:00"), None);
    }

    #[test]
    fn deserializes_form_json() {
        let request: BirthRequest = serde_json::from_str(
            r#"{"birthDate":"1990-05-15","birthTime":"14:30","latitude":"-8.0476","longitude":"-34.877","cityName":"Recife, PE"}"#,
        )
        .unwrap();
        assert_eq!(request.birth_date, "1990-05-15");
        assert_eq!(request.city_name.as_deref(), Some("Recife, PE"));
        assert!(request.utc_offset.is_none());
        assert!(request.validate(now(), &config()).is_ok());
    }
}
