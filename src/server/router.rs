use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::holiday::holidayrecord::HolidayRecord;
use crate::holiday::holidaysource::{CountryInfo, HolidaySource, normalize_country_code};
use crate::time::week::weekbucket::{WeekBucket, bucket_holidays};
use super::apierror::ApiError;

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn HolidaySource>,
    default_country: String
}

impl AppState {
    pub fn new(source: Arc<dyn HolidaySource>, default_country: &str) -> AppState {
        AppState {
            source,
            default_country: normalize_country_code(default_country)
        }
    }

    /// Missing or blank `country` falls back to the default country, a
    /// missing `year` to the current UTC year.
    fn resolve(&self, query: &HolidayQuery) -> Result<(String, i32), ApiError> {
        let country = query.country
            .as_deref()
            .map(normalize_country_code)
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| self.default_country.clone());
        let year = query.year.unwrap_or_else(|| Utc::now().year());
        if !is_supported_year(year) {
            return Err(ApiError::YearOutOfRange(year));
        }
        Ok((country, year))
    }

    fn lookup(&self, query: Result<Query<HolidayQuery>, QueryRejection>) -> Result<(String, i32, Vec<HolidayRecord>), ApiError> {
        let (country, year) = query
            .map_err(ApiError::from)
            .and_then(|Query(query)| self.resolve(&query))
            .inspect_err(|err| warn!(%err, "rejected holiday query"))?;
        match self.source.get_holidays(&country, year) {
            Ok(holidays) => Ok((country, year, holidays)),
            Err(err) => {
                warn!(%err, "holiday lookup failed");
                Err(err.into())
            }
        }
    }
}

/// Years whose whole ISO week-year, including the days borrowed from the
/// neighbouring years, lies within chrono's date range.
fn is_supported_year(year: i32) -> bool {
    (NaiveDate::MIN.year() + 1..=NaiveDate::MAX.year() - 1).contains(&year)
}

#[derive(Deserialize, Default)]
pub struct HolidayQuery {
    country: Option<String>,
    year: Option<i32>
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/holidays", get(get_holidays))
        .route("/api/holiday-weeks", get(get_holiday_weeks))
        .route("/api/countries", get(get_countries))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn get_holidays(
    State(state): State<AppState>,
    query: Result<Query<HolidayQuery>, QueryRejection>,
) -> Result<Json<Vec<HolidayRecord>>, ApiError> {
    let (country, year, holidays) = state.lookup(query)?;
    info!(country = %country, year, count = holidays.len(), "holidays served");
    Ok(Json(holidays))
}

async fn get_holiday_weeks(
    State(state): State<AppState>,
    query: Result<Query<HolidayQuery>, QueryRejection>,
) -> Result<Json<Vec<WeekBucket>>, ApiError> {
    let (country, year, holidays) = state.lookup(query)?;
    let buckets = bucket_holidays(&holidays)?;
    info!(country = %country, year, holidays = holidays.len(), weeks = buckets.len(), "holiday weeks served");
    Ok(Json(buckets))
}

async fn get_countries(State(state): State<AppState>) -> Json<Vec<CountryInfo>> {
    Json(state.source.countries())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::holidaysource::HolidaySourceError;

    struct NoHolidays;

    impl HolidaySource for NoHolidays {
        fn get_holidays(&self, country_code: &str, year: i32) -> Result<Vec<HolidayRecord>, HolidaySourceError> {
            Err(HolidaySourceError::NoData { country: country_code.to_owned(), year })
        }

        fn countries(&self) -> Vec<CountryInfo> {
            Vec::new()
        }
    }

    fn state() -> AppState {
        AppState::new(Arc::new(NoHolidays), "us")
    }

    #[test]
    fn blank_country_falls_back_to_default() {
        let query = HolidayQuery { country: Some("  ".to_owned()), year: Some(2024) };
        assert_eq!(state().resolve(&query).unwrap(), ("US".to_owned(), 2024));
    }

    #[test]
    fn country_is_normalized() {
        let query = HolidayQuery { country: Some("jp".to_owned()), year: Some(2030) };
        assert_eq!(state().resolve(&query).unwrap(), ("JP".to_owned(), 2030));
    }

    #[test]
    fn missing_year_is_the_current_year() {
        let (_, year) = state().resolve(&HolidayQuery::default()).unwrap();
        assert_eq!(year, Utc::now().year());
    }

    #[test]
    fn years_outside_chrono_range_are_rejected() {
        for year in [i32::MIN, NaiveDate::MIN.year(), NaiveDate::MAX.year(), i32::MAX] {
            let query = HolidayQuery { country: None, year: Some(year) };
            assert!(matches!(state().resolve(&query), Err(ApiError::YearOutOfRange(y)) if y == year));
        }
        assert!(is_supported_year(NaiveDate::MAX.year() - 1));
    }
}
