use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use serde_json;
use tracing::debug;

use crate::holiday::holidayrecord::{HolidayRecord, RawHoliday};
use crate::manager::manager::{IManager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::namedobject::NamedJsonObject;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::simplecalendar::{NamedRecurringHoliday, SimpleCalendar};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustment;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};
use crate::time::recurringholiday::equinoxholiday::{
    Equinox,
    EquinoxHoliday
};

// ─────────────────────────────────────────────────────────────────────────────
// Recurring holidays
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    easter_type: EasterType,
    shift_days: i32
}

fn easter_related_holiday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    let holiday = EasterRelatedHoliday::new(json_prop.easter_type, json_prop.shift_days)
        .ok_or_else(|| ManagerError::invalid_rule(name, format!("shift of {} days leaves the year", json_prop.shift_days)))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_rule(name, format!("no weekday #{} in month {}", json_prop.n, json_prop.month)))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

fn last_weekday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_rule(name, format!("month {} does not exist", json_prop.month)))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    #[serde(default)]
    weekend_adjustment_map: HashMap<Weekday, WeekendAdjustment>
}

fn fixed_date_holiday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day, &json_prop.weekend_adjustment_map)
        .ok_or_else(|| ManagerError::invalid_rule(name, format!("{}/{} is not a calendar date", json_prop.month, json_prop.day)))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct EquinoxHolidayJsonProp {
    equinox: Equinox
}

fn equinox_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EquinoxHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EquinoxHoliday::new(json_prop.equinox)))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday,
    Equinox
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    name: String,
    holiday_type: HolidayType,
    #[serde(default)]
    first_year: Option<i32>,
    #[serde(default)]
    last_year: Option<i32>
}

fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<NamedRecurringHoliday, ManagerError> {
    let typed: HolidayTypedObject = parse_json_value(json.clone())?;
    let name = typed.name.as_str();
    let rule = match typed.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(name, json)?,
        HolidayType::FixedDate     => fixed_date_holiday_from_json(name, json)?,
        HolidayType::LastWeekday   => last_weekday_from_json(name, json)?,
        HolidayType::NthWeekday    => nth_weekday_from_json(name, json)?,
        HolidayType::Equinox       => equinox_holiday_from_json(json)?
    };
    if let (Some(first), Some(last)) = (typed.first_year, typed.last_year) {
        if first > last {
            return Err(ManagerError::invalid_rule(name, format!("first_year {first} is after last_year {last}")));
        }
    }
    Ok(NamedRecurringHoliday::new(typed.name, rule).with_years(typed.first_year, typed.last_year))
}

// ─────────────────────────────────────────────────────────────────────────────
// Calendars
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
enum CalendarType {
    SimpleCalendar
}

#[derive(Deserialize)]
struct CalendarTypedObject {
    calendar_type: CalendarType
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    display_name: String,
    recurring_holidays: Vec<serde_json::Value>,
    #[serde(default)]
    additional_holidays: Vec<RawHoliday>,
    #[serde(default)]
    removed_holidays: Vec<NaiveDate>
}

fn get_simple_calendar_from_json(name: &str, json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar + Send + Sync>, ManagerError> {
    let holiday_calendar_json: SimpleCalendarJsonProp = parse_json_value(json_value)?;

    let recurring_holidays = holiday_calendar_json.recurring_holidays
        .into_iter()
        .map(get_recurring_holiday_from_json)
        .collect::<Result<Vec<_>, _>>()?;

    let additional_holidays = holiday_calendar_json.additional_holidays
        .into_iter()
        .map(|raw| HolidayRecord::try_from(raw).map_err(|err| ManagerError::invalid_rule(name, err.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        calendar = name,
        recurring = recurring_holidays.len(),
        additional = additional_holidays.len(),
        "loaded holiday calendar"
    );

    Ok(Arc::new(SimpleCalendar::new(
        holiday_calendar_json.display_name,
        recurring_holidays,
        additional_holidays,
        holiday_calendar_json.removed_holidays
    )))
}

// ─────────────────────────────────────────────────────────────────────────────
// HolidayCalendarLoader
// ─────────────────────────────────────────────────────────────────────────────

/// Loads holiday calendars keyed by their `name`, which is the upper-case
/// country code the calendar answers for.
pub struct HolidayCalendarLoader;

impl IManager<dyn HolidayCalendar + Send + Sync, ()> for HolidayCalendarLoader {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<dyn HolidayCalendar + Send + Sync>,
        json_value: serde_json::Value,
        _supports: &(),
    ) -> Result<(), ManagerError> {
        let named_obj: NamedJsonObject =
            parse_json_value(json_value.clone())?;
        let calendar_typed_object: CalendarTypedObject =
            parse_json_value(json_value.clone())?;
        let name = named_obj.name().trim().to_ascii_uppercase();

        let calendar = match calendar_typed_object.calendar_type {
            CalendarType::SimpleCalendar => get_simple_calendar_from_json(&name, json_value)?
        };
        builder.insert(name, calendar);
        Ok(())
    }
}
