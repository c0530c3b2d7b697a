//! The validated course calendar and its query operations.

use chrono::{Datelike, Duration};
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{CalendarError, CalendarResult};
use crate::item::{
    AssignmentItem, AwayItem, CalendarItem, EventItem, HolidayItem, LectureItem, OfficeHourItem,
    StudioItem,
};

/// Inclusive date range over which a course offering runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDates {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

/// One calendar week of the instructional range.
///
/// Weeks start on Monday. `start_date` is the nominal Monday and may fall
/// before the instructional start; `dates` holds only in-range dates, so the
/// first and last weeks can be partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    pub start_date: CalendarDate,
    pub dates: Vec<CalendarDate>,
}

/// The literal dataset a course term supplies.
///
/// Each term's dataset is a fresh hand-maintained literal (see
/// [`crate::terms`]); collections keep source order, which is the stable
/// presentation order within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    pub dates_of_instruction: TermDates,
    pub assignments: Vec<AssignmentItem>,
    pub aways: Vec<AwayItem>,
    pub events: Vec<EventItem>,
    pub holidays: Vec<HolidayItem>,
    pub lectures: Vec<LectureItem>,
    pub office_hours: Vec<OfficeHourItem>,
    pub studios: Vec<StudioItem>,
}

impl CalendarData {
    /// An empty dataset for the given instructional range. Term literals and
    /// test fixtures fill in the collections they use.
    pub fn for_term(dates_of_instruction: TermDates) -> Self {
        CalendarData {
            dates_of_instruction,
            assignments: Vec::new(),
            aways: Vec::new(),
            events: Vec::new(),
            holidays: Vec::new(),
            lectures: Vec::new(),
            office_hours: Vec::new(),
            studios: Vec::new(),
        }
    }
}

/// A validated, immutable course calendar.
///
/// [`CourseCalendar::new`] is the single validation point: it fails fast on
/// an inverted instructional range or on an item with no dates, and no
/// partially-validated calendar is ever exposed. Every query afterwards is
/// an infallible, side-effect-free computation, so a calendar can be shared
/// freely across concurrent readers.
///
/// Serde goes through the same gate: a calendar serializes as its
/// [`CalendarData`] and deserialization re-runs [`CourseCalendar::new`], so
/// an inverted range or an empty dates list cannot enter through a
/// serialized dataset either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarData", into = "CalendarData")]
pub struct CourseCalendar {
    data: CalendarData,
}

impl TryFrom<CalendarData> for CourseCalendar {
    type Error = CalendarError;

    fn try_from(data: CalendarData) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl From<CourseCalendar> for CalendarData {
    fn from(calendar: CourseCalendar) -> Self {
        calendar.data
    }
}

impl CourseCalendar {
    /// Validate a term dataset and build the calendar.
    ///
    /// Individual dates are already valid by construction ([`CalendarDate`]
    /// has no unvalidated constructor, and term literals additionally assert
    /// each date's weekday via [`CalendarDate::verified`]); this checks the
    /// cross-cutting invariants: `start <= end`, and a non-empty `dates`
    /// list on every item.
    pub fn new(data: CalendarData) -> CalendarResult<Self> {
        let range = &data.dates_of_instruction;
        if range.start > range.end {
            return Err(CalendarError::InvalidRange {
                start: range.start.to_string(),
                end: range.end.to_string(),
            });
        }

        let titled_dates = data
            .assignments
            .iter()
            .map(|item| (&item.title, &item.dates))
            .chain(data.aways.iter().map(|item| (&item.title, &item.dates)))
            .chain(data.events.iter().map(|item| (&item.title, &item.dates)))
            .chain(data.holidays.iter().map(|item| (&item.title, &item.dates)))
            .chain(data.lectures.iter().map(|item| (&item.title, &item.dates)))
            .chain(
                data.office_hours
                    .iter()
                    .map(|item| (&item.title, &item.dates)),
            )
            .chain(data.studios.iter().map(|item| (&item.title, &item.dates)));

        for (title, dates) in titled_dates {
            if dates.is_empty() {
                return Err(CalendarError::EmptyDates {
                    title: title.clone(),
                });
            }
        }

        Ok(CourseCalendar { data })
    }

    /// First day of instruction.
    pub fn start(&self) -> &CalendarDate {
        &self.data.dates_of_instruction.start
    }

    /// Last day of instruction (inclusive).
    pub fn end(&self) -> &CalendarDate {
        &self.data.dates_of_instruction.end
    }

    /// Every calendar date of the instructional range, ascending.
    pub fn instructional_dates(&self) -> Vec<CalendarDate> {
        let end = self.end().naive();
        self.start()
            .naive()
            .iter_days()
            .take_while(|day| *day <= end)
            .map(CalendarDate::from_naive)
            .collect()
    }

    /// The instructional range partitioned into Monday-start calendar weeks.
    ///
    /// Concatenating the `dates` of every returned week reproduces
    /// [`instructional_dates`](Self::instructional_dates) exactly: boundary
    /// weeks are clamped to the range rather than padded.
    pub fn instructional_weeks(&self) -> Vec<CalendarWeek> {
        let start = self.start().naive();
        let end = self.end().naive();

        let mut weeks = Vec::new();
        let mut week_start =
            start - Duration::days(i64::from(start.weekday().num_days_from_monday()));

        while week_start <= end {
            let week_end = week_start + Duration::days(6);
            let clamped_end = week_end.min(end);
            let dates = week_start
                .max(start)
                .iter_days()
                .take_while(|day| *day <= clamped_end)
                .map(CalendarDate::from_naive)
                .collect();

            weeks.push(CalendarWeek {
                start_date: CalendarDate::from_naive(week_start),
                dates,
            });

            week_start += Duration::days(7);
        }

        weeks
    }

    /// Every item in the dataset as one flat sequence.
    ///
    /// Categories are flattened in a fixed order (assignments, aways,
    /// events, holidays, lectures, office hours, studios); within a
    /// category, source literal order is preserved.
    pub fn items(&self) -> Vec<CalendarItem> {
        let data = &self.data;
        let mut items = Vec::with_capacity(
            data.assignments.len()
                + data.aways.len()
                + data.events.len()
                + data.holidays.len()
                + data.lectures.len()
                + data.office_hours.len()
                + data.studios.len(),
        );
        items.extend(data.assignments.iter().cloned().map(CalendarItem::Assignment));
        items.extend(data.aways.iter().cloned().map(CalendarItem::Away));
        items.extend(data.events.iter().cloned().map(CalendarItem::Event));
        items.extend(data.holidays.iter().cloned().map(CalendarItem::Holiday));
        items.extend(data.lectures.iter().cloned().map(CalendarItem::Lecture));
        items.extend(data.office_hours.iter().cloned().map(CalendarItem::OfficeHour));
        items.extend(data.studios.iter().cloned().map(CalendarItem::Studio));
        items
    }

    /// Every item falling on `date`.
    ///
    /// An empty result is a normal state ("no items today"), never an error.
    pub fn items_on_date(&self, date: &CalendarDate) -> Vec<CalendarItem> {
        self.items()
            .into_iter()
            .filter(|item| item.occurs_on(date))
            .collect()
    }

    pub fn assignments(&self) -> &[AssignmentItem] {
        &self.data.assignments
    }

    pub fn aways(&self) -> &[AwayItem] {
        &self.data.aways
    }

    pub fn events(&self) -> &[EventItem] {
        &self.data.events
    }

    pub fn holidays(&self) -> &[HolidayItem] {
        &self.data.holidays
    }

    pub fn lectures(&self) -> &[LectureItem] {
        &self.data.lectures
    }

    pub fn office_hours(&self) -> &[OfficeHourItem] {
        &self.data.office_hours
    }

    pub fn studios(&self) -> &[StudioItem] {
        &self.data.studios
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn term(start: &str, end: &str) -> TermDates {
        TermDates {
            start: date(start),
            end: date(end),
        }
    }

    fn empty_calendar(start: &str, end: &str) -> CourseCalendar {
        CourseCalendar::new(CalendarData::for_term(term(start, end))).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let err = CourseCalendar::new(CalendarData::for_term(term("2025-03-21", "2025-01-06")))
            .unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidRange {
                start: "2025-03-21".to_string(),
                end: "2025-01-06".to_string(),
            }
        );
    }

    #[test]
    fn test_new_accepts_single_day_range() {
        let calendar = empty_calendar("2025-01-06", "2025-01-06");
        assert_eq!(calendar.instructional_dates().len(), 1);
    }

    #[test]
    fn test_new_rejects_item_with_no_dates() {
        let mut data = CalendarData::for_term(term("2025-01-06", "2025-03-21"));
        data.holidays.push(HolidayItem {
            title: "Phantom Holiday".to_string(),
            dates: vec![],
        });

        let err = CourseCalendar::new(data).unwrap_err();
        assert_eq!(
            err,
            CalendarError::EmptyDates {
                title: "Phantom Holiday".to_string(),
            }
        );
    }

    #[test]
    fn test_instructional_dates_three_day_range() {
        let calendar = empty_calendar("2025-01-06", "2025-01-08");
        let dates = calendar.instructional_dates();
        let dates: Vec<&str> = dates.iter().map(CalendarDate::as_str).collect();
        assert_eq!(dates, vec!["2025-01-06", "2025-01-07", "2025-01-08"]);
    }

    #[test]
    fn test_instructional_dates_length_and_ordering() {
        let calendar = empty_calendar("2025-01-06", "2025-03-21");
        let dates = calendar.instructional_dates();
        // Jan 6 .. Mar 21, 2025 inclusive is 75 days.
        assert_eq!(dates.len(), 75);
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(dates[0].as_str(), "2025-01-06");
        assert_eq!(dates[dates.len() - 1].as_str(), "2025-03-21");
    }

    #[test]
    fn test_instructional_dates_cross_month_no_gaps() {
        let calendar = empty_calendar("2025-01-30", "2025-02-02");
        let dates = calendar.instructional_dates();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[1].as_str(), "2025-01-31");
        assert_eq!(dates[2].as_str(), "2025-02-01");
    }

    #[test]
    fn test_instructional_weeks_concatenation_reproduces_dates() {
        let calendar = empty_calendar("2025-01-06", "2025-03-21");
        let concatenated: Vec<CalendarDate> = calendar
            .instructional_weeks()
            .into_iter()
            .flat_map(|week| week.dates)
            .collect();
        assert_eq!(concatenated, calendar.instructional_dates());
    }

    #[test]
    fn test_instructional_weeks_start_on_monday() {
        let calendar = empty_calendar("2025-01-06", "2025-03-21");
        for week in calendar.instructional_weeks() {
            assert_eq!(week.start_date.weekday(), chrono::Weekday::Mon);
        }
    }

    #[test]
    fn test_instructional_weeks_clamp_partial_first_week() {
        // Jan 8, 2025 is a Wednesday; its week nominally starts Mon Jan 6.
        let calendar = empty_calendar("2025-01-08", "2025-01-14");
        let weeks = calendar.instructional_weeks();
        assert_eq!(weeks.len(), 2);

        assert_eq!(weeks[0].start_date.as_str(), "2025-01-06");
        assert_eq!(weeks[0].dates.len(), 5);
        assert_eq!(weeks[0].dates[0].as_str(), "2025-01-08");
        assert_eq!(weeks[0].dates[4].as_str(), "2025-01-12");

        assert_eq!(weeks[1].start_date.as_str(), "2025-01-13");
        assert_eq!(weeks[1].dates.len(), 2);
    }

    #[test]
    fn test_items_flattening_order_is_stable() {
        let mut data = CalendarData::for_term(term("2025-01-06", "2025-03-21"));
        data.lectures.push(LectureItem {
            title: "Lecture One".to_string(),
            dates: vec![date("2025-01-07")],
            ..Default::default()
        });
        data.lectures.push(LectureItem {
            title: "Lecture Two".to_string(),
            dates: vec![date("2025-01-09")],
            ..Default::default()
        });
        data.holidays.push(HolidayItem {
            title: "Martin Luther King Jr. Day".to_string(),
            dates: vec![date("2025-01-20")],
        });

        let calendar = CourseCalendar::new(data).unwrap();
        let items = calendar.items();
        let titles: Vec<&str> = items.iter().map(CalendarItem::title).collect();
        // Holidays flatten before lectures; lecture order is source order.
        assert_eq!(
            titles,
            vec!["Martin Luther King Jr. Day", "Lecture One", "Lecture Two"]
        );
    }

    #[test]
    fn test_items_on_date_empty_is_ok() {
        let calendar = empty_calendar("2025-01-06", "2025-03-21");
        assert!(calendar.items_on_date(&date("2025-01-06")).is_empty());
    }

    #[test]
    fn test_items_on_date_single_date_item() {
        let mut data = CalendarData::for_term(term("2025-01-06", "2025-03-21"));
        data.lectures.push(LectureItem {
            title: "Introductions and Overview".to_string(),
            dates: vec![date("2025-01-07")],
            ..Default::default()
        });
        let calendar = CourseCalendar::new(data).unwrap();

        let on_day = calendar.items_on_date(&date("2025-01-07"));
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].title(), "Introductions and Overview");
        assert!(calendar.items_on_date(&date("2025-01-08")).is_empty());
    }

    #[test]
    fn test_items_on_date_multi_date_item() {
        let meeting_dates = ["2025-02-11", "2025-02-13", "2025-03-04", "2025-03-06"];
        let mut data = CalendarData::for_term(term("2025-01-06", "2025-03-21"));
        data.lectures.push(LectureItem {
            title: "Project Milestone Meetings".to_string(),
            dates: meeting_dates.iter().map(|d| date(d)).collect(),
            ..Default::default()
        });
        let calendar = CourseCalendar::new(data).unwrap();

        for day in meeting_dates {
            let on_day = calendar.items_on_date(&date(day));
            assert_eq!(on_day.len(), 1, "missing on {day}");
        }
        assert!(calendar.items_on_date(&date("2025-02-12")).is_empty());
        assert!(calendar.items_on_date(&date("2025-03-05")).is_empty());
    }

    #[test]
    fn test_serde_camel_case_dataset_keys() {
        let calendar = empty_calendar("2025-01-06", "2025-03-21");
        let json = serde_json::to_value(&calendar).unwrap();
        assert!(json.get("datesOfInstruction").is_some());
        assert!(json.get("officeHours").is_some());

        let back: CourseCalendar = serde_json::from_value(json).unwrap();
        assert_eq!(back, calendar);
    }

    #[test]
    fn test_deserialize_rejects_inverted_range() {
        let json = serde_json::json!({
            "datesOfInstruction": { "start": "2025-03-21", "end": "2025-01-06" },
            "assignments": [],
            "aways": [],
            "events": [],
            "holidays": [],
            "lectures": [],
            "officeHours": [],
            "studios": []
        });
        let result: Result<CourseCalendar, _> = serde_json::from_value(json.clone());
        assert!(result.is_err());

        // The raw dataset still deserializes; only the aggregate refuses.
        let data: CalendarData = serde_json::from_value(json).unwrap();
        assert!(matches!(
            CourseCalendar::new(data),
            Err(CalendarError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_deserialize_rejects_empty_dates_list() {
        let json = serde_json::json!({
            "datesOfInstruction": { "start": "2025-01-06", "end": "2025-03-21" },
            "assignments": [],
            "aways": [],
            "events": [],
            "holidays": [{ "title": "Phantom Holiday", "dates": [] }],
            "lectures": [],
            "officeHours": [],
            "studios": []
        });
        let result: Result<CourseCalendar, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
