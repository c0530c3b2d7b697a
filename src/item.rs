//! Calendar item variants.
//!
//! A calendar item is any schedulable entity placed on one or more dates:
//! an assignment, a lecture, a holiday, an event, an office hour, a studio
//! session, or an instructor-away day. The set is closed; presentation code
//! matches exhaustively on [`CalendarItem`] instead of probing fields.
//!
//! Every variant carries `dates: Vec<CalendarDate>`, one entry per day the
//! item occurs. Single-day items are one-element sequences, so date
//! filtering is a uniform membership test. The list must be non-empty; that
//! is enforced when the owning [`CourseCalendar`](crate::CourseCalendar) is
//! built.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::reading::Reading;

/// A guest speaker or visitor attached to a lecture.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub link: Option<String>,
}

impl Guest {
    pub fn new(name: &str) -> Self {
        Guest {
            name: name.to_string(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }
}

/// A meeting time and place.
///
/// `time` is a display string such as `"10:00 to 11:20"`; the data model
/// does not interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeAndLocation {
    pub time: String,
    pub location: String,
}

impl TimeAndLocation {
    pub fn new(time: &str, location: &str) -> Self {
        TimeAndLocation {
            time: time.to_string(),
            location: location.to_string(),
        }
    }
}

/// Where an assignment is turned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionChannel {
    /// The only channel observed across course terms to date.
    Canvas,
}

/// Submission metadata for an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub channel: SubmissionChannel,
    /// Due time as displayed, e.g. `"11:59pm"`.
    pub time: String,
    pub link: String,
}

impl Submission {
    pub fn canvas(time: &str, link: &str) -> Self {
        Submission {
            channel: SubmissionChannel::Canvas,
            time: time.to_string(),
            link: link.to_string(),
        }
    }
}

/// Content attached to a lecture.
///
/// Exactly one of: no content, unstructured content the presentation layer
/// renders as-is, or the standard reading structure of one framing reading
/// plus an ordered list of instance readings to choose from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LectureContent {
    #[default]
    None,
    /// An opaque content token or pre-rendered markup; the presentation
    /// layer resolves it (the data model does not interpret it).
    Nonstandard(String),
    ReadingsStandard {
        framing: Reading,
        instances: Vec<Reading>,
    },
}

/// A graded deliverable with a due date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssignmentItem {
    pub title: String,
    pub link: Option<String>,
    pub dates: Vec<CalendarDate>,
    pub submission: Option<Submission>,
}

/// A university holiday (no instruction).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HolidayItem {
    pub title: String,
    pub dates: Vec<CalendarDate>,
}

/// A class session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureItem {
    pub title: String,
    pub dates: Vec<CalendarDate>,
    pub guests: Vec<Guest>,
    pub time_and_locations: Vec<TimeAndLocation>,
    pub content: LectureContent,
    pub additional_resource_readings: Vec<Reading>,
}

/// An instructor-away day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwayItem {
    pub title: String,
    pub dates: Vec<CalendarDate>,
    pub time_and_locations: Vec<TimeAndLocation>,
}

/// A one-off course event (exam, Q&A session, poster session).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub title: String,
    pub dates: Vec<CalendarDate>,
    pub time_and_locations: Vec<TimeAndLocation>,
    pub slides: Option<String>,
}

/// A recurring office hour.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeHourItem {
    pub title: String,
    pub dates: Vec<CalendarDate>,
    pub time_and_locations: Vec<TimeAndLocation>,
}

/// A studio or section session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioItem {
    pub title: String,
    pub dates: Vec<CalendarDate>,
    pub time_and_locations: Vec<TimeAndLocation>,
    pub slides: Option<String>,
}

/// Any schedulable entity placed on one or more dates.
///
/// Serialized with a `type` discriminator (`"assignment"`, `"holiday"`,
/// `"officeHour"`, ...) alongside the variant's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CalendarItem {
    Assignment(AssignmentItem),
    Away(AwayItem),
    Event(EventItem),
    Holiday(HolidayItem),
    Lecture(LectureItem),
    OfficeHour(OfficeHourItem),
    Studio(StudioItem),
}

impl CalendarItem {
    pub fn title(&self) -> &str {
        match self {
            CalendarItem::Assignment(item) => &item.title,
            CalendarItem::Away(item) => &item.title,
            CalendarItem::Event(item) => &item.title,
            CalendarItem::Holiday(item) => &item.title,
            CalendarItem::Lecture(item) => &item.title,
            CalendarItem::OfficeHour(item) => &item.title,
            CalendarItem::Studio(item) => &item.title,
        }
    }

    /// Every date this item occurs on.
    pub fn dates(&self) -> &[CalendarDate] {
        match self {
            CalendarItem::Assignment(item) => &item.dates,
            CalendarItem::Away(item) => &item.dates,
            CalendarItem::Event(item) => &item.dates,
            CalendarItem::Holiday(item) => &item.dates,
            CalendarItem::Lecture(item) => &item.dates,
            CalendarItem::OfficeHour(item) => &item.dates,
            CalendarItem::Studio(item) => &item.dates,
        }
    }

    /// Whether this item falls on `date`.
    ///
    /// Exact membership by canonical string equality; no ranges, no fuzzy
    /// matching.
    pub fn occurs_on(&self, date: &CalendarDate) -> bool {
        self.dates().contains(date)
    }
}

/// Keep only assignment items, in input order.
pub fn filter_assignment_items(items: &[CalendarItem]) -> Vec<&AssignmentItem> {
    items
        .iter()
        .filter_map(|item| match item {
            CalendarItem::Assignment(assignment) => Some(assignment),
            _ => None,
        })
        .collect()
}

/// Keep only away items, in input order.
pub fn filter_away_items(items: &[CalendarItem]) -> Vec<&AwayItem> {
    items
        .iter()
        .filter_map(|item| match item {
            CalendarItem::Away(away) => Some(away),
            _ => None,
        })
        .collect()
}

/// Keep only event items, in input order.
pub fn filter_event_items(items: &[CalendarItem]) -> Vec<&EventItem> {
    items
        .iter()
        .filter_map(|item| match item {
            CalendarItem::Event(event) => Some(event),
            _ => None,
        })
        .collect()
}

/// Keep only holiday items, in input order.
pub fn filter_holiday_items(items: &[CalendarItem]) -> Vec<&HolidayItem> {
    items
        .iter()
        .filter_map(|item| match item {
            CalendarItem::Holiday(holiday) => Some(holiday),
            _ => None,
        })
        .collect()
}

/// Keep only lecture items, in input order.
pub fn filter_lecture_items(items: &[CalendarItem]) -> Vec<&LectureItem> {
    items
        .iter()
        .filter_map(|item| match item {
            CalendarItem::Lecture(lecture) => Some(lecture),
            _ => None,
        })
        .collect()
}

/// Keep only office hour items, in input order.
pub fn filter_office_hour_items(items: &[CalendarItem]) -> Vec<&OfficeHourItem> {
    items
        .iter()
        .filter_map(|item| match item {
            CalendarItem::OfficeHour(office_hour) => Some(office_hour),
            _ => None,
        })
        .collect()
}

/// Keep only studio items, in input order.
pub fn filter_studio_items(items: &[CalendarItem]) -> Vec<&StudioItem> {
    items
        .iter()
        .filter_map(|item| match item {
            CalendarItem::Studio(studio) => Some(studio),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn holiday(title: &str, dates: &[&str]) -> CalendarItem {
        CalendarItem::Holiday(HolidayItem {
            title: title.to_string(),
            dates: dates.iter().map(|d| date(d)).collect(),
        })
    }

    #[test]
    fn test_occurs_on_single_date() {
        let item = holiday("Presidents' Day", &["2025-02-17"]);
        assert!(item.occurs_on(&date("2025-02-17")));
        assert!(!item.occurs_on(&date("2025-02-18")));
    }

    #[test]
    fn test_occurs_on_multi_date_membership() {
        let item = holiday(
            "Thanksgiving",
            &["2024-11-28", "2024-11-29"],
        );
        assert!(item.occurs_on(&date("2024-11-28")));
        assert!(item.occurs_on(&date("2024-11-29")));
        assert!(!item.occurs_on(&date("2024-11-27")));
    }

    #[test]
    fn test_filters_segment_by_variant_and_preserve_order() {
        let items = vec![
            holiday("Holiday A", &["2025-01-20"]),
            CalendarItem::Lecture(LectureItem {
                title: "Lecture".to_string(),
                dates: vec![date("2025-01-21")],
                ..Default::default()
            }),
            holiday("Holiday B", &["2025-02-17"]),
        ];

        let holidays = filter_holiday_items(&items);
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].title, "Holiday A");
        assert_eq!(holidays[1].title, "Holiday B");

        assert_eq!(filter_lecture_items(&items).len(), 1);
        assert!(filter_assignment_items(&items).is_empty());
        assert!(filter_studio_items(&items).is_empty());
    }

    #[test]
    fn test_serde_type_tag() {
        let item = holiday("Martin Luther King Jr. Day", &["2025-01-20"]);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "holiday");
        assert_eq!(json["dates"][0], "2025-01-20");

        let back: CalendarItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_serde_office_hour_tag_is_camel_case() {
        let item = CalendarItem::OfficeHour(OfficeHourItem {
            title: "Office Hour: Katelyn".to_string(),
            dates: vec![date("2024-10-02")],
            time_and_locations: vec![TimeAndLocation::new("3:30 to 4:30", "CSE 3rd floor breakout")],
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "officeHour");
        assert_eq!(json["timeAndLocations"][0]["time"], "3:30 to 4:30");
    }

    #[test]
    fn test_lecture_content_default_is_none() {
        let lecture = LectureItem {
            title: "Research Topic: TBD".to_string(),
            dates: vec![date("2025-01-28")],
            ..Default::default()
        };
        assert_eq!(lecture.content, LectureContent::None);
    }

    #[test]
    fn test_lecture_content_readings_standard_roundtrip() {
        let content = LectureContent::ReadingsStandard {
            framing: crate::Reading::new(
                "Jacob O. Wobbrock, Julie A. Kientz",
                "Research Contributions in Human-Computer Interaction",
                "Interactions, 2016",
            ),
            instances: vec![crate::Reading::new(
                "Dan R. Olsen, Jr",
                "Evaluating User Interface Systems Research",
                "UIST 2007",
            )],
        };
        let json = serde_json::to_string(&content).unwrap();
        let back: LectureContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }
}
