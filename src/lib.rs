//! Course calendar data model.
//!
//! This crate is the data layer of a course website's calendar:
//! - [`CalendarDate`] for strict `YYYY-MM-DD` dates with construction-time
//!   day-of-week assertions to catch hand-entry errors
//! - [`CalendarItem`] and its variant types for everything placed on the
//!   calendar (assignments, lectures, holidays, events, office hours,
//!   studios, instructor-away days)
//! - [`CourseCalendar`] for the validated per-term dataset and its queries:
//!   instructional date/week enumeration and per-date item filtering
//! - [`terms`] for the hand-maintained dataset of each course offering
//!
//! Datasets are injected at construction and immutable afterwards; all
//! queries are pure and safe to call from concurrent readers.

pub mod calendar;
pub mod date;
pub mod error;
pub mod item;
pub mod reading;
pub mod terms;

// Re-export the model types at crate root for convenience
pub use calendar::{CalendarData, CalendarWeek, CourseCalendar, TermDates};
pub use date::CalendarDate;
pub use error::{CalendarError, CalendarResult};
pub use item::{
    AssignmentItem, AwayItem, CalendarItem, EventItem, Guest, HolidayItem, LectureContent,
    LectureItem, OfficeHourItem, StudioItem, Submission, SubmissionChannel, TimeAndLocation,
    filter_assignment_items, filter_away_items, filter_event_items, filter_holiday_items,
    filter_lecture_items, filter_office_hour_items, filter_studio_items,
};
pub use reading::Reading;
