//! Winter 2025 offering (2025-01-06 through 2025-03-21).

use chrono::Weekday::{self, Fri, Mon, Thu, Tue};

use crate::calendar::{CalendarData, CourseCalendar, TermDates};
use crate::date::CalendarDate;
use crate::error::CalendarResult;
use crate::item::{AwayItem, HolidayItem, LectureContent, LectureItem, TimeAndLocation};
use crate::reading::Reading;

fn verified(date: &str, weekday: Weekday) -> CalendarResult<CalendarDate> {
    CalendarDate::verified(date, weekday)
}

fn time_and_location_lecture() -> TimeAndLocation {
    TimeAndLocation::new("10:00 to 11:20", "CSE2 G10")
}

fn lecture(title: &str, date: CalendarDate) -> LectureItem {
    LectureItem {
        title: title.to_string(),
        dates: vec![date],
        time_and_locations: vec![time_and_location_lecture()],
        ..Default::default()
    }
}

/// The winter 2025 calendar dataset.
pub fn calendar() -> CalendarResult<CourseCalendar> {
    let mut data = CalendarData::for_term(TermDates {
        start: verified("2025-01-06", Mon)?,
        end: verified("2025-03-21", Fri)?,
    });

    data.aways = vec![
        AwayItem {
            title: "James Away".to_string(),
            dates: vec![verified("2025-02-06", Thu)?],
            ..Default::default()
        },
        AwayItem {
            title: "Anant Away".to_string(),
            dates: vec![verified("2025-02-20", Thu)?],
            ..Default::default()
        },
    ];

    data.holidays = vec![
        HolidayItem {
            title: "Martin Luther King Jr. Day".to_string(),
            dates: vec![verified("2025-01-20", Mon)?],
        },
        HolidayItem {
            title: "Presidents' Day".to_string(),
            dates: vec![verified("2025-02-17", Mon)?],
        },
    ];

    data.lectures = vec![
        // Week 1
        LectureItem {
            content: LectureContent::Nonstandard("NoReading".to_string()),
            ..lecture("Introductions and Overview", verified("2025-01-07", Tue)?)
        },
        LectureItem {
            content: LectureContent::Nonstandard("VisionsOfHCI".to_string()),
            ..lecture(
                "Visions of Human-Computer Interaction",
                verified("2025-01-09", Thu)?,
            )
        },
        // Week 2
        LectureItem {
            content: LectureContent::Nonstandard("ContributionsInHCI".to_string()),
            ..lecture(
                "Contributions in Human-Computer Interaction",
                verified("2025-01-14", Tue)?,
            )
        },
        LectureItem {
            content: LectureContent::Nonstandard("NoReading".to_string()),
            ..lecture(
                "In-Class Time for Project Groups",
                verified("2025-01-16", Thu)?,
            )
        },
        // Week 3
        LectureItem {
            content: LectureContent::Nonstandard("NoReading".to_string()),
            additional_resource_readings: vec![Reading::new(
                "Jonathan Grudin",
                "A Moving Target - The Evolution of Human-Computer Interaction",
                "Book Chapter",
            )],
            ..lecture(
                "Human-Computer Interaction History",
                verified("2025-01-21", Tue)?,
            )
        },
        LectureItem {
            content: LectureContent::ReadingsStandard {
                framing: Reading::new(
                    "Saul Greenberg, Bill Buxton",
                    "Usability Evaluation Considered Harmful (Some of the Time)",
                    "CHI 2008",
                ),
                instances: vec![
                    Reading::new(
                        "Dan R. Olsen, Jr",
                        "Evaluating User Interface Systems Research",
                        "UIST 2007",
                    ),
                    Reading::new(
                        "James Fogarty",
                        "Code and Contribution in Interactive Systems Research",
                        "CHI 2017 Workshop on #HCI.Tools: Strategies and Best Practices for \
                         Designing, Evaluating, and Sharing Technical HCI Toolkits",
                    ),
                ],
            },
            ..lecture(
                "Usability Evaluation Considered Harmful",
                verified("2025-01-23", Thu)?,
            )
        },
        // Research topic lectures, scheduled as the term develops.
        lecture("Research Topic: TBD", verified("2025-01-28", Tue)?),
        lecture("Research Topic: TBD", verified("2025-01-30", Thu)?),
        lecture("Research Topic: TBD", verified("2025-02-04", Tue)?),
        lecture("Research Topic: TBD", verified("2025-02-06", Thu)?),
        lecture("Research Topic: TBD", verified("2025-02-18", Tue)?),
        lecture("Research Topic: TBD", verified("2025-02-20", Thu)?),
        lecture("Research Topic: TBD", verified("2025-02-25", Tue)?),
        lecture("Research Topic: TBD", verified("2025-02-27", Thu)?),
        lecture("Research Topic: TBD", verified("2025-03-11", Tue)?),
        lecture("Research Topic: TBD", verified("2025-03-13", Thu)?),
        LectureItem {
            title: "Project Milestone Meetings".to_string(),
            dates: vec![
                verified("2025-02-11", Tue)?,
                verified("2025-02-13", Thu)?,
                verified("2025-03-04", Tue)?,
                verified("2025-03-06", Thu)?,
            ],
            time_and_locations: vec![time_and_location_lecture()],
            ..Default::default()
        },
    ];

    CourseCalendar::new(data)
}
