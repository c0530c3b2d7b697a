//! Autumn 2024 offering (2024-09-25 through 2024-12-06).

use chrono::Weekday::{self, Fri, Mon, Thu, Tue, Wed};

use crate::calendar::{CalendarData, CourseCalendar, TermDates};
use crate::date::CalendarDate;
use crate::error::CalendarResult;
use crate::item::{
    AssignmentItem, EventItem, HolidayItem, OfficeHourItem, StudioItem, Submission,
    TimeAndLocation,
};

fn verified(date: &str, weekday: Weekday) -> CalendarResult<CalendarDate> {
    CalendarDate::verified(date, weekday)
}

fn time_and_location_lecture() -> TimeAndLocation {
    TimeAndLocation::new("1:30 to 2:50", "CSE2 G20")
}

fn time_and_locations_section() -> Vec<TimeAndLocation> {
    vec![
        TimeAndLocation::new("10:30 to 11:20", "MGH 058"),
        TimeAndLocation::new("11:30 to 12:20", "MGH 058"),
    ]
}

fn assignment(
    title: &str,
    link: &str,
    date: CalendarDate,
    submit_time: &str,
    submit_link: &str,
) -> AssignmentItem {
    AssignmentItem {
        title: title.to_string(),
        link: Some(link.to_string()),
        dates: vec![date],
        submission: Some(Submission::canvas(submit_time, submit_link)),
    }
}

/// The autumn 2024 calendar dataset.
pub fn calendar() -> CalendarResult<CourseCalendar> {
    let mut data = CalendarData::for_term(TermDates {
        start: verified("2024-09-25", Wed)?,
        end: verified("2024-12-06", Fri)?,
    });

    data.holidays = vec![
        HolidayItem {
            title: "Veterans Day".to_string(),
            dates: vec![verified("2024-11-11", Mon)?],
        },
        HolidayItem {
            title: "Thanksgiving".to_string(),
            dates: vec![
                verified("2024-11-28", Thu)?,
                verified("2024-11-29", Fri)?,
            ],
        },
    ];

    data.events = vec![
        EventItem {
            title: "Exam Q&A".to_string(),
            dates: vec![verified("2024-11-18", Mon)?],
            time_and_locations: vec![TimeAndLocation::new("4:30 to 5:30", "Zoom")],
            slides: Some("https://canvas.uw.edu/files/126571016/".to_string()),
        },
        EventItem {
            title: "Exam".to_string(),
            dates: vec![verified("2024-11-19", Tue)?],
            time_and_locations: vec![time_and_location_lecture()],
            slides: None,
        },
        EventItem {
            title: "Poster Session".to_string(),
            dates: vec![verified("2024-12-09", Mon)?],
            time_and_locations: vec![TimeAndLocation::new("11:00 to 12:00", "CSE Atrium")],
            slides: None,
        },
    ];

    data.office_hours = vec![
        OfficeHourItem {
            title: "Office Hour: Katelyn".to_string(),
            time_and_locations: vec![TimeAndLocation::new(
                "3:30 to 4:30",
                "CSE 3rd floor breakout",
            )],
            dates: vec![
                verified("2024-10-02", Wed)?,
                verified("2024-10-09", Wed)?,
                verified("2024-10-16", Wed)?,
                verified("2024-10-23", Wed)?,
                verified("2024-10-30", Wed)?,
                verified("2024-11-06", Wed)?,
                verified("2024-11-13", Wed)?,
                verified("2024-11-20", Wed)?,
                verified("2024-12-04", Wed)?,
            ],
        },
        OfficeHourItem {
            title: "Office Hour: Jesse".to_string(),
            time_and_locations: vec![TimeAndLocation::new("11:00 to 12:00", "Zoom")],
            dates: vec![
                verified("2024-10-03", Thu)?,
                verified("2024-10-10", Thu)?,
                verified("2024-10-17", Thu)?,
                verified("2024-10-24", Thu)?,
                verified("2024-10-31", Thu)?,
                verified("2024-11-07", Thu)?,
                verified("2024-11-14", Thu)?,
                verified("2024-11-21", Thu)?,
                verified("2024-12-05", Thu)?,
            ],
        },
    ];

    data.studios = vec![
        StudioItem {
            title: "Studio".to_string(),
            dates: vec![
                verified("2024-09-27", Fri)?,
                verified("2024-10-04", Fri)?,
                verified("2024-10-11", Fri)?,
                verified("2024-10-18", Fri)?,
                verified("2024-10-25", Fri)?,
                verified("2024-11-08", Fri)?,
                verified("2024-11-15", Fri)?,
                verified("2024-11-22", Fri)?,
                verified("2024-12-06", Fri)?,
            ],
            time_and_locations: time_and_locations_section(),
            slides: None,
        },
        StudioItem {
            title: "Studio".to_string(),
            dates: vec![verified("2024-10-24", Thu)?],
            time_and_locations: vec![time_and_location_lecture()],
            slides: Some("https://canvas.uw.edu/files/125633734/".to_string()),
        },
        StudioItem {
            title: "Studio".to_string(),
            dates: vec![
                verified("2024-11-26", Tue)?,
                verified("2024-12-03", Tue)?,
                verified("2024-12-05", Thu)?,
            ],
            time_and_locations: vec![time_and_location_lecture()],
            slides: None,
        },
        StudioItem {
            title: "Design Presentations".to_string(),
            dates: vec![
                verified("2024-10-29", Tue)?,
                verified("2024-10-31", Thu)?,
            ],
            time_and_locations: vec![time_and_location_lecture()],
            slides: None,
        },
        StudioItem {
            title: "Design Presentations".to_string(),
            dates: vec![verified("2024-11-01", Fri)?],
            time_and_locations: time_and_locations_section(),
            slides: None,
        },
    ];

    data.assignments = vec![
        // Assignment 0
        assignment(
            "Assignment 0: Introduction Slide",
            "/assignments/#assignment-0",
            verified("2024-10-02", Wed)?,
            "8:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9634757",
        ),
        // Milestone 1
        assignment(
            "Assignment 1.1: Individual Brainstorm",
            "/assignments/#assignment-1-1",
            verified("2024-09-26", Thu)?,
            "10:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9635629",
        ),
        assignment(
            "Assignment 1.2: Group Proposals",
            "/assignments/#assignment-1-2",
            verified("2024-09-30", Mon)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9634760",
        ),
        assignment(
            "Assignment 1.3: Final Proposal",
            "/assignments/#assignment-1-3",
            verified("2024-10-03", Thu)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9634761",
        ),
        assignment(
            "Assignment 1.4: Design Ideation",
            "/assignments/#assignment-1-4",
            verified("2024-10-04", Fri)?,
            "8:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9636906",
        ),
        assignment(
            "Milestone 1: Report",
            "/assignments/#milestone-1-report",
            verified("2024-10-07", Mon)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9636932",
        ),
        // Milestone 2
        assignment(
            "Assignment 2.1: Design Research Plan",
            "/assignments/#assignment-2-1",
            verified("2024-10-10", Thu)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9730292",
        ),
        assignment(
            "Assignment 2.2: Design Research Check-In",
            "/assignments/#assignment-2-2",
            verified("2024-10-17", Thu)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9730293",
        ),
        assignment(
            "Milestone 2: Report",
            "/assignments/#milestone-2-report",
            verified("2024-10-21", Mon)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9755342",
        ),
        // Milestone 3
        assignment(
            "Assignment 3.1: Task Review",
            "/assignments/#assignment-3-1",
            verified("2024-10-23", Wed)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9759789",
        ),
        assignment(
            "Assignment 3.2: Design Review",
            "/assignments/#assignment-3-2",
            verified("2024-10-28", Mon)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9764927",
        ),
        assignment(
            "Assignment 3.4: Scenarios and Storyboards",
            "/assignments/#assignment-3-4",
            verified("2024-11-05", Tue)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9776564",
        ),
        assignment(
            "Milestone 3: Report",
            "/assignments/#milestone-3-report",
            verified("2024-11-08", Fri)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9776723",
        ),
        // Milestone 4
        assignment(
            "Assignment 4.1: Paper Prototype",
            "/assignments/#assignment-4-1",
            verified("2024-11-12", Tue)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9793018",
        ),
        assignment(
            "Assignment 4.2: Heuristic Evaluation",
            "/assignments/#assignment-4-2",
            verified("2024-11-14", Thu)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9793114",
        ),
        assignment(
            "Assignment 4.3: Usability Testing",
            "/assignments/#assignment-4-3",
            verified("2024-11-25", Mon)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9795140",
        ),
        assignment(
            "Milestone 4: Report",
            "/assignments/#milestone-4-report",
            verified("2024-11-27", Wed)?,
            "8:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9795144",
        ),
        // Milestone 5
        assignment(
            "Assignment 5: Digital Mockup",
            "/assignments/#assignment-5-digital-mockup",
            verified("2024-12-02", Mon)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9821454",
        ),
        assignment(
            "Assignment 5: Initial Poster",
            "/assignments/#assignment-5-poster",
            verified("2024-12-02", Mon)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9821457",
        ),
        assignment(
            "Assignment 5: Final Poster",
            "/assignments/#assignment-5-poster",
            verified("2024-12-04", Wed)?,
            "3:00pm",
            "https://canvas.uw.edu/courses/1746586/assignments/9821486",
        ),
    ];

    CourseCalendar::new(data)
}
