//! Hand-maintained calendar datasets, one module per course offering.
//!
//! Each term is a fresh literal: datasets are copied forward between terms
//! and edited by hand, which is why every date below is written through
//! [`CalendarDate::verified`](crate::CalendarDate::verified) with its
//! expected weekday. A wrong year, wrong weekday, or off-by-one day fails
//! the term's constructor instead of rendering a silently wrong calendar.

pub mod autumn_2024;
pub mod winter_2025;
