//! Work week definitions and working day counts.

pub mod work_week;
pub mod working_days;

pub use work_week::WorkWeek;
pub use working_days::working_days;
