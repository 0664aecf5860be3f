pub mod day_layout;
pub mod program;
pub mod session;
pub mod speaker;
pub mod stage;

/// A calendar date derived from a session start; never stored.
pub type Day = chrono::NaiveDate;
