pub mod calendar;
pub mod history;
