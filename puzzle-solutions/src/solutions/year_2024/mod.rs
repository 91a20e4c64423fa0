pub mod day_1;
pub mod day_11;
pub mod day_12;
