pub mod date_codec;
pub mod error;
pub mod labels;
pub mod month_day;
