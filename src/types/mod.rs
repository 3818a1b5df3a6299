pub mod rgb;
pub mod view_mode;
pub mod weather_record;
