//! Loads the records of one day from a JSON file and prints the map layers.
//!
//! Usage: `cargo run --example render_day -- records.json 0615 heatmap`

use vaycay::{short_label, JsonFileSource, MapSettings, MonthDay, VaycayError, ViewMode, WeatherSource};

#[tokio::main]
async fn main() -> Result<(), VaycayError> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "records.json".to_string());
    let day: MonthDay = match args.next() {
        Some(key) => key.parse()?,
        None => vaycay::today_as_month_day().parse()?,
    };
    let view_mode: ViewMode = args.next().as_deref().unwrap_or("markers").parse()?;

    let records = JsonFileSource::new(path).records_for(day).await?;
    println!(
        "{} cities on {} in {} mode",
        records.len(),
        short_label(day.day_of_year()),
        view_mode
    );

    let settings = MapSettings::default();
    let layers = settings.compositor().layers(&records, view_mode);
    match serde_json::to_string_pretty(&layers) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Could not serialize layers: {}", e),
    }
    Ok(())
}
