use std::error::Error;

use async_geolocate::{
    config::Settings,
    geolocation::StaticGeolocation,
    logging::init_logging,
    sink::ConsoleSink,
    transport::HttpTransport,
    Lookup, Style,
};
use futures_lite::future::block_on;
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    init_logging(&settings.log_level)?;
    debug!(?settings, "starting");

    let lookup = Lookup::new(
        StaticGeolocation::new(settings.position),
        HttpTransport::new()?,
        settings.endpoint,
    );

    block_on(async {
        lookup.run(Style::Chained, &ConsoleSink).await;
        lookup.run(Style::Sequential, &ConsoleSink).await;
    });

    Ok(())
}
