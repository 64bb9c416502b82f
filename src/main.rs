use onion_blacklist_sync::{
    cli::CommandLine, config::Config, config_api::ConfigApiClient, ct_log::CtLogFetcher,
    sync::BlacklistSync, telemetry,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = CommandLine::parse_args();

    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::load()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    let custom_hostnames = args.custom_hostnames_or(&config.blacklist.custom_hostnames);
    let sync = BlacklistSync::new(
        CtLogFetcher::new(config.ct_log.url)?,
        ConfigApiClient::new(&args.config_api_uri)?,
        custom_hostnames,
    );

    sync.run().await?.into_result()?;

    Ok(())
}
