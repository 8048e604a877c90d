use actix_web::{App, HttpServer, web::Data};
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{debug, error, info};
use std::io::Write;
use tokio::signal::unix::{SignalKind, signal};
use wifi_prov_ui::{
    api::Api,
    config::AppConfig,
    scan_provider::FixtureScanProvider,
};

type UiApi = Api<FixtureScanProvider>;

#[actix_web::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let config = AppConfig::load().context("failed to load configuration")?;
    info!(
        "serving {:?} on port {}, scan fixture {:?} (max {} records)",
        config.ui.dist_dir, config.ui.port, config.scan.fixture_path, config.scan.max_list_size
    );

    let mut sigterm =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    let api = Data::new(UiApi::new(
        FixtureScanProvider::new(&config.scan),
        config.ui.dist_dir.clone(),
    ));
    let dist_dir = config.ui.dist_dir.clone();

    let server = HttpServer::new(move || {
        let dist_dir = dist_dir.clone();
        App::new()
            .app_data(api.clone())
            .configure(|cfg| UiApi::configure(cfg, dist_dir))
    })
    .bind(("0.0.0.0", config.ui.port))
    .context("failed to bind server")?
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => debug!("ctrl-c received"),
        _ = sigterm.recv() => debug!("SIGTERM received"),
        result = server_task => {
            match result {
                Ok(Ok(())) => debug!("server stopped normally"),
                Ok(Err(e)) => error!("server stopped with error: {e}"),
                Err(e) => error!("server task panicked: {e}"),
            }
        },
    }

    info!("shutting down");
    server_handle.stop(true).await;
    info!("shutdown complete");

    Ok(())
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));
}
