use axum_server::tls_rustls::RustlsConfig;
use chrono::NaiveDate;
use clap::Parser;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use thiserror::Error;
use utoipa::OpenApi;

use crate::api_doc::ApiDoc;
use crate::app::{OPENAPI_PATH, SWAGGER_UI_PATH, create_app};
use crate::clock::{ClockHandle, FixedClock, LocalClock};

mod api_doc;
mod app;
mod clock;
mod error;
mod forecast;
mod forecast_routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ip to listen to
    #[arg(short, long, env = "FORECAST_IP", default_value = "0.0.0.0")]
    ip: IpAddr,

    #[arg(short, long, env = "FORECAST_PORT", default_value_t = 3000)]
    port: u16,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    key_file_path: Option<String>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<String>,

    /// Generate forecasts relative to this date instead of the local date
    #[arg(short, long, env = "FORECAST_TODAY")]
    today: Option<NaiveDate>,

    /// Print the OpenAPI document and exit
    #[arg(long)]
    print_openapi: bool,
}

#[derive(Debug, Error)]
enum StartupError {
    #[error("both a key file and a certificate file are needed for tls")]
    IncompleteTls,
    #[error("could not serialize openapi document")]
    OpenApi {
        #[from]
        source: serde_json::Error,
    },
    #[error("server failed")]
    Io {
        #[from]
        source: io::Error,
    },
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    env_logger::init();

    let args = Args::parse();

    if args.print_openapi {
        println!("{}", ApiDoc::openapi().to_pretty_json()?);
        return Ok(());
    }

    let clock: ClockHandle = match args.today {
        Some(today) => {
            log::info!("using fixed date {} as today", today);
            Arc::new(FixedClock(today))
        }
        None => Arc::new(LocalClock),
    };
    let app = create_app(clock);

    let addr = SocketAddr::new(args.ip, args.port);
    log::info!("listening on {}", addr);
    log::info!(
        "openapi document at {}, swagger ui at {}",
        OPENAPI_PATH,
        SWAGGER_UI_PATH
    );
    match (args.key_file_path, args.cert_file_path) {
        (Some(key_file_path), Some(cert_file_path)) => {
            log::info!(
                "using tls with key file {} and cert file {}",
                key_file_path,
                cert_file_path
            );
            let tls = RustlsConfig::from_pem_file(cert_file_path, key_file_path).await?;
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await?;
        }
        (None, None) => {
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await?;
        }
        _ => return Err(StartupError::IncompleteTls),
    }
    Ok(())
}
