use super::{fallback, health_check, render_metrics};
use crate::service::{AppState, Config, Tracer};
use actix_web::{
    dev::Server,
    web::{self, scope, Data},
    App, HttpServer,
};
use anyhow::Context;
use std::net::TcpListener;

pub const PREFIX: &str = "/v1";
pub const HEALTH_CHECK_PATH: &str = "/health_check";
pub const METRICS_PATH: &str = "/metrics";

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn start(configuration: &Config) -> Result<Self, anyhow::Error> {
        tracing::info!(
            "Starting application with configuration: {}{:#?}{}",
            "\n",
            &configuration,
            "\n"
        );
        let address = format!(
            "{}:{}",
            configuration.server().host(),
            configuration.server().port()
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind to {}.", address))?;
        let port = listener.local_addr()?.port();
        let state = AppState::new(configuration.clone());

        let server = run(listener, state)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn spawn(self) -> Result<(), anyhow::Error> {
        self.server
            .await
            .context("Failed to spawn http application.")
    }
}

fn run(listener: TcpListener, state: AppState) -> Result<Server, anyhow::Error> {
    let server = HttpServer::new(move || {
        let trace: Tracer = Tracer::default();
        App::new()
            .wrap(trace.tracer())
            .service(scope(PREFIX).service(health_check).service(render_metrics)) // /v1
            .default_service(web::to(fallback))
            .app_data(Data::new(state.clone()))
    })
    .listen(listener)
    .context("Failed to listen on the bound address.")?
    .run();

    Ok(server)
}
