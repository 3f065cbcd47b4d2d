use crate::service::{HEALTH_CHECK_PATH, METRICS_PATH, PREFIX};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use tracing::subscriber::set_global_default;
use tracing::Level;
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder, TracingLogger};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

pub struct Telemetry<T>
where
    T: SubscriberExt + Send + Sync + 'static,
{
    pub subscriber: T,
}

/// Compose the bunyan JSON layer and an env filter into a `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `env_filter` when it is set.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> Telemetry<impl SubscriberExt + Send + Sync + 'static>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let formatting_layer: BunyanFormattingLayer<Sink> = BunyanFormattingLayer::new(name, sink);

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));

    Telemetry {
        subscriber: Registry::default()
            .with(filter_layer)
            .with(JsonStorageLayer)
            .with(formatting_layer),
    }
}

/// Register a subscriber as global default to process span data.
///
/// It should only be called once!
pub fn init_subscriber(subscriber: Telemetry<impl SubscriberExt + Send + Sync + 'static>) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber.subscriber).expect("Failed to set subscriber");
}

/// Root span for every request; probes are demoted to TRACE.
pub struct SpanBuilder;

impl SpanBuilder {
    fn is_probe(path: &str) -> bool {
        path.strip_prefix(PREFIX)
            .is_some_and(|rest| rest == HEALTH_CHECK_PATH || rest == METRICS_PATH)
    }
}

impl RootSpanBuilder for SpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        let level = if Self::is_probe(request.path()) {
            Level::TRACE
        } else {
            Level::INFO
        };
        tracing_actix_web::root_span!(level = level, request)
    }

    fn on_request_end<B: MessageBody>(
        span: Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

pub struct Tracer {
    tracer: TracingLogger<SpanBuilder>,
}

impl Tracer {
    pub fn new() -> Self {
        Tracer {
            tracer: TracingLogger::<SpanBuilder>::new(),
        }
    }

    pub fn tracer(&self) -> TracingLogger<SpanBuilder> {
        self.tracer.clone()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new()
    }
}
