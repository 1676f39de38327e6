#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![deny(unreachable_pub)]
#![deny(missing_copy_implementations)]
#![deny(missing_debug_implementations)]

use awslogs_forwarder::{
    DEFAULT_TASK_ROOT, LAMBDA_TASK_ROOT,
    config::{self, Config},
    forwarder::Forwarder,
    handler::handler,
    http, logger,
};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use std::{env, path::Path};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = load_config()?;

    enable_logging_subsystem(&config);

    // One client, and so one connection pool, for the life of the sandbox
    let client = http::get_client(&config);
    let forwarder = Forwarder::new(client, &config);
    info!("Forwarding CloudWatch logs to {}", forwarder.endpoint());

    let forwarder = &forwarder;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<_>| async move {
        handler(forwarder, event).await
    }))
    .await
}

fn load_config() -> Result<Config, Error> {
    let task_root = env::var(LAMBDA_TASK_ROOT).unwrap_or_else(|_| DEFAULT_TASK_ROOT.to_string());
    config::get_config(Path::new(&task_root))
        .map_err(|e| format!("Error loading configuration: {e:?}").into())
}

fn enable_logging_subsystem(config: &Config) {
    let env_filter = format!(
        "h2=off,hyper=off,rustls=off,{}",
        config.log_level.as_ref()
    );
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(env_filter).expect("could not parse log level in configuration"),
        )
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(false)
        .without_time()
        .event_format(logger::Formatter)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    debug!("Logging subsystem enabled");
}
