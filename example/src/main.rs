use tracing::trace_span;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use monet::Result;

mod config;
mod decode;
mod encode;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::Registry::default()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    trace_span!("config").in_scope(config::main)?;
    trace_span!("decode").in_scope(decode::main)?;
    trace_span!("encode").in_scope(encode::main)?;

    Ok(())
}
