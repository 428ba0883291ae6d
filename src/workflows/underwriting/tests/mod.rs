mod common;
mod metrics;
mod routing;
