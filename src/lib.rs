/// Post Board - login-gated terminal dashboard.
///
/// Core library providing the session gate, the remote record source and
/// the filter/paginate browser, plus the ratatui front end driving them.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
