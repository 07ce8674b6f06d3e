//! Miscellaneous

mod env_vars;
mod from_radix_10;

pub use env_vars::{EnvVars, FromVars};
pub use from_radix_10::FromRadix10;

/// Fetches the value of the environment variable `name` of the current process.
#[cfg(feature = "std")]
#[inline]
pub fn var(name: &str) -> crate::Result<alloc::string::String> {
  Ok(std::env::var(name)?)
}

/// Installs a global `tracing` subscriber that prints events as an indented tree on `stderr`.
///
/// Filtering directives are read from `RUST_LOG` and fall back to `fallback_opt`.
#[cfg(feature = "_tracing-tree")]
#[inline]
pub fn tracing_tree_init(fallback_opt: Option<&str>) -> crate::Result<()> {
  use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};
  let fallback = fallback_opt.unwrap_or("");
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
  let tracing_tree = tracing_tree::HierarchicalLayer::default()
    .with_deferred_spans(true)
    .with_indent_amount(2)
    .with_indent_lines(true)
    .with_targets(true)
    .with_timer(crate::calendar::TracingTreeTimer)
    .with_verbose_entry(false)
    .with_verbose_exit(false)
    .with_writer(std::io::stderr);
  tracing_subscriber::Registry::default().with(env_filter).with(tracing_tree).try_init()?;
  Ok(())
}

#[cfg(not(feature = "atoi"))]
pub(crate) fn from_utf8_basic(bytes: &[u8]) -> crate::Result<&str> {
  Ok(core::str::from_utf8(bytes)?)
}

#[cfg(all(feature = "std", test))]
mod tests {
  use crate::{Error, VarError, misc::var};

  #[test]
  fn missing_var() {
    assert!(matches!(
      var("GREGOR_SURELY_MISSING_VARIABLE"),
      Err(Error::VarError(VarError::NotPresent))
    ));
  }
}
