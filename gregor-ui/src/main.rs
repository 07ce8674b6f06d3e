//! Command-line interface for Gregor

#[cfg(feature = "clap")]
mod cfg;
#[cfg(feature = "clap")]
mod clap;

fn main() -> gregor::Result<()> {
  gregor::misc::tracing_tree_init(gregor::misc::var("GREGOR_LOG").ok().as_deref())?;
  #[cfg(feature = "clap")]
  clap::init()?;
  Ok(())
}
