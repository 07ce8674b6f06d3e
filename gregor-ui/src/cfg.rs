use gregor::{
  calendar::DynTz,
  misc::{FromRadix10 as _, FromVars},
};

/// Layout used by `parse` when none is provided.
pub(crate) const DEFAULT_LAYOUT: &str = "%Y-%m-%d";

/// Settings read from `GREGOR_*` environment variables.
#[derive(Debug, PartialEq)]
pub(crate) struct Cfg {
  pub(crate) layout: String,
  pub(crate) utc_offset: DynTz,
}

impl FromVars for Cfg {
  fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> gregor::Result<Self> {
    let mut layout = None;
    let mut utc_offset = None;
    for (key, value) in vars {
      match key.as_str() {
        "GREGOR_LAYOUT" => layout = Some(value),
        "GREGOR_UTC_OFFSET" => {
          utc_offset = Some(DynTz::new(i16::from_radix_10(value.as_bytes())?)?);
        }
        _ => {}
      }
    }
    Ok(Self {
      layout: layout.unwrap_or_else(|| DEFAULT_LAYOUT.into()),
      utc_offset: utc_offset.unwrap_or_default(),
    })
  }
}
