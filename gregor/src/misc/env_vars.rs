use alloc::{string::String, vec::Vec};

/// Typed configuration built from environment-like `(key, value)` pairs.
#[derive(Debug)]
pub struct EnvVars<T>(T);

impl<T> EnvVars<T>
where
  T: FromVars,
{
  /// Constructs `T` through the deserialization of a literal `.env` data.
  ///
  /// Empty lines, lines starting with `#` and lines without `=` are ignored. Values can be
  /// surrounded by single or double quotes.
  #[inline]
  pub fn from_env_data(data: &str) -> crate::Result<Self> {
    Ok(Self(T::from_vars(env(data))?))
  }

  /// Constructs itself based on `vars`.
  ///
  /// Intended for debugging or tests.
  #[inline]
  pub fn from_iterator(vars: impl IntoIterator<Item = (String, String)>) -> crate::Result<Self> {
    Ok(Self(T::from_vars(vars)?))
  }

  /// Constructs `T` according to all the environment variables of the current process.
  #[cfg(feature = "std")]
  #[inline]
  pub fn from_process() -> crate::Result<Self> {
    Ok(Self(T::from_vars(std::env::vars())?))
  }

  /// Unwraps `T`.
  #[inline]
  pub fn finish(self) -> T {
    self.0
  }
}

/// Constructs itself using a set of `(key, value)` string pairs.
pub trait FromVars: Sized {
  /// See [`FromVars`].
  fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> crate::Result<Self>;
}

fn env(data: &str) -> Vec<(String, String)> {
  let mut vars = Vec::new();
  for line in data.lines() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }
    let Some((key, value)) = line.split_once('=') else {
      continue;
    };
    vars.push((unquote(key), unquote(value)));
  }
  vars
}

fn unquote(str: &str) -> String {
  let trimmed = str.trim();
  let inner = trimmed
    .strip_prefix('\'')
    .and_then(|elem| elem.strip_suffix('\''))
    .or_else(|| trimmed.strip_prefix('"').and_then(|elem| elem.strip_suffix('"')))
    .unwrap_or(trimmed);
  String::from(inner)
}
