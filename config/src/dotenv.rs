// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_FILENAME: &str = ".env";

#[derive(Debug, Default)]
pub struct Dotenv {
  vars: HashMap<String, String>,
}

impl Dotenv {
  pub fn new() -> Self {
    Self::default()
  }

  /// Loads `KEY=VALUE` pairs from a `.env` file.
  ///
  /// Blank lines and `#` comments are skipped, an `export ` prefix is
  /// accepted and surrounding quotes are stripped from values.
  pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    if !path.exists() {
      return Err(Error::PathNotFound(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);

    for (line_num, line) in reader.lines().enumerate() {
      let line = line?;
      let trimmed = line.trim();

      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }

      let (key, value) = parse_line(trimmed).map_err(|err| {
        Error::ConfigError(format!(
          "{}: error on line {}: {}",
          path.display(),
          line_num + 1,
          err
        ))
      })?;
      self.vars.insert(key, value);
    }

    Ok(())
  }

  /// Copies the loaded variables into the process environment.
  ///
  /// With `overwrite` the file wins over variables that are already set.
  pub fn set_env_vars(&self, overwrite: bool) -> usize {
    self.apply(
      overwrite,
      |key| env::var_os(key).is_some(),
      |key, value| env::set_var(key, value),
    )
  }

  fn apply(
    &self,
    overwrite: bool,
    is_set: impl Fn(&str) -> bool,
    mut set: impl FnMut(&str, &str),
  ) -> usize {
    let mut applied = 0;
    for (key, value) in &self.vars {
      if overwrite || !is_set(key) {
        set(key, value);
        applied += 1;
      }
    }
    applied
  }

  pub fn get(&self, key: &str) -> Option<&String> {
    self.vars.get(key)
  }

  pub fn len(&self) -> usize {
    self.vars.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vars.is_empty()
  }
}

fn parse_line(line: &str) -> Result<(String, String), String> {
  let line = line.strip_prefix("export ").unwrap_or(line);
  let (key, value) = line
    .split_once('=')
    .ok_or_else(|| "Invalid format: missing '='".to_string())?;

  let key = key.trim();
  if key.is_empty() {
    return Err("Empty key".to_string());
  }

  Ok((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
  for quote in ['"', '\''] {
    if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
      return &value[1..value.len() - 1];
    }
  }
  value
}

/// Loads `path` into the process environment, overriding inherited values.
pub fn load<P: AsRef<Path>>(path: P) -> Result<usize, Error> {
  let mut dotenv = Dotenv::new();
  dotenv.load_from_file(path)?;
  Ok(dotenv.set_env_vars(true))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::path::PathBuf;

  fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("irrigation-{}-{}.env", name, std::process::id()));
    fs::write(&path, content).unwrap();
    path
  }

  #[test]
  fn parses_plain_quoted_and_exported_lines() {
    let path = write_temp(
      "parse",
      "# keys\n\nOPENWEATHER_API_KEY=abc123\nexport GEMINI_API_KEY=\"g-key\"\nMODEL='flash'\n",
    );
    let mut dotenv = Dotenv::new();
    dotenv.load_from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(dotenv.len(), 3);
    assert_eq!(dotenv.get("OPENWEATHER_API_KEY").unwrap(), "abc123");
    assert_eq!(dotenv.get("GEMINI_API_KEY").unwrap(), "g-key");
    assert_eq!(dotenv.get("MODEL").unwrap(), "flash");
  }

  #[test]
  fn value_may_contain_equals_sign() {
    assert_eq!(
      parse_line("TOKEN=a=b=c").unwrap(),
      ("TOKEN".to_string(), "a=b=c".to_string())
    );
  }

  #[test]
  fn lone_quote_is_kept() {
    assert_eq!(unquote("\""), "\"");
    assert_eq!(unquote("\"\""), "");
  }

  #[test]
  fn reports_line_number_of_bad_line() {
    let path = write_temp("bad", "GOOD=1\nnot a pair\n");
    let err = Dotenv::new().load_from_file(&path).unwrap_err();
    fs::remove_file(&path).ok();

    let message = err.to_string();
    assert!(message.contains("line 2"), "{message}");
    assert!(message.contains("missing '='"), "{message}");
  }

  #[test]
  fn empty_key_is_rejected() {
    assert_eq!(parse_line("=value").unwrap_err(), "Empty key");
  }

  #[test]
  fn missing_file_is_path_not_found() {
    let err = load("/definitely/not/here/.env").unwrap_err();
    assert!(matches!(err, Error::PathNotFound(_)));
  }

  #[test]
  fn overwrite_flag_controls_existing_vars() {
    let mut dotenv = Dotenv::new();
    dotenv.vars.insert("GEMINI_API_KEY".into(), "from-file".into());
    dotenv.vars.insert("OPENWEATHER_API_KEY".into(), "owm".into());

    let mut target = HashMap::from([("GEMINI_API_KEY".to_string(), "inherited".to_string())]);
    let applied = {
      let existing = target.clone();
      dotenv.apply(
        false,
        |key| existing.contains_key(key),
        |key, value| {
          target.insert(key.to_string(), value.to_string());
        },
      )
    };
    assert_eq!(applied, 1);
    assert_eq!(target["GEMINI_API_KEY"], "inherited");
    assert_eq!(target["OPENWEATHER_API_KEY"], "owm");

    let existing = target.clone();
    let applied = dotenv.apply(
      true,
      |key| existing.contains_key(key),
      |key, value| {
        target.insert(key.to_string(), value.to_string());
      },
    );
    assert_eq!(applied, 2);
    assert_eq!(target["GEMINI_API_KEY"], "from-file");
  }
}
