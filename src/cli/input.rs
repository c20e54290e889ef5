//! Key input resolution
//!
//! A key is taken from the first source that is present: a command line
//! argument, a named environment variable, or a prompt on stdin. Keys are
//! never read from configuration.

use crate::errors::{KeyConvError, Result};
use crate::security::{secret_string, SecretString};
use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;
use zeroize::Zeroize;

/// Where a key comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Argument(String),
    Env(String),
    Prompt,
}

impl InputSource {
    pub fn resolve(argument: Option<String>, env_var: Option<String>) -> Self {
        match (argument, env_var) {
            (Some(value), _) => InputSource::Argument(value),
            (None, Some(name)) => InputSource::Env(name),
            (None, None) => InputSource::Prompt,
        }
    }

    /// Read the key text, trimmed of surrounding whitespace
    pub fn read(self, prompt: &str) -> Result<SecretString> {
        match self {
            InputSource::Argument(value) => Ok(trimmed(value)),
            InputSource::Env(name) => {
                debug!("Reading key from environment variable {}", name);
                let value = env::var(&name).map_err(|_| {
                    KeyConvError::ConfigError(format!(
                        "environment variable {} is not set",
                        name
                    ))
                })?;
                Ok(trimmed(value))
            }
            InputSource::Prompt => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    eprint!("{}", prompt);
                    io::stderr().flush()?;
                }
                read_line(&mut stdin.lock())
            }
        }
    }
}

/// Read one line of key text from `reader`
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<SecretString> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(trimmed(line))
}

fn trimmed(mut value: String) -> SecretString {
    let text = value.trim().to_string();
    value.zeroize();
    secret_string(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Cursor;

    #[test]
    fn test_resolve_order() {
        assert_eq!(
            InputSource::resolve(Some("abc".into()), Some("VAR".into())),
            InputSource::Argument("abc".into())
        );
        assert_eq!(
            InputSource::resolve(None, Some("VAR".into())),
            InputSource::Env("VAR".into())
        );
        assert_eq!(InputSource::resolve(None, None), InputSource::Prompt);
    }

    #[test]
    fn test_argument_is_trimmed() {
        let text = InputSource::Argument("  4YFq9y5f\n".into()).read("").unwrap();
        assert_eq!(text.expose_secret(), "4YFq9y5f");
    }

    #[test]
    fn test_env_source() {
        env::set_var("KEYCONV_TEST_INPUT_KEY", " 2dZ2mUou ");
        let text = InputSource::Env("KEYCONV_TEST_INPUT_KEY".into())
            .read("")
            .unwrap();
        assert_eq!(text.expose_secret(), "2dZ2mUou");
        env::remove_var("KEYCONV_TEST_INPUT_KEY");
    }

    #[test]
    fn test_missing_env_var() {
        let err = InputSource::Env("KEYCONV_TEST_UNSET_VARIABLE".into())
            .read("")
            .unwrap_err();
        assert!(err.to_string().contains("KEYCONV_TEST_UNSET_VARIABLE"));
    }

    #[test]
    fn test_read_line() {
        let mut reader = Cursor::new("FVen3X669xLzsi6N\r\nsecond line\n");
        let text = read_line(&mut reader).unwrap();
        assert_eq!(text.expose_secret(), "FVen3X669xLzsi6N");
    }

    #[test]
    fn test_read_line_at_eof() {
        let mut reader = Cursor::new("");
        assert_eq!(read_line(&mut reader).unwrap().expose_secret(), "");
    }
}
