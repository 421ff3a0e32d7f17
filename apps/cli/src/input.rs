//! Where the record text comes from.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
    Inline(String),
}

impl Input {
    /// `None` and `-` mean stdin, `@path` a file, anything else is JSON text.
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Self::Stdin,
            Some(arg) => match arg.strip_prefix('@') {
                Some(path) => Self::File(PathBuf::from(path)),
                None => Self::Inline(arg.to_string()),
            },
        }
    }

    /// Raw bytes; UTF-8 is checked by the JSON decoder, not here.
    pub fn read(self) -> Result<Vec<u8>> {
        match self {
            Self::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .context("failed to read stdin")?;
                Ok(bytes)
            }
            Self::File(path) => {
                std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))
            }
            Self::Inline(text) => Ok(text.into_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_arguments() {
        assert_eq!(Input::parse(None), Input::Stdin);
        assert_eq!(Input::parse(Some("-")), Input::Stdin);
        assert_eq!(
            Input::parse(Some("@rec.json")),
            Input::File(PathBuf::from("rec.json"))
        );
        assert_eq!(
            Input::parse(Some(r#"{"a":"1"}"#)),
            Input::Inline(r#"{"a":"1"}"#.to_string())
        );
    }
}
