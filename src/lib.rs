use std::fmt::Display;

pub use anyhow::{anyhow, bail, Context, Result};
pub use std::result::Result as StdResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Walltime(String),
}

pub type ParseResult<T> = StdResult<T, ParseError>;

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ParseError::*;
        match self {
            Walltime(s) => write!(
                f,
                "invalid walltime {:?} (Format: HH:mm:ss. e.g: 04:00:00 means 4 hours)",
                s
            ),
        }
    }
}

impl std::error::Error for ParseError {}

pub mod catalog;
pub mod menu;
pub mod qsub;
pub mod resources;
pub mod terminal;
pub mod walltime;

pub use menu::{gen_choices, Choice, Prompter};
pub use resources::ResourceRequest;
pub use walltime::Walltime;
