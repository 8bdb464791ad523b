use crate::*;
use regex::Regex;
use std::str::FromStr;

lazy_static::lazy_static! {
    static ref FORMAT: Regex = Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap();
}

pub const PROMPT_LABEL: &str = "Walltime (HH:mm:ss)";
pub const FORMAT_HINT: &str = "Format: HH:mm:ss. e.g: 04:00:00 means 4 hours";

/// A job time limit in `HH:MM:SS` form, exactly two digits per field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walltime(String);

impl Walltime {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_secs(&self) -> u64 {
        self.0
            .split(':')
            .map(|f| {
                let v = f.parse::<u64>();
                debug_assert!(v.is_ok(), "walltime field not numeric: {:?}", f);
                v.unwrap_or(0)
            })
            .fold(0, |acc, f| acc * 60 + f)
    }
}

impl FromStr for Walltime {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        if FORMAT.is_match(s) {
            Ok(Walltime(s.to_string()))
        } else {
            Err(ParseError::Walltime(s.to_string()))
        }
    }
}

impl Display for Walltime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ask for a walltime until the answer is well-formed.  Running out of input is an error.
pub fn prompt_walltime<P: Prompter + ?Sized>(p: &mut P) -> Result<Walltime> {
    loop {
        let line = p
            .read_line(PROMPT_LABEL)
            .context("prompt failed: walltime")?
            .ok_or_else(|| anyhow!("prompt failed: walltime: end of input"))?;
        match line.trim_end_matches(&['\r', '\n'][..]).parse::<Walltime>() {
            Ok(w) => return Ok(w),
            Err(ParseError::Walltime(_)) => p.reject(FORMAT_HINT)?,
        }
    }
}
