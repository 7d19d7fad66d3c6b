//! Line-oriented converter session.
//!
//! Each input line is one directive against a [`ConverterForm`]. A bare
//! number sets the value and converts it; the other directives mirror the
//! form's controls.

use std::io::{BufRead, Write};

use thermoconv_core::{ConverterForm, Unit};

use crate::Result;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  <number>     set the value and convert
  convert      convert the current value
  from <C|F|K> select the source unit
  to <C|F|K>   select the target unit
  swap         swap units (a shown result becomes the new value)
  clear        reset the form
  help         show this help
  quit         leave the session";

/// A parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Set the value text and convert
    Value(String),
    /// Convert the current value
    Convert,
    /// Select the source unit token
    From(String),
    /// Select the target unit token
    To(String),
    /// Swap units
    Swap,
    /// Reset the form
    Clear,
    /// Show help
    Help,
    /// End the session
    Quit,
}

impl Directive {
    /// Parses one input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match word {
            "" | "convert" => Directive::Convert,
            "from" => Directive::From(rest.trim().to_string()),
            "to" => Directive::To(rest.trim().to_string()),
            "swap" => Directive::Swap,
            "clear" => Directive::Clear,
            "help" | "?" => Directive::Help,
            "quit" | "exit" => Directive::Quit,
            _ => Directive::Value(line.to_string()),
        }
    }
}

/// Runs a session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    form: &mut ConverterForm,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "Converting {} to {}. Type `help` for commands.",
        form.from().symbol(),
        form.to().symbol()
    )?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        match Directive::parse(&line?) {
            Directive::Quit => return Ok(()),
            Directive::Help => writeln!(out, "{HELP}")?,
            Directive::Value(raw) => {
                form.set_value(raw);
                submit(form, out)?;
            }
            Directive::Convert => submit(form, out)?,
            Directive::From(token) => match token.parse::<Unit>() {
                Ok(unit) => {
                    form.set_from(unit);
                    show_units(form, out)?;
                }
                Err(e) => writeln!(out, "{}", e.user_message())?,
            },
            Directive::To(token) => match token.parse::<Unit>() {
                Ok(unit) => {
                    form.set_to(unit);
                    show_units(form, out)?;
                }
                Err(e) => writeln!(out, "{}", e.user_message())?,
            },
            Directive::Swap => {
                form.swap();
                show_units(form, out)?;
                if !form.value().is_empty() {
                    writeln!(out, "value: {}", form.value())?;
                }
            }
            Directive::Clear => {
                form.clear();
                writeln!(out, "Cleared.")?;
                show_units(form, out)?;
            }
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn submit<W: Write>(form: &mut ConverterForm, out: &mut W) -> Result<()> {
    match form.submit() {
        Ok(outcome) => {
            writeln!(out, "{}", outcome.display)?;
            writeln!(out, "{}", outcome.equation)?;
        }
        Err(e) => writeln!(out, "{}", e.user_message())?,
    }
    Ok(())
}

fn show_units<W: Write>(form: &ConverterForm, out: &mut W) -> Result<()> {
    writeln!(out, "{} → {}", form.from().symbol(), form.to().symbol())?;
    Ok(())
}
