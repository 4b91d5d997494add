use crate::formatters::FormatterKind;
use clap::{CommandFactory, Parser};
use std::env;
use std::ffi::OsString;

/// Command-line interface definition for rTimesheet.
///
/// Only flags are parsed here. The first positional word is the command
/// name (any unambiguous prefix), the remaining words form the note.
#[derive(Parser, Debug)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: check in and out of named sheets stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(long = "db")]
    pub db: Option<String>,

    /// Run in test mode (configuration file ignored and never written)
    #[arg(long = "test", hide = true)]
    pub test: bool,

    #[arg(
        long = "id",
        value_parser = clap::value_parser!(i64).range(0..),
        help = "The ID to manipulate/copy (defaults to the current or last entry)"
    )]
    pub id: Option<i64>,

    #[arg(long = "start", allow_hyphen_values = true, help = "The start time to use")]
    pub start: Option<String>,

    #[arg(long = "end", allow_hyphen_values = true, help = "The end time to use")]
    pub end: Option<String>,

    #[arg(
        long = "at",
        allow_hyphen_values = true,
        help = "The time to use when --start/--end are not given"
    )]
    pub at: Option<String>,

    #[arg(long = "filter", help = "Only show entries whose note equals this text")]
    pub filter: Option<String>,

    #[arg(
        long = "formatter",
        value_enum,
        ignore_case = true,
        help = "Output formatter for display"
    )]
    pub formatter: Option<FormatterKind>,

    /// Command (or unambiguous prefix) followed by the note
    #[arg(value_name = "COMMAND")]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse the process arguments after `normalize_args`.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(env::args_os()))
    }
}

/// Reorder the raw arguments as `PROGRAM FLAGS... -- WORDS...`.
///
/// Only `--name` tokens (and `-h`/`-V`) are flags; a flag that takes a value
/// also takes the next token. Every other token, including words such as
/// `-bug`, is a positional word, kept in order. Everything after a literal
/// `--` is positional too.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cmd = Cli::command();
    let takes_value = |name: &str| {
        cmd.get_arguments()
            .any(|a| a.get_long() == Some(name) && a.get_action().takes_values())
    };

    let mut iter = args.into_iter().map(Into::into);
    let mut flags: Vec<OsString> = iter.next().into_iter().collect();
    let mut words: Vec<OsString> = Vec::new();

    while let Some(arg) = iter.next() {
        let text = arg.to_string_lossy().into_owned();

        if text == "--" {
            words.extend(iter.by_ref());
            break;
        }

        if let Some(name) = text.strip_prefix("--") {
            flags.push(arg);
            if !name.contains('=')
                && takes_value(name)
                && let Some(value) = iter.next()
            {
                flags.push(value);
            }
        } else if text == "-h" || text == "-V" {
            flags.push(arg);
        } else {
            words.push(arg);
        }
    }

    flags.push("--".into());
    flags.extend(words);
    flags
}

/// Flag descriptions printed in the usage text.
pub const FLAG_HELP: &[(&str, &str)] = &[
    (
        "id",
        "the ID to manipulate/copy.  defaults to the current or last entry.",
    ),
    (
        "at",
        concat!(
            "the time to use, this can be equal to --start or --end depending on the context.  ",
            "always has a lower priority than --start or --end."
        ),
    ),
    ("start", "the start time to use"),
    ("end", "the end time to use"),
    ("formatter", "the formatter to use.  can be 'human' or 'json'"),
    ("filter", "filter some outputs based on entry note"),
    ("db", "override the database path"),
];
