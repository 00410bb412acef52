// crates/cli/src/args.rs
use clap::{Parser, ValueHint};
use std::ffi::OsString;
use std::path::PathBuf;
use topwords_engine::config::{DEFAULT_FILE_PATH, DEFAULT_WORDS_COUNT};

/// Long flags that may also be written with a single dash (`-file_path`).
const SINGLE_DASH_FLAGS: &[&str] = &["file_path", "words_count", "help", "version"];

/// Flags whose value is the following argument when no `=value` is attached.
const VALUE_FLAGS: &[&str] = &["file_path", "words_count"];

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "topwords",
    version = crate::VERSION,
    about = "テキスト中の頻出単語を集計して上位N件を表示するツール"
)]
pub struct Args {
    /// 読み込むテキストファイル
    #[arg(
        long = "file_path",
        default_value = DEFAULT_FILE_PATH,
        value_hint = ValueHint::FilePath,
        allow_hyphen_values = true
    )]
    pub file_path: PathBuf,

    /// 表示する単語数（負の値は既定値に戻る）
    #[arg(
        long = "words_count",
        default_value_t = DEFAULT_WORDS_COUNT as i64,
        allow_negative_numbers = true
    )]
    pub words_count: i64,

    /// 余分な引数（無視される）
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<OsString>,
}

impl Args {
    /// Parse the process arguments, accepting single-dash long flags.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }

    /// Like [`Args::parse_args`] but from an explicit argument list.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or malformed values.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_flags(args))
    }
}

/// Rewrite `-name` and `-name=value` to `--name...` for the known long flags.
///
/// The argument after a bare value flag is its value and is never rewritten.
/// Flag parsing stops at the first positional argument or `--`; a `--` is
/// inserted before a positional so everything from there on is left to
/// [`Args::rest`].
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expect_value = false;

    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        match flag_name(&arg) {
            Some((name, has_value)) => {
                let known = SINGLE_DASH_FLAGS.contains(&name);
                expect_value = !has_value && VALUE_FLAGS.contains(&name);
                out.push(if known { to_double_dash(arg) } else { arg });
            }
            None => {
                passthrough = true;
                out.push(OsString::from("--"));
                out.push(arg);
            }
        }
    }
    out
}

/// Name of a `-flag`/`--flag` argument and whether it carries `=value`.
/// `None` for positional arguments, including a lone `-`.
fn flag_name(arg: &OsString) -> Option<(&str, bool)> {
    let s = arg.to_str()?;
    let rest = s.strip_prefix("--").or_else(|| s.strip_prefix('-'))?;
    if rest.is_empty() {
        return None;
    }
    Some(
        rest.split_once('=')
            .map_or((rest, false), |(name, _)| (name, true)),
    )
}

fn to_double_dash(arg: OsString) -> OsString {
    match arg.to_str() {
        Some(s) if !s.starts_with("--") => OsString::from(format!("-{s}")),
        _ => arg,
    }
}
