//! fOS Arabic - Command-line renderer
//!
//! Renders its arguments, or each line of stdin, into visual-order
//! presentation forms.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use fos_arabic::{EncodingError, RenderCache, RenderConfig, Renderer};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: fos-arabic [OPTIONS] [TEXT]...

Renders TEXT (or each line of stdin) into visual-order Arabic presentation forms.

Options:
  -s, --symbols       Treat brackets and punctuation as part of Arabic runs
      --no-ligatures  Keep Lam-Alef pairs as two letters
      --strip-vowels  Drop vowel marks
  -c, --codepoints    Print U+XXXX codepoints instead of text
  -h, --help          Print this help";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    config: RenderConfig,
    codepoints: bool,
    help: bool,
    text: Vec<String>,
}

/// Convert one argument, numbered from 1, into UTF-8
fn utf8_arg(number: usize, arg: OsString) -> anyhow::Result<String> {
    match arg.into_string() {
        Ok(arg) => Ok(arg),
        Err(raw) => bail!("argument {number} is not valid UTF-8: {}", raw.to_string_lossy()),
    }
}

fn parse_args(args: impl IntoIterator<Item = OsString>) -> anyhow::Result<Options> {
    let mut opts = Options::default();
    let mut args = args.into_iter().enumerate().map(|(i, arg)| utf8_arg(i + 1, arg));

    while let Some(arg) = args.next() {
        let arg = arg?;
        match arg.as_str() {
            "-s" | "--symbols" => opts.config.include_symbols = true,
            "--no-ligatures" => opts.config.no_ligatures = true,
            "--strip-vowels" => opts.config.strip_vowels = true,
            "-c" | "--codepoints" => opts.codepoints = true,
            "-h" | "--help" => opts.help = true,
            "--" => {
                for rest in args.by_ref() {
                    opts.text.push(rest?);
                }
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                bail!("unknown option: {flag}\n\n{USAGE}");
            }
            other => opts.text.push(other.to_owned()),
        }
    }

    Ok(opts)
}

fn format_output(rendered: &str, codepoints: bool) -> String {
    if !codepoints {
        return rendered.to_owned();
    }
    rendered
        .chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let opts = parse_args(std::env::args_os().skip(1))?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    let renderer = Renderer::new().with_config(opts.config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !opts.text.is_empty() {
        let rendered = renderer.render(&opts.text.join(" "));
        writeln!(out, "{}", format_output(&rendered, opts.codepoints))
            .context("failed to write output")?;
        return Ok(());
    }

    tracing::debug!("Reading from stdin with {:?}", opts.config);

    let mut cache = RenderCache::default();
    for (number, line) in io::stdin().lock().split(b'\n').enumerate() {
        let mut line = line.context("failed to read stdin")?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        let text = match std::str::from_utf8(&line) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Skipping line {}: {}", number + 1, EncodingError::from(e));
                continue;
            }
        };

        let rendered = cache.get_or_render(&renderer, text);
        writeln!(out, "{}", format_output(&rendered, opts.codepoints))
            .context("failed to write output")?;
    }

    let stats = cache.stats();
    tracing::debug!(
        "Render cache: {} of {} lines reused ({:.0}%), {} evicted",
        stats.hits,
        stats.lookups(),
        stats.hit_rate() * 100.0,
        stats.evictions
    );
    Ok(())
}
