//! Command-line front end for the benchmark suite.
//!
//! The binary stays a thin wrapper; everything testable lives here. Parsing
//! follows clap's derive API, help/version requests short-circuit without an
//! error, and all console reports come from [`crate::report`].

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::authors::{extract_authors, top_authors};
use crate::bibtex::read_bib_file;
use crate::config::BenchConfig;
use crate::constants::report::DEFAULT_TOP_AUTHORS;
use crate::harness::BenchRunner;
use crate::report::{render_author_chart, render_ranking, render_timings, render_volume};

#[derive(Debug, Parser)]
#[command(
    name = "bibbench",
    disable_help_subcommand = true,
    about = "Benchmark sorting algorithms over bibliographic record fields",
    long_about = "Load a BibTeX file, time every configured sorting algorithm against its record fields, and print timing, volume, ranking, and author reports."
)]
/// CLI for `bibbench`.
///
/// Common usage:
/// - Full run over the default fields: `bibbench library.bib`
/// - Restrict the comparison catalogue: `bibbench library.bib --field title --field year`
/// - Machine-readable output: `bibbench library.bib --json`
struct BenchCli {
    #[arg(value_name = "BIB_FILE", help = "BibTeX file to benchmark against")]
    path: PathBuf,
    #[arg(
        long,
        help = "Emit one pretty-printed JSON report instead of the text reports"
    )]
    json: bool,
    #[arg(
        long = "field",
        value_name = "NAME",
        value_parser = parse_field_name,
        help = "Restrict comparison sorts to this field, repeat as needed in visit order"
    )]
    fields: Vec<String>,
    #[arg(
        long = "top-authors",
        value_name = "N",
        default_value_t = DEFAULT_TOP_AUTHORS,
        help = "How many authors the author chart lists"
    )]
    top_authors: usize,
    #[arg(long = "skip-authors", help = "Skip the author frequency report")]
    skip_authors: bool,
}

/// Run the benchmark CLI over an iterator of arguments (binary name excluded).
pub fn run<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) =
        parse_cli::<BenchCli, _>(std::iter::once("bibbench".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let mut config = BenchConfig::default();
    if !cli.fields.is_empty() {
        config.general_fields = cli.fields.clone();
    }
    config.validate()?;

    let records = read_bib_file(&cli.path)?;
    println!(
        "Loaded {} record(s) from {}",
        records.len(),
        cli.path.display()
    );

    let runner = BenchRunner::new(config);
    let results = runner.run(&records);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results.to_report())?);
        return Ok(());
    }

    println!("{}", render_timings(&results));
    println!("{}", render_volume(&results));
    println!("{}", render_ranking(&results));

    if !cli.skip_authors {
        let authors = extract_authors(&records);
        let top = top_authors(&authors, cli.top_authors);
        println!("{}", render_author_chart(&top));
    }

    Ok(())
}

fn parse_field_name(raw: &str) -> Result<String, String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
        return Err("--field expects a non-empty field name".to_string());
    }
    Ok(name)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
