use std::{
    fs::File,
    io::{Read, Write},
    path::PathBuf,
};

use tracing_subscriber::EnvFilter;
use workout::{Package, WorkoutSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Human readable message
    Text,
    /// One json object per line
    Json,
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Csv file with `tag,field,...` rows and no header. Built-in demo packages are used if omitted
    pub input: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, required = false)]
    pub format: Format,
    /// Log invalid packages and continue instead of stopping at the first one
    #[arg(short, long, default_value_t = false, required = false)]
    pub keep_going: bool,
}

fn read_packages(input: impl Read) -> Result<Vec<Package>, Box<dyn std::error::Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut packages = Vec::new();

    for (line, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| format!("Failed to read row {}. Reason: {e}", line + 1))?;

        let Some(tag) = record.get(0) else {
            continue;
        };

        let fields = record
            .iter()
            .skip(1)
            .map(|this| this.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to parse row {}. Reason: {e}", line + 1))?;

        packages.push(Package::new(tag, fields));
    }

    Ok(packages)
}

fn render(summary: &WorkoutSummary, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(summary.message()),
        Format::Json => serde_json::to_string(summary),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Args {
        input,
        format,
        keep_going,
    } = <Args as clap::Parser>::parse();

    let packages = match &input {
        Some(input) => read_packages(
            File::open(input).map_err(|e| format!("Failed to read input file. Reason: {e}"))?,
        )?,
        None => workout::sample_packages(),
    };

    tracing::info!("Total: {} packages", packages.len());

    let io = std::io::stdout();
    let mut io = io.lock();

    let mut failed = 0usize;

    for (index, package) in packages.iter().enumerate() {
        match package.summary() {
            Ok(summary) => writeln!(io, "{}", render(&summary, format)?)?,
            Err(e) if keep_going => {
                tracing::error!(package = index + 1, tag = %package.tag, "{e}");
                failed += 1;
            }
            Err(e) => return Err(format!("Package {} rejected. Reason: {e}", index + 1).into()),
        }
    }

    io.flush()?;

    if failed > 0 {
        return Err(format!("{failed} of {} packages rejected", packages.len()).into());
    }

    Ok(())
}
