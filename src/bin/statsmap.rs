use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use num_format::{Locale, ToFormattedString};
use statsmap_rs::regions::RegionSetId;
use statsmap_rs::scale::ThresholdScale;
use statsmap_rs::{storage, transform};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "statsmap",
    version,
    about = "Resolve region names & compute quantile color buckets for stats maps"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the supported region sets.
    Regions,
    /// Resolve free-text region names to canonical codes.
    Resolve(ResolveArgs),
    /// Load a dataset, resolve its keys, and print the color buckets.
    Buckets(BucketsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RegionArg {
    Ua,
    Md,
    De,
    Nl,
    Fr,
    Be,
    Pl,
    Eu,
}

impl RegionArg {
    fn id(self) -> RegionSetId {
        match self {
            RegionArg::Ua => RegionSetId::Ukraine,
            RegionArg::Md => RegionSetId::Moldova,
            RegionArg::De => RegionSetId::Germany,
            RegionArg::Nl => RegionSetId::Netherlands,
            RegionArg::Fr => RegionSetId::France,
            RegionArg::Be => RegionSetId::Belgium,
            RegionArg::Pl => RegionSetId::Poland,
            RegionArg::Eu => RegionSetId::Europe,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ResolveArgs {
    /// Region set to resolve against (ua, md, de, nl, fr, be, pl, eu).
    #[arg(short, long, value_enum)]
    region: RegionArg,
    /// One or more region names, any supported language.
    #[arg(required = true)]
    names: Vec<String>,
}

#[derive(Args, Debug)]
struct BucketsArgs {
    /// Region set the dataset belongs to.
    #[arg(short, long, value_enum)]
    region: RegionArg,
    /// Path to a {title, valueName, data} JSON file.
    #[arg(short, long)]
    input: PathBuf,
    /// Number of color buckets (default 5).
    #[arg(short, long, default_value_t = 5)]
    buckets: usize,
    /// Locale tag for legend number formatting (e.g. en, de, fr).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Save the resolved, code-keyed dataset to file.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

/// Map a user-provided locale tag to a num-format Locale and decimal separator.
/// Supported tags (case-insensitive): "en", "us", "en_US", "de", "de_DE", "german",
/// "fr", "es", "it", "pt", "nl"
fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Format a threshold value with locale-aware separators. Thresholds carry at
/// most three decimals after rounding, so `{:.3}` on the fraction is exact
/// enough for display.
fn fmt_value(v: f64, locale: &Locale, dec_sep: char) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    let int = v.abs().trunc() as i64;
    let frac = v.abs().fract();
    let mut s = int.to_formatted_string(locale);
    if frac > 1e-9 {
        let digits = format!("{:.3}", frac);
        let digits = digits.trim_start_matches("0.").trim_end_matches('0');
        s.push(dec_sep);
        s.push_str(digits);
    }
    if v < 0.0 { format!("-{s}") } else { s }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Regions => cmd_regions(),
        Command::Resolve(args) => cmd_resolve(args),
        Command::Buckets(args) => cmd_buckets(args),
    }
}

fn cmd_regions() -> Result<()> {
    for id in RegionSetId::ALL {
        let set = id.get();
        println!("{}  {} ({} regions)", id.tag(), set.name(), set.codes().count());
    }
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let set = args.region.id().get();
    for name in &args.names {
        match set.resolve(name) {
            Some(code) => println!("{name} -> {code}"),
            None => println!("{name} -> (no match)"),
        }
    }
    Ok(())
}

fn cmd_buckets(args: BucketsArgs) -> Result<()> {
    let set = args.region.id().get();
    let map_data = storage::load_map_data(&args.input)?;
    let total = map_data.data.len();
    let resolved = transform::resolve_map_data(set, &map_data);
    eprintln!(
        "Resolved {} of {} labels against {}",
        resolved.len(),
        total,
        set.name()
    );

    let values: Vec<f64> = resolved.values().copied().collect();
    let scale = ThresholdScale::quantile(&values, args.buckets);

    let (locale, dec_sep) = map_locale(&args.locale);
    let fmt = |v: f64| fmt_value(v, locale, dec_sep);

    println!("{} • {}", map_data.title, map_data.value_name);
    let thresholds = scale.thresholds();
    let colors = scale.colors();
    if thresholds.is_empty() {
        println!("  {}  all values", colors[0]);
    } else {
        for (i, color) in colors.iter().enumerate() {
            let range = if i == 0 {
                format!("< {}", fmt(thresholds[0]))
            } else if i == thresholds.len() {
                format!(">= {}", fmt(thresholds[i - 1]))
            } else {
                format!("{} - {}", fmt(thresholds[i - 1]), fmt(thresholds[i]))
            };
            println!("  {color}  {range}");
        }
    }
    println!("  {}  no data", scale.no_data_color());

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&resolved, path)?,
            "json" => storage::save_json(&resolved, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", resolved.len(), path.display());
    }

    Ok(())
}
