use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use divider_calc::spec::{parse_optional_value, parse_value};
use divider_calc::*;

/// Pick the resistor divider pair closest to a target output voltage
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input voltage in V (prompted for when missing)
    #[arg(long)]
    vin: Option<f64>,

    /// Desired output voltage in V (prompted for when missing)
    #[arg(long)]
    vout: Option<f64>,

    /// Maximum divider current in mA
    #[arg(long)]
    imax: Option<f64>,

    /// INI file with a [Resistors] section holding the available values in kΩ
    #[arg(short, long, value_name = "FILE", default_value = "resistors.ini")]
    config: PathBuf,

    /// Use a standard E-series instead of the catalog file
    #[arg(long, value_enum)]
    series: Option<Series>,

    /// Warn when the input voltage exceeds this many volts
    #[arg(long, value_name = "VOLTS")]
    adc_limit: Option<f64>,

    /// Never warn about the input voltage
    #[arg(long, conflicts_with = "adc_limit")]
    no_advisory: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Series {
    E3,
    E6,
    E12,
    E24,
}

impl Series {
    fn catalog(self) -> &'static ResistorCatalog {
        match self {
            Series::E3 => &*E3,
            Series::E6 => &*E6,
            Series::E12 => &*E12,
            Series::E24 => &*E24,
        }
    }
}

fn prompt(question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn read_spec(args: &Args) -> Result<DividerSpec> {
    let interactive = args.vin.is_none() || args.vout.is_none();
    let vin = match args.vin {
        Some(vin) => vin,
        None => parse_value("input voltage", &prompt("Enter input voltage (V): ")?)?,
    };
    let vout = match args.vout {
        Some(vout) => vout,
        None => parse_value(
            "desired output voltage",
            &prompt("Enter desired output voltage (V): ")?,
        )?,
    };
    let imax = match args.imax {
        Some(imax) => Some(imax),
        None if interactive => parse_optional_value(
            "maximum current",
            &prompt("Enter maximum allowed current (mA, blank for none): ")?,
        )?,
        None => None,
    };
    DividerSpec::new(vin, vout, imax)
}

fn build_calc(args: &Args) -> Result<DividerCalc> {
    let (catalog, file_threshold) = match args.series {
        Some(series) => {
            log::info!("Using the {:?} series", series);
            (series.catalog().clone(), None)
        }
        None => {
            log::info!("Loading resistor catalog from {}", args.config.display());
            let file = CatalogFile::load(&args.config)?;
            (file.catalog()?, file.advisory_threshold()?)
        }
    };
    log::debug!("Catalog holds {} values", catalog.len());

    let calc = DividerCalc::new(catalog);
    if args.no_advisory {
        return Ok(calc.without_advisory());
    }
    match args.adc_limit.or(file_threshold) {
        Some(threshold) => calc.with_advisory_threshold(threshold),
        None => Ok(calc),
    }
}

fn run(args: &Args) -> Result<()> {
    let spec = read_spec(args)?;
    let calc = build_calc(args)?;
    log::info!("Number of combinations: {}", calc.combinations());

    let report = calc.calc(&spec);
    println!();
    print!("{}", report);
    Ok(())
}

fn init_logging(level: &str) {
    use env_logger::{Builder, Env};

    let env = Env::default().filter_or("RUST_LOG", level);
    Builder::from_env(env).format_timestamp_millis().init();
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
