use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use kundali_chart::{BirthDetails, CompleteBirthChart, DashaSpan, compute};
use kundali_config::{CliOverrides, KundaliConfig, OutputFormat};
use kundali_time::parse_utc;
use kundali_vedic::dosha::DoshaResult;
use kundali_vedic::{
    NavamsaConvention, deg_to_dms, nakshatra_from_longitude, navamsa, rashi_from_longitude,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic birth chart calculator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ./kundali.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Navamsa convention: standard or parity-offset
    #[arg(long, global = true)]
    navamsa: Option<NavamsaConvention>,

    /// Maximum |latitude| for an ascendant, degrees
    #[arg(long, global = true)]
    polar_limit: Option<f64>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth instant in UTC (e.g. 1990-05-15T06:30:00Z)
    #[arg(long)]
    date: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Instant for the current dasha and Sade Sati (default: now)
    #[arg(long)]
    as_of: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete birth chart
    Chart(BirthArgs),
    /// Vimshottari dasha timeline only
    Dasha(BirthArgs),
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Navamsa (D9) sign from sidereal longitude
    Navamsa {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        navamsa: cli.navamsa,
        polar_latitude_limit_deg: cli.polar_limit,
        format: cli.format,
        log_filter: cli.verbose.then(|| "debug".to_string()),
    };
    let config = KundaliConfig::load(cli.config.as_deref(), Some(&overrides))
        .context("loading configuration")?;
    init_logging(config.log_filter())?;
    debug!(?config, "configuration resolved");

    let json = config.format() == OutputFormat::Json;
    match cli.command {
        Commands::Chart(args) => {
            let chart = chart_from_args(&args, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }
        Commands::Dasha(args) => {
            let chart = chart_from_args(&args, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&chart.dasha)?);
            } else {
                print_dasha(&chart);
            }
        }
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{} ({}) - {} ({:.4} deg in rashi)",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    info.dms,
                    info.degrees_in_rashi
                );
            }
        }
        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{} (#{}) - Pada {} - lord {}, deity {} ({:.4} deg in nakshatra)",
                    info.nakshatra.name(),
                    info.nakshatra.number(),
                    info.pada,
                    info.nakshatra.lord().name(),
                    info.nakshatra.deity(),
                    info.degrees_in_nakshatra
                );
            }
        }
        Commands::Navamsa { lon } => {
            let info = navamsa(lon, config.navamsa());
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{} ({}) - part {} of 9, {:.4} deg [{}]",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    info.part + 1,
                    info.degrees_in_rashi,
                    config.navamsa().name()
                );
            }
        }
        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            if json {
                println!("{}", serde_json::to_string_pretty(&d)?);
            } else {
                println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
            }
        }
    }
    Ok(())
}

fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("log filter '{filter}'"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("installing log subscriber")?;
    Ok(())
}

fn parse_instant(s: &str, what: &str) -> Result<DateTime<Utc>> {
    parse_utc(s).with_context(|| format!("parsing {what}"))
}

fn chart_from_args(args: &BirthArgs, config: &KundaliConfig) -> Result<CompleteBirthChart> {
    let birth = BirthDetails::new(parse_instant(&args.date, "--date")?, args.lat, args.lon);
    let as_of = match &args.as_of {
        Some(s) => parse_instant(s, "--as-of")?,
        None => Utc::now(),
    };
    Ok(compute(&birth, as_of, &config.to_chart_options())?)
}

fn print_chart(c: &CompleteBirthChart) {
    let m = &c.meta;
    println!(
        "Birth {}  lat {:.4}  lon {:.4}",
        m.birth.format("%Y-%m-%d %H:%M:%S UTC"),
        m.latitude_deg,
        m.longitude_deg
    );
    println!(
        "JD {:.5}  ayanamsa {:.4}  LST {:.4}  navamsa {}",
        m.jd_utc,
        m.ayanamsa_deg,
        m.lst_deg,
        m.navamsa_convention.name()
    );
    println!();

    let a = &c.ascendant;
    println!(
        "Lagna: {} ({}) {}  {} pada {}",
        a.sign.name, a.sign.western_name, a.dms, a.nakshatra.name, a.pada
    );
    println!();

    println!(
        "{:<8} {:>9} {:<10} {:>14} {:<18} {:<4} {:<10} {}",
        "Graha", "Sidereal", "Rashi", "Degree", "Nakshatra", "Pada", "Navamsa", "Flags"
    );
    for p in &c.planets {
        let pos = &p.position;
        let mut flags = Vec::new();
        if pos.is_retrograde {
            flags.push("R");
        }
        if p.is_combust {
            flags.push("C");
        }
        if p.is_vargottama {
            flags.push("V");
        }
        println!(
            "{:<8} {:>9.4} {:<10} {:>14} {:<18} {:<4} {:<10} {}",
            pos.name,
            pos.sidereal_longitude,
            pos.sign.name,
            pos.dms.to_string(),
            pos.nakshatra.name,
            pos.pada,
            p.navamsa_sign.name,
            flags.join(" ")
        );
    }
    println!();

    println!("Houses (Whole Sign):");
    for h in &c.houses {
        println!("  {:>2} {:<10} {}", h.number, h.sign.name, h.planets.join(", "));
    }
    println!();

    print_dasha(c);
    println!();

    println!("Doshas:");
    print_dosha("Mangal", &c.doshas.mangal);
    print_dosha("Kalsarp", &c.doshas.kalsarp);
    print_dosha("Pitra", &c.doshas.pitra);
    println!("  {:<8} {}", "SadeSati", c.doshas.sade_sati.description);
}

fn print_dosha(name: &str, d: &DoshaResult) {
    let severity = d.severity.map(|s| format!(" [{}]", s.name())).unwrap_or_default();
    println!("  {name:<8} {}{severity}", d.description);
    if let Some(remedies) = &d.remedies {
        for r in remedies {
            println!("           - {r}");
        }
    }
}

fn span_line(s: &DashaSpan) -> String {
    format!(
        "{:<7} {} .. {}  ({:.2} y)",
        s.planet.name(),
        s.start.format("%Y-%m-%d"),
        s.end.format("%Y-%m-%d"),
        s.duration_years
    )
}

fn print_dasha(c: &CompleteBirthChart) {
    let d = &c.dasha;
    println!(
        "Vimshottari: birth nakshatra {} (lord {}), balance {:.2} years",
        d.birth_nakshatra.name,
        d.birth_lord.name(),
        d.balance_years
    );
    println!("  Maha       {}", span_line(&d.current_maha));
    println!("  Antar      {}", span_line(&d.current_antar));
    println!("  Pratyantar {}", span_line(&d.current_pratyantar));
    println!("Maha dashas:");
    for s in &d.all_maha_dashas {
        let marker = if *s == d.current_maha { "*" } else { " " };
        println!(" {marker} {}", span_line(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_chart_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "kundali",
            "chart",
            "--date",
            "1990-05-15T06:30:00Z",
            "--lat",
            "-33.87",
            "--lon",
            "-70.65",
            "--format",
            "json",
            "--navamsa",
            "parity-offset",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.navamsa, Some(NavamsaConvention::ParityOffset));
        match cli.command {
            Commands::Chart(args) => {
                assert_eq!(args.lat, -33.87);
                assert_eq!(args.lon, -70.65);
                assert!(args.as_of.is_none());
            }
            _ => panic!("expected chart subcommand"),
        }
    }

    #[test]
    fn dms_accepts_negative_angle() {
        let cli = Cli::try_parse_from(["kundali", "dms", "-10.5"]).unwrap();
        match cli.command {
            Commands::Dms { deg } => assert_eq!(deg, -10.5),
            _ => panic!("expected dms subcommand"),
        }
    }

    #[test]
    fn rejects_unknown_convention() {
        assert!(Cli::try_parse_from(["kundali", "navamsa", "12.5", "--navamsa", "kp"]).is_err());
    }
}
