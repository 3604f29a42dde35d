use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use tl_thermo::{tables, ThermocoupleConverter, ThermocoupleType};

#[derive(Parser)]
#[command(name = "tl-cli")]
#[command(about = "ThermoLab CLI - thermocouple conversion utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a measured EMF in microvolts to temperature
    ToTemp {
        /// Thermocouple type letter (T, J, K, ...)
        #[arg(long = "type", default_value = "T")]
        tc_type: String,
        /// Reference (cold junction) temperature in degrees Celsius
        #[arg(long, default_value_t = 0.0)]
        reference: f64,
        /// Measured EMF in microvolts
        microvolts: f64,
    },
    /// Convert a junction temperature to its EMF in microvolts
    ToVolt {
        /// Thermocouple type letter (T, J, K, ...)
        #[arg(long = "type", default_value = "T")]
        tc_type: String,
        /// Junction temperature in degrees Celsius
        temperature: f64,
    },
    /// List thermocouple types and conversion support
    Types,
    /// Tabulate the conversion curve as CSV
    Sweep {
        /// Thermocouple type letter (T, J, K, ...)
        #[arg(long = "type", default_value = "T")]
        tc_type: String,
        /// Sweep start in microvolts
        #[arg(long, default_value_t = -5500.0)]
        from: f64,
        /// Sweep end in microvolts
        #[arg(long, default_value_t = 20800.0)]
        to: f64,
        /// Number of sample points
        #[arg(long, default_value_t = 200)]
        points: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ToTemp {
            tc_type,
            reference,
            microvolts,
        } => cmd_to_temp(&tc_type, reference, microvolts),
        Commands::ToVolt {
            tc_type,
            temperature,
        } => cmd_to_volt(&tc_type, temperature),
        Commands::Types => cmd_types(),
        Commands::Sweep {
            tc_type,
            from,
            to,
            points,
            output,
        } => cmd_sweep(&tc_type, from, to, points, output.as_deref()),
    }
}

fn parse_type(letter: &str) -> Result<ThermocoupleType, Box<dyn Error>> {
    letter
        .parse::<ThermocoupleType>()
        .map_err(|err| format!("{err}: {letter:?}").into())
}

fn cmd_to_temp(tc_type: &str, reference: f64, microvolts: f64) -> Result<(), Box<dyn Error>> {
    let converter = ThermocoupleConverter::new(parse_type(tc_type)?, reference)?;
    let temperature = converter.temperature_from_voltage(microvolts)?;
    println!("{temperature:.6}");
    Ok(())
}

fn cmd_to_volt(tc_type: &str, temperature: f64) -> Result<(), Box<dyn Error>> {
    let converter = ThermocoupleConverter::with_zero_reference(parse_type(tc_type)?)?;
    let microvolts = converter.voltage_from_temperature(temperature)?;
    println!("{microvolts:.6}");
    Ok(())
}

fn cmd_types() -> Result<(), Box<dyn Error>> {
    println!("Thermocouple types:");
    for tc_type in ThermocoupleType::ALL {
        let support = if tables::lookup(tc_type).is_some() {
            "conversion table registered"
        } else {
            "no conversion table"
        };
        println!("  {} - {} ({})", tc_type, tc_type.display_name(), support);
    }
    Ok(())
}

fn cmd_sweep(
    tc_type: &str,
    from: f64,
    to: f64,
    points: usize,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    if points < 2 {
        return Err("sweep needs at least 2 points".into());
    }
    if from >= to {
        return Err("sweep start must be below sweep end".into());
    }

    let converter = ThermocoupleConverter::with_zero_reference(parse_type(tc_type)?)?;
    tracing::debug!(from, to, points, "tabulating conversion curve");

    let step = (to - from) / (points - 1) as f64;
    let mut csv = String::from("microvolts,temperature\n");
    for index in 0..points {
        let microvolts = from + step * index as f64;
        let temperature = converter.temperature_from_voltage(microvolts)?;
        csv.push_str(&format!("{microvolts},{temperature}\n"));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} points to {}", points, path.display());
    } else {
        print!("{csv}");
    }

    Ok(())
}
