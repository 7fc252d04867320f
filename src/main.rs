use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, warn};

use comet_mass::{calculate_diameter, calculate_mass, calculate_mass_checked, format_mass};

#[derive(Parser)]
#[command(name = "comet_mass")]
#[command(about = "Comet mass and nucleus size calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total mass from apparent magnitude and distances
    Mass {
        /// Apparent visual magnitude
        #[arg(long, allow_negative_numbers = true)]
        m_k: f64,

        /// Distance from Earth (AU)
        #[arg(long, allow_negative_numbers = true)]
        delta: f64,

        /// Distance from Sun (AU)
        #[arg(long, allow_negative_numbers = true)]
        r: f64,

        /// Reject negative or non-finite inputs
        #[arg(long)]
        checked: bool,

        /// Print the mass in kg as a plain number
        #[arg(long)]
        raw: bool,
    },

    /// Nucleus diameter from absolute magnitude and albedo
    Size {
        /// Absolute magnitude
        #[arg(long, allow_negative_numbers = true)]
        h: f64,

        /// Geometric albedo, (0, 1]
        #[arg(long, allow_negative_numbers = true)]
        albedo: f64,
    },
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Mass { m_k, delta, r, checked, raw } => {
            debug!("m_k {:?} delta {:?} r {:?} checked {:?}", m_k, delta, r, checked);
            let mass = if checked {
                calculate_mass_checked(m_k, delta, r)?
            } else {
                calculate_mass(m_k, delta, r)
            };
            if !mass.is_finite() {
                warn!("mass is not finite, inputs are outside the formula's useful range");
            }
            if raw {
                Ok(format!("{:e}", mass))
            } else {
                Ok(format_mass(mass))
            }
        }
        Commands::Size { h, albedo } => {
            debug!("h {:?} albedo {:?}", h, albedo);
            let diameter = calculate_diameter(h, albedo)?;
            Ok(format!("{:.2} km", diameter))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    println!("{}", run(cli)?);
    Ok(())
}
