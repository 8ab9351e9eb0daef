//! Muscle force-vector script generator.
//!
//! Converts per-muscle coordinate and force measurements into a Maya MEL
//! script that rebuilds each muscle as a cylinder-plus-cone arrow glyph on
//! the specimen's surface model.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Muscle force-vector script generator
#[derive(Parser)]
#[command(name = "muscle-forces")]
#[command(about = "Generate Maya MEL force-vector scripts from muscle measurement workbooks")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the MEL script for a single specimen
    Generate {
        /// .stl file of the specimen's surface model
        #[arg(long)]
        stl: PathBuf,

        /// Path to the workbook with coordinate and force data
        #[arg(long)]
        data: PathBuf,

        /// Name of the excel sheet to read
        #[arg(long)]
        sheet: String,

        /// Scale cylinder radii to the maximum force value
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        scale_radius: bool,

        /// Maximum force vector radius
        #[arg(long, default_value_t = 8.0)]
        max_radius: f64,

        /// Keep arrowheads on the insertion end (swap endpoints when false)
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        rev_arrows: bool,
    },

    /// Generate scripts for every specimen listed in a control workbook
    Batch {
        /// Path to the control workbook
        #[arg(long)]
        control: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Generate {
            stl,
            data,
            sheet,
            scale_radius,
            max_radius,
            rev_arrows,
        } => {
            commands::generate::run(&stl, &data, &sheet, scale_radius, max_radius, rev_arrows)?;
        }
        Commands::Batch { control } => {
            commands::batch::run(&control)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_defaults() {
        let cli = Cli::parse_from([
            "muscle-forces",
            "generate",
            "--stl",
            "AL_008.stl",
            "--data",
            "AL_008_joints.xlsx",
            "--sheet",
            "Sheet1",
        ]);
        let Commands::Generate {
            scale_radius,
            max_radius,
            rev_arrows,
            ..
        } = cli.command
        else {
            panic!("expected generate command");
        };
        assert!(scale_radius);
        assert!((max_radius - 8.0).abs() < f64::EPSILON);
        assert!(rev_arrows);
    }

    #[test]
    fn boolean_flags_accept_values() {
        let cli = Cli::parse_from([
            "muscle-forces",
            "generate",
            "--stl",
            "AL_008.stl",
            "--data",
            "AL_008_joints.xlsx",
            "--sheet",
            "Sheet1",
            "--scale-radius",
            "false",
            "--rev-arrows",
            "false",
        ]);
        let Commands::Generate {
            scale_radius,
            rev_arrows,
            ..
        } = cli.command
        else {
            panic!("expected generate command");
        };
        assert!(!scale_radius);
        assert!(!rev_arrows);
    }
}
