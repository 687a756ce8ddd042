use crate::models::Body;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gazetteer-builder")]
#[command(about = "Build searchable place-name gazetteers for Earth, the Moon and Mars")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(short, long, global = true, help = "Configuration file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Output root directory [default: output]"
    )]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the Earth gazetteer from a GeoNames dump
    Earth {
        #[arg(long, help = "Use allCountries.zip instead of cities500.zip")]
        full: bool,

        #[arg(
            long,
            value_name = "CLASSES",
            help = "Comma-separated GeoNames feature classes to keep (e.g. 'P,A')"
        )]
        feature_classes: Option<String>,

        #[arg(short, long, help = "Read a local GeoNames zip instead of downloading")]
        input: Option<PathBuf>,
    },

    /// Build Moon and/or Mars gazetteers from USGS nomenclature KMZ files
    Planetary {
        #[arg(short, long = "body", value_enum, help = "Body to build (repeatable) [default: all]")]
        bodies: Vec<Body>,

        #[arg(long, help = "Never replace a typed feature with an untyped one of the same name")]
        prefer_typed: bool,

        #[arg(short, long, help = "Read a local KMZ instead of downloading (single body only)")]
        input: Option<PathBuf>,
    },

    /// Build every gazetteer
    All {
        #[arg(long, help = "Use allCountries.zip for Earth")]
        full: bool,
    },
}
