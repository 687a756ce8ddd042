use crate::archive::{HttpClient, ReqwestClient};
use crate::cli::args::{Cli, Commands};
use crate::config::{parse_feature_classes, EarthSource, GazetteerConfig};
use crate::error::Result;
use crate::pipeline::{EarthPipeline, PipelineSummary, PlanetaryPipeline};
use crate::processors::PlanetaryDedup;
use crate::utils::constants::GEONAMES_ATTRIBUTION;
use crate::utils::progress::ProgressReporter;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let mut config = GazetteerConfig::load(cli.config.as_deref())?;
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    apply_overrides(&mut config, &cli.command);
    config.check()?;
    tracing::debug!(?config, "configuration resolved");

    let client = ReqwestClient::new()?;
    let mut progress = ProgressReporter::new(cli.quiet);

    match cli.command {
        Commands::Earth { input, .. } => {
            let summary = run_earth(&client, &config, input, &mut progress)?;
            print_summaries(&[summary]);
            println!("{}", GEONAMES_ATTRIBUTION);
        }

        Commands::Planetary { input, .. } => {
            let pipeline = PlanetaryPipeline::from_config(&client, &config, input)?;
            let summaries = pipeline.run(&mut progress)?;
            print_summaries(&summaries);
        }

        Commands::All { .. } => {
            let mut summaries = vec![run_earth(&client, &config, None, &mut progress)?];
            summaries.extend(PlanetaryPipeline::from_config(&client, &config, None)?.run(&mut progress)?);
            print_summaries(&summaries);
            println!("{}", GEONAMES_ATTRIBUTION);
        }
    }

    progress.println("Done!");
    Ok(())
}

fn run_earth<C: HttpClient + ?Sized>(
    client: &C,
    config: &GazetteerConfig,
    input: Option<std::path::PathBuf>,
    progress: &mut ProgressReporter,
) -> Result<PipelineSummary> {
    progress.println(&format!(
        "Building Earth gazetteer ({:?} GeoNames dump)",
        config.earth.source
    ));
    EarthPipeline::from_config(client, config, input).run(progress)
}

fn print_summaries(summaries: &[PipelineSummary]) {
    for summary in summaries {
        println!("\n{}", summary.display_summary());
    }
}

/// Fold subcommand flags into the file/environment configuration.
fn apply_overrides(config: &mut GazetteerConfig, command: &Commands) {
    match command {
        Commands::Earth {
            full,
            feature_classes,
            ..
        } => {
            if *full {
                config.earth.source = EarthSource::Full;
            }
            if let Some(list) = feature_classes {
                config.earth.feature_class_filter = Some(parse_feature_classes(list));
            }
        }
        Commands::Planetary {
            bodies,
            prefer_typed,
            ..
        } => {
            if !bodies.is_empty() {
                let mut unique = Vec::with_capacity(bodies.len());
                for body in bodies {
                    if !unique.contains(body) {
                        unique.push(*body);
                    }
                }
                config.planetary.bodies = unique;
            }
            if *prefer_typed {
                config.planetary.dedup = PlanetaryDedup::PreferTyped;
            }
        }
        Commands::All { full } => {
            if *full {
                config.earth.source = EarthSource::Full;
            }
        }
    }
}

/// `--verbose` forces debug; otherwise `RUST_LOG`, falling back to info.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr so stdout stays readable progress output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
