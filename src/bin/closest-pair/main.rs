use anyhow::{Context, Result};
use clap::Parser;
use divide_and_conquer::closest_pair::closest_pair_brute_force;
use divide_and_conquer::fileio::{self, OutputFormat};
use divide_and_conquer::{closest_pair_with, generate};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use num_format::{Locale, ToFormattedString};
use std::io::Write;
use std::time::Instant;

mod cli_args;

fn main() -> Result<()> {
    let args = cli_args::Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let output_format = match args.output {
        None => None,
        Some(ref output_filename) => {
            let Some(output_format) = OutputFormat::from_filename(output_filename) else {
                error!(
                    "Output filename '{}' doesn't end with '.geojson' or '.geojsons'. This programme only creates GeoJSON or GeoJSONSeq files",
                    output_filename
                );
                anyhow::bail!("Unknown output format for file {:?}", output_filename);
            };
            if !args.overwrite && std::path::Path::new(output_filename).exists() {
                error!(
                    "Output file {} already exists and --overwrite not used. Refusing to overwrite, and exiting early",
                    output_filename
                );
                anyhow::bail!(
                    "Output file {} already exists and --overwrite not used",
                    output_filename
                );
            }
            debug!("Output format: {output_format:?}");
            Some(output_format)
        }
    };

    let points = match args.input {
        Some(ref input_filename) => {
            info!("Reading points from {}", input_filename.display());
            let f = std::fs::File::open(input_filename)
                .with_context(|| format!("Opening {}", input_filename.display()))?;
            fileio::read_points_csv(std::io::BufReader::new(f))
                .with_context(|| format!("Reading points from {}", input_filename.display()))?
        }
        None => {
            info!(
                "Generating {} random points, from -{size} to {size}",
                args.num_points.to_formatted_string(&Locale::en),
                size = args.size
            );
            let mut rng = generate::rng(args.seed);
            generate::random_points(&mut rng, args.num_points, args.size)?
        }
    };

    let started = Instant::now();
    let pair = match closest_pair_with(&points, args.strip_scan) {
        Ok(pair) => pair,
        Err(e) => {
            error!("Cannot find closest pair: {}", e);
            return Err(e.into());
        }
    };
    debug!(
        "Found closest pair of {} points in {:?}",
        points.len().to_formatted_string(&Locale::en),
        started.elapsed()
    );

    println!("Point 1: ({}, {})", pair.a.x(), pair.a.y());
    println!("Point 2: ({}, {})", pair.b.x(), pair.b.y());
    println!("Distance: {}", pair.distance());

    if args.check {
        let expected = closest_pair_brute_force(&points)?;
        if pair.distance() > expected.distance() {
            error!(
                "Checking every pair found a closer pair: {:?} & {:?}, distance {}",
                expected.a.x_y(),
                expected.b.x_y(),
                expected.distance()
            );
            anyhow::bail!(
                "Closest pair distance {} is larger than the brute force {}",
                pair.distance(),
                expected.distance()
            );
        }
        info!("Checked all pairs, there is no closer pair");
    }

    if let (Some(output_filename), Some(output_format)) = (args.output, output_format) {
        let f = std::fs::File::create(&output_filename)
            .with_context(|| format!("Creating {}", output_filename))?;
        let mut f = std::io::BufWriter::new(f);
        let features = fileio::closest_pair_features(&points, &pair);
        let num_features = features.len();
        let num_written =
            fileio::write_geojson_features_directly(features.into_iter(), &mut f, &output_format)
                .with_context(|| {
                    format!(
                        "Writing {} features to filename {:?}",
                        num_features, output_filename
                    )
                })?;
        f.flush()
            .with_context(|| format!("Writing to {}", output_filename))?;
        info!(
            "Wrote {} feature(s) to {}",
            num_written.to_formatted_string(&Locale::en),
            output_filename
        );
    }

    Ok(())
}
