use anyhow::Result;
use clap::Parser;
use divide_and_conquer::{generate, min_max};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use num_format::{Locale, ToFormattedString};
use rand::Rng;

mod cli_args;

fn main() -> Result<()> {
    let args = cli_args::Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let values = match args.values {
        Some(values) => values,
        None => {
            let mut rng = generate::rng(args.seed);
            let count = args.count.unwrap_or_else(|| rng.gen_range(1..=200));
            info!(
                "Generating {} random numbers from {} to {}",
                count.to_formatted_string(&Locale::en),
                args.range_min,
                args.range_max
            );
            generate::random_values(&mut rng, count, args.range_min, args.range_max)?
        }
    };

    let res = match min_max(&values) {
        Ok(res) => res,
        Err(e) => {
            error!("Cannot find min & max: {}", e);
            return Err(e.into());
        }
    };
    debug!(
        "{} values, {} comparisons, best possible is {}",
        res.len.to_formatted_string(&Locale::en),
        res.comparisons.to_formatted_string(&Locale::en),
        res.optimal_comparisons().to_formatted_string(&Locale::en),
    );

    println!("Min: {}, Max: {}", res.min, res.max);
    println!("2(n - 1) = {}", res.naive_comparisons());
    println!("Count: {}", res.comparisons);

    if args.print_input {
        println!();
        println!("{:?}", values);
    }

    Ok(())
}
