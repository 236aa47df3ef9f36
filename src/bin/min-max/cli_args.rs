use clap::Parser;
use clap_verbosity_flag::Verbosity;

/// Find the minimum & maximum of a list of integers with divide & conquer, counting comparisons
///
/// Without `--values`, a random list is generated.
/// Prints the min, the max, the comparisons a naive scan would need (2(n − 1)) and the number
/// this took.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// Use these numbers, rather than random ones. Comma separated
    #[arg(
        long,
        value_name = "N1,N2,…",
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with_all = ["count", "seed"]
    )]
    pub values: Option<Vec<i64>>,

    /// How many random numbers to generate. Default: a random length from 1 to 200
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Smallest possible random number
    #[arg(long, value_name = "NUMBER", default_value_t = -10_000, allow_negative_numbers = true)]
    pub range_min: i64,

    /// Largest possible random number
    #[arg(long, value_name = "NUMBER", default_value_t = 10_000, allow_negative_numbers = true)]
    pub range_max: i64,

    /// Seed for the random numbers, to get the same list each run
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Also print the list of numbers
    #[arg(long)]
    pub print_input: bool,

    #[command(flatten)]
    pub verbose: Verbosity<clap_verbosity_flag::InfoLevel>,
}
