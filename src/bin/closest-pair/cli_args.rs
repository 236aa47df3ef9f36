use clap::Parser;
use clap_verbosity_flag::Verbosity;
use divide_and_conquer::StripScan;
use std::path::PathBuf;

/// Find the closest pair of points in the plane with divide & conquer
///
/// Reads points from a CSV file (`--input`), or generates random points in a square.
/// Use `--output` to save all the points, and the closest pair, as GeoJSON to look at in a map
/// viewer. Filename .geojson will be GeoJSON, .geojsons will be GeoJSONSeq
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// CSV file of points, with a header line `x,y`
    #[arg(
        short,
        long,
        value_name = "POINTS.csv",
        conflicts_with_all = ["num_points", "size", "seed"]
    )]
    pub input: Option<PathBuf>,

    /// How many random points to generate
    #[arg(short = 'n', long, value_name = "N", default_value_t = 10)]
    pub num_points: usize,

    /// Random points have x & y from -SIZE to SIZE
    #[arg(long, value_name = "SIZE", default_value_t = 100.)]
    pub size: f64,

    /// Seed for the random points, to get the same points each run
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// How to check the strip along the dividing line
    /// `windowed`: sort the strip by y and only compare nearby points. O(n log n)
    /// `exhaustive`: compare every pair in the strip.
    #[arg(long, value_enum, default_value_t = StripScan::Windowed)]
    pub strip_scan: StripScan,

    /// Also check every pair of points, and exit with an error if that finds a closer pair
    #[arg(long)]
    pub check: bool,

    /// Save the points & the closest pair here
    #[arg(short, long, value_name = "OUTPUT.geojson[s]")]
    pub output: Option<String>,

    /// If the output file already exists, overwrite it. By default, exit if the output already
    /// exists
    #[arg(long, requires = "output")]
    pub overwrite: bool,

    #[command(flatten)]
    pub verbose: Verbosity<clap_verbosity_flag::InfoLevel>,
}
