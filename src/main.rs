//! hic-adjacency CLI entry point
//!
//! Queries a contact matrix (sizes file + sparse triple file) from the
//! command line: dataset details, windowed range extraction as TSV, and
//! single-cell lookup.

use clap::{Parser, Subcommand, ValueEnum};
use hic_adjacency::formats::load_coo_store;
use hic_adjacency::{
    Dataset, RangeQuery, RegionFilter, RegionLimit, DEFAULT_RESOLUTIONS,
};
use std::path::PathBuf;
use std::time::Instant;

/// Inter/intra filter (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
    /// Keep only same-chromosome interactions
    #[value(name = "intra")]
    Intra,
    /// Keep only cross-chromosome interactions
    #[value(name = "inter")]
    Inter,
}

impl From<FilterArg> for RegionFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Intra => RegionFilter::Intra,
            FilterArg::Inter => RegionFilter::Inter,
        }
    }
}

#[derive(Parser)]
#[command(name = "hic-adjacency")]
#[command(about = "Query Hi-C contact matrices by genome coordinates")]
#[command(version)]
struct Cli {
    /// Chromosome sizes file (name<TAB>length, optionally .gz/.bz2)
    #[arg(long, global = true)]
    sizes: Option<PathBuf>,

    /// Sparse matrix file (resolution bin_i bin_j value)
    #[arg(long, global = true)]
    matrix: Option<PathBuf>,

    /// Resolutions to index, comma separated (default: the standard ladder)
    #[arg(long, global = true, value_delimiter = ',')]
    resolutions: Option<Vec<u64>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the chromosomes and resolutions of a dataset
    Details,
    /// Extract interactions for a region, printed as TSV
    Range {
        /// Chromosome of interest (chr1, 1, CHR1 all accepted)
        #[arg(long)]
        chrom: String,
        /// Region start in bp (inclusive)
        #[arg(long)]
        start: u64,
        /// Region end in bp (exclusive)
        #[arg(long)]
        end: u64,
        /// Resolution in bp
        #[arg(long)]
        res: u64,
        /// Limit interactions to this chromosome
        #[arg(long)]
        limit_chr: Option<String>,
        /// Limit start in bp (requires --limit-chr and --limit-end)
        #[arg(long, requires = "limit_chr", requires = "limit_end")]
        limit_start: Option<u64>,
        /// Limit end in bp (requires --limit-chr and --limit-start)
        #[arg(long, requires = "limit_chr", requires = "limit_start")]
        limit_end: Option<u64>,
        /// Keep only intra- or inter-chromosome interactions
        #[arg(long)]
        filter: Option<FilterArg>,
    },
    /// Read one matrix cell with chromosome annotation for both axes
    Value {
        /// Resolution in bp
        #[arg(long)]
        res: u64,
        /// Row bin index on the whole-genome axis
        #[arg(long)]
        pos_x: u64,
        /// Column bin index on the whole-genome axis
        #[arg(long)]
        pos_y: u64,
    },
}

fn open_dataset(cli: &Cli) -> anyhow::Result<Dataset<hic_adjacency::DenseMatrixStore>> {
    let sizes = cli
        .sizes
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("--sizes is required"))?;
    let matrix = cli
        .matrix
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("--matrix is required"))?;
    let resolutions = cli
        .resolutions
        .clone()
        .unwrap_or_else(|| DEFAULT_RESOLUTIONS.to_vec());

    let start = Instant::now();
    let store = load_coo_store(sizes, matrix, &resolutions)?;
    let dataset = Dataset::open(store)?;
    eprintln!("Dataset loaded in {:.2}s", start.elapsed().as_secs_f64());
    Ok(dataset)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    match &cli.command {
        Commands::Details => {
            let dataset = open_dataset(&cli)?;
            let details = dataset.details();
            println!("chromosome\tlength");
            for (name, length) in &details.chromosomes {
                println!("{}\t{}", name, length);
            }
            let formatted: Vec<String> =
                details.resolutions.iter().map(|r| r.to_string()).collect();
            eprintln!("Resolutions: {}", formatted.join(", "));
        }

        Commands::Range {
            chrom,
            start: bp_start,
            end: bp_end,
            res,
            limit_chr,
            limit_start,
            limit_end,
            filter,
        } => {
            let dataset = open_dataset(&cli)?;
            let limit = limit_chr.as_ref().map(|limit_chrom| RegionLimit {
                chrom: limit_chrom.clone(),
                span: limit_start.zip(*limit_end),
            });
            let query = RangeQuery {
                chrom: chrom.clone(),
                start: *bp_start,
                end: *bp_end,
                resolution: *res,
                limit,
                filter: filter.map(Into::into),
            };

            let result = dataset.get_range(&query)?;
            for r in &result.records {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    r.chr_a, r.start_a, r.chr_b, r.start_b, r.value
                );
            }

            let d = &result.diagnostics;
            eprintln!(
                "\n=== Extraction ===\nRows:            [{}, {})\nColumns:         [{}, {})\nNon-zero cells:  {}\nEmitted:         {}\nFiltered out:    {}\nTime elapsed:    {:.2}s",
                d.row_range.0,
                d.row_range.1,
                d.col_range.0,
                d.col_range.1,
                d.nonzero_cells,
                d.emitted,
                d.filtered_out,
                start.elapsed().as_secs_f64()
            );
        }

        Commands::Value { res, pos_x, pos_y } => {
            let dataset = open_dataset(&cli)?;
            let point = dataset.get_value(*res, *pos_x, *pos_y)?;
            println!(
                "{}\t{}\t{}\t{}\t{}",
                point.chr_a, point.start_a, point.chr_b, point.start_b, point.value
            );
        }
    }

    Ok(())
}
