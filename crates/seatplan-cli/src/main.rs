mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use seatplan_core::CategoryOrder;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seatplan",
    version,
    about = "Wedding seating planner for RSVP guest-list exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a guest-list CSV into normalized guest records (without planning)
    Parse {
        /// Path to the guest-list CSV export
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed guest records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show the RSVP attendance buckets without packing any tables
    Classify {
        /// Path to the guest-list CSV export
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Build the seating plan and write the workbook
    Plan {
        /// Path to the guest-list CSV export (or a pre-parsed JSON dump)
        input_file: PathBuf,

        /// Workbook file to write
        #[arg(
            short = 'O',
            long = "out",
            value_name = "FILE",
            default_value = "Wedding_seating_plan.xlsx"
        )]
        out: PathBuf,

        /// Seats per table
        #[arg(long, default_value_t = seatplan_core::DEFAULT_TABLE_SIZE)]
        table_size: usize,

        /// Category processing order (drives table numbering)
        #[arg(long, value_enum, default_value = "first-seen")]
        order: OrderArg,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show per-table member listings and packing decisions
        #[arg(long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    /// Order of first appearance among attending guests
    FirstSeen,
    /// Descending attending count, ties by first appearance
    LargestFirst,
}

impl From<OrderArg> for CategoryOrder {
    fn from(arg: OrderArg) -> CategoryOrder {
        match arg {
            OrderArg::FirstSeen => CategoryOrder::FirstSeen,
            OrderArg::LargestFirst => CategoryOrder::LargestFirst,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Classify { input_file, output } => commands::classify::run(input_file, &output),
        Commands::Plan {
            input_file,
            out,
            table_size,
            order,
            output,
            verbose,
        } => commands::plan::run(input_file, out, table_size, order.into(), &output, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
