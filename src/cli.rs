use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fixgen", version, about = "Synthetic TypeScript fixture generator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Directory preset fixtures are written to"
    )]
    pub out_dir: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Generate {
        #[arg(long, value_enum, default_value_t = SizePreset::All)]
        preset: SizePreset,
    },
    Append {
        path: PathBuf,
        #[arg(long)]
        reps: u64,
    },
    Plan {
        #[arg(long, value_enum, default_value_t = SizePreset::All)]
        preset: SizePreset,
    },
    Check {
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SizePreset {
    All,
    #[value(name = "1mb")]
    OneMb,
    #[value(name = "10mb")]
    TenMb,
    #[value(name = "100mb")]
    HundredMb,
    #[value(name = "1gb")]
    OneGb,
}
