use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar
    #[arg(default_value = "grammar.txt")]
    pub grammar: PathBuf,

    /// Treat every character of an alternative as one symbol
    #[arg(long)]
    pub chars: bool,

    /// Token that denotes the empty string
    #[arg(short, long, value_name = "TOKEN", default_value = ll_first_follow::DEFAULT_EPSILON)]
    pub epsilon: String,
}
