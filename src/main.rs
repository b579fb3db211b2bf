mod cli;

use std::process::ExitCode;

use clap::Parser;

use ll_first_follow::load::{load_file, LoadOptions, Tokenize};
use ll_first_follow::report::Report;
use ll_first_follow::GrammarSetsExt;

use crate::cli::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let options = LoadOptions {
        tokenize: if cli.chars {
            Tokenize::Chars
        } else {
            Tokenize::Whitespace
        },
        epsilon: cli.epsilon,
    };
    let loaded = match load_file(&cli.grammar, &options) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let first_sets = loaded.grammar.first_sets();
    let follow_sets = loaded.grammar.follow_sets_with_first(&first_sets);
    print!(
        "{}",
        Report {
            grammar: &loaded.grammar,
            first_sets: &first_sets,
            follow_sets: &follow_sets,
            queries: &loaded.queries,
        }
    );
    ExitCode::SUCCESS
}
