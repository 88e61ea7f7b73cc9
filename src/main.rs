use colored::*;
use std::io::{self, Write};

use mdcode_lib::cli_types::{Cli, ParsedArgs, program_name, usage};
use mdcode_lib::exit_codes::exit;
use mdcode_lib::extract_with;

fn init_logging(cli: &Cli) {
    let env = env_logger::Env::default().default_filter_or(cli.log_level().as_str());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let args: Vec<_> = std::env::args_os().collect();

    let cli = match Cli::parse_args(&args) {
        ParsedArgs::Run(cli) => cli,
        ParsedArgs::Info(err) => err.exit(),
        ParsedArgs::Usage => {
            println!("{}", usage(&program_name(args.first())));
            let _ = io::stdout().flush();
            exit::usage_error();
        }
    };

    init_logging(&cli);

    match extract_with(&cli.input, &cli.output, &cli.markers()) {
        Ok(summary) => log::debug!(
            "[mdcode] Wrote {} line(s) from {} block(s) to {}",
            summary.lines_written,
            summary.blocks,
            cli.output.display()
        ),
        Err(err) => {
            eprintln!("{}: {}", "Error".red().bold(), err);
            exit::tool_error();
        }
    }
}
