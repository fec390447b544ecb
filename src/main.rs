use clap::CommandFactory;
use colored::Colorize;
use copier::cli::args::{CLIArgs, Commands, CopyArgs};
use copier::core::copy::copy;
use copier::error::{CopierError, CopierResult};
use copier::utility::report::StatusReporter;
use std::process;

fn main() {
    let args = CLIArgs::parse();
    let result = match args.command {
        Commands::Config { command } => command.execute().map_err(CopierError::from),
        Commands::Copy(copy_args) => run_copy(copy_args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        if matches!(e, CopierError::Validation(_) | CopierError::Pattern(_)) {
            print_copy_usage();
        }
        process::exit(1);
    }
}

fn run_copy(copy_args: CopyArgs) -> CopierResult<()> {
    let (config, output) = copy_args.validate()?;
    if !output.color {
        colored::control::set_override(false);
    }

    let stdout = std::io::stdout();
    let mut reporter = StatusReporter::new(stdout.lock(), output.quiet);
    copy(&config, &mut reporter)?;
    reporter.finish()?;
    Ok(())
}

fn print_copy_usage() {
    let mut cmd = CLIArgs::command();
    cmd.build();
    if let Some(copy_cmd) = cmd.find_subcommand_mut("copy") {
        eprintln!("\n{}", copy_cmd.render_usage());
    }
    eprintln!("For more information, try '--help'.");
}
