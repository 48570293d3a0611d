use clap::Parser;
use miette::Result;
use treadfit::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => treadfit::cli::commands::init::run(args),
        Commands::New(args) => treadfit::cli::commands::new::run(args, &global),
        Commands::List(args) => treadfit::cli::commands::list::run(args, &global),
        Commands::Show(args) => treadfit::cli::commands::show::run(args, &global),
        Commands::Normalize(args) => treadfit::cli::commands::normalize::run(args, &global),
        Commands::Match(args) => treadfit::cli::commands::match_cmd::run(args, &global),
        Commands::Lookup(args) => treadfit::cli::commands::lookup::run(args, &global),
        Commands::Validate(args) => treadfit::cli::commands::validate::run(args, &global),
        Commands::Completions(args) => treadfit::cli::commands::completions::run(args),
    }
}
