use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Verify => passvault::cli::commands::verify::execute(&cli),
        Commands::Add {
            ref service,
            ref username,
        } => passvault::cli::commands::add::execute(&cli, service, username),
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Find { ref service } => passvault::cli::commands::find::execute(&cli, service),
        Commands::Remove { ref service, force } => {
            passvault::cli::commands::remove::execute(&cli, service, force)
        }
        Commands::ChangeMaster => passvault::cli::commands::change_master::execute(&cli),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
