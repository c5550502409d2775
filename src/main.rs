use clap::Parser;
use filesecretstore::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init => filesecretstore::cli::commands::init::execute(&cli),
        Commands::Set {
            ref name,
            ref value,
            force,
        } => filesecretstore::cli::commands::set::execute(&cli, name, value.as_deref(), force),
        Commands::Get { ref name } => filesecretstore::cli::commands::get::execute(&cli, name),
        Commands::List => filesecretstore::cli::commands::list::execute(&cli),
        Commands::Version => filesecretstore::cli::commands::version::execute(),
    };

    if let Err(e) = result {
        filesecretstore::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Send diagnostics to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "filesecretstore=debug"
    } else {
        "filesecretstore=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
