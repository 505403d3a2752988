use clap::Parser;
use fexplorer::{
    cli::{self, Cli},
    init,
    session::Session,
};
use log::debug;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init(cli.log_level())?;

    if let Some(path) = &cli.init_config {
        cli::write_default_config(path)?;
        println!("Configuration saved to {}", path.display());
        return Ok(());
    }

    let config = cli.load_config()?;

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout(), io::stderr())?;
    session.run()?;

    debug!("Session ended in {}", session.current_dir().display());
    Ok(())
}
