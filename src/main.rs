//! User Directory - Entry Point
//!
//! Console menu for registering, removing, and authenticating users held in memory.

use log::info;
use tokio::io::BufReader;

use user_directory::utils::logging::setup_logging;
use user_directory::{AppError, DirectoryConfig, Session, UserDirectory};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Logs go to stderr so they never interleave with the menu on stdout
    setup_logging();

    let config = DirectoryConfig::load()?;
    info!("Starting user directory with {} slots", config.capacity);

    let directory = UserDirectory::with_config(config);
    let reader = BufReader::new(tokio::io::stdin());
    let mut session = Session::new(reader, tokio::io::stdout(), directory);

    session.run().await?;
    Ok(())
}
