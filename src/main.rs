mod chat;
mod client;
mod config;
mod constants;
mod error;
mod image;
mod repl;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use colored::Colorize;

use crate::client::ChatClient;
use crate::config::Config;
use crate::constants::IMAGE_FILE;
use crate::error::Result;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    clear_console();

    if let Err(err) = run().await {
        eprintln!("{}", err.to_string().red());
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let client = ChatClient::new(&config)?;

    let stdin = io::stdin();
    repl::run_loop(
        &client,
        &config.model,
        Path::new(IMAGE_FILE),
        stdin.lock(),
        io::stdout(),
    )
    .await
}

fn clear_console() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}
