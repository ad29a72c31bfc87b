//! blockgen - interactive generator for reusable components and blocks

use anyhow::{Context, Result};
use blockgen_core::GeneratorConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "blockgen")]
#[command(about = "Generate a reusable component or a block from templates")]
#[command(version)]
pub struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();

    let working_dir =
        std::env::current_dir().context("Failed to determine the current directory")?;
    let config = GeneratorConfig::load(working_dir)?;

    let result = blockgen_core::run(config).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
