use msxsl::{CliError, describe_file, format_descriptor};
use std::env;

/// Lists the `msxsl:script` blocks of a stylesheet and validates their attributes.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Lists the msxsl:script blocks of an XSLT stylesheet.");
        eprintln!();
        eprintln!("Usage: {} <path/to/stylesheet.xsl>", args[0]);
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1]) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(path: &str) -> Result<(), CliError> {
    log::info!("Reading stylesheet from {}", path);
    let scripts = describe_file(path)?;
    if scripts.is_empty() {
        println!("No msxsl:script blocks found in {}", path);
        return Ok(());
    }
    for script in &scripts {
        println!("{}", format_descriptor(script));
    }
    Ok(())
}
