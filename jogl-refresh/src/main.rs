/// JOGL and GlueGen distribution refresh entry point
mod manifest;
mod refresh;

use refresh::LibraryRefresher;
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("Usage: {} <jogl-jar-dir>", args[0]);
        std::process::exit(1);
    }

    let refresher = LibraryRefresher::new(Path::new(&args[1]), Path::new("."));
    refresher.run()?;

    Ok(())
}
