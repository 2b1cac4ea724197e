//! Terminal demo: generate, solve and print mazes.
//!
//! Run: cargo run --bin trailblazer -- [rows] [cols] [seed]

use trailblazer_demos::{DemoArgs, run};

fn main() {
    let args = match DemoArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("usage: trailblazer [rows] [cols] [seed]");
            std::process::exit(2);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(&args, &mut stdout) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
