use colored::Colorize;
use concurrency_demos::demos;
use concurrency_demos::DemoConfig;
use std::process;

fn main() {
    let config = DemoConfig::default();

    let result = demos::run_all(&config, |title| {
        println!("\n{}", format!("=== {} ===", title).bold().cyan());
    });

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}
