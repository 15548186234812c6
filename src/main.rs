use std::process;

mod cli;
mod config;
mod gateways;
mod view;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    if let Err(err) = cli::run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
