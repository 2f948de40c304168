use clap::Parser;

use convterm::cli::{self, Args};
use convterm::config::Config;
use convterm::console;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = cli::run(args.command, &config, args.config.as_deref(), &mut stdout) {
        log::debug!("Command failed: {:?}", e);
        let message = format!("Error: {}", e);
        let mut stderr = std::io::stderr();
        let error_color = config.console.error_color;
        if console::write_line_color_to(&mut stderr, &message, error_color, false).is_err() {
            eprintln!("{}", message);
        }
        std::process::exit(1);
    }
}
