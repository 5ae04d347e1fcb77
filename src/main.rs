use clap::Parser;
use hello::utils::{logger, validation::Validate};
use hello::{CliConfig, Greeter, GreeterError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let values = match config.resolve_values() {
        Ok(values) => values,
        Err(e) => fail(e),
    };

    let greeter = Greeter::stdout();
    for value in &values {
        greeter.world(value);
    }
    tracing::debug!("Greeted {} value(s)", values.len());
}

fn fail(e: GreeterError) -> ! {
    tracing::error!("{} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}
