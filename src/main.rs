use clap::Parser;
use sms_meter::utils::{logger, validation::Validate};
use sms_meter::{CliConfig, CreditEstimate, Result};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&config) {
        tracing::error!("sms-meter failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let toml = config.load_toml()?;
    let message = config.read_message()?;

    let estimate = CreditEstimate::for_bulk_send(&message, config.recipients, &toml.billing);
    let balance = config.balance(&toml);

    match config.output_format(&toml) {
        "json" => println!("{}", serde_json::to_string_pretty(&estimate)?),
        _ => print_summary(&estimate, balance),
    }

    if let Some(balance) = balance {
        estimate.ensure_affordable(balance)?;
        tracing::info!(
            "Balance check passed: {} of {} credits",
            estimate.required_credits,
            balance
        );
    }

    Ok(())
}

fn print_summary(estimate: &CreditEstimate, balance: Option<u64>) {
    let info = &estimate.info;
    println!("{}", info);
    println!("Encoding: {}", info.encoding);
    println!("Remaining: {} characters", info.remaining_characters());

    if estimate.recipients != 1 || balance.is_some() {
        println!(
            "Credits: {} ({} SMS x {} recipient(s) x {} credit(s))",
            estimate.required_credits,
            info.segments,
            estimate.recipients,
            estimate.credits_per_segment
        );
    }

    if let Some(balance) = balance {
        match estimate.shortfall(balance) {
            0 => println!("Balance: {} (sufficient)", balance),
            short => println!("Balance: {} (short by {})", balance, short),
        }
    }
}
