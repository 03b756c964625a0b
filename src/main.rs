use clap::Parser;
use rhiz_tag::application::{
    ConfigService, ConformanceStream, DescribeTagService, GenerateTagService,
};
use rhiz_tag::cli::{format_config, format_description, Cli, Commands};
use rhiz_tag::domain::{DateTagCodec, InstantReference, RandomSource};
use rhiz_tag::error::{Result, TagError};
use rhiz_tag::infrastructure::{ConfigStore, SeededRandom, SystemClock, ThreadRandom};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Fixes the suffix generator's seed, for reproducible output
const SEED_ENV: &str = "RHIZ_TAG_SEED";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Tag {
        at: None,
        no_suffix: false,
    });

    match command {
        Commands::Tag { at, no_suffix } => {
            let config = ConfigStore::discover()?.load()?;
            let clock = SystemClock::new(config.get_clock()?);
            let instant = match at {
                Some(text) => InstantReference::parse(&text)?,
                None => InstantReference::Now,
            };

            let mut random = random_source()?;
            let service = GenerateTagService::new(DateTagCodec::default());
            let tag = service.execute(
                &instant,
                &clock,
                random.as_mut(),
                config.suffix && !no_suffix,
            )?;
            println!("{}", tag);
            Ok(())
        }
        Commands::Date { tag } => {
            let config = ConfigStore::discover()?.load()?;
            let service = DescribeTagService::new(DateTagCodec::default());
            let description = service.execute(&tag)?;
            println!("{}", format_description(&description, &config.time_format));
            Ok(())
        }
        Commands::Stream => {
            let stream = ConformanceStream::new(DateTagCodec::default());
            let stdin = io::stdin();
            let stdout = io::stdout();
            stream.run(stdin.lock(), stdout.lock())?;
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(ConfigStore::discover()?);

            if list {
                let config = service.list()?;
                print!("{}", format_config(&config));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: rhiz-tag config [--list | <key> [<value>]]");
                println!("Valid keys: clock, suffix, time_format");
                println!("Config file: {}", service.store().path().display());
                Ok(())
            }
        }
    }
}

fn random_source() -> Result<Box<dyn RandomSource>> {
    match std::env::var(SEED_ENV) {
        Ok(seed) => {
            let seed: u64 = seed.trim().parse().map_err(|_| {
                TagError::Config(format!(
                    "{} must be an unsigned integer, got '{}'",
                    SEED_ENV, seed
                ))
            })?;
            Ok(Box::new(SeededRandom::new(seed)))
        }
        Err(_) => Ok(Box::new(ThreadRandom)),
    }
}
