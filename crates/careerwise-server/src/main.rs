//! Careerwise: career counselor and realist agents behind a small HTTP host.

use std::sync::Arc;

use careerwise_actions::Memory;
use careerwise_catalog::Catalog;
use careerwise_core::CareerwiseConfig;
use careerwise_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn load_catalog(config: &CareerwiseConfig) -> anyhow::Result<Catalog> {
    let catalog = match &config.data_dir {
        Some(dir) => {
            info!("Loading catalog from {}", dir.display());
            Catalog::load_dir(dir)?
        }
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

fn print_usage() {
    println!("Careerwise - career guidance agents for Indian high school students");
    println!();
    println!("Usage: careerwise [command]");
    println!();
    println!("Commands:");
    println!("  (none)                   Start the server");
    println!("  ask <ACTION> <text...>   Run one action and print its reply");
    println!("  help                     Show this help message");
    println!();
    println!("Environment:");
    println!("  PORT                        Listen port (default 3010)");
    println!("  CAREERWISE_DATA_DIR         Directory with careers.json and cautions.json");
    println!("  CAREERWISE_TOP_RISK_LIMIT   Entries in the top-risk ranking (default 5)");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = CareerwiseConfig::from_env()?;

    if args.len() > 1 {
        match args[1].as_str() {
            "ask" => {
                if args.len() < 3 {
                    eprintln!("Usage: careerwise ask <ACTION> <text...>");
                    std::process::exit(1);
                }
                let state = AppState::new(config.clone(), load_catalog(&config)?);
                let text = args[3..].join(" ");
                match state.dispatch(&args[2], &Memory::from_text(text)) {
                    Some(response) => {
                        println!("{}", response.text);
                        return Ok(());
                    }
                    None => {
                        let known: Vec<&str> =
                            state.plugins.iter().flat_map(|p| p.action_names()).collect();
                        eprintln!("Unknown action: {}. Known actions: {}", args[2], known.join(", "));
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'careerwise help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let port = config.port;
    let catalog = load_catalog(&config)?;
    let state = Arc::new(AppState::new(config, catalog));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Careerwise server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
