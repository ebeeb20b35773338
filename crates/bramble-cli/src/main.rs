mod config;
mod simulate;

use bramble_core::EnvironmentSnapshot;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bramble")]
#[command(about = "Classify automated visitors and gate analytics tag loading")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Classify {
        #[arg(short, long, help = "Path to an environment snapshot JSON file")]
        snapshot: Option<String>,
        #[arg(long, help = "Identity string reported by the context")]
        user_agent: Option<String>,
        #[arg(long, help = "Automation flag set by a remote-control protocol")]
        webdriver: bool,
        #[arg(long, help = "Reported plugin count")]
        plugins: Option<u32>,
        #[arg(long, help = "Preferred language value")]
        lang: Option<String>,
        #[arg(long = "global", help = "Named global present in the page context")]
        globals: Vec<String>,
    },
    Simulate {
        #[arg(short = 'f', long, default_value = "scenario.toml", help = "Path to scenario file")]
        scenario: String,
    },
    Inject {
        #[arg(help = "HTML document to embed the trap element into, '-' for stdin")]
        file: String,
        #[arg(long, help = "Also inject the tag bootstrap for this identifier")]
        tag_id: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bramble=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            snapshot,
            user_agent,
            webdriver,
            plugins,
            lang,
            globals,
        } => run_classify(snapshot, user_agent, webdriver, plugins, lang, globals),
        Commands::Simulate { scenario: path } => match config::Scenario::from_file(&path) {
            Ok(scenario) => simulate::run_simulation(scenario).await,
            Err(e) => Err(format!("failed to load scenario {}: {}", path, e).into()),
        },
        Commands::Inject { file, tag_id } => run_inject(file, tag_id),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_classify(
    snapshot_path: Option<String>,
    user_agent: Option<String>,
    webdriver: bool,
    plugins: Option<u32>,
    lang: Option<String>,
    globals: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot: EnvironmentSnapshot = match snapshot_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => EnvironmentSnapshot {
            user_agent: user_agent.unwrap_or_default(),
            webdriver,
            plugin_count: plugins,
            language: lang,
            languages: None,
            injected_globals: globals,
        },
    };

    let signals = bramble_detect::audit(&snapshot);

    println!("--- classification ---");
    println!("identity string: {}", snapshot.user_agent);
    println!("signals ({}):", signals.len());
    for signal in &signals {
        println!("  {:?}: {}", signal.kind, signal.evidence);
    }

    let verdict = if signals.is_empty() { "human" } else { "automated" };
    println!("\nverdict: {}", verdict);

    Ok(())
}

fn run_inject(file: String, tag_id: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let html = if file == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&file)?
    };

    let mut output = bramble_trap::inject_trap(&html);
    if let Some(id) = tag_id {
        output = bramble_tag::inject_bootstrap(&output, &id)?;
    }

    println!("{}", output);
    Ok(())
}
