use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "prodcode")]
#[command(about = "Generate catalog product codes from product names", long_about = None)]
struct Args {
    /// Product names; read one per line from stdin when omitted
    names: Vec<String>,

    /// Emit one JSON object per name instead of tab-separated lines
    #[arg(short, long)]
    json: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prodcode_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Err(e) = prodcode_rs::run(args.names, args.json) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
