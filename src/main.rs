//! Command-line walkthrough of the headless editor.

use std::time::Duration;

use clap::Parser;
use richedit::config::Config;
use richedit::demo::{self, Demo, DemoOptions};
use richedit::fixtures::WELCOME_ID;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "richedit-demo",
    version,
    about = "Drive the headless rich-text editor through scripted walkthroughs"
)]
struct Cli {
    /// Walkthrough to run
    #[arg(short, long, value_enum, default_value_t = Demo::All)]
    demo: Demo,

    /// Record loaded by the async walkthrough
    #[arg(long, default_value = WELCOME_ID)]
    content_id: String,

    /// Title used when saving
    #[arg(long, default_value = "My Doc")]
    title: String,

    /// Simulated load latency in milliseconds
    #[arg(long)]
    load_latency_ms: Option<u64>,

    /// Simulated save latency in milliseconds
    #[arg(long)]
    save_latency_ms: Option<u64>,

    /// Probability in [0, 1] that a save is refused
    #[arg(long)]
    save_failure_rate: Option<f64>,

    /// Make every service call fail with a transport error
    #[arg(long)]
    offline: bool,

    /// Seed for the save failure roll
    #[arg(long)]
    seed: Option<u64>,

    /// Placeholder shown by the uncontrolled walkthrough
    #[arg(long)]
    placeholder: Option<String>,
}

impl Cli {
    fn options(&self, mut config: Config) -> DemoOptions {
        if let Some(ms) = self.load_latency_ms {
            config.load_latency_ms = ms;
        }
        if let Some(ms) = self.save_latency_ms {
            config.save_latency_ms = ms;
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = placeholder.clone();
        }
        config.offline |= self.offline;

        let mut options = DemoOptions::from_config(&config);
        if let Some(rate) = self.save_failure_rate {
            options.service = options.service.with_save_failure_rate(rate);
        }
        if let Some(seed) = self.seed {
            options.service = options.service.with_seed(seed);
        }
        options.content_id = self.content_id.clone();
        options.title = self.title.clone();
        options
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "richedit=info,richedit_widget=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let options = cli.options(Config::from_env());
    tracing::debug!(
        demo = ?cli.demo,
        load_latency = ?options.service.load_latency,
        save_latency = ?options.service.save_latency,
        failure_rate = options.service.save_failure_rate,
        "Starting walkthrough"
    );
    if options.service.load_latency > Duration::from_secs(10) {
        tracing::warn!("Load latency above 10s; the async walkthrough will be slow");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(cli.demo, &options, &mut out).await
}
