use clap::Parser;
use discstack::OrbitStack;
use orbitdrag::config;
use orbitdrag::gui::app::AppModel;
use orbitdrag::scores::ScoreList;
use orbitdrag::sys::runtime;
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scores to show, separated by commas (overrides the config file)
    #[arg(short, long)]
    scores: Option<ScoreList>,

    /// Write a default config file if none exists and print its path
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.init_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();
    let scores = args
        .scores
        .map(Vec::from)
        .unwrap_or_else(|| config.score_values().to_vec());
    let orbit = OrbitStack::new(&scores).with_settle(config.settle());

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.orbitdrag.OrbitDrag").with_args(Vec::new());

    app.run::<AppModel>((orbit, scores, rx));
    Ok(())
}
