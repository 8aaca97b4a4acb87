mod args;
mod config;
mod demo;
mod play;
mod render;

use clap::Parser;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::{TicTacToeSession, log, logger};

use args::{Args, Command};
use render::ConsoleBroadcaster;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = config::get_config_path(args.config.as_deref());
    let config_manager = config::get_config_manager(&config_path);
    let mut config = config_manager.get_config()?;
    args.apply_overrides(&mut config);

    logger::init_logger(args.log_prefix(&config), config.log.level);
    log!("Loaded config from {}", config_path);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", config_path);
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());
    let mut demo_rng = rng.fork();

    let session = TicTacToeSession::new(rng, ConsoleBroadcaster::new(), config.bot_move_delay());

    match args.command.unwrap_or_default() {
        Command::Play => play::run_play(&session, config.game).await?,
        Command::Demo => {
            demo::run_demo(&session, config.game, config.demo_move_interval(), &mut demo_rng).await
        }
    }

    Ok(())
}
