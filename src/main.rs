use ant_colony_defense::prelude::*;
use ant_colony_defense::script::{read_script, ScriptCommand};
use ant_colony_defense::simulation::report::{print_board, print_summary};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args);

    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Parse the script up front so a bad file fails before play starts
    let commands = match &args.script {
        Some(path) => read_script(path)?,
        None => Vec::new(),
    };
    let mut game = args.build_game(rng);

    for command in &commands {
        match command {
            ScriptCommand::Turn => take_turn(&mut game, &args),
            _ => {
                if let Err(err) = command.apply(&mut game) {
                    println!("{} {}: {}", "✗".red(), command, err.to_string().red());
                }
            }
        }
    }

    while game.status() == GameStatus::InProgress && game.turn() < args.max_turns {
        take_turn(&mut game, &args);
    }

    print_summary(&game);
    Ok(())
}

fn take_turn(game: &mut AntGame, args: &Args) {
    game.take_turn();
    if !args.suppress_events {
        print_board(game);
    }
}

fn init_tracing(args: &Args) {
    let default_level = if args.suppress_events { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
