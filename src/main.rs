use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_engine::*;

mod display;

fn prompt_player_kind(player: usize, default: PlayerKind) -> Result<PlayerKind> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!(
            "Who controls player {}? (h)uman, (g)reedy or (m)inimax [{}]: ",
            player, default
        );
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.trim().to_lowercase().chars().next() {
            None => return Ok(default),
            Some(_letter @ 'h') => return Ok(PlayerKind::Human),
            Some(_letter @ 'g') => return Ok(PlayerKind::Greedy),
            Some(_letter @ 'm') => return Ok(PlayerKind::Minimax),
            _ => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Welcome to Connect 4\n");

    let mut config = EngineConfig::load_or_default();

    config.players = [
        prompt_player_kind(1, config.players[0])?,
        prompt_player_kind(2, config.players[1])?,
    ];

    // batch mode when nobody needs to watch
    if config.players.iter().all(|kind| kind.is_ai()) && config.games > 1 {
        let summary = series::run_series(&config, config.games)?;
        for kind in [PlayerKind::Greedy, PlayerKind::Minimax].iter() {
            if config.players.contains(kind) {
                println!("{} wins: {}", kind, summary.wins_for(*kind));
            }
        }
        println!(
            "Draws: {}, forfeits: {} ({} games)",
            summary.draws, summary.forfeits, summary.games
        );
        return Ok(());
    }

    let players = [config.players[0].build(&config), config.players[1].build(&config)];
    let mut game = Game::new(&config, players)?;

    // game loop
    loop {
        display::draw(game.board())?;

        let side = game.to_move();
        if game.player(side).is_time_limited() {
            println!("Player {} ({}) is thinking...", side.number(), game.player(side).name());
            stdout().flush().expect("Failed to flush to stdout!");
        }

        match game.play_turn() {
            TurnOutcome::Continue { side, column } => {
                println!("Player {} plays column {}", side.number(), column + 1);
            }

            // end states
            TurnOutcome::Finished(result) => {
                display::draw(game.board())?;
                match result {
                    GameResult::Win(side) => println!("Player {} wins!", side.number()),
                    GameResult::Draw => println!("Draw!"),
                    GameResult::Forfeit { loser, reason } => println!(
                        "Player {} forfeits ({}), player {} wins!",
                        loser.number(),
                        reason,
                        loser.other().number()
                    ),
                }
                println!("Game record: {}", game.record);
                break;
            }
        }
    }
    Ok(())
}
