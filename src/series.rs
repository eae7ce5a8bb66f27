//! Batches of AI-only games, used to compare strategies

use indicatif::*;
use log::info;
use rayon::prelude::*;

use std::collections::HashMap;
use std::time::Instant;

use crate::{
    board::Side,
    config::EngineConfig,
    error::ConfigError,
    game::{Game, GameResult},
    player::PlayerKind,
};

/// Totals over a series of games
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeriesSummary {
    pub games: usize,
    pub wins: HashMap<PlayerKind, usize>,
    pub draws: usize,
    /// Games that ended because a player forfeited (also counted as wins)
    pub forfeits: usize,
}

impl SeriesSummary {
    fn record(&mut self, winner: Option<PlayerKind>, forfeit: bool) {
        self.games += 1;
        match winner {
            Some(kind) => *self.wins.entry(kind).or_insert(0) += 1,
            None => self.draws += 1,
        }
        if forfeit {
            self.forfeits += 1;
        }
    }

    pub fn wins_for(&self, kind: PlayerKind) -> usize {
        self.wins.get(&kind).copied().unwrap_or(0)
    }
}

/// Plays `games` games between the configured kinds, swapping who moves first every game.
///
/// Each game is searched on a single thread; separate games run in parallel.
pub fn run_series(config: &EngineConfig, games: usize) -> Result<SeriesSummary, ConfigError> {
    if config.players.iter().any(|kind| !kind.is_ai()) {
        return Err(ConfigError::Validation(
            "a series can only be played between AI players".to_string(),
        ));
    }
    config.validate()?;

    let start = Instant::now();
    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let results: Vec<(Option<PlayerKind>, bool)> = (0..games)
        .into_par_iter()
        .map(|game_index| {
            let kinds = if game_index % 2 == 0 {
                config.players
            } else {
                [config.players[1], config.players[0]]
            };
            let mut game = Game::new(config, [kinds[0].build(config), kinds[1].build(config)])?;
            let result = game.play_to_end();
            progress.inc(1);

            let winner = result.winner().map(|side| match side {
                Side::One => kinds[0],
                Side::Two => kinds[1],
            });
            let forfeit = match result {
                GameResult::Forfeit { .. } => true,
                _ => false,
            };
            Ok::<_, ConfigError>((winner, forfeit))
        })
        .collect::<Result<_, _>>()?;
    progress.finish();

    let mut summary = SeriesSummary::default();
    for (winner, forfeit) in results {
        summary.record(winner, forfeit);
    }
    info!(
        "series of {} games completed in {}",
        games,
        HumanDuration(start.elapsed())
    );
    Ok(summary)
}
