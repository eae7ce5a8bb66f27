#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};
    use std::fs::File;
    use std::io::{BufRead, BufReader};
    use std::time::{Duration, Instant};

    use crate::{
        evaluation::count_alignments, series::run_series, ArrayBoard, Clock, EngineConfig, Game,
        GameBoard, GameResult, GreedyPlayer, MinimaxPlayer, Player, PlayerKind, Side,
    };

    // each line holds a move string ('-' for none) and the alignment counts of both players
    fn load_positions() -> Result<Vec<(ArrayBoard, usize, usize)>> {
        let file = BufReader::new(File::open("test_data/alignments")?);
        let mut positions = vec![];

        for line in file.lines() {
            let buf = line?;
            let mut test_data = buf.split_whitespace();
            let mut field = || {
                test_data
                    .next()
                    .ok_or_else(|| anyhow!("invalid test data: {}", buf))
            };
            let moves = field()?;
            let one = field()?.parse::<usize>()?;
            let two = field()?.parse::<usize>()?;

            let moves = if moves == "-" { "" } else { moves };
            positions.push((ArrayBoard::from_moves(6, 7, moves)?, one, two));
        }
        Ok(positions)
    }

    fn depth_limited(depth: usize) -> EngineConfig {
        let mut config = EngineConfig::default();
        // generous enough that only the depth cap ends the search
        config.msec_per_move = 60_000;
        config.max_depth = Some(depth);
        config
    }

    #[test]
    pub fn alignment_counts() -> Result<()> {
        for (board, one, two) in load_positions()? {
            assert_eq!(count_alignments(&board, Side::One), one);
            assert_eq!(count_alignments(&board, Side::Two), two);
        }
        Ok(())
    }

    #[test]
    pub fn searches_leave_positions_untouched() -> Result<()> {
        let mut times = vec![];
        let mut nodes = vec![];

        for (mut board, _, _) in load_positions()? {
            if board.is_full() {
                continue;
            }
            let before = board.clone();
            let empty = board.num_empty_cells();

            let mut minimax = MinimaxPlayer::new().with_max_depth(3);
            minimax.init(Side::One, Duration::from_secs(60), 6, 7);
            let mut clock = Clock::start(Duration::from_secs(60));
            let start_time = Instant::now();
            minimax.calc_move(&mut board, None, &mut clock)?;
            times.push(start_time.elapsed());
            nodes.push(minimax.node_count);

            let column = clock.reported_move().ok_or_else(|| anyhow!("no move reported"))?;
            assert!(board.is_valid_move(column));
            assert!(minimax.completed_depth() <= empty);
            assert_eq!(board, before);

            let mut greedy = GreedyPlayer::new();
            greedy.init(Side::Two, Duration::from_secs(60), 6, 7);
            let mut clock = Clock::start(Duration::from_secs(60));
            greedy.calc_move(&mut board, None, &mut clock)?;
            assert!(clock.reported_move().map_or(false, |c| board.is_valid_move(c)));
            assert_eq!(board, before);
        }

        println!(
            "Depth 3 searches\nMean time: {:.6}ms, Mean no. of positions: {}",
            (times.iter().sum::<Duration>() / times.len() as u32).as_secs_f64() * 1000.0,
            nodes.iter().sum::<usize>() as f64 / nodes.len() as f64,
        );
        Ok(())
    }

    #[test]
    pub fn greedy_mirror_game() -> Result<()> {
        let config = depth_limited(1);
        let mut game = Game::new(
            &config,
            [Box::new(GreedyPlayer::new()), Box::new(GreedyPlayer::new())],
        )?;

        match game.play_to_end() {
            GameResult::Win(Side::One) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(game.record, "111111222222334");
        Ok(())
    }

    #[test]
    pub fn minimax_beats_greedy() -> Result<()> {
        for &depth in [2, 4].iter() {
            let config = depth_limited(depth);

            let mut game = Game::new(
                &config,
                [PlayerKind::Minimax.build(&config), PlayerKind::Greedy.build(&config)],
            )?;
            assert_eq!(game.play_to_end().winner(), Some(Side::One));
            assert_eq!(game.record, "1111112222223333334");

            let mut game = Game::new(
                &config,
                [PlayerKind::Greedy.build(&config), PlayerKind::Minimax.build(&config)],
            )?;
            assert_eq!(game.play_to_end().winner(), Some(Side::Two));
            assert_eq!(game.record, "11111122222234333334444455555566666677");
        }
        Ok(())
    }

    #[test]
    pub fn minimax_series_against_greedy() -> Result<()> {
        let mut config = depth_limited(2);
        config.players = [PlayerKind::Minimax, PlayerKind::Greedy];

        let summary = run_series(&config, 4)?;
        assert_eq!(summary.wins_for(PlayerKind::Minimax), 4);
        assert_eq!(summary.wins_for(PlayerKind::Greedy), 0);
        assert_eq!(summary.forfeits, 0);
        Ok(())
    }
}
