#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use sea_battle::{
        banner, describe_state, make_move, render_boards, AiCombatant, Combatant, ConsolePrompt,
        Coordinate, FireOutcome, GameState, Grid, HumanCombatant, Orientation, Side, TurnEngine,
        Vessel,
    };

    fn one_vessel_grid(row: i32, col: i32) -> Grid {
        let mut grid = Grid::new(6).unwrap();
        grid.place_vessel(Vessel::new(Coordinate::new(row, col), 1, Orientation::Horizontal))
            .unwrap();
        grid.reset_transient_state();
        grid
    }

    #[test]
    fn test_human_input_is_one_based() {
        let prompt = ConsolePrompt::new(b"3 4\n".as_slice(), Vec::<u8>::new());
        let mut human = HumanCombatant::new(prompt);
        let grid = Grid::new(6).unwrap();
        assert_eq!(
            human.choose_target(&grid.view()),
            Some(Coordinate::new(2, 3))
        );
        assert_eq!(human.choose_target(&grid.view()), None);
    }

    #[test]
    fn test_human_move_retries_bad_targets() {
        // malformed, off the board, then a hit
        let input = b"one two\n7 1\n2 2\n".as_slice();
        let mut human = HumanCombatant::new(ConsolePrompt::new(input, Vec::<u8>::new()));
        let mut grid = one_vessel_grid(1, 1);
        let shot = make_move(&mut human, &mut grid).unwrap();
        assert_eq!(shot.target, Coordinate::new(1, 1));
        assert_eq!(shot.outcome, FireOutcome::Destroyed);
        assert_eq!(shot.rejected, 1);

        let (_, out) = human.into_source().into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("enter numbers"));
    }

    #[test]
    fn test_human_against_ai_session() {
        let human = HumanCombatant::new(ConsolePrompt::new(b"6 6\n".as_slice(), Vec::<u8>::new()));
        let mut engine = TurnEngine::new(Box::new(human), Box::new(AiCombatant::seeded(8)));
        let mut ai_grid = one_vessel_grid(5, 5);
        ai_grid.set_hidden(true);
        engine.begin(one_vessel_grid(0, 0), ai_grid).unwrap();

        let board = render_boards(&engine, ["user", "ai"]);
        assert!(board.contains("user board:"));
        assert!(board.contains("1 | ■ | O"));
        assert!(!board.contains("6 | O | O | O | O | O | ■ |"));
        assert!(board.contains("6 | O | O | O | O | O | O |"));

        assert_eq!(engine.run(), Ok(Side::First));
        assert_eq!(
            describe_state(engine.state(), ["user", "ai"]),
            "user win"
        );
        assert_eq!(
            describe_state(GameState::AwaitingMove(Side::Second), ["user", "ai"]),
            "ai move"
        );
    }

    #[test]
    fn test_banner_and_board_layout() {
        let text = banner();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "    welcome to sea battle");
        assert_eq!(lines[4], "    x - row number");
        assert_eq!(lines[0], lines[6]);

        let engine = TurnEngine::new(
            Box::new(AiCombatant::seeded(1)),
            Box::new(AiCombatant::seeded(2)),
        );
        let board = render_boards(&engine, ["ai 1", "ai 2"]);
        let lines: Vec<_> = board.lines().collect();
        assert_eq!(lines[1], "ai 1 board:");
        assert_eq!(lines[2], "(not generated)");
        assert_eq!(lines[4], "ai 2 board:");
        assert_eq!(lines.len(), 7);
    }
}
