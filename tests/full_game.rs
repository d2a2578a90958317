use pinochle::{Card, Computer, Human, Match, MatchConfig, Phase, PlayerAgent, Seat};

/// Play one game to the end. The human seat always plays its first card.
fn play_out(game: &mut Match<'_>) -> usize {
    let mut tricks = 0;
    while !game.game_over() {
        let (drawing, _) = game.trick_phase();
        for _ in 0..2 {
            let seat = game.turn();
            let proposed: Option<Card> = game.hand(seat).first().copied();
            game.play(seat, proposed).unwrap();
        }
        game.decide_trick_winner().unwrap();
        if drawing {
            game.replenish().unwrap();
        }
        tricks += 1;
    }
    tricks
}

#[test]
fn full_game_consumes_everything() {
    let config = MatchConfig {
        threshold: 1000,
        shuffle: true,
        ..MatchConfig::default()
    };
    let mut game = Match::new(Human::new(), Computer::new(), config);
    game.new_game().unwrap();
    assert_eq!(game.phase(), Phase::Tricks);

    let tricks = play_out(&mut game);
    assert_eq!(tricks, 24);
    assert_eq!(game.deck().len(), 0);
    assert_eq!(game.deck().trump(), None);
    assert!(!game.agent(Seat::One).has_cards());
    assert!(!game.agent(Seat::Two).has_cards());
    assert!(game.agent(Seat::One).melds().is_empty());
    assert!(game.agent(Seat::Two).melds().is_empty());
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn every_card_point_is_awarded() {
    let config = MatchConfig {
        seed: Some(11),
        ..MatchConfig::default()
    };
    let mut game = Match::new(Computer::new(), Computer::new(), config);
    game.new_game().unwrap();
    play_out(&mut game);
    let [one, two] = game.scores();
    // Two copies of A, 10, K, Q, J in four suits.
    assert_eq!(one + two, 2 * 4 * (11 + 10 + 4 + 3 + 2));
}

#[test]
fn hands_stay_level_through_the_trick_phase() {
    let config = MatchConfig {
        seed: Some(5),
        ..MatchConfig::default()
    };
    let mut game = Match::new(Human::new(), Computer::new(), config);
    game.new_game().unwrap();
    let mut saw_last_card = false;
    while game.playoff() || game.trick_phase().0 {
        let (drawing, last_card) = game.trick_phase();
        saw_last_card |= last_card;
        for _ in 0..2 {
            let seat = game.turn();
            let proposed = game.hand(seat).first().copied();
            game.play(seat, proposed).unwrap();
        }
        game.decide_trick_winner().unwrap();
        if drawing {
            game.replenish().unwrap();
            assert_eq!(game.hand(Seat::One).len(), 12);
            assert_eq!(game.hand(Seat::Two).len(), 12);
        } else {
            assert_eq!(game.hand(Seat::One).len(), game.hand(Seat::Two).len());
        }
    }
    assert!(saw_last_card);
    assert!(game.game_over());
}

#[test]
fn scores_carry_across_games() {
    let config = MatchConfig {
        seed: Some(21),
        threshold: 500,
        ..MatchConfig::default()
    };
    let mut game = Match::new(Computer::new(), Computer::new(), config);
    let mut games = 0;
    while !game.match_over() && games < 10 {
        let dealer = game.dealer_is_player_one();
        game.new_game().unwrap();
        assert_ne!(dealer, game.dealer_is_player_one());
        play_out(&mut game);
        games += 1;
        let [one, two] = game.scores();
        assert_eq!(one + two, 240 * games);
    }
    // 240 points change hands per game, so someone passes 500 by the third game.
    assert!(games >= 2);
    if let Some(seat) = game.winner() {
        let scores = game.scores();
        let idx = if seat == Seat::One { 0 } else { 1 };
        assert!(scores[idx] >= 500);
        assert!(scores[1 - idx] < 500);
    }
}

#[test]
fn borrowed_agents_keep_their_state() {
    let mut human = Human::new();
    let mut computer = Computer::new();
    {
        let config = MatchConfig {
            seed: Some(8),
            ..MatchConfig::default()
        };
        let mut game = Match::new(&mut human, &mut computer, config);
        game.new_game().unwrap();
        play_out(&mut game);
    }
    assert!(human.hand.is_empty());
    assert!(computer.hand.is_empty());
    assert_eq!(human.score() + computer.score(), 240);
}
