use pinochle::{
    Card, Computer, Human, Match, MatchConfig, MeldCatalog, MeldKind, PinochleError, PlayerAgent,
    PointTable, Seat, Suit,
};

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

fn cards(list: &str) -> Vec<Card> {
    list.split_whitespace().map(c).collect()
}

#[test]
fn marriage_value_follows_trump() {
    let points = PointTable::default();
    let attempt = cards("KS QS");
    let hearts = MeldCatalog::for_trump(Suit::Hearts).validate(&attempt).unwrap();
    let spades = MeldCatalog::for_trump(Suit::Spades).validate(&attempt).unwrap();
    assert_eq!(points.meld_points(hearts), 20);
    assert_eq!(points.meld_points(spades), 40);
    assert_eq!(
        MeldCatalog::for_trump(Suit::Spades).validate(&cards("KS QS KS")),
        Err(PinochleError::InvalidMeld)
    );
}

#[test]
fn catalog_scores_every_kind() {
    let points = PointTable::default();
    let catalog = MeldCatalog::for_trump(Suit::Clubs);
    let expected = [
        ("AC 10C KC QC JC", MeldKind::Flush, 150),
        ("QC KC", MeldKind::RoyalMarriage, 40),
        ("KD QD", MeldKind::Marriage(Suit::Diamonds), 20),
        ("9C", MeldKind::Dix, 10),
        ("AS AD AC AH", MeldKind::HundredAces, 100),
        ("KH KC KD KS", MeldKind::EightyKings, 80),
        ("QS QD QC QH", MeldKind::SixtyQueens, 60),
        ("JS JD JC JH", MeldKind::FortyJacks, 40),
        ("QS JD", MeldKind::Pinochle, 40),
        ("QS JD JD QS", MeldKind::DoublePinochle, 300),
    ];
    for (list, kind, value) in expected {
        assert_eq!(catalog.validate(&cards(list)), Ok(kind), "{}", list);
        assert_eq!(points.meld_points(kind), value);
    }
    assert_eq!(catalog.validate(&cards("AC 10C KC QC")), Err(PinochleError::InvalidMeld));
    assert_eq!(catalog.validate(&cards("9H")), Err(PinochleError::InvalidMeld));
}

#[test]
fn meld_points_merge_into_the_match_score() {
    let config = MatchConfig {
        shuffle: false,
        threshold: 300,
        ..MatchConfig::default()
    };
    let mut game = Match::new(Human::new(), Computer::new(), config);
    game.new_game().unwrap();
    for card in cards("QS QS JD JD") {
        game.agent_mut(Seat::Two).push_to_hand(card);
    }
    assert!(game.available_melds(Seat::Two).contains(&MeldKind::DoublePinochle));
    assert_eq!(game.meld(Seat::Two, &cards("JD QS QS JD")), Ok(300));
    assert_eq!(game.meld(Seat::Two, &cards("QS JD")), Ok(40));
    assert_eq!(game.agent(Seat::Two).melds().len(), 2);
    assert!(game.match_over());
    assert_eq!(game.winner(), Some(Seat::Two));
}

#[test]
fn melds_reset_with_each_game() {
    let config = MatchConfig {
        shuffle: false,
        ..MatchConfig::default()
    };
    let mut human = Human::new();
    let mut game = Match::new(&mut human, Computer::new(), config);
    game.new_game().unwrap();
    game.agent_mut(Seat::One).push_to_hand(c("QH"));
    assert_eq!(game.meld(Seat::One, &cards("KH QH")), Ok(20));
    game.new_game().unwrap();
    assert!(game.agent(Seat::One).melds().is_empty());
    assert_eq!(game.scores()[0], 20);
    drop(game);
    assert_eq!(human.score(), 20);
}
