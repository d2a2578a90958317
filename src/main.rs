use std::io::{self, Write};

use pinochle::{Card, Computer, Human, Match, MatchConfig, PinochleError, Seat};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).without_time().init();

    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> pinochle::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| PinochleError::Config(format!("{}: {}", path, e)))?;
            MatchConfig::from_json(&text)?
        }
        None => MatchConfig::default(),
    };
    let threshold = config.threshold;
    let mut game = Match::new(Human::new(), Computer::new(), config);

    while !game.match_over() {
        println!("\nNew game. Playing to {} points.", threshold);
        game.new_game()?;
        if let Some(trump) = game.deck().trump() {
            println!("Trump card is {}", trump);
        }
        play_game(&mut game)?;
        let [you, computer] = game.scores();
        println!("You: {} points, Computer: {} points", you, computer);
        if you >= threshold && computer >= threshold {
            println!("Both players reached {}. The match is a draw.", threshold);
            return Ok(());
        }
    }
    match game.winner() {
        Some(Seat::One) => println!("You win the match!"),
        _ => println!("The computer wins the match!"),
    }
    Ok(())
}

fn play_game(game: &mut Match<'_>) -> pinochle::Result<()> {
    while !game.game_over() {
        let (drawing, _) = game.trick_phase();
        for _ in 0..2 {
            match game.turn() {
                Seat::One => human_turn(game)?,
                Seat::Two => {
                    let card = game.play(Seat::Two, None)?;
                    println!("Computer plays {}", card);
                }
            }
        }
        let winner = game.decide_trick_winner()?;
        match winner {
            Seat::One => println!("You take the trick\n"),
            Seat::Two => println!("Computer takes the trick\n"),
        }
        if drawing {
            match winner {
                Seat::One => human_meld(game)?,
                Seat::Two => computer_meld(game),
            }
            game.replenish()?;
        }
    }
    Ok(())
}

fn read_line() -> String {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => {
            println!("\nInput closed, leaving the match.");
            std::process::exit(0);
        }
        Ok(_) => input,
    }
}

fn show_hand(hand: &[Card]) {
    println!("Your hand:");
    for (i, c) in hand.iter().enumerate() {
        println!("  {}: {}", i + 1, c);
    }
}

fn human_turn(game: &mut Match<'_>) -> pinochle::Result<()> {
    loop {
        show_hand(game.hand(Seat::One));
        print!("Select card to play: ");
        let _ = io::stdout().flush();
        let input = read_line();
        let hand = game.hand(Seat::One);
        let choice = match input.trim().parse::<usize>() {
            Ok(idx) if idx >= 1 && idx <= hand.len() => Some(hand[idx - 1]),
            Ok(_) => None,
            Err(_) => input.parse::<Card>().ok(),
        };
        match game.play(Seat::One, choice) {
            Ok(card) => {
                println!("You play {}", card);
                return Ok(());
            }
            Err(PinochleError::CardNotInHand(_)) | Err(PinochleError::NoCardProposed) => {
                println!("Invalid choice, try again.");
            }
            Err(err) => return Err(err),
        }
    }
}

fn human_meld(game: &mut Match<'_>) -> pinochle::Result<()> {
    loop {
        let options = game.available_melds(Seat::One);
        if options.is_empty() {
            return Ok(());
        }
        show_hand(game.hand(Seat::One));
        let names: Vec<String> = options.iter().map(|k| k.to_string()).collect();
        println!("You could meld: {}", names.join(", "));
        print!("Cards to meld (e.g. KH QH), blank to skip: ");
        let _ = io::stdout().flush();
        let input = read_line();
        if input.trim().is_empty() {
            return Ok(());
        }
        let attempt: Result<Vec<Card>, _> = input.split_whitespace().map(str::parse).collect();
        let attempt = match attempt {
            Ok(cards) => cards,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };
        match game.meld(Seat::One, &attempt) {
            Ok(points) => {
                println!("Meld scores {} points", points);
                return Ok(());
            }
            Err(err) => println!("{}", err),
        }
    }
}

fn computer_meld(game: &mut Match<'_>) {
    let attempts: Vec<Vec<Card>> = match game.catalog() {
        Some(catalog) => game
            .available_melds(Seat::Two)
            .into_iter()
            .filter_map(|kind| catalog.cards(kind).map(<[Card]>::to_vec))
            .collect(),
        None => return,
    };
    for attempt in attempts {
        if let Ok(points) = game.meld(Seat::Two, &attempt) {
            let cards: Vec<String> = attempt.iter().map(|c| c.to_string()).collect();
            println!("Computer melds {} for {} points", cards.join(" "), points);
            return;
        }
    }
}
