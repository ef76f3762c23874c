//! Game integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use warrs::{
    Card, CompareError, Comparison, DECK_SIZE, Game, GameOptions, GameState, GameWinner, NullSink,
    Player, RoundError, RoundEvent, RoundOutcome, RoundSink, Suit, compare, deck,
};

fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

fn hand(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|token| card(token)).collect()
}

struct RecordingSink(Vec<RoundEvent>);

impl RoundSink for RecordingSink {
    fn on_event(&mut self, event: &RoundEvent) {
        self.0.push(event.clone());
    }
}

#[test]
fn deck_has_52_unique_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = deck::shuffled_deck(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn deck_rank_and_suit_counts() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let deck = deck::shuffled_deck(&mut rng);

    for rank in 2..=14 {
        assert_eq!(deck.iter().filter(|c| c.rank == rank).count(), 4);
    }
    for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
        assert_eq!(deck.iter().filter(|c| c.suit == Some(suit)).count(), 13);
    }
}

#[test]
fn split_halves_even_deck() {
    let deck = hand(&["2c", "3c", "4c", "5c"]);
    let (hand1, hand2) = deck::split(deck.clone());

    assert_eq!(hand1.len(), hand2.len());
    assert_eq!(hand1, deck[..2].to_vec());
    assert_eq!(hand2, deck[2..].to_vec());
}

#[test]
fn split_gives_player_two_the_extra_card() {
    let deck = hand(&["2c", "3c", "4c"]);
    let (hand1, hand2) = deck::split(deck.clone());

    assert_eq!(hand2.len(), hand1.len() + 1);

    let rejoined: Vec<Card> = hand1.iter().chain(hand2.iter()).copied().collect();
    assert_eq!(rejoined, deck);
}

#[test]
fn compare_ties_on_equal_rank() {
    assert_eq!(compare(card("2h"), card("2h"), false), Ok(Comparison::Tie));
    assert_eq!(compare(card("Kc"), card("Kd"), false), Ok(Comparison::Tie));
    assert_eq!(compare(card("10s"), card("10c"), false), Ok(Comparison::Tie));
    // Equal rank wins over the suit check even with the house rule on.
    assert_eq!(compare(card("2h"), card("2h"), true), Ok(Comparison::Tie));
}

#[test]
fn compare_orders_by_rank() {
    assert_eq!(
        compare(card("Ah"), card("Kh"), false),
        Ok(Comparison::FirstWins)
    );
    assert_eq!(
        compare(card("10d"), card("2d"), false),
        Ok(Comparison::FirstWins)
    );
    assert_eq!(
        compare(card("2c"), card("3c"), false),
        Ok(Comparison::SecondWins)
    );
    assert_eq!(
        compare(card("Qh"), card("Kh"), false),
        Ok(Comparison::SecondWins)
    );
}

#[test]
fn compare_suit_up_matches_same_suit_only() {
    assert_eq!(
        compare(card("2h"), card("5h"), true),
        Ok(Comparison::SuitMatch)
    );
    assert_eq!(
        compare(card("Js"), card("Qs"), true),
        Ok(Comparison::SuitMatch)
    );
    // Different suits fall through to rank order.
    assert_eq!(
        compare(card("2h"), card("5c"), true),
        Ok(Comparison::SecondWins)
    );
    assert_eq!(
        compare(card("Ac"), card("10d"), true),
        Ok(Comparison::FirstWins)
    );
    // Same suit without the house rule is a plain rank comparison.
    assert_eq!(
        compare(card("2h"), card("5h"), false),
        Ok(Comparison::SecondWins)
    );
}

#[test]
fn compare_treats_joker_as_rank_zero() {
    assert_eq!(
        compare(Card::joker(), card("2h"), false),
        Ok(Comparison::SecondWins)
    );
    assert_eq!(
        compare(Card::joker(), Card::joker(), true),
        Ok(Comparison::Tie)
    );
}

#[test]
fn compare_rejects_invalid_rank() {
    let bad = Card::new(Suit::Hearts, 1);
    assert_eq!(
        compare(bad, card("2h"), false),
        Err(CompareError::InvalidCard(bad))
    );

    let bad = Card::new(Suit::Spades, 15);
    assert_eq!(
        compare(card("2h"), bad, true),
        Err(CompareError::InvalidCard(bad))
    );
}

#[test]
fn card_tokens_round_trip() {
    for token in ["2c", "10d", "Jh", "Qs", "Kc", "Ah", "Joker"] {
        assert_eq!(card(token).to_string(), token);
    }

    assert_eq!(card("Ah"), Card::new(Suit::Hearts, 14));
    assert_eq!(card("10d"), Card::new(Suit::Diamonds, 10));

    assert!("".parse::<Card>().is_err());
    assert!("Xh".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("2x".parse::<Card>().is_err());
}

#[test]
fn refill_reverses_discard_into_hand() {
    let mut player = Player::new(Vec::new());
    player.collect_spoils(&hand(&["As", "2s", "3s"]));

    assert_eq!(player.play_card(false), Some(card("As")));
    assert_eq!(player.played_cards(), hand(&["As"]).as_slice());
    assert_eq!(player.hand(), hand(&["3s", "2s"]).as_slice());
    assert!(player.discard().is_empty());
}

#[test]
fn play_from_bottom_takes_the_head() {
    let mut player = Player::new(hand(&["2c", "3c", "4c"]));

    assert_eq!(player.play_card(true), Some(card("2c")));
    assert_eq!(player.play_card(false), Some(card("4c")));
    assert_eq!(player.hand(), hand(&["3c"]).as_slice());
}

#[test]
fn play_card_returns_none_when_out() {
    let mut player = Player::new(Vec::new());

    assert!(player.has_no_cards());
    assert_eq!(player.play_card(false), None);
    assert!(player.played_cards().is_empty());
}

#[test]
fn new_game_deals_half_the_deck_each() {
    let game = Game::new(GameOptions::default(), 7);

    assert_eq!(game.state, GameState::InProgress);
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.winner(), None);
    assert_eq!(game.player1.hand().len(), 26);
    assert_eq!(game.player2.hand().len(), 26);

    let all: HashSet<Card> = game
        .player1
        .hand()
        .iter()
        .chain(game.player2.hand())
        .copied()
        .collect();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn higher_card_wins_the_round() {
    let mut game = Game::new(GameOptions::default(), 0);
    game.player1 = Player::new(hand(&["Ah"]));
    game.player2 = Player::new(hand(&["Kd"]));

    let report = game.play_round().expect("round plays");

    assert_eq!(report.outcome, RoundOutcome::Player1Wins);
    assert_eq!(game.winner(), Some(GameWinner::Player1));
    assert_eq!(game.state, GameState::Over);
    assert_eq!(game.player1.discard(), hand(&["Ah", "Kd"]).as_slice());
    assert!(
        !report
            .events
            .iter()
            .any(|event| matches!(event, RoundEvent::WarDeclared))
    );
}

#[test]
fn war_resolves_on_the_fourth_card() {
    // Tops tie (9h/9c); the fourth war cards are both clubs, which must NOT
    // trigger suit-up even though the house rule is enabled.
    let mut game = Game::new(GameOptions::default().with_suit_up(true), 0);
    game.player1 = Player::new(hand(&["Ah", "2c", "3c", "4c", "Kh", "9h"]));
    game.player2 = Player::new(hand(&["Ad", "5c", "6d", "7d", "8d", "9c"]));

    let report = game.play_round().expect("round plays");

    assert_eq!(report.outcome, RoundOutcome::Continue);
    assert!(
        report
            .events
            .iter()
            .any(|event| matches!(event, RoundEvent::WarDeclared))
    );
    assert!(
        !report
            .events
            .iter()
            .any(|event| matches!(event, RoundEvent::SuitUpDeclared))
    );

    // Spoils are player one's played cards followed by player two's.
    assert_eq!(
        game.player2.discard(),
        hand(&["9h", "Kh", "4c", "3c", "2c", "9c", "8d", "7d", "6d", "5c"]).as_slice()
    );
    assert_eq!(game.player1.hand(), hand(&["Ah"]).as_slice());
    assert_eq!(game.player2.hand(), hand(&["Ad"]).as_slice());
}

#[test]
fn suit_up_plays_two_cards_from_the_bottom() {
    // Ah/Kh share a suit with different ranks, so suit-up fires; each player
    // then plays two cards from the bottom of the hand.
    let mut game = Game::new(GameOptions::default().with_suit_up(true), 0);
    game.player1 = Player::new(hand(&["2h", "7d", "Qs", "Ah"]));
    game.player2 = Player::new(hand(&["3s", "8s", "Qd", "Kh"]));

    let report = game.play_round().expect("round plays");

    assert_eq!(report.outcome, RoundOutcome::Continue);
    assert_eq!(
        report
            .events
            .iter()
            .filter(|event| matches!(event, RoundEvent::SuitUpDeclared))
            .count(),
        1
    );
    assert_eq!(
        game.player2.discard(),
        hand(&["Ah", "2h", "7d", "Kh", "3s", "8s"]).as_slice()
    );
    assert_eq!(game.player1.hand(), hand(&["Qs"]).as_slice());
    assert_eq!(game.player2.hand(), hand(&["Qd"]).as_slice());
}

#[test]
fn simultaneous_depletion_settles_on_last_cards() {
    // Both players play their only cards, which tie; the war then finds both
    // players empty and settles on the cards already face up.
    let mut game = Game::new(GameOptions::default(), 0);
    game.player1 = Player::new(hand(&["9h"]));
    game.player2 = Player::new(hand(&["9c"]));

    let report = game.play_round().expect("round plays");

    assert_eq!(report.outcome, RoundOutcome::Draw);
    assert_eq!(game.winner(), Some(GameWinner::Draw));
    assert_eq!(game.state, GameState::Over);
}

#[test]
fn final_showdown_ignores_suit_up() {
    // The war consumes both hands; the last cards played (5h/3h) share a suit
    // but must be compared on rank alone.
    let mut game = Game::new(GameOptions::default().with_suit_up(true), 0);
    game.player1 = Player::new(hand(&["5h", "9h"]));
    game.player2 = Player::new(hand(&["3h", "9c"]));

    let report = game.play_round().expect("round plays");

    assert_eq!(report.outcome, RoundOutcome::Player1Wins);
    assert_eq!(game.winner(), Some(GameWinner::Player1));
}

#[test]
fn running_out_of_cards_loses_by_attrition() {
    let mut game = Game::new(GameOptions::default(), 0);
    game.player1 = Player::new(hand(&["Kd"]));
    game.player2 = Player::new(hand(&["2c", "Ah"]));

    let report = game.play_round().expect("round plays");

    assert_eq!(report.outcome, RoundOutcome::Player2Wins);
    assert_eq!(game.winner(), Some(GameWinner::Player2));
    assert_eq!(game.player2.discard(), hand(&["Kd", "Ah"]).as_slice());
}

#[test]
fn round_cap_is_a_hard_error() {
    let mut game = Game::new(GameOptions::default().with_round_cap(2), 0);
    game.player1 = Player::new(hand(&["2d", "Ah"]));
    game.player2 = Player::new(hand(&["3s", "Kd"]));

    let report = game.play_round().expect("first round plays");
    assert_eq!(report.outcome, RoundOutcome::Continue);

    assert_eq!(game.play_round(), Err(RoundError::ExceededRoundCap));
}

#[test]
fn finished_game_rejects_further_rounds() {
    let mut game = Game::new(GameOptions::default(), 0);
    game.player1 = Player::new(hand(&["Ah"]));
    game.player2 = Player::new(hand(&["Kd"]));

    game.play_round().expect("round plays");
    assert_eq!(game.play_round(), Err(RoundError::GameOver));
}

#[test]
fn run_forwards_events_to_the_sink() {
    let mut game = Game::new(GameOptions::default(), 0);
    game.player1 = Player::new(hand(&["Ah"]));
    game.player2 = Player::new(hand(&["Kd"]));

    let mut sink = RecordingSink(Vec::new());
    let result = game.run(&mut sink).expect("game finishes");

    assert_eq!(result.winner, GameWinner::Player1);
    assert_eq!(result.rounds, 1);
    assert!(matches!(
        sink.0.first(),
        Some(RoundEvent::RoundStarted { round: 1 })
    ));
    assert!(matches!(
        sink.0.get(1),
        Some(RoundEvent::Compared {
            comparison: Comparison::FirstWins,
            ..
        })
    ));
}

#[test]
fn seeded_games_are_deterministic() {
    let options = GameOptions::default().with_suit_up(true);
    let mut first = Game::new(options, 1234);
    let mut second = Game::new(options, 1234);

    let first_result = first.run(&mut NullSink);
    let second_result = second.run(&mut NullSink);

    assert_eq!(first_result, second_result);
    assert_eq!(first.rounds_played(), second.rounds_played());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_suit_up(true)
        .with_round_cap(500);

    assert!(options.suit_up);
    assert_eq!(options.round_cap, 500);

    let defaults = GameOptions::default();
    assert!(!defaults.suit_up);
    assert_eq!(defaults.round_cap, 10_000);
}
