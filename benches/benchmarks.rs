criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_river_evaluation,
        sampling_hand_class,
        computing_heads_up_equity,
        computing_multiway_equity,
        computing_live_flop_equity,
        computing_live_river_equity,
}

fn seven() -> Vec<Card> {
    let mut deck = Deck::new();
    deck.shuffle_seeded(None);
    deck.deal(7).expect("52 cards")
}

fn sampling_river_evaluation(c: &mut criterion::Criterion) {
    c.bench_function("evaluate 7 Cards", |b| {
        let cards = seven();
        b.iter(|| Holdem.evaluate(&cards))
    });
}

fn sampling_hand_class(c: &mut criterion::Criterion) {
    c.bench_function("sample a Hole from a HandClass", |b| {
        let class = HandClass::random();
        let ref mut rng = rand::rng();
        b.iter(|| class.sample(Hand::empty(), rng))
    });
}

fn computing_heads_up_equity(c: &mut criterion::Criterion) {
    c.bench_function("calculate heads-up equity (10k trials)", |b| {
        let class = HandClass::random();
        b.iter(|| heads_up(&class, 10_000, Some(0), &Holdem))
    });
}

fn computing_multiway_equity(c: &mut criterion::Criterion) {
    c.bench_function("calculate 6-player equity (10k trials)", |b| {
        let class = HandClass::random();
        b.iter(|| multiway(&class, 5, 10_000, Some(0), &Holdem))
    });
}

fn computing_live_flop_equity(c: &mut criterion::Criterion) {
    let mut session = Session::new(3).expect("3 players");
    session.add_player_hand(&Card::parse("As Kd").expect("cards")).expect("hole");
    session.add_player_hand(&Card::parse("Qc Qh").expect("cards")).expect("hole");
    session.add_player_hand(&Card::parse("7s 6s").expect("cards")).expect("hole");
    session.deal_flop(&Card::parse("Qs 8s 2d").expect("cards")).expect("flop");
    c.bench_function("calculate live Flop equity (5k trials)", |b| {
        b.iter(|| session.calculate_equities(5_000, Some(0)))
    });
}

fn computing_live_river_equity(c: &mut criterion::Criterion) {
    let mut session = Session::new(6).expect("6 players");
    let mut deck = Deck::new();
    deck.shuffle_seeded(Some(0));
    for _ in 0..6 {
        let hole = deck.hole().expect("52 cards");
        session.add_player_hand(&hole.cards()).expect("hole");
    }
    session.set_board(&deck.deal(5).expect("52 cards")).expect("river");
    c.bench_function("calculate live River equity (exact)", |b| {
        b.iter(|| session.calculate_equities(1, None))
    });
}

use oddsmaker::Arbitrary;
use oddsmaker::cards::Card;
use oddsmaker::cards::Deck;
use oddsmaker::cards::Hand;
use oddsmaker::cards::Holdem;
use oddsmaker::cards::Oracle;
use oddsmaker::classes::HandClass;
use oddsmaker::equity::heads_up;
use oddsmaker::equity::multiway;
use oddsmaker::live::Session;
