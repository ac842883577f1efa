//! Deck selection over a realistic vocabulary pool.

use std::collections::HashMap;

use carnet::{Card, DeckPrefs, Filters, build_deck, due};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap()
}

fn vocabulary() -> Vec<Card> {
    let n = now();
    vec![
        Card::new("le chat", "the cat", n)
            .with_topic("animals")
            .with_part_of_speech("noun")
            .with_tags(["a", "b"]),
        Card::new("courir", "to run", n)
            .with_topic("sport")
            .with_part_of_speech("verb")
            .with_tags(["b"]),
        Card::new("rapide", "fast", n)
            .with_topic("sport")
            .with_part_of_speech("adjective")
            .with_tags(["c"]),
        Card::new("le cheval", "the horse", n)
            .with_topic("animals")
            .with_part_of_speech("noun"),
        Card::new("nager", "to swim", n)
            .with_topic("sport")
            .with_part_of_speech("verb")
            .with_tags(["a", "d"]),
    ]
}

fn in_order() -> DeckPrefs {
    DeckPrefs {
        randomize: false,
        without_replacement: true,
    }
}

#[test]
fn test_tag_group_is_any_of() {
    let cards = vocabulary();
    let card = &cards[0];

    assert!(Filters::new().tags(["b", "c"]).matches(card));
    assert!(!Filters::new().tags(["c", "d"]).matches(card));
}

#[test]
fn test_groups_combine_with_and() {
    let cards = vocabulary();
    let mut rng = StdRng::seed_from_u64(1);

    let filters = Filters::new()
        .topics(["sport"])
        .parts_of_speech(["verb"])
        .tags(["a"]);
    let deck = build_deck(&cards, &filters, in_order(), &mut rng);
    assert_eq!(deck.indices(), &[4]);

    let filters = Filters::new().topics(["sport", "animals"]).parts_of_speech(["noun"]);
    let deck = build_deck(&cards, &filters, in_order(), &mut rng);
    assert_eq!(deck.indices(), &[0, 3]);
}

#[test]
fn test_shuffled_deck_is_a_permutation_of_filtered_cards() {
    let cards = vocabulary();
    let filters = Filters::new().topics(["sport"]);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = build_deck(&cards, &filters, DeckPrefs::default(), &mut rng);
        let mut got = deck.indices().to_vec();
        got.sort_unstable();
        assert_eq!(got, vec![1, 2, 4]);
    }
}

#[test]
fn test_shuffle_produces_different_orders() {
    let cards: Vec<Card> = (0..10)
        .map(|i| Card::new(format!("{}", i), "x", now()))
        .collect();
    let mut orders = std::collections::HashSet::new();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = build_deck(&cards, &Filters::new(), DeckPrefs::default(), &mut rng);
        orders.insert(deck.indices().to_vec());
    }

    assert!(orders.len() > 1);
}

#[test]
fn test_random_steps_cover_the_deck() {
    let cards = vocabulary();
    let mut rng = StdRng::seed_from_u64(11);
    let prefs = DeckPrefs {
        randomize: true,
        without_replacement: false,
    };
    let mut deck = build_deck(&cards, &Filters::new(), prefs, &mut rng);
    let mut hits: HashMap<usize, usize> = HashMap::new();

    for _ in 0..1000 {
        *hits.entry(deck.next(&mut rng).unwrap()).or_default() += 1;
    }

    assert_eq!(hits.len(), cards.len());
    assert!(hits.values().all(|&n| n > 100));
}

#[test]
fn test_flashcard_mode_presents_oldest_due_first() {
    let mut cards = vocabulary();
    cards[0].due = now() + Duration::days(2);
    cards[1].due = now() - Duration::days(5);
    cards[2].due = now() - Duration::hours(1);
    cards[3].due = now() + Duration::hours(1);
    cards[4].due = now();

    assert_eq!(due::due_indices(&cards, now()), vec![1, 2, 4]);
    assert_eq!(due::next_due(&cards, now()), Some(1));
}
