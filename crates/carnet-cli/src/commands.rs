//! Subcommand handlers.

use std::io::Write;

use carnet::{
    Card, CardFile, DeckPrefs, Filters, Quality, Scheduler, Summary, build_deck, due,
    format_interval,
};
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, warn};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Where results go: JSON for scripts, plain lines otherwise.
pub struct Output<W> {
    json: bool,
    writer: W,
}

impl<W: Write> Output<W> {
    pub fn new(json: bool, writer: W) -> Self {
        Self { json, writer }
    }

    fn emit<T: Serialize + ?Sized>(&mut self, value: &T, text: &str) -> CliResult {
        if self.json {
            writeln!(self.writer, "{}", serde_json::to_string_pretty(value)?)?;
        } else {
            writeln!(self.writer, "{}", text)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct CardRef {
    id: u64,
}

#[derive(Serialize)]
struct Reviewed<'a> {
    id: u64,
    quality: u8,
    algorithm: &'a str,
    #[serde(flatten)]
    update: &'a carnet::ScheduleUpdate,
}

#[derive(Serialize)]
struct DrillStep<'a> {
    step: usize,
    id: u64,
    front: &'a str,
    back: &'a str,
}

fn describe(card: &Card) -> String {
    format!("[{}] {} / {}", card.id, card.front, card.back)
}

pub fn add(file: &mut CardFile, out: &mut Output<impl Write>, card: Card) -> CliResult {
    let id = file.add(card);
    info!(id, "added card");
    out.emit(&CardRef { id }, &format!("added card {}", id))
}

pub fn remove(file: &mut CardFile, out: &mut Output<impl Write>, id: u64) -> CliResult {
    let card = file.remove(id)?;
    info!(id, "removed card");
    out.emit(&CardRef { id }, &format!("removed {}", describe(&card)))
}

pub fn list_due(
    file: &CardFile,
    out: &mut Output<impl Write>,
    limit: Option<usize>,
    now: DateTime<Utc>,
) -> CliResult {
    let mut indices = due::due_indices(&file.cards, now);
    if let Some(limit) = limit {
        indices.truncate(limit);
    }

    let cards: Vec<&Card> = indices.iter().map(|&i| &file.cards[i]).collect();
    let text = if cards.is_empty() {
        "nothing to review".to_string()
    } else {
        cards
            .iter()
            .map(|c| format!("{}  due {}", describe(c), c.due.format("%Y-%m-%d %H:%M")))
            .collect::<Vec<_>>()
            .join("\n")
    };
    out.emit(&cards, &text)
}

pub fn review<S: Scheduler>(
    file: &mut CardFile,
    out: &mut Output<impl Write>,
    scheduler: &S,
    id: u64,
    quality: Quality,
    now: DateTime<Utc>,
) -> CliResult {
    let card = file.get_mut(id)?;
    if !card.is_due(now) {
        warn!(id, due = %card.due, "reviewing a card before it is due");
    }

    let update = scheduler.schedule(card, quality, now);
    card.apply(&update);
    debug!(id, reps = card.reps, interval = card.interval, "applied review");

    let text = format!(
        "{}: next review in {} ({}), ease {:.2}",
        describe(card),
        format_interval(update.interval),
        update.due.format("%Y-%m-%d"),
        update.ease
    );
    let result = Reviewed {
        id,
        quality: quality.value(),
        algorithm: scheduler.name(),
        update: &update,
    };
    out.emit(&result, &text)
}

pub fn preview<S: Scheduler>(
    file: &CardFile,
    out: &mut Output<impl Write>,
    scheduler: &S,
    id: u64,
    now: DateTime<Utc>,
) -> CliResult {
    let card = file.get(id)?;
    let preview = scheduler.preview(card, now);
    let text = preview
        .iter()
        .map(|(grade, days)| format!("{:<5} {}", grade, format_interval(days)))
        .collect::<Vec<_>>()
        .join("\n");
    out.emit(&preview, &text)
}

pub fn drill(
    file: &CardFile,
    out: &mut Output<impl Write>,
    filters: &Filters,
    prefs: DeckPrefs,
    count: usize,
    seed: Option<u64>,
) -> CliResult {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut deck = build_deck(&file.cards, filters, prefs, &mut rng);

    let mut steps = Vec::with_capacity(count);
    let mut current = deck.current();
    for step in 1..=count {
        let Some(idx) = current else { break };
        let card = &file.cards[idx];
        steps.push(DrillStep {
            step,
            id: card.id,
            front: &card.front,
            back: &card.back,
        });
        current = deck.next(&mut rng);
    }

    let text = if deck.is_empty() {
        "no cards match the selected filters".to_string()
    } else {
        steps
            .iter()
            .map(|s| format!("{:>3}. [{}] {} / {}", s.step, s.id, s.front, s.back))
            .collect::<Vec<_>>()
            .join("\n")
    };
    out.emit(&steps, &text)
}

pub fn stats(file: &CardFile, out: &mut Output<impl Write>, now: DateTime<Utc>) -> CliResult {
    let summary = Summary::of(&file.cards, now);
    let text = format!(
        "total {}\nnew {}\ndue {}\nlearned {}\navg ease {:.2}\navg interval {:.1}d",
        summary.total,
        summary.new,
        summary.due,
        summary.learned,
        summary.avg_ease,
        summary.avg_interval
    );
    out.emit(&summary, &text)
}
