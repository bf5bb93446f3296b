use doudizhu_autoplay::Pilot;
use doudizhu_core::{Card, Event, EventBus, Phase, Round, Seat};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy)]
struct CliOptions {
    seed: u64,
    auto: bool,
}

fn parse_args() -> CliOptions {
    let mut opts = CliOptions {
        seed: 0xD1D2,
        auto: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--auto" => opts.auto = true,
            "--seed" => {
                if let Some(value) = args.next() {
                    if let Ok(seed) = value.parse() {
                        opts.seed = seed;
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("unknown argument: {other}");
                print_usage();
                std::process::exit(2);
            }
        }
    }
    opts
}

fn print_usage() {
    println!("usage: doudizhu-cli [--seed N] [--auto]");
    println!("  --seed N  deterministic shuffle seed");
    println!("  --auto    let the pilot play all three seats");
}

fn seat_label(seat: Seat) -> &'static str {
    match seat {
        Seat::Left => "west",
        Seat::Bottom => "you",
        Seat::Right => "east",
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn report(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::PhaseChanged { .. } => {}
            Event::Dealt { counts, bottom } => {
                println!("* dealt {counts:?} cards, {bottom} in the bottom");
            }
            Event::BidPlaced { seat, called } => {
                let verb = if called { "calls landlord" } else { "declines" };
                println!("* {} {verb}", seat_label(seat));
            }
            Event::LandlordAssigned { seat } => {
                println!("* {} is the provisional landlord", seat_label(seat));
            }
            Event::BiddingRestarted => println!("* nobody called, re-dealing"),
            Event::BottomTaken { seat, cards } => {
                println!(
                    "* {} takes the bottom: {}",
                    seat_label(seat),
                    format_cards(&cards)
                );
            }
            Event::CardsPlayed {
                seat,
                kind,
                count,
                remaining,
            } => {
                println!(
                    "* {} plays {} ({count} cards, {remaining} left)",
                    seat_label(seat),
                    kind.id()
                );
            }
            Event::TurnPassed { seat } => println!("* {} passes", seat_label(seat)),
            Event::TrickCleared { leader } => {
                println!("* trick cleared, {} leads", seat_label(leader));
            }
            Event::RoundOver {
                winner,
                landlord_won,
            } => {
                let side = if landlord_won {
                    "the landlord wins"
                } else {
                    "the farmers win"
                };
                println!("* {} goes out, {side}", seat_label(winner));
            }
        }
    }
}

fn print_hand(round: &Round) {
    let hand = round.context().player(Seat::Bottom).hand();
    let indexed: Vec<String> = hand
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{i}:{card}"))
        .collect();
    println!("hand: {}", indexed.join(" "));
}

fn print_table(round: &Round) {
    let table = &round.context().table;
    if table.is_empty() {
        println!("table: empty, you lead");
    } else {
        println!(
            "table: {} ({})",
            format_cards(table),
            doudizhu_core::classify(table).id()
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  bid y|n       call or decline the landlord");
    println!("  play I I ..   play the cards at these hand indices");
    println!("  pass          pass the turn");
    println!("  hand          show your hand with indices");
    println!("  table         show the hand on the table");
    println!("  snapshot      dump the table state as JSON");
    println!("  trace         dump the pilot's decisions as JSON lines");
    println!("  quit          leave the game");
}

/// Returns false when the player quits or stdin closes.
fn human_turn(
    round: &mut Round,
    events: &mut EventBus,
    pilot: &Pilot,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> bool {
    let bidding = round.phase() == Phase::Bidding;
    print_hand(round);
    if !bidding {
        print_table(round);
    }
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            return false;
        };
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        match command {
            "" => {}
            "help" | "?" => print_help(),
            "hand" => print_hand(round),
            "table" => print_table(round),
            "snapshot" => match serde_json::to_string_pretty(&round.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("snapshot failed: {err}"),
            },
            "trace" => match pilot.trace.to_jsonl() {
                Ok(jsonl) => print!("{jsonl}"),
                Err(err) => println!("trace failed: {err}"),
            },
            "bid" => {
                let answer = parts.next().unwrap_or("");
                let call = matches!(answer, "y" | "yes");
                if !call && !matches!(answer, "n" | "no") {
                    println!("bid expects y or n");
                    continue;
                }
                match round.submit_bid(Seat::Bottom, call, events) {
                    Ok(()) => return true,
                    Err(err) => println!("rejected: {err}"),
                }
            }
            "play" => {
                let hand = round.context().player(Seat::Bottom).hand().to_vec();
                let mut indices: Vec<usize> =
                    parts.filter_map(|part| part.parse().ok()).collect();
                indices.sort_unstable();
                indices.dedup();
                let cards: Vec<Card> = indices
                    .iter()
                    .filter_map(|&index| hand.get(index).copied())
                    .collect();
                if cards.len() != indices.len() || cards.is_empty() {
                    println!("play expects valid hand indices, see `hand`");
                    continue;
                }
                match round.submit_play(Seat::Bottom, &cards, events) {
                    Ok(kind) => {
                        println!("you play {} ({})", format_cards(&cards), kind.id());
                        return true;
                    }
                    Err(err) => println!("rejected: {err}"),
                }
            }
            "pass" => match round.submit_pass(Seat::Bottom, events) {
                Ok(()) => return true,
                Err(err) => println!("rejected: {err}"),
            },
            "quit" | "exit" => return false,
            other => println!("unknown command: {other} (try `help`)"),
        }
    }
}

fn main() {
    let opts = parse_args();
    println!("dou dizhu, seed {}", opts.seed);
    let mut round = Round::new(opts.seed);
    let mut events = EventBus::default();
    let mut pilot = Pilot::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        round.advance_until_stable(&mut events);
        report(&mut events);
        match round.phase() {
            Phase::End => break,
            Phase::Bidding | Phase::PlayerTurn => {}
            other => {
                eprintln!("engine settled in unexpected phase {other:?}");
                break;
            }
        }
        let Some(seat) = round.context().active else {
            break;
        };
        if seat == Seat::Bottom && !opts.auto {
            if !human_turn(&mut round, &mut events, &pilot, &mut lines) {
                println!("bye");
                return;
            }
        } else if let Err(err) = pilot.act(&mut round, &mut events) {
            eprintln!("pilot error: {err}");
            break;
        }
        report(&mut events);
    }
    report(&mut events);
    if let Some(landlord_won) = round.context().landlord_won() {
        let outcome = if landlord_won { "landlord" } else { "farmers" };
        println!("result: {outcome} side wins");
    }
}
