use doudizhu_autoplay::Pilot;
use doudizhu_core::{Event, EventBus, Phase, Round};

/// Drives a whole round with the pilot on all three seats.
fn run_round(seed: u64) -> (Round, Vec<Event>) {
    let mut round = Round::new(seed);
    let mut events = EventBus::default();
    let mut pilot = Pilot::default();
    let mut log = Vec::new();
    let mut steps = 0;
    loop {
        round.advance_until_stable(&mut events);
        log.extend(events.drain());
        match round.phase() {
            Phase::End => break,
            Phase::Bidding | Phase::PlayerTurn => {}
            other => panic!("engine settled in unexpected phase {other:?}"),
        }
        steps += 1;
        assert!(steps < 2000, "seed {seed}: round failed to terminate");
        pilot
            .act(&mut round, &mut events)
            .unwrap_or_else(|err| panic!("seed {seed}: {err}"));
        log.extend(events.drain());
    }
    (round, log)
}

#[test]
fn pilot_finishes_a_round_on_many_seeds() {
    for seed in [0, 1, 2, 3, 17, 0xBEEF] {
        let (round, log) = run_round(seed);
        let winner = round.context().winner.expect("round ended with a winner");
        assert_eq!(
            round.snapshot().remaining_counts[winner.ordinal()],
            0,
            "seed {seed}"
        );
        let landlord_won = round.context().landlord_won().unwrap();
        assert!(log.iter().any(|event| matches!(
            event,
            Event::RoundOver { winner: w, landlord_won: l }
                if *w == winner && *l == landlord_won
        )));
    }
}

#[test]
fn pilot_decisions_are_all_recorded() {
    let mut round = Round::new(9);
    let mut events = EventBus::default();
    let mut pilot = Pilot::default();
    let mut decisions = 0;
    loop {
        round.advance_until_stable(&mut events);
        events.drain().count();
        match round.phase() {
            Phase::End => break,
            Phase::Bidding | Phase::PlayerTurn => {}
            other => panic!("unexpected phase {other:?}"),
        }
        pilot.act(&mut round, &mut events).unwrap();
        decisions += 1;
        assert!(decisions < 2000);
    }
    assert_eq!(pilot.trace.records().len(), decisions);
    let jsonl = pilot.trace.to_jsonl().unwrap();
    assert_eq!(jsonl.lines().count(), decisions);
}
