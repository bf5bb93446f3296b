use doudizhu_core::{Phase, StateMachine};

#[derive(Debug, Default)]
struct Counters {
    init_runs: u32,
    deal_runs: u32,
    ready: bool,
}

#[test]
fn immediate_handler_fires_on_registration() {
    let mut ctx = Counters::default();
    let mut machine: StateMachine<Counters> = StateMachine::new(Phase::Init);
    machine.add_state_immediate(Phase::Init, |ctx: &mut Counters| ctx.init_runs += 1, &mut ctx);
    assert_eq!(ctx.init_runs, 1);
    assert_eq!(machine.current(), Phase::Init);
}

#[test]
fn non_current_registration_waits_for_a_transition() {
    let mut ctx = Counters::default();
    let mut machine: StateMachine<Counters> = StateMachine::new(Phase::Init);
    machine.add_state_immediate(
        Phase::ShuffleAndDeal,
        |ctx: &mut Counters| ctx.deal_runs += 1,
        &mut ctx,
    );
    assert_eq!(ctx.deal_runs, 0);
}

#[test]
fn guard_gates_the_transition() {
    let mut ctx = Counters::default();
    let mut machine: StateMachine<Counters> = StateMachine::new(Phase::Init);
    machine.add_state(Phase::ShuffleAndDeal, |ctx: &mut Counters| ctx.deal_runs += 1);
    machine.add_transition(Phase::Init, Phase::ShuffleAndDeal, |ctx: &Counters| ctx.ready);

    assert_eq!(machine.update(&mut ctx), None);
    assert_eq!(machine.current(), Phase::Init);

    ctx.ready = true;
    assert_eq!(
        machine.update(&mut ctx),
        Some((Phase::Init, Phase::ShuffleAndDeal))
    );
    assert_eq!(machine.current(), Phase::ShuffleAndDeal);
    assert_eq!(ctx.deal_runs, 1);

    // No outgoing transitions registered: the handler does not re-fire.
    assert_eq!(machine.update(&mut ctx), None);
    assert_eq!(ctx.deal_runs, 1);
}

#[test]
fn transitions_evaluate_in_declaration_order() {
    let mut ctx = Counters::default();
    ctx.ready = true;
    let mut machine: StateMachine<Counters> = StateMachine::new(Phase::Bidding);
    machine.add_transition(Phase::Bidding, Phase::Playing, |ctx: &Counters| ctx.ready);
    machine.add_transition(Phase::Bidding, Phase::RetryBidding, |ctx: &Counters| {
        ctx.ready
    });
    assert_eq!(
        machine.update(&mut ctx),
        Some((Phase::Bidding, Phase::Playing))
    );
}

#[test]
fn handlers_mutate_context_but_never_chain_transitions() {
    let mut ctx = Counters::default();
    ctx.ready = true;
    let mut machine: StateMachine<Counters> = StateMachine::new(Phase::Init);
    machine.add_state(Phase::ShuffleAndDeal, |ctx: &mut Counters| {
        ctx.deal_runs += 1;
        ctx.ready = true;
    });
    machine.add_transition(Phase::Init, Phase::ShuffleAndDeal, |ctx: &Counters| ctx.ready);
    machine.add_transition(Phase::ShuffleAndDeal, Phase::Bidding, |ctx: &Counters| {
        ctx.ready
    });

    // One update, one transition: the second leg waits for the next
    // external drive even though its guard already holds.
    machine.update(&mut ctx);
    assert_eq!(machine.current(), Phase::ShuffleAndDeal);
    machine.update(&mut ctx);
    assert_eq!(machine.current(), Phase::Bidding);
}
