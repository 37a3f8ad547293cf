//! # Simulator Tests
//!
//! Timing of the cycle loop: what `X` each cycle observes, how runs end, and
//! how leftover instructions are handled.

use rstest::rstest;

use clocksim_core::common::SimError;
use clocksim_core::config::{Config, ExcessPolicy};
use clocksim_core::devices::{Crt, SignalSampler};
use clocksim_core::sim::{self, RunSummary};
use clocksim_core::{Program, Simulator};

use crate::common::builder::ProgramBuilder;
use crate::common::fixtures::{LARGER_EXAMPLE, SMALL_EXAMPLE};
use crate::common::harness::TestContext;

fn reject_config() -> Config {
    let mut config = Config::default();
    config.run.excess = ExcessPolicy::Reject;
    config
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(40)]
fn test_noops_never_change_x(#[case] count: usize) {
    let mut ctx = TestContext::new(ProgramBuilder::new().noops(count).build());
    let summary = ctx.run(count as u64).unwrap();
    assert!(ctx.xs().iter().all(|&x| x == 1));
    assert_eq!(summary.final_x, 1);
    assert_eq!(summary.retired, count as u64);
}

#[rstest]
#[case(3)]
#[case(-5)]
#[case(0)]
fn test_addx_applies_after_second_tick(#[case] delta: i64) {
    let mut ctx = TestContext::new(ProgramBuilder::new().addx(delta).build());

    ctx.tick().unwrap();
    assert_eq!(ctx.sim.x(), 1, "first tick leaves X alone");
    ctx.tick().unwrap();
    assert_eq!(ctx.xs(), vec![1, 1], "both ticks observe the prior value");
    assert_eq!(ctx.sim.x(), 1 + delta);
}

#[test]
fn test_small_example_trace() {
    let mut ctx = TestContext::from_text(SMALL_EXAMPLE);
    let summary = ctx.run(5).unwrap();

    assert_eq!(ctx.observed, vec![(1, 1), (2, 1), (3, 1), (4, 4), (5, 4)]);
    assert_eq!(
        summary,
        RunSummary {
            cycles: 5,
            retired: 3,
            final_x: -1,
            unexecuted: 0,
            in_flight: false,
        }
    );
    assert!(ctx.sim.is_drained());
}

#[test]
fn test_short_program_is_exhausted() {
    let mut ctx = TestContext::from_text(SMALL_EXAMPLE);
    assert_eq!(ctx.run(6), Err(SimError::ProgramExhausted { cycle: 6 }));
    assert_eq!(ctx.sim.cycle(), 5, "failed cycle is not counted");
    assert_eq!(ctx.observed.len(), 5, "failed cycle is not observed");
}

#[test]
fn test_empty_program_fails_on_first_cycle() {
    let mut ctx = TestContext::new(Program::default());
    assert_eq!(ctx.run(1), Err(SimError::ProgramExhausted { cycle: 1 }));
    assert!(ctx.observed.is_empty());
}

#[test]
fn test_zero_budget_runs_nothing() {
    let mut ctx = TestContext::new(Program::default());
    let summary = ctx.run(0).unwrap();
    assert_eq!(summary.cycles, 0);
    assert!(ctx.observed.is_empty());
}

#[test]
fn test_long_program_truncates_by_default() {
    let mut ctx = TestContext::from_text(LARGER_EXAMPLE);
    let summary = ctx.run(220).unwrap();
    assert_eq!(summary.cycles, 220);
    assert_eq!(summary.unexecuted, 13);
    assert!(!summary.in_flight);
    assert_eq!(summary.remaining(), 13);
    assert_eq!(summary.final_x, 19);
    assert!(!ctx.sim.is_drained());
}

#[test]
fn test_mid_flight_truncation_counts_in_flight() {
    let program = ProgramBuilder::new().addx(1).addx(1).build();
    let mut ctx = TestContext::new(program);
    let summary = ctx.run(3).unwrap();
    assert_eq!(summary.unexecuted, 0);
    assert!(summary.in_flight);
    assert_eq!(summary.remaining(), 1);
    assert_eq!(summary.final_x, 2);
}

#[test]
fn test_long_program_rejected_when_configured() {
    let program: Program = LARGER_EXAMPLE.parse().unwrap();
    let mut ctx = TestContext::with_config(program, &reject_config());
    assert_eq!(
        ctx.run(220),
        Err(SimError::ProgramNotDrained { remaining: 13 })
    );
}

#[test]
fn test_reject_accepts_exact_fit() {
    let program: Program = LARGER_EXAMPLE.parse().unwrap();
    let mut ctx = TestContext::with_config(program, &reject_config());
    let summary = ctx.run(240).unwrap();
    assert_eq!(summary.final_x, 17);
    assert_eq!(summary.retired, 146);
    assert!(ctx.sim.is_drained());
}

#[test]
fn test_run_budget_is_absolute() {
    let mut ctx = TestContext::from_text(SMALL_EXAMPLE);
    ctx.run(2).unwrap();
    let summary = ctx.run(5).unwrap();
    assert_eq!(summary.cycles, 5);
    assert_eq!(ctx.observed.len(), 5);

    let again = ctx.run(3).unwrap();
    assert_eq!(again, summary, "budget already spent");
    assert_eq!(ctx.observed.len(), 5);
}

#[test]
fn test_reset_reproduces_run() {
    let mut ctx = TestContext::from_text(LARGER_EXAMPLE);
    let first = ctx.run(240).unwrap();
    let first_trace = std::mem::take(&mut ctx.observed);

    ctx.sim.reset();
    assert_eq!(ctx.sim.cycle(), 0);
    assert_eq!(ctx.sim.x(), 1);

    let second = ctx.run(240).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_trace, ctx.observed);
}

#[test]
fn test_initial_x_is_configurable() {
    let mut config = Config::default();
    config.cpu.initial_x = 10;
    let mut ctx = TestContext::with_config(SMALL_EXAMPLE.parse().unwrap(), &config);
    ctx.run(5).unwrap();
    assert_eq!(ctx.xs(), vec![10, 10, 10, 13, 13]);
    assert_eq!(ctx.sim.x(), 8);
}

#[test]
fn test_pair_observer_sees_same_cycles() {
    let program: Program = LARGER_EXAMPLE.parse().unwrap();
    let mut sim = Simulator::new(program, &Config::default());
    let mut pair = (SignalSampler::default(), Crt::default());
    sim.run(240, &mut pair).unwrap();

    let (sampler, crt) = pair;
    assert_eq!(sampler.total(), 13140);
    assert_eq!(crt.glyphs().len(), 240);
}

#[test]
fn test_signal_strength_outcome() {
    let program: Program = LARGER_EXAMPLE.parse().unwrap();
    let outcome = sim::signal_strength(program, &Config::default()).unwrap();
    assert_eq!(outcome.value, 13140);
    assert_eq!(outcome.summary.cycles, 220);
    assert_eq!(outcome.summary.remaining(), 13);
    assert_eq!(outcome.stats.cycles, 220);
}

#[test]
fn test_signal_strength_rejects_when_configured() {
    let program: Program = LARGER_EXAMPLE.parse().unwrap();
    let err = sim::signal_strength(program, &reject_config()).unwrap_err();
    assert_eq!(err, SimError::ProgramNotDrained { remaining: 13 });
}

#[test]
fn test_render_outcome() {
    let program: Program = LARGER_EXAMPLE.parse().unwrap();
    let outcome = sim::render(program, &reject_config()).unwrap();
    assert_eq!(outcome.value.height(), 6);
    assert_eq!(outcome.summary.final_x, 17);
    assert_eq!(outcome.stats.instructions_retired, 146);
}

#[test]
fn test_render_short_program_fails() {
    let program: Program = SMALL_EXAMPLE.parse().unwrap();
    let err = sim::render(program, &Config::default()).unwrap_err();
    assert_eq!(err, SimError::ProgramExhausted { cycle: 6 });
}
