//! Sanity checks for the shared test helpers.

use super::builder::ProgramBuilder;
use super::fixtures::{DROPLET_EXAMPLE, LARGER_EXAMPLE, SMALL_EXAMPLE};
use super::harness::TestContext;
use clocksim_core::Program;
use clocksim_core::isa::Instruction;

#[test]
fn builder_preserves_order() {
    let program = ProgramBuilder::new().noop().addx(3).addx(-5).build();
    assert_eq!(
        program.as_slice(),
        &[Instruction::Noop, Instruction::AddX(3), Instruction::AddX(-5)]
    );
}

#[test]
fn builder_text_matches_fixture() {
    let text = ProgramBuilder::new().noop().addx(3).addx(-5).text();
    assert_eq!(text, SMALL_EXAMPLE);
}

#[test]
fn fixtures_decode() {
    let program: Program = LARGER_EXAMPLE.parse().unwrap();
    assert_eq!(program.len(), 146);
    assert_eq!(program.total_latency(), 240);
    assert_eq!(DROPLET_EXAMPLE.lines().count(), 13);
}

#[test]
fn harness_records_each_cycle() {
    let mut ctx = TestContext::new(ProgramBuilder::new().noops(3).build());
    ctx.run(3).unwrap();
    assert_eq!(ctx.observed, vec![(1, 1), (2, 1), (3, 1)]);
}
