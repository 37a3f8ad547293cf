use clocksim_core::Program;
use clocksim_core::isa::Instruction;

/// Builds a [`Program`] one instruction at a time.
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    instructions: Vec<Instruction>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn noop(mut self) -> Self {
        self.instructions.push(Instruction::Noop);
        self
    }

    pub fn noops(mut self, count: usize) -> Self {
        self.instructions
            .extend(std::iter::repeat_n(Instruction::Noop, count));
        self
    }

    pub fn addx(mut self, delta: i64) -> Self {
        self.instructions.push(Instruction::AddX(delta));
        self
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Listing text, one instruction per line with a trailing newline.
    pub fn text(&self) -> String {
        self.instructions
            .iter()
            .map(|inst| format!("{inst}\n"))
            .collect()
    }

    pub fn build(self) -> Program {
        Program::new(self.instructions)
    }
}
