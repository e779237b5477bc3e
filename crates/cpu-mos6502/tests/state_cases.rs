//! JSON-case state-comparison tests.
//!
//! Each case gives an initial register/RAM state, a cycle budget, and
//! the expected final state plus cycles consumed, in the same shape as
//! the `SingleStepTests` corpus format. The cases are embedded inline
//! so the suite needs no external data files.

use cpu_mos6502::{Mos6502, Status};
use emu_bus::{Bus, FlatMemory};
use serde::Deserialize;

#[derive(Deserialize)]
struct TestCase {
    name: String,
    budget: i64,
    cycles: u64,
    initial: CpuState,
    #[serde(rename = "final")]
    final_state: CpuState,
}

#[derive(Deserialize)]
struct CpuState {
    pc: u16,
    sp: u8,
    a: u8,
    x: u8,
    y: u8,
    p: u8,
    ram: Vec<(u16, u8)>,
}

/// Set up the CPU and memory from the initial test state.
fn setup(cpu: &mut Mos6502, memory: &mut FlatMemory, state: &CpuState) {
    for &(addr, value) in &state.ram {
        memory.write(addr, value);
    }
    cpu.regs.pc = state.pc;
    cpu.regs.sp = state.sp;
    cpu.regs.a = state.a;
    cpu.regs.x = state.x;
    cpu.regs.y = state.y;
    cpu.regs.p = Status::from_byte(state.p);
}

/// Compare CPU/memory state against expected, returning mismatches.
fn compare(cpu: &Mos6502, memory: &FlatMemory, expected: &CpuState) -> Vec<String> {
    let mut errors = Vec::new();

    if cpu.regs.pc != expected.pc {
        errors.push(format!(
            "PC: got ${:04X}, want ${:04X}",
            cpu.regs.pc, expected.pc
        ));
    }
    if cpu.regs.sp != expected.sp {
        errors.push(format!(
            "SP: got ${:02X}, want ${:02X}",
            cpu.regs.sp, expected.sp
        ));
    }
    if cpu.regs.a != expected.a {
        errors.push(format!("A: got ${:02X}, want ${:02X}", cpu.regs.a, expected.a));
    }
    if cpu.regs.x != expected.x {
        errors.push(format!("X: got ${:02X}, want ${:02X}", cpu.regs.x, expected.x));
    }
    if cpu.regs.y != expected.y {
        errors.push(format!("Y: got ${:02X}, want ${:02X}", cpu.regs.y, expected.y));
    }
    if cpu.regs.p.to_byte() != expected.p {
        errors.push(format!(
            "P: got ${:02X}, want ${:02X}",
            cpu.regs.p.to_byte(),
            expected.p
        ));
    }
    for &(addr, expected_val) in &expected.ram {
        let actual_val = memory.peek(addr);
        if actual_val != expected_val {
            errors.push(format!(
                "RAM[${addr:04X}]: got ${actual_val:02X}, want ${expected_val:02X}"
            ));
        }
    }

    errors
}

// Programs start at $0200; values are decimal because JSON.
const CASES: &str = r#"[
  {
    "name": "lda immediate sets negative",
    "budget": 2,
    "cycles": 2,
    "initial": { "pc": 512, "sp": 0, "a": 0, "x": 0, "y": 0, "p": 0,
                 "ram": [[512, 169], [513, 132]] },
    "final":   { "pc": 514, "sp": 0, "a": 132, "x": 0, "y": 0, "p": 128,
                 "ram": [[512, 169], [513, 132]] }
  },
  {
    "name": "lda immediate sets zero",
    "budget": 2,
    "cycles": 2,
    "initial": { "pc": 512, "sp": 0, "a": 85, "x": 0, "y": 0, "p": 0,
                 "ram": [[512, 169], [513, 0]] },
    "final":   { "pc": 514, "sp": 0, "a": 0, "x": 0, "y": 0, "p": 2,
                 "ram": [[512, 169], [513, 0]] }
  },
  {
    "name": "lda zero page",
    "budget": 3,
    "cycles": 3,
    "initial": { "pc": 512, "sp": 0, "a": 0, "x": 0, "y": 0, "p": 0,
                 "ram": [[512, 165], [513, 66], [66, 55]] },
    "final":   { "pc": 514, "sp": 0, "a": 55, "x": 0, "y": 0, "p": 0,
                 "ram": [[512, 165], [513, 66], [66, 55]] }
  },
  {
    "name": "lda zero page,X wraps within page",
    "budget": 4,
    "cycles": 4,
    "initial": { "pc": 512, "sp": 0, "a": 0, "x": 5, "y": 0, "p": 0,
                 "ram": [[512, 181], [513, 254], [3, 119]] },
    "final":   { "pc": 514, "sp": 0, "a": 119, "x": 5, "y": 0, "p": 0,
                 "ram": [[512, 181], [513, 254], [3, 119]] }
  },
  {
    "name": "jsr pushes return address and jumps",
    "budget": 6,
    "cycles": 6,
    "initial": { "pc": 528, "sp": 0, "a": 0, "x": 0, "y": 0, "p": 0,
                 "ram": [[528, 32], [529, 0], [530, 128]] },
    "final":   { "pc": 32768, "sp": 254, "a": 0, "x": 0, "y": 0, "p": 0,
                 "ram": [[528, 32], [529, 0], [530, 128], [256, 18], [257, 2]] }
  }
]"#;

#[test]
fn run_all() {
    let tests: Vec<TestCase> = serde_json::from_str(CASES).expect("case table parses");

    for test in &tests {
        let mut cpu = Mos6502::new();
        let mut memory = FlatMemory::new();
        setup(&mut cpu, &mut memory, &test.initial);

        let consumed = cpu
            .execute(test.budget, &mut memory)
            .unwrap_or_else(|e| panic!("[{}] unexpected fault: {e}", test.name));

        assert_eq!(
            consumed, test.cycles,
            "[{}] cycles: got {consumed}, want {}",
            test.name, test.cycles
        );

        let errors = compare(&cpu, &memory, &test.final_state);
        assert!(
            errors.is_empty(),
            "[{}] state mismatch:\n  {}",
            test.name,
            errors.join("\n  ")
        );
    }
}
