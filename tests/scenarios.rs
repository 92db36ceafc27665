//! Integration scenarios covering the assembler and emulator together (spec.md §8, S1-S6).

use stackvm::{asm, vm::Memory, AssemblerError, Vm};

fn run_source(source: &str) -> Vm {
    let out = asm::assemble(source).unwrap();
    let mut memory = Memory::new();
    memory.load(&out.words);
    let mut vm = Vm::with_memory(memory);
    vm.run().unwrap();
    vm
}

#[test]
fn s1_symbol_table_and_set() {
    let out = asm::assemble("N: SET 7\nstart: ldc N\n       HALT").unwrap();
    assert_eq!(out.words, vec![0x0000_0700u32 as i32, 0x0000_0012]);
}

#[test]
fn s2_forward_branch() {
    let out = asm::assemble("       br end\n       HALT\nend:   HALT").unwrap();
    assert_eq!(out.words, vec![0x0000_0111u32 as i32, 0x0000_0012, 0x0000_0012]);
}

#[test]
fn s3_duplicate_label_is_rejected() {
    let err = asm::assemble("foo: HALT\nfoo: HALT").unwrap_err();
    assert!(matches!(err, AssemblerError::DuplicateLabel { label, .. } if label == "foo"));
}

#[test]
fn s4_counting_loop_terminates_with_a_minus_one() {
    let source = "\
        ldc 2\n\
loop:   adc -1\n\
        brlz exit\n\
        br loop\n\
exit:   HALT\n";
    let vm = run_source(source);
    assert_eq!(vm.regs.a, -1);
    assert!(vm.halted);
    // PC sits one past the HALT word (address 4).
    assert_eq!(vm.regs.pc, 5);
}

#[test]
fn s5_subroutine_via_call_and_return() {
    // foo stashes the return address on the stack around computing its result, so the
    // value call left in A survives the trip through ldc.
    let source = "\
        adj 100\n\
        call foo\n\
        HALT\n\
foo:    stl 0\n\
        ldc 42\n\
        ldl 0\n\
        return\n";
    let vm = run_source(source);
    assert_eq!(vm.regs.a, 42);
    assert!(vm.halted);
    // PC sits one past the post-call HALT (address 2 + 1).
    assert_eq!(vm.regs.pc, 3);
}

#[test]
fn s6_stack_roundtrip_via_stl_and_ldl_preserves_b() {
    let source = "\
        adj 4\n\
        ldc 55\n\
        stl 2\n\
        ldl 2\n\
        HALT\n";
    let vm = run_source(source);
    assert_eq!(vm.regs.a, 55);
    assert_eq!(vm.regs.b, 0);
}
