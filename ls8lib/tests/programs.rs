use ls8lib::exec::Cpu;
use ls8lib::loader;


fn run_source(source: &str) -> String {
    let program = loader::parse_program(source);
    let mut cpu = Cpu::new();
    cpu.load(&program).unwrap();
    let mut output = Vec::new();
    cpu.run(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}


#[test]
fn print8_program() {
    let source = "\
# print8.ls8: load 8 into R0 and print it
10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";
    assert_eq!(run_source(source), "Value: 8\nStopping...\n");
}


#[test]
fn mult_program() {
    let source = "\
# mult.ls8: print 8 * 9
10000010 # LDI R0,8
00000000
00001000
10000010 # LDI R1,9
00000001
00001001
10100010 # MUL R0,R1
00000000
00000001
01000111 # PRN R0
00000000
00000001 # HLT
";
    assert_eq!(run_source(source), "Value: 72\nStopping...\n");
}


#[test]
fn stack_program_swaps_through_the_stack() {
    let source = "\
# stack.ls8: push two values and pop them back in reverse
10000010 # LDI R0,1
00000000
00000001
10000010 # LDI R1,2
00000001
00000010
01000101 # PUSH R0
00000000
01000101 # PUSH R1
00000001
01000110 # POP R0
00000000
01000110 # POP R1
00000001
01000111 # PRN R0
00000000
01000111 # PRN R1
00000001
00000001 # HLT
";
    assert_eq!(run_source(source), "Value: 2\nValue: 1\nStopping...\n");
}
