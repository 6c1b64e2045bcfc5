mod cli_parser;

use std::io;
use std::process;

use clap::Parser;
use cli_parser::CliParser;

use ls8lib::errors::LoadError;
use ls8lib::exec::Cpu;
use ls8lib::loader;


fn main() {

    let args = CliParser::parse();

    let program = loader::read_program(&args.input_file).unwrap_or_else(|err| {
        match &err {
            LoadError::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                eprintln!("ls8vm: {} not found", args.input_file.display());
            }
            _ => {
                eprintln!("ls8vm: could not load \"{}\": {err}", args.input_file.display());
            }
        }
        process::exit(2);
    });

    let mut cpu = Cpu::new();
    cpu.set_trace(args.verbose);

    if let Err(err) = cpu.load(&program) {
        eprintln!("ls8vm: could not load \"{}\": {err}", args.input_file.display());
        process::exit(2);
    }

    let mut stdout = io::stdout().lock();
    if let Err(err) = cpu.run(&mut stdout) {
        eprintln!("ls8vm: execution error: {err}");
        process::exit(1);
    }

}
