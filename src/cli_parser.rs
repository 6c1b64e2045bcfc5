use std::path::PathBuf;

use clap::Parser;


#[derive(Parser)]
#[clap(author, about, version)]
pub struct CliParser {

    /// The program file to execute.
    #[clap(required = true)]
    pub input_file: PathBuf,

    /// Execute in verbose mode, tracing the machine state before every instruction.
    #[clap(short='v', long)]
    pub verbose: bool,

}
