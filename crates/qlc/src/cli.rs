use crate::commands;
use crate::commands::CompileCmd;

/// Generates TypeScript declarations for the GraphQL documents below a
/// project directory. Running without a subcommand compiles.
#[derive(clap::Parser, Debug)]
#[command(name = "qlc", version, args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[command(flatten)]
    pub(crate) compile: CompileCmd,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) fn default_command(&self) -> commands::CommandEnum {
        commands::CommandEnum::Compile(Box::new(self.compile.clone()))
    }
}
