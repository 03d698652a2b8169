mod compile;

use crate::Cli;
use crate::CommandResult;
pub(crate) use compile::CompileCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "qlc")]
pub(crate) enum CommandEnum {
    /// Compile every GraphQL document below ROOT_DIR (the default command).
    Compile(Box<CompileCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Compile(cmd) => cmd.run(cli).await
        }
    }
}
