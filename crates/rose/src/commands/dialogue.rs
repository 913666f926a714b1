use clap::Args;
use miette::Result;

use rose_dialogue::DialogueRequest;

#[derive(clap::Subcommand)]
pub enum DialogueCommands {
    /// Print the prompt a dialogue backend would receive
    Prompt(PromptArgs),
}

impl DialogueCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            DialogueCommands::Prompt(prompt) => prompt.handle(),
        }
    }
}

#[derive(Args)]
pub struct PromptArgs {
    /// The character's role, e.g. "blacksmith"
    #[arg(short, long)]
    role: String,

    /// The character's name
    #[arg(short, long)]
    name: String,

    /// Optional scene context
    #[arg(short, long)]
    context: Option<String>,
}

impl PromptArgs {
    pub fn handle(&self) -> Result<()> {
        let mut request = DialogueRequest::new(&self.role, &self.name);
        if let Some(context) = &self.context {
            request = request.with_context(context);
        }

        println!("{}", request.prompt());

        Ok(())
    }
}
