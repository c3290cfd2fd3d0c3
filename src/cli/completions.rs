use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    playprep completions bash > ~/.bash_completion.d/playprep\n\n\
                  Generate zsh completions:\n    playprep completions zsh > ~/.zfunc/_playprep\n\n\
                  Generate fish completions:\n    playprep completions fish > ~/.config/fish/completions/playprep.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
