use crate::cli::parser::{Cli, Shell};
use crate::utils::{CleanupError, Result};
use clap::CommandFactory;
use clap_complete::{generate, shells};

const BIN_NAME: &str = "cleanup";

pub struct ShellCompletionGenerator;

impl ShellCompletionGenerator {
    pub fn generate_completion(shell: Shell) -> Result<String> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();

        match shell {
            Shell::Bash => generate(shells::Bash, &mut cmd, BIN_NAME, &mut buf),
            Shell::Zsh => generate(shells::Zsh, &mut cmd, BIN_NAME, &mut buf),
            Shell::Fish => generate(shells::Fish, &mut cmd, BIN_NAME, &mut buf),
        }

        String::from_utf8(buf).map_err(|e| {
            CleanupError::invalid_args(format!("UTF-8 error generating completion: {}", e))
        })
    }

    pub fn get_installation_instructions(shell: Shell) -> String {
        match shell {
            Shell::Bash => r#"# Installation instructions for Bash completion:

mkdir -p ~/.local/share/bash-completion/completions
cleanup completion bash > ~/.local/share/bash-completion/completions/cleanup

# Or add to your ~/.bashrc
echo 'eval "$(cleanup completion bash)"' >> ~/.bashrc"#
                .to_string(),
            Shell::Zsh => r#"# Installation instructions for Zsh completion:

mkdir -p ~/.zsh_completions
cleanup completion zsh > ~/.zsh_completions/_cleanup
# Add to ~/.zshrc: fpath=(~/.zsh_completions $fpath)"#
                .to_string(),
            Shell::Fish => r#"# Installation instructions for Fish completion:

mkdir -p ~/.config/fish/completions
cleanup completion fish > ~/.config/fish/completions/cleanup.fish"#
                .to_string(),
        }
    }
}
