use crate::cli::completion::ShellCompletionGenerator;
use crate::cli::parser::CompletionArgs;
use crate::utils::Result;

pub fn execute(args: CompletionArgs) -> Result<()> {
    let completion_script = ShellCompletionGenerator::generate_completion(args.shell)?;
    println!("{}", completion_script);

    if std::env::var("CLEANUP_COMPLETION_HELP").is_ok() {
        eprintln!(
            "\n{}",
            ShellCompletionGenerator::get_installation_instructions(args.shell)
        );
    }

    Ok(())
}
