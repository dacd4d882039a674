use colored::Colorize;
use snowball::commands::command_argument_builder;
use snowball::handlers::{handle_crawl, init_logging};

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();

    let result = match chosen_command.subcommand() {
        Some((name @ ("sample" | "snowball"), primary_command)) => {
            let quiet = primary_command.get_flag("quiet");
            init_logging(primary_command.get_count("verbose"), quiet);
            handle_crawl(name, primary_command, quiet).await
        }
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
