use clap::{arg, command};
use snowball_core::crawl::DEFAULT_ALPHABET;
use snowball_scanner::client::DEFAULT_BASE_URL;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("snowball")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("snowball")
        .about("Maps who-dated-who relationship graphs by following profile links")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress the progress spinner and run summary")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbose" "Log more detail to stderr (-v info, -vv debug)")
                .required(false)
                .action(clap::ArgAction::Count)
                .global(true),
        )
        .subcommand_required(true)
        .subcommand(fetch_arguments(
            command!("sample")
                .about(
                    "Sample the first COUNT names of every letter's listing and record who each \
                of them dated.",
                )
                .arg(
                    arg!(<COUNT>)
                        .help("Number of celebrities to collect per letter")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                )
                .arg(
                    arg!(--"alphabet" <LETTERS>)
                        .required(false)
                        .help("Letters whose listings are sampled, in order")
                        .default_value(DEFAULT_ALPHABET),
                ),
        ))
        .subcommand(fetch_arguments(
            command!("snowball")
                .about(
                    "Start from one celebrity and follow dating links breadth-first until NUMBER \
                people have been found.",
                )
                .arg(
                    arg!(<CELEBRITY>)
                        .help("Celebrity name to start from, e.g. \"Orlando Bloom\""),
                )
                .arg(
                    arg!(<NUMBER>)
                        .help("Total number of celebrities to collect")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                ),
        ))
}

/// Options shared by every crawling subcommand.
fn fetch_arguments(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        arg!(-o --"output" <PATH>)
            .required(false)
            .help("Write the JSON graph to a file (default: standard output)")
            .value_parser(clap::value_parser!(std::path::PathBuf)),
    )
    .arg(
        arg!(-t --"threads" <NUM_WORKERS>)
            .required(false)
            .help("Number of profile pages fetched concurrently")
            .value_parser(clap::value_parser!(u64).range(1..))
            .default_value("1"),
    )
    .arg(
        arg!(--"timeout" <SECONDS>)
            .required(false)
            .help("Request timeout in seconds")
            .value_parser(clap::value_parser!(u64).range(1..))
            .default_value("10"),
    )
    .arg(
        arg!(--"deadline" <SECONDS>)
            .required(false)
            .help("Stop after this many seconds and keep the graph collected so far")
            .value_parser(clap::value_parser!(u64).range(1..)),
    )
    .arg(
        arg!(--"base-url" <URL>)
            .required(false)
            .help("Site root that listing and profile paths are resolved against")
            .value_parser(clap::value_parser!(Url))
            .default_value(DEFAULT_BASE_URL),
    )
    .arg(
        arg!(--"user-agent" <USER_AGENT>)
            .required(false)
            .help("User-Agent header sent with every request"),
    )
}
