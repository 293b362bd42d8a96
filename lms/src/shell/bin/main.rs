use std::io;
use lms::Library;
use lms::core::domain::Configuration;
use lms::shell::menu::Shell;
use lms::utils::logging::setup_tracing;

fn main() -> io::Result<()> {
    let config = Configuration::from_env();
    setup_tracing(config.tracing_level());

    let mut library = Library::new();
    let stdin = io::stdin();
    let mut shell = Shell::new(&config, stdin.lock(), io::stdout());
    shell.run(&mut library)
}
