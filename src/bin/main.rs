use crossterm::style::Stylize;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use written_number::{load_descriptor, written_number, Language, LanguageSelector, Options};

const LANGUAGE_ENV: &str = "WRITTEN_NUMBER_LANG";

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut options = initial_options();

    // Arguments are converted once, without the prompt.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        for arg in &args {
            print_words(arg, &options);
        }
        return Ok(());
    }

    println!("Written Number. Enter a number, ':help' for commands, 'exit' to quit.");
    println!("---------------------------------------------------------------");
    prompt(&options)?;

    for line in stdin().lock().lines() {
        let input = line?;
        let cmd = input.trim();
        if cmd == "exit" {
            break;
        }
        handle_command(cmd, &mut options);
        prompt(&options)?;
    }
    Ok(())
}

fn initial_options() -> Options {
    match std::env::var(LANGUAGE_ENV) {
        Ok(code) => Options::from_code(&code).unwrap_or_else(|e| {
            tracing::warn!(%e, "ignoring {LANGUAGE_ENV}");
            Options::default()
        }),
        Err(_) => Options::default(),
    }
}

fn handle_command(cmd: &str, options: &mut Options) {
    if cmd.is_empty() {
        return;
    }
    if let Some(code) = cmd.strip_prefix(":lang ") {
        match code.trim().parse::<Language>() {
            Ok(language) => {
                options.language = language.into();
                options.alternative_base = None;
            }
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    } else if let Some(name) = cmd.strip_prefix(":alt ") {
        let name = name.trim();
        options.alternative_base = (name != "-").then(|| name.to_owned());
    } else if let Some(path) = cmd.strip_prefix(":load ") {
        match load_descriptor(Path::new(path.trim())) {
            Ok(descriptor) => {
                options.language = LanguageSelector::Custom(Arc::new(descriptor));
                options.alternative_base = None;
            }
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    } else {
        match cmd {
            ":noand" => {
                options.no_and = !options.no_and;
                println!("no-and is now {}", options.no_and);
            }
            ":langs" => {
                let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
                println!("{}", codes.join(" "));
            }
            ":help" => print_help(),
            number => print_words(number, options),
        }
    }
}

fn print_words(number: &str, options: &Options) {
    match written_number(number, options) {
        Ok(words) if words.is_empty() => {
            eprintln!("{}", format!("'{number}' is not a non-negative number").yellow())
        }
        Ok(words) => println!("{}", words.green()),
        Err(e) => eprintln!("{}", e.to_string().red()),
    }
}

fn print_help() {
    println!("  <number>        write the number out");
    println!("  :lang <code>    switch built-in language (see :langs)");
    println!("  :alt <name|->   select or clear an alternative base");
    println!("  :noand          toggle the unit separator");
    println!("  :load <path>    use a custom JSON language descriptor");
    println!("  exit            quit");
}

fn prompt(options: &Options) -> std::io::Result<()> {
    let language = match &options.language {
        LanguageSelector::BuiltIn(language) => language.code(),
        LanguageSelector::Custom(_) => "custom",
    };
    let alternative = options
        .alternative_base
        .as_deref()
        .map(|name| format!("/{name}"))
        .unwrap_or_default();
    print!("\n[{language}{alternative}] > ");
    stdout().flush()
}
