use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rolo::book::AddressBook;
use rolo::dispatch;
use rolo::error::{Result, RoloError};
use rolo::store::fs::FileStore;
use rolo::store::ContactStore;

mod args;
mod render;

use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut store = FileStore::new(resolve_data_path(&cli));

    // A corrupt or unreadable contacts file must not kill the session:
    // warn and start from an empty book. Missing files are simply empty.
    let mut book = match store.load() {
        Ok(book) => book,
        Err(e) => {
            println!(
                "{}",
                format!("Could not read the contacts file: {e}. Starting with an empty book.")
                    .yellow()
            );
            AddressBook::new()
        }
    };

    render::hello();

    let stdin = io::stdin();
    loop {
        print!("{}", "Enter a command > ".bold());
        io::stdout().flush().map_err(RoloError::Io)?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(RoloError::Io)? == 0 {
            // EOF behaves like an explicit quit.
            println!();
            render::farewell();
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, args) = dispatch::parse_input(line);
        match command.as_str() {
            "hello" | "hi" => render::hello(),
            "help" | "?" => render::help(),
            "clear" | "clr" => render::clear_screen(),
            "exit" | "close" | "quit" => {
                render::farewell();
                break;
            }
            _ => {
                let today = Local::now().date_naive();
                match dispatch::execute(&mut store, &mut book, &command, &args, today) {
                    Ok(result) => render::print_result(&result, today),
                    Err(e) => render::print_error(&e),
                }
            }
        }
    }

    Ok(())
}

fn resolve_data_path(cli: &Cli) -> PathBuf {
    if let Some(file) = &cli.file {
        return file.clone();
    }
    let proj_dirs = ProjectDirs::from("com", "rolo", "rolo").expect("Could not determine data dir");
    proj_dirs.data_dir().join("contacts.json")
}
