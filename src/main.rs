use std::io::{self, BufRead, Write};
use clap::Parser;
use next_pieces::core::config::Config;
use next_pieces::core::log::append_logs;
use next_pieces::core::preview::{Command, Outcome, PieceGenerator, PiecePreview};

fn main() -> eyre::Result<()> {
    let config = Config::parse();

    let generator = match config.seed {
        Some(seed) => PieceGenerator::seeded(seed),
        None => PieceGenerator::from_entropy(),
    };
    let mut preview = PiecePreview::new(config.capacity.get(), generator)?;

    println!("Filling the preview with {} pieces...", preview.capacity());
    preview.prime();
    println!("Preview ready.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", preview.render());
        println!("{}", Command::MENU);
        print!("Choose an option: ");
        io::stdout().flush()?;

        // EOF behaves like exit
        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("\n{err}. Try again.");
                continue;
            }
        };

        match preview.apply(command) {
            Outcome::Played { piece, replacement } => {
                println!("\nPlayed {piece}.");
                if let Some(next) = replacement {
                    println!("Queued {next}.");
                }
            }
            Outcome::Empty => println!("\nThe queue is empty, nothing to play."),
            Outcome::Inserted(piece) => println!("\nQueued {piece}."),
            Outcome::Full { discarded } => {
                println!("\nQueue full! Could not insert {discarded}.")
            }
            Outcome::Exit => break,
        }
    }
    println!("Game over. See you next round!");

    if let Some(path) = &config.journal {
        append_logs(preview.logs(), path)?;
    }
    Ok(())
}
