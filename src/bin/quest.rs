//! Detective Quest
//!
//! Explore the mansion, collect clues, then accuse a suspect.
//!
//! Environment: QUEST_LOG (log level), QUEST_LOG_FILE (debug log path)
use colored::Colorize;
use detective_quest::*;

fn main() -> anyhow::Result<()> {
    detective_quest::log()?;
    let mut session = Session::standard()?;
    let ref mut human = Human::default();
    println!(
        "{}",
        "Starting exploration (commands: e = left, d = right, s = leave)".bold()
    );
    session.explore(human)?;
    println!("\n== Collected clues ==");
    print!("{}", session.ledger());
    println!("Suspects: {}", mansion::SUSPECTS.join(", "));
    match human.accuse() {
        None => println!("No accusation received. Closing."),
        Some(text) => match session.accuse(&text) {
            None => println!("No suspect indicated. Closing."),
            Some(judgement) => println!("\n{}", Human::verdict(&judgement)),
        },
    }
    println!("\nGame over. Thanks for playing Detective Quest!");
    Ok(())
}
