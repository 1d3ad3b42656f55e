use super::*;
use colored::Colorize;
use dialoguer::Input;
use std::io::BufRead;
use std::io::IsTerminal;
use std::io::Write;

/// Interactive player at the console.
///
/// Prompts through dialoguer when stdin is a terminal. Otherwise reads
/// plain lines so piped sessions work and end-of-input is noticed.
#[derive(Debug)]
pub struct Human {
    attended: bool,
}

impl Default for Human {
    fn default() -> Self {
        Self {
            attended: std::io::stdin().is_terminal(),
        }
    }
}

impl Human {
    /// One line of input, or `None` once input is closed.
    fn prompt(&self, prompt: &str) -> Option<String> {
        match self.attended {
            true => Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .report(false)
                .interact_text()
                .ok(),
            false => {
                print!("{}: ", prompt);
                std::io::stdout().flush().ok();
                read_line(&mut std::io::stdin().lock())
            }
        }
    }
    /// The scored accusation as shown at the console, verdict coloured.
    pub fn verdict(judgement: &Judgement) -> String {
        let verdict = match judgement.verdict() {
            Verdict::Sustained => judgement.verdict().to_string().green(),
            Verdict::Insufficient => judgement.verdict().to_string().red(),
        };
        format!(
            "Clues pointing to '{}': {}\nResult: {}",
            judgement.accused(),
            judgement.count(),
            verdict
        )
    }
    fn passages(room: &Room) {
        println!("Choose a path:");
        for direction in Direction::all() {
            match room.child(direction) {
                Some(child) => println!("  ({}) {} -> {}", direction.key(), direction, child),
                None => println!("  ({}) {} -> {}", direction.key(), direction, "(blocked)".dimmed()),
            }
        }
        println!("  (s) leave the exploration");
    }
}

/// Next line from a reader, `None` only once it is closed or broken.
/// Bytes that are not UTF-8 are replaced rather than ending the input, so
/// garbage becomes an invalid command instead of a silent end of game.
fn read_line<R>(reader: &mut R) -> Option<String>
where
    R: BufRead,
{
    let ref mut bytes = Vec::new();
    match reader.read_until(b'\n', bytes) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(String::from_utf8_lossy(&bytes[..]).into_owned()),
    }
}

impl Detective for Human {
    fn decide(&mut self, room: &Room) -> Option<Command> {
        let line = match room.is_leaf() {
            true => self.prompt("Type 's' to leave or anything else to stop exploring")?,
            false => {
                Self::passages(room);
                self.prompt("Option")?
            }
        };
        Some(Command::from(line.as_str()))
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Entered { room, clue, fresh } => {
                println!("\nYou entered: {}", room.bold());
                match clue {
                    Some(clue) if *fresh => println!("Clue found: \"{}\"", clue.to_string().yellow()),
                    Some(clue) => println!("Clue found: \"{}\" (already noted)", clue),
                    None => println!("No clue in this room."),
                }
            }
            Event::DeadEnd { .. } => println!("This room has no further paths."),
            Event::Blocked(direction) => println!("The {} path is {}.", direction, "blocked".red()),
            Event::Invalid => println!("{} Type 'e', 'd' or 's'.", "Invalid command.".red()),
            Event::Ended(ending) => println!("{}", ending.to_string().cyan()),
        }
    }
    fn accuse(&mut self) -> Option<String> {
        self.prompt("\nName the suspect to accuse (e.g. 'Sr. Black')")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn lines_until_closed() {
        let ref mut input = Cursor::new(b"e\nSr. Black\n".to_vec());
        assert_eq!(read_line(input).as_deref(), Some("e\n"));
        assert_eq!(read_line(input).as_deref(), Some("Sr. Black\n"));
        assert_eq!(read_line(input), None);
    }
    #[test]
    fn last_line_without_newline() {
        let ref mut input = Cursor::new(b"s".to_vec());
        assert_eq!(read_line(input).as_deref(), Some("s"));
        assert_eq!(read_line(input), None);
    }
    #[test]
    fn non_utf8_line_is_invalid_not_closed() {
        let ref mut input = Cursor::new(b"\xff\nd\n".to_vec());
        let line = read_line(input).expect("garbage line still counts as input");
        assert_eq!(Command::from(line.as_str()), Command::Invalid);
        let line = read_line(input).expect("following line still readable");
        assert_eq!(Command::from(line.as_str()), Command::Go(Direction::Right));
    }
    #[test]
    fn verdict_colours_only_at_the_console() {
        colored::control::set_override(true);
        let index = SuspectIndex::bind([("a", "Sr. Black"), ("b", "Sr. Black")]).unwrap();
        let mut ledger = ClueLedger::new();
        ledger.insert(&Clue::from("a")).unwrap();
        ledger.insert(&Clue::from("b")).unwrap();
        let judgement = Judgement::new(&ledger, &index, Accusation::parse("Sr. Black").unwrap());
        let shown = Human::verdict(&judgement);
        assert!(shown.starts_with("Clues pointing to 'Sr. Black': 2\nResult: "));
        assert!(shown.contains(&"accusation sustained".green().to_string()));
        assert!(!judgement.to_string().contains('\x1b'));
    }
}
