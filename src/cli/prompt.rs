//! Terminal prompt for the worker.
use crate::calculator::{parse_number, Calculator};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::error;

const PROMPT: &str = "Enter a number: ";

/// What the prompt should do after one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum PromptAction {
    Reply(String),
    Quit,
}

/// Interprets one line of user input.
pub fn handle_line(calculator: &Calculator, line: &str) -> PromptAction {
    let line = line.trim();

    if matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q") {
        return PromptAction::Quit;
    }

    match parse_number(line) {
        Ok(number) => {
            let result = calculator.power_of_2(number);
            PromptAction::Reply(format!("Result: {}^2 = {}", result.number, result.power_of_2))
        }
        Err(_) => PromptAction::Reply("Invalid input! Please enter an integer.".to_string()),
    }
}

fn print_banner() {
    println!("Power of 2 Calculator (Interactive Mode)");
    println!("{}", "=".repeat(50));
    println!("Enter integers to calculate their power of 2 (number^2)");
    println!("Type 'quit' or 'exit' to stop");
    println!("{}", "=".repeat(50));
}

/// Reads numbers from the terminal until the user quits.
///
/// Line editing blocks, so the loop runs on tokio's blocking pool. That pool
/// still belongs to the runtime, which keeps dispatches working while the
/// prompt waits for input.
pub async fn run_prompt(calculator: Calculator) -> Result<()> {
    tokio::task::spawn_blocking(move || -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        print_banner();

        loop {
            match editor.readline(&format!("\n{}", PROMPT)) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    match handle_line(&calculator, &line) {
                        PromptAction::Reply(reply) => println!("{}", reply),
                        PromptAction::Quit => break,
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    return Err(e.into());
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{Dispatcher, DispatcherConfig};
    use std::sync::Arc;

    fn calculator() -> Calculator {
        let dispatcher = Dispatcher::new(DispatcherConfig::new("", "InteractiveServer")).unwrap();
        Calculator::new(Arc::new(dispatcher))
    }

    #[test]
    fn numbers_are_squared() {
        assert_eq!(
            handle_line(&calculator(), " 7 "),
            PromptAction::Reply("Result: 7^2 = 49".to_string())
        );
    }

    #[test]
    fn quit_words_end_the_loop() {
        for word in ["quit", "EXIT", "q"] {
            assert_eq!(handle_line(&calculator(), word), PromptAction::Quit);
        }
    }

    #[test]
    fn garbage_is_reported() {
        assert_eq!(
            handle_line(&calculator(), "seven"),
            PromptAction::Reply("Invalid input! Please enter an integer.".to_string())
        );
    }
}
