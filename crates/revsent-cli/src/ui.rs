//! UI utilities for the CLI

use colored::*;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use std::io::{self, IsTerminal, Write};

use revsent_core::{Result, ServiceStatus};

const PROMPT: &str = "revsent>";

/// Display startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(60, terminal_width.saturating_sub(4)).max(40);

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());

    let title = "revsent - Review Sentiment Analyzer";
    println!(
        "{}{}{}{}",
        "│  ".blue(),
        title.blue().bold(),
        " ".repeat(banner_width - title.chars().count() - 5),
        " │".blue()
    );

    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
    println!(
        "{}",
        "💡 Paste an Amazon or Walmart product URL, or type 'help'".dimmed()
    );
    println!();
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Analyze the reviews of a product page", "<product url>".green());
    println!("  {} - Check that the analysis server is reachable", "status".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  https://www.amazon.com/dp/B08N5WRWNW");
    println!("  https://www.walmart.com/ip/123456789");
}

/// Report the outcome of a `/status` probe
pub fn display_status(status: &Result<ServiceStatus>) {
    match status {
        Ok(s) if s.is_ok() => println!("{} Analysis server is up", "✅".green()),
        Ok(s) => println!(
            "{} Analysis server reported status '{}'",
            "⚠️".yellow(),
            s.status
        ),
        Err(e) => println!(
            "{} Analysis server unreachable: {}. Continuing anyway.",
            "⚠️".yellow(),
            e
        ),
    }
}

/// What the user did at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    /// Enter was pressed; the line may be empty
    Line(String),
    /// Esc was pressed; nothing is submitted
    Cancelled,
    /// Input stream ended
    Closed,
}

fn redraw(input: &str) -> io::Result<()> {
    print!(
        "\r{} {}  \r{} {}",
        PROMPT.green().bold(),
        " ".repeat(input.chars().count() + 50),
        PROMPT.green().bold(),
        input
    );
    io::stdout().flush()
}

/// Handle input with history navigation
pub async fn handle_input_with_history(history: &mut Vec<String>) -> Result<PromptInput> {
    // Piped input: read a plain line
    let input = if !io::stdin().is_terminal() {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(PromptInput::Closed);
        }
        PromptInput::Line(line.trim().to_string())
    } else {
        enable_raw_mode()?;
        let result = read_line_raw(history);
        disable_raw_mode()?;
        println!();
        result?
    };

    if let PromptInput::Line(line) = &input {
        if !line.is_empty() {
            history.push(line.clone());
        }
    }
    Ok(input)
}

fn read_line_raw(history: &[String]) -> Result<PromptInput> {
    let mut input = String::new();
    let mut history_index: Option<usize> = None;

    print!("{} ", PROMPT.green().bold());
    io::stdout().flush()?;

    loop {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            match key_event.code {
                KeyCode::Enter => return Ok(PromptInput::Line(input.trim().to_string())),
                KeyCode::Esc => return Ok(PromptInput::Cancelled),
                KeyCode::Char(c) => {
                    input.push(c);
                    redraw(&input)?;
                }
                KeyCode::Backspace => {
                    input.pop();
                    redraw(&input)?;
                }
                KeyCode::Up if !history.is_empty() => {
                    let new_index = match history_index {
                        None => history.len() - 1,
                        Some(idx) => idx.saturating_sub(1),
                    };
                    history_index = Some(new_index);
                    input = history[new_index].clone();
                    redraw(&input)?;
                }
                KeyCode::Down => {
                    if let Some(idx) = history_index {
                        if idx + 1 < history.len() {
                            history_index = Some(idx + 1);
                            input = history[idx + 1].clone();
                        } else {
                            history_index = None;
                            input.clear();
                        }
                        redraw(&input)?;
                    }
                }
                _ => {}
            }
        }
    }
}
