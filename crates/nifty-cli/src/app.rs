//! Interactive company viewer

use crate::commands::{Command, CommandError};
use chrono::NaiveDateTime;
use nifty_core::InsightsEngine;
use nifty_core::interface::{Formatter, company_table};
use std::io::{self, BufRead, Write};
use tracing::{error, info};

/// Source of "now" for membership statements
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Local wall-clock time at each selection
    System,
    /// Pinned instant, for reproducible output
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => chrono::Local::now().naive_local(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// Result of processing one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Output(String),
    Nothing,
    Exit,
}

pub struct App {
    engine: InsightsEngine,
    formatter: Box<dyn Formatter>,
    clock: Clock,
    include_news: bool,
}

impl App {
    pub fn new(
        engine: InsightsEngine,
        formatter: Box<dyn Formatter>,
        clock: Clock,
        include_news: bool,
    ) -> Self {
        Self {
            engine,
            formatter,
            clock,
            include_news,
        }
    }

    pub fn engine(&self) -> &InsightsEngine {
        &self.engine
    }

    pub fn prompt(&self) -> &'static str {
        "company> "
    }

    /// Numbered company listing
    pub fn listing(&self) -> String {
        company_table(self.engine.dataset()).to_string()
    }

    /// Render the page for an exact company name
    pub async fn render(&self, name: &str) -> Result<String, nifty_core::InsightsError> {
        let now = self.clock.now();
        let page = if self.include_news {
            self.engine.company_page(name, now).await?
        } else {
            self.engine.company_page_without_news(name, now)?
        };
        Ok(self.formatter.format_page(&page))
    }

    /// Resolve a name typed by the user and render it
    pub async fn render_named(&self, name: &str) -> Result<String, nifty_core::InsightsError> {
        let canonical = self
            .engine
            .dataset()
            .find_ignore_case(name)
            .map_or_else(|| name.to_string(), |record| record.name.clone());
        self.render(&canonical).await
    }

    async fn render_or_report(&self, name: &str) -> String {
        info!(company = name, "Company selected");
        match self.render_named(name).await {
            Ok(output) => output,
            Err(e) => {
                error!(company = name, error = %e, "Failed to build company page");
                self.formatter.format_error(&e.to_string())
            },
        }
    }

    /// Process one line of user input
    pub async fn process_input(&self, input: &str) -> Response {
        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(CommandError::Empty) => return Response::Nothing,
            Err(e) => return Response::Output(self.formatter.format_error(&e.to_string())),
        };

        match command {
            Command::Exit => Response::Exit,
            Command::Help => Response::Output(Command::help_text().to_string()),
            Command::List => Response::Output(self.listing()),
            Command::Deselect => Response::Nothing,
            Command::Select(n) => {
                let name = self
                    .engine
                    .dataset()
                    .companies()
                    .get(n.wrapping_sub(1))
                    .map(|record| record.name.clone());
                match name {
                    Some(name) => Response::Output(self.render_or_report(&name).await),
                    None => Response::Output(self.formatter.format_error(&format!(
                        "No company numbered {n}; use /list to see the choices"
                    ))),
                }
            },
            Command::Company(name) => Response::Output(self.render_or_report(&name).await),
        }
    }

    /// Read selections from `input` until EOF or `/exit`
    pub async fn run_repl<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}\n", self.listing())?;

        loop {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(output, "\nGoodbye!")?;
                    break;
                },
                Ok(_) => {},
                Err(e) => {
                    error!(error = %e, "Error reading input");
                    continue;
                },
            }

            match self.process_input(&line).await {
                Response::Output(text) => writeln!(output, "{text}\n")?,
                Response::Nothing => {},
                Response::Exit => {
                    writeln!(output, "Goodbye!")?;
                    break;
                },
            }
        }

        Ok(())
    }
}
