//! Interactive session
//!
//! Holds the current selections and recomputes the whole report after every
//! change. A change that would make the selections invalid is rejected and
//! the previous selections stay in place.

use crate::models::Priority;
use crate::planner::{TripPlanner, TripReport, TripRequest};
use crate::{Result, TravelOsError};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const HELP: &str = "\
Commands:
  route <name>        switch route (e.g. route Grand Explorer)
  budget <amount>     set total budget in EUR
  days <1-7>          set days per city
  start <YYYY-MM-DD>  set start date
  toggle <priority>   add or remove a priority (Low cost, Comfort, Fast, Eco, Nightlife, Culture)
  clear               remove all priorities
  show                print the current report
  help                print this help
  quit                leave the session";

/// One line of user input
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Route(String),
    Budget(f64),
    Days(u8),
    Start(NaiveDate),
    Toggle(Priority),
    Clear,
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a line like `budget 4200` or `toggle low cost`
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let require = |what: &str| {
            if argument.is_empty() {
                Err(TravelOsError::validation(format!("'{keyword}' needs {what}")))
            } else {
                Ok(argument)
            }
        };

        match keyword.to_lowercase().as_str() {
            "route" => Ok(SessionCommand::Route(require("a route name")?.to_string())),
            "budget" => require("an amount")?
                .parse()
                .map(SessionCommand::Budget)
                .map_err(|_| TravelOsError::validation(format!("Invalid budget '{argument}'"))),
            "days" => require("a number of days")?
                .parse()
                .map(SessionCommand::Days)
                .map_err(|_| TravelOsError::validation(format!("Invalid number of days '{argument}'"))),
            "start" => require("a date")?
                .parse()
                .map(SessionCommand::Start)
                .map_err(|_| {
                    TravelOsError::validation(format!("Invalid date '{argument}', expected YYYY-MM-DD"))
                }),
            "toggle" => Ok(SessionCommand::Toggle(require("a priority")?.parse()?)),
            "clear" => Ok(SessionCommand::Clear),
            "show" | "" => Ok(SessionCommand::Show),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(TravelOsError::validation(format!(
                "Unknown command '{other}'. Type 'help' for a list of commands"
            ))),
        }
    }
}

/// What the caller should do after applying a command
#[derive(Debug)]
pub enum SessionOutcome {
    Report(Box<TripReport>),
    Help,
    Quit,
}

pub struct Session<'a> {
    planner: TripPlanner<'a>,
    request: TripRequest,
}

impl<'a> Session<'a> {
    /// Start a session; the initial selections must already be valid
    pub fn new(planner: TripPlanner<'a>, request: TripRequest) -> Result<Self> {
        planner.plan(&request)?;
        Ok(Self { planner, request })
    }

    #[must_use]
    pub fn request(&self) -> &TripRequest {
        &self.request
    }

    /// Report for the current selections
    pub fn report(&self) -> Result<TripReport> {
        self.planner.plan(&self.request)
    }

    /// Apply a command, committing the change only if the result still plans
    pub fn apply(&mut self, command: SessionCommand) -> Result<SessionOutcome> {
        let mut candidate = self.request.clone();
        match command {
            SessionCommand::Route(route) => candidate.route = route,
            SessionCommand::Budget(budget) => candidate.budget = budget,
            SessionCommand::Days(days) => candidate.days_per_city = days,
            SessionCommand::Start(date) => candidate.start_date = Some(date),
            SessionCommand::Toggle(priority) => {
                if let Some(index) = candidate.priorities.iter().position(|p| *p == priority) {
                    candidate.priorities.remove(index);
                } else {
                    candidate.priorities.push(priority);
                }
            }
            SessionCommand::Clear => candidate.priorities.clear(),
            SessionCommand::Show => {}
            SessionCommand::Help => return Ok(SessionOutcome::Help),
            SessionCommand::Quit => return Ok(SessionOutcome::Quit),
        }

        let report = self.planner.plan(&candidate)?;
        debug!(?candidate, "Session selections updated");
        self.request = candidate;
        Ok(SessionOutcome::Report(Box::new(report)))
    }

    /// Drive the session from a line reader until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", self.report()?)?;
        writeln!(output, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            let outcome = SessionCommand::parse(&line).and_then(|command| self.apply(command));
            match outcome {
                Ok(SessionOutcome::Report(report)) => writeln!(output, "{report}")?,
                Ok(SessionOutcome::Help) => writeln!(output, "{HELP}")?,
                Ok(SessionOutcome::Quit) => break,
                Err(err) => {
                    warn!("Rejected input '{}': {}", line.trim(), err);
                    writeln!(output, "❌ {}", err.user_message())?;
                }
            }
            output.flush()?;
        }
        Ok(())
    }
}
