use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::api::handlers;
use crate::api::session::Session;
use crate::error::{Result, SerenaError};

pub type Handler = fn(&mut Session, &str) -> Result<String>;

struct Route {
    handler: Handler,
    summary: &'static str,
}

/// Name → handler table for console commands.
pub struct CommandRouter {
    routes: BTreeMap<&'static str, Route>,
}

impl Default for CommandRouter {
    fn default() -> Self {
        let mut router = Self::empty();
        configure(&mut router);
        router
    }
}

/// Register the standard bedside commands.
pub fn configure(router: &mut CommandRouter) {
    router
        .route("patient-education", handlers::patient_education, "refresh vitals and show education for the patient's condition")
        .route("vitals-history", handlers::vitals_history, "refresh vitals and list the recent readings")
        .route("vitals", handlers::vitals, "show current vitals ('vitals json' for raw state)")
        .route("ask", handlers::ask, "ask a medical question, e.g. 'ask What is Mounjaro?'");
}

impl CommandRouter {
    pub fn empty() -> Self {
        Self {
            routes: BTreeMap::new(),
        }
    }

    pub fn route(&mut self, name: &'static str, handler: Handler, summary: &'static str) -> &mut Self {
        self.routes.insert(name, Route { handler, summary });
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    pub fn help(&self) -> String {
        let mut lines = vec!["Commands:".to_string()];
        lines.extend(
            self.routes
                .iter()
                .map(|(name, route)| format!("  {:<18} {}", name, route.summary)),
        );
        lines.push(format!("  {:<18} {}", "help", "show this list"));
        lines.push(format!("  {:<18} {}", "quit", "stop the monitor"));
        lines.join("\n")
    }

    /// Split `line` into a command name and its argument text, then run the
    /// matching handler.
    pub fn dispatch(&self, session: &mut Session, line: &str) -> Result<String> {
        let line = line.trim();
        let (name, args) = match line.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (line, ""),
        };
        let name = name.to_lowercase();

        if name == "help" {
            return Ok(self.help());
        }

        match self.routes.get(name.as_str()) {
            Some(route) => {
                debug!(command = %name, "Dispatching command");
                (route.handler)(session, args)
            }
            None => {
                warn!(command = %name, "Unknown command");
                Err(SerenaError::UnknownCommand(name))
            }
        }
    }
}
