//! Command handlers. Each one mirrors a bedside action: it may advance the
//! simulation, consults the knowledge base or history, records activity and
//! writes the audit trail.

use tracing::info;

use crate::api::session::Session;
use crate::error::{Result, SerenaError};
use crate::ui::console;

/// Common preamble of the button-style actions: note the activation, advance
/// the simulation, then refresh the dashboard readings (which advances it once
/// more) before the action runs.
fn activate(session: &mut Session, label: &str) {
    session.note(format!("{} activated", label));
    session.tick();
    session.tick();
    info!(action = label, "Medical data updated");
}

fn finish(session: &Session, label: &str) {
    session.audit(label, &format!("{} activated", label));
}

pub fn patient_education(session: &mut Session, _args: &str) -> Result<String> {
    const LABEL: &str = "Patient Education";
    activate(session, LABEL);

    let command = session.profile().education_query();
    let response = session.respond(&command);
    session.note(format!("Command: {}\nResponse: {}", command, response));
    session.audit(&command, &response);

    finish(session, LABEL);
    Ok(response)
}

pub fn vitals_history(session: &mut Session, _args: &str) -> Result<String> {
    const LABEL: &str = "Vitals History";
    activate(session, LABEL);

    let text = console::render_history(&session.state.history);
    session.note("Viewed vitals history");
    session.audit("Vitals history", "Displayed vitals history");

    finish(session, LABEL);
    Ok(text)
}

pub fn vitals(session: &mut Session, args: &str) -> Result<String> {
    match args {
        "json" => Ok(serde_json::to_string_pretty(&session.state)?),
        _ => Ok(console::render_dashboard(&session.state.vitals)),
    }
}

pub fn ask(session: &mut Session, args: &str) -> Result<String> {
    if args.is_empty() {
        return Err(SerenaError::MissingArgument {
            command: "ask".to_string(),
            usage: "ask <question>",
        });
    }

    let response = session.respond(args);
    session.note(format!("Command: {}\nResponse: {}", args, response));
    session.audit(args, &response);
    Ok(response)
}
