use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info};

use crate::api::{CommandRouter, Session};
use crate::error::{Result, SerenaError};
use crate::models::{VitalsHistory, VitalsRecord};

const TITLE: &str = "Serena AI Med";
const PROMPT: &str = "serena> ";

pub fn render_dashboard(vitals: &VitalsRecord) -> String {
    format!(
        "{}\nHeart Rate: {:.1} bpm\nBP: {} mmHg\nSpO2: {:.1}%\nAlerts: {}",
        TITLE,
        vitals.heart_rate,
        vitals.blood_pressure,
        vitals.oxygen_saturation,
        vitals.alerts_summary()
    )
}

pub fn render_history(history: &VitalsHistory) -> String {
    if history.is_empty() {
        return "No vitals history available.".to_string();
    }
    let mut text = String::from("Vitals History:");
    for entry in history.iter() {
        text.push('\n');
        text.push_str(&entry.to_string());
    }
    text
}

#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    Show(String),
    Ignore,
    Quit,
}

/// Terminal front end: a periodic vitals refresh plus a command prompt, both
/// served from one thread.
pub struct Console {
    session: Session,
    router: CommandRouter,
    tick_interval: Duration,
}

impl Console {
    pub fn new(session: Session, router: CommandRouter, tick_interval: Duration) -> Self {
        Self {
            session,
            router,
            tick_interval,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Ignore;
        }
        if matches!(line.to_lowercase().as_str(), "quit" | "exit") {
            return LineOutcome::Quit;
        }
        let ticks_before = self.session.ticks();
        match self.router.dispatch(&mut self.session, line) {
            // The command moved the vitals; show the refreshed readings too.
            Ok(text) if self.session.ticks() != ticks_before => LineOutcome::Show(format!(
                "{}\n\n{}",
                render_dashboard(&self.session.state.vitals),
                text
            )),
            Ok(text) => LineOutcome::Show(text),
            Err(e) => {
                error!("Command failed: {}", e);
                LineOutcome::Show(e.to_string())
            }
        }
    }

    pub fn on_timer(&mut self) -> String {
        self.session.tick();
        info!("Medical data updated");
        render_dashboard(&self.session.state.vitals)
    }

    pub async fn run(mut self) -> Result<()> {
        let first_tick = Instant::now()
            .checked_add(self.tick_interval)
            .ok_or_else(|| SerenaError::InvalidSetting {
                key: "simulator.tick_interval_secs",
                reason: format!("{:?} is too far in the future", self.tick_interval),
            })?;
        let mut timer = interval_at(first_tick, self.tick_interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        println!("{}", render_dashboard(&self.session.state.vitals));
        println!("Ready for queries... (type 'help')");
        print_prompt();

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    println!("\n{}", self.on_timer());
                    print_prompt();
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        info!("Input closed");
                        break;
                    };
                    match self.handle_line(&line) {
                        LineOutcome::Show(text) => println!("{}", text),
                        LineOutcome::Ignore => {}
                        LineOutcome::Quit => break,
                    }
                    print_prompt();
                }
                _ = &mut shutdown => {
                    info!("Shutdown requested");
                    break;
                }
            }
        }

        info!(events = self.session.activity().len(), "Monitor stopped");
        Ok(())
    }
}

fn print_prompt() {
    use std::io::Write;
    print!("{}", PROMPT);
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAudit;
    use crate::core::VitalsSimulator;
    use crate::models::vitals::{BloodPressure, VitalAlert};

    fn console() -> Console {
        let session = Session::new(VitalsSimulator::seeded(1), Box::new(MemoryAudit::default()));
        Console::new(session, CommandRouter::default(), Duration::from_secs(60))
    }

    #[test]
    fn dashboard_lists_every_vital() {
        let vitals = VitalsRecord {
            heart_rate: 91.04,
            blood_pressure: BloodPressure {
                systolic: 132,
                diastolic: 84,
            },
            oxygen_saturation: 95.0,
            alerts: vec![VitalAlert::HighHeartRate, VitalAlert::HighBloodPressure],
        };
        assert_eq!(
            render_dashboard(&vitals),
            "Serena AI Med\nHeart Rate: 91.0 bpm\nBP: 132/84 mmHg\nSpO2: 95.0%\nAlerts: High heart rate, High blood pressure"
        );
    }

    #[test]
    fn empty_history_has_placeholder() {
        assert_eq!(
            render_history(&VitalsHistory::default()),
            "No vitals history available."
        );
    }

    #[test]
    fn quit_and_blank_lines_are_not_dispatched() {
        let mut console = console();
        assert_eq!(console.handle_line("   "), LineOutcome::Ignore);
        assert_eq!(console.handle_line("QUIT"), LineOutcome::Quit);
        assert_eq!(console.handle_line("exit"), LineOutcome::Quit);
    }

    #[test]
    fn unknown_command_is_reported_not_fatal() {
        let mut console = console();
        match console.handle_line("defibrillate now") {
            LineOutcome::Show(text) => assert!(text.contains("unknown command 'defibrillate'")),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(matches!(console.handle_line("vitals"), LineOutcome::Show(_)));
    }

    #[test]
    fn ticking_commands_show_refreshed_dashboard() {
        let mut console = console();

        let LineOutcome::Show(text) = console.handle_line("patient-education") else {
            panic!("patient-education produced no output");
        };
        let dashboard = render_dashboard(&console.session().state.vitals);
        assert!(text.starts_with(&dashboard));
        assert!(text.ends_with("low-GI diet."));

        let LineOutcome::Show(text) = console.handle_line("ask What is Mounjaro?") else {
            panic!("ask produced no output");
        };
        assert!(!text.contains("Heart Rate:"));
    }

    #[tokio::test]
    async fn oversized_interval_fails_instead_of_panicking() {
        let session = Session::new(VitalsSimulator::seeded(1), Box::new(MemoryAudit::default()));
        let console = Console::new(session, CommandRouter::default(), Duration::from_secs(u64::MAX));

        let err = console.run().await.unwrap_err();
        assert!(matches!(err, SerenaError::InvalidSetting { .. }));
    }

    #[test]
    fn timer_refresh_records_history() {
        let mut console = console();
        let dashboard = console.on_timer();
        assert!(dashboard.starts_with("Serena AI Med\nHeart Rate: "));
        assert_eq!(console.session().state.history.len(), 1);
    }
}
