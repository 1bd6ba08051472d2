// src/commands/activity.rs

use clap::Parser;
use std::{error::Error, io::Write};

use crate::services::github::EventSource;

#[derive(Parser, Debug)]
#[command(name = "github_activity", about = "Show a GitHub user's recent public activity")]
pub struct ActivityCli {
    /// GitHub username
    pub username: String,
}

pub async fn execute_command<W: Write>(
    source: &dyn EventSource,
    username: &str,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let events = source.fetch_events(username).await?;

    if events.is_empty() {
        writeln!(output, "No recent activity found for {}", username)?;
        return Ok(());
    }

    for line in events.iter().filter_map(|event| event.describe()) {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
