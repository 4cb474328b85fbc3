use crate::cards::{self, PreviewPayload};
use crate::cli::SelectArgs;
use anyhow::{Context, Result};

/// Handle select command - render the card a host would get back for a tap payload
pub fn handle(cmd: &SelectArgs) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(&cmd.payload).context("Payload is not valid JSON")?;
    let payload = PreviewPayload::from_value(&value)?;

    let response = cards::render_selection(&payload);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
