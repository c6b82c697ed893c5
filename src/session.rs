use crate::config::LookupConfig;
use crate::lookup::Lookup;
use crate::output;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Drives one run: either a fixed argument list or the interactive prompt.
pub struct Session {
    lookup: Lookup,
}

impl Session {
    pub fn new(config: LookupConfig) -> Result<Self> {
        Ok(Self {
            lookup: Lookup::new(config)?,
        })
    }

    /// Process the supplied items in order. Items are independent: a failed
    /// one has already been reported by the time the next one starts.
    pub async fn batch(&self, items: &[String]) -> Result<()> {
        for item in items {
            self.lookup.run(item).await;
        }
        Ok(())
    }

    /// Prompt until the user interrupts. The interrupt is the normal way
    /// out, not an error; it races the whole read/lookup cycle so it lands
    /// cleanly mid-lookup as well as at the prompt.
    pub async fn interactive(&self) -> Result<()> {
        tokio::select! {
            res = self.prompt_loop() => res,
            _ = tokio::signal::ctrl_c() => {
                output::farewell();
                Ok(())
            }
        }
    }

    async fn prompt_loop(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            output::prompt()?;
            let Some(line) = lines.next_line().await? else {
                debug!("stdin closed, ending session");
                return Ok(());
            };
            let item = line.trim();
            if item.is_empty() {
                continue;
            }
            self.lookup.run(item).await;
        }
    }
}
