//! Per-invocation state handed to every command handler

use crate::output::OutputFormatter;
use rundeck_sdk::RundeckClient;
use std::io::Write;

/// API client plus output sink for one command run
pub struct CommandContext<W: Write> {
    pub client: RundeckClient,
    pub output: OutputFormatter<W>,
}

impl<W: Write> CommandContext<W> {
    pub fn new(client: RundeckClient, output: OutputFormatter<W>) -> Self {
        Self { client, output }
    }

    /// Release the output sink (tests read rendered output from it)
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}
