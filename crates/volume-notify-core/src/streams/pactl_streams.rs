use crate::{
    CoreResult,
    command::run_command,
    streams::{SINK_INPUT_PREFIX, SOURCE_OUTPUT_PREFIX, parse_stream_ids},
};

use tracing::{debug, instrument};

/// Enumerates application streams attached to sinks and sources.
pub trait StreamLister {
    /// Ids of playback streams (sink inputs).
    fn list_sink_inputs(&self) -> CoreResult<Vec<u32>>;

    /// Ids of recording streams (source outputs).
    fn list_source_outputs(&self) -> CoreResult<Vec<u32>>;
}

/// [`StreamLister`] backed by `pactl list`.
#[derive(Debug, Clone)]
pub struct PactlStreams {
    program: String,
}

impl PactlStreams {
    /// Create an adapter that invokes `program` (normally `"pactl"`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl StreamLister for PactlStreams {
    #[instrument(skip(self))]
    fn list_sink_inputs(&self) -> CoreResult<Vec<u32>> {
        let output = run_command(&self.program, &["list", "sink-inputs"])?;
        let ids = parse_stream_ids(&output, SINK_INPUT_PREFIX);

        debug!(count = ids.len(), "Sink inputs listed");

        Ok(ids)
    }

    #[instrument(skip(self))]
    fn list_source_outputs(&self) -> CoreResult<Vec<u32>> {
        let output = run_command(&self.program, &["list", "source-outputs"])?;
        let ids = parse_stream_ids(&output, SOURCE_OUTPUT_PREFIX);

        debug!(count = ids.len(), "Source outputs listed");

        Ok(ids)
    }
}
