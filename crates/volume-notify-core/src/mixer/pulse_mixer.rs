use crate::{
    CoreResult,
    command::run_command,
    mixer::{Mixer, SinkFilter, SinkId, VolumeDelta, VolumePercent, parse_sink_list, parse_volume},
};

use tracing::{debug, instrument};

/// [`Mixer`] backed by the `pulsemixer` command line tool.
#[derive(Debug, Clone)]
pub struct PulseMixer {
    program: String,
}

impl PulseMixer {
    /// Create an adapter that invokes `program` (normally `"pulsemixer"`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Mixer for PulseMixer {
    #[instrument(skip(self))]
    fn list_sinks(&self, filter: SinkFilter) -> CoreResult<Vec<SinkId>> {
        let output = run_command(&self.program, &["--list-sinks"])?;
        let sinks = parse_sink_list(&output, filter)?;

        debug!(?sinks, "Sinks listed");

        Ok(sinks)
    }

    #[instrument(skip(self))]
    fn change_volume(&self, sink: SinkId, delta: VolumeDelta) -> CoreResult<()> {
        let id = sink.to_string();
        let delta = delta.to_string();

        run_command(&self.program, &["--id", &id, "--change-volume", &delta])?;

        Ok(())
    }

    #[instrument(skip(self))]
    fn get_volume(&self, sink: SinkId) -> CoreResult<VolumePercent> {
        let id = sink.to_string();
        let output = run_command(&self.program, &["--id", &id, "--get-volume"])?;

        parse_volume(&output)
    }
}
