use crate::{AppResult, NotificationStore, Notifier, VolumeCommand, config::NotificationConfig};

use volume_notify_core::{
    Mixer, StreamLister, VolumeDelta, adjust_sinks, current_volume, format_volume,
};

use tracing::{info, instrument};

/// Ties the mixer, stream listing and notification backends together.
pub struct App<M, L, N> {
    pub(crate) mixer: M,
    pub(crate) streams: L,
    pub(crate) notifier: N,
    pub(crate) store: NotificationStore,
    pub(crate) notification: NotificationConfig,
    pub(crate) step: u32,
}

impl<M: Mixer, L: StreamLister, N: Notifier> App<M, L, N> {
    /// Execute one command to completion.
    #[instrument(skip(self))]
    pub(crate) fn run(&self, command: VolumeCommand) -> AppResult<()> {
        match command {
            VolumeCommand::Up => {
                adjust_sinks(&self.mixer, VolumeDelta::raise(self.step))?;
                self.notify_volume()
            }
            VolumeCommand::Down => {
                adjust_sinks(&self.mixer, VolumeDelta::lower(self.step))?;
                self.notify_volume()
            }
            VolumeCommand::GetInputs => {
                print_ids(&self.streams.list_sink_inputs()?);
                Ok(())
            }
            VolumeCommand::GetOutputs => {
                print_ids(&self.streams.list_source_outputs()?);
                Ok(())
            }
        }
    }

    /// Show the current volume, replacing the previous notification.
    #[instrument(skip(self))]
    pub(crate) fn notify_volume(&self) -> AppResult<()> {
        let volume = current_volume(&self.mixer)?;
        let body = format_volume(volume);

        let previous = self.store.load_last_id();
        let id = self
            .notifier
            .show("", &body, previous, self.notification.timeout())?;

        self.store.save_last_id(id)?;

        info!(%body, %id, replaced = ?previous, "Volume notification shown");

        Ok(())
    }
}

fn print_ids(ids: &[u32]) {
    for id in ids {
        println!("{id}");
    }
}
