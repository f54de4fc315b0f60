mod pulse_mixer;
mod types;
mod volume;
