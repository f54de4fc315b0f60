/// Usage line printed for missing or unrecognized arguments.
pub const USAGE: &str = "Usage: volume-notify <up|down|get-inputs|get-outputs>";

/// Commands accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeCommand {
    /// Raise default sinks by one step, then notify.
    Up,
    /// Lower default sinks by one step, then notify.
    Down,
    /// Print the ids of playback streams.
    GetInputs,
    /// Print the ids of recording streams.
    GetOutputs,
}

impl VolumeCommand {
    /// Parse the arguments following the program name.
    ///
    /// Exactly one recognized token is accepted; anything else is `None`.
    pub fn from_args<I, S>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let token = args.next()?;

        if args.next().is_some() {
            return None;
        }

        match token.as_ref() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "get-inputs" => Some(Self::GetInputs),
            "get-outputs" => Some(Self::GetOutputs),
            _ => None,
        }
    }
}
