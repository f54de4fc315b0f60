mod pactl_streams;
mod parse;

pub(crate) use parse::{SINK_INPUT_PREFIX, SOURCE_OUTPUT_PREFIX, parse_stream_ids};

pub use pactl_streams::{PactlStreams, StreamLister};
