use bytesize::ByteSize;
use core::fmt;
use std::time::Duration;

/// A wrapper around [`ByteSize`] that represents throughput in bytes per second.
///
/// This type automatically appends "/s" to the display output to make it clear
/// that the value represents bytes per second throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Throughput(pub ByteSize);

impl Throughput {
    /// Creates a new [`Throughput`] from bytes per second.
    pub fn from_bytes_per_sec(bytes_per_sec: u64) -> Self {
        Self(ByteSize(bytes_per_sec))
    }

    /// Throughput of `total_bytes` processed over `elapsed`; zero if no time elapsed.
    pub fn from_elapsed(total_bytes: u64, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            Self::from_bytes_per_sec((total_bytes as f64 / secs) as u64)
        } else {
            Self::from_bytes_per_sec(0)
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}
