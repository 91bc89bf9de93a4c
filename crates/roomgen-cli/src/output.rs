//! Output sink for generated rooms.

use roomgen_room::{write_script, RoomError, RoomParams};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Destination named by `--output-file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// `-`: standard output
    Stdout,
    File(PathBuf),
}

/// What was written by [`OutputTarget::write_room`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenRoom {
    pub bytes: usize,
    /// BLAKE3 hex digest of the script text
    pub script_hash: String,
}

/// Passes writes through while hashing the bytes that reached `inner`.
struct HashingWriter<W> {
    inner: W,
    hasher: blake3::Hasher,
}

impl<W: Write> HashingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: blake3::Hasher::new(),
        }
    }

    fn into_parts(self) -> (W, String) {
        (self.inner, self.hasher.finalize().to_hex().to_string())
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl OutputTarget {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }

    /// Validates `params`, then opens the sink and writes the room script.
    ///
    /// A file is created (or truncated) only after validation passes, so
    /// invalid parameters never leave a file behind. Flush and close errors
    /// are reported as [`RoomError::Io`].
    pub fn write_room(&self, params: &RoomParams) -> Result<WrittenRoom, RoomError> {
        params.validate()?;

        match self {
            OutputTarget::Stdout => {
                let mut sink = HashingWriter::new(io::stdout().lock());
                let bytes = write_script(params, &mut sink)?;
                let (_, script_hash) = sink.into_parts();
                Ok(WrittenRoom { bytes, script_hash })
            }
            OutputTarget::File(path) => {
                let mut sink = HashingWriter::new(BufWriter::new(File::create(path)?));
                let bytes = write_script(params, &mut sink)?;
                let (writer, script_hash) = sink.into_parts();
                let file = writer.into_inner().map_err(|e| e.into_error())?;
                file.sync_all()?;
                Ok(WrittenRoom { bytes, script_hash })
            }
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}
