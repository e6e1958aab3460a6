//! # Input Sources
//!
//! Turns command-line operands into byte streams and feeds them through a
//! [`Sha384`] context chunk by chunk. Memory use is one chunk buffer
//! regardless of input size.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha384_core::{Digest, Hasher};

/// Where the bytes of one message come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, written `-` on the command line.
    Stdin,
    /// A file on disk.
    Path(PathBuf),
}

impl Input {
    /// Interpret a command-line operand.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::Path(arg.to_path_buf())
        }
    }

    /// Open the input for reading.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::Path(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Ok(Box::new(file))
            }
        }
    }

    /// Hash the whole input under `hasher`'s policy, reading at most
    /// `chunk_size` bytes per call.
    pub fn digest(&self, hasher: &Hasher, chunk_size: usize) -> Result<Digest> {
        let reader = self.open()?;
        hash_reader(hasher, reader, chunk_size).with_context(|| match self {
            Self::Stdin => "failed to read stdin".to_string(),
            Self::Path(path) => format!("failed to hash {}", path.display()),
        })
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Stream `reader` into a fresh context in reads of at most `chunk_size`
/// bytes, then close it with [`Hasher::finish`].
pub fn hash_reader<R: Read>(hasher: &Hasher, mut reader: R, chunk_size: usize) -> Result<Digest> {
    let mut ctx = hasher.context();
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut chunks = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("read failed"),
        };
        ctx.update(&buf[..n])?;
        chunks += 1;
    }

    tracing::debug!(
        chunks,
        bytes = ctx.bytes_processed(),
        chunk_size,
        "input exhausted"
    );
    Ok(hasher.finish(&mut ctx)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha384_core::{EmptyInputPolicy, HashError, HasherConfig};

    /// Yields `Interrupted` before every real read.
    struct Flaky<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Flaky<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::ErrorKind::Interrupted.into());
            }
            let n = buf.len().min(self.data.len()).min(5);
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(Input::from_arg(Path::new("-")), Input::Stdin);
        assert_eq!(
            Input::from_arg(Path::new("a.txt")),
            Input::Path(PathBuf::from("a.txt"))
        );
        assert_eq!(Input::Stdin.to_string(), "-");
        assert!(Input::Stdin.open().is_ok());
    }

    #[test]
    fn chunk_size_does_not_change_the_digest() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i * 31 % 251) as u8).collect();
        let want = sha384_core::hash(&data).unwrap();
        for size in [1, 7, 128, 1000, 8192] {
            let got = hash_reader(&Hasher::default(), data.as_slice(), size).unwrap();
            assert_eq!(got, want, "chunk size {size}");
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let reader = Flaky {
            data,
            interrupt: false,
        };
        let got = hash_reader(&Hasher::default(), reader, 64).unwrap();
        assert_eq!(got, sha384_core::hash(data).unwrap());
    }

    /// Records the buffer size offered to each read.
    struct Recording<'a> {
        data: &'a [u8],
        offered: Vec<usize>,
    }

    impl Read for Recording<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.offered.push(buf.len());
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn reads_use_the_configured_chunk_size() {
        let data = [0x61u8; 10];
        let mut reader = Recording {
            data: &data,
            offered: Vec::new(),
        };
        let got = hash_reader(&Hasher::default(), &mut reader, 3).unwrap();
        assert_eq!(got, sha384_core::hash(&data).unwrap());
        // Four data reads (3+3+3+1) and the final zero-length read.
        assert_eq!(reader.offered, vec![3; 5]);
    }

    #[test]
    fn stdin_and_files_share_the_chunked_reader() {
        // `Input::open` hands stdin and files to `hash_reader` as the same
        // boxed reader type.
        let data = b"piped input";
        let boxed: Box<dyn Read> = Box::new(Recording {
            data,
            offered: Vec::new(),
        });
        let got = hash_reader(&Hasher::default(), boxed, 1).unwrap();
        assert_eq!(got, sha384_core::hash(data).unwrap());
    }

    #[test]
    fn missing_file_fails_to_open() {
        let err = Input::Path(PathBuf::from("/no/such/input"))
            .open()
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("/no/such/input"));
    }

    #[test]
    fn read_errors_propagate() {
        let err = hash_reader(&Hasher::default(), Broken, 64).unwrap_err();
        assert!(format!("{err:#}").contains("disk on fire"));
    }

    #[test]
    fn empty_reader_follows_policy() {
        let allow = hash_reader(&Hasher::default(), io::empty(), 64).unwrap();
        assert_eq!(allow, sha384_core::hash(b"").unwrap());

        let reject = Hasher::new(HasherConfig {
            empty_input: EmptyInputPolicy::Reject,
            ..HasherConfig::default()
        });
        let err = hash_reader(&reject, io::empty(), 64).unwrap_err();
        assert_eq!(err.downcast_ref::<HashError>(), Some(&HashError::EmptyInput));
    }
}
