//! Bounded-wait subprocess execution
//!
//! Output pipes are drained on helper threads so a chatty child cannot stall
//! on a full pipe while we poll for its exit.

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program is not on PATH (or the given path does not exist)
    #[error("{program} was not found")]
    NotFound { program: String },

    /// The wait ceiling elapsed; the child was killed
    #[error("{program} did not finish within {}s", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Captured result of a finished process
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run `program args..` and wait at most `timeout` for it to exit and close
/// its output pipes.
///
/// The ceiling covers the whole call: a background process that inherited
/// stdout or stderr and outlives the child also counts as a timeout.
pub fn run_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<ProcessOutput, ProcessError> {
    tracing::debug!(program, ?args, timeout_secs = timeout.as_secs(), "spawning");

    // `None` when the ceiling is too large to represent; such a wait is unbounded
    let deadline = Instant::now().checked_add(timeout);
    let io_err = |source: io::Error| ProcessError::Io {
        program: program.to_string(),
        source,
    };
    let timed_out = || ProcessError::TimedOut {
        program: program.to_string(),
        timeout,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ProcessError::NotFound {
                program: program.to_string(),
            },
            _ => io_err(source),
        })?;

    let (tx, rx) = mpsc::channel();
    let mut pending = 0;
    if let Some(pipe) = child.stdout.take() {
        drain(Stream::Stdout, pipe, tx.clone());
        pending += 1;
    }
    if let Some(pipe) = child.stderr.take() {
        drain(Stream::Stderr, pipe, tx.clone());
        pending += 1;
    }
    drop(tx);

    let status = match wait_until(&mut child, deadline) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            tracing::debug!(program, "killed after timeout");
            return Err(timed_out());
        }
        Err(source) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(io_err(source));
        }
    };

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    for _ in 0..pending {
        let received = match deadline {
            Some(deadline) => rx
                .recv_timeout(deadline.saturating_duration_since(Instant::now())),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok((Stream::Stdout, bytes)) => stdout = bytes,
            Ok((Stream::Stderr, bytes)) => stderr = bytes,
            Err(RecvTimeoutError::Timeout) => {
                tracing::debug!(program, "output still open after exit");
                return Err(timed_out());
            }
            // A reader thread died; keep whatever arrived
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let output = ProcessOutput {
        status,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    };
    tracing::debug!(program, status = ?output.status.code(), "finished");
    Ok(output)
}

/// Poll until the child exits or the deadline passes (`Ok(None)`).
fn wait_until(child: &mut Child, deadline: Option<Instant>) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn drain<R: Read + Send + 'static>(stream: Stream, mut pipe: R, tx: Sender<(Stream, Vec<u8>)>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send((stream, buf));
    });
}
