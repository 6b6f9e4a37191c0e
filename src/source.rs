//! Where frames come from.
//!
//! The camera and the hand-landmark model live outside this crate. A
//! [`Source`] hands the game one [`Frame`] per camera frame and `None` once the
//! player quits or the stream ends.
use crate::*;
use anyhow::Context;
use std::io::BufRead;

/// A blocking stream of detector frames.
pub trait Source {
    /// Wait for the next frame. `Ok(None)` ends the session.
    fn poll(&mut self) -> anyhow::Result<Option<Frame>>;
}

/// JSON-lines reader: one frame per line, `q` or `quit` to stop.
///
/// Blank lines are skipped. A line that is not a valid frame, including one
/// that is not UTF-8, is logged and read as a frame with no hands, so one bad
/// line costs one frame.
pub struct Lines<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R> From<R> for Lines<R>
where
    R: BufRead,
{
    fn from(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<R> Source for Lines<R>
where
    R: BufRead,
{
    fn poll(&mut self) -> anyhow::Result<Option<Frame>> {
        loop {
            self.buffer.clear();
            if self.reader.read_until(b'\n', &mut self.buffer).context("read frame")? == 0 {
                return Ok(None);
            }
            match String::from_utf8_lossy(&self.buffer).trim() {
                "" => continue,
                "q" | "quit" => return Ok(None),
                line => {
                    return Ok(Some(Frame::try_from(line).unwrap_or_else(|e| {
                        log::warn!("unreadable frame: {}", e);
                        Frame::default()
                    })));
                }
            }
        }
    }
}

/// External hand-landmark detector running as a child process.
///
/// The child writes JSON-lines frames to stdout. It is killed and reaped when
/// this guard drops, whichever way the session ends. A detector streams until
/// it is stopped, so pair it with [`Watched`] to let the player quit.
pub struct Detector {
    child: std::process::Child,
    lines: Lines<std::io::BufReader<std::process::ChildStdout>>,
}

impl Detector {
    /// Spawn a program with its arguments, passed through unsplit.
    pub fn spawn<I, S>(command: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut words = command.into_iter();
        let program = words.next().context("empty detector command")?;
        let program = program.as_ref();
        log::info!("starting detector: {}", program.to_string_lossy());
        let mut child = std::process::Command::new(program)
            .args(words)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .with_context(|| format!("spawn detector {}", program.to_string_lossy()))?;
        let stdout = child.stdout.take().context("detector stdout")?;
        Ok(Self {
            child,
            lines: Lines::from(std::io::BufReader::new(stdout)),
        })
    }

    /// Kill the child if it is still running and reap it.
    pub fn stop(&mut self) -> anyhow::Result<std::process::ExitStatus> {
        // already exited is fine; wait still reaps it
        let _ = self.child.kill();
        self.child.wait().context("reap detector")
    }
}

impl Source for Detector {
    fn poll(&mut self) -> anyhow::Result<Option<Frame>> {
        self.lines.poll()
    }
}

impl Drop for Detector {
    fn drop(&mut self) {
        match self.stop() {
            Ok(status) => log::info!("detector stopped ({})", status),
            Err(e) => log::warn!("{:#}", e),
        }
    }
}

/// Ends another source once the player types `q` or `quit` on a separate input.
///
/// The input is read on its own thread, so the wrapped source keeps streaming
/// until the quit arrives. The check happens before each frame. End of input
/// does not quit. Once quit, it stays ended.
pub struct Watched<S> {
    inner: S,
    quit: std::sync::mpsc::Receiver<()>,
    done: bool,
}

impl<S> Watched<S> {
    pub fn new<R>(inner: S, input: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            for line in input.split(b'\n') {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("quit input: {}", e);
                        return;
                    }
                };
                if matches!(String::from_utf8_lossy(&line).trim(), "q" | "quit") {
                    let _ = tx.send(());
                    return;
                }
            }
        });
        Self {
            inner,
            quit: rx,
            done: false,
        }
    }
}

impl<S> Source for Watched<S>
where
    S: Source,
{
    fn poll(&mut self) -> anyhow::Result<Option<Frame>> {
        if !self.done && self.quit.try_recv().is_ok() {
            log::info!("quit requested");
            self.done = true;
        }
        match self.done {
            true => Ok(None),
            false => self.inner.poll(),
        }
    }
}

/// Prerecorded frames, played back in order.
#[derive(Debug, Clone, Default)]
pub struct Replay(std::collections::VecDeque<Frame>);

impl FromIterator<Frame> for Replay {
    fn from_iter<I: IntoIterator<Item = Frame>>(frames: I) -> Self {
        Self(frames.into_iter().collect())
    }
}

impl Source for Replay {
    fn poll(&mut self) -> anyhow::Result<Option<Frame>> {
        Ok(self.0.pop_front())
    }
}

impl<S> Source for Box<S>
where
    S: Source + ?Sized,
{
    fn poll(&mut self) -> anyhow::Result<Option<Frame>> {
        (**self).poll()
    }
}
