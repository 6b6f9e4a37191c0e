use crate::*;

/// One game, start to quit.
///
/// Owns everything that lives across frames: the round state machine, the
/// configuration, and a frame counter. Each call to [`Session::frame`] is one
/// iteration of the camera loop: resolve the hands, step the round, return
/// what to draw.
pub struct Session<O = Computer>
where
    O: Opponent,
{
    config: Config,
    round: Round<O>,
    frames: usize,
}

impl From<Config> for Session<Computer> {
    fn from(config: Config) -> Self {
        Self::new(config, Computer::from(config.cheat))
    }
}

impl<O> Session<O>
where
    O: Opponent,
{
    pub fn new(config: Config, opponent: O) -> Self {
        Self {
            config,
            round: Round::from(opponent),
            frames: 0,
        }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn round(&self) -> &Round<O> {
        &self.round
    }
    /// Frames processed so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
    /// Process already-validated hands for one frame.
    pub fn step(&mut self, hands: &[Hand]) -> Snapshot {
        let resolution = resolve(hands, self.config.proximity);
        let state = *self.round.step(resolution.gesture);
        let snapshot = Snapshot {
            frame: self.frames,
            state,
        };
        self.frames += 1;
        snapshot
    }
    /// Process one frame straight from the detector.
    pub fn frame(&mut self, frame: Frame) -> Snapshot {
        let hands = frame.hands(&self.config);
        self.step(&hands)
    }
    /// Drive the loop until the source runs dry, calling `draw` every frame.
    pub fn run<S, F>(&mut self, source: &mut S, mut draw: F) -> anyhow::Result<()>
    where
        S: Source + ?Sized,
        F: FnMut(&Snapshot) -> anyhow::Result<()>,
    {
        log::info!("session start: {}", self.config);
        while let Some(frame) = source.poll()? {
            let snapshot = self.frame(frame);
            draw(&snapshot)?;
        }
        log::info!("session over after {} frames, {}", self.frames, self.round.tally());
        Ok(())
    }
}
