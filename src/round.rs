use crate::*;

/// What the player sees after a frame.
///
/// `computer` and `outcome` are sticky: once set they stay on screen until the
/// next fresh throw replaces them, even while the player's hand reads `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct RoundState {
    pub gesture: Gesture,
    pub computer: Option<Move>,
    pub outcome: Option<Outcome>,
}

/// Running score for the session. Counted once per round, at the throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub player: usize,
    pub computer: usize,
    pub ties: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Player => self.player += 1,
            Outcome::Computer => self.computer += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn rounds(&self) -> usize {
        self.player + self.computer + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: player {} / computer {} / tie {}",
            self.rounds(),
            self.player,
            self.computer,
            self.ties
        )
    }
}

/// Turns a per-frame gesture stream into rounds.
///
/// A round starts on a rising edge: a frame whose gesture is playable and
/// differs from the previous frame's. That is the only point where the
/// opponent is consulted, so a held shape never re-triggers. Passing through
/// `None` or `Thinking` re-arms, and so does switching straight to another
/// shape.
pub struct Round<O = Computer>
where
    O: Opponent,
{
    opponent: O,
    previous: Gesture,
    state: RoundState,
    tally: Tally,
    throws: usize,
}

impl<O> From<O> for Round<O>
where
    O: Opponent,
{
    fn from(opponent: O) -> Self {
        Self {
            opponent,
            previous: Gesture::None,
            state: RoundState::default(),
            tally: Tally::default(),
            throws: 0,
        }
    }
}

impl Default for Round<Computer> {
    fn default() -> Self {
        Self::from(Computer::default())
    }
}

impl<O> Round<O>
where
    O: Opponent,
{
    /// Advance one frame.
    pub fn step(&mut self, gesture: Gesture) -> &RoundState {
        let player = gesture.playable();
        if let Some(player) = player.filter(|_| gesture != self.previous) {
            let computer = self.opponent.throw(player);
            let outcome = evaluate(player, computer);
            self.throws += 1;
            self.tally.record(outcome);
            self.state.computer = Some(computer);
            log::debug!("round {}: {} vs {} → {}", self.throws, player, computer, outcome);
        }
        self.previous = gesture;
        self.state.gesture = gesture;
        if let (Some(player), Some(computer)) = (player, self.state.computer) {
            self.state.outcome = Some(evaluate(player, computer));
        }
        &self.state
    }
    pub fn state(&self) -> &RoundState {
        &self.state
    }
    /// Gesture seen on the last frame.
    pub fn previous(&self) -> Gesture {
        self.previous
    }
    /// How many times the opponent has been asked to throw.
    pub fn throws(&self) -> usize {
        self.throws
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn opponent(&self) -> &O {
        &self.opponent
    }
}
