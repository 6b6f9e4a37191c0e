use crate::*;

/// Something that picks the computer's throw.
///
/// Called once per fresh player throw, with that throw in hand. Honest
/// opponents ignore it.
pub trait Opponent {
    fn throw(&mut self, player: Move) -> Move;
}

/// Honest opponent. Uniformly random, independent per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fish;

impl Opponent for Fish {
    fn throw(&mut self, _: Move) -> Move {
        Move::random()
    }
}

/// Cheating opponent. Always plays whatever beats the player.
#[derive(Debug, Default, Clone, Copy)]
pub struct Shark;

impl Opponent for Shark {
    fn throw(&mut self, player: Move) -> Move {
        player.counter()
    }
}

/// Either opponent, chosen at runtime by the cheat flag.
#[derive(Debug, Clone, Copy)]
pub enum Computer {
    Fish(Fish),
    Shark(Shark),
}

impl From<bool> for Computer {
    fn from(cheat: bool) -> Self {
        if cheat {
            Self::Shark(Shark)
        } else {
            Self::Fish(Fish)
        }
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::from(CHEAT)
    }
}

impl Opponent for Computer {
    fn throw(&mut self, player: Move) -> Move {
        match self {
            Self::Fish(fish) => fish.throw(player),
            Self::Shark(shark) => shark.throw(player),
        }
    }
}

impl<O> Opponent for &mut O
where
    O: Opponent + ?Sized,
{
    fn throw(&mut self, player: Move) -> Move {
        (**self).throw(player)
    }
}

/// Pick the computer's move: random when honest, the counter when cheating.
pub fn choose_move(cheat: bool, player: Move) -> Move {
    Computer::from(cheat).throw(player)
}

impl std::fmt::Display for Computer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fish(_) => write!(f, "fair"),
            Self::Shark(_) => write!(f, "cheating"),
        }
    }
}
