//! Rock-paper-scissors driven by hand-landmark gestures.
//!
//! Each frame, an external pose estimator reports up to two hands as 21
//! normalized landmarks. The core classifies the right hand into a [`Gesture`],
//! pairs it with the left hand to detect the "thinking" pose, and feeds the
//! result into a [`Round`] state machine that asks an [`Opponent`] for a move
//! on every fresh throw.

mod config;
mod fingers;
mod frame;
mod gesture;
mod hand;
mod moves;
mod opponent;
mod outcome;
mod point;
mod resolver;
mod round;
mod session;
mod side;
mod source;

#[cfg(feature = "cli")]
mod render;

pub use config::*;
pub use fingers::*;
pub use frame::*;
pub use gesture::*;
pub use hand::*;
pub use moves::*;
pub use opponent::*;
pub use outcome::*;
pub use point::*;
pub use resolver::*;
pub use round::*;
pub use session::*;
pub use side::*;
pub use source::*;

#[cfg(feature = "cli")]
pub use render::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Normalized camera-space coordinate (0..1 across the image, y grows downward).
pub type Coordinate = f32;
/// Detector confidence for a single hand.
pub type Confidence = f32;
/// Index into a hand's landmark array.
pub type Landmark = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// HAND LANDMARKS
// MediaPipe hand topology: wrist, then four joints per finger from base to tip.
// ============================================================================
/// Landmarks reported per hand.
pub const LANDMARK_COUNT: usize = 21;
/// Wrist landmark, used as the hand's anchor.
pub const WRIST: Landmark = 0;
/// Thumb (tip, joint). Compared along x.
pub const THUMB: (Landmark, Landmark) = (4, 3);
/// Index finger (tip, joint two below). Compared along y.
pub const INDEX: (Landmark, Landmark) = (8, 6);
/// Middle finger (tip, joint two below). Compared along y.
pub const MIDDLE: (Landmark, Landmark) = (12, 10);
/// Ring finger (tip, joint two below). Compared along y.
pub const RING: (Landmark, Landmark) = (16, 14);
/// Pinky (tip, joint two below). Compared along y.
pub const PINKY: (Landmark, Landmark) = (20, 18);

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Wrist-to-wrist distance below which both hands count as "thinking".
pub const PROXIMITY_THRESHOLD: Coordinate = 0.15;
/// Whether the computer peeks at the player's throw.
pub const CHEAT: bool = false;
/// Hands reported below this detector confidence are ignored.
pub const MIN_CONFIDENCE: Confidence = 0.7;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to stderr
/// so the status lines on stdout stay clean.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
