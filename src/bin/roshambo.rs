//! Roshambo Binary
//!
//! Plays rock-paper-scissors against the computer from hand-landmark frames.
//! Frames arrive as JSON lines from a detector subprocess, a recorded file,
//! or stdin. Type `q` on stdin (or end the stream) to quit.
//!
//! Options: --input, --cheat, --proximity, --min-confidence, --mirror, --json, --no-glyphs
//!
//! The detector command goes after `--`, with its arguments passed as given:
//! `roshambo -- python3 detect.py --camera 0`

use clap::Parser;
use roshambo::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Detector command that prints one JSON frame per line (after `--`)
    #[arg(last = true, conflicts_with = "input")]
    detector: Vec<String>,
    /// Recorded JSON-lines frames (defaults to stdin)
    #[arg(long)]
    input: Option<std::path::PathBuf>,
    /// Let the computer see your throw
    #[arg(long)]
    cheat: bool,
    /// Wrist distance below which both hands read as "thinking"
    #[arg(long, default_value_t = PROXIMITY_THRESHOLD)]
    proximity: Coordinate,
    /// Ignore hands the detector scores below this
    #[arg(long, default_value_t = MIN_CONFIDENCE)]
    min_confidence: Confidence,
    /// Detector frames are not flipped horizontally
    #[arg(long)]
    mirror: bool,
    /// Print every frame as JSON instead of status lines
    #[arg(long)]
    json: bool,
    /// Skip the move pictures
    #[arg(long)]
    no_glyphs: bool,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            proximity: args.proximity,
            cheat: args.cheat,
            min_confidence: args.min_confidence,
            mirror: args.mirror,
        }
    }
}

impl Args {
    fn source(&self) -> anyhow::Result<Box<dyn Source>> {
        use anyhow::Context;
        match (self.detector.as_slice(), &self.input) {
            ([], Some(path)) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("open {}", path.display()))?;
                Ok(Box::new(Lines::from(std::io::BufReader::new(file))))
            }
            ([], None) => Ok(Box::new(Lines::from(std::io::stdin().lock()))),
            (command, _) => {
                let detector = Detector::spawn(command)?;
                let keys = std::io::BufReader::new(std::io::stdin());
                Ok(Box::new(Watched::new(detector, keys)))
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let ref mut source = args.source()?;
    let ref mut terminal = Terminal::new(std::io::stdout().lock())
        .json(args.json)
        .glyphs(!args.no_glyphs);
    Session::from(Config::from(&args)).run(source, |snapshot| terminal.draw(snapshot))
}
