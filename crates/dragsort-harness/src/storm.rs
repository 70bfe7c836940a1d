#![forbid(unsafe_code)]

//! Movement storm generator for stress testing the drag pipeline.
//!
//! Generates deterministic cursor-delta sequences matching real drag
//! behaviour at its worst: nervous hands, flick scrolls, and oscillation
//! right on a crossing threshold. Every storm is reproducible from its
//! seed.
//!
//! # Patterns
//!
//! | Pattern | Description |
//! |---------|-------------|
//! | [`StormPattern::Jitter`] | Small random deltas around the grab point |
//! | [`StormPattern::Sweep`] | Steady travel in one direction with noise |
//! | [`StormPattern::ZigZag`] | Alternating runs that cross and re-cross rows |

/// Pattern type for movement storm generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StormPattern {
    /// Small random deltas, bounded by `amplitude`.
    Jitter {
        /// Number of movement events.
        count: usize,
        /// Largest delta magnitude per event.
        amplitude: f64,
    },
    /// Steady travel: every delta has the sign of `step`, with
    /// magnitude between half and double `step`.
    Sweep {
        /// Number of movement events.
        count: usize,
        /// Base per-event travel, signed.
        step: f64,
    },
    /// Runs of one to eight events per direction, magnitude up to
    /// `span`, flipping direction between runs.
    ZigZag {
        /// Number of movement events.
        count: usize,
        /// Largest delta magnitude per event.
        span: f64,
    },
}

impl StormPattern {
    /// Human-readable pattern name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Jitter { .. } => "jitter",
            Self::Sweep { .. } => "sweep",
            Self::ZigZag { .. } => "zigzag",
        }
    }
}

/// Configuration for a movement storm.
#[derive(Debug, Clone, Copy)]
pub struct StormConfig {
    /// The pattern to generate.
    pub pattern: StormPattern,
    /// Random seed for deterministic generation.
    pub seed: u64,
}

impl StormConfig {
    /// Config with the given pattern and seed.
    #[must_use]
    pub const fn new(pattern: StormPattern, seed: u64) -> Self {
        Self { pattern, seed }
    }
}

/// Simple deterministic PRNG (xorshift64) for reproducible sequences.
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        (self.next() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[-1, 1)`.
    fn next_signed_unit(&mut self) -> f64 {
        self.next_unit() * 2.0 - 1.0
    }
}

/// Generated storm: the deltas plus metadata for logging.
pub struct MovementStorm {
    /// Per-event cursor deltas in order.
    pub deltas: Vec<f64>,
    /// Pattern name for logging.
    pub pattern_name: &'static str,
    /// Seed used for generation.
    pub seed: u64,
}

/// Generates a deterministic movement storm from config.
#[must_use]
pub fn generate_storm(config: &StormConfig) -> MovementStorm {
    let mut rng = Rng::new(config.seed);
    let deltas = match config.pattern {
        StormPattern::Jitter { count, amplitude } => generate_jitter(count, amplitude, &mut rng),
        StormPattern::Sweep { count, step } => generate_sweep(count, step, &mut rng),
        StormPattern::ZigZag { count, span } => generate_zigzag(count, span, &mut rng),
    };

    MovementStorm {
        deltas,
        pattern_name: config.pattern.name(),
        seed: config.seed,
    }
}

fn generate_jitter(count: usize, amplitude: f64, rng: &mut Rng) -> Vec<f64> {
    (0..count)
        .map(|_| rng.next_signed_unit() * amplitude)
        .collect()
}

fn generate_sweep(count: usize, step: f64, rng: &mut Rng) -> Vec<f64> {
    (0..count)
        .map(|_| step * (0.5 + 1.5 * rng.next_unit()))
        .collect()
}

fn generate_zigzag(count: usize, span: f64, rng: &mut Rng) -> Vec<f64> {
    let mut deltas = Vec::with_capacity(count);
    let mut sign = 1.0;
    while deltas.len() < count {
        let run = (rng.next() % 8) as usize + 1;
        for _ in 0..run {
            if deltas.len() == count {
                break;
            }
            deltas.push(sign * span * rng.next_unit());
        }
        sign = -sign;
    }
    deltas
}
