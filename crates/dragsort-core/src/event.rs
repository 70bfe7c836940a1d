#![forbid(unsafe_code)]

//! Canonical input samples and the pointer/touch normalizer.
//!
//! # Design
//!
//! Hosts deliver raw input as an [`InputSample`] tagged union. The engine
//! never consumes samples directly; a [`SampleNormalizer`] collapses both
//! sample families into [`NormalizedInput`], the single
//! `(cursor position, movement delta)` shape the reorder core understands:
//!
//! - Pointer samples carry a device-reported relative motion
//!   (`movement_y`), which passes through unchanged.
//! - Touch samples carry only absolute positions, so the normalizer derives
//!   the delta from the previous sample of the same touch. The previous
//!   position is seeded at touch-down, making the first move a true small
//!   delta rather than a jump from zero.
//!
//! Which row was pressed is resolved by the host (hit testing is
//! presentation structure); the normalizer only reports that a press
//! happened and at what position, via [`NormalizedInput::Press`].

use bitflags::bitflags;
use web_time::Instant;

bitflags! {
    /// Keyboard modifiers active when a sample was captured.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT = 0b0010;
        /// Control key.
        const CTRL = 0b0100;
        /// Meta/Command key.
        const META = 0b1000;
    }
}

impl Modifiers {
    /// Whether shift is held.
    #[must_use]
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Whether any modifier is held.
    #[must_use]
    pub const fn any(self) -> bool {
        !self.is_empty()
    }
}

/// Which pointer button produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button (usually left).
    Primary,
    /// Middle button or wheel press.
    Auxiliary,
    /// Secondary button (usually right).
    Secondary,
}

impl PointerButton {
    /// Map a web-style button index (0, 1, 2) to a button.
    #[must_use]
    pub const fn from_button_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Lifecycle phase of a sample within one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplePhase {
    /// Contact began.
    Down,
    /// Contact moved.
    Move,
    /// Contact ended normally.
    Up,
    /// Contact was taken away by the platform.
    Cancel,
}

impl SamplePhase {
    /// Whether this phase ends the gesture.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// One finger's position within a touch sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform identifier for the finger, stable across its samples.
    pub id: u64,
    /// Horizontal page coordinate.
    pub page_x: f64,
    /// Vertical page coordinate.
    pub page_y: f64,
}

impl TouchPoint {
    /// Create a touch point.
    #[must_use]
    pub const fn new(id: u64, page_x: f64, page_y: f64) -> Self {
        Self { id, page_x, page_y }
    }
}

// ── Samples ─────────────────────────────────────────────────────────────

/// A mouse or pen sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Gesture phase.
    pub phase: SamplePhase,
    /// Horizontal page coordinate.
    pub page_x: f64,
    /// Vertical page coordinate.
    pub page_y: f64,
    /// Device-reported vertical motion since the previous sample.
    pub movement_y: f64,
    /// Button held for this sample.
    pub button: PointerButton,
    /// Active keyboard modifiers.
    pub modifiers: Modifiers,
    /// Capture time.
    pub timestamp: Instant,
}

impl PointerSample {
    /// New sample with zero motion, primary button, and no modifiers.
    #[must_use]
    pub fn new(phase: SamplePhase, page_x: f64, page_y: f64) -> Self {
        Self {
            phase,
            page_x,
            page_y,
            movement_y: 0.0,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            timestamp: Instant::now(),
        }
    }

    /// Set the reported vertical motion.
    #[must_use]
    pub fn with_movement(mut self, movement_y: f64) -> Self {
        self.movement_y = movement_y;
        self
    }

    /// Set the button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Set the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the capture time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Instant) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// A touch sample carrying the gesture's primary finger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// Gesture phase.
    pub phase: SamplePhase,
    /// Primary finger for the gesture.
    pub touch: TouchPoint,
    /// Active keyboard modifiers.
    pub modifiers: Modifiers,
    /// Capture time.
    pub timestamp: Instant,
}

impl TouchSample {
    /// New sample with no modifiers.
    #[must_use]
    pub fn new(phase: SamplePhase, touch: TouchPoint) -> Self {
        Self {
            phase,
            touch,
            modifiers: Modifiers::NONE,
            timestamp: Instant::now(),
        }
    }

    /// Set the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the capture time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Instant) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Raw input as delivered by the host, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputSample {
    /// Mouse or pen input.
    Pointer(PointerSample),
    /// Touch input.
    Touch(TouchSample),
}

impl InputSample {
    /// Gesture phase of the sample.
    #[must_use]
    pub const fn phase(&self) -> SamplePhase {
        match self {
            Self::Pointer(p) => p.phase,
            Self::Touch(t) => t.phase,
        }
    }

    /// Vertical cursor position of the sample.
    #[must_use]
    pub const fn cursor_pos(&self) -> f64 {
        match self {
            Self::Pointer(p) => p.page_y,
            Self::Touch(t) => t.touch.page_y,
        }
    }

    /// Capture time of the sample.
    #[must_use]
    pub const fn timestamp(&self) -> Instant {
        match self {
            Self::Pointer(p) => p.timestamp,
            Self::Touch(t) => t.timestamp,
        }
    }
}

// ── Normalized input ────────────────────────────────────────────────────

/// A movement sample in the shape the engine consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveInput {
    /// Vertical cursor position.
    pub cursor_pos: f64,
    /// Vertical motion since the previous sample of the gesture.
    pub movement_delta: f64,
}

impl MoveInput {
    /// Whether the sample reports no motion.
    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.movement_delta == 0.0
    }
}

/// Host input after pointer/touch differences have been erased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizedInput {
    /// Contact began at this position. The host resolves which row (if any)
    /// was pressed and forwards the grab to the engine.
    Press {
        /// Vertical cursor position of the press.
        cursor_pos: f64,
    },
    /// Contact moved.
    Move(MoveInput),
    /// Contact ended; the drag (if any) should commit.
    Release,
    /// Contact was taken away; the drag (if any) should be discarded.
    Cancel,
}

/// Stateful adapter from raw samples to [`NormalizedInput`].
///
/// The only state is the previous touch position, needed because touch
/// samples carry no relative motion. One normalizer serves one input source;
/// [`SampleNormalizer::reset`] clears it between gestures (terminal samples
/// do so automatically).
#[derive(Debug, Default)]
pub struct SampleNormalizer {
    previous_touch: Option<TouchPoint>,
}

impl SampleNormalizer {
    /// New normalizer with no touch history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous_touch: None,
        }
    }

    /// Collapse a raw sample into the engine's input shape.
    pub fn normalize(&mut self, sample: &InputSample) -> NormalizedInput {
        match sample {
            InputSample::Pointer(p) => match p.phase {
                SamplePhase::Down => {
                    // A pointer gesture supersedes any stale touch history.
                    self.previous_touch = None;
                    NormalizedInput::Press {
                        cursor_pos: p.page_y,
                    }
                }
                SamplePhase::Move => NormalizedInput::Move(MoveInput {
                    cursor_pos: p.page_y,
                    movement_delta: p.movement_y,
                }),
                SamplePhase::Up => {
                    self.previous_touch = None;
                    NormalizedInput::Release
                }
                SamplePhase::Cancel => {
                    self.previous_touch = None;
                    NormalizedInput::Cancel
                }
            },
            InputSample::Touch(t) => match t.phase {
                SamplePhase::Down => {
                    self.previous_touch = Some(t.touch);
                    NormalizedInput::Press {
                        cursor_pos: t.touch.page_y,
                    }
                }
                SamplePhase::Move => {
                    let delta = match self.previous_touch {
                        Some(prev) if prev.id == t.touch.id => t.touch.page_y - prev.page_y,
                        // Unknown finger: re-seed and report no motion.
                        _ => 0.0,
                    };
                    self.previous_touch = Some(t.touch);
                    NormalizedInput::Move(MoveInput {
                        cursor_pos: t.touch.page_y,
                        movement_delta: delta,
                    })
                }
                SamplePhase::Up => {
                    self.previous_touch = None;
                    NormalizedInput::Release
                }
                SamplePhase::Cancel => {
                    self.previous_touch = None;
                    NormalizedInput::Cancel
                }
            },
        }
    }

    /// Forget any touch history.
    pub fn reset(&mut self) {
        self.previous_touch = None;
    }

    /// Whether touch history is currently held.
    #[must_use]
    pub const fn has_touch_history(&self) -> bool {
        self.previous_touch.is_some()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
