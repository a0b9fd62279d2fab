//! One-shot reveal animation driven by viewport visibility.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// A single visibility sample for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    /// Fraction of the element's box inside the viewport, 0.0..=1.0.
    pub ratio: f64,
}

impl Visibility {
    pub const HIDDEN: Self = Self {
        intersecting: false,
        ratio: 0.0,
    };
}

impl RevealState {
    /// Where a reveal starts once hydrated. Without visibility detection
    /// nothing would ever reveal it, so it starts revealed.
    pub fn initial(observable: bool) -> Self {
        if observable {
            Self::Hidden
        } else {
            Self::Revealed
        }
    }

    /// Revealed is terminal.
    pub fn observe(self, sample: Visibility, threshold: f64) -> Self {
        match self {
            Self::Revealed => Self::Revealed,
            Self::Hidden if sample.intersecting && sample.ratio >= threshold => Self::Revealed,
            Self::Hidden => Self::Hidden,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMotion {
    pub offset_px: u32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub threshold: f64,
}

impl RevealMotion {
    pub const SECTION: Self = Self {
        offset_px: 24,
        duration_ms: 500,
        delay_ms: 0,
        threshold: 0.3,
    };

    pub const ITEM: Self = Self {
        offset_px: 16,
        duration_ms: 500,
        delay_ms: 0,
        threshold: 0.0,
    };

    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            delay_ms: index.saturating_mul(step_ms),
            ..self
        }
    }

    pub fn style(&self, state: RevealState) -> String {
        let (opacity, offset) = match state {
            RevealState::Hidden => (0, self.offset_px),
            RevealState::Revealed => (1, 0),
        };
        let timing = format!("{}ms ease-out {}ms", self.duration_ms, self.delay_ms);
        format!(
            "opacity:{opacity};transform:translateY({offset}px);transition:opacity {timing},transform {timing}"
        )
    }
}

impl Default for RevealMotion {
    fn default() -> Self {
        Self::ITEM
    }
}
