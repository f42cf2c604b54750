// Timed chart events
// Events change playback state at a time: tempo, metre, scroll speed, visibility, or mark a point.

use crate::chart::error::{DocumentError, DocumentResult, validate_time};
use crate::chart::timeline::{Tempo, TimeSignature};
use serde::{Deserialize, Serialize};

/// What a chart event changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    Tempo(Tempo),
    Metre(TimeSignature),
    /// Scroll speed multiplier
    Speed(f64),
    Visibility(bool),
    Marker(String),
}

impl EventKind {
    /// Short name of the variant, used in messages
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Tempo(_) => "tempo",
            EventKind::Metre(_) => "metre",
            EventKind::Speed(_) => "speed",
            EventKind::Visibility(_) => "visibility",
            EventKind::Marker(_) => "marker",
        }
    }
}

/// A timed event, either global to the chart or local to a layer
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEvent {
    /// Time in beats
    time: f64,
    kind: EventKind,
}

impl ChartEvent {
    pub fn new(time: f64, kind: EventKind) -> DocumentResult<Self> {
        Ok(Self {
            time: validate_time(time)?,
            kind,
        })
    }

    /// Tempo change at `time`
    pub fn tempo(time: f64, bpm: f64) -> DocumentResult<Self> {
        Self::new(time, EventKind::Tempo(Tempo::new(bpm)?))
    }

    /// Metre change at `time`
    pub fn metre(time: f64, numerator: u8, denominator: u8) -> DocumentResult<Self> {
        Self::new(
            time,
            EventKind::Metre(TimeSignature::new(numerator, denominator)?),
        )
    }

    /// Speed change at `time`
    pub fn speed(time: f64, multiplier: f64) -> DocumentResult<Self> {
        Self::new(time, EventKind::Speed(validate_speed(multiplier)?))
    }

    /// Marker at `time`
    pub fn marker(time: f64, label: impl Into<String>) -> DocumentResult<Self> {
        Self::new(time, EventKind::Marker(label.into()))
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) -> DocumentResult<()> {
        self.time = validate_time(time)?;
        Ok(())
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    fn mismatch(&self, expected: &'static str) -> DocumentError {
        DocumentError::EventKindMismatch {
            expected,
            actual: self.kind.name(),
        }
    }

    pub fn tempo_bpm(&self) -> DocumentResult<f64> {
        match &self.kind {
            EventKind::Tempo(tempo) => Ok(tempo.bpm()),
            _ => Err(self.mismatch("tempo")),
        }
    }

    pub fn set_tempo_bpm(&mut self, bpm: f64) -> DocumentResult<()> {
        let actual = self.kind.name();
        match &mut self.kind {
            EventKind::Tempo(tempo) => {
                *tempo = Tempo::new(bpm)?;
                Ok(())
            }
            _ => Err(DocumentError::EventKindMismatch {
                expected: "tempo",
                actual,
            }),
        }
    }

    pub fn time_signature(&self) -> DocumentResult<TimeSignature> {
        match &self.kind {
            EventKind::Metre(ts) => Ok(*ts),
            _ => Err(self.mismatch("metre")),
        }
    }

    pub fn set_metre(&mut self, time_signature: TimeSignature) -> DocumentResult<()> {
        let actual = self.kind.name();
        match &mut self.kind {
            EventKind::Metre(ts) => {
                *ts = time_signature;
                Ok(())
            }
            _ => Err(DocumentError::EventKindMismatch {
                expected: "metre",
                actual,
            }),
        }
    }

    pub fn speed_multiplier(&self) -> DocumentResult<f64> {
        match &self.kind {
            EventKind::Speed(multiplier) => Ok(*multiplier),
            _ => Err(self.mismatch("speed")),
        }
    }

    pub fn set_speed(&mut self, value: f64) -> DocumentResult<()> {
        let actual = self.kind.name();
        match &mut self.kind {
            EventKind::Speed(multiplier) => {
                *multiplier = validate_speed(value)?;
                Ok(())
            }
            _ => Err(DocumentError::EventKindMismatch {
                expected: "speed",
                actual,
            }),
        }
    }

    pub fn visible(&self) -> DocumentResult<bool> {
        match &self.kind {
            EventKind::Visibility(visible) => Ok(*visible),
            _ => Err(self.mismatch("visibility")),
        }
    }

    pub fn set_visible(&mut self, value: bool) -> DocumentResult<()> {
        let actual = self.kind.name();
        match &mut self.kind {
            EventKind::Visibility(visible) => {
                *visible = value;
                Ok(())
            }
            _ => Err(DocumentError::EventKindMismatch {
                expected: "visibility",
                actual,
            }),
        }
    }

    pub fn marker_label(&self) -> DocumentResult<String> {
        match &self.kind {
            EventKind::Marker(label) => Ok(label.clone()),
            _ => Err(self.mismatch("marker")),
        }
    }

    pub fn set_marker_label(&mut self, value: String) -> DocumentResult<()> {
        let actual = self.kind.name();
        match &mut self.kind {
            EventKind::Marker(label) => {
                *label = value;
                Ok(())
            }
            _ => Err(DocumentError::EventKindMismatch {
                expected: "marker",
                actual,
            }),
        }
    }
}

fn validate_speed(multiplier: f64) -> DocumentResult<f64> {
    if multiplier.is_finite() {
        Ok(multiplier)
    } else {
        Err(DocumentError::InvalidSpeed(multiplier))
    }
}
