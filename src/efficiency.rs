use crate::config::*;
use std::fmt;
use thiserror::Error;

/// Rejected input, naming the field and the range it must fall in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be in {min}..={max}, got {value}")]
pub struct InputError {
    pub field: InputField,
    pub value: u8,
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    EnduranceLevel,
    Control,
    Complexity,
    StatLevel,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::EnduranceLevel => "Endurance Level",
            InputField::Control => "Control",
            InputField::Complexity => "Complexity",
            InputField::StatLevel => "Stat Level",
        };
        f.write_str(name)
    }
}

impl InputField {
    /// Allowed (min, max) for this field, inclusive
    pub fn range(self) -> (u8, u8) {
        match self {
            InputField::EnduranceLevel => (ENDURANCE_LEVEL_MIN, ENDURANCE_LEVEL_MAX),
            InputField::Control | InputField::Complexity => (ATTRIBUTE_MIN, ATTRIBUTE_MAX),
            InputField::StatLevel => (STAT_LEVEL_MIN, STAT_LEVEL_MAX),
        }
    }

    fn check(self, value: u8) -> Result<u8, InputError> {
        let (min, max) = self.range();
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(InputError {
                field: self,
                value,
                min,
                max,
            })
        }
    }
}

/// The four slider values that fully determine a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inputs {
    endurance_level: u8,
    control: u8,
    complexity: u8,
    stat_level: u8,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            endurance_level: DEFAULT_ENDURANCE_LEVEL,
            control: DEFAULT_CONTROL,
            complexity: DEFAULT_COMPLEXITY,
            stat_level: DEFAULT_STAT_LEVEL,
        }
    }
}

impl Inputs {
    pub fn new(
        endurance_level: u8,
        control: u8,
        complexity: u8,
        stat_level: u8,
    ) -> Result<Self, InputError> {
        Ok(Self {
            endurance_level: InputField::EnduranceLevel.check(endurance_level)?,
            control: InputField::Control.check(control)?,
            complexity: InputField::Complexity.check(complexity)?,
            stat_level: InputField::StatLevel.check(stat_level)?,
        })
    }

    pub fn endurance_level(&self) -> u8 {
        self.endurance_level
    }

    pub fn control(&self) -> u8 {
        self.control
    }

    pub fn complexity(&self) -> u8 {
        self.complexity
    }

    pub fn stat_level(&self) -> u8 {
        self.stat_level
    }

    pub fn get(&self, field: InputField) -> u8 {
        match field {
            InputField::EnduranceLevel => self.endurance_level,
            InputField::Control => self.control,
            InputField::Complexity => self.complexity,
            InputField::StatLevel => self.stat_level,
        }
    }

    /// Copy with one field replaced, validated like `new`
    pub fn with(self, field: InputField, value: u8) -> Result<Self, InputError> {
        let value = field.check(value)?;
        let mut next = self;
        match field {
            InputField::EnduranceLevel => next.endurance_level = value,
            InputField::Control => next.control = value,
            InputField::Complexity => next.complexity = value,
            InputField::StatLevel => next.stat_level = value,
        }
        Ok(next)
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive.
///
/// Each value is `start + i * step`; the last one is pinned to `end` so the
/// endpoints are exact.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Endurance pool for a level, interpolated on the fixed 20..=520 scale
pub fn endurance_pool(endurance_level: u8) -> f64 {
    let scale = linspace(MIN_ENDURANCE_POOL, MAX_ENDURANCE_POOL, ENDURANCE_STEPS);
    scale[usize::from(endurance_level)]
}

/// Fraction of the pool usable at this control / complexity pairing
pub fn control_complexity_multiplier(control: u8, complexity: u8) -> f64 {
    if control >= complexity {
        1.0
    } else {
        f64::from(control) / f64::from(complexity.max(1))
    }
}

/// Output-power axis: evenly spaced from 1 to the stat level
pub fn output_samples(stat_level: u8) -> Vec<f64> {
    linspace(MIN_OUTPUT, f64::from(stat_level), OUTPUT_SAMPLE_COUNT)
}

/// Uses possible at each output sample; zero where the sample is not positive
pub fn uses_curve(adjusted_pool: f64, outputs: &[f64]) -> Vec<f64> {
    outputs
        .iter()
        .map(|&output| {
            if output > 0.0 {
                adjusted_pool / output
            } else {
                0.0
            }
        })
        .collect()
}
