//! Core statistical operations over depth-level samples
//!
//! Reductions only see valid samples; a sequence with none yields `None`
//! rather than zero or NaN.

use crate::profile::Samples;

/// Supported reductions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOperation {
    /// Arithmetic mean
    Mean,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
}

impl StatOperation {
    /// Get the string representation of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Min => "minimum",
            Self::Max => "maximum",
        }
    }
}

/// Types that can be reduced to a single value over their valid samples
pub trait SampleReduction {
    /// Reduce the valid samples, `None` if there are none
    fn reduce(&self, operation: StatOperation) -> Option<f64>;

    fn mean(&self) -> Option<f64> {
        self.reduce(StatOperation::Mean)
    }
}

impl SampleReduction for Samples {
    fn reduce(&self, operation: StatOperation) -> Option<f64> {
        // accumulate in f64 to avoid precision loss on long profiles
        let mut values = self.valid().map(f64::from);
        let first = values.next()?;
        let (acc, count) = values.fold((first, 1_u32), |(acc, count), x| {
            let acc = match operation {
                StatOperation::Mean => acc + x,
                StatOperation::Min => acc.min(x),
                StatOperation::Max => acc.max(x),
            };
            (acc, count + 1)
        });

        Some(match operation {
            StatOperation::Mean => acc / f64::from(count),
            StatOperation::Min | StatOperation::Max => acc,
        })
    }
}
