use crate::error::AnalyzeError;

/// Work limits applied to exhaustive strategies.
///
/// Only [`RecursiveVisit`](crate::RecursiveVisit) consults these; a flood
/// fill visits each cell once and needs no budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisitLimits {
    /// Maximum number of cell visits per run. `None` is unbounded.
    pub max_visits: Option<u64>,
}

impl VisitLimits {
    /// No limit on the number of visits.
    pub const UNBOUNDED: Self = Self { max_visits: None };

    pub fn with_max_visits(mut self, max_visits: u64) -> Self {
        self.max_visits = Some(max_visits);
        self
    }

    /// Fail once `visits` exceeds the budget.
    #[inline]
    pub(crate) fn check(&self, visits: u64) -> Result<(), AnalyzeError> {
        match self.max_visits {
            Some(limit) if visits > limit => Err(AnalyzeError::ResourceExhausted { limit }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(VisitLimits::default(), VisitLimits::UNBOUNDED);
        assert!(VisitLimits::default().check(u64::MAX).is_ok());
    }

    #[test]
    fn budget_is_inclusive() {
        let l = VisitLimits::default().with_max_visits(3);
        assert!(l.check(3).is_ok());
        assert_eq!(l.check(4), Err(AnalyzeError::ResourceExhausted { limit: 3 }));
    }
}
