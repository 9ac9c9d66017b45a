use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::Serialize;
use std::fmt::Display;

pub const TOTAL_STEPS: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive, Serialize)]
#[repr(u8)]
pub enum WizardStep {
    PersonalInfo = 1,
    Location = 2,
    PropertyDetails = 3,
    AdditionalInfo = 4,
}

/// What pressing "next" on a step leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Step(WizardStep),
    Submit,
}

impl WizardStep {
    pub fn first() -> Self {
        WizardStep::PersonalInfo
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        FromPrimitive::from_u8(index)
    }

    pub fn is_last(self) -> bool {
        self.index() == TOTAL_STEPS
    }

    pub fn next(self) -> StepOutcome {
        match Self::from_index(self.index() + 1) {
            Some(step) => StepOutcome::Step(step),
            None => StepOutcome::Submit,
        }
    }

    /// Stays put on the first step.
    pub fn prev(self) -> Self {
        Self::from_index(self.index() - 1).unwrap_or(self)
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Location => "Location",
            WizardStep::PropertyDetails => "Property Details",
            WizardStep::AdditionalInfo => "Additional Info",
        }
    }

    pub fn action_label(self) -> &'static str {
        if self.is_last() {
            "Generate Report"
        } else {
            "Next"
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {}/{} ({})", self.index(), TOTAL_STEPS, self.label())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn walk_forward() {
        let mut step = WizardStep::first();
        let mut visited = vec![step];
        while let StepOutcome::Step(next) = step.next() {
            step = next;
            visited.push(step);
        }
        assert_eq!(
            visited,
            vec![WizardStep::PersonalInfo, WizardStep::Location, WizardStep::PropertyDetails, WizardStep::AdditionalInfo]
        );
        assert_eq!(step.next(), StepOutcome::Submit);
    }

    #[test]
    fn prev_clamps_at_first() {
        assert_eq!(WizardStep::PersonalInfo.prev(), WizardStep::PersonalInfo);
        assert_eq!(WizardStep::AdditionalInfo.prev(), WizardStep::PropertyDetails);
    }

    #[test]
    fn indices() {
        assert_eq!(WizardStep::from_index(0), None);
        assert_eq!(WizardStep::from_index(3), Some(WizardStep::PropertyDetails));
        assert_eq!(WizardStep::from_index(5), None);
        assert_eq!(WizardStep::AdditionalInfo.action_label(), "Generate Report");
        assert_eq!(WizardStep::Location.action_label(), "Next");
    }
}
