use super::{
    form::AssessmentData,
    report::AssessmentReport,
    wizard::{StepOutcome, WizardStep},
};
use crate::{error::AppError, estimation::ClimateConstants};
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, info};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum View {
    #[default]
    Landing,
    Assessment {
        step: WizardStep,
        form: Box<AssessmentData>,
    },
    Results {
        form: Box<AssessmentData>,
        report: Box<AssessmentReport>,
    },
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Assessment { .. } => "assessment",
            View::Results { .. } => "results",
        }
    }

    fn fresh_assessment() -> Self {
        View::Assessment { step: WizardStep::first(), form: Box::default() }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Assessment { step, .. } => write!(f, "assessment {}", step),
            other => f.write_str(other.name()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    StartAssessment,
    Next,
    Prev,
    Submit,
    UpdateForm(Box<AssessmentData>),
    BackToLanding,
    BackToForm,
}

impl Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let event = match self {
            SessionEvent::StartAssessment => "start",
            SessionEvent::Next => "next",
            SessionEvent::Prev => "prev",
            SessionEvent::Submit => "submit",
            SessionEvent::UpdateForm(_) => "update-form",
            SessionEvent::BackToLanding => "landing",
            SessionEvent::BackToForm => "form",
        };
        f.write_str(event)
    }
}

impl std::str::FromStr for SessionEvent {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "start" => Ok(SessionEvent::StartAssessment),
            "next" => Ok(SessionEvent::Next),
            "prev" => Ok(SessionEvent::Prev),
            "submit" => Ok(SessionEvent::Submit),
            "landing" => Ok(SessionEvent::BackToLanding),
            "form" => Ok(SessionEvent::BackToForm),
            _ => Err("Invalid session event"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub view: &'static str,
    pub step: Option<u8>,
    pub step_label: Option<&'static str>,
    pub action_label: Option<&'static str>,
    pub form: Option<AssessmentData>,
    pub report: Option<AssessmentReport>,
}

/// One user's walk through landing -> assessment -> results. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub view: View,
    pub climate: ClimateConstants,
}

impl Session {
    pub fn new(climate: ClimateConstants) -> Self {
        Self { view: View::Landing, climate }
    }

    pub fn handle_event(&mut self, event: SessionEvent) -> Result<&View, AppError> {
        let view = std::mem::take(&mut self.view);
        let next = match (view, event) {
            (View::Landing, SessionEvent::StartAssessment) => Ok(View::fresh_assessment()),

            (View::Assessment { step, form }, SessionEvent::Next) => match step.next() {
                StepOutcome::Step(next) => Ok(View::Assessment { step: next, form }),
                StepOutcome::Submit => Ok(self.trans_results(form)),
            },
            (View::Assessment { form, .. }, SessionEvent::Submit) => Ok(self.trans_results(form)),
            (View::Assessment { step, form }, SessionEvent::Prev) => Ok(View::Assessment { step: step.prev(), form }),
            (View::Assessment { step, .. }, SessionEvent::UpdateForm(form)) => Ok(View::Assessment { step, form }),
            (View::Assessment { .. }, SessionEvent::BackToLanding) => Ok(View::Landing),

            // the form is remounted from scratch when coming back from the results
            (View::Results { .. }, SessionEvent::BackToForm) => Ok(View::fresh_assessment()),

            (view, event) => Err((view, event)),
        };
        match next {
            Ok(view) => {
                info!(view = %view, "Session transition.");
                self.view = view;
                Ok(&self.view)
            }
            Err((view, event)) => {
                debug!(view = %view, event = %event, "Event ignored in current view.");
                let err = AppError::invalid_transition(view.name(), &event);
                self.view = view;
                Err(err)
            }
        }
    }

    fn trans_results(&self, form: Box<AssessmentData>) -> View {
        let report = AssessmentReport::build(&form, &self.climate);
        View::Results { form, report: Box::new(report) }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        match &self.view {
            View::Landing => SessionSnapshot {
                view: self.view.name(),
                step: None,
                step_label: None,
                action_label: None,
                form: None,
                report: None,
            },
            View::Assessment { step, form } => SessionSnapshot {
                view: self.view.name(),
                step: Some(step.index()),
                step_label: Some(step.label()),
                action_label: Some(step.action_label()),
                form: Some(form.as_ref().clone()),
                report: None,
            },
            View::Results { form, report } => SessionSnapshot {
                view: self.view.name(),
                step: None,
                step_label: None,
                action_label: None,
                form: Some(form.as_ref().clone()),
                report: Some(report.as_ref().clone()),
            },
        }
    }
}
