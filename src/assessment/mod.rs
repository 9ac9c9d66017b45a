pub mod form;
pub mod report;
pub mod session;
pub mod wizard;

pub use form::AssessmentData;
pub use report::AssessmentReport;
pub use session::{Session, SessionEvent, SessionSnapshot, View};
pub use wizard::{WizardStep, TOTAL_STEPS};
