//! Static step catalog and the ordered validation table.
//!
//! Validity is expressed as a table mapping each step to a pure predicate
//! over the form data, so steps can be added or reordered without touching
//! any dispatch logic.

use crate::domain::entities::page::{CONTENT_MAX_LEN, TITLE_MAX_LEN, is_valid_slug};
use crate::domain::wizard::session::WizardFormData;

/// Pure validation predicate for one step.
pub type StepPredicate = fn(&WizardFormData) -> bool;

/// Static descriptor for one wizard step, immutable after definition.
#[derive(Debug, Clone, Copy)]
pub struct WizardStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    validate: StepPredicate,
}

/// The ordered step catalog.
pub static STEPS: [WizardStep; 4] = [
    WizardStep {
        id: "basic",
        title: "Basic Info",
        description: "Choose your subdomain and title",
        icon: "globe",
        validate: validate_basic,
    },
    WizardStep {
        id: "content",
        title: "Content",
        description: "Add your message and GIF",
        icon: "message-square",
        validate: validate_content,
    },
    WizardStep {
        id: "visuals",
        title: "Theme",
        description: "Choose colors and style",
        icon: "palette",
        validate: validate_visuals,
    },
    WizardStep {
        id: "preview",
        title: "Preview",
        description: "Review and submit",
        icon: "eye",
        validate: validate_preview,
    },
];

/// Validates the step at `index` against the form data.
///
/// Pure, no side effects. Out-of-range indices are invalid by default.
pub fn validate_step(index: usize, data: &WizardFormData) -> bool {
    STEPS.get(index).is_some_and(|step| (step.validate)(data))
}

fn validate_basic(data: &WizardFormData) -> bool {
    is_valid_slug(&data.slug)
        && !data.title.is_empty()
        && data.title.chars().count() <= TITLE_MAX_LEN
}

fn validate_content(data: &WizardFormData) -> bool {
    !data.content.is_empty() && data.content.chars().count() <= CONTENT_MAX_LEN
}

// Theme always has a valid default.
fn validate_visuals(_data: &WizardFormData) -> bool {
    true
}

// Preview is read-only.
fn validate_preview(_data: &WizardFormData) -> bool {
    true
}
