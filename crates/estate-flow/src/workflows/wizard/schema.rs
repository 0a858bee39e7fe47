use serde::Serialize;

use super::domain::{UserRole, WizardKind, WizardStep};

/// Ordered step list for one wizard and role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSchema {
    kind: WizardKind,
    role: UserRole,
    steps: Vec<WizardStep>,
}

/// Serializable step description for API and CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub index: usize,
    pub step: WizardStep,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<&'static str>,
}

impl StepSchema {
    pub fn for_role(kind: WizardKind, role: UserRole) -> Self {
        let steps = match kind {
            WizardKind::Onboarding => onboarding_steps(role),
            WizardKind::Listing => listing_steps(),
        };

        Self { kind, role, steps }
    }

    pub fn onboarding(role: UserRole) -> Self {
        Self::for_role(WizardKind::Onboarding, role)
    }

    pub fn listing(role: UserRole) -> Self {
        Self::for_role(WizardKind::Listing, role)
    }

    pub fn kind(&self) -> WizardKind {
        self.kind
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<WizardStep> {
        self.steps.get(index).copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.label()).collect()
    }

    pub fn sections(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().filter_map(|step| step.section())
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections().any(|section| section == name)
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            WizardKind::Onboarding => self.role.onboarding_title(),
            WizardKind::Listing => "List Your Property",
        }
    }

    pub fn views(&self) -> Vec<StepView> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| StepView {
                index,
                step: *step,
                label: step.label(),
                section: step.section(),
            })
            .collect()
    }
}

/// Onboarding steps for `role`.
pub fn steps_for(role: UserRole) -> Vec<WizardStep> {
    onboarding_steps(role)
}

fn onboarding_steps(role: UserRole) -> Vec<WizardStep> {
    let mut steps = vec![
        WizardStep::PersonalInfo,
        WizardStep::Location,
        WizardStep::Preferences,
    ];
    if role.lists_property() {
        steps.push(WizardStep::PropertyDetails);
    }
    steps.extend([WizardStep::Verification, WizardStep::Review]);
    steps
}

fn listing_steps() -> Vec<WizardStep> {
    vec![
        WizardStep::PropertyType,
        WizardStep::Location,
        WizardStep::ListingDetails,
        WizardStep::Images,
        WizardStep::Documents,
        WizardStep::Review,
    ]
}
