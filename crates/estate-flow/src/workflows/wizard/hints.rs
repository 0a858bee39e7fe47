use super::domain::{UserRole, WizardKind};

const LISTING_HINTS: [&str; 6] = [
    "Based on your profile, apartment listings get 40% more inquiries in your area.",
    "Koramangala properties are in high demand. Consider highlighting metro connectivity.",
    "Similar 2BHK properties in this area rent for ₹25,000-35,000. Your pricing looks competitive!",
    "Properties with 8+ photos get 3x more views. Consider adding balcony and kitchen shots.",
    "Adding rent agreement and NOC documents increases credibility by 60%.",
    "Ready to publish! Your listing will be live within 24 hours after verification.",
];

const GENERIC_HINT: &str = "Fill in what you know now; you can come back to any step later.";

/// Static guidance for a step. Defined for every index, including out-of-range ones.
pub fn step_hint(kind: WizardKind, role: UserRole, step_index: usize) -> &'static str {
    match kind {
        WizardKind::Listing => LISTING_HINTS.get(step_index).copied().unwrap_or(GENERIC_HINT),
        WizardKind::Onboarding => onboarding_hint(role, step_index),
    }
}

// Personal info and location lead every onboarding schema.
fn onboarding_hint(role: UserRole, step_index: usize) -> &'static str {
    match (step_index, role.lists_property()) {
        (0, true) => {
            "We need your details to verify property ownership and create your listing profile."
        }
        (0, false) => "Your information helps property owners connect with serious inquiries.",
        (1, true) => "Properties with precise locations get 3x more inquiries.",
        (1, false) => "You can select multiple areas to see more options.",
        _ => GENERIC_HINT,
    }
}
