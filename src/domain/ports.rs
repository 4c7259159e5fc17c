use crate::domain::person::Profile;

/// Capabilities shared by everyone on the campus roll.
///
/// The base [`Profile`] implements this with a zero payment; variants override
/// `display_details` and `calculate_payment`.
pub trait Person {
    fn profile(&self) -> &Profile;

    /// Short label used in logs and reports.
    fn role(&self) -> &'static str {
        "person"
    }

    fn display_details(&self) -> String {
        self.profile().summary()
    }

    fn calculate_payment(&self) -> f64 {
        0.0
    }
}
