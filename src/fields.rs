use tracing::debug;

/// Placeholder for the resume-builder dynamic form fields. Emits a
/// diagnostic trace and nothing else; the contract is not yet specified,
/// so no behavior should be inferred or added here.
pub fn add_experience_field() {
    debug!("adding new experience field");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_has_no_observable_behavior() {
        add_experience_field();
        add_experience_field();
    }
}
