//! Composite weight scoring for study subjects.
//!
//! The weight blends four signals into a single urgency score: how far a
//! subject is from full preparation, how large its syllabus is, how much
//! its exam counts, and how easy it is. The blend coefficients come from
//! the active `WeightProfile`.

use crate::api::SubjectRequest;
use crate::config::WeightProfile;

/// Upper end of the attribute scale; inverted terms subtract from this.
const ATTRIBUTE_SCALE_MAX: f64 = 100.0;

/// Compute the composite weight of a subject under a profile.
///
/// `preparation` and `difficulty` enter inverted (`100 - value`), so low
/// preparation raises the weight and, under the default profile, easier
/// subjects score slightly higher than hard ones. With attributes in
/// `[1, 100]` and the default coefficients the result lands in `[0, 100]`.
pub fn composite_weight(subject: &SubjectRequest, profile: &WeightProfile) -> f64 {
    (ATTRIBUTE_SCALE_MAX - subject.preparation) * profile.preparation_gap
        + subject.syllabus_size * profile.syllabus_size
        + subject.exam_weight * profile.exam_weight
        + (ATTRIBUTE_SCALE_MAX - subject.difficulty) * profile.ease
}

/// Raw claim a subject places on the budget: `weight * desired_days`.
///
/// A subject that asks for zero days claims nothing regardless of weight.
pub fn claim(subject: &SubjectRequest, profile: &WeightProfile) -> f64 {
    composite_weight(subject, profile) * subject.desired_days.value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudyDays;

    fn create_test_subject(
        preparation: f64,
        syllabus_size: f64,
        difficulty: f64,
        exam_weight: f64,
        desired_days: f64,
    ) -> SubjectRequest {
        SubjectRequest::new(
            "Test",
            preparation,
            syllabus_size,
            difficulty,
            exam_weight,
            StudyDays::new(desired_days),
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_composite_weight_worked_example() {
        let subject = create_test_subject(30.0, 70.0, 60.0, 80.0, 10.0);
        let weight = composite_weight(&subject, &WeightProfile::default());

        // 0.35*70 + 0.30*70 + 0.15*80 + 0.20*40
        assert_close(weight, 24.5 + 21.0 + 12.0 + 8.0);
    }

    #[test]
    fn test_weight_increases_with_lower_preparation() {
        let profile = WeightProfile::default();
        let unprepared = create_test_subject(10.0, 50.0, 50.0, 50.0, 5.0);
        let prepared = create_test_subject(90.0, 50.0, 50.0, 50.0, 5.0);

        assert!(composite_weight(&unprepared, &profile) > composite_weight(&prepared, &profile));
    }

    #[test]
    fn test_weight_favors_easier_subjects() {
        let profile = WeightProfile::default();
        let easy = create_test_subject(50.0, 50.0, 10.0, 50.0, 5.0);
        let hard = create_test_subject(50.0, 50.0, 90.0, 50.0, 5.0);

        assert!(composite_weight(&easy, &profile) > composite_weight(&hard, &profile));
    }

    #[test]
    fn test_weight_bounds_for_valid_attributes() {
        let profile = WeightProfile::default();
        let lowest = create_test_subject(100.0, 1.0, 100.0, 1.0, 5.0);
        let highest = create_test_subject(1.0, 100.0, 1.0, 100.0, 5.0);

        assert!(composite_weight(&lowest, &profile) >= 0.0);
        assert!(composite_weight(&highest, &profile) <= 100.0);
    }

    #[test]
    fn test_claim_scales_with_desired_days() {
        let profile = WeightProfile::default();
        let subject = create_test_subject(30.0, 70.0, 60.0, 80.0, 10.0);

        let weight = composite_weight(&subject, &profile);
        assert_close(claim(&subject, &profile), weight * 10.0);
    }

    #[test]
    fn test_claim_zero_when_no_days_desired() {
        let profile = WeightProfile::default();
        let subject = create_test_subject(10.0, 90.0, 20.0, 90.0, 0.0);

        assert_eq!(claim(&subject, &profile), 0.0);
    }

    #[test]
    fn test_custom_profile_changes_weight() {
        let subject = create_test_subject(30.0, 70.0, 60.0, 80.0, 10.0);
        let profile = WeightProfile {
            preparation_gap: 1.0,
            syllabus_size: 0.0,
            exam_weight: 0.0,
            ease: 0.0,
        };

        assert_close(composite_weight(&subject, &profile), 70.0);
    }

    #[test]
    fn test_identical_subjects_get_identical_weights() {
        let profile = WeightProfile::default();
        let a = create_test_subject(55.0, 45.0, 65.0, 35.0, 8.0);
        let b = create_test_subject(55.0, 45.0, 65.0, 35.0, 8.0);

        assert_eq!(composite_weight(&a, &profile), composite_weight(&b, &profile));
    }
}
