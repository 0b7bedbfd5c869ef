//! Scheme eligibility evaluation

use crate::models::{
    Criterion, CriterionMatch, EligibilityCriteria, EligibilityResult, FarmerProfile, Scheme,
};

/// Evaluate a farmer profile against one scheme's criteria.
///
/// A criterion counts as matched only when the profile attribute is present
/// and satisfies the bound. An unset profile field never matches a bound,
/// while an explicit zero does. Criteria the scheme does not define are
/// unconstrained and do not appear in the breakdown. Without a profile the
/// result is ineligible with nothing evaluated.
pub fn evaluate(
    profile: Option<&FarmerProfile>,
    criteria: &EligibilityCriteria,
) -> EligibilityResult {
    let Some(profile) = profile else {
        return EligibilityResult {
            eligible: false,
            matched: Vec::new(),
        };
    };

    let mut matched = Vec::new();

    if let Some(bound) = criteria.max_annual_income {
        matched.push(CriterionMatch {
            criterion: Criterion::MaxAnnualIncome,
            matched: matches!(profile.annual_income, Some(income) if income <= bound),
        });
    }
    if let Some(bound) = criteria.min_land_size {
        matched.push(CriterionMatch {
            criterion: Criterion::MinLandSize,
            matched: matches!(profile.land_size_acres, Some(size) if size >= bound),
        });
    }
    if let Some(bound) = criteria.max_land_size {
        matched.push(CriterionMatch {
            criterion: Criterion::MaxLandSize,
            matched: matches!(profile.land_size_acres, Some(size) if size <= bound),
        });
    }
    if let Some(bound) = criteria.min_age {
        matched.push(CriterionMatch {
            criterion: Criterion::MinAge,
            matched: matches!(profile.age, Some(age) if age >= bound),
        });
    }
    if let Some(bound) = criteria.max_age {
        matched.push(CriterionMatch {
            criterion: Criterion::MaxAge,
            matched: matches!(profile.age, Some(age) if age <= bound),
        });
    }
    if let Some(states) = &criteria.states {
        matched.push(CriterionMatch {
            criterion: Criterion::States,
            matched: states.contains(&profile.state),
        });
    }
    if let Some(required) = &criteria.required_crops {
        matched.push(CriterionMatch {
            criterion: Criterion::RequiredCrops,
            matched: profile.crops.iter().any(|crop| required.contains(crop)),
        });
    }

    EligibilityResult {
        eligible: matched.iter().all(|m| m.matched),
        matched,
    }
}

/// Filter a scheme catalog down to the schemes the profile qualifies for
pub fn eligible_schemes<'a>(
    profile: Option<&FarmerProfile>,
    schemes: &'a [Scheme],
) -> Vec<&'a Scheme> {
    schemes
        .iter()
        .filter(|scheme| evaluate(profile, &scheme.criteria).eligible)
        .collect()
}
