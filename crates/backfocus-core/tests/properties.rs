//! Property-based tests for the spacer and parfocal calculator.

use proptest::prelude::*;

use backfocus_core::{
    calculate, format_mm, parse_number, CalculationInputs, ComponentList, ModelRegistry,
    OpticalModel, Status,
};

fn model(id: &str) -> OpticalModel {
    ModelRegistry::builtin().get(id).unwrap().clone()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Non-positive backfocus always asks for input, whatever else is set.
    #[test]
    fn non_positive_backfocus_requires_input(
        bf in -500.0f64..=0.0,
        components in 0.0f64..200.0,
        inner in -20.0f64..20.0,
        imager in -50.0f64..50.0,
        guider in -50.0f64..50.0,
        corrector in any::<bool>(),
        xm in any::<bool>(),
    ) {
        let inputs = CalculationInputs {
            telescope_backfocus: bf,
            component_total: components,
            guider_inner_reading: inner,
            imager_reading: imager,
            guider_reading: guider,
            use_corrector: corrector,
        };
        let out = calculate(&inputs, &model(if xm { "XM" } else { "SC" }));
        prop_assert_eq!(out.main_verdict.status, Status::InputRequired);
        prop_assert_eq!(out.parfocal_verdict.status, Status::InputRequired);
    }

    /// The main spacer shrinks as components or the inner reading grow.
    #[test]
    fn main_spacer_monotonic(
        bf in 1.0f64..500.0,
        components in 0.0f64..200.0,
        inner in 0.0f64..20.0,
        extra in 0.001f64..50.0,
    ) {
        let base = CalculationInputs {
            telescope_backfocus: bf,
            component_total: components,
            guider_inner_reading: inner,
            ..CalculationInputs::default()
        };
        let sc = model("SC");
        let spacer = calculate(&base, &sc).main_spacer;

        let more_components = CalculationInputs { component_total: components + extra, ..base.clone() };
        prop_assert!(calculate(&more_components, &sc).main_spacer < spacer);

        let more_inner = CalculationInputs { guider_inner_reading: inner + extra, ..base.clone() };
        prop_assert!(calculate(&more_inner, &sc).main_spacer < spacer);

        let bigger_model = OpticalModel { inner_backfocus: sc.inner_backfocus + extra, ..sc.clone() };
        prop_assert!(calculate(&base, &bigger_model).main_spacer < spacer);
    }

    /// The optical path never falls short of the fixed elements.
    #[test]
    fn total_path_covers_fixed_elements(
        bf in 1.0f64..500.0,
        components in 0.0f64..200.0,
        inner in 0.0f64..20.0,
    ) {
        let inputs = CalculationInputs {
            telescope_backfocus: bf,
            component_total: components,
            guider_inner_reading: inner,
            ..CalculationInputs::default()
        };
        let sc = model("SC");
        let out = calculate(&inputs, &sc);
        prop_assert!(out.total_optical_path + 1e-9 >= components + sc.inner_backfocus + inner);
    }

    /// Formatting to N digits and reading back stays within half a unit.
    #[test]
    fn rounding_round_trip(value in -10_000.0f64..10_000.0, digits in 0usize..6) {
        let text = format_mm(value, digits);
        let parsed = parse_number(&text).unwrap();
        let half_unit = 0.5 * 10f64.powi(-i32::try_from(digits).unwrap());
        prop_assert!((parsed - value).abs() <= half_unit + 1e-9, "{} -> {}", value, text);
        // Rounding is idempotent.
        prop_assert_eq!(format_mm(parsed, digits), text);
    }

    /// Adding then removing a component restores the total exactly.
    #[test]
    fn add_remove_restores_total(
        lengths in proptest::collection::vec(0.0f64..100.0, 0..8),
        extra in -100.0f64..100.0,
    ) {
        let mut list = ComponentList::new();
        for (i, len) in lengths.iter().enumerate() {
            list.add(format!("c{i}"), *len);
        }
        let before = list.total_length();
        let id = list.add("temporary", extra).id.clone();
        list.remove(&id);
        prop_assert_eq!(list.total_length().to_bits(), before.to_bits());
    }
}

/// The two built-in models are both usable.
#[test]
fn every_builtin_model_computes() {
    let registry = ModelRegistry::builtin();
    for id in registry.available() {
        let inputs = CalculationInputs {
            telescope_backfocus: 200.0,
            ..CalculationInputs::default()
        };
        let out = calculate(&inputs, registry.get(id).unwrap());
        assert!(out.main_spacer.is_finite());
    }
}
