//! Golden file integration tests.
//!
//! Verifies formatted reports against hand-checked configurations from
//! tests/testdata/backfocus_golden.json.

use serde::Deserialize;

use backfocus_core::{
    Calculator, CalculationInputs, ComponentList, ModelRegistry, Report, Status,
};

#[derive(Deserialize)]
struct GoldenData {
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    model: String,
    telescope_backfocus: f64,
    components: Vec<(String, f64)>,
    guider_inner: f64,
    imager: f64,
    guider: f64,
    corrector: bool,
    main_status: Status,
    main_spacer_mm: String,
    main_spacer_in: String,
    total_optical_path: String,
    parfocal_spacer: String,
    parfocal_status: Status,
}

fn load_golden() -> GoldenData {
    let data = std::fs::read_to_string("tests/testdata/backfocus_golden.json")
        .or_else(|_| {
            std::fs::read_to_string("crates/backfocus-core/tests/testdata/backfocus_golden.json")
        })
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

fn run_case(case: &GoldenCase) -> Report {
    let registry = ModelRegistry::builtin();
    let model = registry.get(&case.model).unwrap();

    let mut components = ComponentList::new();
    for (name, length) in &case.components {
        components.add(name.clone(), *length);
    }

    let inputs = CalculationInputs {
        telescope_backfocus: case.telescope_backfocus,
        component_total: components.total_length(),
        guider_inner_reading: case.guider_inner,
        imager_reading: case.imager,
        guider_reading: case.guider,
        use_corrector: case.corrector,
    };
    let calc = Calculator::default();
    let outputs = calc.compute(&inputs, model);
    Report::build(&inputs, &outputs, model, calc.options())
}

#[test]
fn golden_cases() {
    let golden = load_golden();
    assert!(!golden.cases.is_empty());
    for case in &golden.cases {
        let report = run_case(case);
        assert_eq!(report.main_verdict.status, case.main_status, "{}", case.name);
        assert_eq!(report.main_spacer_mm, case.main_spacer_mm, "{}", case.name);
        assert_eq!(report.main_spacer_in, case.main_spacer_in, "{}", case.name);
        assert_eq!(
            report.total_optical_path, case.total_optical_path,
            "{}",
            case.name
        );
        assert_eq!(report.parfocal_spacer, case.parfocal_spacer, "{}", case.name);
        assert_eq!(
            report.parfocal_verdict.status, case.parfocal_status,
            "{}",
            case.name
        );
    }
}
