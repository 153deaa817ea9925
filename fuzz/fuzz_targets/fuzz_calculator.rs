#![no_main]

use libfuzzer_sys::fuzz_target;

use backfocus_core::{
    format_mm, CalculationInputs, Calculator, ModelRegistry, Report, Status,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 41 {
        return;
    }
    let value = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        f64::from_le_bytes(bytes)
    };
    let finite = |v: f64| if v.is_finite() { v } else { 0.0 };

    let inputs = CalculationInputs {
        telescope_backfocus: finite(value(0)),
        component_total: finite(value(1)),
        guider_inner_reading: finite(value(2)),
        imager_reading: finite(value(3)),
        guider_reading: finite(value(4)),
        use_corrector: data[40] & 1 == 1,
    };

    let registry = ModelRegistry::builtin();
    let calculator = Calculator::default();
    for model in registry.models() {
        // Should not panic
        let outputs = calculator.compute(&inputs, model);
        let report = Report::build(&inputs, &outputs, model, calculator.options());
        if inputs.telescope_backfocus <= 0.0 {
            assert_eq!(outputs.main_verdict.status, Status::InputRequired);
        }
        assert!(!report.main_spacer_mm.starts_with("-0.00"));
        assert_ne!(format_mm(outputs.mismatch, 1), "-0.0");
    }
});
