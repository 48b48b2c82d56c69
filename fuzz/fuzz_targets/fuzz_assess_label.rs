//! Fuzz target for label-based risk assessment.
//!
//! Arbitrary labels must never panic, and any result must agree with the
//! numeric matrix.
//!
//! Run with:
//! cargo +nightly fuzz run fuzz_assess_label -- -max_total_time=600

#![no_main]

use hazardwise_risk::{assess, assess_by_label, Likelihood, Severity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (severity, likelihood) = text.split_once('|').unwrap_or((text.as_ref(), ""));

    if let Some(result) = assess_by_label(Some(severity), Some(likelihood)) {
        let l = Likelihood::from_label(likelihood).map(Likelihood::level);
        let s = Severity::from_label(severity).map(Severity::level);
        let (Some(l), Some(s)) = (l, s) else {
            panic!("result without parsable labels");
        };
        assert_eq!(assess(l, s).ok(), Some(result.clone()));
        assert!((1..=5).contains(&result.score));
    }
});
