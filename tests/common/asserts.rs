use endpoint_cors_rs::{CorsDecision, Headers, PreflightOutcome};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16, PreflightOutcome) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status, result.outcome),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> Headers {
    let (headers, status, outcome) = assert_preflight(decision);
    assert_eq!(status, 403, "expected rejected preflight, got {outcome:?}");
    assert!(matches!(outcome, PreflightOutcome::Rejected(_)));
    headers
}
