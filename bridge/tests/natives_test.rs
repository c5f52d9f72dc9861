use bridge::{BridgeError, GlobalScope, HostValue, Module, Session};

fn host() -> GlobalScope {
    let mut scope = GlobalScope::new();
    // The session only has to outlive installation for these checks.
    let _session = Session::start(Module::new(), &mut scope).expect("install");
    scope
}

fn num(n: f64) -> HostValue {
    HostValue::Number(n)
}

fn call(scope: &GlobalScope, name: &str, arg: HostValue) -> HostValue {
    scope.call(name, &[arg]).expect("call failed")
}

#[test]
fn test_all_names_installed() {
    let scope = host();
    assert_eq!(
        scope.names(),
        vec!["goFactorial", "goFibonacci", "goFindPrimes", "goStatistics", "goSumArray"]
    );
}

#[test]
fn test_page_script_names_are_callable() {
    let scope = host();
    let n = num(10.0);
    let values = HostValue::numbers(&[1.0, 2.0, 3.0]);
    assert!(scope.call("goFibonacci", &[n.clone()]).is_ok());
    assert!(scope.call("goFindPrimes", &[n.clone()]).is_ok());
    assert!(scope.call("goFactorial", &[n]).is_ok());
    assert!(scope.call("goSumArray", &[values.clone()]).is_ok());
    assert!(scope.call("goStatistics", &[values]).is_ok());

    assert!(!scope.contains("fibonacci"));
    assert!(!scope.contains("statistics"));
}

#[test]
fn test_fibonacci_values() {
    let scope = host();
    assert_eq!(call(&scope, "goFibonacci", num(0.0)), num(0.0));
    assert_eq!(call(&scope, "goFibonacci", num(1.0)), num(1.0));
    assert_eq!(call(&scope, "goFibonacci", num(10.0)), num(55.0));
    assert_eq!(call(&scope, "goFibonacci", num(20.0)), num(6765.0));
}

#[test]
fn test_fibonacci_truncates_fractional_argument() {
    let scope = host();
    assert_eq!(call(&scope, "goFibonacci", num(10.9)), num(55.0));
}

#[test]
fn test_fibonacci_negative_returned_unchanged() {
    let scope = host();
    assert_eq!(call(&scope, "goFibonacci", num(-3.0)), num(-3.0));
}

#[test]
fn test_find_primes_values() {
    let scope = host();
    assert_eq!(
        call(&scope, "goFindPrimes", num(10.0)),
        HostValue::numbers(&[2.0, 3.0, 5.0, 7.0])
    );
    assert_eq!(call(&scope, "goFindPrimes", num(1.0)), HostValue::Array(vec![]));
}

#[test]
fn test_factorial_is_decimal_text() {
    let scope = host();
    assert_eq!(call(&scope, "goFactorial", num(5.0)), HostValue::text("120"));
    assert_eq!(call(&scope, "goFactorial", num(0.0)), HostValue::text("1"));
    assert_eq!(call(&scope, "goFactorial", num(1.0)), HostValue::text("1"));
    assert_eq!(call(&scope, "goFactorial", num(-4.0)), HostValue::text("1"));
    assert_eq!(
        call(&scope, "goFactorial", num(20.0)),
        HostValue::text("2432902008176640000")
    );
}

#[test]
fn test_sum_array() {
    let scope = host();
    assert_eq!(
        call(&scope, "goSumArray", HostValue::numbers(&[1.0, 2.0, 3.0, 4.0, 5.0])),
        num(15.0)
    );
    assert_eq!(
        call(&scope, "goSumArray", HostValue::numbers(&[0.5, 1.5, 2.5])),
        num(3.0)
    );
}

#[test]
fn test_statistics_reports_variance_as_std_dev() {
    let scope = host();
    let result = call(
        &scope,
        "goStatistics",
        HostValue::numbers(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]),
    );
    assert_eq!(
        result,
        HostValue::object([("mean", num(5.0)), ("stdDev", num(4.0)), ("count", num(8.0))])
    );
}

#[test]
fn test_statistics_empty_array_is_nan() {
    let scope = host();
    let result = call(&scope, "goStatistics", HostValue::Array(vec![]));
    assert!(result.get("mean").and_then(HostValue::as_f64).unwrap().is_nan());
    assert!(result.get("stdDev").and_then(HostValue::as_f64).unwrap().is_nan());
    assert_eq!(result.get("count"), Some(&num(0.0)));
}

#[test]
fn test_repeated_calls_are_identical() {
    let scope = host();
    let cases = [
        ("goFibonacci", num(30.0)),
        ("goFindPrimes", num(50.0)),
        ("goFactorial", num(15.0)),
        ("goSumArray", HostValue::numbers(&[1.0, -2.0, 3.5])),
        ("goStatistics", HostValue::numbers(&[1.0, 2.0, 3.0])),
    ];
    for (name, arg) in cases {
        let first = call(&scope, name, arg.clone());
        let second = call(&scope, name, arg);
        assert_eq!(first, second, "{} is not idempotent", name);
    }
}

// --- Boundary faults ---

#[test]
fn test_text_where_number_expected_fails() {
    let scope = host();
    for name in ["goFibonacci", "goFindPrimes", "goFactorial"] {
        let err = scope.call(name, &[HostValue::text("10")]).unwrap_err();
        assert_eq!(
            err,
            BridgeError::TypeMismatch {
                expected: "number",
                got: "string".into()
            },
            "{}",
            name
        );
    }
}

#[test]
fn test_number_where_array_expected_fails() {
    let scope = host();
    for name in ["goSumArray", "goStatistics"] {
        let err = scope.call(name, &[num(3.0)]).unwrap_err();
        assert!(
            matches!(err, BridgeError::TypeMismatch { expected: "array", .. }),
            "{}: {:?}",
            name,
            err
        );
    }
}

#[test]
fn test_non_numeric_element_fails() {
    let scope = host();
    let arg = HostValue::Array(vec![num(1.0), HostValue::Undefined, num(3.0)]);
    let err = scope.call("goSumArray", &[arg]).unwrap_err();
    assert_eq!(err.to_string(), "type mismatch at element 1: expected number, got undefined");
}

#[test]
fn test_missing_argument_fails() {
    let scope = host();
    let err = scope.call("goStatistics", &[]).unwrap_err();
    assert_eq!(
        err,
        BridgeError::MissingArgument {
            function: "goStatistics".into(),
            index: 0
        }
    );
}

#[test]
fn test_extra_arguments_ignored() {
    let scope = host();
    let result = scope
        .call("goFibonacci", &[num(10.0), HostValue::text("ignored")])
        .unwrap();
    assert_eq!(result, num(55.0));
}
