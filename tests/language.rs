use std::fs::{self};

use matlang::{
    config::{Config, InputSource},
    evaluate_source, run,
};
use walkdir::WalkDir;

const EXPECT_PREFIX: &str = "# expect:";

#[test]
fn sample_scripts_produce_their_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "mtx"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expectation(&content).unwrap_or_else(|| {
                                                panic!("{path:?} has no '{EXPECT_PREFIX}' line")
                                            });

        count += 1;
        let result = run(&Config::new(InputSource::File(path.to_path_buf())));
        match (expected, result) {
            ("error", Err(_)) => {},
            ("error", Ok(value)) => panic!("{path:?} succeeded with {value:?}, expected an error"),
            (expected, Ok(Some(value))) => {
                assert_eq!(value.to_string(), expected, "unexpected result of {path:?}");
            },
            (_, Ok(None)) => panic!("{path:?} produced no value"),
            (_, Err(e)) => panic!("{path:?} failed: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in scripts/");
}

fn expectation(content: &str) -> Option<&str> {
    content.lines()
           .next()
           .and_then(|line| line.strip_prefix(EXPECT_PREFIX))
           .map(str::trim)
}

fn assert_success(src: &str) {
    if let Err(e) = evaluate_source(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if evaluate_source(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn declarations_and_assignments() {
    assert_success("integer x = 1 + 2\nx = x * 3\n");
    assert_success("double d = 0.5\nd = d / 2.0\n");
    assert_success("text t = 'a'\nt = t + \"b\"\n");
    assert_success("matrix m[3, 3]\nm = m + 1\n");

    assert_failure("integer x = \"one\"\n");
    assert_failure("integer x = 1\nx = 1.0\n");
    assert_failure("y = 2\n");
}

#[test]
fn comments_and_blank_lines() {
    assert_success("# header\n\n// note\ninteger x = 1 // trailing\n\n\nx\n");
    assert_success("if 1:\n    integer a = 1\n\n    # still inside\n    a = 2\n");
}

#[test]
fn indentation_errors() {
    assert_failure("if 1:\n    integer a = 1\n  integer b = 2\n");
    assert_failure("if 1:\n    integer a = 1\n\tinteger b = 2\n");
    assert_failure("if 1:\ninteger a = 1\n");
}

#[test]
fn control_flow() {
    assert_success("loop i = 0 to 5:\n    integer square = i * i\n");
    assert_success("loop i = 5 to 0 step -1:\n    i\n");
    assert_success("as_long_as 0:\n    integer never = 1\n");
    assert_success("condition 1:\n    case 1:\n        integer one = 1\n");

    assert_failure("loop i = 0 to 5 step 0:\n    i\n");
    assert_failure("condition [[1]]:\n    case 1:\n        integer one = 1\n");
}

#[test]
fn functions() {
    assert_success("function integer sq(integer n):\n    return n * n\ninteger x = sq(4)\n");
    assert_success("function greet(text name = \"you\"):\n    return \"hi \" + name\ngreet()\n");

    assert_failure("function integer sq(integer n):\n    return n * n\nsq()\n");
    assert_failure("function integer sq(integer n):\n    return \"n\"\nsq(1)\n");
    assert_failure("undefined(1)\n");
}

#[test]
fn matrix_programs() {
    assert_success("matrix m = [[1, 2], [3, 4]]\nmatrix t = transpose m\ndouble d = det m\n");
    assert_success("matrix m = [[4, 7], [2, 6]]\nm / m\n");

    assert_failure("matrix m = [[1, 2], [2, 4]]\ninverse m\n");
    assert_failure("matrix m = [[1, 2, 3]]\ndet m\n");
    assert_failure("matrix m[2, 2] = [[1, 2, 3]]\n");
    assert_failure("matrix m = [[1, 2], [3]]\n");
}

#[test]
fn lexical_limits() {
    let long_text = format!("text t = \"{}\"\n", "a".repeat(4096));
    assert_failure(&long_text);
    assert_failure("integer x = 99999999999999999999\n");
    assert_failure("integer x = 1 @ 2\n");
}
