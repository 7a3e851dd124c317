//! Property tests for the `[profile <name>]` header scan.

use proptest::prelude::*;

use sso_verify::profiles::{first_two, parse_profile_names};

fn profile_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.-]{1,16}").unwrap()
}

/// Lines that can never be mistaken for a profile header
fn other_line() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[a-z_]{1,12} = [A-Za-z0-9:/._-]{0,20}").unwrap(),
        proptest::string::string_regex("\\[(default|sso-session [a-z]{1,8})\\]").unwrap(),
        proptest::string::string_regex("# [ -~]{0,30}").unwrap(),
        Just(String::new()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the scan never panics on arbitrary text.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,512}") {
        let _ = parse_profile_names(&content);
    }

    /// PROPERTY: headers come back in file order, surrounding lines ignored.
    #[test]
    fn property_headers_preserve_order(
        sections in proptest::collection::vec(
            (profile_name(), proptest::collection::vec(other_line(), 0..4), 0usize..3),
            0..8,
        ),
    ) {
        let mut content = String::new();
        for (name, body, indent) in &sections {
            content.push_str(&" ".repeat(*indent));
            content.push_str(&format!("[profile {}]\n", name));
            for line in body {
                content.push_str(line);
                content.push('\n');
            }
        }

        let expected: Vec<String> = sections.iter().map(|(name, _, _)| name.clone()).collect();
        prop_assert_eq!(parse_profile_names(&content), expected);
    }

    /// PROPERTY: exactly the first two profiles are selected.
    #[test]
    fn property_first_two_takes_prefix(names in proptest::collection::vec(profile_name(), 0..6)) {
        match first_two(&names) {
            Some((a, b)) => {
                prop_assert!(names.len() >= 2);
                prop_assert_eq!(a, names[0].as_str());
                prop_assert_eq!(b, names[1].as_str());
            }
            None => prop_assert!(names.len() < 2),
        }
    }
}
