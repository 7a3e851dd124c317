//! Property tests for account/role lookup in the identity artifact.

use proptest::prelude::*;
use serde_json::{json, Value};

use sso_verify::identity::IdentityDocument;

fn account() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{12}").unwrap()
}

fn role() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9+=,.@_-]{0,15}").unwrap()
}

fn entries() -> impl Strategy<Value = Vec<(String, String, String)>> {
    proptest::collection::btree_map("[a-z][a-z0-9-]{0,10}", (account(), role()), 1..6)
        .prop_map(|m| m.into_iter().map(|(name, (a, r))| (name, a, r)).collect())
}

fn arbitrary_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[A-Za-z]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            proptest::collection::btree_map(
                prop_oneof![
                    Just("Account".to_string()),
                    Just("RoleName".to_string()),
                    Just("ProfileName".to_string()),
                    "[a-z]{1,6}",
                ],
                inner,
                0..6
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: lookup never panics, whatever the document holds.
    #[test]
    fn property_lookup_never_panics(doc in arbitrary_json(), profile in "[a-z]{1,6}") {
        let document = IdentityDocument::from_value(doc);
        let ids = document.account_role(&profile);
        prop_assert_eq!(ids.pair().is_some(), ids.account.is_some() && ids.role.is_some());
        let _ = ids.to_string();
    }

    /// PROPERTY: keyed mapping, named mapping and sequence layouts agree.
    #[test]
    fn property_layouts_resolve_identically(entries in entries()) {
        let keyed: serde_json::Map<String, Value> = entries
            .iter()
            .map(|(name, a, r)| (name.clone(), json!({"Account": a, "RoleName": r})))
            .collect();
        let named: serde_json::Map<String, Value> = entries
            .iter()
            .enumerate()
            .map(|(i, (name, a, r))| {
                (format!("Entry{}", i), json!({"ProfileName": name, "AccountId": a, "Role": r}))
            })
            .collect();
        let sequence: Vec<Value> = entries
            .iter()
            .map(|(name, a, r)| json!({"ProfileName": name, "Account": a, "Role": r}))
            .collect();

        let layouts = [
            IdentityDocument::from_value(Value::Object(keyed)),
            IdentityDocument::from_value(Value::Object(named)),
            IdentityDocument::from_value(Value::Array(sequence)),
        ];

        for (name, a, r) in &entries {
            let expected = Some(format!("{}:{}", a, r));
            for document in &layouts {
                prop_assert_eq!(document.account_role(name).pair(), expected.clone());
            }
        }
    }
}
