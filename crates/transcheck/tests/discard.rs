//! Tests for the discard engine: key ordering, collision detection and the
//! no-op placeholder probe.

use transcheck::{SubstitutionValue, ValidationError, discard, substitutions};

#[test]
fn keys_iterate_longest_first_with_stable_ties() {
    let set = substitutions! { "bb" => "1", "aa" => "2", "c" => "3" };
    let keys: Vec<&str> = set.iter_longest_first().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["bb", "aa", "c"]);

    let set = substitutions! { "a" => "1", "bbb" => "2", "cc" => "3" };
    let keys: Vec<&str> = set.iter_longest_first().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["bbb", "cc", "a"]);
}

#[test]
fn residual_has_proven_placeholders_removed() {
    let set = substitutions! { "ph1" => "one", "ph2" => "two" };
    let residual = discard(":ph1 and :ph2", &set, None, None).unwrap();
    assert_eq!(residual, " and ");
}

#[test]
fn missing_placeholder_names_the_key_and_expected_colon_forms() {
    let set = substitutions! { "ph1" => "found", "ph2" => "not found" };
    let template = "Only replace key ph1 is here as placeholder :ph1";
    let err = discard(template, &set, None, None).unwrap_err();
    match err {
        ValidationError::MissingPlaceholder {
            key,
            expected_forms,
            template_key,
            locale,
            resolved_text,
        } => {
            assert_eq!(key, "ph2");
            assert_eq!(expected_forms, vec![":ph2", ":Ph2", ":PH2"]);
            assert_eq!(template_key, None);
            assert_eq!(locale, None);
            assert_eq!(resolved_text, template);
        }
        other => panic!("expected MissingPlaceholder, got {other:?}"),
    }
}

#[test]
fn ucfirst_and_upper_forms_satisfy_a_text_key() {
    for template in ["example :Name", "example :NAME", "example :name"] {
        let set = substitutions! { "name" => "John Doe" };
        discard(template, &set, None, None).unwrap();
    }
}

#[test]
fn mixed_case_spellings_are_not_placeholder_forms() {
    let set = substitutions! { "name" => "John Doe" };
    let err = discard("Won't pass :nAmE :NaMe :nAMe :NamE", &set, None, None).unwrap_err();
    match err {
        ValidationError::MissingPlaceholder { key, .. } => assert_eq!(key, "name"),
        other => panic!("expected MissingPlaceholder, got {other:?}"),
    }
}

#[test]
fn longer_keys_are_checked_and_discarded_first() {
    // Both placeholder occurrences belong to the longer key. After the longer
    // key is discarded, nothing is left for the shorter prefix key, so the
    // failure must name the shorter key rather than matching inside the
    // longer key's placeholder name.
    let template = ":this_is_checked_first after longer is found shorter won't be \
                    even if longer starts the same way as shorter :this_is_checked_first";
    let set = substitutions! {
        "this" => "won't be found",
        "this_is_checked_first" => ":this",
    };
    let err = discard(template, &set, None, None).unwrap_err();
    match err {
        ValidationError::MissingPlaceholder { key, .. } => assert_eq!(key, "this"),
        other => panic!("expected MissingPlaceholder, got {other:?}"),
    }
}

#[test]
fn case_folded_key_collision_fails_in_processing_order() {
    let set = substitutions! { "nAMe" => "John", "NamE" => "Doe" };
    let err = discard(
        "Will fail even if :nAMe :NamE are indeed present",
        &set,
        None,
        None,
    )
    .unwrap_err();
    match err {
        ValidationError::KeyCollision {
            first_key,
            second_key,
        } => {
            assert_eq!(first_key, "nAMe");
            assert_eq!(second_key, "NamE");
        }
        other => panic!("expected KeyCollision, got {other:?}"),
    }
}

#[test]
fn collision_is_detected_before_the_probe_runs() {
    // The second key has no placeholder at all, but the collision must win
    // because the check runs per key before its probe.
    let set = substitutions! { "name" => "John", "NAME" => "Doe" };
    let err = discard("only :name here", &set, None, None).unwrap_err();
    assert!(matches!(err, ValidationError::KeyCollision { .. }));
}

// =========================================================================
// Label-Transform Probes
// =========================================================================

#[test]
fn label_transform_keys_probe_the_label_form() {
    let set = substitutions! {
        "example" => SubstitutionValue::label(|inner| format!("got {inner}")),
    };
    let residual = discard(
        "label formatted <example>some text</example>.",
        &set,
        None,
        None,
    )
    .unwrap();
    assert_eq!(residual, "label formatted .");
}

#[test]
fn unclosed_label_fails_with_the_label_form() {
    let set = substitutions! {
        "example" => SubstitutionValue::label(|inner| inner.to_string()),
    };
    let err = discard(
        "open <example>label placeholder without an end",
        &set,
        None,
        None,
    )
    .unwrap_err();
    match err {
        ValidationError::MissingPlaceholder {
            key,
            expected_forms,
            ..
        } => {
            assert_eq!(key, "example");
            assert_eq!(expected_forms, vec!["<example>INSIDE_TEXT</example>"]);
        }
        other => panic!("expected MissingPlaceholder, got {other:?}"),
    }
}

#[test]
fn label_transform_keys_do_not_accept_colon_placeholders() {
    // A label value checks only the label form, even when a colon-form token
    // with the same name is present.
    let set = substitutions! {
        "example" => SubstitutionValue::label(|inner| inner.to_string()),
    };
    let err = discard("wrong placeholder format :example", &set, None, None).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingPlaceholder { key, .. } if key == "example"
    ));
}

#[test]
fn text_keys_do_not_accept_label_placeholders() {
    let set = substitutions! { "example" => "not a transform value" };
    let err = discard(
        "label formatted <example>some text</example>.",
        &set,
        None,
        None,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingPlaceholder { key, .. } if key == "example"
    ));
}

#[test]
fn empty_replacement_text_still_requires_the_placeholder() {
    let set = substitutions! { "name" => "" };
    discard("hi :name", &set, None, None).unwrap();

    let set = substitutions! { "name" => "" };
    let err = discard("hi there", &set, None, None).unwrap_err();
    assert!(matches!(err, ValidationError::MissingPlaceholder { .. }));
}

#[test]
fn empty_substitution_set_returns_the_template_unchanged() {
    let residual = discard("no keys to check :left", &substitutions! {}, None, None).unwrap();
    assert_eq!(residual, "no keys to check :left");
}

#[test]
fn template_origin_is_carried_into_the_report() {
    let set = substitutions! { "missing" => "value" };
    let err = discard("resolved text", &set, Some("errors.example"), Some("es")).unwrap_err();
    match err {
        ValidationError::MissingPlaceholder {
            template_key,
            locale,
            ..
        } => {
            assert_eq!(template_key.as_deref(), Some("errors.example"));
            assert_eq!(locale.as_deref(), Some("es"));
        }
        other => panic!("expected MissingPlaceholder, got {other:?}"),
    }
}
