use people_core::{
    validate, Person, PersonFields, PersonValidationError, ValidationOutcome, USPS_STATE_CODES,
};

fn valid_fields() -> PersonFields {
    PersonFields {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: Some("e@x.com".to_string()),
        job_title: "Eng".to_string(),
        street: "St".to_string(),
        street2: None,
        city: "City".to_string(),
        state: "NY".to_string(),
        postal: "12180".to_string(),
        notes: None,
    }
}

#[test]
fn valid_fields_pass_with_empty_message() {
    assert_eq!(validate(&valid_fields()), ValidationOutcome::valid());
}

#[test]
fn blank_first_name_is_reported_first() {
    let mut fields = valid_fields();
    fields.first_name = String::new();

    let outcome = validate(&fields);
    assert!(!outcome.is_valid);
    assert_eq!(outcome.message, "First name is required");
}

#[test]
fn unknown_state_is_rejected_even_when_everything_else_is_valid() {
    let mut fields = valid_fields();
    fields.state = "ZZ".to_string();

    let outcome = validate(&fields);
    assert!(!outcome.is_valid);
    assert_eq!(outcome.message, "Please enter a valid USPS state abbreviation");
}

#[test]
fn each_required_field_blank_or_whitespace_yields_its_message() {
    type Blank = fn(&mut PersonFields, &str);
    let cases: [(Blank, &str); 8] = [
        (|f, v| f.first_name = v.to_string(), "First name is required"),
        (|f, v| f.last_name = v.to_string(), "Last name is required"),
        (|f, v| f.email = Some(v.to_string()), "Email is required"),
        (|f, v| f.job_title = v.to_string(), "Job title is required"),
        (|f, v| f.street = v.to_string(), "Street address is required"),
        (|f, v| f.city = v.to_string(), "City is required"),
        (
            |f, v| f.state = v.to_string(),
            "Please enter a valid USPS state abbreviation",
        ),
        (|f, v| f.postal = v.to_string(), "Please enter a postal/zip code"),
    ];

    for (blank, expected) in cases {
        for value in ["", "   ", "\t\n"] {
            let mut fields = valid_fields();
            blank(&mut fields, value);
            let outcome = validate(&fields);
            assert!(!outcome.is_valid, "{expected:?} with {value:?}");
            assert_eq!(outcome.message, expected);
        }
    }
}

#[test]
fn later_rules_only_fire_after_earlier_ones_pass() {
    let mut fields = PersonFields::default();
    assert_eq!(fields.validate(), Err(PersonValidationError::MissingFirstName));

    fields.first_name = "Jane".to_string();
    fields.last_name = "Doe".to_string();
    fields.email = Some("jane@x.com".to_string());
    fields.job_title = "Engineer".to_string();
    fields.street = "1 Main St".to_string();
    fields.city = "Troy".to_string();
    assert_eq!(fields.validate(), Err(PersonValidationError::InvalidState));

    fields.state = "NY".to_string();
    assert_eq!(fields.validate(), Err(PersonValidationError::MissingPostal));
}

#[test]
fn every_usps_code_is_accepted() {
    for code in USPS_STATE_CODES {
        let mut fields = valid_fields();
        fields.state = code.to_string();
        assert!(validate(&fields).is_valid, "{code} should be accepted");
    }
}

#[test]
fn lowercase_or_padded_state_is_rejected() {
    for state in ["ny", " NY", "NY ", "New York"] {
        let mut fields = valid_fields();
        fields.state = state.to_string();
        assert_eq!(fields.validate(), Err(PersonValidationError::InvalidState));
    }
}

#[test]
fn street2_and_notes_never_affect_validation() {
    let mut fields = valid_fields();
    for optional in [None, Some(String::new()), Some("  ".to_string())] {
        fields.street2 = optional.clone();
        fields.notes = optional;
        assert!(validate(&fields).is_valid);
    }
}

#[test]
fn person_serializes_in_canonical_field_order() {
    let person = Person {
        id: 1,
        fields: PersonFields {
            street2: Some("Suite 4".to_string()),
            notes: Some("met at conference".to_string()),
            ..valid_fields()
        },
    };

    let json = serde_json::to_string(&person).unwrap();
    let keys = [
        "\"id\"",
        "\"first_name\"",
        "\"last_name\"",
        "\"email\"",
        "\"job_title\"",
        "\"street\"",
        "\"street2\"",
        "\"city\"",
        "\"state\"",
        "\"postal\"",
        "\"notes\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|key| json.find(key).unwrap()).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{json}");

    let decoded: Person = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, person);
}
