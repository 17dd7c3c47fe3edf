/// Unit tests for the intake pipeline: field validation and payload
/// normalization across all form variants.
use chrono::NaiveDate;
use quote_intake_api::intake::{
    is_valid_email, is_valid_us_phone, is_valid_zip, validate_commercial, validate_residential,
    validate_schedule_change, MIN_LEAD_DAYS,
};
use quote_intake_api::models::{
    CommercialQuoteForm, Frequency, ResidentialQuoteForm, ScheduleChangeForm,
};
use quote_intake_api::payload::{
    join_selection, normalize_commercial, normalize_residential, normalize_schedule_change,
    normalize_us_phone, LeadCategory, ReferenceCode, SubmitContext,
};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// A residential form that passes every rule, dated comfortably past the
/// minimum lead time.
fn valid_residential_form() -> ResidentialQuoteForm {
    ResidentialQuoteForm {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "(215) 555-0123".to_string(),
        street: "123 Philly Ln".to_string(),
        city: "Philadelphia".to_string(),
        zip: "19103".to_string(),
        bedrooms: "2".to_string(),
        bathrooms: "1".to_string(),
        preferred_date: "2025-06-10".to_string(),
        consent: true,
        ..Default::default()
    }
}

fn valid_commercial_form() -> CommercialQuoteForm {
    CommercialQuoteForm {
        business_name: "Company LLC".to_string(),
        contact_name: "Jane Smith".to_string(),
        email: "jane@company.com".to_string(),
        phone: "215-555-0123".to_string(),
        street: "123 Market St".to_string(),
        city: "Philadelphia".to_string(),
        state: "PA".to_string(),
        zip: "19103".to_string(),
        square_footage: "2500".to_string(),
        num_rooms: "6".to_string(),
        num_bathrooms: "2".to_string(),
        acknowledgment: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod field_rule_tests {
    use super::*;

    #[test]
    fn test_email_accepts_and_rejects() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane.example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_zip_accepts_and_rejects() {
        assert!(is_valid_zip("19103"));
        assert!(is_valid_zip("19103-1234"));
        assert!(!is_valid_zip("1910"));
        assert!(!is_valid_zip("191033"));
        assert!(!is_valid_zip("abcde"));
    }

    #[test]
    fn test_phone_requires_ten_digits() {
        assert!(is_valid_us_phone("(215) 555-0123"));
        assert!(is_valid_us_phone("215-555-0123"));
        assert!(is_valid_us_phone("2155550123"));
        assert!(!is_valid_us_phone("215-555-012"));
        assert!(!is_valid_us_phone("1-215-555-0123"));
        assert!(!is_valid_us_phone(""));
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_form_produces_no_errors() {
        assert!(validate_residential(&valid_residential_form(), fixed_today()).is_ok());
        assert!(validate_commercial(&valid_commercial_form()).is_ok());
    }

    #[test]
    fn test_each_required_field_blocks_submission() {
        let today = fixed_today();
        let blank_variants: Vec<(&str, ResidentialQuoteForm)> = vec![
            (
                "first_name",
                ResidentialQuoteForm {
                    first_name: String::new(),
                    ..valid_residential_form()
                },
            ),
            (
                "last_name",
                ResidentialQuoteForm {
                    last_name: "   ".to_string(),
                    ..valid_residential_form()
                },
            ),
            (
                "email",
                ResidentialQuoteForm {
                    email: String::new(),
                    ..valid_residential_form()
                },
            ),
            (
                "phone",
                ResidentialQuoteForm {
                    phone: "555".to_string(),
                    ..valid_residential_form()
                },
            ),
            (
                "street",
                ResidentialQuoteForm {
                    street: String::new(),
                    ..valid_residential_form()
                },
            ),
            (
                "city",
                ResidentialQuoteForm {
                    city: String::new(),
                    ..valid_residential_form()
                },
            ),
            (
                "zip",
                ResidentialQuoteForm {
                    zip: "1910".to_string(),
                    ..valid_residential_form()
                },
            ),
            (
                "preferred_date",
                ResidentialQuoteForm {
                    preferred_date: String::new(),
                    ..valid_residential_form()
                },
            ),
        ];

        for (field, form) in blank_variants {
            let errors = validate_residential(&form, today).unwrap_err();
            assert!(
                errors.message_for(field).is_some(),
                "expected an error for {}",
                field
            );
            assert_eq!(errors.focus_field(), Some(field));
        }
    }

    #[test]
    fn test_focus_priority_first_name_before_email() {
        let form = ResidentialQuoteForm {
            first_name: String::new(),
            email: String::new(),
            ..valid_residential_form()
        };
        let errors = validate_residential(&form, fixed_today()).unwrap_err();
        assert_eq!(errors.focus_field(), Some("first_name"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_zip_error_focuses_zip_when_prior_fields_valid() {
        let form = ResidentialQuoteForm {
            zip: "1910".to_string(),
            ..valid_residential_form()
        };
        let errors = validate_residential(&form, fixed_today()).unwrap_err();
        assert_eq!(errors.fields(), vec!["zip"]);
        assert_eq!(errors.focus_field(), Some("zip"));
    }

    #[test]
    fn test_acknowledgment_false_blocks_submission() {
        let form = ResidentialQuoteForm {
            consent: false,
            ..valid_residential_form()
        };
        let errors = validate_residential(&form, fixed_today()).unwrap_err();
        assert_eq!(errors.fields(), vec!["consent"]);

        let form = CommercialQuoteForm {
            acknowledgment: false,
            ..valid_commercial_form()
        };
        let errors = validate_commercial(&form).unwrap_err();
        assert_eq!(errors.fields(), vec!["acknowledgment"]);
    }

    #[test]
    fn test_minimum_lead_time_boundary() {
        let today = fixed_today();
        let earliest = today + chrono::Duration::days(MIN_LEAD_DAYS);

        let too_soon = ResidentialQuoteForm {
            preferred_date: (earliest - chrono::Duration::days(1))
                .format("%Y-%m-%d")
                .to_string(),
            ..valid_residential_form()
        };
        assert!(validate_residential(&too_soon, today).is_err());

        let on_boundary = ResidentialQuoteForm {
            preferred_date: earliest.format("%Y-%m-%d").to_string(),
            ..valid_residential_form()
        };
        assert!(validate_residential(&on_boundary, today).is_ok());
    }

    #[test]
    fn test_commercial_state_code_length() {
        let form = CommercialQuoteForm {
            state: "P".to_string(),
            ..valid_commercial_form()
        };
        assert!(validate_commercial(&form).is_err());

        let form = CommercialQuoteForm {
            state: "Penn".to_string(),
            ..valid_commercial_form()
        };
        assert!(validate_commercial(&form).is_err());
    }

    #[test]
    fn test_schedule_change_requires_start_date() {
        let form = ScheduleChangeForm {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "2678549564".to_string(),
            address: "123 Philly Ln".to_string(),
            start_date: String::new(),
            ..Default::default()
        };
        let errors = validate_schedule_change(&form).unwrap_err();
        assert_eq!(errors.focus_field(), Some("start_date"));

        let form = ScheduleChangeForm {
            start_date: "2025-07-01".to_string(),
            ..form
        };
        assert!(validate_schedule_change(&form).is_ok());
    }
}

#[cfg(test)]
mod normalization_tests {
    use super::*;

    fn residential_ctx() -> SubmitContext {
        SubmitContext::with_parts(
            LeadCategory::Residential,
            fixed_today(),
            ReferenceCode::with_number(LeadCategory::Residential, 40123),
        )
    }

    #[test]
    fn test_phone_normalization_format_insensitive() {
        assert_eq!(normalize_us_phone("(215) 555-0123"), "+12155550123");
        assert_eq!(normalize_us_phone("215-555-0123"), "+12155550123");
        assert_eq!(normalize_us_phone("2155550123"), "+12155550123");
        assert_eq!(normalize_us_phone("215 555 0123"), "+12155550123");
    }

    #[test]
    fn test_reference_code_prefix_and_digits() {
        for _ in 0..50 {
            let r = ReferenceCode::generate(LeadCategory::Residential);
            assert!(r.as_str().starts_with('R'));
            assert_eq!(r.as_str().len(), 6);
            assert!(r.as_str()[1..].chars().all(|c| c.is_ascii_digit()));

            let c = ReferenceCode::generate(LeadCategory::Commercial);
            assert!(c.as_str().starts_with('C'));

            let s = ReferenceCode::generate(LeadCategory::ScheduleChange);
            assert!(s.as_str().starts_with('S'));
        }
    }

    #[test]
    fn test_empty_multi_select_normalizes_to_empty_string() {
        assert_eq!(join_selection(&[]), "");
        let lead = normalize_residential(&valid_residential_form(), &residential_ctx());
        assert_eq!(lead.add_ons, "");
    }

    #[test]
    fn test_residential_lead_fields() {
        let form = valid_residential_form();
        let lead = normalize_residential(&form, &residential_ctx());

        assert_eq!(lead.form_name, "Residential Quote Request");
        assert_eq!(lead.group, "Residential");
        assert_eq!(lead.time_zone, "America/New_York");
        assert_eq!(lead.submission_date, "2025-06-01");
        assert_eq!(lead.reference_id, "R40123");
        assert_eq!(lead.phone, "+12155550123");
        assert_eq!(lead.first_name, "Jane");
        assert_eq!(lead.last_name, "Doe");
        assert_eq!(lead.zip_code, "19103");
        // state defaulted for the residential variant
        assert_eq!(lead.state, "PA");
        // honeypot carried through empty
        assert_eq!(lead.bot_field, "");
        // the in-memory form is not mutated by normalization
        assert_eq!(form.phone, "(215) 555-0123");
    }

    #[test]
    fn test_commercial_lead_fields() {
        let form = CommercialQuoteForm {
            services: vec!["Routine Cleaning".to_string(), "Post Construction".to_string()],
            preferred_days: vec!["Monday".to_string(), "Thursday".to_string()],
            frequency: Frequency::Weekly,
            ..valid_commercial_form()
        };
        let ctx = SubmitContext::with_parts(
            LeadCategory::Commercial,
            fixed_today(),
            ReferenceCode::with_number(LeadCategory::Commercial, 77001),
        );
        let lead = normalize_commercial(&form, &ctx);

        assert_eq!(lead.form_name, "Commercial Quote Request");
        assert_eq!(lead.group, "Commercial");
        assert_eq!(lead.reference_id, "C77001");
        assert_eq!(lead.services, "Routine Cleaning, Post Construction");
        assert_eq!(lead.preferred_days, "Monday, Thursday");
        assert_eq!(lead.phone, "+12155550123");
    }

    #[test]
    fn test_schedule_change_lead_fields() {
        let form = ScheduleChangeForm {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "(267) 854-9564".to_string(),
            address: "123 Philly Ln".to_string(),
            current_frequency: Frequency::Biweekly,
            requested_frequency: Frequency::Weekly,
            start_date: "2025-07-01".to_string(),
            ..Default::default()
        };
        let ctx = SubmitContext::with_parts(
            LeadCategory::ScheduleChange,
            fixed_today(),
            ReferenceCode::with_number(LeadCategory::ScheduleChange, 50555),
        );
        let lead = normalize_schedule_change(&form, &ctx);

        assert_eq!(lead.form_name, "Schedule Change Request");
        assert_eq!(lead.reference_id, "S50555");
        assert_eq!(lead.phone, "+12678549564");
        assert_eq!(lead.start_date, "2025-07-01");
    }

    #[test]
    fn test_wire_serialization_uses_business_field_names() {
        let lead = normalize_residential(&valid_residential_form(), &residential_ctx());
        let value = serde_json::to_value(&lead).unwrap();

        assert_eq!(value["form-name"], "Residential Quote Request");
        assert_eq!(value["bot-field"], "");
        assert_eq!(value["first_name"], "Jane");
        assert_eq!(value["phone"], "+12155550123");
        assert_eq!(value["zip_code"], "19103");
        assert_eq!(value["reference_id"], "R40123");
        assert_eq!(value["service_type"], "Basic Clean");
        assert_eq!(value["frequency"], "One Time");
    }

    #[test]
    fn test_frequency_label_aliases_deserialize() {
        let weekly: Frequency = serde_json::from_str("\"Weekly\"").unwrap();
        assert_eq!(weekly, Frequency::Weekly);
        let one_time: Frequency = serde_json::from_str("\"One time cleaning\"").unwrap();
        assert_eq!(one_time, Frequency::OneTime);
        let biweekly: Frequency = serde_json::from_str("\"Bi-weekly\"").unwrap();
        assert_eq!(biweekly, Frequency::Biweekly);
    }
}
