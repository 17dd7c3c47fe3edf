/// Shared field validation engine for all intake form variants.
///
/// The residential and commercial quote forms (and the schedule-change form)
/// are one business capability instantiated with different field sets. Each
/// variant supplies an ordered schema of `FieldRule`s; this module walks the
/// schema in canonical form order, accumulates a field-to-message error map,
/// and reports the first invalid field so the form layer can move focus to it.
use crate::models::{CommercialQuoteForm, ResidentialQuoteForm, ScheduleChangeForm};
use chrono::NaiveDate;
use regex::Regex;
use serde_json::{Map, Value};

/// Minimum number of days between submission and a residential service date.
pub const MIN_LEAD_DAYS: i64 = 4;

/// Accumulated validation failures, in canonical form order.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    entries: Vec<(String, String)>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.entries.push((field.to_string(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The single field that should receive input focus: the first invalid
    /// field in canonical order, regardless of how many fields failed.
    pub fn focus_field(&self) -> Option<&str> {
        self.entries.first().map(|(field, _)| field.as_str())
    }

    pub fn fields(&self) -> Vec<&str> {
        self.entries.iter().map(|(field, _)| field.as_str()).collect()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, message)| message.as_str())
    }

    /// Field-to-message map for the error response body.
    pub fn as_map(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(field, message)| (field.clone(), Value::String(message.clone())))
            .collect()
    }
}

/// Validation rule applied to one field value.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Non-empty after trimming whitespace.
    Required,
    /// `local@domain.tld` shape: an `@`, a `.` after it, no whitespace.
    Email,
    /// Exactly 10 digits once all non-digit characters are stripped.
    UsPhone,
    /// Exactly 2 characters after trimming.
    StateCode,
    /// `NNNNN` or `NNNNN-NNNN`.
    Zip,
    /// Non-empty `YYYY-MM-DD`; when `earliest` is set, no sooner than it.
    Date { earliest: Option<NaiveDate> },
    /// A checkbox that must be ticked before submission may proceed.
    Accepted,
}

#[derive(Debug, Clone)]
enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

/// One entry of a form variant's validation schema.
#[derive(Debug, Clone)]
pub struct FieldRule<'a> {
    field: &'static str,
    value: FieldValue<'a>,
    rule: Rule,
}

impl<'a> FieldRule<'a> {
    pub fn required(field: &'static str, value: &'a str) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            rule: Rule::Required,
        }
    }

    pub fn email(field: &'static str, value: &'a str) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            rule: Rule::Email,
        }
    }

    pub fn us_phone(field: &'static str, value: &'a str) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            rule: Rule::UsPhone,
        }
    }

    pub fn state_code(field: &'static str, value: &'a str) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            rule: Rule::StateCode,
        }
    }

    pub fn zip(field: &'static str, value: &'a str) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            rule: Rule::Zip,
        }
    }

    pub fn date(field: &'static str, value: &'a str, earliest: Option<NaiveDate>) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            rule: Rule::Date { earliest },
        }
    }

    pub fn accepted(field: &'static str, value: bool) -> Self {
        Self {
            field,
            value: FieldValue::Flag(value),
            rule: Rule::Accepted,
        }
    }

    /// Returns the error message for this field, if the value violates the rule.
    fn check(&self) -> Option<String> {
        match (&self.rule, &self.value) {
            (Rule::Required, FieldValue::Text(v)) => {
                v.trim().is_empty().then(|| "This field is required".to_string())
            }
            (Rule::Email, FieldValue::Text(v)) => {
                (!is_valid_email(v)).then(|| "Enter a valid email address".to_string())
            }
            (Rule::UsPhone, FieldValue::Text(v)) => {
                (!is_valid_us_phone(v)).then(|| "Enter a 10-digit phone number".to_string())
            }
            (Rule::StateCode, FieldValue::Text(v)) => {
                (v.trim().len() != 2).then(|| "Use the 2-letter state code".to_string())
            }
            (Rule::Zip, FieldValue::Text(v)) => {
                (!is_valid_zip(v)).then(|| "Enter a valid ZIP code".to_string())
            }
            (Rule::Date { earliest }, FieldValue::Text(v)) => {
                if v.trim().is_empty() {
                    return Some("This field is required".to_string());
                }
                let Ok(date) = NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d") else {
                    return Some("Enter a valid date".to_string());
                };
                match earliest {
                    Some(min) if date < *min => Some(format!(
                        "Earliest available date is {}",
                        min.format("%Y-%m-%d")
                    )),
                    _ => None,
                }
            }
            (Rule::Accepted, FieldValue::Flag(v)) => {
                (!v).then(|| "Please confirm before submitting".to_string())
            }
            // A flag paired with a text rule (or vice versa) is a schema bug;
            // treat the field as invalid rather than silently passing it.
            (_, FieldValue::Flag(_)) | (Rule::Accepted, FieldValue::Text(_)) => {
                Some("Invalid value".to_string())
            }
        }
    }
}

/// Walks a schema in order and either accepts the record or returns the
/// ordered error map. Exactly one focus field per pass (the first entry).
pub fn validate_fields(rules: &[FieldRule<'_>]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for rule in rules {
        if let Some(message) = rule.check() {
            errors.push(rule.field, message);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(
            "Validation failed for {} field(s), focus: {:?}",
            errors.len(),
            errors.focus_field()
        );
        Err(errors)
    }
}

/// Validate email address shape: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }
    let email_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    email_regex.is_match(email)
}

/// Strips every non-digit character from a raw phone value.
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A US phone is valid when exactly 10 digits remain after stripping
/// formatting (parentheses, dashes, spaces are all accepted and discarded).
pub fn is_valid_us_phone(raw: &str) -> bool {
    phone_digits(raw).len() == 10
}

/// Validate ZIP code: `NNNNN` or `NNNNN-NNNN`.
pub fn is_valid_zip(zip: &str) -> bool {
    let zip_regex = Regex::new(r"^\d{5}(-\d{4})?$").unwrap();
    zip_regex.is_match(zip.trim())
}

// ============ Per-variant schemas ============

/// Residential schema: canonical focus order, then service details, then the
/// scheduling date (with the minimum lead time), then consent. State is free
/// text on this variant and is defaulted at normalization, not validated.
pub fn validate_residential(
    form: &ResidentialQuoteForm,
    today: NaiveDate,
) -> Result<(), ValidationErrors> {
    let earliest = today + chrono::Duration::days(MIN_LEAD_DAYS);
    let rules = [
        FieldRule::required("first_name", &form.first_name),
        FieldRule::required("last_name", &form.last_name),
        FieldRule::email("email", &form.email),
        FieldRule::us_phone("phone", &form.phone),
        FieldRule::required("street", &form.street),
        FieldRule::required("city", &form.city),
        FieldRule::zip("zip", &form.zip),
        FieldRule::required("bedrooms", &form.bedrooms),
        FieldRule::required("bathrooms", &form.bathrooms),
        FieldRule::date("preferred_date", &form.preferred_date, Some(earliest)),
        FieldRule::accepted("consent", form.consent),
    ];
    validate_fields(&rules)
}

/// Commercial schema: business identity first, then the split address with a
/// required 2-letter state, space details, then acknowledgment.
pub fn validate_commercial(form: &CommercialQuoteForm) -> Result<(), ValidationErrors> {
    let rules = [
        FieldRule::required("business_name", &form.business_name),
        FieldRule::required("contact_name", &form.contact_name),
        FieldRule::email("email", &form.email),
        FieldRule::us_phone("phone", &form.phone),
        FieldRule::required("street", &form.street),
        FieldRule::required("city", &form.city),
        FieldRule::state_code("state", &form.state),
        FieldRule::zip("zip", &form.zip),
        FieldRule::required("square_footage", &form.square_footage),
        FieldRule::required("num_rooms", &form.num_rooms),
        FieldRule::required("num_bathrooms", &form.num_bathrooms),
        FieldRule::accepted("acknowledgment", form.acknowledgment),
    ];
    validate_fields(&rules)
}

/// Schedule-change schema (client portal form).
pub fn validate_schedule_change(form: &ScheduleChangeForm) -> Result<(), ValidationErrors> {
    let rules = [
        FieldRule::required("name", &form.name),
        FieldRule::email("email", &form.email),
        FieldRule::us_phone("phone", &form.phone),
        FieldRule::required("address", &form.address),
        FieldRule::date("start_date", &form.start_date, None),
    ];
    validate_fields(&rules)
}
