/// Payload normalization: turns validated raw form values into the final
/// wire-shaped Lead Record sent to both sinks.
///
/// The normalizer never mutates form state; it borrows the form and produces
/// a new payload object. Field names here are the snake_case business
/// identifiers the webhook sink expects; the form sink accepts the same keys.
use crate::intake::phone_digits;
use crate::models::{
    CommercialQuoteForm, Frequency, ResidentialQuoteForm, ScheduleChangeForm, ServiceTier,
};
use chrono::{Local, NaiveDate};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Fixed time-zone label attached to every lead (the business operates in
/// Philadelphia).
pub const TIME_ZONE_LABEL: &str = "America/New_York";

/// Service-area default when the residential form leaves state blank.
pub const DEFAULT_STATE: &str = "PA";

/// Lead category; fixes the reference-code prefix, the group label, and the
/// logical form name reported to the sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadCategory {
    Residential,
    Commercial,
    ScheduleChange,
}

impl LeadCategory {
    pub fn prefix(self) -> char {
        match self {
            LeadCategory::Residential => 'R',
            LeadCategory::Commercial => 'C',
            LeadCategory::ScheduleChange => 'S',
        }
    }

    pub fn group_label(self) -> &'static str {
        match self {
            LeadCategory::Residential => "Residential",
            LeadCategory::Commercial => "Commercial",
            LeadCategory::ScheduleChange => "Client Portal",
        }
    }

    pub fn form_name(self) -> &'static str {
        match self {
            LeadCategory::Residential => "Residential Quote Request",
            LeadCategory::Commercial => "Commercial Quote Request",
            LeadCategory::ScheduleChange => "Schedule Change Request",
        }
    }
}

/// Human-readable correlation tag: category letter + 5 random digits.
///
/// Collisions are tolerated and not checked; this is a staff correlation
/// aid, not a database key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCode(String);

impl ReferenceCode {
    pub fn generate(category: LeadCategory) -> Self {
        let number = rand::thread_rng().gen_range(10_000..100_000);
        Self::with_number(category, number)
    }

    /// Deterministic constructor; the number is clamped into the 5-digit range.
    pub fn with_number(category: LeadCategory, number: u32) -> Self {
        let number = number.clamp(10_000, 99_999);
        Self(format!("{}{}", category.prefix(), number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-submission context: everything derived from "now" is computed once
/// here so validation and normalization agree on the submission date.
#[derive(Debug, Clone)]
pub struct SubmitContext {
    pub category: LeadCategory,
    pub today: NaiveDate,
    pub reference: ReferenceCode,
}

impl SubmitContext {
    pub fn now(category: LeadCategory) -> Self {
        Self {
            category,
            today: Local::now().date_naive(),
            reference: ReferenceCode::generate(category),
        }
    }

    /// Fully specified constructor, used by tests.
    pub fn with_parts(category: LeadCategory, today: NaiveDate, reference: ReferenceCode) -> Self {
        Self {
            category,
            today,
            reference,
        }
    }

    fn submission_date(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }
}

/// Strip all non-digit characters and prefix the national number with `+1`.
///
/// Format-insensitive: `(215) 555-0123`, `215-555-0123` and `2155550123` all
/// normalize to `+12155550123`. Callers validate the 10-digit invariant first.
pub fn normalize_us_phone(raw: &str) -> String {
    format!("+1{}", phone_digits(raw))
}

/// Flatten a multi-select into the comma-and-space-joined transport form the
/// sinks expect. Zero selections yield an empty string, never an absent key.
pub fn join_selection(items: &[String]) -> String {
    items.join(", ")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

// ============ Wire-shaped Lead Records ============

/// Final residential Lead Record. One struct feeds both sinks: URL-encoded
/// for the form endpoint, JSON for the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct ResidentialLead {
    #[serde(rename = "form-name")]
    pub form_name: &'static str,
    #[serde(rename = "bot-field")]
    pub bot_field: String,
    pub reference_id: String,
    pub group: &'static str,
    pub time_zone: &'static str,
    pub submission_date: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub apartment: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub service_type: ServiceTier,
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_footage: String,
    pub occupied: String,
    pub pets: String,
    pub preferred_date: String,
    pub time_window: String,
    pub add_ons: String,
    pub frequency: Frequency,
    pub additional_notes: String,
    pub updates_opt_in: &'static str,
}

/// Final commercial Lead Record.
#[derive(Debug, Clone, Serialize)]
pub struct CommercialLead {
    #[serde(rename = "form-name")]
    pub form_name: &'static str,
    #[serde(rename = "bot-field")]
    pub bot_field: String,
    pub reference_id: String,
    pub group: &'static str,
    pub time_zone: &'static str,
    pub submission_date: String,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub suite: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub business_type: String,
    pub other_business_type: String,
    pub occupied: String,
    pub square_footage: String,
    pub num_rooms: String,
    pub num_bathrooms: String,
    pub num_floors: String,
    pub services: String,
    pub service_description: String,
    pub preferred_days: String,
    pub preferred_time: String,
    pub after_hours_allowed: String,
    pub start_time_window: String,
    pub frequency: Frequency,
    pub access_info: String,
    pub additional_notes: String,
    pub follow_up_preference: String,
    pub updates_opt_in: &'static str,
}

/// Final schedule-change Lead Record.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleChangeLead {
    #[serde(rename = "form-name")]
    pub form_name: &'static str,
    #[serde(rename = "bot-field")]
    pub bot_field: String,
    pub reference_id: String,
    pub group: &'static str,
    pub time_zone: &'static str,
    pub submission_date: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub current_frequency: Frequency,
    pub requested_frequency: Frequency,
    pub start_date: String,
    pub additional_notes: String,
    pub updates_opt_in: &'static str,
}

// ============ Normalizers ============

pub fn normalize_residential(form: &ResidentialQuoteForm, ctx: &SubmitContext) -> ResidentialLead {
    let state = form.state.trim();
    ResidentialLead {
        form_name: LeadCategory::Residential.form_name(),
        bot_field: form.bot_field.clone(),
        reference_id: ctx.reference.as_str().to_string(),
        group: LeadCategory::Residential.group_label(),
        time_zone: TIME_ZONE_LABEL,
        submission_date: ctx.submission_date(),
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: normalize_us_phone(&form.phone),
        address: form.street.trim().to_string(),
        apartment: form.apartment.trim().to_string(),
        city: form.city.trim().to_string(),
        state: if state.is_empty() {
            DEFAULT_STATE.to_string()
        } else {
            state.to_string()
        },
        zip_code: form.zip.trim().to_string(),
        service_type: form.service_type,
        bedrooms: form.bedrooms.trim().to_string(),
        bathrooms: form.bathrooms.trim().to_string(),
        square_footage: if form.square_footage.trim().is_empty() {
            "Not provided".to_string()
        } else {
            form.square_footage.trim().to_string()
        },
        occupied: form.occupied.clone(),
        pets: form.pets.clone(),
        preferred_date: form.preferred_date.trim().to_string(),
        time_window: form.time_window.clone(),
        add_ons: join_selection(&form.add_ons),
        frequency: form.frequency,
        additional_notes: form.notes.clone(),
        updates_opt_in: yes_no(form.updates_opt_in),
    }
}

pub fn normalize_commercial(form: &CommercialQuoteForm, ctx: &SubmitContext) -> CommercialLead {
    CommercialLead {
        form_name: LeadCategory::Commercial.form_name(),
        bot_field: form.bot_field.clone(),
        reference_id: ctx.reference.as_str().to_string(),
        group: LeadCategory::Commercial.group_label(),
        time_zone: TIME_ZONE_LABEL,
        submission_date: ctx.submission_date(),
        business_name: form.business_name.trim().to_string(),
        contact_name: form.contact_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: normalize_us_phone(&form.phone),
        address: form.street.trim().to_string(),
        suite: form.suite.trim().to_string(),
        city: form.city.trim().to_string(),
        state: form.state.trim().to_string(),
        zip_code: form.zip.trim().to_string(),
        business_type: form.business_type.clone(),
        other_business_type: form.other_business_type.trim().to_string(),
        occupied: form.occupied.clone(),
        square_footage: form.square_footage.trim().to_string(),
        num_rooms: form.num_rooms.trim().to_string(),
        num_bathrooms: form.num_bathrooms.trim().to_string(),
        num_floors: form.num_floors.trim().to_string(),
        services: join_selection(&form.services),
        service_description: form.service_description.clone(),
        preferred_days: join_selection(&form.preferred_days),
        preferred_time: form.preferred_time.clone(),
        after_hours_allowed: form.after_hours_allowed.clone(),
        start_time_window: form.start_time_window.clone(),
        frequency: form.frequency,
        access_info: form.access_info.clone(),
        additional_notes: form.additional_notes.clone(),
        follow_up_preference: form.follow_up_preference.clone(),
        updates_opt_in: yes_no(form.updates_opt_in),
    }
}

pub fn normalize_schedule_change(
    form: &ScheduleChangeForm,
    ctx: &SubmitContext,
) -> ScheduleChangeLead {
    ScheduleChangeLead {
        form_name: LeadCategory::ScheduleChange.form_name(),
        bot_field: form.bot_field.clone(),
        reference_id: ctx.reference.as_str().to_string(),
        group: LeadCategory::ScheduleChange.group_label(),
        time_zone: TIME_ZONE_LABEL,
        submission_date: ctx.submission_date(),
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: normalize_us_phone(&form.phone),
        address: form.address.trim().to_string(),
        current_frequency: form.current_frequency,
        requested_frequency: form.requested_frequency,
        start_date: form.start_date.trim().to_string(),
        additional_notes: form.notes.clone(),
        updates_opt_in: yes_no(form.updates_opt_in),
    }
}
