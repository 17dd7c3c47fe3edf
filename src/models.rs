use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Shared Enumerations ============

/// Residential cleaning tier, as presented on the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceTier {
    #[default]
    #[serde(rename = "Basic Clean")]
    BasicClean,
    #[serde(rename = "Premium Clean")]
    PremiumClean,
    #[serde(rename = "Deep Clean")]
    DeepClean,
    #[serde(rename = "Move In / Out")]
    MoveInOut,
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceTier::BasicClean => "Basic Clean",
            ServiceTier::PremiumClean => "Premium Clean",
            ServiceTier::DeepClean => "Deep Clean",
            ServiceTier::MoveInOut => "Move In / Out",
        };
        f.write_str(label)
    }
}

/// Service cadence. The residential and commercial forms historically used
/// different spellings for the one-time option; both deserialize here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    #[serde(rename = "One Time", alias = "One time cleaning", alias = "One-time")]
    OneTime,
    #[serde(rename = "Weekly")]
    Weekly,
    #[serde(rename = "Biweekly", alias = "Bi-weekly")]
    Biweekly,
    #[serde(rename = "Monthly")]
    Monthly,
    #[serde(rename = "Custom")]
    Custom,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::OneTime => "One Time",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Biweekly",
            Frequency::Monthly => "Monthly",
            Frequency::Custom => "Custom",
        };
        f.write_str(label)
    }
}

// ============ Raw Form Values ============
//
// These mirror the in-memory form state field-for-field. Every field is
// filled from the struct default when absent, so a partially completed form
// always deserializes; the validator decides what is actually submittable.

/// Raw field values of the residential quote form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResidentialQuoteForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    /// Apartment/unit number. Optional.
    pub apartment: String,
    pub city: String,
    /// Free text; an empty value falls back to the service area default.
    pub state: String,
    pub zip: String,
    pub service_type: ServiceTier,
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_footage: String,
    /// "Yes" / "No": whether the home is currently occupied.
    pub occupied: String,
    pub pets: String,
    /// Requested service date, `YYYY-MM-DD`.
    pub preferred_date: String,
    pub time_window: String,
    /// Selected add-on services (multi-select).
    pub add_ons: Vec<String>,
    pub frequency: Frequency,
    pub notes: String,
    /// Must be true for a submission attempt to proceed.
    pub consent: bool,
    /// Optional opt-in for status updates.
    pub updates_opt_in: bool,
    /// Honeypot. Hidden on the form; empty on legitimate submissions.
    #[serde(rename = "bot-field")]
    pub bot_field: String,
}

impl Default for ResidentialQuoteForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            street: String::new(),
            apartment: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            service_type: ServiceTier::BasicClean,
            bedrooms: String::new(),
            bathrooms: String::new(),
            square_footage: String::new(),
            occupied: "Yes".to_string(),
            pets: "No".to_string(),
            preferred_date: String::new(),
            time_window: "Flexible".to_string(),
            add_ons: Vec::new(),
            frequency: Frequency::OneTime,
            notes: String::new(),
            consent: false,
            updates_opt_in: false,
            bot_field: String::new(),
        }
    }
}

/// Raw field values of the commercial quote form.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommercialQuoteForm {
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    /// Suite/floor designation. Optional.
    pub suite: String,
    pub city: String,
    /// Two-letter state code, required on this variant.
    pub state: String,
    pub zip: String,
    pub business_type: String,
    /// Free text shown when `business_type` is "Other".
    pub other_business_type: String,
    pub occupied: String,
    pub square_footage: String,
    pub num_rooms: String,
    pub num_bathrooms: String,
    pub num_floors: String,
    /// Services requested (multi-select).
    pub services: Vec<String>,
    pub service_description: String,
    /// Preferred service days (multi-select).
    pub preferred_days: Vec<String>,
    pub preferred_time: String,
    pub after_hours_allowed: String,
    pub start_time_window: String,
    pub frequency: Frequency,
    pub access_info: String,
    pub additional_notes: String,
    pub follow_up_preference: String,
    /// Must be true for a submission attempt to proceed.
    pub acknowledgment: bool,
    pub updates_opt_in: bool,
    #[serde(rename = "bot-field")]
    pub bot_field: String,
}

impl Default for CommercialQuoteForm {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            contact_name: String::new(),
            email: String::new(),
            phone: String::new(),
            street: String::new(),
            suite: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            business_type: "Office".to_string(),
            other_business_type: String::new(),
            occupied: "Yes".to_string(),
            square_footage: String::new(),
            num_rooms: String::new(),
            num_bathrooms: String::new(),
            num_floors: "1".to_string(),
            services: Vec::new(),
            service_description: String::new(),
            preferred_days: Vec::new(),
            preferred_time: "Morning".to_string(),
            after_hours_allowed: "No".to_string(),
            start_time_window: String::new(),
            frequency: Frequency::OneTime,
            access_info: String::new(),
            additional_notes: String::new(),
            follow_up_preference: "Email".to_string(),
            acknowledgment: false,
            updates_opt_in: false,
            bot_field: String::new(),
        }
    }
}

/// Raw field values of the schedule-change form (client portal).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleChangeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub current_frequency: Frequency,
    pub requested_frequency: Frequency,
    /// Requested start date for the new schedule, `YYYY-MM-DD`.
    pub start_date: String,
    pub notes: String,
    pub updates_opt_in: bool,
    #[serde(rename = "bot-field")]
    pub bot_field: String,
}

impl Default for ScheduleChangeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            current_frequency: Frequency::Biweekly,
            requested_frequency: Frequency::Biweekly,
            start_date: String::new(),
            notes: String::new(),
            updates_opt_in: false,
            bot_field: String::new(),
        }
    }
}

// ============ API Response Models ============

/// Response payload for a completed intake submission.
#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    /// Whether the submission was accepted. Always true once validation
    /// passes; sink delivery failures do not change the outcome.
    pub success: bool,
    /// Message shown on the confirmation screen.
    pub message: String,
    /// Human-readable correlation tag for staff follow-up.
    pub reference_id: String,
}
