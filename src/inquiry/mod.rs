//! Lead inquiry form.
//!
//! This module contains everything needed to collect a project inquiry:
//! - Form data types (`InquiryForm` and its option enums)
//! - Pure validation (`validate`, `is_submittable`)
//! - The submit lifecycle (`InquiryController`)
//! - Ports for delivery and user-facing notices

mod controller;
mod error;
mod notice;
mod submitter;
mod validation;

pub use controller::{FieldValue, InquiryController, SubmitOutcome, SubmitPhase, SubmitStart};
pub use error::SubmissionError;
pub use notice::{Notice, NoticeKind, Notifier};
pub use submitter::{HttpSubmitter, InquirySubmitter, LogSubmitter};
pub use validation::{is_submittable, validate, FieldErrorMap, MIN_REQUIREMENTS_CHARS};

use serde::{Deserialize, Serialize};

/// Implements `ALL`, `label` and wrap-around cycling for option enums.
///
macro_rules! options {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable label shown in the select widget.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn next(&self) -> $name {
                let index = Self::ALL.iter().position(|o| o == self).unwrap_or(0);
                Self::ALL[(index + 1) % Self::ALL.len()]
            }

            pub fn prev(&self) -> $name {
                let index = Self::ALL.iter().position(|o| o == self).unwrap_or(0);
                Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
            }
        }
    };
}

/// Kind of engagement the lead is asking about.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Prototype,
    Product,
    Research,
    Consulting,
    Other,
}

options!(ProjectType {
    Prototype => "Prototype / POC",
    Product => "Product build",
    Research => "Research",
    Consulting => "Consulting",
    Other => "Other",
});

/// Estimated budget bracket.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "lt10k")]
    Under10k,
    #[serde(rename = "10to25")]
    From10To25k,
    #[serde(rename = "25to50")]
    From25To50k,
    #[serde(rename = "50to100")]
    From50To100k,
    #[serde(rename = "gt100")]
    Over100k,
}

options!(Budget {
    Under10k => "Under $10k",
    From10To25k => "$10k – $25k",
    From25To50k => "$25k – $50k",
    From50To100k => "$50k – $100k",
    Over100k => "$100k+",
});

/// Desired delivery timeline.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "asap")]
    Asap,
    #[serde(rename = "1to3")]
    OneToThreeMonths,
    #[serde(rename = "3to6")]
    ThreeToSixMonths,
    #[serde(rename = "flexible")]
    Flexible,
}

options!(Timeline {
    Asap => "ASAP",
    OneToThreeMonths => "1–3 months",
    ThreeToSixMonths => "3–6 months",
    Flexible => "Flexible",
});

/// Structured lead inquiry as entered by the user.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    pub requirements: String,
}

/// Names of the inquiry form fields, in form order.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InquiryField {
    Name,
    Email,
    ProjectType,
    Budget,
    Timeline,
    Requirements,
}

impl InquiryField {
    pub const ALL: [InquiryField; 6] = [
        InquiryField::Name,
        InquiryField::Email,
        InquiryField::ProjectType,
        InquiryField::Budget,
        InquiryField::Timeline,
        InquiryField::Requirements,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InquiryField::Name => "Name",
            InquiryField::Email => "Email",
            InquiryField::ProjectType => "Project type",
            InquiryField::Budget => "Budget",
            InquiryField::Timeline => "Timeline",
            InquiryField::Requirements => "Requirements",
        }
    }

    /// Whether the field is picked from a fixed list rather than typed.
    pub fn is_select(&self) -> bool {
        matches!(
            self,
            InquiryField::ProjectType | InquiryField::Budget | InquiryField::Timeline
        )
    }

    pub fn next(&self) -> InquiryField {
        let index = *self as usize;
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> InquiryField {
        let index = *self as usize;
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
