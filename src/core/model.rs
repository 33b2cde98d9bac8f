//! Lawyer profile records and the closed enumerations they are built from

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the store. Positive, sequential, never reused.
pub type LawyerId = u64;

/// Legal specialty tags. Closed set; unknown tags are rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeArea {
    FamilyLaw,
    CriminalDefense,
    ImmigrationLaw,
    PersonalInjury,
    EstatePlanning,
    TaxLaw,
    EmploymentLaw,
    BusinessLaw,
    IntellectualProperty,
    RealEstateLaw,
}

impl PracticeArea {
    /// All practice areas, in canonical order.
    pub const ALL: [PracticeArea; 10] = [
        PracticeArea::FamilyLaw,
        PracticeArea::CriminalDefense,
        PracticeArea::ImmigrationLaw,
        PracticeArea::PersonalInjury,
        PracticeArea::EstatePlanning,
        PracticeArea::TaxLaw,
        PracticeArea::EmploymentLaw,
        PracticeArea::BusinessLaw,
        PracticeArea::IntellectualProperty,
        PracticeArea::RealEstateLaw,
    ];

    /// The wire tag, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeArea::FamilyLaw => "family_law",
            PracticeArea::CriminalDefense => "criminal_defense",
            PracticeArea::ImmigrationLaw => "immigration_law",
            PracticeArea::PersonalInjury => "personal_injury",
            PracticeArea::EstatePlanning => "estate_planning",
            PracticeArea::TaxLaw => "tax_law",
            PracticeArea::EmploymentLaw => "employment_law",
            PracticeArea::BusinessLaw => "business_law",
            PracticeArea::IntellectualProperty => "intellectual_property",
            PracticeArea::RealEstateLaw => "real_estate_law",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            PracticeArea::FamilyLaw => "Family Law",
            PracticeArea::CriminalDefense => "Criminal Defense",
            PracticeArea::ImmigrationLaw => "Immigration Law",
            PracticeArea::PersonalInjury => "Personal Injury",
            PracticeArea::EstatePlanning => "Estate Planning",
            PracticeArea::TaxLaw => "Tax Law",
            PracticeArea::EmploymentLaw => "Employment Law",
            PracticeArea::BusinessLaw => "Business Law",
            PracticeArea::IntellectualProperty => "Intellectual Property",
            PracticeArea::RealEstateLaw => "Real Estate Law",
        }
    }

    /// Parse a wire tag. Returns `None` for anything outside the enumeration.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|area| area.as_str() == tag)
    }
}

impl fmt::Display for PracticeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse seniority bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior (1-3 years)",
            ExperienceLevel::Mid => "Mid-level (4-9 years)",
            ExperienceLevel::Senior => "Senior (10+ years)",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.as_str() == tag)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lawyer profile record as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lawyer {
    pub id: LawyerId,
    pub name: String,
    pub profile_image: String,
    pub bio: String,
    pub practice_areas: Vec<PracticeArea>,
    pub hourly_rate: u32,
    pub rating: f64,
    pub review_count: u32,
    pub location: String,
    pub experience_level: ExperienceLevel,
    pub available_for_consultation: bool,
    pub featured: bool,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
}

/// Insert model: everything but the id, which the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLawyer {
    pub name: String,
    pub profile_image: String,
    pub bio: String,
    pub practice_areas: Vec<PracticeArea>,
    pub hourly_rate: u32,
    pub rating: f64,
    pub review_count: u32,
    pub location: String,
    pub experience_level: ExperienceLevel,
    #[serde(default = "default_true")]
    pub available_for_consultation: bool,
    #[serde(default)]
    pub featured: bool,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
}

fn default_true() -> bool {
    true
}

impl NewLawyer {
    /// Attach a store-assigned id, producing the full record.
    pub fn into_lawyer(self, id: LawyerId) -> Lawyer {
        Lawyer {
            id,
            name: self.name,
            profile_image: self.profile_image,
            bio: self.bio,
            practice_areas: self.practice_areas,
            hourly_rate: self.hourly_rate,
            rating: self.rating,
            review_count: self.review_count,
            location: self.location,
            experience_level: self.experience_level,
            available_for_consultation: self.available_for_consultation,
            featured: self.featured,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            address: self.address,
        }
    }
}

/// Partial update: present fields overwrite, absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LawyerPatch {
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub practice_areas: Option<Vec<PracticeArea>>,
    pub hourly_rate: Option<u32>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub location: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub available_for_consultation: Option<bool>,
    pub featured: Option<bool>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

impl LawyerPatch {
    /// Merge this patch over an existing record.
    pub fn apply_to(&self, lawyer: &mut Lawyer) {
        if let Some(name) = &self.name {
            lawyer.name = name.clone();
        }
        if let Some(profile_image) = &self.profile_image {
            lawyer.profile_image = profile_image.clone();
        }
        if let Some(bio) = &self.bio {
            lawyer.bio = bio.clone();
        }
        if let Some(practice_areas) = &self.practice_areas {
            lawyer.practice_areas = practice_areas.clone();
        }
        if let Some(hourly_rate) = self.hourly_rate {
            lawyer.hourly_rate = hourly_rate;
        }
        if let Some(rating) = self.rating {
            lawyer.rating = rating;
        }
        if let Some(review_count) = self.review_count {
            lawyer.review_count = review_count;
        }
        if let Some(location) = &self.location {
            lawyer.location = location.clone();
        }
        if let Some(experience_level) = self.experience_level {
            lawyer.experience_level = experience_level;
        }
        if let Some(available) = self.available_for_consultation {
            lawyer.available_for_consultation = available;
        }
        if let Some(featured) = self.featured {
            lawyer.featured = featured;
        }
        if let Some(contact_email) = &self.contact_email {
            lawyer.contact_email = contact_email.clone();
        }
        if let Some(contact_phone) = &self.contact_phone {
            lawyer.contact_phone = contact_phone.clone();
        }
        if let Some(address) = &self.address {
            lawyer.address = address.clone();
        }
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
