//! Built-in starter catalog and idempotent seeding

use anyhow::Result;

use crate::core::model::{ExperienceLevel, NewLawyer, PracticeArea};
use crate::storage::LawyerStore;

/// Populate the store from the starter catalog, but only when it is empty.
/// Returns the number of records inserted (0 on an already-populated store).
pub async fn seed_if_empty(store: &dyn LawyerStore) -> Result<usize> {
    if !store.list().await?.is_empty() {
        return Ok(0);
    }

    let profiles = starter_profiles();
    let count = profiles.len();
    for profile in profiles {
        store.create(profile).await?;
    }
    tracing::info!(count, "seeded starter lawyer catalog");

    Ok(count)
}

/// The starter catalog served before any records are created through the API.
pub fn starter_profiles() -> Vec<NewLawyer> {
    vec![
        profile(
            "Sarah Mitchell",
            "https://images.example.com/profiles/sarah-mitchell.jpg",
            "Former prosecutor with a decade of courtroom experience, now \
             representing families through divorce, custody, and adoption \
             proceedings.",
            vec![PracticeArea::FamilyLaw, PracticeArea::EstatePlanning],
            275,
            4.9,
            124,
            "Seattle, WA",
            ExperienceLevel::Senior,
            true,
            true,
            "sarah.mitchell@example.com",
            "+12065550114",
            "1201 Third Avenue, Suite 2200, Seattle, WA 98101",
        ),
        profile(
            "David Chen",
            "https://images.example.com/profiles/david-chen.jpg",
            "Defends clients in state and federal criminal matters, from DUI \
             charges to white-collar investigations.",
            vec![PracticeArea::CriminalDefense],
            320,
            4.7,
            98,
            "San Francisco, CA",
            ExperienceLevel::Senior,
            true,
            false,
            "david.chen@example.com",
            "+14155550162",
            "580 California Street, San Francisco, CA 94104",
        ),
        profile(
            "Maria Alvarez",
            "https://images.example.com/profiles/maria-alvarez.jpg",
            "Guides individuals and employers through visas, green cards, \
             asylum claims, and naturalization.",
            vec![PracticeArea::ImmigrationLaw, PracticeArea::FamilyLaw],
            180,
            4.8,
            156,
            "Austin, TX",
            ExperienceLevel::Mid,
            true,
            true,
            "maria.alvarez@example.com",
            "+15125550147",
            "98 San Jacinto Blvd, Austin, TX 78701",
        ),
        profile(
            "James Okafor",
            "https://images.example.com/profiles/james-okafor.jpg",
            "Personal injury litigator focused on motor vehicle accidents and \
             workplace injuries. No fee unless we win.",
            vec![PracticeArea::PersonalInjury],
            225,
            4.6,
            211,
            "Chicago, IL",
            ExperienceLevel::Senior,
            true,
            false,
            "james.okafor@example.com",
            "+13125550139",
            "233 S Wacker Dr, Chicago, IL 60606",
        ),
        profile(
            "Emily Rosenberg",
            "https://images.example.com/profiles/emily-rosenberg.jpg",
            "Helps families protect what they have built: wills, trusts, \
             probate, and elder-law planning.",
            vec![PracticeArea::EstatePlanning, PracticeArea::TaxLaw],
            195,
            4.5,
            87,
            "Boston, MA",
            ExperienceLevel::Mid,
            true,
            false,
            "emily.rosenberg@example.com",
            "+16175550128",
            "53 State Street, Boston, MA 02109",
        ),
        profile(
            "Robert Kim",
            "https://images.example.com/profiles/robert-kim.jpg",
            "Advises startups and closely held businesses on tax strategy, \
             audits, and IRS disputes.",
            vec![PracticeArea::TaxLaw, PracticeArea::BusinessLaw],
            350,
            4.4,
            64,
            "New York, NY",
            ExperienceLevel::Senior,
            false,
            false,
            "robert.kim@example.com",
            "+12125550171",
            "1 Liberty Plaza, New York, NY 10006",
        ),
        profile(
            "Aisha Thompson",
            "https://images.example.com/profiles/aisha-thompson.jpg",
            "Represents employees in discrimination, wrongful termination, \
             and wage-and-hour claims.",
            vec![PracticeArea::EmploymentLaw],
            160,
            4.7,
            142,
            "Atlanta, GA",
            ExperienceLevel::Mid,
            true,
            true,
            "aisha.thompson@example.com",
            "+14045550118",
            "191 Peachtree St NE, Atlanta, GA 30303",
        ),
        profile(
            "Michael O'Brien",
            "https://images.example.com/profiles/michael-obrien.jpg",
            "General counsel services for small businesses: formation, \
             contracts, and commercial disputes.",
            vec![PracticeArea::BusinessLaw, PracticeArea::RealEstateLaw],
            210,
            4.3,
            53,
            "Denver, CO",
            ExperienceLevel::Mid,
            true,
            false,
            "michael.obrien@example.com",
            "+13035550193",
            "1801 California St, Denver, CO 80202",
        ),
        profile(
            "Priya Sharma",
            "https://images.example.com/profiles/priya-sharma.jpg",
            "Patent and trademark attorney for software and biotech \
             companies; former USPTO examiner.",
            vec![PracticeArea::IntellectualProperty, PracticeArea::BusinessLaw],
            400,
            4.9,
            76,
            "San Jose, CA",
            ExperienceLevel::Senior,
            true,
            false,
            "priya.sharma@example.com",
            "+14085550186",
            "2 N Market St, San Jose, CA 95113",
        ),
        profile(
            "Thomas Gallagher",
            "https://images.example.com/profiles/thomas-gallagher.jpg",
            "Closings, leases, zoning, and title disputes for residential and \
             commercial property.",
            vec![PracticeArea::RealEstateLaw],
            145,
            4.1,
            38,
            "Portland, OR",
            ExperienceLevel::Junior,
            true,
            false,
            "thomas.gallagher@example.com",
            "+15035550154",
            "805 SW Broadway, Portland, OR 97205",
        ),
        profile(
            "Linda Nakamura",
            "https://images.example.com/profiles/linda-nakamura.jpg",
            "Compassionate family law practice centered on mediation and \
             collaborative divorce.",
            vec![PracticeArea::FamilyLaw],
            130,
            3.9,
            29,
            "Minneapolis, MN",
            ExperienceLevel::Junior,
            false,
            false,
            "linda.nakamura@example.com",
            "+16125550167",
            "80 S 8th St, Minneapolis, MN 55402",
        ),
        profile(
            "Carlos Mendez",
            "https://images.example.com/profiles/carlos-mendez.jpg",
            "Bilingual criminal defense and immigration practice serving the \
             greater Miami area.",
            vec![PracticeArea::CriminalDefense, PracticeArea::ImmigrationLaw],
            175,
            4.2,
            61,
            "Miami, FL",
            ExperienceLevel::Mid,
            true,
            false,
            "carlos.mendez@example.com",
            "+13055550175",
            "200 S Biscayne Blvd, Miami, FL 33131",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn profile(
    name: &str,
    profile_image: &str,
    bio: &str,
    practice_areas: Vec<PracticeArea>,
    hourly_rate: u32,
    rating: f64,
    review_count: u32,
    location: &str,
    experience_level: ExperienceLevel,
    available_for_consultation: bool,
    featured: bool,
    contact_email: &str,
    contact_phone: &str,
    address: &str,
) -> NewLawyer {
    NewLawyer {
        name: name.to_string(),
        profile_image: profile_image.to_string(),
        bio: bio.to_string(),
        practice_areas,
        hourly_rate,
        rating,
        review_count,
        location: location.to_string(),
        experience_level,
        available_for_consultation,
        featured,
        contact_email: contact_email.to_string(),
        contact_phone: contact_phone.to_string(),
        address: address.to_string(),
    }
}
