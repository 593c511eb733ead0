//! Services and service areas offered on the quote form
//!
//! The catalog is informational. Submission only checks that a service was
//! chosen, never that the id appears here.

use serde::Serialize;

/// How a service is priced on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceGuide {
    /// Starting price in whole dollars
    Starting { dollars: u32 },
    /// Percentage saving on the regular price
    Saving { percent: u8 },
    /// Priced per job after a quote
    OnRequest,
}

impl std::fmt::Display for PriceGuide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceGuide::Starting { dollars } => write!(f, "From ${}", dollars),
            PriceGuide::Saving { percent } => write!(f, "Save {}%", percent),
            PriceGuide::OnRequest => f.write_str("Quote on Request"),
        }
    }
}

/// One selectable service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    /// Value submitted in the `service` field
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    pub price: PriceGuide,
}

pub const SERVICES: [ServiceOption; 6] = [
    ServiceOption {
        id: "single-oven",
        label: "Single Oven Cleaning",
        price: PriceGuide::Starting { dollars: 99 },
    },
    ServiceOption {
        id: "double-oven",
        label: "Double Oven Deep Clean",
        price: PriceGuide::Starting { dollars: 129 },
    },
    ServiceOption {
        id: "commercial",
        label: "Commercial Oven Cleaning",
        price: PriceGuide::OnRequest,
    },
    ServiceOption {
        id: "cooktop",
        label: "Cooktop & Range Cleaning",
        price: PriceGuide::Starting { dollars: 79 },
    },
    ServiceOption {
        id: "move-out",
        label: "Move-Out Cleaning",
        price: PriceGuide::Starting { dollars: 149 },
    },
    ServiceOption {
        id: "maintenance",
        label: "Maintenance Package",
        price: PriceGuide::Saving { percent: 15 },
    },
];

pub const SERVICE_AREAS: [&str; 6] = [
    "Chadstone & Surrounds",
    "Malvern & Malvern East",
    "Glen Waverley",
    "Caulfield & Elsternwick",
    "Brighton & Bentleigh",
    "All Melbourne Suburbs",
];

/// Look up a service by the id submitted in the form
pub fn find_service(id: &str) -> Option<&'static ServiceOption> {
    SERVICES.iter().find(|s| s.id == id)
}
