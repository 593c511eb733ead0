//! Service catalog handler

use crate::cli::ServicesArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use quoteform_core::{ServiceOption, SERVICES, SERVICE_AREAS};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Catalog {
    services: &'static [ServiceOption],
    #[serde(skip_serializing_if = "Option::is_none")]
    areas: Option<&'static [&'static str]>,
}

/// Handle the services command
pub fn handle_services(args: ServicesArgs, output: &mut OutputWriter) -> Result<()> {
    let areas: &'static [&'static str] = &SERVICE_AREAS;
    let catalog = Catalog {
        services: &SERVICES,
        areas: args.areas.then_some(areas),
    };

    if !output.is_human() {
        return output.data(&catalog);
    }

    output.section("Services")?;
    output.services(catalog.services)?;

    if let Some(areas) = catalog.areas {
        output.section("Service Areas")?;
        for area in areas {
            output.writeln(&format!("  • {}", area))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_serialization() {
        let catalog = Catalog {
            services: &SERVICES,
            areas: None,
        };
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value["services"].as_array().unwrap().len(), SERVICES.len());
        assert_eq!(value["services"][0]["id"], "single-oven");
        assert_eq!(value["services"][0]["price"], serde_json::json!({"kind": "starting", "dollars": 99}));
        assert!(value.get("areas").is_none());
    }
}
