//! Compiled-in product list.

use super::aggregate::Product;
use crate::enums::ProductCategory::{Climate, Components, Iot, Multimedia, Security};
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(
            1,
            "Elevator Cabin AC System",
            Climate,
            "Specialized HVAC system for elevator cabins with energy-efficient operation.",
            &["Energy Efficient", "Low Noise", "Compact Design"],
            "fas fa-snowflake",
        ),
        Product::new(
            2,
            "360° Surveillance Camera",
            Security,
            "Advanced 360-degree surveillance system with night vision.",
            &["4K Resolution", "Night Vision", "Wide Angle"],
            "fas fa-video",
        ),
        Product::new(
            3,
            "Touch Screen Control Panel",
            Components,
            "Modern touch screen interface for elevator control.",
            &["Touch Screen", "Multi-language", "ADA Compliant"],
            "fas fa-sliders-h",
        ),
        Product::new(
            4,
            "Digital Multimedia Display",
            Multimedia,
            "High-resolution digital display for elevator entertainment.",
            &["Full HD", "Weatherproof", "Remote Management"],
            "fas fa-tv",
        ),
        Product::new(
            5,
            "IOT Smart Sensor Kit",
            Iot,
            "Wireless sensor kit for predictive maintenance.",
            &["Wireless", "Real-time Data", "Predictive Alerts"],
            "fas fa-wifi",
        ),
        Product::new(
            6,
            "Emergency Communication System",
            Security,
            "Integrated emergency communication system.",
            &["Two-way Audio", "Auto Alarm", "Battery Backup"],
            "fas fa-phone-alt",
        ),
        Product::new(
            7,
            "Ventilation Control Unit",
            Climate,
            "Advanced ventilation control for optimal air quality.",
            &["Auto Mode", "Air Quality Sensor", "Quiet Operation"],
            "fas fa-wind",
        ),
        Product::new(
            8,
            "Premium Audio System",
            Multimedia,
            "High-fidelity audio system for elevator announcements.",
            &["HD Audio", "Multi-zone", "Weather Resistant"],
            "fas fa-volume-up",
        ),
        Product::new(
            9,
            "LED Lighting System",
            Components,
            "Energy-efficient LED lighting with emergency backup.",
            &["LED", "Energy Saving", "Emergency Backup"],
            "fas fa-lightbulb",
        ),
        Product::new(
            10,
            "Floor Position Indicator",
            Components,
            "Digital floor display with braille for accessibility.",
            &["Digital Display", "Braille", "ADA Compliant"],
            "fas fa-layer-group",
        ),
        Product::new(
            11,
            "Door Safety Sensor",
            Security,
            "Advanced safety sensors for elevator doors.",
            &["Laser Sensors", "Auto Reverse", "Safety Certified"],
            "fas fa-door-closed",
        ),
        Product::new(
            12,
            "Smart Control Panel",
            Iot,
            "AI-powered control system for smart elevators.",
            &["AI Powered", "Touch Interface", "Cloud Connected"],
            "fas fa-brain",
        ),
        Product::new(
            13,
            "Emergency Lighting",
            Components,
            "Backup lighting system for power outages.",
            &["LED", "Auto On", "Long Battery"],
            "fas fa-light-emergency",
        ),
        Product::new(
            14,
            "Air Purification System",
            Climate,
            "Advanced air purification for elevator cabins.",
            &["HEPA Filter", "UV Sterilization", "Auto Mode"],
            "fas fa-air-freshener",
        ),
        Product::new(
            15,
            "Digital Signage Display",
            Multimedia,
            "Interactive digital signage for elevators.",
            &["Interactive", "High Brightness", "Remote Update"],
            "fas fa-ad",
        ),
    ]
});

/// The full product list in source order
pub fn list_catalog() -> &'static [Product] {
    CATALOG.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        let catalog = list_catalog();
        assert_eq!(catalog.len(), 15);

        let ids: Vec<u32> = catalog.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());

        let unique: HashSet<_> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn test_catalog_is_shared() {
        assert!(std::ptr::eq(list_catalog(), list_catalog()));
    }
}
