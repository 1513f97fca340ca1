//! Static catalog of Swedish pollinator plants and their bloom months.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    #[serde(skip)]
    pub id: &'static str,
    pub common_name: &'static str,
    pub scientific_name: &'static str,
    /// Months 1..=12, ascending, never empty.
    pub bloom_months: &'static [u8],
    pub pollinators: &'static [&'static str],
    pub description: &'static str,
    pub color: &'static str,
}

impl Plant {
    #[must_use]
    pub fn bloom_start(&self) -> u8 {
        self.bloom_months.first().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn bloom_end(&self) -> u8 {
        self.bloom_months.last().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn blooms_in(&self, month: u8) -> bool {
        self.bloom_months.contains(&month)
    }
}

static PLANTS: [Plant; 10] = [
    Plant {
        id: "hepatica_nobilis",
        common_name: "Blåsippa",
        scientific_name: "Hepatica nobilis",
        bloom_months: &[3, 4, 5],
        pollinators: &["bees", "flies"],
        description: "Early spring flower, critical for pollinators emerging from winter",
        color: "#9370DB",
    },
    Plant {
        id: "ranunculus_acris",
        common_name: "Smörblomma",
        scientific_name: "Ranunculus acris",
        bloom_months: &[5, 6, 7],
        pollinators: &["bees", "flies", "beetles"],
        description: "Common meadow flower, provides abundant nectar throughout summer",
        color: "#FFD700",
    },
    Plant {
        id: "achillea_millefolium",
        common_name: "Rölleka",
        scientific_name: "Achillea millefolium",
        bloom_months: &[6, 7, 8],
        pollinators: &["bees", "butterflies", "flies"],
        description: "Hardy perennial, excellent for continuous summer blooming",
        color: "#FFFFFF",
    },
    Plant {
        id: "calluna_vulgaris",
        common_name: "Ljung",
        scientific_name: "Calluna vulgaris",
        bloom_months: &[7, 8, 9],
        pollinators: &["bees", "bumblebees"],
        description: "Late summer bloomer, vital for autumn pollinators",
        color: "#DDA0DD",
    },
    Plant {
        id: "taraxacum_officinale",
        common_name: "Maskros",
        scientific_name: "Taraxacum officinale",
        bloom_months: &[4, 5, 6],
        pollinators: &["bees", "butterflies", "flies"],
        description: "Often overlooked but crucial early season food source",
        color: "#FFFF00",
    },
    Plant {
        id: "salix_caprea",
        common_name: "Videört (Sälg)",
        scientific_name: "Salix caprea",
        bloom_months: &[3, 4],
        pollinators: &["bees", "bumblebees"],
        description: "Willow catkins - one of the first pollen sources in spring",
        color: "#F0E68C",
    },
    Plant {
        id: "leucanthemum_vulgare",
        common_name: "Prästkrage",
        scientific_name: "Leucanthemum vulgare",
        bloom_months: &[6, 7],
        pollinators: &["bees", "flies", "butterflies"],
        description: "Classic Swedish meadow flower with long bloom period",
        color: "#FFFFFF",
    },
    Plant {
        id: "vicia_cracca",
        common_name: "Åkervicker",
        scientific_name: "Vicia cracca",
        bloom_months: &[6, 7, 8],
        pollinators: &["bees", "bumblebees"],
        description: "Native vetch providing protein-rich pollen",
        color: "#8B7BC8",
    },
    Plant {
        id: "trifolium_pratense",
        common_name: "Rödklöver",
        scientific_name: "Trifolium pratense",
        bloom_months: &[5, 6, 7, 8],
        pollinators: &["bees", "bumblebees"],
        description: "Red clover - excellent for long-tongued bumblebees",
        color: "#DC143C",
    },
    Plant {
        id: "trifolium_repens",
        common_name: "Vitklöver",
        scientific_name: "Trifolium repens",
        bloom_months: &[5, 6, 7, 8, 9],
        pollinators: &["bees", "honeybees"],
        description: "White clover - ground cover supporting many pollinator species",
        color: "#F5F5F5",
    },
];

/// All plants in catalog order.
#[must_use]
pub fn plants() -> &'static [Plant] {
    &PLANTS
}

#[must_use]
pub fn find(id: &str) -> Option<&'static Plant> {
    PLANTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
