//! Static checklist domain catalog.
//!
//! # Responsibility
//! - Hold the build-time-fixed list of life domains and their item labels.
//! - Provide read-only lookup helpers for views and the state store.
//!
//! # Invariants
//! - Domain ids are unique and stable; they key the persisted state.
//! - Item order is semantically meaningful: state flags align by index.

/// One named checklist category with an ordered list of item labels.
///
/// All fields are `'static` on purpose: the catalog is data, not state,
/// and nothing may mutate it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    /// Short stable identifier used as the state key.
    pub id: &'static str,
    /// Human-readable label shown in navigation.
    pub title: &'static str,
    /// Ordered checklist item labels; the index is the item identity.
    pub items: &'static [&'static str],
}

/// The full ordered catalog. Display order matters and is part of the API.
pub const DOMAIN_CATALOG: &[Domain] = &[
    Domain {
        id: "finances",
        title: "Finances Plan",
        items: &[
            "Current balances & liquidity map",
            "Emergency fund (cash vs. bank vs. mobile wallets)",
            "Currency diversification (USD, CAD, MXN, EUR)",
            "Payment tools set up: Revolut, Wise, PayPal; no-foreign-fee cards",
        ],
    },
    Domain {
        id: "work",
        title: "Work & Income Plan",
        items: &[
            "Remote work readiness (laptop, cloud files, Wi‑Fi backup)",
            "2‑month skill training plan (Google/IBM/Alison)",
            "Job platforms by country (LinkedIn, Job Bank CA, OCC Mundial MX, Europass EU)",
            "Side‑income tracks: tutoring, customer service, data entry, VA",
        ],
    },
    Domain {
        id: "housing",
        title: "Housing & Packing Plan",
        items: &[
            "Keep / sell / donate / store decisions",
            "Essentials‑only packing (≤ 2 suitcases per person)",
            "Furniture sell/donate plan",
            "Rental scouting checklist: safety, hospital proximity, walkability, cost < 30% income",
        ],
    },
    Domain {
        id: "travel",
        title: "Travel & Transport Plan",
        items: &[
            "Passports ready + copies (physical & digital)",
            "Driving plans (insurance, permits, maintenance)",
            "Flight options (Europe) + backup if canceled",
            "Border rules at a glance (Canada/Mexico)",
        ],
    },
    Domain {
        id: "safehouse",
        title: "Safe House & Destination Plan",
        items: &[
            "Shortlist cities by safety, jobs, hospitals, housing",
            "Primary & secondary fallback locations",
            "Short‑term rentals (Airbnb/Booking/local)",
            "Community contacts (libraries, nonprofits, faith groups)",
        ],
    },
    Domain {
        id: "family",
        title: "Family Coordination Plan",
        items: &[
            "Shared decisions (no preset roles)",
            "Weekly check‑ins (Signal/WhatsApp)",
            "Contingency if separated during travel",
            "Personal comfort/notes per person",
        ],
    },
    Domain {
        id: "car",
        title: "Car & Transportation Plan",
        items: &[
            "Title, insurance, maintenance, roadside kit",
            "Canada import rules (>30 days)",
            "Mexico TIP rules outside Baja/Sonora",
            "Resale vs. storage options",
        ],
    },
    Domain {
        id: "pets",
        title: "Pet Preparation Plan",
        items: &[
            "Vaccinations, health certificates, microchip",
            "Travel crate, food, vet contacts",
            "Entry requirements (CA/MX/EU)",
            "Foster/boarding backup",
        ],
    },
    Domain {
        id: "docs",
        title: "Documents & Records Plan",
        items: &[
            "Originals: passports, birth certs, car title, medical, academic",
            "Copies: physical + encrypted cloud & USB",
            "Emergency one‑pager (contacts, meds, accounts)",
            "POA / wills (optional)",
        ],
    },
    Domain {
        id: "prehealth",
        title: "Pre‑Move Health Plan",
        items: &[
            "Physical exam + bloodwork",
            "Dental (fillings/cleanings/crowns ahead of travel)",
            "Eye exam + updated Rx",
            "90‑day meds; vaccinations; travel vax if needed",
            "Women’s / Men’s screenings as age‑appropriate",
            "Medical records summary + basic health kit (ORS)",
        ],
    },
    Domain {
        id: "health",
        title: "Health & Medical Plan (On Arrival)",
        items: &[
            "First‑aid + Rx on hand",
            "Insurance: travel/expat/local",
            "Map nearest hospital/clinic",
            "Hydration & special‑needs support",
        ],
    },
    Domain {
        id: "comms",
        title: "Communications Plan",
        items: &[
            "Roaming plan or local SIM (Telcel/Rogers)",
            "Signal/WhatsApp/Telegram installed",
            "Google Voice for U.S. codes",
            "Offline maps + translation packs",
        ],
    },
    Domain {
        id: "indicators",
        title: "Indications & Warning Signs",
        items: &[
            "Unusual military/police presence",
            "Internet/phone blackouts",
            "Fuel/food shortages or rationing",
            "Banking limits / capital controls",
            "Curfews/checkpoints announced",
            "Anti‑foreigner targeting / protest escalation",
            "Violence spreading to once‑safe areas",
            "Embassy advisories urging departure",
        ],
    },
];

/// Returns the catalog in display order.
pub fn domain_catalog() -> &'static [Domain] {
    DOMAIN_CATALOG
}

/// Looks up one domain by stable id.
pub fn find_domain(id: &str) -> Option<&'static Domain> {
    DOMAIN_CATALOG.iter().find(|domain| domain.id == id)
}

/// Total number of checklist items across all domains.
pub fn catalog_item_total() -> usize {
    DOMAIN_CATALOG.iter().map(|domain| domain.items.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::{catalog_item_total, domain_catalog, find_domain};
    use std::collections::HashSet;

    #[test]
    fn domain_ids_are_unique() {
        let ids: HashSet<_> = domain_catalog().iter().map(|domain| domain.id).collect();
        assert_eq!(ids.len(), domain_catalog().len());
    }

    #[test]
    fn every_domain_has_items() {
        for domain in domain_catalog() {
            assert!(!domain.items.is_empty(), "domain {} has no items", domain.id);
        }
    }

    #[test]
    fn finances_domain_matches_expected_shape() {
        let finances = find_domain("finances").unwrap();
        assert_eq!(finances.title, "Finances Plan");
        assert_eq!(finances.items.len(), 4);
    }

    #[test]
    fn item_total_covers_all_domains() {
        let by_hand: usize = domain_catalog()
            .iter()
            .map(|domain| domain.items.len())
            .sum();
        assert_eq!(catalog_item_total(), by_hand);
    }

    #[test]
    fn unknown_domain_lookup_returns_none() {
        assert!(find_domain("does-not-exist").is_none());
    }
}
