// src/domain/tier.rs

/// Characters stripped around a stored tier name. The SQL filter trims
/// exactly the same set, see [`SQL_TRIM_CHARS`].
pub const STORED_TRIM_CHARS: [char; 6] = [' ', '\t', '\n', '\u{b}', '\u{c}', '\r'];
pub const SQL_TRIM_CHARS: &str = "char(32, 9, 10, 11, 12, 13)";

/// Display category a property is bucketed into by price.
///
/// The bands are the only place thresholds live; badges, filters and the
/// tier guide page all read them from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvestmentTier {
    Starter,
    MidRange,
    Luxury,
    LuxuryPlus,
    LuxuryPremium,
    UltraPrime,
}

/// Inclusive upper bound of each band, in listing currency units.
const BANDS: [(i64, InvestmentTier); 5] = [
    (200_000, InvestmentTier::Starter),
    (500_000, InvestmentTier::MidRange),
    (1_000_000, InvestmentTier::Luxury),
    (3_000_000, InvestmentTier::LuxuryPlus),
    (4_999_999, InvestmentTier::LuxuryPremium),
];

impl InvestmentTier {
    pub const ALL: [InvestmentTier; 6] = [
        InvestmentTier::Starter,
        InvestmentTier::MidRange,
        InvestmentTier::Luxury,
        InvestmentTier::LuxuryPlus,
        InvestmentTier::LuxuryPremium,
        InvestmentTier::UltraPrime,
    ];

    /// Pure and total: every price maps to exactly one tier.
    pub fn from_price(price: i64) -> Self {
        BANDS
            .iter()
            .find(|(upper, _)| price <= *upper)
            .map(|(_, tier)| *tier)
            .unwrap_or(InvestmentTier::UltraPrime)
    }

    /// Inclusive price range of the band, `None` meaning unbounded on that side.
    pub fn price_bounds(self) -> (Option<i64>, Option<i64>) {
        let idx = BANDS.iter().position(|(_, t)| *t == self);
        let upper = idx.map(|i| BANDS[i].0);
        let lower = match idx {
            Some(0) => None,
            Some(i) => Some(BANDS[i - 1].0 + 1),
            None => BANDS.last().map(|(upper, _)| upper + 1),
        };
        (lower, upper)
    }

    /// Matches a stored tier name, ignoring ASCII case and surrounding
    /// ASCII whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim_matches(STORED_TRIM_CHARS);
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(name))
    }

    /// The stored tier when it is one we know, otherwise derived from price.
    pub fn resolve(stored: Option<&str>, price: i64) -> Self {
        stored
            .and_then(Self::parse)
            .unwrap_or_else(|| Self::from_price(price))
    }

    pub fn name(self) -> &'static str {
        match self {
            InvestmentTier::Starter => "Starter",
            InvestmentTier::MidRange => "Mid-range",
            InvestmentTier::Luxury => "Luxury",
            InvestmentTier::LuxuryPlus => "Luxury Plus",
            InvestmentTier::LuxuryPremium => "Luxury Premium",
            InvestmentTier::UltraPrime => "Ultra Prime",
        }
    }

    pub fn range_label(self) -> &'static str {
        match self {
            InvestmentTier::Starter => "≤ €200,000",
            InvestmentTier::MidRange => "€200,001–€500,000",
            InvestmentTier::Luxury => "€500,001–€1,000,000",
            InvestmentTier::LuxuryPlus => "€1,000,001–€3,000,000",
            InvestmentTier::LuxuryPremium => "€3,000,001–€4,999,999",
            InvestmentTier::UltraPrime => "≥ €5,000,000",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            InvestmentTier::Starter => "Accessible entry point into the market. Ideal for first-time investors, typically studio or one-bedroom apartments in developing areas with growth potential.",
            InvestmentTier::MidRange => "Balanced investment potential. Usually two or three bedrooms in established neighbourhoods with good amenities.",
            InvestmentTier::Luxury => "Premium locations with high-quality finishes, desirable views and prime positioning within their neighbourhoods.",
            InvestmentTier::LuxuryPlus => "Entry into the exclusive market: distinctive architecture, premium materials and prestigious addresses.",
            InvestmentTier::LuxuryPremium => "Exceptional properties with architectural significance, premium craftsmanship and expansive spaces.",
            InvestmentTier::UltraPrime => "Landmark properties with unparalleled design, location and amenities.",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            InvestmentTier::Starter => "badge badge-blue",
            InvestmentTier::MidRange => "badge badge-green",
            InvestmentTier::Luxury => "badge badge-purple",
            InvestmentTier::LuxuryPlus => "badge badge-amber",
            InvestmentTier::LuxuryPremium => "badge badge-rose",
            InvestmentTier::UltraPrime => "badge badge-gold",
        }
    }
}

impl std::fmt::Display for InvestmentTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
