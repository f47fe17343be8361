use serde::Serialize;

/// Inclusive price interval; `max: None` means "and above".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl PriceRange {
    pub const fn new(min: u32, max: Option<u32>) -> Self {
        return Self { min, max };
    }

    pub fn contains(&self, price: f64) -> bool {
        match self.max {
            Some(max) => price >= self.min as f64 && price <= max as f64,
            None => price >= self.min as f64,
        }
    }
}

pub const PRICE_RANGES: [PriceRange; 10] = [
    PriceRange::new(0, Some(100)),
    PriceRange::new(101, Some(200)),
    PriceRange::new(201, Some(300)),
    PriceRange::new(301, Some(400)),
    PriceRange::new(401, Some(500)),
    PriceRange::new(501, Some(600)),
    PriceRange::new(601, Some(700)),
    PriceRange::new(701, Some(800)),
    PriceRange::new(801, Some(900)),
    PriceRange::new(901, None),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRangeCount {
    pub range: PriceRange,
    pub count: i64,
}
