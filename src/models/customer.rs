use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Seed profile for a synthetic customer.
#[derive(Debug, Clone, Copy)]
pub struct CustomerProfile {
    pub id: &'static str,
    pub name: &'static str,
    /// Scales the customer's typical spend.
    pub weight: Decimal,
    /// Days before the reference date from which the customer appears in history.
    pub start_offset: u32
}

impl CustomerProfile {
    const fn new(id: &'static str, name: &'static str, weight: Decimal, start_offset: u32) -> Self {
        Self { id, name, weight, start_offset }
    }

    /// Whether the customer has onboarded by `offset` days before the reference date.
    pub fn is_eligible(&self, offset: u32) -> bool {
        offset <= self.start_offset
    }
}

//NOTE: Order matters, the generator indexes into the eligible subset of this slice.
pub static CUSTOMERS: [CustomerProfile; 10] = [
    CustomerProfile::new("cus_aurora", "Aurora Coffee Roasters", dec!(1.35), 59),
    CustomerProfile::new("cus_birch", "Birch & Co. Outfitters", dec!(0.85), 59),
    CustomerProfile::new("cus_cobalt", "Cobalt Fitness Studio", dec!(1.10), 52),
    CustomerProfile::new("cus_dune", "Dune Surf Supply", dec!(0.70), 44),
    CustomerProfile::new("cus_ember", "Ember Bakery", dec!(0.60), 37),
    CustomerProfile::new("cus_fjord", "Fjord Design Lab", dec!(1.80), 28),
    CustomerProfile::new("cus_grove", "Grove Pharmacy", dec!(0.95), 19),
    CustomerProfile::new("cus_harbor", "Harbor Books", dec!(0.55), 9),
    CustomerProfile::new("cus_iris", "Iris Floral Studio", dec!(0.75), 4),
    CustomerProfile::new("cus_juniper", "Juniper Pet Care", dec!(1.20), 1),
];
