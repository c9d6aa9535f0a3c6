//! Synthetic flight inventory.
//!
//! Generates a fixed-size batch of plausible offers per query: departures
//! spread across the day from 06:00 at three-hour intervals, randomized
//! duration, price, and seat availability, mostly direct. Offers are
//! returned cheapest first and never persisted.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::domain::travel::{Baggage, CabinClass, FlightOffer, FlightPrice, FlightQuery};
use crate::ports::{FlightInventory, InventoryError};

const OFFERS_PER_QUERY: usize = 5;

const AIRLINES: &[(&str, &str)] = &[
    ("United Airlines", "UA"),
    ("Delta", "DL"),
    ("American Airlines", "AA"),
    ("JetBlue", "B6"),
    ("Southwest", "WN"),
];

// Three direct entries to one single-stop keeps most offers nonstop.
const STOP_CHOICES: &[u32] = &[0, 0, 0, 1];
const CHECKED_BAG_CHOICES: &[u32] = &[0, 1, 2];

/// Inventory that fabricates offers in-process.
pub struct SyntheticFlightInventory {
    rng: Mutex<StdRng>,
}

impl Default for SyntheticFlightInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticFlightInventory {
    /// Creates an inventory seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a deterministic inventory for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn generate(&self, query: &FlightQuery) -> Vec<FlightOffer> {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let midnight = Utc.from_utc_datetime(
            &query
                .date()
                .and_hms_opt(0, 0, 0)
                .unwrap_or_default(),
        );

        let mut offers: Vec<FlightOffer> = (0..OFFERS_PER_QUERY)
            .map(|i| {
                let departure_time = midnight + Duration::hours(6 + (i as i64) * 3);
                let arrival_time = departure_time + Duration::hours(rng.gen_range(2..=8));
                let per_person: u32 = rng.gen_range(200..=800);
                let (airline, code) = AIRLINES[rng.gen_range(0..AIRLINES.len())];

                FlightOffer {
                    flight_id: format!("FL{}", rng.gen_range(1000..=9999)),
                    airline: airline.to_string(),
                    flight_number: format!("{}{}", code, rng.gen_range(100..=999)),
                    origin: query.origin().to_string(),
                    destination: query.destination().to_string(),
                    departure_time,
                    arrival_time,
                    duration_minutes: (arrival_time - departure_time).num_minutes(),
                    stops: STOP_CHOICES[rng.gen_range(0..STOP_CHOICES.len())],
                    price: FlightPrice {
                        amount: per_person * query.passengers(),
                        currency: "USD".to_string(),
                        per_person,
                    },
                    seats_available: rng.gen_range(5..=50),
                    cabin_class: CabinClass::Economy,
                    baggage: Baggage {
                        carry_on: 1,
                        checked: CHECKED_BAG_CHOICES[rng.gen_range(0..CHECKED_BAG_CHOICES.len())],
                    },
                }
            })
            .collect();

        offers.sort_by_key(|offer| offer.price.amount);
        offers
    }
}

#[async_trait]
impl FlightInventory for SyntheticFlightInventory {
    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, InventoryError> {
        Ok(self.generate(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn query(passengers: u32) -> FlightQuery {
        FlightQuery::new(
            "SFO",
            "NRT",
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            passengers,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_five_offers() {
        let inventory = SyntheticFlightInventory::with_seed(7);
        let offers = inventory.search(&query(2)).await.unwrap();
        assert_eq!(offers.len(), 5);
    }

    #[tokio::test]
    async fn offers_are_sorted_by_total_price() {
        let inventory = SyntheticFlightInventory::with_seed(7);
        let offers = inventory.search(&query(2)).await.unwrap();

        for pair in offers.windows(2) {
            assert!(pair[0].price.amount <= pair[1].price.amount);
        }
    }

    #[tokio::test]
    async fn prices_scale_with_passenger_count() {
        let inventory = SyntheticFlightInventory::with_seed(7);

        for passengers in 1..=9 {
            let offers = inventory.search(&query(passengers)).await.unwrap();
            for offer in offers {
                assert!(offer.price.per_person >= 200 && offer.price.per_person <= 800);
                assert_eq!(offer.price.amount, offer.price.per_person * passengers);
                assert!(offer.price.amount > 0);
            }
        }
    }

    #[tokio::test]
    async fn arrival_is_after_departure() {
        let inventory = SyntheticFlightInventory::with_seed(42);
        let offers = inventory.search(&query(1)).await.unwrap();

        for offer in offers {
            assert!(offer.arrival_time > offer.departure_time);
            assert_eq!(
                offer.duration_minutes,
                (offer.arrival_time - offer.departure_time).num_minutes()
            );
            assert!(offer.duration_minutes >= 120 && offer.duration_minutes <= 480);
        }
    }

    #[tokio::test]
    async fn offers_carry_query_route_and_date() {
        let inventory = SyntheticFlightInventory::with_seed(3);
        let offers = inventory.search(&query(1)).await.unwrap();

        for offer in &offers {
            assert_eq!(offer.origin, "SFO");
            assert_eq!(offer.destination, "NRT");
            assert_eq!(
                offer.departure_time.date_naive(),
                NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
            );
            assert!(offer.stops <= 1);
            assert!(offer.seats_available >= 5 && offer.seats_available <= 50);
            assert_eq!(offer.cabin_class, CabinClass::Economy);
            assert_eq!(offer.baggage.carry_on, 1);
        }
    }

    #[tokio::test]
    async fn seeded_inventory_is_deterministic() {
        let a = SyntheticFlightInventory::with_seed(99);
        let b = SyntheticFlightInventory::with_seed(99);

        let offers_a = a.search(&query(2)).await.unwrap();
        let offers_b = b.search(&query(2)).await.unwrap();
        assert_eq!(offers_a, offers_b);
    }
}
