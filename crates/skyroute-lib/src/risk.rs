/// Resting exposure rate for a traveler who has not moved yet.
const BASELINE_RATE: f64 = 0.001;

/// Per-traveler risk accumulator.
///
/// Exposure grows with the traffic volume of the airports a traveler moves
/// through and with their age. The network uses [`Traveler::link_risk`] to
/// derive edge weights before a Dijkstra run; the pathfinding core treats
/// those weights as opaque numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Traveler {
    age_rate: f64,
    current_rate: f64,
}

impl Default for Traveler {
    fn default() -> Self {
        Self {
            age_rate: 0.0,
            current_rate: BASELINE_RATE,
        }
    }
}

impl Traveler {
    /// Create a traveler with the given age in years.
    pub fn new(age: f64) -> Self {
        Self {
            age_rate: age / 1000.0,
            current_rate: BASELINE_RATE,
        }
    }

    /// Reset the accumulated rate to the exposure of a single airport.
    pub fn seed(&mut self, traffic: usize) {
        self.current_rate = hub_exposure(traffic) + self.age_rate;
    }

    /// Fold one more airport visit into the accumulated rate.
    ///
    /// Rates saturate at 1.0.
    pub fn accumulate(&mut self, traffic: usize) {
        self.current_rate =
            (self.current_rate * (1.0 + hub_exposure(traffic)) + self.age_rate).min(1.0);
    }

    /// Accumulated exposure rate so far.
    pub fn rate(&self) -> f64 {
        self.current_rate
    }

    /// Risk weight for traversing a link between two airports.
    ///
    /// Symmetric in its arguments so both stored directions of a link agree
    /// on the same weight. Always non-negative.
    pub fn link_risk(&self, source_traffic: usize, destination_traffic: usize) -> f64 {
        hub_exposure(source_traffic + destination_traffic) + self.age_rate
    }
}

/// Exposure contribution of one airport, scaled by its traffic volume.
///
/// Approaches 1.0 for large hubs and 0 for isolated airports.
fn hub_exposure(traffic: usize) -> f64 {
    if traffic == 0 {
        return 0.0;
    }
    (-1.0 / traffic as f64).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_traveler_starts_at_the_baseline() {
        let traveler = Traveler::default();
        assert_eq!(traveler.rate(), BASELINE_RATE);
    }

    #[test]
    fn accumulation_grows_with_each_visit() {
        let mut traveler = Traveler::new(30.0);
        traveler.seed(10);
        let seeded = traveler.rate();

        traveler.accumulate(10);
        assert!(traveler.rate() > seeded);
    }

    #[test]
    fn accumulated_rate_saturates_at_one() {
        let mut traveler = Traveler::new(90.0);
        traveler.seed(50);
        for _ in 0..100 {
            traveler.accumulate(50);
        }
        assert_eq!(traveler.rate(), 1.0);
    }

    #[test]
    fn busier_links_carry_more_risk() {
        let traveler = Traveler::new(40.0);
        assert!(traveler.link_risk(2, 2) < traveler.link_risk(20, 20));
    }

    #[test]
    fn link_risk_is_symmetric() {
        let traveler = Traveler::new(25.0);
        assert_eq!(traveler.link_risk(3, 11), traveler.link_risk(11, 3));
    }

    #[test]
    fn older_travelers_carry_more_link_risk() {
        let young = Traveler::new(20.0);
        let old = Traveler::new(80.0);
        assert!(old.link_risk(5, 5) > young.link_risk(5, 5));
    }
}
