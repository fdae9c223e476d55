/// One sample of the market chart: epoch milliseconds and the quoted price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub time: i64,
    pub price: f64,
}

impl PricePoint {
    pub const fn new(time: i64, price: f64) -> Self {
        Self { time, price }
    }
}

// A [timestamp, price] pair as CoinGecko sends it. Timestamps arrive as JSON numbers
// and are truncated to whole milliseconds.
impl From<[f64; 2]> for PricePoint {
    fn from([time, price]: [f64; 2]) -> Self {
        Self {
            time: time as i64,
            price,
        }
    }
}

/// Price samples in the order the API returned them (ascending time in practice).
/// The order is never checked or re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<PricePoint>,
}

impl Series {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn times(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.time).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}

impl FromIterator<PricePoint> for Series {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_conversion_keeps_timestamp_and_price() {
        let p = PricePoint::from([1_700_000_000_123.0, 50_100.25]);
        assert_eq!(p.time, 1_700_000_000_123);
        assert_eq!(p.price, 50_100.25);
    }

    #[test]
    fn series_keeps_insertion_order() {
        let series: Series = [(2000, 2.0), (1000, 1.0), (3000, 3.0)]
            .into_iter()
            .map(|(t, p)| PricePoint::new(t, p))
            .collect();
        assert_eq!(series.times(), vec![2000, 1000, 3000]);
        assert_eq!(series.prices(), vec![2.0, 1.0, 3.0]);
        assert_eq!(series.last(), Some(&PricePoint::new(3000, 3.0)));
    }
}
