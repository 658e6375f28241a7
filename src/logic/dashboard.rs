use crate::datasources::{FetchResult, ForecastProvider};
use crate::error::Result;
use crate::logic::{advisor, series};
use crate::models::{CitySnapshot, CityView, CompareView, ForecastDocument};

/// Outcome of the single-city view. Not-found is a value so the caller can
/// render one message and stop; advisory and series code never sees it.
#[derive(Debug, Clone)]
pub enum CityOutcome {
    NotFound,
    View(Box<CityView>),
}

/// Outcome of the two-city comparison. One combined not-found covers either
/// side failing; no partial view is produced.
#[derive(Debug, Clone)]
pub enum CompareOutcome {
    NotFound,
    View(CompareView),
}

/// Sequences fetch, advisory derivation, and series extraction per view and
/// hands plain view-models to the UI. Holds no state across invocations.
pub struct DashboardService<P: ForecastProvider> {
    provider: P,
}

impl<P: ForecastProvider> DashboardService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn city_view(&self, location: &str) -> Result<CityOutcome> {
        match self.provider.fetch(location).await? {
            FetchResult::UnknownLocation => Ok(CityOutcome::NotFound),
            FetchResult::Found(doc) => {
                let advisories = advisor::derive(&doc);
                let hourly = series::hourly_series(&doc);
                let daily = series::daily_series(&doc).to_vec();

                Ok(CityOutcome::View(Box::new(CityView {
                    location: doc.location,
                    current: doc.current,
                    advisories,
                    hourly,
                    daily,
                    alerts: doc.alerts,
                })))
            }
        }
    }

    pub async fn compare_view(&self, left: &str, right: &str) -> Result<CompareOutcome> {
        // Two independent sequential fetches, no shared state
        let left = self.provider.fetch(left).await?;
        let right = self.provider.fetch(right).await?;

        match (left, right) {
            (FetchResult::Found(l), FetchResult::Found(r)) => {
                Ok(CompareOutcome::View(CompareView {
                    left: snapshot(l),
                    right: snapshot(r),
                }))
            }
            _ => Ok(CompareOutcome::NotFound),
        }
    }
}

fn snapshot(doc: ForecastDocument) -> CitySnapshot {
    CitySnapshot {
        name: doc.location.name,
        country: doc.location.country,
        temp_c: doc.current.temp_c,
        condition_text: doc.current.condition_text,
    }
}
