use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub const FORECAST_DAYS: u64 = 5;

/// Qualitative description of a day's weather.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Summary {
    Freezing,
    Bracing,
    Chilly,
    Cool,
    Mild,
    Warm,
    Balmy,
    Hot,
    Sweltering,
    Scorching,
}

impl Summary {
    pub const ALL: [Summary; 10] = [
        Summary::Freezing,
        Summary::Bracing,
        Summary::Chilly,
        Summary::Cool,
        Summary::Mild,
        Summary::Warm,
        Summary::Balmy,
        Summary::Hot,
        Summary::Sweltering,
        Summary::Scorching,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Summary::Freezing => "Freezing",
            Summary::Bracing => "Bracing",
            Summary::Chilly => "Chilly",
            Summary::Cool => "Cool",
            Summary::Mild => "Mild",
            Summary::Warm => "Warm",
            Summary::Balmy => "Balmy",
            Summary::Hot => "Hot",
            Summary::Sweltering => "Sweltering",
            Summary::Scorching => "Scorching",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Summary {
        Summary::ALL[rng.random_range(0..Summary::ALL.len())]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day's forecast.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[schema(as = WeatherForecast)]
pub struct ForecastRecord {
    /// Calendar date the forecast applies to.
    #[schema(example = "2024-01-11")]
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: Summary,
}

impl ForecastRecord {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Summary) -> ForecastRecord {
        ForecastRecord {
            date,
            temperature_c,
            temperature_f: fahrenheit_from_celsius(temperature_c),
            summary,
        }
    }
}

fn fahrenheit_from_celsius(celsius: i32) -> i32 {
    32 + (f64::from(celsius) / 0.5556) as i32
}

/// Creates the forecast for the days following `today`, one record per day
/// with an independently drawn summary. Temperatures are left at zero.
pub fn generate<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Vec<ForecastRecord> {
    (1..=FORECAST_DAYS)
        .map_while(|index| today.checked_add_days(Days::new(index)))
        .map(|date| ForecastRecord::new(date, 0, Summary::random(rng)))
        .collect()
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn generates_five_records() {
        let forecast = generate(date(2024, 1, 10), &mut rand::rng());
        assert_eq!(forecast.len(), 5);
    }

    #[test]
    fn dates_follow_today() {
        let forecast = generate(date(2024, 1, 10), &mut StdRng::seed_from_u64(7));
        let dates: Vec<NaiveDate> = forecast.iter().map(|record| record.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 11),
                date(2024, 1, 12),
                date(2024, 1, 13),
                date(2024, 1, 14),
                date(2024, 1, 15),
            ]
        );
    }

    #[test]
    fn dates_roll_over_year_end() {
        let forecast = generate(date(2023, 12, 29), &mut StdRng::seed_from_u64(1));
        let dates: Vec<NaiveDate> = forecast.iter().map(|record| record.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2023, 12, 30),
                date(2023, 12, 31),
                date(2024, 1, 1),
                date(2024, 1, 2),
                date(2024, 1, 3),
            ]
        );
    }

    #[test]
    fn dates_roll_over_leap_day() {
        let forecast = generate(date(2024, 2, 27), &mut StdRng::seed_from_u64(1));
        assert_eq!(forecast[1].date, date(2024, 2, 29));
        assert_eq!(forecast[2].date, date(2024, 3, 1));
    }

    #[test]
    fn same_reference_date_gives_same_dates() {
        let today = date(2025, 6, 30);
        let first: Vec<NaiveDate> = generate(today, &mut rand::rng())
            .into_iter()
            .map(|record| record.date)
            .collect();
        let second: Vec<NaiveDate> = generate(today, &mut rand::rng())
            .into_iter()
            .map(|record| record.date)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn temperatures_are_defaults() {
        for record in generate(date(2024, 1, 10), &mut rand::rng()) {
            assert_eq!(record.temperature_c, 0);
            assert_eq!(record.temperature_f, 32);
        }
    }

    #[test]
    fn fahrenheit_conversion_truncates() {
        assert_eq!(fahrenheit_from_celsius(0), 32);
        assert_eq!(fahrenheit_from_celsius(20), 67);
        assert_eq!(fahrenheit_from_celsius(-20), -3);
    }

    #[test]
    fn random_summary_covers_every_label() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 10];
        for _ in 0..5000 {
            let summary = Summary::random(&mut rng);
            let index = Summary::ALL
                .iter()
                .position(|candidate| *candidate == summary)
                .expect("summary should be one of the known labels");
            seen[index] = true;
        }
        assert!(seen.iter().all(|seen| *seen));
    }

    #[test]
    fn random_summary_is_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0u32; 10];
        for _ in 0..100_000 {
            let summary = Summary::random(&mut rng);
            let index = Summary::ALL
                .iter()
                .position(|candidate| *candidate == summary)
                .expect("summary should be one of the known labels");
            counts[index] += 1;
        }
        for (summary, count) in Summary::ALL.iter().zip(counts) {
            assert!(
                (9_000..=11_000).contains(&count),
                "{summary} drawn {count} times out of 100000"
            );
        }
    }

    #[test]
    fn summary_serializes_as_label() {
        let labels: Vec<String> = Summary::ALL
            .iter()
            .map(|summary| serde_json::to_string(summary).unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                "\"Freezing\"",
                "\"Bracing\"",
                "\"Chilly\"",
                "\"Cool\"",
                "\"Mild\"",
                "\"Warm\"",
                "\"Balmy\"",
                "\"Hot\"",
                "\"Sweltering\"",
                "\"Scorching\"",
            ]
        );
        for summary in Summary::ALL {
            assert_eq!(summary.to_string(), summary.as_str());
        }
    }

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let record = ForecastRecord::new(date(2024, 1, 11), 0, Summary::Mild);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "date": "2024-01-11",
                "temperatureC": 0,
                "temperatureF": 32,
                "summary": "Mild",
            })
        );
    }

    #[test]
    fn stops_at_end_of_calendar() {
        let forecast = generate(NaiveDate::MAX - Days::new(2), &mut rand::rng());
        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast[1].date, NaiveDate::MAX);
    }
}
