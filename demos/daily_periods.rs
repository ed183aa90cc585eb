//! Sun events and day periods for one date across diverse global locations.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use chrono_tz::Tz;
use solar_twilight::{period, DailySunTimes, DayMode, DayPeriod, Location};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    zone: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // From the Arctic to the southern hemisphere
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            zone: chrono_tz::Arctic::Longyearbyen,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            zone: chrono_tz::America::Anchorage,
        },
        City {
            name: "Cambridge, England",
            latitude: 52.1311,
            longitude: 0.1323,
            zone: chrono_tz::Europe::London,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            zone: chrono_tz::Asia::Singapore,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            zone: chrono_tz::Pacific::Auckland,
        },
    ];

    // The December solstice shows the widest spread between hemispheres
    let date = NaiveDate::from_ymd_opt(2023, 12, 21).ok_or("invalid date")?;

    for city in &cities {
        let location = Location::new(city.latitude, city.longitude, city.zone)?;
        let times = DailySunTimes::for_location(&location, date)?;

        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E ({})",
            city.latitude, city.longitude, city.zone
        );
        println!("Date: {date}");
        println!();

        print_events(&times);
        print_periods(&times, &location, date);
        println!(
            "Day length: {}",
            format_duration(period::day_length_seconds(&times, &location))
        );
        println!();
    }

    Ok(())
}

fn print_events(times: &DailySunTimes) {
    if times.is_polar() {
        println!("No sun events: the sun does not cross any threshold today");
        return;
    }
    for (event, at) in times.events() {
        println!(
            "  {:>8} {:<16} {}",
            format!("{:?}", event.half_day),
            format!("{:?}", event.threshold),
            at.format("%H:%M:%S")
        );
    }
}

fn print_periods(times: &DailySunTimes, location: &Location<Tz>, date: NaiveDate) {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or(NaiveDateTime::MIN);
    let mut previous: Option<DayPeriod> = None;

    println!();
    println!("Periods (golden/blue hour mode):");
    for minute in 0..24 * 60 {
        let now = midnight + Duration::minutes(minute);
        let current = period::current_period(times, location, now, true);
        if previous != Some(current) {
            let mode = if now.hour() < 12 {
                DayMode::Sunrise
            } else {
                DayMode::Sunset
            };
            println!(
                "  from {}  {:<20} ({} - {})",
                now.format("%H:%M"),
                current.label(),
                period::period_start_time(times, current, mode).format("%H:%M:%S"),
                period::period_end_time(times, current, mode).format("%H:%M:%S")
            );
            previous = Some(current);
        }
    }
    println!();
}

fn format_duration(seconds: i64) -> String {
    format!("{}h {:02}m", seconds / 3600, (seconds % 3600) / 60)
}
