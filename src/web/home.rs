//! Home page: the "Book" search form and the "Manage Trip" lookup form.
//!
//! Form state travels in the query string. The `-`/`+` passenger controls
//! resubmit the form to `/` with an `action`, and "Search Flight" turns the
//! state into a redirect to `/flights`.

use chrono::NaiveDate;
use url::form_urlencoded;

use crate::middleware::QueryParams;
use crate::types::search::LocationsResponse;
use crate::web::layout::{escape, escape_attr, page};

pub const DEFAULT_ORIGIN: &str = "Dallas";
pub const DEFAULT_DESTINATION: &str = "Chicago";
const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";

/// Number of travellers on the search form, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PassengerCount(u8);

impl PassengerCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(count: u8) -> Self {
        Self(count.clamp(Self::MIN, Self::MAX))
    }

    /// Read a count from a form value; unparsable input falls back to `MIN`,
    /// out-of-range input is clamped.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(|n| Self(n.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8))
            .unwrap_or_default()
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    pub fn can_increment(self) -> bool {
        self.0 < Self::MAX
    }

    pub fn can_decrement(self) -> bool {
        self.0 > Self::MIN
    }
}

impl Default for PassengerCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// What the submitted button asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Render,
    IncrementPassengers,
    DecrementPassengers,
    Search,
}

impl FormAction {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("inc") => Self::IncrementPassengers,
            Some("dec") => Self::DecrementPassengers,
            Some("search") => Self::Search,
            _ => Self::Render,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeForm {
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: PassengerCount,
}

impl HomeForm {
    /// A fresh form: Dallas to Chicago, departing `today`, one passenger.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            departure: today,
            return_date: None,
            passengers: PassengerCount::default(),
        }
    }

    /// Rebuild the form from a resubmission. Missing fields keep their
    /// defaults. Date ordering is not checked.
    pub fn from_params(params: &QueryParams, today: NaiveDate) -> Self {
        let mut form = Self::new(today);
        if let Some(origin) = params.get("origin").filter(|v| !v.is_empty()) {
            form.origin = origin.to_string();
        }
        if let Some(destination) = params.get("destination").filter(|v| !v.is_empty()) {
            form.destination = destination.to_string();
        }
        if let Some(departure) = params.get("departure").and_then(parse_date) {
            form.departure = departure;
        }
        form.return_date = params.get("return").and_then(parse_date);
        form.passengers = PassengerCount::from_param(params.get("passengers"));
        form
    }

    pub fn apply(mut self, action: FormAction) -> Self {
        match action {
            FormAction::IncrementPassengers => self.passengers = self.passengers.increment(),
            FormAction::DecrementPassengers => self.passengers = self.passengers.decrement(),
            FormAction::Render | FormAction::Search => {}
        }
        self
    }

    /// `/flights?origin=..&destination=..&departure=..&passengers=..[&return=..]`
    pub fn results_url(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("origin", &self.origin)
            .append_pair("destination", &self.destination)
            .append_pair("departure", &format_date(self.departure))
            .append_pair("passengers", &self.passengers.get().to_string());
        if let Some(return_date) = self.return_date {
            query.append_pair("return", &format_date(return_date));
        }
        format!("/flights?{}", query.finish())
    }
}

/// Where the manage-trip form sends the entered booking reference, verbatim.
pub fn manage_trip_url(booking_reference: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("bookingReference", booking_reference)
        .finish();
    format!("/reservation/manage-trip?{query}")
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_PARAM_FORMAT).ok()
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_PARAM_FORMAT).to_string()
}

/// `<option>` list for a select. A submitted value missing from `values`
/// is listed first so the select still shows the form state.
fn options<'a>(values: impl Iterator<Item = &'a str>, selected: &str) -> String {
    let values: Vec<&str> = values.collect();
    let missing = (!values.contains(&selected)).then_some(selected);
    missing
        .into_iter()
        .chain(values)
        .map(|value| {
            let mark = if value == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{mark}>{}</option>"#,
                escape_attr(value),
                escape(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn disabled(enabled: bool) -> &'static str {
    if enabled { "" } else { " disabled" }
}

pub fn render(form: &HomeForm, locations: &LocationsResponse) -> String {
    let origin_options = options(
        locations.origins.iter().map(|o| o.origin.as_str()),
        &form.origin,
    );
    let destination_options = options(
        locations.destinations.iter().map(|d| d.destination.as_str()),
        &form.destination,
    );
    let return_value = form.return_date.map(format_date).unwrap_or_default();
    let passengers = form.passengers;

    let body = format!(
        r#"<section id="book">
<h2>Book</h2>
<p>Find Your Perfect Destination!</p>
<form method="get" action="/">
<label for="origin">Origin</label>
<select id="origin" name="origin">
{origin_options}
</select>
<label for="destination">Destination</label>
<select id="destination" name="destination">
{destination_options}
</select>
<label for="departure">Dates</label>
<input id="departure" type="date" name="departure" value="{departure}">
<input id="return" type="date" name="return" value="{return_value}">
<label for="passengers">Passengers</label>
<input type="hidden" name="passengers" value="{count}">
<button type="submit" name="action" value="dec"{dec_disabled}>-</button>
<input id="passengers" type="text" value="{count}" readonly>
<button type="submit" name="action" value="inc"{inc_disabled}>+</button>
<button type="submit" name="action" value="search">Search Flight</button>
</form>
</section>
<section id="manage-trip">
<h2>Manage Trip / Check-in</h2>
<p>View or update your trip details and check in for your flight!</p>
<form method="get" action="/manage-trip">
<label for="bookingReference">Booking Reference Number</label>
<input id="bookingReference" type="text" name="bookingReference" placeholder="BRXXXXXX">
<button type="submit">Search</button>
</form>
</section>
<section id="explore">
<h2>Explore the World</h2>
<p>Book your next adventure with us</p>
</section>"#,
        departure = format_date(form.departure),
        count = passengers.get(),
        dec_disabled = disabled(passengers.can_decrement()),
        inc_disabled = disabled(passengers.can_increment()),
    );
    page("Book", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{DestinationEntry, OriginEntry};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn passenger_count_stays_in_bounds_under_repeated_clicks() {
        let mut count = PassengerCount::default();
        for _ in 0..50 {
            count = count.increment();
            assert!((PassengerCount::MIN..=PassengerCount::MAX).contains(&count.get()));
        }
        assert_eq!(count.get(), PassengerCount::MAX);
        assert!(!count.can_increment());

        for _ in 0..50 {
            count = count.decrement();
            assert!((PassengerCount::MIN..=PassengerCount::MAX).contains(&count.get()));
        }
        assert_eq!(count.get(), PassengerCount::MIN);
        assert!(!count.can_decrement());
    }

    #[test]
    fn crafted_passenger_values_are_clamped() {
        assert_eq!(PassengerCount::from_param(Some("0")).get(), 1);
        assert_eq!(PassengerCount::from_param(Some("-7")).get(), 1);
        assert_eq!(PassengerCount::from_param(Some("99")).get(), 5);
        assert_eq!(PassengerCount::from_param(Some("3")).get(), 3);
        assert_eq!(PassengerCount::from_param(Some("three")).get(), 1);
        assert_eq!(PassengerCount::from_param(None).get(), 1);
        assert_eq!(PassengerCount::new(200).get(), 5);
    }

    #[test]
    fn fresh_form_uses_defaults() {
        let form = HomeForm::from_params(&QueryParams::parse(None), today());
        assert_eq!(form, HomeForm::new(today()));
        assert_eq!(form.origin, "Dallas");
        assert_eq!(form.destination, "Chicago");
    }

    #[test]
    fn one_way_results_url_has_no_return() {
        let form = HomeForm::new(today());
        assert_eq!(
            form.results_url(),
            "/flights?origin=Dallas&destination=Chicago&departure=2024-06-01&passengers=1"
        );
    }

    #[test]
    fn round_trip_results_url_appends_return() {
        let params = QueryParams::parse(Some(
            "origin=New+York&destination=Chicago&departure=2024-06-01&return=2024-06-08&passengers=2",
        ));
        let form = HomeForm::from_params(&params, today());
        assert_eq!(
            form.results_url(),
            "/flights?origin=New+York&destination=Chicago&departure=2024-06-01&passengers=2&return=2024-06-08"
        );
    }

    #[test]
    fn return_before_departure_is_not_rejected() {
        let params = QueryParams::parse(Some("departure=2024-06-10&return=2024-06-01"));
        let form = HomeForm::from_params(&params, today());
        assert_eq!(form.return_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert!(form.results_url().ends_with("&return=2024-06-01"));
    }

    #[test]
    fn actions_adjust_passengers_only() {
        let form = HomeForm::new(today())
            .apply(FormAction::IncrementPassengers)
            .apply(FormAction::IncrementPassengers)
            .apply(FormAction::DecrementPassengers)
            .apply(FormAction::Search);
        assert_eq!(form.passengers.get(), 2);
        assert_eq!(FormAction::from_param(Some("bogus")), FormAction::Render);
    }

    #[test]
    fn manage_trip_url_forwards_reference_verbatim() {
        assert_eq!(
            manage_trip_url("BR123456"),
            "/reservation/manage-trip?bookingReference=BR123456"
        );
        assert_eq!(
            manage_trip_url(""),
            "/reservation/manage-trip?bookingReference="
        );
        assert_eq!(
            manage_trip_url("a&b"),
            "/reservation/manage-trip?bookingReference=a%26b"
        );
    }

    #[test]
    fn render_marks_selection_and_disables_minus_at_one() {
        let locations = LocationsResponse {
            origins: vec![
                OriginEntry {
                    origin: "Chicago".to_string(),
                },
                OriginEntry {
                    origin: "Dallas".to_string(),
                },
            ],
            destinations: vec![DestinationEntry {
                destination: "Chicago".to_string(),
            }],
        };
        let html = render(&HomeForm::new(today()), &locations);
        assert!(html.contains(r#"<option value="Dallas" selected>Dallas</option>"#));
        assert!(html.contains(r#"<option value="Chicago">Chicago</option>"#));
        assert!(html.contains(r#"value="dec" disabled>-</button>"#));
        assert!(html.contains(r#"value="inc">+</button>"#));
        assert!(html.contains(r#"name="departure" value="2024-06-01""#));
    }

    #[test]
    fn render_keeps_submitted_city_missing_from_locations() {
        let locations = LocationsResponse {
            origins: vec![OriginEntry {
                origin: "Chicago".to_string(),
            }],
            destinations: vec![DestinationEntry {
                destination: "Chicago".to_string(),
            }],
        };
        let mut form = HomeForm::new(today());
        form.origin = r#"Fort "Worth""#.to_string();
        let html = render(&form, &locations);

        let origin_select = html
            .split(r#"<select id="origin" name="origin">"#)
            .nth(1)
            .and_then(|rest| rest.split("</select>").next())
            .expect("origin select present");
        assert!(origin_select.starts_with(
            "\n<option value=\"Fort &quot;Worth&quot;\" selected>Fort \"Worth\"</option>"
        ));
        assert!(origin_select.contains(r#"<option value="Chicago">Chicago</option>"#));
        assert_eq!(origin_select.matches(" selected").count(), 1);
    }
}
