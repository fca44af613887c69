use crate::db::models::FlightRow;
use crate::types::search::{FlightSearchQuery, FlightSearchResponse};
use crate::web::format::display_naive;
use crate::web::layout::{escape, page};

fn flight_table(flights: &[FlightRow]) -> String {
    if flights.is_empty() {
        return "<p>No flights found for this date.</p>".to_string();
    }
    let rows = flights
        .iter()
        .map(|f| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{} {}</td><td>{}</td></tr>",
                escape(&f.flight_number),
                display_naive(&f.departure),
                f.arrival.as_ref().map(display_naive).unwrap_or_default(),
                escape(&f.manufacturer),
                escape(&f.model),
                f.capacity,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<table>
<thead><tr><th>Flight</th><th>Departure</th><th>Arrival</th><th>Aircraft</th><th>Seats</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>"#
    )
}

fn leg_heading(label: &str, from: Option<&str>, to: Option<&str>, date: Option<&str>) -> String {
    format!(
        "<h2>{label}: {} to {} on {}</h2>",
        escape(from.unwrap_or("")),
        escape(to.unwrap_or("")),
        escape(date.unwrap_or("")),
    )
}

/// Results for a search; the return section appears only for round trips.
pub fn render(
    query: &FlightSearchQuery,
    passengers: Option<&str>,
    results: &FlightSearchResponse,
) -> String {
    let mut body = String::from("<h1>Available Flights</h1>\n");
    if let Some(passengers) = passengers {
        body.push_str(&format!("<p>Passengers: {}</p>\n", escape(passengers)));
    }
    body.push_str(&leg_heading(
        "Outbound",
        query.origin.as_deref(),
        query.destination.as_deref(),
        query.departure.as_deref(),
    ));
    body.push('\n');
    body.push_str(&flight_table(&results.outbound_flights));

    if let Some(return_flights) = &results.return_flights {
        body.push('\n');
        body.push_str(&leg_heading(
            "Return",
            query.destination.as_deref(),
            query.origin.as_deref(),
            query.requested_return(),
        ));
        body.push('\n');
        body.push_str(&flight_table(return_flights));
    }
    body.push_str("\n<a class=\"button\" href=\"/\">New Search</a>");
    page("Flights", &body)
}
