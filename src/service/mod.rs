pub mod flight_search;
