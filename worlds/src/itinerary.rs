//! `ItineraryWorld`: multi-leg flight planning over a timetable.
//!
//! A node is a [`Stop`]: being in a city at a clock time (minutes after
//! midnight of day 0). Expanding a stop lists every flight out of that city
//! that can still be caught. Cost is elapsed minutes since the source stop.
//!
//! Signatures are `(city, hour)`, so two arrivals in the same city within the
//! same clock hour are weak duplicates. They are strong duplicates only when
//! the clocks are equal; otherwise the engine merges them into one node that
//! keeps both incoming flights.
//!
//! One-way only: reverse expansion is not defined for timetables.

use std::fmt;

use waypoint_search::{Candidate, Plan, SearchProblem};

use crate::contract::WorldDescriptor;
use crate::error::WorldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightId(pub usize);

/// A scheduled flight. Clocks are minutes after midnight of day 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub from: CityId,
    pub to: CityId,
    pub depart: u32,
    pub arrive: u32,
}

impl Flight {
    #[must_use]
    pub fn duration(&self) -> u32 {
        self.arrive - self.depart
    }
}

/// Being in `city` at `clock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stop {
    pub city: CityId,
    pub clock: u32,
}

/// Timetable of cities and flights.
#[derive(Debug, Clone)]
pub struct ItineraryWorld {
    cities: Vec<String>,
    flights: Vec<Flight>,
    /// Flight ids per origin city, sorted by departure.
    departures: Vec<Vec<FlightId>>,
    min_connection: u32,
}

impl ItineraryWorld {
    #[must_use]
    pub fn new(cities: &[&str]) -> Self {
        Self {
            cities: cities.iter().map(|c| (*c).to_owned()).collect(),
            flights: Vec::new(),
            departures: vec![Vec::new(); cities.len()],
            min_connection: 0,
        }
    }

    /// Minimum minutes between landing and the next departure. Does not apply
    /// to the first flight out of a source stop.
    #[must_use]
    pub fn with_min_connection(mut self, minutes: u32) -> Self {
        self.min_connection = minutes;
        self
    }

    /// Add a flight; clocks are `"HH:MM"` (hours may exceed 23 for later
    /// days).
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownCity`] for an unknown city name and
    /// [`WorldError::InvalidFlight`] for an unparsable clock or a flight that
    /// does not arrive strictly after it departs.
    pub fn add_flight(
        &mut self,
        from: &str,
        to: &str,
        depart: &str,
        arrive: &str,
    ) -> Result<FlightId, WorldError> {
        let flight = Flight {
            from: self.city(from)?,
            to: self.city(to)?,
            depart: parse_clock(depart)?,
            arrive: parse_clock(arrive)?,
        };
        if flight.arrive <= flight.depart {
            return Err(WorldError::InvalidFlight {
                detail: format!("{from} {depart} -> {to} {arrive} does not arrive after departing"),
            });
        }

        let id = FlightId(self.flights.len());
        let origin = flight.from.0 as usize;
        self.flights.push(flight);
        let flights = &self.flights;
        let list = &mut self.departures[origin];
        list.push(id);
        list.sort_by_key(|f| (flights[f.0].depart, f.0));
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns [`WorldError::UnknownCity`] if `name` is not in the timetable.
    pub fn city(&self, name: &str) -> Result<CityId, WorldError> {
        self.cities
            .iter()
            .position(|c| c == name)
            .and_then(|i| u32::try_from(i).ok())
            .map(CityId)
            .ok_or_else(|| WorldError::UnknownCity { name: name.into() })
    }

    /// Name of `city`; `"?"` for ids not issued by this world.
    #[must_use]
    pub fn city_name(&self, city: CityId) -> &str {
        self.cities.get(city.0 as usize).map_or("?", String::as_str)
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this world.
    #[must_use]
    pub fn flight(&self, id: FlightId) -> &Flight {
        &self.flights[id.0]
    }

    /// Source stop: in `city` from `clock` on.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownCity`] or [`WorldError::InvalidFlight`]
    /// for a bad clock.
    pub fn stop(&self, city: &str, clock: &str) -> Result<Stop, WorldError> {
        Ok(Stop {
            city: self.city(city)?,
            clock: parse_clock(clock)?,
        })
    }

    /// Destination stop; only the city is compared.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownCity`] if `city` is not in the timetable.
    pub fn destination(&self, city: &str) -> Result<Stop, WorldError> {
        Ok(Stop {
            city: self.city(city)?,
            clock: 0,
        })
    }

    /// One line per flight taken, e.g. `"A 08:00 -> B 10:05"`.
    #[must_use]
    pub fn legs(&self, plan: &Plan<Stop, FlightId, u32>) -> Vec<String> {
        plan.edges()
            .map(|&id| {
                let f = self.flight(id);
                format!(
                    "{} {} -> {} {}",
                    self.city_name(f.from),
                    Clock(f.depart),
                    self.city_name(f.to),
                    Clock(f.arrive)
                )
            })
            .collect()
    }

    fn shortest_flight(&self) -> u32 {
        self.flights.iter().map(Flight::duration).min().unwrap_or(0)
    }
}

impl SearchProblem for ItineraryWorld {
    type Node = Stop;
    type Edge = FlightId;
    type Cost = u32;
    type Signature = (CityId, u32);

    fn signature(&self, node: &Stop) -> (CityId, u32) {
        (node.city, node.clock / 60)
    }

    /// Flights out of `node.city` that can be caught.
    ///
    /// The current clock is taken from `prev_edge` (arrival of the primary
    /// flight) rather than from `node`, because a merged node keeps the value
    /// of its first arrival while its primary branch may be a later
    /// registration.
    fn expand(
        &self,
        node: &Stop,
        _prev_node: Option<&Stop>,
        prev_edge: Option<&FlightId>,
        _cost_so_far: u32,
    ) -> Vec<Candidate<Stop, FlightId, u32>> {
        let (now, ready) = match prev_edge {
            Some(&id) => {
                let landed = self.flight(id).arrive;
                (landed, landed + self.min_connection)
            }
            None => (node.clock, node.clock),
        };
        let Some(departures) = self.departures.get(node.city.0 as usize) else {
            return Vec::new();
        };
        departures
            .iter()
            .map(|&id| (id, self.flight(id)))
            .filter(|(_, f)| f.depart >= ready)
            .map(|(id, f)| Candidate {
                edge: id,
                edge_cost: f.arrive - now,
                node: Stop {
                    city: f.to,
                    clock: f.arrive,
                },
            })
            .collect()
    }

    fn heuristic(&self, node: &Stop, destinations: &[Stop]) -> u32 {
        if destinations.iter().any(|d| d.city == node.city) {
            0
        } else {
            self.shortest_flight()
        }
    }

    fn is_target(&self, node: &Stop, _cost_so_far: u32, destinations: &[Stop]) -> bool {
        destinations.iter().any(|d| d.city == node.city)
    }

    fn is_strong_duplicate(&self, a: &Stop, b: &Stop) -> bool {
        a.clock == b.clock
    }
}

impl WorldDescriptor for ItineraryWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "itinerary"
    }

    fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "cities": self.cities,
            "flights": self.flights.len(),
            "min_connection": self.min_connection,
        })
    }
}

/// `HH:MM` display of a minute clock.
struct Clock(u32);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

fn parse_clock(text: &str) -> Result<u32, WorldError> {
    let invalid = || WorldError::InvalidFlight {
        detail: format!("bad clock {text:?}, expected HH:MM"),
    };
    let (hours, minutes) = text.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}
