//! The route type
//!
//! A route is an ordered, non-empty chain of 4-adjacent coordinates from a
//! start cell to a goal cell. Routes are computed fresh per search request
//! and discarded once rendered.

use super::{RouteError, RouteResult};
use crate::grid::Coord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered chain of adjacent, traversable coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    coords: Vec<Coord>,
}

impl Route {
    /// Build a route, checking that it is non-empty and that every
    /// consecutive pair of coordinates is 4-adjacent
    pub fn new(coords: Vec<Coord>) -> RouteResult<Self> {
        if coords.is_empty() {
            return Err(RouteError::EmptyRoute);
        }
        for pair in coords.windows(2) {
            if !pair[0].is_adjacent(&pair[1]) {
                return Err(RouteError::DisjointStep(pair[0], pair[1]));
            }
        }
        Ok(Self { coords })
    }

    /// The coordinates of the route, start first
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// The first coordinate of the route
    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    /// The last coordinate of the route
    pub fn goal(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Number of coordinates on the route
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Routes are never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves along the route (one less than the coordinate count)
    pub fn steps(&self) -> usize {
        self.coords.len() - 1
    }

    /// Whether the route passes through a coordinate
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }
}

impl Serialize for Route {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.coords.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let coords = Vec::<Coord>::deserialize(deserializer)?;
        Route::new(coords).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_route() {
        let route = Route::new(vec![Coord::new(3, 3)]).unwrap();
        assert_eq!(route.start(), Coord::new(3, 3));
        assert_eq!(route.goal(), Coord::new(3, 3));
        assert_eq!(route.len(), 1);
        assert_eq!(route.steps(), 0);
    }

    #[test]
    fn test_rejects_empty_route() {
        assert_eq!(Route::new(vec![]), Err(RouteError::EmptyRoute));
    }

    #[test]
    fn test_rejects_disjoint_steps() {
        let coords = vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(3, 2)];
        assert_eq!(
            Route::new(coords),
            Err(RouteError::DisjointStep(Coord::new(1, 2), Coord::new(3, 2)))
        );
    }

    #[test]
    fn test_route_accessors() {
        let route =
            Route::new(vec![Coord::new(1, 0), Coord::new(1, 1), Coord::new(2, 1)]).unwrap();
        assert_eq!(route.start(), Coord::new(1, 0));
        assert_eq!(route.goal(), Coord::new(2, 1));
        assert_eq!(route.steps(), 2);
        assert!(route.contains(Coord::new(1, 1)));
        assert!(!route.contains(Coord::new(0, 0)));
    }

    #[test]
    fn test_route_serializes_as_coordinate_list() {
        let route = Route::new(vec![Coord::new(1, 0), Coord::new(1, 1)]).unwrap();
        assert_eq!(serde_json::to_string(&route).unwrap(), "[[1,0],[1,1]]");

        let back: Route = serde_json::from_str("[[1,0],[1,1]]").unwrap();
        assert_eq!(back, route);
        assert!(serde_json::from_str::<Route>("[[1,0],[4,4]]").is_err());
        assert!(serde_json::from_str::<Route>("[]").is_err());
    }
}
