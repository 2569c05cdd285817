//! Textual `lon,lat;lon,lat` coordinate lists.

use geo::Coord;

use super::error::EncodeError;

/// Format coordinates as `lon,lat` pairs joined with `;`, preserving order.
///
/// Components use the shortest representation that round-trips, so
/// `13.388860` is written as `13.38886`.
///
/// ```
/// use geo::Coord;
/// use osrm_route_core::request::format_coordinates;
///
/// let text = format_coordinates(&[Coord { x: -0.1, y: 51.5 }, Coord { x: -0.2, y: 51.6 }]);
/// assert_eq!(text, "-0.1,51.5;-0.2,51.6");
/// ```
#[must_use]
pub fn format_coordinates(coordinates: &[Coord<f64>]) -> String {
    coordinates
        .iter()
        .map(|coord| format!("{},{}", coord.x, coord.y))
        .collect::<Vec<_>>()
        .join(";")
}

/// Parse a `lon,lat;lon,lat` list as used in route service paths.
///
/// Surrounding whitespace around each component is ignored. Only the shape is
/// checked here; [`RouteRequest::new`](super::RouteRequest::new) applies
/// the remaining validation.
///
/// # Errors
///
/// Returns [`EncodeError::MalformedCoordinate`] for a pair that is not two
/// comma-separated numbers.
pub fn parse_coordinates(text: &str) -> Result<Vec<Coord<f64>>, EncodeError> {
    text.split(';')
        .enumerate()
        .map(|(index, pair)| parse_pair(pair).ok_or_else(|| malformed(index, pair)))
        .collect()
}

fn parse_pair(pair: &str) -> Option<Coord<f64>> {
    let (lon, lat) = pair.split_once(',')?;
    Some(Coord {
        x: lon.trim().parse().ok()?,
        y: lat.trim().parse().ok()?,
    })
}

fn malformed(index: usize, pair: &str) -> EncodeError {
    EncodeError::MalformedCoordinate {
        index,
        value: pair.to_owned(),
    }
}
