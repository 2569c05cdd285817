//! Path and query encoding for route requests.

use super::coordinates::format_coordinates;
use super::error::{EncodeError, WaypointsError};
use super::options::{
    Alternatives, Annotations, ContinueStraight, Geometries, Overview, PARAM_ALTERNATIVES,
    PARAM_ANNOTATIONS, PARAM_CONTINUE_STRAIGHT, PARAM_GEOMETRIES, PARAM_OVERVIEW, PARAM_STEPS,
    PARAM_WAYPOINTS, RouteOptions, invalid,
};
use super::RouteRequest;

/// Path prefix of the route service, version 1.
pub(crate) const ROUTE_SERVICE_PREFIX: &str = "/route/v1";

/// A route request ready to be sent with `GET`.
///
/// `path` is relative to the service base URL. `query` holds only the
/// options that differ from their defaults; its order is stable but carries
/// no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    /// Path starting with `/route/v1/`.
    pub path: String,
    /// Query key/value pairs.
    pub query: Vec<(&'static str, String)>,
}

impl EncodedRequest {
    /// `true` when every option was at its default.
    #[must_use]
    pub fn is_default_query(&self) -> bool {
        self.query.is_empty()
    }

    /// Render the query as `key=value&...`, without a leading `?`.
    ///
    /// Values produced by the encoder never need percent-encoding except for
    /// the `,` and `;` list separators, which the route service accepts
    /// verbatim.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl RouteRequest {
    /// Encode the request into a path and the non-default query pairs.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::EmptyAnnotationKinds`] for an empty
    /// [`Annotations::Only`] list and [`EncodeError::InvalidWaypoints`] when
    /// the waypoint indices do not fit the coordinate list.
    pub fn encode(&self) -> Result<EncodedRequest, EncodeError> {
        self.validate_options()?;
        let path = format!(
            "{ROUTE_SERVICE_PREFIX}/{}/{}",
            self.profile,
            format_coordinates(&self.coordinates)
        );
        Ok(EncodedRequest {
            path,
            query: self.options.to_query(),
        })
    }

    fn validate_options(&self) -> Result<(), EncodeError> {
        if matches!(&self.options.annotations, Annotations::Only(kinds) if kinds.is_empty()) {
            return Err(EncodeError::EmptyAnnotationKinds);
        }
        if let Some(waypoints) = &self.options.waypoints {
            validate_waypoints(waypoints, self.coordinates.len())?;
        }
        Ok(())
    }
}

fn validate_waypoints(waypoints: &[usize], count: usize) -> Result<(), WaypointsError> {
    let (Some(&first), Some(&last)) = (waypoints.first(), waypoints.last()) else {
        return Err(WaypointsError::Empty);
    };
    if let Some(&index) = waypoints.iter().find(|&&index| index >= count) {
        return Err(WaypointsError::OutOfRange { index, count });
    }
    if let Some((&previous, &index)) = waypoints
        .iter()
        .zip(waypoints.iter().skip(1))
        .find(|(previous, index)| index <= previous)
    {
        return Err(WaypointsError::NotAscending { previous, index });
    }
    if first != 0 || last.saturating_add(1) != count {
        return Err(WaypointsError::MissingEndpoints);
    }
    Ok(())
}

impl RouteOptions {
    /// Query pairs for every option that differs from its default.
    ///
    /// Detection is by value: `Alternatives::Count(1)` is emitted even though
    /// it carries the same number of routes as the default search.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if self.alternatives != Alternatives::default() {
            query.push((PARAM_ALTERNATIVES, self.alternatives.to_string()));
        }
        if self.steps {
            query.push((PARAM_STEPS, "true".to_owned()));
        }
        if self.annotations != Annotations::default() {
            query.push((PARAM_ANNOTATIONS, self.annotations.to_string()));
        }
        if self.geometries != Geometries::default() {
            query.push((PARAM_GEOMETRIES, self.geometries.to_string()));
        }
        if self.overview != Overview::default() {
            query.push((PARAM_OVERVIEW, self.overview.to_string()));
        }
        if self.continue_straight != ContinueStraight::default() {
            query.push((PARAM_CONTINUE_STRAIGHT, self.continue_straight.to_string()));
        }
        if let Some(waypoints) = &self.waypoints {
            let joined = waypoints
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(";");
            query.push((PARAM_WAYPOINTS, joined));
        }
        query
    }

    /// Rebuild options from query pairs such as those from
    /// [`RouteOptions::to_query`].
    ///
    /// Missing keys keep their default. A repeated key overrides the earlier
    /// occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownParameter`] for keys that are not route
    /// options and [`EncodeError::InvalidParameter`] for unaccepted values.
    pub fn from_query<I, K, V>(pairs: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .try_fold(Self::default(), |mut options, (key, value)| {
                options.apply(key.as_ref(), value.as_ref())?;
                Ok(options)
            })
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), EncodeError> {
        match key {
            PARAM_ALTERNATIVES => self.alternatives = value.parse()?,
            PARAM_STEPS => self.steps = parse_bool(PARAM_STEPS, value)?,
            PARAM_ANNOTATIONS => self.annotations = value.parse()?,
            PARAM_GEOMETRIES => self.geometries = value.parse()?,
            PARAM_OVERVIEW => self.overview = value.parse()?,
            PARAM_CONTINUE_STRAIGHT => self.continue_straight = value.parse()?,
            PARAM_WAYPOINTS => self.waypoints = Some(parse_indices(value)?),
            other => {
                return Err(EncodeError::UnknownParameter {
                    parameter: other.to_owned(),
                });
            }
        }
        Ok(())
    }
}

fn parse_bool(parameter: &'static str, value: &str) -> Result<bool, EncodeError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(invalid(parameter, other)),
    }
}

fn parse_indices(value: &str) -> Result<Vec<usize>, EncodeError> {
    value
        .split(';')
        .map(|index| index.parse().map_err(|_| invalid(PARAM_WAYPOINTS, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::AnnotationKind;
    use geo::Coord;
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> RouteRequest {
        let coords = [
            Coord {
                x: 13.38886,
                y: 52.517_037,
            },
            Coord {
                x: 13.397_634,
                y: 52.529_407,
            },
            Coord {
                x: 13.428_555,
                y: 52.523_219,
            },
        ];
        RouteRequest::new("driving", coords).expect("valid request")
    }

    #[rstest]
    fn default_options_produce_empty_query(request: RouteRequest) {
        let encoded = request.encode().expect("should encode");
        assert!(encoded.is_default_query());
        assert_eq!(
            encoded.path,
            "/route/v1/driving/13.38886,52.517037;13.397634,52.529407;13.428555,52.523219"
        );
    }

    #[rstest]
    #[case(Alternatives::Enabled, "true")]
    #[case(Alternatives::Count(3), "3")]
    fn alternatives_emit_canonical_text(
        request: RouteRequest,
        #[case] alternatives: Alternatives,
        #[case] expected: &str,
    ) {
        let encoded = request
            .with_alternatives(alternatives)
            .encode()
            .expect("should encode");
        assert_eq!(encoded.query, vec![("alternatives", expected.to_owned())]);
    }

    #[rstest]
    fn disabled_steps_are_never_emitted(request: RouteRequest) {
        let encoded = request.with_steps(false).encode().expect("should encode");
        assert!(encoded.query.is_empty());
    }

    #[rstest]
    #[case(Annotations::All, "true")]
    #[case(Annotations::kind(AnnotationKind::Datasources), "datasources")]
    #[case(
        Annotations::Only(vec![AnnotationKind::Distance, AnnotationKind::Duration]),
        "distance,duration"
    )]
    fn annotations_emit_kind_names(
        request: RouteRequest,
        #[case] annotations: Annotations,
        #[case] expected: &str,
    ) {
        let encoded = request
            .with_annotations(annotations)
            .encode()
            .expect("should encode");
        assert_eq!(encoded.query, vec![("annotations", expected.to_owned())]);
    }

    #[rstest]
    fn empty_annotation_kinds_are_rejected(request: RouteRequest) {
        let err = request
            .with_annotations(Annotations::Only(Vec::new()))
            .encode()
            .expect_err("should reject");
        assert_eq!(err, EncodeError::EmptyAnnotationKinds);
    }

    #[rstest]
    #[case(Overview::Full, Some("full"))]
    #[case(Overview::False, Some("false"))]
    #[case(Overview::Simplified, None)]
    fn overview_is_emitted_only_when_changed(
        request: RouteRequest,
        #[case] overview: Overview,
        #[case] expected: Option<&str>,
    ) {
        let encoded = request.with_overview(overview).encode().expect("should encode");
        let expected: Vec<_> = expected
            .map(|value| ("overview", value.to_owned()))
            .into_iter()
            .collect();
        assert_eq!(encoded.query, expected);
    }

    #[rstest]
    fn continue_straight_default_is_never_emitted(request: RouteRequest) {
        let encoded = request
            .clone()
            .with_continue_straight(ContinueStraight::Default)
            .encode()
            .expect("should encode");
        assert!(encoded.query.is_empty());

        let encoded = request
            .with_continue_straight(ContinueStraight::Disabled)
            .encode()
            .expect("should encode");
        assert_eq!(encoded.query, vec![("continue_straight", "false".to_owned())]);
    }

    #[rstest]
    fn waypoints_are_joined_with_semicolons(request: RouteRequest) {
        let encoded = request
            .with_waypoints([0, 2])
            .encode()
            .expect("should encode");
        assert_eq!(encoded.query, vec![("waypoints", "0;2".to_owned())]);
    }

    #[rstest]
    #[case(vec![], WaypointsError::Empty)]
    #[case(vec![0, 3], WaypointsError::OutOfRange { index: 3, count: 3 })]
    #[case(vec![0, 2, 2], WaypointsError::NotAscending { previous: 2, index: 2 })]
    #[case(vec![1, 2], WaypointsError::MissingEndpoints)]
    #[case(vec![0, 1], WaypointsError::MissingEndpoints)]
    fn waypoints_must_fit_the_coordinates(
        request: RouteRequest,
        #[case] waypoints: Vec<usize>,
        #[case] expected: WaypointsError,
    ) {
        let err = request
            .with_waypoints(waypoints)
            .encode()
            .expect_err("should reject");
        assert_eq!(err, EncodeError::InvalidWaypoints(expected));
    }

    #[rstest]
    fn query_string_joins_pairs(request: RouteRequest) {
        let encoded = request
            .with_steps(true)
            .with_geometries(Geometries::GeoJson)
            .encode()
            .expect("should encode");
        assert_eq!(encoded.query_string(), "steps=true&geometries=geojson");
    }

    #[rstest]
    fn from_query_rejects_unknown_keys() {
        let err = RouteOptions::from_query([("radiuses", "10;10")]).expect_err("should reject");
        assert_eq!(
            err,
            EncodeError::UnknownParameter {
                parameter: "radiuses".to_owned()
            }
        );
    }

    #[rstest]
    #[case("steps", "yes")]
    #[case("overview", "partial")]
    #[case("waypoints", "0;x")]
    fn from_query_rejects_invalid_values(#[case] key: &str, #[case] value: &str) {
        let err = RouteOptions::from_query([(key, value)]).expect_err("should reject");
        assert!(
            matches!(err, EncodeError::InvalidParameter { parameter, .. } if parameter == key),
            "unexpected error {err:?}"
        );
    }
}
