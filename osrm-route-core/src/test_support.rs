//! Canned route service responses for tests.
//!
//! The trees mirror what a public OSRM server returns for a short drive
//! through Berlin Mitte. They are plain [`serde_json::Value`]s so tests can
//! mutate individual fields before decoding.

use serde_json::{Value, json};

/// A successful response with one route, one leg and nothing optional.
#[must_use]
pub fn minimal_response() -> Value {
    json!({
        "code": "Ok",
        "routes": [
            {
                "distance": 2508.7,
                "duration": 374.6,
                "weight": 374.6,
                "weight_name": "routability",
                "legs": [
                    { "distance": 2508.7, "duration": 374.6, "weight": 374.6 }
                ]
            }
        ],
        "waypoints": [
            {
                "name": "Friedrichstraße",
                "location": [13.388799, 52.517033],
                "hint": "KSoKADRYroqUBAEAHAAAAAAAAAAAAAAA"
            },
            {
                "name": "Torstraße",
                "location": [13.397631, 52.529432],
                "hint": "7UcAgP___38fAAAAUQAAACYAAAAeAAAA"
            }
        ]
    })
}

/// A successful response exercising every entity: steps, intersections,
/// lanes and a leg annotation.
#[must_use]
pub fn full_response() -> Value {
    json!({
        "code": "Ok",
        "data_version": "2024-05-01T20:21:03Z",
        "routes": [
            {
                "distance": 1886.3,
                "duration": 287.9,
                "weight": 287.9,
                "weight_name": "routability",
                "geometry": "ofp_Ik_vpAILAWNO",
                "legs": [
                    {
                        "distance": 1886.3,
                        "duration": 287.9,
                        "weight": 287.9,
                        "summary": "Friedrichstraße, Torstraße",
                        "steps": [
                            {
                                "distance": 1412.0,
                                "duration": 210.1,
                                "weight": 210.1,
                                "geometry": "ofp_Ik_vpAILAWNO",
                                "name": "Friedrichstraße",
                                "ref": "B 96",
                                "mode": "driving",
                                "driving_side": "right",
                                "maneuver": {
                                    "location": [13.388799, 52.517033],
                                    "bearing_before": 0,
                                    "bearing_after": 5,
                                    "type": "depart"
                                },
                                "intersections": [
                                    {
                                        "location": [13.388799, 52.517033],
                                        "bearings": [5],
                                        "entry": [true],
                                        "out": 0
                                    },
                                    {
                                        "location": [13.388642, 52.520191],
                                        "bearings": [4, 94, 184, 274],
                                        "entry": [true, true, false, true],
                                        "in": 2,
                                        "out": 0,
                                        "lanes": [
                                            { "indications": ["left"], "valid": false },
                                            { "indications": ["straight"], "valid": true }
                                        ]
                                    }
                                ]
                            },
                            {
                                "distance": 474.3,
                                "duration": 77.8,
                                "weight": 77.8,
                                "geometry": "g|r_Ic~vpA}@_C",
                                "name": "Torstraße",
                                "mode": "driving",
                                "maneuver": {
                                    "location": [13.388457, 52.527663],
                                    "bearing_before": 4,
                                    "bearing_after": 92,
                                    "type": "turn",
                                    "modifier": "right"
                                },
                                "intersections": [
                                    {
                                        "location": [13.388457, 52.527663],
                                        "bearings": [92, 184, 272, 358],
                                        "entry": [true, false, true, true],
                                        "in": 1,
                                        "out": 0,
                                        "classes": ["restricted"]
                                    }
                                ]
                            },
                            {
                                "distance": 0.0,
                                "duration": 0.0,
                                "weight": 0.0,
                                "geometry": "m_t_Iq|xpA??",
                                "name": "Torstraße",
                                "mode": "driving",
                                "maneuver": {
                                    "location": [13.397631, 52.529432],
                                    "bearing_before": 92,
                                    "bearing_after": 0,
                                    "type": "arrive"
                                },
                                "intersections": [
                                    {
                                        "location": [13.397631, 52.529432],
                                        "bearings": [272],
                                        "entry": [true],
                                        "in": 0
                                    }
                                ]
                            }
                        ],
                        "annotation": {
                            "distance": [351.2, 1060.8, 474.3],
                            "duration": [52.3, 157.8, 77.8],
                            "weight": [52.3, 157.8, 77.8],
                            "datasources": [0, 0, 0],
                            "nodes": [21_487_242, 29_786_373, 26_735_763, 2_476_290_942_u64],
                            "speed": [6.7, 6.7, 6.1],
                            "metadata": { "datasource_names": ["lua profile"] }
                        }
                    }
                ]
            }
        ],
        "waypoints": [
            {
                "name": "Friedrichstraße",
                "location": [13.388799, 52.517033],
                "hint": "KSoKADRYroqUBAEAHAAAAAAAAAAAAAAA",
                "distance": 4.152_629
            },
            {
                "name": "Torstraße",
                "location": [13.397631, 52.529432],
                "hint": "7UcAgP___38fAAAAUQAAACYAAAAeAAAA",
                "distance": 2.795_837
            }
        ]
    })
}

/// A service failure for coordinates with no connecting road.
#[must_use]
pub fn no_route_response() -> Value {
    json!({
        "code": "NoRoute",
        "message": "Impossible route between points"
    })
}
