//! Motion curves — deterministic, genre-specific movement geometry.
//!
//! A pure mapping from `(genre id, tempo, playing flag, current beat)` to a
//! vector path, marker set, and beat guides on a fixed 800×200 canvas.
//! Same inputs, same geometry: no hidden state, no randomness. An unknown
//! genre id yields an empty curve with no markers (fail-soft); the four
//! beat guides are fixed chrome and render regardless.

/// Canvas width in logical units.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Canvas height in logical units.
pub const CANVAS_HEIGHT: f64 = 200.0;

/// Vertical midline the curves oscillate around.
pub const MIDLINE: f64 = 100.0;

/// Samples per Bézier segment when flattening to a polyline.
const SEGMENT_SAMPLES: usize = 64;

/// The closed set of known curve families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFamily {
    /// Smooth doubled quadratic, deviation `tempo / 2`.
    Classical,
    /// Sharp zig-zag, deviation `tempo / 3`.
    HipHop,
    /// Single smooth cubic, deviation `tempo / 4`.
    Contemporary,
    /// Smooth S-curve, deviation `tempo / 3`.
    Latin,
}

impl CurveFamily {
    /// All families, in catalog order.
    pub const ALL: [CurveFamily; 4] = [
        CurveFamily::Classical,
        CurveFamily::HipHop,
        CurveFamily::Contemporary,
        CurveFamily::Latin,
    ];

    /// Map a genre id to its curve family. Unknown ids are `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "classical" => Some(CurveFamily::Classical),
            "hiphop" => Some(CurveFamily::HipHop),
            "contemporary" => Some(CurveFamily::Contemporary),
            "latin" => Some(CurveFamily::Latin),
            _ => None,
        }
    }

    /// Vertical deviation from the midline at the given tempo.
    pub fn deviation(self, tempo_bpm: f64) -> f64 {
        match self {
            CurveFamily::Classical => tempo_bpm / 2.0,
            CurveFamily::HipHop => tempo_bpm / 3.0,
            CurveFamily::Contemporary => tempo_bpm / 4.0,
            CurveFamily::Latin => tempo_bpm / 3.0,
        }
    }
}

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Marker glyph shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
}

/// A marker along the curve. `size` is the radius for circles, the side
/// length for squares, and the base width for triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub shape: MarkerShape,
    pub at: Point,
    pub size: f64,
}

/// A vertical beat guide line. `highlighted` is purely presentational:
/// true only for the current beat while playing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeatGuide {
    pub beat: u8,
    pub x: f64,
    pub highlighted: bool,
}

/// The derived, ephemeral frame handed to the renderer. Recomputed on
/// every draw, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionFrame {
    pub curve: Vec<Point>,
    pub markers: Vec<Marker>,
    pub guides: [BeatGuide; 4],
}

/// Render the motion frame for a genre id. Unknown ids fail soft.
pub fn render(genre_id: &str, tempo_bpm: f64, is_playing: bool, current_beat: u8) -> MotionFrame {
    let guides = beat_guides(is_playing, current_beat);
    match CurveFamily::from_id(genre_id) {
        Some(family) => MotionFrame {
            curve: curve_path(family, tempo_bpm),
            markers: markers(family),
            guides,
        },
        None => MotionFrame {
            curve: Vec::new(),
            markers: Vec::new(),
            guides,
        },
    }
}

/// The four fixed guides at x = beat·200 − 200.
fn beat_guides(is_playing: bool, current_beat: u8) -> [BeatGuide; 4] {
    [1u8, 2, 3, 4].map(|beat| BeatGuide {
        beat,
        x: f64::from(beat) * 200.0 - 200.0,
        highlighted: is_playing && beat == current_beat,
    })
}

/// Flatten the family's curve into a polyline.
pub fn curve_path(family: CurveFamily, tempo_bpm: f64) -> Vec<Point> {
    let d = family.deviation(tempo_bpm);
    match family {
        CurveFamily::Classical => {
            // Doubled quadratic: the second arc mirrors the first's control
            // point across the shared endpoint, dipping below the midline.
            let mut path = sample_quadratic(
                Point { x: 0.0, y: MIDLINE },
                Point { x: 200.0, y: MIDLINE - d },
                Point { x: 400.0, y: MIDLINE },
            );
            path.extend(
                sample_quadratic(
                    Point { x: 400.0, y: MIDLINE },
                    Point { x: 600.0, y: MIDLINE + d },
                    Point { x: 800.0, y: MIDLINE },
                )
                .into_iter()
                .skip(1),
            );
            path
        }
        CurveFamily::HipHop => {
            // Piecewise-linear zig-zag: peaks alternate above and below the
            // midline every 100 units, endpoints on the midline.
            let mut path = vec![Point { x: 0.0, y: MIDLINE }];
            for i in 1..8 {
                let y = if i % 2 == 1 { MIDLINE - d } else { MIDLINE + d };
                path.push(Point {
                    x: f64::from(i) * 100.0,
                    y,
                });
            }
            path.push(Point {
                x: 800.0,
                y: MIDLINE,
            });
            path
        }
        CurveFamily::Contemporary => sample_cubic(
            Point { x: 0.0, y: MIDLINE },
            Point { x: 200.0, y: MIDLINE - d },
            Point { x: 400.0, y: MIDLINE + d },
            Point { x: 800.0, y: MIDLINE },
        ),
        CurveFamily::Latin => {
            // Smooth S: two cubics, the second's first control reflecting
            // the first's second control for tangent continuity.
            let mut path = sample_cubic(
                Point { x: 0.0, y: MIDLINE },
                Point { x: 0.0, y: MIDLINE },
                Point { x: 200.0, y: MIDLINE - d },
                Point {
                    x: 400.0,
                    y: MIDLINE + d,
                },
            );
            path.extend(
                sample_cubic(
                    Point {
                        x: 400.0,
                        y: MIDLINE + d,
                    },
                    Point {
                        x: 600.0,
                        y: MIDLINE + 3.0 * d,
                    },
                    Point {
                        x: 600.0,
                        y: MIDLINE - d,
                    },
                    Point {
                        x: 800.0,
                        y: MIDLINE,
                    },
                )
                .into_iter()
                .skip(1),
            );
            path
        }
    }
}

/// Markers for a family. Positions and sizes are tempo-independent.
pub fn markers(family: CurveFamily) -> Vec<Marker> {
    match family {
        CurveFamily::Classical => [0.0, 200.0, 400.0, 600.0]
            .iter()
            .map(|&x| Marker {
                shape: MarkerShape::Circle,
                at: Point { x, y: MIDLINE },
                size: 8.0,
            })
            .collect(),
        CurveFamily::HipHop => [100.0, 300.0, 500.0, 700.0]
            .iter()
            .map(|&x| Marker {
                shape: MarkerShape::Square,
                at: Point { x, y: MIDLINE },
                size: 20.0,
            })
            .collect(),
        CurveFamily::Contemporary => [200.0, 400.0, 600.0]
            .iter()
            .map(|&x| Marker {
                shape: MarkerShape::Triangle,
                at: Point { x, y: MIDLINE },
                size: 20.0,
            })
            .collect(),
        CurveFamily::Latin => [200.0, 400.0, 600.0]
            .iter()
            .map(|&x| Marker {
                shape: MarkerShape::Circle,
                at: Point { x, y: MIDLINE },
                size: 10.0,
            })
            .collect(),
    }
}

fn sample_quadratic(p0: Point, p1: Point, p2: Point) -> Vec<Point> {
    (0..=SEGMENT_SAMPLES)
        .map(|i| {
            let t = i as f64 / SEGMENT_SAMPLES as f64;
            let u = 1.0 - t;
            Point {
                x: u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x,
                y: u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y,
            }
        })
        .collect()
}

fn sample_cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<Point> {
    (0..=SEGMENT_SAMPLES)
        .map(|i| {
            let t = i as f64 / SEGMENT_SAMPLES as f64;
            let u = 1.0 - t;
            Point {
                x: u * u * u * p0.x
                    + 3.0 * u * u * t * p1.x
                    + 3.0 * u * t * t * p2.x
                    + t * t * t * p3.x,
                y: u * u * u * p0.y
                    + 3.0 * u * u * t * p1.y
                    + 3.0 * u * t * t * p2.y
                    + t * t * t * p3.y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn from_id_covers_known_families() {
        assert_eq!(CurveFamily::from_id("classical"), Some(CurveFamily::Classical));
        assert_eq!(CurveFamily::from_id("hiphop"), Some(CurveFamily::HipHop));
        assert_eq!(
            CurveFamily::from_id("contemporary"),
            Some(CurveFamily::Contemporary)
        );
        assert_eq!(CurveFamily::from_id("latin"), Some(CurveFamily::Latin));
        assert_eq!(CurveFamily::from_id("breakdance"), None);
        assert_eq!(CurveFamily::from_id(""), None);
    }

    #[test]
    fn classical_deviation_at_120_is_60() {
        assert_approx_eq!(CurveFamily::Classical.deviation(120.0), 60.0);
    }

    #[test]
    fn deviation_scales_linearly() {
        assert_approx_eq!(CurveFamily::HipHop.deviation(120.0), 40.0);
        assert_approx_eq!(CurveFamily::Contemporary.deviation(120.0), 30.0);
        assert_approx_eq!(CurveFamily::Latin.deviation(150.0), 50.0);
        // Doubling tempo doubles deviation.
        for family in CurveFamily::ALL {
            assert_approx_eq!(family.deviation(160.0), 2.0 * family.deviation(80.0));
        }
    }

    #[test]
    fn render_is_deterministic() {
        let a = render("latin", 137.5, true, 3);
        let b = render("latin", 137.5, true, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_genre_renders_empty_curve_no_markers() {
        let frame = render("krump", 120.0, true, 2);
        assert!(frame.curve.is_empty());
        assert!(frame.markers.is_empty());
        // Guides are fixed chrome and survive the lookup miss.
        assert_eq!(frame.guides.len(), 4);
    }

    #[test]
    fn guides_at_fixed_positions() {
        let frame = render("classical", 120.0, false, 1);
        let xs: Vec<f64> = frame.guides.iter().map(|g| g.x).collect();
        assert_eq!(xs, [0.0, 200.0, 400.0, 600.0]);
    }

    #[test]
    fn guide_highlight_follows_beat_only_while_playing() {
        let playing = render("classical", 120.0, true, 3);
        let lit: Vec<u8> = playing
            .guides
            .iter()
            .filter(|g| g.highlighted)
            .map(|g| g.beat)
            .collect();
        assert_eq!(lit, [3]);

        let stopped = render("classical", 120.0, false, 3);
        assert!(stopped.guides.iter().all(|g| !g.highlighted));
    }

    #[test]
    fn classical_curve_spans_canvas_and_peaks_at_quarter() {
        let path = curve_path(CurveFamily::Classical, 120.0);
        assert_approx_eq!(path.first().unwrap().x, 0.0);
        assert_approx_eq!(path.last().unwrap().x, CANVAS_WIDTH);
        assert_approx_eq!(path.first().unwrap().y, MIDLINE);
        // Quadratic apex at the segment midpoint: MIDLINE - deviation/2.
        let min_y = path.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        assert_approx_eq!(min_y, MIDLINE - 30.0, 1e-6);
    }

    #[test]
    fn hiphop_curve_is_sharp_zigzag() {
        let path = curve_path(CurveFamily::HipHop, 120.0);
        assert_eq!(path.len(), 9);
        assert_approx_eq!(path[1].y, MIDLINE - 40.0);
        assert_approx_eq!(path[2].y, MIDLINE + 40.0);
        assert_approx_eq!(path[8].y, MIDLINE);
    }

    #[test]
    fn latin_curve_is_continuous() {
        let path = curve_path(CurveFamily::Latin, 150.0);
        for pair in path.windows(2) {
            assert!(pair[1].x >= pair[0].x - 1e-9, "x must be non-decreasing");
            assert!((pair[1].y - pair[0].y).abs() < 25.0, "no jumps");
        }
    }

    #[test]
    fn marker_shapes_and_counts_per_family() {
        let classical = markers(CurveFamily::Classical);
        assert_eq!(classical.len(), 4);
        assert!(classical.iter().all(|m| m.shape == MarkerShape::Circle));
        assert_approx_eq!(classical[0].size, 8.0);

        let hiphop = markers(CurveFamily::HipHop);
        assert_eq!(hiphop.len(), 4);
        assert!(hiphop.iter().all(|m| m.shape == MarkerShape::Square));

        let contemporary = markers(CurveFamily::Contemporary);
        assert_eq!(contemporary.len(), 3);
        assert!(contemporary.iter().all(|m| m.shape == MarkerShape::Triangle));

        let latin = markers(CurveFamily::Latin);
        assert_eq!(latin.len(), 3);
        assert!(latin.iter().all(|m| m.shape == MarkerShape::Circle));
        // Latin circles are larger than classical's.
        assert!(latin[0].size > classical[0].size);
    }

    #[test]
    fn curves_stay_on_canvas_at_max_tempo() {
        for family in CurveFamily::ALL {
            for point in curve_path(family, 180.0) {
                assert!((0.0..=CANVAS_WIDTH).contains(&point.x));
                assert!(
                    (0.0..=CANVAS_HEIGHT).contains(&point.y),
                    "{family:?} leaves canvas at y={}",
                    point.y
                );
            }
        }
    }
}
