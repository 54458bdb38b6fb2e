//! Fitted FFD lattice builder.

use thiserror::Error;

use crate::oml::WingLoft;
use crate::types::{ChordFraction, Eta, Point3, linear_edge};

use super::lattice::FfdLattice;
use super::layout::FfdStations;

/// Error type for lattice fitting.
#[derive(Debug, Error)]
pub enum FfdError {
    /// LE and TE anchor lists differ in length.
    #[error("LE/TE station count mismatch: {le} vs {te}")]
    StationCountMismatch { le: usize, te: usize },

    /// Segment list does not match the anchor count.
    #[error("{stations} anchor stations need {} segments, got {segments}", stations - 1)]
    SegmentCountMismatch { stations: usize, segments: usize },

    /// Anchor stations must advance in span.
    #[error("Span stations must be strictly increasing (stations {0} and {1})")]
    NonIncreasingSpan(usize, usize),

    /// Too few anchors or chord sections.
    #[error("Lattice needs at least 2 stations per direction, got {n_span} span x {n_chord} chord")]
    TooFewSections { n_span: usize, n_chord: usize },
}

/// Fitting margins, (chord, span, vertical) per entry.
///
/// The lattice extends past the surface by `abs + rel * local_extent` in
/// each direction; the defaults are the benchmark's values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Absolute margins in metres.
    pub abs: [f64; 3],
    /// Margins relative to the local chord / span / chord.
    pub rel: [f64; 3],
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            abs: [0.01, 0.005, 0.05],
            rel: [0.015, 0.0035, 0.01],
        }
    }
}

/// Fit an FFD lattice to the loft.
///
/// Spanwise control sections are sampled along the LE/TE anchor polylines
/// with the per-segment cell counts; chordwise sections run LE to TE with
/// the chord margins applied; the two vertical planes hug the loft's
/// local upper/lower skin envelope plus the vertical margins. Every point
/// of the lofted surface ends up strictly inside the control volume.
pub fn fit_lattice(
    loft: &WingLoft,
    stations: &FfdStations,
    n_chord: usize,
    margins: Margins,
) -> Result<FfdLattice, FfdError> {
    let FfdStations { le, te, segments } = stations;

    if le.len() != te.len() {
        return Err(FfdError::StationCountMismatch {
            le: le.len(),
            te: te.len(),
        });
    }
    if le.len() < 2 || n_chord < 2 {
        return Err(FfdError::TooFewSections {
            n_span: le.len(),
            n_chord,
        });
    }
    if segments.len() != le.len() - 1 {
        return Err(FfdError::SegmentCountMismatch {
            stations: le.len(),
            segments: segments.len(),
        });
    }

    let planform = loft.planform();
    let frame = planform.frame;
    for (i, w) in le.windows(2).enumerate() {
        if frame.span(&w[1]) <= frame.span(&w[0]) {
            return Err(FfdError::NonIncreasingSpan(i, i + 1));
        }
    }

    // Span stations: chain the segments, sharing anchor endpoints
    let mut span_le = Vec::new();
    let mut span_te = Vec::new();
    for (s, &cells) in segments.iter().enumerate() {
        let edge_le = linear_edge(le[s], le[s + 1], cells + 1);
        let edge_te = linear_edge(te[s], te[s + 1], cells + 1);
        let skip = usize::from(s > 0);
        span_le.extend(edge_le.into_iter().skip(skip));
        span_te.extend(edge_te.into_iter().skip(skip));
    }
    let n_span = span_le.len();

    // Span margins on the first and last station rows
    let span_extent = frame.span(&span_le[n_span - 1]) - frame.span(&span_le[0]);
    let span_margin = margins.abs[1] + margins.rel[1] * span_extent;
    for station in [&mut span_le[0], &mut span_te[0]] {
        frame.set_span(station, frame.span(station) - span_margin);
    }
    let last = n_span - 1;
    for row in [&mut span_le, &mut span_te] {
        let value = frame.span(&row[last]) + span_margin;
        frame.set_span(&mut row[last], value);
    }

    let mut points = vec![Point3::zero(); n_chord * n_span * 2];
    let index = |i: usize, j: usize, k: usize| i + n_chord * (j + n_span * k);

    for j in 0..n_span {
        let (station_le, station_te) = (span_le[j], span_te[j]);
        let chord_dir = {
            let d = station_te - station_le;
            d * (1.0 / d.norm())
        };
        let local_chord = station_le.distance(&station_te);
        let chord_margin = margins.abs[0] + margins.rel[0] * local_chord;
        let le_ext = station_le - chord_dir * chord_margin;
        let te_ext = station_te + chord_dir * chord_margin;
        let chord_stations = linear_edge(le_ext, te_ext, n_chord);

        // The loft is queried at the wing's own spanwise/chordwise
        // fractions; the margin rows clamp back onto the wing
        let eta = (frame.span(&station_le) / planform.semi_span).clamp(0.0, 1.0);
        let wing_section = planform.section_at(Eta::new(eta));
        let twist = wing_section.twist_deg.to_radians();
        let wing_le_x = wing_section.chordwise_offset;
        let wing_chord_x = wing_section.chord * twist.cos();

        let vertical_margin = margins.abs[2] + margins.rel[2] * local_chord;

        for (i, station) in chord_stations.iter().enumerate() {
            // Envelope over the chord cell around this station
            let mut z_min = f64::INFINITY;
            let mut z_max = f64::NEG_INFINITY;
            let prev = if i > 0 { chord_stations[i - 1] } else { *station };
            let next = if i + 1 < n_chord {
                chord_stations[i + 1]
            } else {
                *station
            };
            for sample in [station.lerp(&prev, 0.5), *station, station.lerp(&next, 0.5)] {
                let cf = ((frame.chord(&sample) - wing_le_x) / wing_chord_x).clamp(0.0, 1.0);
                let (lo, up) = loft.skin_heights(Eta::new(eta), ChordFraction::new(cf));
                z_min = z_min.min(lo);
                z_max = z_max.max(up);
            }

            let mut lower = *station;
            let mut upper = *station;
            frame.set_vertical(&mut lower, z_min - vertical_margin);
            frame.set_vertical(&mut upper, z_max + vertical_margin);
            points[index(i, j, 0)] = lower;
            points[index(i, j, 1)] = upper;
        }
    }

    Ok(FfdLattice {
        n_chord,
        n_span,
        n_vertical: 2,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca4;
    use crate::ffd::{FfdLayout, FfdResolution};
    use crate::geometry::simple_transonic_wing;
    use crate::oml::WingLoft;

    fn baseline_loft() -> WingLoft {
        let geometry = simple_transonic_wing();
        let foil = naca4("0012", 151).unwrap();
        WingLoft::new(&geometry.wing, &[foil.clone(), foil]).unwrap()
    }

    fn build(layout: FfdLayout, res: FfdResolution) -> FfdLattice {
        let geometry = simple_transonic_wing();
        let loft = baseline_loft();
        let stations = layout.stations(&geometry.wing, &geometry.wingbox, res.n_span());
        fit_lattice(&loft, &stations, res.n_chord(), Margins::default()).unwrap()
    }

    #[test]
    fn test_basic_lattice_dims() {
        let lattice = build(FfdLayout::Basic, FfdResolution::Coarse);
        assert_eq!(lattice.n_span, 6);
        assert_eq!(lattice.n_chord, 8);
        assert_eq!(lattice.n_vertical, 2);
        assert_eq!(lattice.len(), 8 * 6 * 2);
    }

    #[test]
    fn test_advanced_lattice_dims() {
        let lattice = build(FfdLayout::Advanced, FfdResolution::Coarse);
        // sum([2, 1, 1, 1, 6]) + 1 spanwise sections
        assert_eq!(lattice.n_span, 12);
        assert_eq!(lattice.n_chord, 8);
    }

    #[test]
    fn test_span_stations_strictly_increasing() {
        for layout in FfdLayout::all() {
            let lattice = build(layout, FfdResolution::Medium);
            for j in 1..lattice.n_span {
                assert!(
                    lattice.point(0, j, 0).y > lattice.point(0, j - 1, 0).y,
                    "layout {:?} station {}",
                    layout,
                    j
                );
            }
        }
    }

    #[test]
    fn test_loft_embedded_in_lattice() {
        let loft = baseline_loft();
        let lattice = build(FfdLayout::Basic, FfdResolution::Fine);
        let (min, max) = lattice.extent();

        let mesh = loft
            .surface_mesh(64, 32, crate::oml::SpanSpacing::Linear)
            .unwrap();
        for p in &mesh.points {
            assert!(p.x > min.x && p.x < max.x, "x = {} outside [{}, {}]", p.x, min.x, max.x);
            assert!(p.y > min.y && p.y < max.y, "y = {} outside [{}, {}]", p.y, min.y, max.y);
            assert!(p.z > min.z && p.z < max.z, "z = {} outside [{}, {}]", p.z, min.z, max.z);
        }
    }

    #[test]
    fn test_station_vertical_extent_covers_section() {
        let loft = baseline_loft();
        let lattice = build(FfdLayout::Basic, FfdResolution::Coarse);
        // Mid-span station: lattice planes must clear the local skins
        let j = lattice.n_span / 2;
        let (min, max) = lattice.station_extent(j);
        let eta = lattice.point(0, j, 0).y / 14.0;
        let (lo, up) = loft.skin_heights(
            Eta::new(eta),
            ChordFraction::new(0.3),
        );
        assert!(min.z < lo);
        assert!(max.z > up);
    }

    #[test]
    fn test_segment_mismatch_rejected() {
        let geometry = simple_transonic_wing();
        let loft = baseline_loft();
        let mut stations = FfdLayout::Basic.stations(&geometry.wing, &geometry.wingbox, 6);
        stations.segments.push(3);
        assert!(matches!(
            fit_lattice(&loft, &stations, 8, Margins::default()),
            Err(FfdError::SegmentCountMismatch { .. })
        ));
    }
}
