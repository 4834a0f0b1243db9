//! Segment construction over mapped route sections
//!
//! Every mapped point produces one segment that starts where the previous
//! segment ended. The walk begins at the origin, which is also the local
//! position of the reference point, so the first segment of a plan is
//! usually zero-length. Sequence indices start at 1 and are shared by all
//! sections of a plan.

use crate::algorithms::direction::classify_direction;
use crate::core::{LocalPoint, Segment, FIRST_SEQUENCE_INDEX};
use log::trace;
use serde::{Deserialize, Serialize};

/// How the builder treats the boundary between two sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionContinuity {
    /// The last point of a section starts the next one, so all sections
    /// draw as a single polyline
    #[default]
    Continuous,
    /// Each section starts again from the origin
    ResetPerSection,
}

/// Build segments treating all sections as one continuous polyline
pub fn build_segments(mapped_sections: &[Vec<LocalPoint>]) -> Vec<Segment> {
    SegmentBuilder::new(SectionContinuity::Continuous).build(mapped_sections)
}

/// Segment builder with a configurable section boundary policy
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentBuilder {
    continuity: SectionContinuity,
}

impl SegmentBuilder {
    pub fn new(continuity: SectionContinuity) -> Self {
        Self { continuity }
    }

    pub fn continuity(&self) -> SectionContinuity {
        self.continuity
    }

    pub fn build(&self, mapped_sections: &[Vec<LocalPoint>]) -> Vec<Segment> {
        let capacity = mapped_sections.iter().map(Vec::len).sum();
        let mut segments = Vec::with_capacity(capacity);
        let mut last_position = LocalPoint::ORIGIN;
        let mut sequence_index = FIRST_SEQUENCE_INDEX;

        for section in mapped_sections {
            if self.continuity == SectionContinuity::ResetPerSection {
                last_position = LocalPoint::ORIGIN;
            }

            for point in section {
                let segment = Segment {
                    from: last_position,
                    to: *point,
                    direction: classify_direction(&last_position, point),
                    sequence_index,
                };
                trace!("segment {}: {} -> {} ({})", sequence_index, segment.from, segment.to, segment.direction);

                segments.push(segment);
                sequence_index += 1;
                last_position = *point;
            }
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn p(x: f32, z: f32) -> LocalPoint {
        LocalPoint::new(x, 0.0, z)
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(build_segments(&[]).is_empty());
        assert!(build_segments(&[vec![]]).is_empty());
        assert!(build_segments(&[vec![], vec![]]).is_empty());
    }

    #[test]
    fn test_first_segment_starts_at_origin() {
        let segments = build_segments(&[vec![p(0.0, 0.0), p(0.0, -10.0)]]);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].from, LocalPoint::ORIGIN);
        assert_eq!(segments[0].to, LocalPoint::ORIGIN);
        assert_eq!(segments[0].direction, Direction::Towards);
        assert_eq!(segments[1].from, LocalPoint::ORIGIN);
        assert_eq!(segments[1].to, p(0.0, -10.0));
    }

    #[test]
    fn test_continuity_across_sections() {
        let (p1, p2, p3) = (p(1.0, -1.0), p(8.0, -2.0), p(8.0, 6.0));
        let segments = build_segments(&[vec![p1, p2], vec![p3]]);

        assert_eq!(segments.len(), 3);
        let indices: Vec<u32> = segments.iter().map(|s| s.sequence_index).collect();
        assert_eq!(indices, vec![1, 2, 3]);

        assert_eq!(segments[1].from, p1);
        assert_eq!(segments[1].direction, Direction::Right);
        assert_eq!(segments[2].from, p2);
        assert_eq!(segments[2].to, p3);
        assert_eq!(segments[2].direction, Direction::Backwards);
    }

    #[test]
    fn test_reset_per_section_keeps_shared_counter() {
        let (p1, p2, p3) = (p(1.0, -1.0), p(8.0, -2.0), p(-3.0, 1.0));
        let builder = SegmentBuilder::new(SectionContinuity::ResetPerSection);

        let segments = builder.build(&[vec![p1, p2], vec![], vec![p3]]);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].sequence_index, 3);
        assert_eq!(segments[2].from, LocalPoint::ORIGIN);
        assert_eq!(segments[2].to, p3);
        assert_eq!(segments[2].direction, Direction::Left);
    }

    #[test]
    fn test_segments_chain_end_to_start() {
        let section: Vec<LocalPoint> = (0..6).map(|i| p(i as f32 * 3.0, -(i as f32) * 2.0)).collect();
        let segments = build_segments(&[section]);

        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
            assert_eq!(pair[0].sequence_index + 1, pair[1].sequence_index);
        }
    }
}
