use serde::Serialize;
use thiserror::Error;

/// Number of distinct highlight shapes available per series.
pub const MAX_TAGS: usize = 4;

/// Glyph used to draw a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Ordinary, untagged point.
    #[default]
    Dot,
    Pyramid,
    Circle,
    Square,
    Cross,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Dot => "dot",
            Shape::Pyramid => "pyramid",
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Cross => "cross",
        }
    }
}

/// Raised when a series asks for more highlighted points than there are shapes.
///
/// This is recoverable: the point is drawn with [`Shape::Dot`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Tag rank {rank} requested, but at most 4 points can be tagged per series")]
pub struct TooManyTags {
    pub rank: usize,
}

/// Shape for the `rank`-th tagged point of a series.
pub fn shape_for(rank: usize) -> Result<Shape, TooManyTags> {
    match rank {
        0 => Ok(Shape::Pyramid),
        1 => Ok(Shape::Circle),
        2 => Ok(Shape::Square),
        3 => Ok(Shape::Cross),
        _ => Err(TooManyTags { rank }),
    }
}

/// Hands out highlight shapes in order for one series.
///
/// Every series owns its own tagger, so ranks never leak between series.
#[derive(Debug, Clone, Default)]
pub struct ShapeTagger {
    tagged: usize,
}

impl ShapeTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the next rank. The rank counter advances even when the request fails.
    pub fn next_tag(&mut self) -> Result<(usize, Shape), TooManyTags> {
        let rank = self.tagged;
        self.tagged += 1;
        shape_for(rank).map(|shape| (rank, shape))
    }

    /// Number of tags requested so far, including rejected ones.
    pub fn requested(&self) -> usize {
        self.tagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn first_four_ranks_have_distinct_shapes() {
        let shapes: HashSet<Shape> = (0..MAX_TAGS).map(|r| shape_for(r).unwrap()).collect();
        assert_eq!(shapes.len(), MAX_TAGS);
        assert!(!shapes.contains(&Shape::Dot));
    }

    #[test]
    fn shape_for_follows_assignment_order() {
        assert_eq!(shape_for(0), Ok(Shape::Pyramid));
        assert_eq!(shape_for(1), Ok(Shape::Circle));
        assert_eq!(shape_for(2), Ok(Shape::Square));
        assert_eq!(shape_for(3), Ok(Shape::Cross));
    }

    #[test]
    fn rank_beyond_limit_is_rejected() {
        assert_eq!(shape_for(4), Err(TooManyTags { rank: 4 }));
        assert_eq!(shape_for(17), Err(TooManyTags { rank: 17 }));
    }

    #[test]
    fn fifth_tag_fails_without_disturbing_earlier_tags() {
        let mut tagger = ShapeTagger::new();
        let first_four: Vec<(usize, Shape)> =
            (0..4).map(|_| tagger.next_tag().unwrap()).collect();

        let fifth = tagger.next_tag();
        assert!(matches!(fifth, Err(TooManyTags { rank: 4 })));

        let ranks: Vec<usize> = first_four.iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        let shapes: HashSet<Shape> = first_four.iter().map(|(_, s)| *s).collect();
        assert_eq!(shapes.len(), 4);
        assert_eq!(tagger.requested(), 5);
    }

    #[test]
    fn default_shape_is_dot() {
        assert_eq!(Shape::default(), Shape::Dot);
        assert_eq!(Shape::Dot.as_str(), "dot");
    }
}
