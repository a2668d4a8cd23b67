use hops_core::{OccupancyGrid, Point, Range};

/// The surface a hopper moves over: which cells exist and which may be
/// landed on.
pub trait Terrain {
    /// Every point the hopper may occupy lies in this range.
    fn bounds(&self) -> Range;

    /// Whether the hopper may land on `p`. Must return `false` for points
    /// outside [`bounds`](Self::bounds).
    fn is_free(&self, p: Point) -> bool;
}

impl Terrain for OccupancyGrid {
    #[inline]
    fn bounds(&self) -> Range {
        OccupancyGrid::bounds(self)
    }

    #[inline]
    fn is_free(&self, p: Point) -> bool {
        OccupancyGrid::is_free(self, p)
    }
}

impl<T: Terrain + ?Sized> Terrain for &T {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn is_free(&self, p: Point) -> bool {
        (**self).is_free(p)
    }
}
