//! Closed-form height field of the plateau.
//!
//! PARITY: Landmarks are expected to align with the desert seams, so both formulas
//! below must keep the exact operation order, any reordering changes the floor on some
//! columns.


/// Raw dune noise at the given column, roughly in `[-3, 3]`.
#[inline]
pub fn noise(x: i32, z: i32) -> f64 {
    let x = x as f64;
    let z = z as f64;
    (x * 0.05).sin() * (z * 0.05).cos() * 2.0 + (x * 0.1 + z * 0.1).sin()
}


/// The height field, parametrized by the x coordinate of the western river bank where
/// the desert rise starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightField {
    nile_edge: i32,
}

impl HeightField {

    #[inline]
    pub fn new(nile_edge: i32) -> Self {
        Self { nile_edge }
    }

    #[inline]
    pub fn nile_edge(&self) -> i32 {
        self.nile_edge
    }

    /// Base terrain elevation of a column.
    #[inline]
    pub fn elevation(&self, x: i32, z: i32) -> i32 {
        noise(x, z).floor() as i32
    }

    /// Ground level of the desert, the dune noise amplified and blended with a linear
    /// slope rising westward from the river. Used by the desert sand, the pyramids and
    /// the causeway.
    #[inline]
    pub fn desert_rise(&self, x: i32, z: i32) -> i32 {
        (noise(x, z) * 1.5 + (self.nile_edge - x) as f64 * 0.1).floor() as i32
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn origin() {
        let field = HeightField::new(30);
        assert_eq!(noise(0, 0), 0.0);
        assert_eq!(field.elevation(0, 0), 0);
        assert_eq!(field.desert_rise(0, 0), 3);
    }

    #[test]
    fn stateless() {
        let field = HeightField::new(30);
        for x in -70..70 {
            for z in (-50..50).step_by(7) {
                assert_eq!(field.elevation(x, z), field.elevation(x, z));
                assert_eq!(field.desert_rise(x, z), field.desert_rise(x, z));
            }
        }
    }

    #[test]
    fn bounded() {
        let field = HeightField::new(30);
        for x in -70..70 {
            for z in -50..50 {
                assert!((-3..=3).contains(&field.elevation(x, z)));
            }
        }
    }

    #[test]
    fn desert_rises_westward() {
        // The slope dominates the noise over long distances.
        let field = HeightField::new(30);
        assert!(field.desert_rise(-70, 0) > field.desert_rise(30, 0));
        assert_eq!(field.desert_rise(-70, -50), 9);
    }

    #[test]
    fn flat_slope_at_the_edge() {
        let field = HeightField::new(-12);
        assert_eq!(field.nile_edge(), -12);
        for z in -50..50 {
            assert_eq!(field.desert_rise(-12, z), (noise(-12, z) * 1.5).floor() as i32);
        }
    }

}
