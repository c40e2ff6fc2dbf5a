/// An evaluated point: solver variable and its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Point {
    pub(super) x: f64,
    pub(super) residual: f64,
}

impl Point {
    pub(super) fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }
}
