use thiserror::Error;

/// Errors surfaced by the gesture view.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// The two reference touch points coincide, so no scale factor can be
    /// derived from their spread.
    #[error("degenerate gesture geometry: reference touch points coincide")]
    DegenerateGeometry,
    /// The mount target is absent or is not an SVG element.
    #[error("gesture surface is missing or not an svg element")]
    MissingSurface,
}
