use thiserror::Error;

/// Top-level error type for coordgeo.
#[derive(Debug, Error)]
pub enum CoordGeoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Mathematically undefined inputs.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("cannot evaluate vertical line at x = {x}")]
    VerticalLine { x: f64 },

    #[error("cannot evaluate horizontal line at y = {y}")]
    HorizontalLine { y: f64 },

    #[error("value {value} lies between the hyperbola branches")]
    BetweenBranches { value: f64 },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Operations that do not apply to the current shape state.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("no tangent exists: point lies inside the circle")]
    PointInsideCircle,

    #[error("point is not on the {curve}")]
    PointNotOnCurve { curve: &'static str },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Shapes that cannot be built from the given parameters.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("points are collinear, a triangle is not possible")]
    Collinear,

    #[error("{parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("leading coefficient must be non-zero")]
    ZeroLeadingCoefficient,

    #[error("semi-minor axis {b} exceeds semi-major axis {a}")]
    MinorExceedsMajor { a: f64, b: f64 },
}

/// Convenience type alias for results using [`CoordGeoError`].
pub type Result<T> = std::result::Result<T, CoordGeoError>;
