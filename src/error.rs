use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Affine range mapping is undefined when the input interval
    /// collapses to a single point. This indicates a misconfigured
    /// legend or layout, not bad sensor data, and is raised right away.
    #[error("degenerate input range: min == max")]
    DegenerateRange,

    /// The SNR legend scale spans zero width: configuration error,
    /// rejected when building the [SkyEngine].
    #[error("degenerate SNR scale: min == max")]
    DegenerateSnrScale,

    /// The C/N0 legend scale spans zero width: configuration error,
    /// rejected when building the [SkyEngine].
    #[error("degenerate C/N0 scale: min == max")]
    DegenerateCn0Scale,

    /// Indicator margin bounds span zero width. The layout system
    /// passed an empty meter: nothing can be placed on it.
    #[error("degenerate indicator margin bounds")]
    DegenerateIndicatorBounds,

    /// Text label margin bounds span zero width.
    #[error("degenerate text margin bounds")]
    DegenerateTextBounds,
}
