use crate::foundation::core::{Dimensions, Point, Rect};
use crate::foundation::error::{PlanError, PlanResult};

/// Inputs to geometry resolution. Percentages are in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometryInput {
    /// Output frame size in pixels.
    pub frame: Dimensions,
    /// Natural (unscaled) piece size in pixels.
    pub piece: Dimensions,
    /// Multiplier applied to the piece before placement.
    pub piece_scale: f64,
    /// Percent of frame height excluded from the top of the travel region.
    pub margin_top: f64,
}

/// Top-left placement rectangle for the moving piece.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TravelBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl TravelBounds {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Containment check with an absolute tolerance.
    pub fn contains(&self, x: f64, y: f64, tolerance: f64) -> bool {
        x >= self.x_min - tolerance
            && x <= self.x_max + tolerance
            && y >= self.y_min - tolerance
            && y <= self.y_max + tolerance
    }

    /// Shrink each side by `fraction` of the corresponding extent.
    pub fn inset(&self, fraction: f64) -> Self {
        let f = fraction.clamp(0.0, 0.5);
        let dx = self.width() * f;
        let dy = self.height() * f;
        Self {
            x_min: self.x_min + dx,
            x_max: self.x_max - dx,
            y_min: self.y_min + dy,
            y_max: self.y_max - dy,
        }
    }
}

/// Resolved placement data for one planning run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    pub frame: Dimensions,
    /// Piece size after `piece_scale`.
    pub piece: Dimensions,
    pub travel: TravelBounds,
    /// Frame-centered top-left position used for every alignment.
    pub center: Point,
}

/// Compute travel bounds and the alignment center.
pub fn resolve_geometry(input: &GeometryInput) -> PlanResult<Geometry> {
    if !input.frame.is_positive() {
        return Err(PlanError::geometry(format!(
            "frame dimensions must be > 0, got {}x{}",
            input.frame.width, input.frame.height
        )));
    }
    if !input.piece.is_positive() {
        return Err(PlanError::geometry(format!(
            "piece dimensions must be > 0, got {}x{}",
            input.piece.width, input.piece.height
        )));
    }
    if !(input.piece_scale.is_finite() && input.piece_scale > 0.0) {
        return Err(PlanError::geometry("piece_scale must be > 0"));
    }
    if !(0.0..100.0).contains(&input.margin_top) {
        return Err(PlanError::geometry(format!(
            "margin_top must be in [0, 100), got {}",
            input.margin_top
        )));
    }

    let piece = input.piece.scaled(input.piece_scale);
    if piece.width > input.frame.width || piece.height > input.frame.height {
        return Err(PlanError::geometry(format!(
            "scaled piece {}x{} exceeds frame {}x{}",
            piece.width, piece.height, input.frame.width, input.frame.height
        )));
    }

    let travel = TravelBounds {
        x_min: 0.0,
        x_max: input.frame.width - piece.width,
        y_min: input.frame.height * input.margin_top / 100.0,
        y_max: input.frame.height - piece.height,
    };
    if travel.height() <= 0.0 {
        return Err(PlanError::geometry(format!(
            "margin_top {}% leaves no vertical travel (y range {}..{})",
            input.margin_top, travel.y_min, travel.y_max
        )));
    }

    let center = Point::new(
        (input.frame.width - piece.width) / 2.0,
        (input.frame.height - piece.height) / 2.0,
    );

    Ok(Geometry {
        frame: input.frame,
        piece,
        travel,
        center,
    })
}

/// Fit the full source image into the frame so it covers at most `coverage` percent of
/// each frame dimension, preserving aspect ratio, and center it.
pub fn place_source_image(frame: Dimensions, image: Dimensions, coverage: f64) -> PlanResult<Rect> {
    if !frame.is_positive() || !image.is_positive() {
        return Err(PlanError::geometry(
            "frame and source image dimensions must be > 0",
        ));
    }
    if !(coverage.is_finite() && coverage > 0.0 && coverage <= 100.0) {
        return Err(PlanError::geometry(format!(
            "image coverage must be in (0, 100], got {coverage}"
        )));
    }

    let max_w = frame.width * coverage / 100.0;
    let max_h = frame.height * coverage / 100.0;
    let scale = (max_w / image.width).min(max_h / image.height);
    let w = image.width * scale;
    let h = image.height * scale;
    let x = (frame.width - w) / 2.0;
    let y = (frame.height - h) / 2.0;
    Ok(Rect::new(x, y, x + w, y + h))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolver.rs"]
mod tests;
