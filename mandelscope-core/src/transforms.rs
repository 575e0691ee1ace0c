//! Pure viewport geometry for the UI collaborator.
//!
//! The pan/zoom/debounce state machine lives entirely outside the core;
//! these helpers take a viewport and return a fresh one, so the caller owns
//! every piece of mutable state.

use crate::points::ComplexPoint;
use crate::viewport::Viewport;

/// Zoom in (positive factor) or out (negative factor) about the viewport
/// center.
///
/// Both axes contract by `factor * extent` on each side, so the visible
/// extent scales by `1 - 2 * factor`. Factors of 0.5 or more collapse the
/// viewport into an invalid one; callers keep interactive steps small
/// (the original UI used 0.2 per wheel notch).
pub fn zoomed(viewport: &Viewport, factor: f64) -> Viewport {
    let re_diff = viewport.width() * factor;
    let im_diff = viewport.height() * factor;
    Viewport::new(
        ComplexPoint::new(viewport.from.re + re_diff, viewport.from.im + im_diff),
        ComplexPoint::new(viewport.to.re - re_diff, viewport.to.im - im_diff),
    )
}

/// Translate the viewport by fractions of its own extent.
///
/// `dx = 1.0` moves one full viewport width to the right; negative values
/// move left/down. The extent is unchanged, so panning never invalidates a
/// valid viewport.
pub fn panned(viewport: &Viewport, dx: f64, dy: f64) -> Viewport {
    let re_shift = viewport.width() * dx;
    let im_shift = viewport.height() * dy;
    Viewport::new(
        ComplexPoint::new(viewport.from.re + re_shift, viewport.from.im + im_shift),
        ComplexPoint::new(viewport.to.re + re_shift, viewport.to.im + im_shift),
    )
}

/// Widen one axis about the center so the complex-plane aspect ratio
/// matches the `width : height` pixel aspect ratio.
///
/// Always expands (never crops), so the whole requested region stays
/// visible. Returns the viewport unchanged when either pixel dimension is
/// zero.
pub fn fit_to_aspect(viewport: &Viewport, width: u32, height: u32) -> Viewport {
    if width == 0 || height == 0 {
        return *viewport;
    }
    let pixel_aspect = f64::from(width) / f64::from(height);
    let plane_aspect = viewport.width() / viewport.height();

    if plane_aspect < pixel_aspect {
        // Pixel grid is wider than the plane region: widen the real axis.
        let target_width = viewport.height() * pixel_aspect;
        let grow = (target_width - viewport.width()) / 2.0;
        Viewport::new(
            ComplexPoint::new(viewport.from.re - grow, viewport.from.im),
            ComplexPoint::new(viewport.to.re + grow, viewport.to.im),
        )
    } else {
        let target_height = viewport.width() / pixel_aspect;
        let grow = (target_height - viewport.height()) / 2.0;
        Viewport::new(
            ComplexPoint::new(viewport.from.re, viewport.from.im - grow),
            ComplexPoint::new(viewport.to.re, viewport.to.im + grow),
        )
    }
}

/// Rescale the viewport about its center after the pixel grid changed size,
/// keeping the complex-plane scale per pixel constant.
///
/// Growing the window reveals more of the plane instead of stretching the
/// image. Returns the viewport unchanged when any dimension is zero.
pub fn resized(viewport: &Viewport, old_size: (u32, u32), new_size: (u32, u32)) -> Viewport {
    let (old_w, old_h) = old_size;
    let (new_w, new_h) = new_size;
    if old_w == 0 || old_h == 0 || new_w == 0 || new_h == 0 {
        return *viewport;
    }

    let re_factor = f64::from(new_w) / f64::from(old_w);
    let im_factor = f64::from(new_h) / f64::from(old_h);
    let re_grow = (viewport.width() * re_factor - viewport.width()) / 2.0;
    let im_grow = (viewport.height() * im_factor - viewport.height()) / 2.0;
    Viewport::new(
        ComplexPoint::new(viewport.from.re - re_grow, viewport.from.im - im_grow),
        ComplexPoint::new(viewport.to.re + re_grow, viewport.to.im + im_grow),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(vp: &Viewport) -> (f64, f64) {
        (
            (vp.from.re + vp.to.re) / 2.0,
            (vp.from.im + vp.to.im) / 2.0,
        )
    }

    #[test]
    fn zoom_in_contracts_extent_about_center() {
        let vp = Viewport::home();
        let zoomed_in = zoomed(&vp, 0.2);

        assert!((zoomed_in.width() - vp.width() * 0.6).abs() < 1e-12);
        assert!((zoomed_in.height() - vp.height() * 0.6).abs() < 1e-12);
        let (cx, cy) = center(&vp);
        let (zx, zy) = center(&zoomed_in);
        assert!((cx - zx).abs() < 1e-12);
        assert!((cy - zy).abs() < 1e-12);
    }

    #[test]
    fn zoom_out_expands_extent() {
        let vp = Viewport::home();
        let zoomed_out = zoomed(&vp, -0.2);
        assert!((zoomed_out.width() - vp.width() * 1.4).abs() < 1e-12);
        assert!(zoomed_out.is_valid());
    }

    #[test]
    fn pan_translates_without_changing_extent() {
        let vp = Viewport::home();
        let moved = panned(&vp, 0.5, -0.25);

        assert!((moved.width() - vp.width()).abs() < 1e-12);
        assert!((moved.height() - vp.height()).abs() < 1e-12);
        assert!((moved.from.re - (vp.from.re + vp.width() * 0.5)).abs() < 1e-12);
        assert!((moved.from.im - (vp.from.im - vp.height() * 0.25)).abs() < 1e-12);
    }

    #[test]
    fn pan_round_trip_returns_home() {
        let vp = Viewport::home();
        let back = panned(&panned(&vp, 0.3, 0.7), -0.3, -0.7);
        assert!((back.from.re - vp.from.re).abs() < 1e-12);
        assert!((back.to.im - vp.to.im).abs() < 1e-12);
    }

    #[test]
    fn fit_widens_real_axis_for_landscape_window() {
        let vp = Viewport::new(ComplexPoint::new(-1.0, -1.0), ComplexPoint::new(1.0, 1.0));
        let fitted = fit_to_aspect(&vp, 200, 100);

        assert!((fitted.width() / fitted.height() - 2.0).abs() < 1e-12);
        // Imaginary axis untouched, real axis grown symmetrically.
        assert_eq!(fitted.from.im, -1.0);
        assert_eq!(fitted.to.im, 1.0);
        assert!((fitted.from.re + 2.0).abs() < 1e-12);
        assert!((fitted.to.re - 2.0).abs() < 1e-12);
    }

    #[test]
    fn fit_widens_imaginary_axis_for_portrait_window() {
        let vp = Viewport::new(ComplexPoint::new(-1.0, -1.0), ComplexPoint::new(1.0, 1.0));
        let fitted = fit_to_aspect(&vp, 100, 200);

        assert!((fitted.width() / fitted.height() - 0.5).abs() < 1e-12);
        assert_eq!(fitted.from.re, -1.0);
        assert_eq!(fitted.to.re, 1.0);
    }

    #[test]
    fn fit_with_matching_aspect_is_identity() {
        let vp = Viewport::new(ComplexPoint::new(-1.0, -1.0), ComplexPoint::new(1.0, 1.0));
        let fitted = fit_to_aspect(&vp, 300, 300);
        assert_eq!(fitted, vp);
    }

    #[test]
    fn fit_with_zero_dimension_is_identity() {
        let vp = Viewport::home();
        assert_eq!(fit_to_aspect(&vp, 0, 100), vp);
        assert_eq!(fit_to_aspect(&vp, 100, 0), vp);
    }

    #[test]
    fn resize_grows_visible_region_with_window() {
        let vp = Viewport::new(ComplexPoint::new(-1.0, -1.0), ComplexPoint::new(1.0, 1.0));
        let grown = resized(&vp, (100, 100), (200, 100));

        assert!((grown.width() - 4.0).abs() < 1e-12);
        assert!((grown.height() - 2.0).abs() < 1e-12);
        let (cx, cy) = center(&grown);
        assert!(cx.abs() < 1e-12);
        assert!(cy.abs() < 1e-12);
    }

    #[test]
    fn resize_shrinks_visible_region_with_window() {
        let vp = Viewport::new(ComplexPoint::new(-2.0, -2.0), ComplexPoint::new(2.0, 2.0));
        let shrunk = resized(&vp, (400, 400), (100, 400));
        assert!((shrunk.width() - 1.0).abs() < 1e-12);
        assert!((shrunk.height() - 4.0).abs() < 1e-12);
        assert!(shrunk.is_valid());
    }

    #[test]
    fn resize_with_zero_dimension_is_identity() {
        let vp = Viewport::home();
        assert_eq!(resized(&vp, (0, 100), (50, 50)), vp);
        assert_eq!(resized(&vp, (100, 100), (0, 50)), vp);
    }
}
