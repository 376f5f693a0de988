//! Closed-form integration of the radial kernel along a line segment.
//!
//! The kernel centred at a pixel `p` is `(R^2 - d^2)^2` for `d < R` and zero
//! outside. Along the segment `A + t (B - A)` the shifted squared distance
//! `d^2(t) - R^2` is the quadratic `qa t^2 + qb t + qc`, so the kernel becomes
//! the square of that quadratic. Its roots bound the part of the segment inside
//! the kernel disk, and its square integrates to a degree-5 polynomial.
use glam::DVec2;

/// Coefficients of `d^2(t) - R^2` for a segment relative to a kernel centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentQuadratic {
    pub qa: f64,
    pub qb: f64,
    pub qc: f64,
}

impl SegmentQuadratic {
    /// Builds the quadratic for segment `a -> b` and a kernel of squared radius
    /// `radius_squared` centred at `center`.
    #[inline]
    pub fn new(a: DVec2, b: DVec2, center: DVec2, radius_squared: f64) -> Self {
        let d = b - a;
        let r = a - center;
        Self {
            qa: d.length_squared(),
            qb: 2.0 * d.dot(r),
            qc: r.length_squared() - radius_squared,
        }
    }

    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.qb * self.qb - 4.0 * self.qa * self.qc
    }

    /// Parameter interval `[t1, t2]` where the segment's line is inside the
    /// kernel disk, or `None` if it misses or the input is degenerate.
    #[inline]
    pub fn crossing_interval(&self) -> Option<(f64, f64)> {
        if self.qa.is_nan() || self.qa <= 0.0 {
            return None;
        }
        let disc = self.discriminant();
        if !disc.is_finite() || disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let t1 = (-self.qb - root) / (2.0 * self.qa);
        let t2 = (-self.qb + root) / (2.0 * self.qa);
        Some((t1, t2))
    }

    /// Antiderivative of `(qa t^2 + qb t + qc)^2`, in Horner form.
    #[inline]
    pub fn antiderivative(&self, t: f64) -> f64 {
        let Self { qa, qb, qc } = *self;
        t * (t
            * (t * (t * (t * qa * qa / 5.0 + qa * qb / 2.0) + (2.0 * qa * qc + qb * qb) / 3.0)
                + qb * qc)
            + qc * qc)
    }
}

/// Kernel of a fixed radius, integrated along segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentKernel {
    radius_squared: f64,
    normalization: f64,
}

impl SegmentKernel {
    /// A radius whose fifth power underflows behaves like a zero radius.
    pub fn new(radius: f64) -> Self {
        let normalization = if radius.is_finite() && radius > 0.0 {
            let n = 1.0 / radius.powi(5);
            if n.is_finite() {
                n
            } else {
                0.0
            }
        } else {
            0.0
        };
        Self {
            radius_squared: radius * radius,
            normalization,
        }
    }

    /// Integral of the kernel centred at `center` along segment `a -> b`.
    ///
    /// The integral is taken over `t` on the part of `[0, 1]` inside the
    /// kernel disk, divided by `R^5` and scaled by the segment length.
    /// Misses, zero radius and zero-length segments contribute `0.0`.
    pub fn contribution(&self, a: DVec2, b: DVec2, center: DVec2) -> f64 {
        if self.normalization == 0.0 {
            return 0.0;
        }

        let quad = SegmentQuadratic::new(a, b, center, self.radius_squared);
        let Some((t1, t2)) = quad.crossing_interval() else {
            return 0.0;
        };
        if t2 <= 0.0 || t1 >= 1.0 {
            return 0.0;
        }

        let t1 = t1.max(0.0);
        let t2 = t2.min(1.0);
        let integral = (quad.antiderivative(t2) - quad.antiderivative(t1)).max(0.0);

        let value = integral * self.normalization * quad.qa.sqrt();
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}
